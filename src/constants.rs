// Copyright 2026, Faultline contributors
// SPDX-License-Identifier: Apache-2.0

/// API group of the ChaosExperiment custom resource
pub const API_GROUP: &str = "faultline.dev";

/// API version of the ChaosExperiment custom resource
pub const API_VERSION: &str = "v1alpha1";
