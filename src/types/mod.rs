// Copyright 2026, Faultline contributors
// SPDX-License-Identifier: Apache-2.0
pub mod experiment;

pub use experiment::{ChaosExperiment, ChaosExperimentSpec, ChaosExperimentStatus};
