// Copyright 2026, Faultline contributors
// SPDX-License-Identifier: Apache-2.0

//! Connection configuration resolution and client construction.

pub mod client;
pub mod config;

pub use client::{ChaosClient, ClientBundle, DynamicClient};
pub use config::resolve_connection_config;
