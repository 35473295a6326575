// Copyright 2026, Faultline contributors
// SPDX-License-Identifier: Apache-2.0
use std::fmt;

use thiserror::Error;

/// Which of the three bundled clients failed to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientKind {
    General,
    CustomResource,
    Dynamic,
}

impl fmt::Display for ClientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientKind::General => write!(f, "general"),
            ClientKind::CustomResource => write!(f, "custom-resource"),
            ClientKind::Dynamic => write!(f, "dynamic"),
        }
    }
}

#[derive(Error, Debug)]
pub enum FaultlineError {
    #[error("no usable cluster configuration: {0}")]
    ConfigResolution(String),

    #[error("failed to construct {kind} client: {source}")]
    ClientConstruction {
        kind: ClientKind,
        #[source]
        source: kube::Error,
    },
}

pub type Result<T> = std::result::Result<T, FaultlineError>;
