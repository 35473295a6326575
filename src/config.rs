// Copyright 2026, Faultline contributors
// SPDX-License-Identifier: Apache-2.0
use std::path::{Path, PathBuf};

use clap::Parser;

/// Command line options for connecting to a cluster
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "faultline", about = "Chaos experiment client bootstrap")]
pub struct Options {
    /// Absolute path to a kubeconfig file. When omitted (or empty), the
    /// standard discovery rules apply, with in-cluster configuration tried
    /// first if no master URL is given either.
    #[arg(long, value_name = "PATH")]
    pub kubeconfig: Option<PathBuf>,

    /// Override for the cluster API endpoint, e.g. https://10.0.0.1:6443
    #[arg(long, value_name = "URL")]
    pub master_url: Option<String>,
}

impl Options {
    /// Kubeconfig path with the empty string treated as "not given"
    pub fn kubeconfig_path(&self) -> Option<&Path> {
        self.kubeconfig
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
    }

    /// Master URL with the empty string treated as "not given"
    pub fn master_url(&self) -> Option<&str> {
        self.master_url.as_deref().filter(|u| !u.is_empty())
    }
}
