// Copyright 2026, Faultline contributors
// SPDX-License-Identifier: Apache-2.0

//! Cluster connection configuration resolution

use std::path::Path;

use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::Config;
use tracing::{debug, warn};

use crate::error::{FaultlineError, Result};

/// Resolve the cluster connection configuration.
///
/// When neither a kubeconfig path nor a master URL is given, in-cluster
/// configuration is tried first; if that fails a diagnostic is logged and
/// resolution falls back to the standard kubeconfig discovery rules
/// (`KUBECONFIG` env, then `~/.kube/config`). An explicit path always wins
/// over discovery, and `master_url` overrides the cluster endpoint of any
/// configuration loaded from a kubeconfig. A master URL is a usable source
/// on its own: when discovery turns up no kubeconfig, the configuration is
/// built from the URL alone.
pub async fn resolve_connection_config(
    kubeconfig: Option<&Path>,
    master_url: Option<&str>,
) -> Result<Config> {
    if kubeconfig.is_none() && master_url.is_none() {
        match Config::incluster() {
            Ok(config) => {
                debug!("Using in-cluster configuration");
                return Ok(config);
            }
            Err(e) => {
                warn!(
                    "Neither --kubeconfig nor --master-url was given and in-cluster \
                     configuration is unavailable ({}), falling back to kubeconfig discovery",
                    e
                );
            }
        }
    }

    let loaded = match kubeconfig {
        Some(path) => Kubeconfig::read_from(path).map_err(|e| {
            FaultlineError::ConfigResolution(format!(
                "failed to read kubeconfig {}: {}",
                path.display(),
                e
            ))
        })?,
        None => match Kubeconfig::read() {
            Ok(loaded) => loaded,
            Err(e) => {
                if let Some(url) = master_url {
                    debug!(
                        "Kubeconfig discovery failed ({}), connecting with master URL alone",
                        e
                    );
                    return Ok(Config::new(parse_endpoint(url)?));
                }
                return Err(FaultlineError::ConfigResolution(format!(
                    "kubeconfig discovery failed: {}",
                    e
                )));
            }
        },
    };

    let mut config = Config::from_custom_kubeconfig(loaded, &KubeConfigOptions::default())
        .await
        .map_err(|e| {
            FaultlineError::ConfigResolution(format!("invalid kubeconfig contents: {}", e))
        })?;

    if let Some(url) = master_url {
        debug!("Overriding cluster endpoint with {}", url);
        config.cluster_url = parse_endpoint(url)?;
    }

    Ok(config)
}

fn parse_endpoint(url: &str) -> Result<http::Uri> {
    url.parse().map_err(|e| {
        FaultlineError::ConfigResolution(format!("invalid master URL {}: {}", url, e))
    })
}
