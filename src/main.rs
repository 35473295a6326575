// Copyright 2026, Faultline contributors
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use clap::Parser;
use tracing::info;

use faultline::config::Options;
use faultline::kubernetes::ClientBundle;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let options = Options::parse();

    // Resolve configuration and build all clients up front; the bundle lives
    // for the rest of the process
    let bundle = ClientBundle::bootstrap(&options).await?;
    info!(
        "Connected to cluster at {} (default namespace: {})",
        bundle.kube_config.cluster_url, bundle.kube_config.default_namespace
    );

    let version = bundle.kube_client.apiserver_version().await?;
    info!("API server version: {}.{}", version.major, version.minor);

    Ok(())
}
