// Copyright 2026, Faultline contributors
// SPDX-License-Identifier: Apache-2.0

//! Client construction and the bundle of ready-to-use API handles

use kube::core::{ApiResource, DynamicObject};
use kube::{Api, Client, Config};
use tracing::debug;

use crate::config::Options;
use crate::error::{ClientKind, FaultlineError, Result};
use crate::kubernetes::config::resolve_connection_config;
use crate::types::ChaosExperiment;

/// Typed client scoped to the faultline.dev/v1alpha1 API group
#[derive(Clone)]
pub struct ChaosClient {
    client: Client,
}

impl ChaosClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Experiments in a specific namespace
    pub fn namespaced(&self, namespace: &str) -> Api<ChaosExperiment> {
        Api::namespaced(self.client.clone(), namespace)
    }

    /// Experiments across all namespaces
    pub fn all(&self) -> Api<ChaosExperiment> {
        Api::all(self.client.clone())
    }
}

/// Schema-less client for arbitrary resource kinds
#[derive(Clone)]
pub struct DynamicClient {
    client: Client,
}

impl DynamicClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Handle for a namespaced resource described by `resource`
    pub fn namespaced(&self, resource: &ApiResource, namespace: &str) -> Api<DynamicObject> {
        Api::namespaced_with(self.client.clone(), namespace, resource)
    }

    /// Handle for a cluster-scoped resource, or a namespaced one across all namespaces
    pub fn all(&self, resource: &ApiResource) -> Api<DynamicObject> {
        Api::all_with(self.client.clone(), resource)
    }
}

/// All API clients plus the configuration they were built from.
///
/// Built once at process start; construction is all-or-nothing and the first
/// failing client aborts the whole bundle.
pub struct ClientBundle {
    pub kube_client: Client,
    pub chaos_client: ChaosClient,
    pub dynamic_client: DynamicClient,
    pub kube_config: Config,
}

impl ClientBundle {
    /// Construct all three clients from a resolved configuration.
    pub fn build(config: Config) -> Result<Self> {
        let kube_client = build_client(&config, ClientKind::General)?;
        let chaos_client = ChaosClient::new(build_client(&config, ClientKind::CustomResource)?);
        let dynamic_client = DynamicClient::new(build_client(&config, ClientKind::Dynamic)?);
        debug!("Client bundle built for {}", config.cluster_url);

        Ok(Self {
            kube_client,
            chaos_client,
            dynamic_client,
            kube_config: config,
        })
    }

    /// Resolve the connection configuration from `options` and build the bundle.
    pub async fn bootstrap(options: &Options) -> Result<Self> {
        let config =
            resolve_connection_config(options.kubeconfig_path(), options.master_url()).await?;
        Self::build(config)
    }
}

fn build_client(config: &Config, kind: ClientKind) -> Result<Client> {
    Client::try_from(config.clone())
        .map_err(|source| FaultlineError::ClientConstruction { kind, source })
}
