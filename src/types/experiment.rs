// Copyright 2026, Faultline contributors
// SPDX-License-Identifier: Apache-2.0
use kube::CustomResource;
use serde::{Deserialize, Serialize};

/// A chaos experiment targeting a workload in the cluster
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, schemars::JsonSchema)]
#[kube(group = "faultline.dev", version = "v1alpha1", kind = "ChaosExperiment")]
#[kube(namespaced)]
#[kube(status = "ChaosExperimentStatus")]
#[serde(rename_all = "camelCase")]
pub struct ChaosExperimentSpec {
    /// Workload the fault is injected into
    pub target: TargetRef,
    /// Fault to inject, e.g. "pod-delete" or "network-latency"
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paused: Option<bool>,
}

#[derive(Serialize, Deserialize, Clone, Debug, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TargetRef {
    pub kind: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl ChaosExperiment {
    /// Check if this experiment has been paused in its spec
    pub fn is_paused(&self) -> bool {
        self.spec.paused.unwrap_or(false)
    }

    /// Check if the experiment is currently injecting faults
    pub fn is_running(&self) -> bool {
        self.status
            .as_ref()
            .is_some_and(|s| s.phase == ExperimentPhase::Running)
    }

    /// Human-readable "Kind/name" form of the target
    pub fn target_display(&self) -> String {
        format!("{}/{}", self.spec.target.kind, self.spec.target.name)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChaosExperimentStatus {
    pub phase: ExperimentPhase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<Condition>>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, schemars::JsonSchema)]
pub enum ExperimentPhase {
    #[default]
    Pending,
    Running,
    Completed,
    Failed,
}

#[derive(Serialize, Deserialize, Clone, Debug, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(rename = "type")]
    pub condition_type: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
