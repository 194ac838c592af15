/*
Copyright 2026 Confidential Containers Contributors.

SPDX-License-Identifier: Apache-2.0
*/

use std::fmt;

use k8s_openapi::api::core::v1::Pod;
use tracing::*;

use crate::{Error, Result};

/// Lifecycle phase of a pod, as reported in `status.phase`.
///
/// A value outside the Kubernetes phase set is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PodPhase {
    Pending,
    Running,
    Succeeded,
    Failed,
    Unknown,
    Other(String),
}

impl From<&str> for PodPhase {
    fn from(phase: &str) -> Self {
        match phase {
            "Pending" => PodPhase::Pending,
            "Running" => PodPhase::Running,
            "Succeeded" => PodPhase::Succeeded,
            "Failed" => PodPhase::Failed,
            "Unknown" => PodPhase::Unknown,
            other => PodPhase::Other(other.to_string()),
        }
    }
}

impl fmt::Display for PodPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phase = match self {
            PodPhase::Pending => "Pending",
            PodPhase::Running => "Running",
            PodPhase::Succeeded => "Succeeded",
            PodPhase::Failed => "Failed",
            PodPhase::Unknown => "Unknown",
            PodPhase::Other(phase) => phase.as_str(),
        };
        f.write_str(phase)
    }
}

/// The parts of a pod the readiness check looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodRecord {
    pub name: String,
    pub node_name: Option<String>,
    pub runtime_class_name: Option<String>,
    pub phase: PodPhase,
}

impl From<&Pod> for PodRecord {
    fn from(pod: &Pod) -> Self {
        let spec = pod.spec.as_ref();
        PodRecord {
            name: pod.metadata.name.clone().unwrap_or_default(),
            node_name: spec.and_then(|s| s.node_name.clone()),
            runtime_class_name: spec.and_then(|s| s.runtime_class_name.clone()),
            // a pod without a reported phase has not been observed by the
            // kubelet yet
            phase: pod
                .status
                .as_ref()
                .and_then(|s| s.phase.as_deref())
                .map(PodPhase::from)
                .unwrap_or(PodPhase::Unknown),
        }
    }
}

/// Splits pods into peer pods, which run under the configured runtime class,
/// and standard pods, which are ignored.
#[derive(Debug, Clone)]
pub struct PeerPodClassifier {
    runtime_class_name: String,
}

impl PeerPodClassifier {
    pub fn new(runtime_class_name: impl Into<String>) -> Self {
        Self {
            runtime_class_name: runtime_class_name.into(),
        }
    }

    pub fn runtime_class_name(&self) -> &str {
        &self.runtime_class_name
    }

    pub fn is_peer_pod(&self, pod: &PodRecord) -> bool {
        pod.runtime_class_name.as_deref() == Some(self.runtime_class_name.as_str())
    }

    /// Requires every peer pod to be `Running`, in the order given. Stops at
    /// the first peer pod in any other phase and reports it.
    ///
    /// Returns the number of peer pods seen.
    pub fn evaluate(&self, pods: &[PodRecord]) -> Result<usize> {
        let mut peer_pods = 0;
        for pod in pods {
            if !self.is_peer_pod(pod) {
                debug!("ignored standard pod: {}", pod.name);
                continue;
            }

            debug!("dealing with PeerPod: {}, in phase: {}", pod.name, pod.phase);
            if pod.phase != PodPhase::Running {
                return Err(Error::PeerPodNotReady {
                    name: pod.name.clone(),
                    phase: pod.phase.clone(),
                });
            }
            peer_pods += 1;
        }

        Ok(peer_pods)
    }
}
