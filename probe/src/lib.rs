/*
Copyright 2026 Confidential Containers Contributors.

SPDX-License-Identifier: Apache-2.0
*/

//! Startup probe for the peer-pod node agent.
//!
//! The probe reports ready once the local hypervisor socket accepts
//! connections and every peer pod scheduled on this node has reached the
//! `Running` phase. After the first fully successful scan the pod check is
//! latched and only the socket is probed.

use std::path::PathBuf;

use thiserror::Error;

pub mod classifier;
pub mod config;
pub mod consts;
pub mod gate;
pub mod latch;
pub mod lister;
pub mod server;
pub mod socket;

pub use classifier::{PeerPodClassifier, PodPhase, PodRecord};
pub use config::{NodeIdentity, ProbeConfig};
pub use gate::ReadinessGate;
pub use latch::ReadinessLatch;
pub use lister::{KubePodLister, PodLister};
pub use socket::SocketProber;

#[derive(Error, Debug)]
pub enum Error {
    #[error("socket {} not opened: {source}", .path.display())]
    SocketError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("kube error: {0}")]
    KubeError(#[source] kube::Error),
    #[error("PeerPod {name} is in {phase} phase")]
    PeerPodNotReady { name: String, phase: PodPhase },
    #[error("invalid configuration: `{0}`")]
    InvalidConfigError(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
