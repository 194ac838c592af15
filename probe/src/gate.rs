/*
Copyright 2026 Confidential Containers Contributors.

SPDX-License-Identifier: Apache-2.0
*/

use std::sync::Arc;

use tracing::*;

use crate::classifier::PeerPodClassifier;
use crate::config::{NodeIdentity, ProbeConfig};
use crate::latch::ReadinessLatch;
use crate::lister::PodLister;
use crate::socket::SocketProber;
use crate::Result;

/// Combines the socket check and the peer-pod check into one verdict.
///
/// The socket is probed on every call. The peer pods are listed only until
/// one scan finds all of them `Running`; from then on the latch is set and
/// the pod check is skipped for the rest of the process lifetime.
pub struct ReadinessGate<L> {
    socket: SocketProber,
    lister: L,
    classifier: PeerPodClassifier,
    node: NodeIdentity,
    latch: Arc<ReadinessLatch>,
}

impl<L: PodLister> ReadinessGate<L> {
    pub fn new(
        socket: SocketProber,
        lister: L,
        classifier: PeerPodClassifier,
        node: NodeIdentity,
        latch: Arc<ReadinessLatch>,
    ) -> Self {
        Self {
            socket,
            lister,
            classifier,
            node,
            latch,
        }
    }

    pub fn from_config(config: &ProbeConfig, lister: L) -> Self {
        Self::new(
            SocketProber::new(&config.socket_path),
            lister,
            PeerPodClassifier::new(config.runtime_class_name()),
            NodeIdentity::default(),
            Arc::new(ReadinessLatch::new()),
        )
    }

    pub fn latch(&self) -> &ReadinessLatch {
        &self.latch
    }

    /// Returns `Ok(())` when the node is ready. Any error means not ready.
    pub async fn evaluate(&self) -> Result<()> {
        self.socket.check().await?;

        if self.latch.is_latched() {
            return Ok(());
        }

        let node_name = self.node.resolve()?;
        info!("nodeName: {}", node_name);

        let pods = self.lister.list_pods_on_node(&node_name).await?;
        let peer_pods = self.classifier.evaluate(&pods)?;

        if self.latch.set_latched() {
            info!(
                "all {} PeerPods on node {} are running, no longer checking PeerPods",
                peer_pods, node_name
            );
        }
        Ok(())
    }
}
