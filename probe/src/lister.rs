/*
Copyright 2026 Confidential Containers Contributors.

SPDX-License-Identifier: Apache-2.0
*/

use async_trait::async_trait;
use k8s_openapi::api::core::v1::Pod;
use kube::{
    api::{Api, ListParams},
    Client,
};
use tracing::*;

use crate::classifier::PodRecord;
use crate::config::node_field_selector;
use crate::{Error, Result};

/// Lists the pods scheduled on a node, peer pods and standard pods alike.
#[async_trait]
pub trait PodLister: Send + Sync {
    async fn list_pods_on_node(&self, node_name: &str) -> Result<Vec<PodRecord>>;
}

/// Lists pods through the Kubernetes API server.
#[derive(Clone)]
pub struct KubePodLister {
    client: Client,
}

impl KubePodLister {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PodLister for KubePodLister {
    // One list call across all namespaces, filtered server side. Only the
    // first page is read.
    async fn list_pods_on_node(&self, node_name: &str) -> Result<Vec<PodRecord>> {
        let pod_api = Api::<Pod>::all(self.client.clone());
        let selector = node_field_selector(node_name);

        let pods = pod_api
            .list(&ListParams::default().fields(&selector))
            .await
            .map_err(Error::KubeError)?;
        info!("selected pods count: {}", pods.items.len());

        Ok(pods.items.iter().map(PodRecord::from).collect())
    }
}
