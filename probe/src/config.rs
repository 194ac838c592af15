/*
Copyright 2026 Confidential Containers Contributors.

SPDX-License-Identifier: Apache-2.0
*/

use std::env;
use std::path::PathBuf;

use clap::Parser;

use crate::consts::*;
use crate::{Error, Result};

/// Settings of the probe process. Every flag falls back to an environment
/// variable so the agent's pod spec can configure it.
#[derive(Debug, Parser, Clone)]
#[clap(name = "peerpod-probe", about = "Startup probe for the peer-pod node agent")]
pub struct ProbeConfig {
    #[clap(short, long, env = PROBE_PORT_ENV, default_value_t = DEFAULT_PROBE_PORT)]
    pub port: u16,
    #[clap(short, long, env = PROBE_SOCKET_PATH_ENV, default_value = DEFAULT_SOCKET_PATH)]
    pub socket_path: PathBuf,
    #[clap(short, long, env = RUNTIMECLASS_NAME_ENV, default_value = DEFAULT_RUNTIMECLASS_NAME)]
    pub runtime_class_name: String,
}

impl ProbeConfig {
    /// The runtime class identifying peer pods. An empty override means the
    /// default class.
    pub fn runtime_class_name(&self) -> String {
        runtime_class_or_default(Some(&self.runtime_class_name))
    }
}

pub fn runtime_class_or_default(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => DEFAULT_RUNTIMECLASS_NAME.to_string(),
    }
}

/// Where the name of the local node comes from. Resolved on every check.
#[derive(Debug, Clone)]
pub enum NodeIdentity {
    /// Read from the named environment variable.
    Env(String),
    Fixed(String),
}

impl Default for NodeIdentity {
    fn default() -> Self {
        NodeIdentity::Env(NODE_NAME_ENV.to_string())
    }
}

impl NodeIdentity {
    pub fn resolve(&self) -> Result<String> {
        let name = match self {
            NodeIdentity::Env(var) => env::var(var).unwrap_or_default(),
            NodeIdentity::Fixed(name) => name.clone(),
        };
        if name.is_empty() {
            return Err(Error::InvalidConfigError(match self {
                NodeIdentity::Env(var) => format!("node name not set in {var}"),
                NodeIdentity::Fixed(_) => "empty node name".to_string(),
            }));
        }
        Ok(name)
    }
}

// Builds the field selector matching pods bound to the given node.
pub fn node_field_selector(node_name: &str) -> String {
    format!("spec.nodeName={node_name}")
}
