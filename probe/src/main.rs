/*
Copyright 2026 Confidential Containers Contributors.

SPDX-License-Identifier: Apache-2.0
*/

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use clap::Parser;
use kube::Client;
use probe::server::start as start_probe_server;
use probe::*;
use tracing::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ProbeConfig::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("using port: {}", config.port);
    info!("using runtime class: {}", config.runtime_class_name());

    // the probe cannot answer anything without a cluster client
    let client = Client::try_default()
        .await
        .expect("failed to create kube Client");

    let gate = Arc::new(ReadinessGate::from_config(
        &config,
        KubePodLister::new(client),
    ));

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.port));
    if let Err(error) = start_probe_server(addr, gate).await {
        error!("probe server failed: {error:?}");
        std::process::exit(1);
    }

    info!("Exiting...");
    Ok(())
}
