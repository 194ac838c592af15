/*
Copyright 2026 Confidential Containers Contributors.

SPDX-License-Identifier: Apache-2.0
*/

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Error;
use axum::{extract::State, http::StatusCode, routing::get, Router};
use tokio::{net::TcpListener, signal};
use tracing::*;

use crate::consts::STARTUP_PATH;
use crate::gate::ReadinessGate;
use crate::lister::PodLister;

pub fn router<L: PodLister + 'static>(gate: Arc<ReadinessGate<L>>) -> Router {
    Router::new()
        .route(STARTUP_PATH, get(startup::<L>))
        .with_state(gate)
}

// Maps the gate's verdict to a status code; the body is left empty.
async fn startup<L: PodLister + 'static>(
    State(gate): State<Arc<ReadinessGate<L>>>,
) -> StatusCode {
    match gate.evaluate().await {
        Ok(()) => {
            debug!("all PeerPods standing up, PeerPods status is no longer checked");
            StatusCode::OK
        }
        Err(err @ crate::Error::SocketError { .. }) => {
            warn!("UDS not opened, because {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        }
        Err(err) => {
            warn!("not all PeerPods ready, because {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

pub async fn start<L: PodLister + 'static>(
    addr: SocketAddr,
    gate: Arc<ReadinessGate<L>>,
) -> Result<(), Error> {
    let listener = TcpListener::bind(addr).await?;
    info!("probe listening on {}", addr);

    axum::serve(listener, router(gate))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    info!("shutting down probe server");
}
