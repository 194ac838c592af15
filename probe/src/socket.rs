/*
Copyright 2026 Confidential Containers Contributors.

SPDX-License-Identifier: Apache-2.0
*/

use std::path::{Path, PathBuf};

use tokio::net::UnixStream;
use tracing::*;

use crate::{Error, Result};

/// Checks that a Unix domain socket accepts connections.
#[derive(Debug, Clone)]
pub struct SocketProber {
    path: PathBuf,
}

impl SocketProber {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // Dials the socket once and drops the connection right away; only
    // connectability is checked, not the protocol behind it. A socket that
    // cannot be dialed is reported with the dial error.
    pub async fn check(&self) -> Result<()> {
        match UnixStream::connect(&self.path).await {
            Ok(stream) => {
                drop(stream);
                debug!("socket {} is open", self.path.display());
                Ok(())
            }
            Err(source) => Err(Error::SocketError {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
