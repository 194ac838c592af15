/*
Copyright 2026 Confidential Containers Contributors.

SPDX-License-Identifier: Apache-2.0
*/

//! Builds the `#cloud-config` user data handed to peer-pod virtual machines.
//!
//! See <https://cloudinit.readthedocs.io/en/latest/topics/format.html#cloud-config-data>.

use std::fs;
use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// Where the host keeps the container registry auth file read by
/// [`WriteFile::authfile_from_path`].
pub const DEFAULT_AUTHFILE_SRC_PATH: &str = "/root/containers/auth.json";

// Fixed path read by the offline filesystem key broker client in the guest.
pub const DEFAULT_AUTHFILE_DST_PATH: &str = "/etc/aa-offline_fs_kbc-resources.json";

// Largest auth file accepted, in bytes.
pub const DEFAULT_AUTHFILE_LIMIT: usize = 12288;

// Resource id under which the registry credentials are published.
pub const CREDENTIAL_RESOURCE_ID: &str = "default/credential/test";

const CLOUD_INIT_HEADER: &str = "#cloud-config\n";

#[derive(Error, Debug)]
pub enum Error {
    #[error("unable to encode config, cause: {0}")]
    Encode(#[from] serde_yaml::Error),
    #[error("unable to read auth file {}, cause: {source}", .path.display())]
    ReadAuthfile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("auth file is {size} bytes, exceeds the limit of {limit} bytes")]
    AuthfileTooLarge { size: usize, limit: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub trait CloudConfigGenerator {
    fn generate(&self) -> Result<String>;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CloudConfig {
    pub write_files: Vec<WriteFile>,
}

/// One entry of the `write_files` module.
///
/// See <https://cloudinit.readthedocs.io/en/latest/topics/modules.html#write-files>.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WriteFile {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub append: Option<String>,
}

impl WriteFile {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn permissions(mut self, permissions: impl Into<String>) -> Self {
        self.permissions = Some(permissions.into());
        self
    }

    pub fn encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = Some(encoding.into());
        self
    }

    pub fn append(mut self, append: impl Into<String>) -> Self {
        self.append = Some(append.into());
        self
    }

    /// Places registry credentials where the guest's key broker client
    /// expects them, converted to its resources file format.
    pub fn authfile(auth_json: &str) -> Result<Self> {
        if auth_json.len() > DEFAULT_AUTHFILE_LIMIT {
            return Err(Error::AuthfileTooLarge {
                size: auth_json.len(),
                limit: DEFAULT_AUTHFILE_LIMIT,
            });
        }
        Ok(WriteFile::new(DEFAULT_AUTHFILE_DST_PATH)
            .content(auth_json_to_resources_json(auth_json)))
    }

    /// Reads the auth file at `path`, usually [`DEFAULT_AUTHFILE_SRC_PATH`],
    /// and converts it like [`WriteFile::authfile`].
    pub fn authfile_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let auth_json = fs::read_to_string(path).map_err(|source| Error::ReadAuthfile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::authfile(&auth_json)
    }
}

impl CloudConfigGenerator for CloudConfig {
    fn generate(&self) -> Result<String> {
        let body = serde_yaml::to_string(self)?;
        Ok(format!("{CLOUD_INIT_HEADER}{body}"))
    }
}

/// Wraps a container registry auth file into a single-entry resources file.
pub fn auth_json_to_resources_json(text: &str) -> String {
    json!({ CREDENTIAL_RESOURCE_ID: STANDARD.encode(text) }).to_string()
}
