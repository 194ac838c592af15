/*
Copyright 2026 Confidential Containers Contributors.

SPDX-License-Identifier: Apache-2.0
*/

// Runtime class of the pods managed by the peer-pod agent.
pub const DEFAULT_RUNTIMECLASS_NAME: &str = "kata-remote";

// Environment variable holding the name of the node the probe runs on.
pub const NODE_NAME_ENV: &str = "NODE_NAME";

// Environment variable overriding the peer-pod runtime class.
pub const RUNTIMECLASS_NAME_ENV: &str = "RUNTIMECLASS_NAME";

// Environment variable holding the port the probe listens on.
pub const PROBE_PORT_ENV: &str = "PROBE_PORT";

// Environment variable holding the path of the hypervisor socket.
pub const PROBE_SOCKET_PATH_ENV: &str = "PROBE_SOCKET_PATH";

pub const DEFAULT_PROBE_PORT: u16 = 8000;

pub const DEFAULT_SOCKET_PATH: &str = "/run/peerpod/hypervisor.sock";

// HTTP route served by the probe.
pub const STARTUP_PATH: &str = "/startup";
