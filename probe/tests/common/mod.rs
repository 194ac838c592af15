#![allow(dead_code)]

use std::os::unix::net::UnixListener;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use probe::*;
use tempfile::TempDir;

pub enum Response {
    Pods(Vec<PodRecord>),
    Unavailable,
}

#[derive(Default)]
struct FakeState {
    response: Mutex<Option<Response>>,
    calls: AtomicUsize,
    last_node: Mutex<Option<String>>,
}

/// In-memory pod lister counting how often it is asked.
#[derive(Clone, Default)]
pub struct FakeLister {
    state: Arc<FakeState>,
}

impl FakeLister {
    pub fn with_pods(pods: Vec<PodRecord>) -> Self {
        let lister = Self::default();
        lister.respond(Response::Pods(pods));
        lister
    }

    pub fn respond(&self, response: Response) {
        *self.state.response.lock().unwrap() = Some(response);
    }

    pub fn calls(&self) -> usize {
        self.state.calls.load(Ordering::SeqCst)
    }

    pub fn last_node(&self) -> Option<String> {
        self.state.last_node.lock().unwrap().clone()
    }
}

#[async_trait]
impl PodLister for FakeLister {
    async fn list_pods_on_node(&self, node_name: &str) -> Result<Vec<PodRecord>> {
        self.state.calls.fetch_add(1, Ordering::SeqCst);
        *self.state.last_node.lock().unwrap() = Some(node_name.to_string());

        match self.state.response.lock().unwrap().as_ref() {
            Some(Response::Pods(pods)) => Ok(pods.clone()),
            Some(Response::Unavailable) | None => Err(unavailable()),
        }
    }
}

pub fn unavailable() -> Error {
    Error::KubeError(kube::Error::Api(kube::core::ErrorResponse {
        status: "Failure".to_string(),
        message: "connection refused".to_string(),
        reason: "ServiceUnavailable".to_string(),
        code: 503,
    }))
}

pub fn pod(name: &str, runtime_class: Option<&str>, phase: PodPhase) -> PodRecord {
    PodRecord {
        name: name.to_string(),
        node_name: Some("node-1".to_string()),
        runtime_class_name: runtime_class.map(str::to_string),
        phase,
    }
}

/// A listening Unix socket living in a scratch directory. Dropping it
/// removes both.
pub struct OpenSocket {
    pub path: PathBuf,
    _listener: UnixListener,
    _dir: TempDir,
}

pub fn open_socket() -> OpenSocket {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hypervisor.sock");
    let listener = UnixListener::bind(&path).unwrap();
    OpenSocket {
        path,
        _listener: listener,
        _dir: dir,
    }
}

pub fn gate(socket: impl Into<PathBuf>, lister: FakeLister) -> ReadinessGate<FakeLister> {
    ReadinessGate::new(
        SocketProber::new(socket),
        lister,
        PeerPodClassifier::new("kata-remote"),
        NodeIdentity::Fixed("node-1".to_string()),
        Arc::new(ReadinessLatch::new()),
    )
}
