mod common;

use std::io::ErrorKind;

use common::open_socket;
use probe::*;

#[tokio::test]
async fn listening_socket_passes() {
    let socket = open_socket();

    SocketProber::new(&socket.path).check().await.unwrap();
}

#[tokio::test]
async fn missing_socket_reports_path_and_cause() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.sock");

    match SocketProber::new(&path).check().await {
        Err(Error::SocketError {
            path: failed,
            source,
        }) => {
            assert_eq!(failed, path);
            assert_eq!(source.kind(), ErrorKind::NotFound);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn regular_file_is_not_a_socket() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plain");
    std::fs::write(&path, b"not a socket").unwrap();

    let err = SocketProber::new(&path).check().await.unwrap_err();

    assert!(matches!(err, Error::SocketError { .. }));
    assert!(err.to_string().contains(path.to_str().unwrap()));
}
