use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use healthmon::server::bind_status_server;
use healthmon::system::snapshot::HealthSnapshot;
use healthmon::system::store::SnapshotStore;

async fn fetch_report(addr: std::net::SocketAddr) -> String {
    let mut stream = TcpStream::connect(addr).await.expect("connect failed");
    stream
        .write_all(b"GET /sys_health HTTP/1.0\r\nHost: localhost\r\n\r\n")
        .await
        .expect("write failed");

    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read failed");
    response
}

#[tokio::test]
async fn endpoint_serves_latest_snapshot() {
    let store = SnapshotStore::new();
    let (_task, addr) = bind_status_server("127.0.0.1:0".parse().unwrap(), store.clone())
        .await
        .expect("bind failed");

    store.publish(HealthSnapshot::new(8_000, 500, 153));

    let response = fetch_report(addr).await;
    assert!(response.starts_with("HTTP/1.0 200") || response.starts_with("HTTP/1.1 200"));
    assert!(response.contains("=== System Health Monitor ==="));
    assert!(response.contains("Total RAM: 8000 MB"));
    assert!(response.contains("Free RAM: 500 MBUsed RAM: 7500 MB"));
    assert!(response.contains("CPU Load (1 min avg): 1.53 %"));
}

#[tokio::test]
async fn endpoint_serves_zeroed_report_before_first_tick() {
    let store = SnapshotStore::new();
    let (_task, addr) = bind_status_server("127.0.0.1:0".parse().unwrap(), store)
        .await
        .expect("bind failed");

    let response = fetch_report(addr).await;
    assert!(response.contains("Total RAM: 0 MB"));
    assert!(response.contains("CPU Load (1 min avg): 0.00 %"));
}

#[tokio::test]
async fn endpoint_tracks_republished_snapshots() {
    let store = SnapshotStore::new();
    let (_task, addr) = bind_status_server("127.0.0.1:0".parse().unwrap(), store.clone())
        .await
        .expect("bind failed");

    store.publish(HealthSnapshot::new(8_000, 2_000, 50));
    assert!(fetch_report(addr).await.contains("Free RAM: 2000 MB"));

    store.publish(HealthSnapshot::new(8_000, 1_500, 75));
    assert!(fetch_report(addr).await.contains("Free RAM: 1500 MB"));
}

#[tokio::test]
async fn bind_failure_is_reported_to_the_caller() {
    let store = SnapshotStore::new();
    let (_task, addr) = bind_status_server("127.0.0.1:0".parse().unwrap(), store.clone())
        .await
        .expect("first bind failed");

    // Second bind on the same port must fail loudly, not serve broken.
    let result = bind_status_server(addr, store).await;
    assert!(result.is_err());
}
