use std::net::SocketAddr;

use axum::Router;
use axum::extract::State;
use axum::routing::get;
use color_eyre::Result;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::report;
use crate::system::store::SnapshotStore;

/// Binds the read-only status endpoint and spawns the serving task.
///
/// A failed bind is fatal to startup: the caller must not run the
/// sampler behind an endpoint that never came up. Returns the bound
/// address so callers (and tests binding port 0) know where it landed.
pub async fn bind_status_server(
    addr: SocketAddr,
    store: SnapshotStore,
) -> Result<(JoinHandle<()>, SocketAddr)> {
    let app = Router::new()
        .route("/sys_health", get(sys_health_handler))
        .with_state(store);

    let listener = TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;

    tracing::info!("status endpoint listening on http://{actual_addr}/sys_health");

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("status server error: {e}");
        }
    });

    Ok((handle, actual_addr))
}

/// Renders whatever the sampler last published; never waits on an
/// in-progress tick and never fails.
async fn sys_health_handler(State(store): State<SnapshotStore>) -> String {
    report::render(&store.latest())
}
