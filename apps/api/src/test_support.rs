//! Local HTTP stubs for exercising the outbound clients.

use axum::{http::StatusCode, Router};
use tokio::net::TcpListener;

/// Serves `status` and `body` for every request on an ephemeral port.
/// Returns the base URL.
pub async fn serve_fixed(status: StatusCode, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().fallback(move || async move { (status, body) });

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}
