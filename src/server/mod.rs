//! Static preview server for the generated site

use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::NotionPress;

/// Serve the public directory
pub async fn start(app: &NotionPress, ip: &str, port: u16) -> Result<()> {
    let serve_dir = ServeDir::new(&app.public_dir).append_index_html_on_directories(true);

    let router = Router::new()
        .fallback_service(serve_dir)
        .layer(TraceLayer::new_for_http());

    // Handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
