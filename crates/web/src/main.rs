use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing::info;

mod config;
mod routes;

use config::Config;

fn app() -> Router {
    Router::new()
        .route("/", get(routes::board_page))
        .route("/api/board", get(routes::board_json))
        .route("/api/pgn", get(routes::board_pgn))
        .route("/health", get(routes::health))
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = Config::from_env();

    let listener = tokio::net::TcpListener::bind(&config.addr)
        .await
        .expect("Failed to bind listener");

    info!("Server running at http://{}", config.addr);

    axum::serve(listener, app()).await.expect("Server error");
}
