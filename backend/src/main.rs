use std::net::SocketAddr;
use std::path::PathBuf;

use axum::{
    http::{HeaderValue, Method},
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::{info, Level};

mod domain;
mod rest;
mod storage;

use domain::DebtService;
use rest::AppState;
use storage::{DbConnection, DebtRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("Setting up database");
    let db = DbConnection::init().await?;
    let debt_service = DebtService::new(DebtRepository::new(db));
    let state = AppState::new(debt_service);

    // CORS setup to allow the dev frontend to make requests
    let cors = CorsLayer::new()
        .allow_origin("http://localhost:8080".parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/debts", get(rest::list_debts).post(rest::create_debt))
        .route("/debts/:id", put(rest::update_debt).delete(rest::delete_debt))
        .route("/debts/:id/toggle", post(rest::toggle_status));

    let app = Router::new()
        .nest("/api", api_routes)
        .fallback_service(ServeDir::new(PathBuf::from("../frontend/dist")))
        .layer(cors)
        .with_state(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
