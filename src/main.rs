use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, fmt};

mod controllers;
mod db;
mod models;
mod routers;
mod secrets;

use crate::secrets::SECRET_MANAGER;
use controllers::RootController;
use db::Database;
use routers::song_routes;

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_target(false)
        .init();

    let database = match Database::new().await {
        Ok(db) => {
            info!("📊 Connected to PostgreSQL database");
            db
        }
        Err(e) => {
            error!("❌ Failed to connect to database: {}", e);
            panic!("Database connection required");
        }
    };

    if let Err(e) = sqlx::migrate!("./migrations").run(database.pool()).await {
        error!("❌ Failed to run database migrations: {}", e);
        panic!("Database migrations failed");
    }
    info!("📊 Database migrations completed");

    let port = SECRET_MANAGER.get("PORT");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .unwrap();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app: Router = Router::new()
        .route("/", get(RootController::root))
        .route("/health", get(RootController::health_check))
        .merge(song_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(database);

    info!("🎵 Song library listening on port {}", port);
    axum::serve(listener, app).await.unwrap();
}
