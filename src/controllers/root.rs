use axum::Json;
use axum::response::IntoResponse;

pub struct RootController;

impl RootController {
    pub async fn root() -> impl IntoResponse {
        Json(serde_json::json!({
            "service": "song-library",
            "version": env!("CARGO_PKG_VERSION"),
        }))
    }

    pub async fn health_check() -> impl IntoResponse {
        Json(serde_json::json!({"status": "ok"}))
    }
}
