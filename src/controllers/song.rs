use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info};

use crate::controllers::METADATA_CLIENT;
use crate::controllers::lyrics::paginate_verses;
use crate::db::Database;
use crate::models::song::{ListSongsQuery, NewSong, Song, SongTextQuery};

/// Extractor rejections and validation failures all surface as 400 with
/// the same `{"error": ...}` shape as every other failure.
fn bad_request(detail: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({"error": detail.into()})),
    )
        .into_response()
}

/// GET /songs — list with optional exact-match filters and paging.
pub async fn list_songs_handler(
    State(database): State<Database>,
    params: Result<Query<ListSongsQuery>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(q) => q,
        Err(e) => return bad_request(e.body_text()),
    };
    if params.limit < 0 || params.offset < 0 {
        return bad_request("limit and offset must not be negative");
    }

    match database
        .list_songs(
            params.group.as_deref(),
            params.title.as_deref(),
            params.limit,
            params.offset,
        )
        .await
    {
        Ok(songs) => Json(songs).into_response(),
        Err(e) => {
            error!("Failed to list songs: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": "Failed to list songs"})),
            )
                .into_response()
        }
    }
}

/// POST /songs — look the song up in the external info API, then insert.
pub async fn add_song_handler(
    State(database): State<Database>,
    input: Result<Json<NewSong>, JsonRejection>,
) -> Response {
    let Json(input) = match input {
        Ok(body) => body,
        Err(e) => return bad_request(e.body_text()),
    };
    if input.group.trim().is_empty() || input.title.trim().is_empty() {
        return bad_request("group and title are required");
    }

    let detail = match METADATA_CLIENT.fetch_detail(&input.group, &input.title).await {
        Ok(d) => d,
        Err(e) => {
            error!("Music info API lookup failed: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": format!("Music info lookup failed: {}", e)})),
            )
                .into_response();
        }
    };

    match database.create_song(&input.group, &input.title, &detail).await {
        Ok(song) => {
            info!("Added song {} - {} (id {})", song.group_name, song.title, song.id);
            Json(song).into_response()
        }
        Err(e) => {
            error!("Failed to store song: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": "Failed to store song"})),
            )
                .into_response()
        }
    }
}

/// GET /songs/{id}/text — verses of the stored lyrics, one page at a time.
pub async fn song_text_handler(
    State(database): State<Database>,
    id: Result<Path<i32>, PathRejection>,
    params: Result<Query<SongTextQuery>, QueryRejection>,
) -> Response {
    let Path(id) = match id {
        Ok(p) => p,
        Err(e) => return bad_request(e.body_text()),
    };
    let Query(params) = match params {
        Ok(q) => q,
        Err(e) => return bad_request(e.body_text()),
    };
    // The original service never validated page/size; a non-positive value
    // here gets a 400 instead of an empty or nonsense slice.
    if params.page < 1 || params.size < 1 {
        return bad_request("page and size must be positive");
    }

    let song = match database.get_song(id).await {
        Ok(Some(song)) => song,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({"error": "Song not found"})),
            )
                .into_response();
        }
        Err(e) => {
            error!("Failed to fetch song {}: {}", id, e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": "Failed to fetch song"})),
            )
                .into_response();
        }
    };

    let verses = paginate_verses(&song.text, params.page as usize, params.size as usize);
    Json(verses).into_response()
}

/// PUT /songs/{id} — full-record replace; the path id wins over the body id.
pub async fn update_song_handler(
    State(database): State<Database>,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<Song>, JsonRejection>,
) -> Response {
    let Path(id) = match id {
        Ok(p) => p,
        Err(e) => return bad_request(e.body_text()),
    };
    let Json(mut song) = match body {
        Ok(b) => b,
        Err(e) => return bad_request(e.body_text()),
    };
    song.id = id;

    match database.update_song(&song).await {
        Ok(0) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": "Song not found"})),
        )
            .into_response(),
        Ok(_) => Json(song).into_response(),
        Err(e) => {
            error!("Failed to update song {}: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": "Failed to update song"})),
            )
                .into_response()
        }
    }
}

/// DELETE /songs/{id}
pub async fn delete_song_handler(
    State(database): State<Database>,
    id: Result<Path<i32>, PathRejection>,
) -> Response {
    let Path(id) = match id {
        Ok(p) => p,
        Err(e) => return bad_request(e.body_text()),
    };

    match database.delete_song(id).await {
        Ok(0) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": "Song not found"})),
        )
            .into_response(),
        Ok(_) => {
            info!("Deleted song {}", id);
            Json(serde_json::json!({"message": "Song deleted"})).into_response()
        }
        Err(e) => {
            error!("Failed to delete song {}: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": "Failed to delete song"})),
            )
                .into_response()
        }
    }
}
