use axum::{Router, routing::get, routing::put};

use crate::controllers::song::{
    add_song_handler, delete_song_handler, list_songs_handler, song_text_handler,
    update_song_handler,
};
use crate::db::Database;

pub fn song_routes() -> Router<Database> {
    Router::new()
        .route("/songs", get(list_songs_handler).post(add_song_handler))
        .route("/songs/{id}/text", get(song_text_handler))
        .route(
            "/songs/{id}",
            put(update_song_handler).delete(delete_song_handler),
        )
}
