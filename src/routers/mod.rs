pub mod song;
pub use song::song_routes;
