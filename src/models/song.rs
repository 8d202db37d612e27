use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::chrono::{DateTime, Utc};

/// A stored song record. The column is `group_name` because `group` is
/// reserved in SQL; the wire format keeps the original `group` key.
#[derive(Debug, Serialize, Deserialize, Clone, FromRow)]
pub struct Song {
    // The id in a PUT body is ignored in favor of the path id, and
    // created_at is never client-writable, so both may be omitted.
    #[serde(default)]
    pub id: i32,
    #[serde(rename = "group")]
    pub group_name: String,
    pub title: String,
    #[serde(rename = "releaseDate")]
    pub release_date: String,
    pub text: String,
    pub link: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

/// Body of POST /songs: only the lookup key, everything else comes from
/// the external info API.
#[derive(Debug, Deserialize)]
pub struct NewSong {
    pub group: String,
    pub title: String,
}

/// Payload returned by the external info API for a group/title pair.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SongDetail {
    #[serde(rename = "releaseDate")]
    pub release_date: String,
    pub text: String,
    pub link: String,
}

#[derive(Debug, Deserialize)]
pub struct ListSongsQuery {
    pub group: Option<String>,
    pub title: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

#[derive(Debug, Deserialize)]
pub struct SongTextQuery {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_size")]
    pub size: i64,
}

fn default_limit() -> i64 {
    10
}

fn default_page() -> i64 {
    1
}

fn default_size() -> i64 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_query_defaults() {
        let q: ListSongsQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(q.limit, 10);
        assert_eq!(q.offset, 0);
        assert!(q.group.is_none());
        assert!(q.title.is_none());
    }

    #[test]
    fn text_query_defaults() {
        let q: SongTextQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(q.page, 1);
        assert_eq!(q.size, 1);
    }

    #[test]
    fn put_body_may_omit_id_and_created_at() {
        let song: Song = serde_json::from_str(
            r#"{"group": "Muse", "title": "Uprising", "releaseDate": "2009-09-07",
                "text": "lyrics", "link": "https://example.com/uprising"}"#,
        )
        .unwrap();
        assert_eq!(song.id, 0);
        assert_eq!(song.group_name, "Muse");
    }

    #[test]
    fn song_wire_field_names() {
        let song = Song {
            id: 7,
            group_name: "Muse".to_string(),
            title: "Uprising".to_string(),
            release_date: "2009-09-07".to_string(),
            text: String::new(),
            link: "https://example.com/uprising".to_string(),
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&song).unwrap();
        assert_eq!(value["group"], "Muse");
        assert_eq!(value["releaseDate"], "2009-09-07");
        assert!(value.get("group_name").is_none());
    }
}
