use once_cell::sync::Lazy;
use tracing::debug;

use crate::models::song::SongDetail;
use crate::secrets::SECRET_MANAGER;

/// Client for the external music info API. One lookup per song creation,
/// no retries; any failure aborts the create.
pub struct MetadataClient {
    base_url: String,
    client: reqwest::Client,
}

impl MetadataClient {
    pub fn new(base_url: String) -> Result<Self, anyhow::Error> {
        let client = reqwest::Client::builder()
            .user_agent("song-library/0.1")
            .redirect(reqwest::redirect::Policy::limited(3))
            .timeout(std::time::Duration::from_secs(10))
            .build()?;
        Ok(MetadataClient { base_url, client })
    }

    pub async fn fetch_detail(
        &self,
        group: &str,
        title: &str,
    ) -> Result<SongDetail, anyhow::Error> {
        let url = format!("{}/info", self.base_url);
        debug!("fetching song detail from {} for {} - {}", url, group, title);

        let resp = self
            .client
            .get(&url)
            .query(&[("group", group), ("song", title)])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(anyhow::anyhow!(
                "music info API returned status {}",
                resp.status()
            ));
        }

        let detail: SongDetail = resp.json().await?;
        Ok(detail)
    }
}

pub static METADATA_CLIENT: Lazy<MetadataClient> = Lazy::new(|| {
    MetadataClient::new(SECRET_MANAGER.get("MUSIC_INFO_API_URL"))
        .expect("failed to build music info API client")
});
