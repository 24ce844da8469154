pub mod error;
pub mod models;
pub mod source;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use error::ApiError;
use models::{
    ClusterLabel, ClusterSongs, ClusterStat, ListQuery, RawClusterStat, Recommendation,
    RecommendationQuery, SentimentResult, SimilarSong, SongDetail, SongId, SongPage, SongSummary,
};
use source::LyricsSource;

pub struct ApiService {
    client: Client,
    base_url: Url,
}

impl ApiService {
    pub fn new(base_url: Url) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidUrl(format!("{}{}: {}", self.base_url, path, e)))
    }

    pub(crate) fn list_url(&self, query: &ListQuery) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("page", &query.page.to_string())
            .append_pair("title", &query.title)
            .append_pair("artist", &query.artist);
        url
    }

    pub(crate) fn cluster_songs_url(&self, label: ClusterLabel) -> Result<Url, ApiError> {
        let mut url = self.endpoint("cluster_songs/")?;
        url.query_pairs_mut()
            .append_pair("cluster", &label.to_string());
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(ApiError::from_status(
                status,
                &String::from_utf8_lossy(&body),
            ));
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl LyricsSource for ApiService {
    async fn list_songs(&self, query: &ListQuery) -> Result<SongPage, ApiError> {
        self.get_json(self.list_url(query)).await
    }

    async fn artists(&self) -> Result<Vec<String>, ApiError> {
        self.get_json(self.endpoint("artists/")?).await
    }

    async fn cluster_stats(&self) -> Result<Vec<ClusterStat>, ApiError> {
        let raw: Vec<RawClusterStat> = self.get_json(self.endpoint("cluster_stats/")?).await?;
        Ok(raw.into_iter().filter_map(RawClusterStat::labeled).collect())
    }

    async fn cluster_songs(&self, label: ClusterLabel) -> Result<Vec<SongSummary>, ApiError> {
        let body: ClusterSongs = self.get_json(self.cluster_songs_url(label)?).await?;
        Ok(body.songs)
    }

    async fn song(&self, id: SongId) -> Result<SongDetail, ApiError> {
        self.get_json(self.endpoint(&format!("{id}/"))?).await
    }

    async fn sentiment(&self, id: SongId) -> Result<SentimentResult, ApiError> {
        self.get_json(self.endpoint(&format!("{id}/sentiment/"))?)
            .await
    }

    async fn similar(&self, id: SongId) -> Result<Vec<SimilarSong>, ApiError> {
        self.get_json(self.endpoint(&format!("{id}/similar/"))?)
            .await
    }

    async fn recommend(&self, query: &str) -> Result<Vec<Recommendation>, ApiError> {
        let url = self.endpoint("recommend/")?;
        debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .json(&RecommendationQuery { query })
            .send()
            .await?;
        Self::decode(response).await
    }
}
