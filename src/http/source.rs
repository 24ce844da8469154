use async_trait::async_trait;

use super::{
    error::ApiError,
    models::{
        ClusterLabel, ClusterStat, ListQuery, Recommendation, SentimentResult, SimilarSong,
        SongDetail, SongId, SongPage, SongSummary,
    },
};

/// Everything the controller needs from the lyrics backend.
#[async_trait]
pub trait LyricsSource: Send + Sync {
    async fn list_songs(&self, query: &ListQuery) -> Result<SongPage, ApiError>;
    async fn artists(&self) -> Result<Vec<String>, ApiError>;
    async fn cluster_stats(&self) -> Result<Vec<ClusterStat>, ApiError>;
    async fn cluster_songs(&self, label: ClusterLabel) -> Result<Vec<SongSummary>, ApiError>;
    async fn song(&self, id: SongId) -> Result<SongDetail, ApiError>;
    async fn sentiment(&self, id: SongId) -> Result<SentimentResult, ApiError>;
    async fn similar(&self, id: SongId) -> Result<Vec<SimilarSong>, ApiError>;
    async fn recommend(&self, query: &str) -> Result<Vec<Recommendation>, ApiError>;
}
