use crate::{
    controller::state::RequestId,
    http::{
        error::ApiError,
        models::{
            ClusterLabel, ClusterStat, Recommendation, SentimentResult, SimilarSong, SongDetail,
            SongId, SongPage, SongSummary,
        },
    },
};

/// Completion of a backend request, sent from the fetch task to the event loop.
#[derive(Debug, Clone)]
#[allow(clippy::large_enum_variant)]
pub enum Event {
    ListFetched(RequestId, Result<SongPage, ApiError>),
    ArtistsFetched(Result<Vec<String>, ApiError>),
    ClusterStatsFetched(Result<Vec<ClusterStat>, ApiError>),
    SongFetched(RequestId, Result<SongDetail, ApiError>),
    SimilarFetched(RequestId, SongId, Result<Vec<SimilarSong>, ApiError>),
    SentimentFetched(RequestId, SongId, Result<SentimentResult, ApiError>),
    ClusterFetched(RequestId, ClusterLabel, Result<Vec<SongSummary>, ApiError>),
    RecommendationsFetched(RequestId, Result<Vec<Recommendation>, ApiError>),
}

impl Event {
    /// Request class name used in logs and notices.
    pub fn class(&self) -> &'static str {
        match self {
            Event::ListFetched(..) => "songs",
            Event::ArtistsFetched(_) => "artists",
            Event::ClusterStatsFetched(_) => "cluster stats",
            Event::SongFetched(..) => "song",
            Event::SimilarFetched(..) => "similar songs",
            Event::SentimentFetched(..) => "sentiment",
            Event::ClusterFetched(..) => "cluster songs",
            Event::RecommendationsFetched(..) => "recommendations",
        }
    }
}
