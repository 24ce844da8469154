use crate::{
    event::events::Event,
    http::{
        models::{ClusterLabel, ListQuery, SongId},
        source::LyricsSource,
    },
};

use super::state::RequestId;

/// A backend request decided by the store, executed by the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetch {
    List(RequestId, ListQuery),
    Artists,
    ClusterStats,
    Song(RequestId, SongId),
    Similar(RequestId, SongId),
    Sentiment(RequestId, SongId),
    Cluster(RequestId, ClusterLabel),
    Recommend(RequestId, String),
}

impl Fetch {
    /// Task slot; a newer fetch in the same slot replaces the older one.
    pub fn task_key(&self) -> &'static str {
        match self {
            Fetch::List(..) => "list",
            Fetch::Artists => "artists",
            Fetch::ClusterStats => "cluster_stats",
            Fetch::Song(..) | Fetch::Cluster(..) => "navigation",
            Fetch::Similar(..) => "similar",
            Fetch::Sentiment(..) => "sentiment",
            Fetch::Recommend(..) => "recommend",
        }
    }

    pub async fn run(self, source: &dyn LyricsSource) -> Event {
        match self {
            Fetch::List(id, query) => Event::ListFetched(id, source.list_songs(&query).await),
            Fetch::Artists => Event::ArtistsFetched(source.artists().await),
            Fetch::ClusterStats => Event::ClusterStatsFetched(source.cluster_stats().await),
            Fetch::Song(id, song) => Event::SongFetched(id, source.song(song).await),
            Fetch::Similar(id, song) => Event::SimilarFetched(id, song, source.similar(song).await),
            Fetch::Sentiment(id, song) => {
                Event::SentimentFetched(id, song, source.sentiment(song).await)
            }
            Fetch::Cluster(id, label) => {
                Event::ClusterFetched(id, label, source.cluster_songs(label).await)
            }
            Fetch::Recommend(id, query) => {
                Event::RecommendationsFetched(id, source.recommend(&query).await)
            }
        }
    }
}
