use serde::{Deserialize, Serialize};

pub type SongId = i64;
pub type ClusterLabel = i64;

/// Fixed server page size. The API never reports it, so the client assumes it.
pub const PAGE_SIZE: u64 = 10;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SongSummary {
    pub id: SongId,
    pub artist: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SongDetail {
    #[serde(flatten)]
    pub summary: SongSummary,
    #[serde(rename = "lyric", default)]
    pub lyric_text: String,
}

impl SongDetail {
    pub fn id(&self) -> SongId {
        self.summary.id
    }
}

/// One page of the list/search endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SongPage {
    pub results: Vec<SongSummary>,
    pub count: u64,
}

impl SongPage {
    pub fn total_pages(&self) -> u32 {
        total_pages(self.count)
    }
}

pub fn total_pages(count: u64) -> u32 {
    u32::try_from(count.div_ceil(PAGE_SIZE)).unwrap_or(u32::MAX)
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LabeledScore {
    pub label: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SentimentResult {
    #[serde(rename = "sentiment_scores")]
    pub scores: Vec<LabeledScore>,
    #[serde(default)]
    pub truncated: bool,
}

/// Neighbour of a song in the precomputed similarity table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SimilarSong {
    pub similar_song_id: SongId,
    pub artist: String,
    pub title: String,
    pub similarity_score: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClusterStat {
    pub cluster_label: ClusterLabel,
    pub count: u64,
}

/// Raw cluster stat row; the backend column is nullable.
#[derive(Debug, Deserialize)]
pub(crate) struct RawClusterStat {
    pub cluster_label: Option<ClusterLabel>,
    pub count: u64,
}

impl RawClusterStat {
    pub(crate) fn labeled(self) -> Option<ClusterStat> {
        self.cluster_label.map(|cluster_label| ClusterStat {
            cluster_label,
            count: self.count,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ClusterSongs {
    pub songs: Vec<SongSummary>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClusterSelection {
    pub cluster_label: ClusterLabel,
    pub songs: Vec<SongSummary>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RecommendationQuery<'a> {
    pub query: &'a str,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Recommendation {
    #[serde(flatten)]
    pub song: SongSummary,
    pub similarity_score: f64,
}

/// Body shape of backend failures, e.g. `{"error": "No cleaned lyrics available"}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}

/// Query parameters of the list/search endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub title: String,
    pub artist: String,
}

/// Formats a score in `[0, 1]` as a percentage with one decimal.
pub fn percent(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_song_page_from_paginated_body() {
        let body = r#"{
            "count": 15,
            "next": "http://localhost:8000/api/lyrics/?page=2",
            "previous": null,
            "results": [{"id": 5, "artist": "A", "title": "Love Song", "lyric": "la", "clean_lyrics": "la"}]
        }"#;
        let page: SongPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.count, 15);
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].title, "Love Song");
        assert_eq!(page.total_pages(), 2);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(10), 1);
        assert_eq!(total_pages(11), 2);
        assert_eq!(total_pages(15), 2);
        assert_eq!(total_pages(100), 10);
    }

    #[test]
    fn test_total_pages_saturates_on_huge_count() {
        assert_eq!(total_pages(u64::MAX), u32::MAX);
        assert_eq!(total_pages(u32::MAX as u64 * 10 + 1), u32::MAX);
    }

    #[test]
    fn test_song_detail_reads_lyric_field() {
        let body = r#"{"id": 42, "artist": "B", "title": "X", "lyric": "...", "clean_lyrics": null}"#;
        let detail: SongDetail = serde_json::from_str(body).unwrap();
        assert_eq!(detail.id(), 42);
        assert_eq!(detail.summary.artist, "B");
        assert_eq!(detail.lyric_text, "...");
    }

    #[test]
    fn test_sentiment_result_keeps_label_order() {
        let body = r#"{
            "sentiment_scores": [
                {"label": "NEGATIVE", "score": 0.125},
                {"label": "POSITIVE", "score": 0.875}
            ],
            "truncated": true
        }"#;
        let result: SentimentResult = serde_json::from_str(body).unwrap();
        assert!(result.truncated);
        let labels: Vec<_> = result.scores.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["NEGATIVE", "POSITIVE"]);
    }

    #[test]
    fn test_similar_song_reads_similar_id() {
        let body = r#"[{"similar_song_id": 7, "title": "Y", "artist": "C", "similarity_score": 0.42}]"#;
        let similar: Vec<SimilarSong> = serde_json::from_str(body).unwrap();
        assert_eq!(similar[0].similar_song_id, 7);
        assert_eq!(similar[0].title, "Y");
    }

    #[test]
    fn test_null_cluster_label_is_dropped() {
        let body = r#"[{"cluster_label": null, "count": 3}, {"cluster_label": 2, "count": 40}]"#;
        let raw: Vec<RawClusterStat> = serde_json::from_str(body).unwrap();
        let stats: Vec<_> = raw.into_iter().filter_map(RawClusterStat::labeled).collect();
        assert_eq!(
            stats,
            vec![ClusterStat {
                cluster_label: 2,
                count: 40
            }]
        );
    }

    #[test]
    fn test_recommendation_flattens_song() {
        let body = r#"[{"id": 3, "artist": "D", "title": "Z", "similarity_score": 0.5}]"#;
        let recs: Vec<Recommendation> = serde_json::from_str(body).unwrap();
        assert_eq!(recs[0].song.id, 3);
        assert_eq!(percent(recs[0].similarity_score), "50.0%");
    }

    #[test]
    fn test_recommendation_query_body() {
        let body = serde_json::to_string(&RecommendationQuery { query: "rainy day" }).unwrap();
        assert_eq!(body, r#"{"query":"rainy day"}"#);
    }
}
