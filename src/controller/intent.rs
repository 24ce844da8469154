use crate::http::models::{ClusterLabel, SongId};

/// What the presentation layer asks the controller to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    RequestPage(u32),
    RequestFilter {
        title: Option<String>,
        artist: Option<String>,
    },
    RequestSelect(SongId),
    RequestAnalyze(SongId),
    RequestClusterSelect(ClusterLabel),
    RequestRecommend(String),
    ExitDetail,
    ExitCluster,
    ToggleRecommender,
    Quit,
    /// Input was consumed by the view; nothing to do.
    None,
}
