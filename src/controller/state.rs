use crate::http::models::{
    ClusterLabel, ClusterSelection, ClusterStat, Recommendation, SentimentResult, SimilarSong,
    SongDetail, SongId, SongSummary,
};

/// Identity of a dispatched request, unique for the lifetime of a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub current_page: u32,
    pub total_pages: u32,
    pub title_filter: String,
    pub artist_filter: String,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            title_filter: String::new(),
            artist_filter: String::new(),
        }
    }
}

impl PageState {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub song: SongDetail,
    pub sentiment: Option<SentimentResult>,
    pub similar: Vec<SimilarSong>,
}

impl DetailView {
    pub fn new(song: SongDetail) -> Self {
        Self {
            song,
            sentiment: None,
            similar: Vec::new(),
        }
    }
}

/// Top-level view mode. Exactly one is presented at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewMode {
    #[default]
    List,
    Detail(DetailView),
    Cluster(ClusterSelection),
}

impl ViewMode {
    pub fn detail(&self) -> Option<&DetailView> {
        match self {
            ViewMode::Detail(detail) => Some(detail),
            _ => None,
        }
    }

    pub fn detail_mut(&mut self) -> Option<&mut DetailView> {
        match self {
            ViewMode::Detail(detail) => Some(detail),
            _ => None,
        }
    }

    pub fn displayed_song(&self) -> Option<SongId> {
        self.detail().map(|d| d.song.id())
    }
}

/// Pending mode-changing request. Only the latest navigation may land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Song(RequestId, SongId),
    Cluster(RequestId, ClusterLabel),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InFlight {
    pub list: Option<RequestId>,
    pub artists: bool,
    pub cluster_stats: bool,
    pub navigation: Option<Navigation>,
    pub similar: Option<RequestId>,
    pub sentiment: Option<RequestId>,
    pub recommendations: Option<RequestId>,
}

impl InFlight {
    pub fn list(&self) -> bool {
        self.list.is_some()
    }

    pub fn detail(&self) -> bool {
        matches!(self.navigation, Some(Navigation::Song(..)))
    }

    pub fn cluster(&self) -> bool {
        matches!(self.navigation, Some(Navigation::Cluster(..)))
    }

    pub fn similar(&self) -> bool {
        self.similar.is_some()
    }

    pub fn sentiment(&self) -> bool {
        self.sentiment.is_some()
    }

    pub fn recommendations(&self) -> bool {
        self.recommendations.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecommenderState {
    pub visible: bool,
    pub query: String,
    pub results: Vec<Recommendation>,
}

/// Non-blocking failure message shown inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice(pub String);

/// Everything the presentation layer reads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub mode: ViewMode,
    pub page: PageState,
    pub songs: Vec<SongSummary>,
    pub artists: Vec<String>,
    pub cluster_stats: Vec<ClusterStat>,
    pub recommender: RecommenderState,
    pub in_flight: InFlight,
    pub notice: Option<Notice>,
}
