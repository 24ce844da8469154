use tracing::{debug, error};

use crate::{
    event::events::Event,
    http::{
        error::ApiError,
        models::{ClusterLabel, ClusterSelection, ListQuery, SongId},
    },
};

use super::{
    fetch::Fetch,
    intent::Intent,
    state::{DetailView, Navigation, Notice, RequestId, ViewMode, ViewState},
};

/// Single writer of [`ViewState`].
///
/// Every transition is synchronous and returns the fetches it wants started;
/// the store itself never touches the network. Results come back through
/// [`Store::apply`].
#[derive(Debug)]
pub struct Store {
    state: ViewState,
    next_request: u64,
    discard_stale: bool,
}

impl Store {
    pub fn new(discard_stale: bool) -> Self {
        Self {
            state: ViewState::default(),
            next_request: 0,
            discard_stale,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    fn request_id(&mut self) -> RequestId {
        self.next_request += 1;
        RequestId(self.next_request)
    }

    /// Start-up fetches: facets, cluster stats and the first page, unordered.
    pub fn init(&mut self) -> Vec<Fetch> {
        self.state.in_flight.artists = true;
        self.state.in_flight.cluster_stats = true;
        vec![Fetch::Artists, Fetch::ClusterStats, self.fetch_list()]
    }

    pub fn dispatch(&mut self, intent: Intent) -> Vec<Fetch> {
        if !matches!(intent, Intent::None | Intent::Quit) {
            self.state.notice = None;
        }

        match intent {
            Intent::RequestPage(page) => self.set_page(page),
            Intent::RequestFilter { title, artist } => self.set_filter(title, artist),
            Intent::RequestSelect(id) => self.select_song(id),
            Intent::RequestAnalyze(id) => self.analyze_sentiment(id),
            Intent::RequestClusterSelect(label) => self.select_cluster(label),
            Intent::RequestRecommend(query) => self.submit_recommendation_query(query),
            Intent::ExitDetail => self.exit_detail(),
            Intent::ExitCluster => self.exit_cluster(),
            Intent::ToggleRecommender => {
                self.state.recommender.visible = !self.state.recommender.visible;
                Vec::new()
            }
            Intent::Quit | Intent::None => Vec::new(),
        }
    }

    fn fetch_list(&mut self) -> Fetch {
        let id = self.request_id();
        self.state.in_flight.list = Some(id);
        let page = &self.state.page;
        Fetch::List(
            id,
            ListQuery {
                page: page.current_page,
                title: page.title_filter.clone(),
                artist: page.artist_filter.clone(),
            },
        )
    }

    pub fn set_filter(&mut self, title: Option<String>, artist: Option<String>) -> Vec<Fetch> {
        if let Some(title) = title {
            self.state.page.title_filter = title;
        }
        if let Some(artist) = artist {
            self.state.page.artist_filter = artist;
        }
        self.state.page.current_page = 1;
        vec![self.fetch_list()]
    }

    pub fn set_page(&mut self, page: u32) -> Vec<Fetch> {
        let state = &self.state.page;
        if page < 1 || page > state.total_pages || page == state.current_page {
            debug!(
                "Ignoring page {} (current {}, total {})",
                page, state.current_page, state.total_pages
            );
            return Vec::new();
        }
        self.state.page.current_page = page;
        vec![self.fetch_list()]
    }

    pub fn select_song(&mut self, song: SongId) -> Vec<Fetch> {
        let id = self.request_id();
        self.state.in_flight.navigation = Some(Navigation::Song(id, song));
        vec![Fetch::Song(id, song)]
    }

    pub fn analyze_sentiment(&mut self, song: SongId) -> Vec<Fetch> {
        if self.state.in_flight.sentiment() {
            debug!("Sentiment already pending, ignoring request for {}", song);
            return Vec::new();
        }
        if self.state.mode.displayed_song() != Some(song) {
            debug!("Song {} is not displayed, ignoring sentiment request", song);
            return Vec::new();
        }
        let id = self.request_id();
        self.state.in_flight.sentiment = Some(id);
        vec![Fetch::Sentiment(id, song)]
    }

    pub fn select_cluster(&mut self, label: ClusterLabel) -> Vec<Fetch> {
        let id = self.request_id();
        self.state.in_flight.navigation = Some(Navigation::Cluster(id, label));
        vec![Fetch::Cluster(id, label)]
    }

    pub fn exit_detail(&mut self) -> Vec<Fetch> {
        self.return_to_list()
    }

    pub fn exit_cluster(&mut self) -> Vec<Fetch> {
        self.return_to_list()
    }

    /// The list is re-fetched rather than restored.
    fn return_to_list(&mut self) -> Vec<Fetch> {
        self.enter_mode(ViewMode::List);
        self.state.in_flight.navigation = None;
        vec![self.fetch_list()]
    }

    pub fn submit_recommendation_query(&mut self, query: String) -> Vec<Fetch> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        if self.state.in_flight.recommendations() {
            debug!("Recommendations already pending, ignoring query");
            return Vec::new();
        }
        let id = self.request_id();
        self.state.in_flight.recommendations = Some(id);
        self.state.recommender.query = query.clone();
        vec![Fetch::Recommend(id, query)]
    }

    /// Switches view mode, dropping whatever belonged to the previous detail.
    fn enter_mode(&mut self, mode: ViewMode) {
        if matches!(self.state.mode, ViewMode::Detail(_)) || matches!(mode, ViewMode::Detail(_)) {
            self.state.in_flight.similar = None;
            self.state.in_flight.sentiment = None;
        }
        self.state.mode = mode;
    }

    fn is_current(&self, pending: Option<RequestId>, id: RequestId) -> bool {
        !self.discard_stale || pending == Some(id)
    }

    fn discard(&self, class: &str, id: RequestId) -> Vec<Fetch> {
        debug!("Discarding stale {} response {:?}", class, id);
        Vec::new()
    }

    fn fail(&mut self, class: &str, err: ApiError) {
        error!("Failed to fetch {}: {}", class, err);
        self.state.notice = Some(Notice(format!("Could not load {}: {}", class, err)));
    }

    pub fn apply(&mut self, event: Event) -> Vec<Fetch> {
        let class = event.class();
        match event {
            Event::ListFetched(id, result) => {
                if !self.is_current(self.state.in_flight.list, id) {
                    return self.discard(class, id);
                }
                self.state.in_flight.list = None;
                match result {
                    Ok(page) => {
                        self.state.page.total_pages = page.total_pages();
                        self.state.songs = page.results;
                    }
                    Err(e) => self.fail(class, e),
                }
            }
            Event::ArtistsFetched(result) => {
                self.state.in_flight.artists = false;
                match result {
                    Ok(artists) => self.state.artists = artists,
                    Err(e) => self.fail(class, e),
                }
            }
            Event::ClusterStatsFetched(result) => {
                self.state.in_flight.cluster_stats = false;
                match result {
                    Ok(stats) => self.state.cluster_stats = stats,
                    Err(e) => self.fail(class, e),
                }
            }
            Event::SongFetched(id, result) => {
                let pending = matches!(
                    self.state.in_flight.navigation,
                    Some(Navigation::Song(current, _)) if current == id
                );
                if self.discard_stale && !pending {
                    return self.discard(class, id);
                }
                if pending {
                    self.state.in_flight.navigation = None;
                }
                match result {
                    Ok(song) => {
                        let song_id = song.id();
                        self.enter_mode(ViewMode::Detail(DetailView::new(song)));
                        let similar = self.request_id();
                        self.state.in_flight.similar = Some(similar);
                        return vec![Fetch::Similar(similar, song_id)];
                    }
                    Err(e) => self.fail(class, e),
                }
            }
            Event::SimilarFetched(id, song, result) => {
                let shown = self.state.mode.displayed_song() == Some(song);
                if self.discard_stale && (!shown || self.state.in_flight.similar != Some(id)) {
                    return self.discard(class, id);
                }
                self.state.in_flight.similar = None;
                match result {
                    Ok(similar) => {
                        if let Some(detail) = self.state.mode.detail_mut() {
                            detail.similar = similar;
                        }
                    }
                    Err(e) => self.fail(class, e),
                }
            }
            Event::SentimentFetched(id, song, result) => {
                let shown = self.state.mode.displayed_song() == Some(song);
                if self.discard_stale && (!shown || self.state.in_flight.sentiment != Some(id)) {
                    return self.discard(class, id);
                }
                self.state.in_flight.sentiment = None;
                match result {
                    Ok(sentiment) => {
                        if let Some(detail) = self.state.mode.detail_mut() {
                            detail.sentiment = Some(sentiment);
                        }
                    }
                    Err(e) => self.fail(class, e),
                }
            }
            Event::ClusterFetched(id, label, result) => {
                let pending = matches!(
                    self.state.in_flight.navigation,
                    Some(Navigation::Cluster(current, _)) if current == id
                );
                if self.discard_stale && !pending {
                    return self.discard(class, id);
                }
                if pending {
                    self.state.in_flight.navigation = None;
                }
                match result {
                    Ok(songs) => self.enter_mode(ViewMode::Cluster(ClusterSelection {
                        cluster_label: label,
                        songs,
                    })),
                    Err(e) => self.fail(class, e),
                }
            }
            Event::RecommendationsFetched(id, result) => {
                if !self.is_current(self.state.in_flight.recommendations, id) {
                    return self.discard(class, id);
                }
                self.state.in_flight.recommendations = None;
                match result {
                    Ok(results) => self.state.recommender.results = results,
                    Err(e) => self.fail(class, e),
                }
            }
        }
        Vec::new()
    }
}
