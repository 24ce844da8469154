pub mod fetch;
pub mod intent;
pub mod state;
pub mod store;

use std::sync::Arc;

use flume::{Receiver, Sender};
use tracing::debug;

use crate::{event::events::Event, http::source::LyricsSource, util::task::TaskManager};

use fetch::Fetch;
use intent::Intent;
use state::ViewState;
use store::Store;

/// Owns the view state and runs the fetches its transitions ask for.
///
/// Fetches run as tokio tasks and report back over `event_tx`; the event loop
/// feeds whatever arrives on `event_rx` into [`Controller::handle_event`].
pub struct Controller {
    store: Store,
    source: Arc<dyn LyricsSource>,
    pub event_tx: Sender<Event>,
    pub event_rx: Receiver<Event>,
    tasks: TaskManager,
}

impl Controller {
    pub fn new(source: Arc<dyn LyricsSource>, discard_stale: bool) -> Self {
        let (event_tx, event_rx) = flume::unbounded();

        Self {
            store: Store::new(discard_stale),
            source,
            event_tx,
            event_rx,
            tasks: TaskManager::new(discard_stale),
        }
    }

    pub fn state(&self) -> &ViewState {
        self.store.state()
    }

    pub fn init(&mut self) {
        let fetches = self.store.init();
        self.start(fetches);
    }

    pub fn dispatch(&mut self, intent: Intent) {
        debug!("Intent {:?}", intent);
        let fetches = self.store.dispatch(intent);
        self.start(fetches);
    }

    pub fn handle_event(&mut self, event: Event) {
        let fetches = self.store.apply(event);
        self.start(fetches);
    }

    /// Applies every completion that has already arrived.
    pub fn drain_events(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
            changed = true;
        }
        changed
    }

    fn start(&mut self, fetches: Vec<Fetch>) {
        for fetch in fetches {
            debug!("Starting {:?}", fetch);
            let key = fetch.task_key();
            let source = self.source.clone();
            let tx = self.event_tx.clone();

            self.tasks.spawn(
                key,
                tokio::spawn(async move {
                    let event = fetch.run(source.as_ref()).await;
                    let _ = tx.send(event);
                }),
            );
        }
    }

    pub fn shutdown(&mut self) {
        self.tasks.abort_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{
        error::ApiError,
        models::{
            ClusterLabel, ClusterStat, ListQuery, Recommendation, SentimentResult, SimilarSong,
            SongDetail, SongId, SongPage, SongSummary,
        },
    };
    use crate::controller::state::ViewMode;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    #[derive(Default)]
    struct FakeSource {
        list_calls: AtomicUsize,
        sentiment_calls: AtomicUsize,
        sentiment_gate: Notify,
        fail_similar: bool,
        list_count: Option<u64>,
        held_page: Option<u32>,
        page_gate: Notify,
    }

    fn song(id: SongId) -> SongSummary {
        SongSummary {
            id,
            artist: "B".to_string(),
            title: "X".to_string(),
        }
    }

    #[async_trait]
    impl LyricsSource for FakeSource {
        async fn list_songs(&self, query: &ListQuery) -> Result<SongPage, ApiError> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            if self.held_page == Some(query.page) {
                self.page_gate.notified().await;
            }
            Ok(SongPage {
                results: vec![song(query.page as SongId)],
                count: self.list_count.unwrap_or(15),
            })
        }

        async fn artists(&self) -> Result<Vec<String>, ApiError> {
            Ok(vec!["A".to_string(), "B".to_string()])
        }

        async fn cluster_stats(&self) -> Result<Vec<ClusterStat>, ApiError> {
            Err(ApiError::Http {
                status: 500,
                message: "Internal Server Error".to_string(),
            })
        }

        async fn cluster_songs(&self, label: ClusterLabel) -> Result<Vec<SongSummary>, ApiError> {
            Ok(vec![song(label * 100)])
        }

        async fn song(&self, id: SongId) -> Result<SongDetail, ApiError> {
            Ok(SongDetail {
                summary: song(id),
                lyric_text: "...".to_string(),
            })
        }

        async fn sentiment(&self, _id: SongId) -> Result<SentimentResult, ApiError> {
            self.sentiment_calls.fetch_add(1, Ordering::SeqCst);
            self.sentiment_gate.notified().await;
            Ok(SentimentResult {
                scores: vec![],
                truncated: true,
            })
        }

        async fn similar(&self, _id: SongId) -> Result<Vec<SimilarSong>, ApiError> {
            if self.fail_similar {
                return Err(ApiError::Network("reset by peer".to_string()));
            }
            Ok(vec![])
        }

        async fn recommend(&self, _query: &str) -> Result<Vec<Recommendation>, ApiError> {
            Ok(vec![])
        }
    }

    async fn pump(controller: &mut Controller, events: usize) {
        let rx = controller.event_rx.clone();
        for _ in 0..events {
            let event = rx.recv_async().await.unwrap();
            controller.handle_event(event);
        }
    }

    #[tokio::test]
    async fn test_init_survives_partial_failure() {
        let source = Arc::new(FakeSource::default());
        let mut controller = Controller::new(source.clone(), true);
        controller.init();
        pump(&mut controller, 3).await;

        let state = controller.state();
        assert_eq!(state.artists, vec!["A".to_string(), "B".to_string()]);
        assert!(state.cluster_stats.is_empty());
        assert!(state.notice.is_some());
        assert_eq!(state.songs, vec![song(1)]);
        assert_eq!(state.page.total_pages, 2);
        assert_eq!(source.list_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_select_song_fetches_detail_then_similar() {
        let mut controller = Controller::new(Arc::new(FakeSource::default()), true);
        controller.dispatch(Intent::RequestSelect(42));
        pump(&mut controller, 2).await;

        let detail = controller.state().mode.detail().unwrap();
        assert_eq!(detail.song.id(), 42);
        assert!(detail.similar.is_empty());
        assert!(controller.state().notice.is_none());
    }

    #[tokio::test]
    async fn test_similar_failure_leaves_detail_visible() {
        let source = FakeSource {
            fail_similar: true,
            ..Default::default()
        };
        let mut controller = Controller::new(Arc::new(source), true);
        controller.dispatch(Intent::RequestSelect(42));
        pump(&mut controller, 2).await;

        assert_eq!(controller.state().mode.displayed_song(), Some(42));
        assert!(!controller.state().in_flight.similar());
        assert!(controller.state().notice.is_some());
    }

    #[tokio::test]
    async fn test_double_analyze_makes_one_call() {
        let source = Arc::new(FakeSource::default());
        let mut controller = Controller::new(source.clone(), true);
        controller.dispatch(Intent::RequestSelect(42));
        pump(&mut controller, 2).await;

        controller.dispatch(Intent::RequestAnalyze(42));
        controller.dispatch(Intent::RequestAnalyze(42));
        assert!(controller.state().in_flight.sentiment());

        source.sentiment_gate.notify_one();
        pump(&mut controller, 1).await;

        assert_eq!(source.sentiment_calls.load(Ordering::SeqCst), 1);
        let detail = controller.state().mode.detail().unwrap();
        assert!(detail.sentiment.as_ref().unwrap().truncated);
        assert!(!controller.state().in_flight.sentiment());
    }

    #[tokio::test]
    async fn test_cluster_then_back_to_list() {
        let source = Arc::new(FakeSource::default());
        let mut controller = Controller::new(source.clone(), true);
        controller.dispatch(Intent::RequestClusterSelect(2));
        pump(&mut controller, 1).await;
        assert!(matches!(
            &controller.state().mode,
            ViewMode::Cluster(selection) if selection.songs == vec![song(200)]
        ));

        controller.dispatch(Intent::ExitCluster);
        pump(&mut controller, 1).await;
        assert_eq!(controller.state().mode, ViewMode::List);
        assert_eq!(source.list_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_recommendations_render_empty() {
        let mut controller = Controller::new(Arc::new(FakeSource::default()), true);
        controller.dispatch(Intent::ToggleRecommender);
        controller.dispatch(Intent::RequestRecommend("anything".to_string()));
        pump(&mut controller, 1).await;

        let state = controller.state();
        assert!(state.recommender.visible);
        assert_eq!(state.recommender.query, "anything");
        assert!(state.recommender.results.is_empty());
        assert!(state.notice.is_none());
    }

    fn paged_source(held_page: u32) -> Arc<FakeSource> {
        Arc::new(FakeSource {
            list_count: Some(45),
            held_page: Some(held_page),
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn test_unguarded_late_page_overwrites_newer_page() {
        let source = paged_source(2);
        let mut controller = Controller::new(source.clone(), false);
        controller.init();
        pump(&mut controller, 3).await;
        assert_eq!(controller.state().page.total_pages, 5);

        controller.dispatch(Intent::RequestPage(2));
        controller.dispatch(Intent::RequestPage(3));
        pump(&mut controller, 1).await;
        assert_eq!(controller.state().songs, vec![song(3)]);

        source.page_gate.notify_one();
        pump(&mut controller, 1).await;

        assert_eq!(controller.state().songs, vec![song(2)]);
        assert_eq!(controller.state().page.current_page, 3);
        assert!(!controller.state().in_flight.list());
        assert_eq!(source.list_calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_guarded_late_page_never_lands() {
        let source = paged_source(2);
        let mut controller = Controller::new(source.clone(), true);
        controller.init();
        pump(&mut controller, 3).await;

        controller.dispatch(Intent::RequestPage(2));
        controller.dispatch(Intent::RequestPage(3));
        pump(&mut controller, 1).await;

        source.page_gate.notify_one();
        tokio::task::yield_now().await;
        assert!(!controller.drain_events());
        assert_eq!(controller.state().songs, vec![song(3)]);
    }
}
