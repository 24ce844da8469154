use std::collections::HashMap;
use tokio::task::JoinHandle;
use tracing::debug;

/// Background fetches keyed by slot.
///
/// When superseding, a new task in an occupied slot aborts the old one.
/// Otherwise the old task keeps running detached until it finishes.
pub struct TaskManager {
    tasks: HashMap<&'static str, JoinHandle<()>>,
    detached: Vec<JoinHandle<()>>,
    supersede: bool,
}

impl TaskManager {
    pub fn new(supersede: bool) -> Self {
        Self {
            tasks: HashMap::new(),
            detached: Vec::new(),
            supersede,
        }
    }

    pub fn spawn(&mut self, key: &'static str, task: JoinHandle<()>) {
        self.tasks.retain(|_, handle| !handle.is_finished());
        self.detached.retain(|handle| !handle.is_finished());

        if let Some(handle) = self.tasks.insert(key, task) {
            if self.supersede {
                debug!("Superseding pending '{}' task", key);
                handle.abort();
            } else {
                self.detached.push(handle);
            }
        }
    }

    pub fn abort_all(&mut self) {
        for handle in self.tasks.values().chain(self.detached.iter()) {
            handle.abort();
        }
        self.tasks.clear();
        self.detached.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_spawn_supersedes_same_slot() {
        let mut tasks = TaskManager::new(true);
        let (tx, rx) = flume::unbounded::<&'static str>();

        let slow_tx = tx.clone();
        tasks.spawn(
            "list",
            tokio::spawn(async move {
                tokio::time::sleep(std::time::Duration::from_secs(60)).await;
                let _ = slow_tx.send("old");
            }),
        );
        tasks.spawn(
            "list",
            tokio::spawn(async move {
                let _ = tx.send("new");
            }),
        );

        assert_eq!(rx.recv_async().await.unwrap(), "new");
        assert!(rx.recv_async().await.is_err());
    }

    #[tokio::test]
    async fn test_without_supersede_both_tasks_finish() {
        let mut tasks = TaskManager::new(false);
        let (tx, rx) = flume::unbounded::<&'static str>();
        let gate = std::sync::Arc::new(tokio::sync::Notify::new());

        let (slow_tx, slow_gate) = (tx.clone(), gate.clone());
        tasks.spawn(
            "list",
            tokio::spawn(async move {
                slow_gate.notified().await;
                let _ = slow_tx.send("old");
            }),
        );
        tasks.spawn(
            "list",
            tokio::spawn(async move {
                let _ = tx.send("new");
            }),
        );

        assert_eq!(rx.recv_async().await.unwrap(), "new");
        gate.notify_one();
        assert_eq!(rx.recv_async().await.unwrap(), "old");
    }

    #[tokio::test]
    async fn test_abort_all_stops_detached_tasks() {
        let mut tasks = TaskManager::new(false);
        let (tx, rx) = flume::unbounded::<()>();
        for _ in 0..2 {
            let tx = tx.clone();
            tasks.spawn(
                "artists",
                tokio::spawn(async move {
                    tokio::time::sleep(std::time::Duration::from_secs(60)).await;
                    let _ = tx.send(());
                }),
            );
        }
        drop(tx);
        assert_eq!(tasks.detached.len(), 1);

        tasks.abort_all();
        assert!(tasks.tasks.is_empty() && tasks.detached.is_empty());
        assert!(rx.recv_async().await.is_err());
    }
}
