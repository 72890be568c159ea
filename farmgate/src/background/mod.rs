pub mod session_service;

use std::collections::HashMap;
use std::future::Future;
use tokio::task::JoinHandle;

/// Tracks running session tasks by id and provides cancellation
pub struct BackgroundTaskManager {
    tasks: HashMap<String, JoinHandle<()>>,
}

impl BackgroundTaskManager {
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
        }
    }

    /// Spawn a background task
    ///
    /// A task already registered under the same id is aborted, and the new
    /// task does not start until the old one has been dropped.
    pub fn spawn_load_task<F>(&mut self, task_id: String, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let previous = self.tasks.remove(&task_id);
        if let Some(handle) = &previous {
            handle.abort();
        }

        let handle = tokio::spawn(async move {
            // Abort only lands at the old task's next poll
            if let Some(previous) = previous {
                let _ = previous.await;
            }
            future.await;
        });
        self.tasks.insert(task_id, handle);
    }

    /// Abort a single task; unknown ids are ignored
    ///
    /// The handle stays registered so a later spawn under the same id can
    /// wait for the abort to finish.
    pub fn cancel(&mut self, task_id: &str) {
        if let Some(handle) = self.tasks.get(task_id) {
            if !handle.is_finished() {
                tracing::debug!("Aborting task {}", task_id);
            }
            handle.abort();
        }
    }

    /// Cancel all running tasks (used on shutdown)
    pub fn cancel_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

impl Default for BackgroundTaskManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BackgroundTaskManager {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
