use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Latest-wins scheduling for search-as-you-type: each keystroke schedules a
/// request after a short delay, and a newer keystroke cancels the one still
/// waiting. Only the most recently scheduled task ever fires.
pub struct SearchDebouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl SearchDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedules `task` to run after the delay, aborting any task scheduled
    /// earlier that has not fired yet.
    pub fn schedule<F>(&mut self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        }));
    }

    /// Aborts the pending task, if any. Called when the query is cleared.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for SearchDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
