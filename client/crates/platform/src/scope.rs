//! View-scoped task lifetimes
//!
//! Pages fire independent fetches when they mount. Those tasks must not
//! outlive the view that consumes them: a [`ViewScope`] owns every task it
//! spawned, and dropping the scope aborts whatever is still in flight, so
//! nothing writes into a view that is already gone.

use std::future::Future;

use tokio::task::JoinSet;

/// Owns the background tasks of one view.
///
/// Dropping the scope aborts all tasks still in flight.
#[derive(Debug, Default)]
pub struct ViewScope {
    tasks: JoinSet<()>,
}

impl ViewScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a task bound to this view's lifetime.
    pub fn spawn<F>(&mut self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.tasks.spawn(task);
    }

    /// Number of tasks still owned by the scope.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Wait for every spawned task to finish.
    ///
    /// Panics inside tasks are logged, not propagated: a failed fetch is
    /// "no data yet" for the view either way.
    pub async fn join_all(&mut self) {
        while let Some(result) = self.tasks.join_next().await {
            if let Err(e) = result {
                if e.is_panic() {
                    tracing::warn!(error = %e, "View task panicked");
                }
            }
        }
    }
}
