use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// At most one pending delayed action.
///
/// Scheduling replaces whatever was pending; dropping the scheduler cancels it.
#[derive(Debug, Default)]
pub struct AutoAdvance {
    pending: Option<JoinHandle<()>>,
}

impl AutoAdvance {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `fire` after `delay`, cancelling any earlier pending action.
    ///
    /// Returns `false` when no async runtime is available; nothing is scheduled then.
    pub fn schedule<F>(&mut self, delay: Duration, fire: F) -> bool
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        let Ok(handle) = Handle::try_current() else {
            log::warn!("no async runtime available; auto-advance skipped");
            return false;
        };
        self.pending = Some(handle.spawn(async move {
            tokio::time::sleep(delay).await;
            fire();
        }));
        true
    }

    /// Abort the pending action. Returns whether one was still waiting.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(task) if !task.is_finished() => {
                task.abort();
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for AutoAdvance {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    fn counter() -> (Arc<AtomicU32>, impl FnOnce() + Send + 'static) {
        let count = Arc::new(AtomicU32::new(0));
        let hit = Arc::clone(&count);
        (count, move || {
            hit.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[tokio::test(start_paused = true)]
    async fn fires_after_delay() {
        let mut auto = AutoAdvance::new();
        let (count, fire) = counter();
        assert!(auto.schedule(Duration::from_millis(500), fire));
        assert!(auto.is_pending());

        tokio::time::sleep(Duration::from_millis(499)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(2)).await;
        tokio::task::yield_now().await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(!auto.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_prevents_fire() {
        let mut auto = AutoAdvance::new();
        let (count, fire) = counter();
        auto.schedule(Duration::from_millis(500), fire);

        assert!(auto.cancel());
        assert!(!auto.cancel());
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn reschedule_replaces_pending() {
        let mut auto = AutoAdvance::new();
        let (first, fire_first) = counter();
        let (second, fire_second) = counter();
        auto.schedule(Duration::from_millis(500), fire_first);
        auto.schedule(Duration::from_millis(500), fire_second);

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn drop_cancels() {
        let (count, fire) = counter();
        {
            let mut auto = AutoAdvance::new();
            auto.schedule(Duration::from_millis(10), fire);
        }
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn schedule_without_runtime_is_refused() {
        let mut auto = AutoAdvance::new();
        let (_count, fire) = counter();
        assert!(!auto.schedule(Duration::from_millis(1), fire));
        assert!(!auto.is_pending());
    }
}
