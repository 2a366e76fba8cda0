//! Bounded waits for host readiness.
//!
//! Each wait re-checks its condition once per frame and gives up once the
//! deadline passes. The condition is always checked before the deadline, so a
//! condition that becomes true on the same tick the timeout expires still wins.
//! Dropping the returned future cancels the wait.

use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

use crate::traits::{FrameClock, Page};

/// Frame-driven bounded waiting.
#[derive(Clone)]
pub struct Poller {
    clock: Arc<dyn FrameClock>,
}

impl Poller {
    pub fn new(clock: Arc<dyn FrameClock>) -> Self {
        Self { clock }
    }

    /// Wait until `check` yields a value, or `timeout` elapses.
    pub async fn wait_for<T, F>(&self, mut check: F, timeout: Duration) -> Option<T>
    where
        F: FnMut() -> Option<T>,
    {
        let deadline = Instant::now() + timeout;
        loop {
            if let Some(value) = check() {
                return Some(value);
            }
            if Instant::now() >= deadline {
                return None;
            }
            self.clock.next_frame().await;
        }
    }

    /// Wait until `condition` holds. Returns whether it did before the timeout.
    pub async fn wait_until<F>(&self, mut condition: F, timeout: Duration) -> bool
    where
        F: FnMut() -> bool,
    {
        self.wait_for(|| condition().then_some(()), timeout)
            .await
            .is_some()
    }

    /// Wait for an element matching `selector` to appear.
    pub async fn wait_for_element(
        &self,
        page: &dyn Page,
        selector: &str,
        timeout: Duration,
    ) -> bool {
        self.wait_until(|| page.element_present(selector), timeout).await
    }

    /// Wait for every element matching `selector` to disappear.
    pub async fn wait_until_gone(
        &self,
        page: &dyn Page,
        selector: &str,
        timeout: Duration,
    ) -> bool {
        self.wait_until(|| !page.element_present(selector), timeout).await
    }
}
