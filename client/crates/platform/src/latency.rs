//! Simulated network latency
//!
//! The auth flows are mock operations with no real backend; they still
//! suspend for a configurable delay so the calling flow behaves like a
//! network call (loading states, interleaved UI events). Tests run under
//! `#[tokio::test(start_paused = true)]` and advance the clock for free.

use std::time::Duration;

/// Suspend the calling flow for the configured artificial delay.
///
/// A zero duration returns immediately without touching the timer.
pub async fn simulate(delay: Duration) {
    if delay.is_zero() {
        return;
    }
    tracing::trace!(delay_ms = delay.as_millis() as u64, "Simulating latency");
    tokio::time::sleep(delay).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_simulate_waits_for_the_full_delay() {
        let start = tokio::time::Instant::now();
        simulate(Duration::from_millis(1000)).await;
        assert!(start.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_delay_returns_immediately() {
        let start = tokio::time::Instant::now();
        simulate(Duration::ZERO).await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
