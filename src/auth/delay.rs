//! Randomized delay on authentication-adjacent endpoints.

use std::time::Duration;

use rand::Rng;

/// Sleep for a duration sampled uniformly from `[0, max_delay_ms]`.
///
/// Awaited at the very top of login and registration handling, before any
/// account lookup, so response latency carries no signal about whether an
/// email exists or a password matched. Nothing about the request shortens
/// or skips it.
pub async fn auth_delay(max_delay_ms: u64) {
    let delay = rand::rng().random_range(0..=max_delay_ms);
    tokio::time::sleep(Duration::from_millis(delay)).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_zero_max_returns_immediately() {
        let start = std::time::Instant::now();
        auth_delay(0).await;
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_delay_bounded_by_max() {
        let start = std::time::Instant::now();
        auth_delay(50).await;
        // Generous upper bound to avoid flakiness on slow CI
        assert!(start.elapsed() < Duration::from_secs(2));
    }
}
