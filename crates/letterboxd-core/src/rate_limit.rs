//! Courtesy rate limiting between page visits

use std::time::Duration;
use tokio::time::sleep;

/// Rate limiter to control page visit frequency
///
/// Pauses for the full `delay` before every visit except the first. The
/// pause does not shrink when the previous page took long to render.
pub struct RateLimiter {
    delay: Duration,
    visited: bool,
}

impl RateLimiter {
    /// Create a new rate limiter with a fixed delay between visits
    ///
    /// # Arguments
    /// * `delay` - Pause taken before each visit after the first
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            visited: false,
        }
    }

    /// Acquire permission to visit a page
    ///
    /// Returns at once on the first call; later calls sleep for `delay`.
    pub async fn acquire(&mut self) {
        if self.visited && !self.delay.is_zero() {
            sleep(self.delay).await;
        }
        self.visited = true;
    }

    /// Get the pause taken between visits
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limiter_creation() {
        let limiter = RateLimiter::new(Duration::from_millis(1500));
        assert_eq!(limiter.delay(), Duration::from_millis(1500));
    }

    #[tokio::test]
    async fn test_first_acquire_does_not_wait() {
        let mut limiter = RateLimiter::new(Duration::from_secs(10));

        let start = std::time::Instant::now();
        limiter.acquire().await;

        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_rate_limiter_acquire() {
        let mut limiter = RateLimiter::new(Duration::from_millis(100));

        let start = std::time::Instant::now();
        limiter.acquire().await;
        limiter.acquire().await;
        let elapsed = start.elapsed();

        // Second acquire should wait at least 100ms
        assert!(elapsed >= Duration::from_millis(90)); // Allow small tolerance
    }

    #[tokio::test]
    async fn test_delay_not_shortened_by_time_between_visits() {
        let mut limiter = RateLimiter::new(Duration::from_millis(100));

        limiter.acquire().await;
        // A page that takes as long as the delay itself to render
        sleep(Duration::from_millis(100)).await;

        let start = std::time::Instant::now();
        limiter.acquire().await;

        assert!(start.elapsed() >= Duration::from_millis(90)); // Allow small tolerance
    }

    #[tokio::test]
    async fn test_zero_interval_never_waits() {
        let mut limiter = RateLimiter::new(Duration::ZERO);

        let start = std::time::Instant::now();
        for _ in 0..5 {
            limiter.acquire().await;
        }

        assert!(start.elapsed() < Duration::from_millis(500));
    }
}
