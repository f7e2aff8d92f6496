//! Circuit breaker for provider rate limiting and IP bans.
//!
//! An HTTP 403 from the provider (IP ban) trips the breaker immediately;
//! repeated transient failures trip it after a threshold. While open, all
//! requests are refused until the cooldown expires.

use std::sync::Mutex;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
enum BreakerState {
    Closed,
    Open { tripped_at: Instant },
}

/// Prevents hammering a provider after a ban or sustained rate limiting.
#[derive(Debug)]
pub struct CircuitBreaker {
    state: Mutex<BreakerState>,
    consecutive_failures: Mutex<u32>,
    cooldown: Duration,
    failure_threshold: u32,
}

impl CircuitBreaker {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            state: Mutex::new(BreakerState::Closed),
            consecutive_failures: Mutex::new(0),
            cooldown,
            failure_threshold: 3,
        }
    }

    /// Provider default: 30-minute cooldown, trips after 3 consecutive failures.
    pub fn default_provider() -> Self {
        Self::new(Duration::from_secs(30 * 60))
    }

    /// Whether requests are currently allowed. Resets the breaker when the
    /// cooldown has expired.
    pub fn is_allowed(&self) -> bool {
        let mut state = self.state.lock().unwrap();
        match *state {
            BreakerState::Closed => true,
            BreakerState::Open { tripped_at } => {
                if tripped_at.elapsed() >= self.cooldown {
                    *state = BreakerState::Closed;
                    *self.consecutive_failures.lock().unwrap() = 0;
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Trip immediately (hard signal such as HTTP 403).
    pub fn trip(&self) {
        *self.state.lock().unwrap() = BreakerState::Open {
            tripped_at: Instant::now(),
        };
    }

    /// Record a transient failure; trips once the threshold is reached.
    pub fn record_failure(&self) {
        let mut failures = self.consecutive_failures.lock().unwrap();
        *failures += 1;
        if *failures >= self.failure_threshold {
            drop(failures);
            self.trip();
        }
    }

    /// Record a success, clearing the failure streak.
    pub fn record_success(&self) {
        *self.consecutive_failures.lock().unwrap() = 0;
    }
}
