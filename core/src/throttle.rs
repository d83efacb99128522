//! Rate limiting for per-tick log messages
//!
//! The tick path runs every frame; a persistent failure (player without a
//! buff component, for example) would otherwise log dozens of times per
//! second.

use std::time::{Duration, Instant};

use hashbrown::HashMap;

pub const DEFAULT_LOG_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct LogThrottle {
    interval: Duration,
    last: HashMap<&'static str, Instant>,
}

impl Default for LogThrottle {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_INTERVAL)
    }
}

impl LogThrottle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: HashMap::new(),
        }
    }

    /// Returns `true` at most once per interval for each key
    pub fn allow(&mut self, key: &'static str) -> bool {
        self.allow_at(key, Instant::now())
    }

    fn allow_at(&mut self, key: &'static str, now: Instant) -> bool {
        match self.last.get(key) {
            Some(prev) if now.saturating_duration_since(*prev) < self.interval => false,
            _ => {
                self.last.insert(key, now);
                true
            }
        }
    }
}
