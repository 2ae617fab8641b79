//! Quiet-period tracking for field input.
//!
//! Each key holds a ticket. [`Debouncer::settle`] takes a new ticket, sleeps
//! for the quiet period, and reports whether its ticket is still the latest.
//! A burst of input on one key therefore yields exactly one `true`.

use std::collections::HashMap;
use std::time::Duration;

use parking_lot::Mutex;

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    tickets: Mutex<HashMap<String, u64>>,
}

impl Debouncer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            tickets: Mutex::new(HashMap::new()),
        }
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    fn bump(&self, key: &str) -> u64 {
        let mut tickets = self.tickets.lock();
        let ticket = tickets.entry(key.to_string()).or_insert(0);
        *ticket += 1;
        *ticket
    }

    /// Wait out the quiet period for `key`. Returns `false` if newer input
    /// for the same key arrived meanwhile, or the key was cancelled.
    pub async fn settle(&self, key: &str) -> bool {
        let ticket = self.bump(key);
        tokio::time::sleep(self.delay).await;
        self.tickets.lock().get(key) == Some(&ticket)
    }

    /// Invalidate any pending [`Self::settle`] for `key`.
    pub fn cancel(&self, key: &str) {
        self.bump(key);
    }

    /// Invalidate every pending wait.
    pub fn cancel_all(&self) {
        for ticket in self.tickets.lock().values_mut() {
            *ticket += 1;
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(300))
    }
}
