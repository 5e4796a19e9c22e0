//! Retry budget for transient zypper failures

use std::time::Duration;

use autopatch_config::RetryConfig;

/// How often and how patiently a run retries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub wait: Duration,
}

impl RetryPolicy {
    #[must_use]
    pub fn new(max_attempts: u32, wait: Duration) -> Self {
        Self { max_attempts, wait }
    }

    #[must_use]
    pub fn from_config(config: &RetryConfig) -> Self {
        Self::new(config.max, config.wait_duration())
    }

    /// Whether another attempt may follow attempt number `attempt`
    #[must_use]
    pub fn allows_another(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }

    /// Block the thread for the configured delay
    pub fn wait(&self) {
        if !self.wait.is_zero() {
            std::thread::sleep(self.wait);
        }
    }
}
