// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Configuration for waits.

use gax::error::Error;
use gax::exponential_backoff::ExponentialBackoffBuilder;
use gax::polling_backoff_policy::{PollingBackoffPolicy, PollingBackoffPolicyArg};
use std::sync::Arc;
use std::time::Duration;

/// The default upper bound for the delay between two polls.
pub const DEFAULT_MAX_INTERVAL: Duration = Duration::from_secs(30);

/// The default upper bound for the total time spent waiting.
pub const DEFAULT_MAX_WAIT: Duration = Duration::from_secs(1200);

/// The delay before the second poll, unless `max_interval` is smaller.
const INITIAL_INTERVAL: Duration = Duration::from_secs(1);

/// The growth factor for the delay between polls.
const SCALING: f64 = 2.0;

/// Configures how long and how often a wait polls the resource.
///
/// The defaults are to poll for up to 20 minutes, with the delay between polls
/// starting at one second, doubling after every poll, and never exceeding 30
/// seconds.
///
/// # Example
/// ```
/// # use blockstorage_waiter::WaiterOptions;
/// use std::time::Duration;
/// let options = WaiterOptions::default()
///     .with_max_interval(Duration::from_secs(10))
///     .with_max_wait(Duration::from_secs(600));
/// assert_eq!(options.max_interval(), Duration::from_secs(10));
/// assert_eq!(options.max_wait(), Duration::from_secs(600));
/// ```
#[derive(Clone, Debug, Default)]
pub struct WaiterOptions {
    max_interval: Option<Duration>,
    max_wait: Option<Duration>,
    polling_backoff_policy: Option<Arc<dyn PollingBackoffPolicy>>,
}

impl WaiterOptions {
    /// Sets the maximum delay between two polls.
    pub fn with_max_interval<V: Into<Duration>>(mut self, v: V) -> Self {
        self.max_interval = Some(v.into());
        self
    }

    /// Sets the maximum time spent waiting.
    ///
    /// The wait always polls at least once. A zero value results in exactly
    /// one poll.
    pub fn with_max_wait<V: Into<Duration>>(mut self, v: V) -> Self {
        self.max_wait = Some(v.into());
        self
    }

    /// Replaces the default backoff between polls.
    ///
    /// The delays returned by the policy are still capped by
    /// [max_interval][WaiterOptions::max_interval].
    pub fn with_polling_backoff_policy<V: Into<PollingBackoffPolicyArg>>(mut self, v: V) -> Self {
        self.polling_backoff_policy = Some(v.into().into());
        self
    }

    /// The maximum delay between two polls.
    pub fn max_interval(&self) -> Duration {
        self.max_interval.unwrap_or(DEFAULT_MAX_INTERVAL)
    }

    /// The maximum time spent waiting.
    pub fn max_wait(&self) -> Duration {
        self.max_wait.unwrap_or(DEFAULT_MAX_WAIT)
    }

    /// Verifies the options can be used in a wait.
    ///
    /// # Example
    /// ```
    /// # use blockstorage_waiter::WaiterOptions;
    /// use std::time::Duration;
    /// let options = WaiterOptions::default().with_max_interval(Duration::ZERO);
    /// assert!(options.validate().is_err());
    /// ```
    pub fn validate(&self) -> gax::Result<()> {
        self.polling_backoff_policy().map(|_| ())
    }

    /// Returns the configured backoff policy, or creates the default one.
    pub(crate) fn polling_backoff_policy(&self) -> gax::Result<Arc<dyn PollingBackoffPolicy>> {
        let max_interval = self.max_interval();
        if max_interval.is_zero() {
            return Err(Error::binding(OptionsError::ZeroMaxInterval));
        }
        if let Some(policy) = &self.polling_backoff_policy {
            return Ok(policy.clone());
        }
        let policy = ExponentialBackoffBuilder::new()
            .with_initial_delay(std::cmp::min(INITIAL_INTERVAL, max_interval))
            .with_maximum_delay(max_interval)
            .with_scaling(SCALING)
            .build()
            .map_err(Error::binding)?;
        Ok(Arc::new(policy))
    }
}

/// An error in the wait configuration.
#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum OptionsError {
    #[error("the maximum interval between polls must be greater than zero")]
    ZeroMaxInterval,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[derive(Debug)]
    struct Fixed(Duration);
    impl PollingBackoffPolicy for Fixed {
        fn wait_period(&self, _loop_start: Instant, _attempt_count: u32) -> Duration {
            self.0
        }
    }

    #[test]
    fn defaults() -> anyhow::Result<()> {
        let options = WaiterOptions::default();
        assert_eq!(options.max_interval(), Duration::from_secs(30));
        assert_eq!(options.max_wait(), Duration::from_secs(1200));
        options.validate()?;

        let policy = options.polling_backoff_policy()?;
        let now = Instant::now();
        let got = (1..=7)
            .map(|attempt| policy.wait_period(now, attempt))
            .collect::<Vec<_>>();
        let want = [1, 2, 4, 8, 16, 30, 30].map(Duration::from_secs).to_vec();
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn setters() {
        let options = WaiterOptions::default()
            .with_max_interval(Duration::from_secs(5))
            .with_max_wait(Duration::ZERO);
        assert_eq!(options.max_interval(), Duration::from_secs(5));
        assert_eq!(options.max_wait(), Duration::ZERO);
        assert!(options.validate().is_ok(), "{options:?}");
    }

    #[test]
    fn small_max_interval() -> anyhow::Result<()> {
        let options = WaiterOptions::default().with_max_interval(Duration::from_millis(250));
        let policy = options.polling_backoff_policy()?;
        let now = Instant::now();
        assert_eq!(policy.wait_period(now, 1), Duration::from_millis(250));
        assert_eq!(policy.wait_period(now, 5), Duration::from_millis(250));
        Ok(())
    }

    #[test]
    fn zero_max_interval() {
        let options = WaiterOptions::default().with_max_interval(Duration::ZERO);
        let got = options.validate();
        assert!(matches!(got, Err(ref e) if e.is_binding()), "{got:?}");
        let inner = got.as_ref().err().and_then(|e| e.as_inner::<OptionsError>());
        assert_eq!(inner, Some(&OptionsError::ZeroMaxInterval));
    }

    #[test]
    fn custom_policy() -> anyhow::Result<()> {
        let options =
            WaiterOptions::default().with_polling_backoff_policy(Fixed(Duration::from_secs(7)));
        let policy = options.polling_backoff_policy()?;
        assert_eq!(policy.wait_period(Instant::now(), 3), Duration::from_secs(7));

        let options = options.with_max_interval(Duration::ZERO);
        assert!(options.validate().is_err(), "{options:?}");
        Ok(())
    }
}
