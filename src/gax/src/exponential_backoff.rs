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

//! Truncated [exponential backoff] with full jitter.
//!
//! [exponential backoff]: https://en.wikipedia.org/wiki/Exponential_backoff

use crate::backoff_policy::BackoffPolicy;
use crate::retry_state::RetryState;
use std::time::Duration;

/// The error type for exponential backoff creation.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("the scaling value ({0}) should be >= 1.0")]
    InvalidScalingFactor(f64),
    #[error("the initial delay ({0:?}) should be greater than zero")]
    InvalidInitialDelay(Duration),
    #[error(
        "the maximum delay ({maximum:?}) should be greater than or equal to the initial delay ({initial:?})"
    )]
    EmptyRange {
        maximum: Duration,
        initial: Duration,
    },
}

const MAXIMUM_DELAY_LIMIT: Duration = Duration::from_secs(60 * 60);

/// Configures an [ExponentialBackoff] policy.
///
/// The defaults are a one second initial delay, a sixty second maximum delay,
/// and a scaling factor of two.
#[derive(Clone, Debug)]
pub struct ExponentialBackoffBuilder {
    initial_delay: Duration,
    maximum_delay: Duration,
    scaling: f64,
}

impl ExponentialBackoffBuilder {
    /// Creates a builder with the default parameters.
    ///
    /// # Example
    /// ```
    /// # use datacatalog_gax::exponential_backoff::Error;
    /// # use datacatalog_gax::exponential_backoff::ExponentialBackoffBuilder;
    /// use std::time::Duration;
    ///
    /// let policy = ExponentialBackoffBuilder::new()
    ///         .with_initial_delay(Duration::from_millis(100))
    ///         .with_maximum_delay(Duration::from_secs(5))
    ///         .with_scaling(4.0)
    ///         .build()?;
    /// # Ok::<(), Error>(())
    /// ```
    pub fn new() -> Self {
        Self {
            initial_delay: Duration::from_secs(1),
            maximum_delay: Duration::from_secs(60),
            scaling: 2.0,
        }
    }

    /// Change the initial delay.
    pub fn with_initial_delay<V: Into<Duration>>(mut self, v: V) -> Self {
        self.initial_delay = v.into();
        self
    }

    /// Change the maximum delay.
    pub fn with_maximum_delay<V: Into<Duration>>(mut self, v: V) -> Self {
        self.maximum_delay = v.into();
        self
    }

    /// Change the scaling factor in this backoff policy.
    pub fn with_scaling<V: Into<f64>>(mut self, v: V) -> Self {
        self.scaling = v.into();
        self
    }

    /// Creates a new exponential backoff policy.
    ///
    /// # Example
    /// ```
    /// # use datacatalog_gax::exponential_backoff::Error;
    /// # use datacatalog_gax::exponential_backoff::ExponentialBackoffBuilder;
    /// # use datacatalog_gax::backoff_policy::BackoffPolicy;
    /// # use datacatalog_gax::retry_state::RetryState;
    /// use std::time::Duration;
    /// let backoff = ExponentialBackoffBuilder::new()
    ///     .with_initial_delay(Duration::from_secs(5))
    ///     .with_maximum_delay(Duration::from_secs(50))
    ///     .with_scaling(2.0)
    ///     .build()?;
    /// let state = RetryState::new(true).set_attempt_count(1_u32);
    /// assert!(backoff.on_failure(&state) <= Duration::from_secs(5));
    /// let state = state.set_attempt_count(2_u32);
    /// assert!(backoff.on_failure(&state) <= Duration::from_secs(10));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn build(self) -> Result<ExponentialBackoff, Error> {
        if self.scaling < 1.0 {
            return Err(Error::InvalidScalingFactor(self.scaling));
        }
        if self.initial_delay.is_zero() {
            return Err(Error::InvalidInitialDelay(self.initial_delay));
        }
        if self.maximum_delay < self.initial_delay {
            return Err(Error::EmptyRange {
                maximum: self.maximum_delay,
                initial: self.initial_delay,
            });
        }
        Ok(ExponentialBackoff {
            maximum_delay: self.maximum_delay,
            scaling: self.scaling,
            initial_delay: self.initial_delay,
        })
    }

    /// Creates a new exponential backoff policy clamping the ranges towards
    /// recommended values.
    ///
    /// The maximum delay is clamped to `[1s, 1h]`, the initial delay to
    /// `[1ms, maximum delay]`, and the scaling factor to `[1.0, 32.0]`.
    ///
    /// # Example
    /// ```
    /// # use datacatalog_gax::exponential_backoff::ExponentialBackoffBuilder;
    /// # use datacatalog_gax::backoff_policy::BackoffPolicy;
    /// # use datacatalog_gax::retry_state::RetryState;
    /// use std::time::Duration;
    /// let backoff = ExponentialBackoffBuilder::new()
    ///     .with_initial_delay(Duration::ZERO)
    ///     .clamp();
    /// let state = RetryState::new(true).set_attempt_count(1_u32);
    /// assert!(backoff.on_failure(&state) <= Duration::from_millis(1));
    /// ```
    pub fn clamp(self) -> ExponentialBackoff {
        let scaling = self.scaling.clamp(1.0, 32.0);
        let maximum_delay = self
            .maximum_delay
            .clamp(Duration::from_secs(1), MAXIMUM_DELAY_LIMIT);
        let current_delay = self
            .initial_delay
            .clamp(Duration::from_millis(1), maximum_delay);
        ExponentialBackoff {
            initial_delay: current_delay,
            maximum_delay,
            scaling,
        }
    }
}

impl Default for ExponentialBackoffBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Truncated exponential backoff with full jitter.
///
/// After the `n`-th failed attempt the delay is a random value in
/// `[0, min(initial_delay * scaling^(n-1), maximum_delay)]`.
#[derive(Debug)]
pub struct ExponentialBackoff {
    initial_delay: Duration,
    maximum_delay: Duration,
    scaling: f64,
}

impl ExponentialBackoff {
    fn delay(&self, attempt_count: u32) -> Duration {
        let exp = std::cmp::min(i32::MAX as u32, attempt_count) as i32;
        let scaling = self.scaling.powi(exp.saturating_sub(1));
        if scaling >= self.maximum_delay.div_duration_f64(self.initial_delay) {
            return self.maximum_delay;
        }
        // Cannot overflow: scaling >= 1.0 and initial_delay * scaling < maximum_delay.
        self.initial_delay.mul_f64(scaling)
    }

    fn delay_with_jitter(&self, attempt_count: u32, rng: &mut impl rand::Rng) -> Duration {
        let delay = self.delay(attempt_count);
        rng.random_range(Duration::ZERO..=delay)
    }
}

impl Default for ExponentialBackoff {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_secs(1),
            maximum_delay: Duration::from_secs(60),
            scaling: 2.0,
        }
    }
}

impl BackoffPolicy for ExponentialBackoff {
    fn on_failure(&self, state: &RetryState) -> Duration {
        self.delay_with_jitter(state.attempt_count, &mut rand::rng())
    }
}
