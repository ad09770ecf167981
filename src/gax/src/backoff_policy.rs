// Copyright 2024 Google LLC
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

//! Defines the trait for backoff policies.
//!
//! The client library avoids retrying a failed request immediately, as the
//! service may need time to recover. [Exponential backoff] is a well known
//! algorithm to find an acceptable delay between retries.
//!
//! # Example
//! ```
//! # use datacatalog_gax::exponential_backoff::{Error, ExponentialBackoffBuilder};
//! use std::time::Duration;
//! let policy = ExponentialBackoffBuilder::new()
//!     .with_initial_delay(Duration::from_millis(100))
//!     .with_maximum_delay(Duration::from_secs(5))
//!     .with_scaling(4.0)
//!     .build()?;
//! # Ok::<(), Error>(())
//! ```
//!
//! [Exponential backoff]: https://en.wikipedia.org/wiki/Exponential_backoff

use crate::retry_state::RetryState;
use std::sync::Arc;
use std::time::Duration;

/// Defines the trait implemented by all backoff strategies.
pub trait BackoffPolicy: Send + Sync + std::fmt::Debug {
    /// Returns the backoff delay on a failure.
    ///
    /// # Parameters
    /// * `state` - the retry loop state. This method is always called after
    ///   the first attempt, so `state.attempt_count` is at least one.
    fn on_failure(&self, state: &RetryState) -> Duration;
}

/// A helper type to use [BackoffPolicy] in client and request options.
#[derive(Clone, Debug)]
pub struct BackoffPolicyArg(Arc<dyn BackoffPolicy>);

impl<T: BackoffPolicy + 'static> std::convert::From<T> for BackoffPolicyArg {
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl std::convert::From<Arc<dyn BackoffPolicy>> for BackoffPolicyArg {
    fn from(value: Arc<dyn BackoffPolicy>) -> Self {
        Self(value)
    }
}

impl From<BackoffPolicyArg> for Arc<dyn BackoffPolicy> {
    fn from(value: BackoffPolicyArg) -> Arc<dyn BackoffPolicy> {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exponential_backoff::ExponentialBackoffBuilder;

    #[test]
    fn backoff_policy_arg() {
        let policy = ExponentialBackoffBuilder::default().clamp();
        let _ = BackoffPolicyArg::from(policy);

        let policy: Arc<dyn BackoffPolicy> = Arc::new(ExponentialBackoffBuilder::default().clamp());
        let arg = BackoffPolicyArg::from(policy);
        let policy: Arc<dyn BackoffPolicy> = arg.into();
        let d = policy.on_failure(&RetryState::new(true).set_attempt_count(1_u32));
        assert!(d <= Duration::from_secs(1), "{d:?}");
    }
}
