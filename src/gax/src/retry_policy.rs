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

//! Defines traits for retry policies and some common implementations.
//!
//! The client library retries requests when they fail due to transient errors
//! and the operation is idempotent, that is, it is safe to send the request
//! more than once. The library makes most `POST` operations idempotent by
//! attaching an `opc-retry-token` header, which the service uses to detect
//! duplicates.
//!
//! Applications may override the default behavior, for example, to retry
//! for a longer period, or to disable retries.
//!
//! # Example
//! ```
//! # use datacatalog_gax::retry_policy::*;
//! use std::time::Duration;
//! let policy = DefaultRetryPolicy
//!     .with_attempt_limit(5)
//!     .with_time_limit(Duration::from_secs(30));
//! ```

use crate::error::Error;
use crate::retry_result::RetryResult;
use crate::retry_state::RetryState;
use std::sync::Arc;
use std::time::Duration;

/// The service error code for resources in a state that prevents the
/// operation. These are typically transient, e.g. the resource is updating.
const INCORRECT_STATE: &str = "IncorrectState";

/// Determines how errors are handled in the retry loop.
///
/// Implementations of this trait determine if errors are retryable, and for
/// how long the retry loop may continue.
pub trait RetryPolicy: Send + Sync + std::fmt::Debug {
    /// Query the retry policy after an error.
    ///
    /// # Parameters
    /// * `state` - the idempotency of the request, when the loop started, and
    ///   the number of attempts so far.
    /// * `error` - the last error. Not all errors come from the service, the
    ///   client may have been unable to sign or send the request.
    fn on_error(&self, state: &RetryState, error: Error) -> RetryResult;

    /// The remaining time in the retry policy.
    ///
    /// For policies based on time, this returns the remaining time in the
    /// policy. The retry loop uses this value to adjust the next attempt
    /// timeout. For policies that are not time based this returns `None`.
    fn remaining_time(&self, _state: &RetryState) -> Option<Duration> {
        None
    }

    /// Returns false if the policy never continues the retry loop.
    ///
    /// The client only generates an `opc-retry-token`, and only sends the
    /// `opc-client-retries` header, for requests that may be sent more than
    /// once.
    fn may_retry(&self) -> bool {
        true
    }
}

/// A helper type to use [RetryPolicy] in client and request options.
#[derive(Clone, Debug)]
pub struct RetryPolicyArg(Arc<dyn RetryPolicy>);

impl<T> std::convert::From<T> for RetryPolicyArg
where
    T: RetryPolicy + 'static,
{
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl std::convert::From<Arc<dyn RetryPolicy>> for RetryPolicyArg {
    fn from(value: Arc<dyn RetryPolicy>) -> Self {
        Self(value)
    }
}

impl From<RetryPolicyArg> for Arc<dyn RetryPolicy> {
    fn from(value: RetryPolicyArg) -> Arc<dyn RetryPolicy> {
        value.0
    }
}

/// Extension trait for [`RetryPolicy`].
pub trait RetryPolicyExt: RetryPolicy + Sized {
    /// Decorate a [`RetryPolicy`] to limit the total elapsed time in the retry
    /// loop.
    ///
    /// While the time spent in the retry loop (including time in backoff) is
    /// less than the prescribed duration the `on_error()` method returns the
    /// results of the inner policy. After that time it returns
    /// [Exhausted][RetryResult::Exhausted] if the inner policy returns
    /// [Continue][RetryResult::Continue].
    ///
    /// The `remaining_time()` function returns the remaining time. This is
    /// always [Duration::ZERO] once or after the policy's expiration time is
    /// reached.
    ///
    /// # Example
    /// ```
    /// # use datacatalog_gax::retry_policy::*;
    /// # use datacatalog_gax::retry_state::RetryState;
    /// use std::time::{Duration, Instant};
    /// let policy = DefaultRetryPolicy.with_time_limit(Duration::from_secs(10));
    /// let state = RetryState::new(true).set_start(Instant::now() - Duration::from_secs(20));
    /// assert!(policy.remaining_time(&state) == Some(Duration::ZERO));
    /// ```
    fn with_time_limit(self, maximum_duration: Duration) -> LimitedElapsedTime<Self> {
        LimitedElapsedTime::custom(self, maximum_duration)
    }

    /// Decorate a [RetryPolicy] to limit the number of attempts.
    ///
    /// The policy returns the results of the inner policy until the number of
    /// attempts reaches `maximum_attempts`. After that it returns
    /// [Exhausted][RetryResult::Exhausted] if the inner policy returns
    /// [Continue][RetryResult::Continue].
    fn with_attempt_limit(self, maximum_attempts: u32) -> LimitedAttemptCount<Self> {
        LimitedAttemptCount::custom(self, maximum_attempts)
    }
}

impl<T: RetryPolicy> RetryPolicyExt for T {}

/// The default retry policy for Data Catalog operations.
///
/// This policy should be decorated to limit the number of retry attempts or
/// the duration of the retry loop.
///
/// The policy continues the loop on:
/// * transient signing failures, the request never left the client,
/// * I/O errors and timeouts on idempotent requests,
/// * HTTP 429 (too many requests) on idempotent requests,
/// * HTTP 409 with the `IncorrectState` code on idempotent requests,
/// * HTTP 5xx, except 501 (not implemented), on idempotent requests.
///
/// All other errors are permanent.
///
/// # Example
/// ```
/// # use datacatalog_gax::retry_policy::*;
/// # use datacatalog_gax::retry_state::RetryState;
/// # use datacatalog_gax::error::Error;
/// let policy = DefaultRetryPolicy;
/// assert!(policy.on_error(&RetryState::new(true), Error::io("reset")).is_continue());
/// assert!(policy.on_error(&RetryState::new(false), Error::io("reset")).is_permanent());
/// ```
#[derive(Clone, Debug)]
pub struct DefaultRetryPolicy;

impl RetryPolicy for DefaultRetryPolicy {
    fn on_error(&self, state: &RetryState, error: Error) -> RetryResult {
        if error.is_transient_and_before_send() {
            return RetryResult::Continue(error);
        }
        if !state.idempotent {
            return RetryResult::Permanent(error);
        }
        if error.is_io() || error.is_timeout() {
            return RetryResult::Continue(error);
        }
        match error.http_status_code() {
            Some(429) => RetryResult::Continue(error),
            Some(409)
                if error
                    .service_error()
                    .is_some_and(|s| s.code == INCORRECT_STATE) =>
            {
                RetryResult::Continue(error)
            }
            Some(501) => RetryResult::Permanent(error),
            Some(code) if (500..600).contains(&code) => RetryResult::Continue(error),
            _ => RetryResult::Permanent(error),
        }
    }
}

/// A retry policy that never retries.
///
/// Installing this policy sends each request exactly once. Note that no
/// `opc-retry-token` is generated for requests without a retry loop.
#[derive(Clone, Debug)]
pub struct NeverRetry;

impl RetryPolicy for NeverRetry {
    fn on_error(&self, _state: &RetryState, error: Error) -> RetryResult {
        RetryResult::Exhausted(error)
    }

    fn may_retry(&self) -> bool {
        false
    }
}

/// A retry policy decorator that limits the total time in the retry loop.
///
/// This policy decorates an inner policy and limits the duration of retry
/// loops. While the time spent in the retry loop (including time in backoff)
/// is less than the prescribed duration the `on_error()` method returns the
/// results of the inner policy. After that time it returns
/// [Exhausted][RetryResult::Exhausted] if the inner policy returns
/// [Continue][RetryResult::Continue].
///
/// # Parameters
/// * `P` - the inner retry policy, defaults to [DefaultRetryPolicy].
#[derive(Debug)]
pub struct LimitedElapsedTime<P = DefaultRetryPolicy>
where
    P: RetryPolicy,
{
    inner: P,
    maximum_duration: Duration,
}

impl LimitedElapsedTime {
    /// Creates a new instance, with the default inner policy.
    pub fn new(maximum_duration: Duration) -> Self {
        Self::custom(DefaultRetryPolicy, maximum_duration)
    }
}

impl<P> LimitedElapsedTime<P>
where
    P: RetryPolicy,
{
    /// Creates a new instance with a custom inner policy.
    pub fn custom(inner: P, maximum_duration: Duration) -> Self {
        Self {
            inner,
            maximum_duration,
        }
    }

    fn on_error_now(
        &self,
        now: std::time::Instant,
        state: &RetryState,
        error: Error,
    ) -> RetryResult {
        match self.inner.on_error(state, error) {
            RetryResult::Continue(e) if now >= state.start + self.maximum_duration => {
                RetryResult::Exhausted(e)
            }
            result => result,
        }
    }

    fn remaining_time_now(&self, now: std::time::Instant, state: &RetryState) -> Duration {
        let deadline = state.start + self.maximum_duration;
        let remaining = deadline.saturating_duration_since(now);
        self.inner
            .remaining_time(state)
            .map(|inner| std::cmp::min(remaining, inner))
            .unwrap_or(remaining)
    }
}

impl<P> RetryPolicy for LimitedElapsedTime<P>
where
    P: RetryPolicy + 'static,
{
    fn on_error(&self, state: &RetryState, error: Error) -> RetryResult {
        self.on_error_now(tokio::time::Instant::now().into_std(), state, error)
    }

    fn remaining_time(&self, state: &RetryState) -> Option<Duration> {
        Some(self.remaining_time_now(tokio::time::Instant::now().into_std(), state))
    }

    fn may_retry(&self) -> bool {
        self.inner.may_retry()
    }
}

/// A retry policy decorator that limits the number of attempts.
///
/// This policy decorates an inner policy and limits the total number of
/// attempts. Note that `on_error()` is not called before the initial
/// (non-retry) attempt. Therefore, setting the maximum number of attempts to 0
/// or 1 results in no retry attempts.
///
/// # Parameters
/// * `P` - the inner retry policy, defaults to [DefaultRetryPolicy].
#[derive(Debug)]
pub struct LimitedAttemptCount<P = DefaultRetryPolicy>
where
    P: RetryPolicy,
{
    inner: P,
    maximum_attempts: u32,
}

impl LimitedAttemptCount {
    /// Creates a new instance, with the default inner policy.
    pub fn new(maximum_attempts: u32) -> Self {
        Self::custom(DefaultRetryPolicy, maximum_attempts)
    }
}

impl<P> LimitedAttemptCount<P>
where
    P: RetryPolicy,
{
    /// Creates a new instance with a custom inner policy.
    pub fn custom(inner: P, maximum_attempts: u32) -> Self {
        Self {
            inner,
            maximum_attempts,
        }
    }
}

impl<P> RetryPolicy for LimitedAttemptCount<P>
where
    P: RetryPolicy,
{
    fn on_error(&self, state: &RetryState, error: Error) -> RetryResult {
        match self.inner.on_error(state, error) {
            RetryResult::Continue(e) if state.attempt_count >= self.maximum_attempts => {
                RetryResult::Exhausted(e)
            }
            result => result,
        }
    }

    fn remaining_time(&self, state: &RetryState) -> Option<Duration> {
        self.inner.remaining_time(state)
    }

    fn may_retry(&self) -> bool {
        self.maximum_attempts > 1 && self.inner.may_retry()
    }
}
