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

use super::Result;
use super::backoff_policy::BackoffPolicy;
use super::error::Error;
use super::retry_policy::RetryPolicy;
use super::retry_result::RetryResult;
use super::retry_state::RetryState;
use std::sync::Arc;
use std::time::Duration;

/// Runs the retry loop for a given function.
///
/// This functions calls an inner function as long as (1) the retry policy has
/// not expired, and (2) the inner function has not returned a successful
/// request.
///
/// In between calls the function waits the amount of time prescribed by the
/// backoff policy, using `sleep` to implement any sleep. The inner function
/// receives the time remaining in the retry policy, if any.
pub async fn retry_loop<F, S, Response>(
    mut inner: F,
    sleep: S,
    idempotent: bool,
    retry_policy: Arc<dyn RetryPolicy>,
    backoff_policy: Arc<dyn BackoffPolicy>,
) -> Result<Response>
where
    F: AsyncFnMut(Option<Duration>) -> Result<Response> + Send,
    S: AsyncFn(Duration) -> () + Send,
{
    let mut state = RetryState::new(idempotent);
    // The backoff delay and the error from the previous attempt.
    let mut pending: Option<(Duration, Error)> = None;
    loop {
        let mut remaining_time = retry_policy.remaining_time(&state);
        if let Some((delay, error)) = pending.take() {
            if remaining_time.is_some_and(|remaining| remaining < delay) {
                return Err(Error::exhausted(error));
            }
            tracing::debug!(
                attempt_count = state.attempt_count,
                ?delay,
                "retrying after error: {error}"
            );
            sleep(delay).await;
            remaining_time = remaining_time.map(|r| r.saturating_sub(delay));
        }
        state.attempt_count += 1;
        let error = match inner(remaining_time).await {
            Ok(r) => return Ok(r),
            Err(e) => e,
        };
        match retry_policy.on_error(&state, error) {
            RetryResult::Permanent(e) | RetryResult::Exhausted(e) => return Err(e),
            RetryResult::Continue(e) => {
                let delay = backoff_policy.on_failure(&state);
                pending = Some((delay, e));
            }
        }
    }
}

/// A helper to compute the time remaining in a retry loop, given the attempt
/// timeout and the overall timeout.
pub fn effective_timeout(
    options: &crate::options::RequestOptions,
    remaining_time: Option<Duration>,
) -> Option<Duration> {
    match (options.attempt_timeout(), remaining_time) {
        (None, None) => None,
        (None, Some(t)) => Some(t),
        (Some(t), None) => Some(*t),
        (Some(a), Some(r)) => Some(*std::cmp::min(a, &r)),
    }
}
