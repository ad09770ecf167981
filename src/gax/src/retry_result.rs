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

//! Retry loop control types.
//!
//! Applications only need these types when implementing their own retry
//! policies.

use crate::error::Error;

/// The result of a retry policy decision.
///
/// # Example
///
/// ```
/// # use datacatalog_gax::error::Error;
/// # use datacatalog_gax::retry_policy::RetryPolicy;
/// # use datacatalog_gax::retry_result::RetryResult;
/// # use datacatalog_gax::retry_state::RetryState;
/// #[derive(Debug)]
/// struct MyRetryPolicy;
/// impl RetryPolicy for MyRetryPolicy {
///     fn on_error(&self, state: &RetryState, error: Error) -> RetryResult {
///         if state.attempt_count > 42 {
///             return RetryResult::Exhausted(error);
///         }
///         RetryResult::Continue(error)
///     }
/// }
/// ```
#[derive(Debug)]
pub enum RetryResult {
    /// The error is not retryable, stop the loop.
    Permanent(Error),

    /// The error is retryable, but the policy is stopping the loop.
    ///
    /// Policies may stop the loop on retryable errors, for example, because
    /// the policy only allows a limited number of attempts.
    Exhausted(Error),

    /// The error is retryable, continue the loop.
    Continue(Error),
}

impl RetryResult {
    pub fn is_permanent(&self) -> bool {
        matches!(self, Self::Permanent(_))
    }
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted(_))
    }
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;

    #[test]
    fn predicates() {
        let flow = RetryResult::Permanent(not_found());
        assert!(flow.is_permanent(), "{flow:?}");
        assert!(!flow.is_exhausted(), "{flow:?}");
        assert!(!flow.is_continue(), "{flow:?}");

        let flow = RetryResult::Exhausted(Error::io("reset"));
        assert!(!flow.is_permanent(), "{flow:?}");
        assert!(flow.is_exhausted(), "{flow:?}");
        assert!(!flow.is_continue(), "{flow:?}");

        let flow = RetryResult::Continue(Error::io("reset"));
        assert!(!flow.is_permanent(), "{flow:?}");
        assert!(!flow.is_exhausted(), "{flow:?}");
        assert!(flow.is_continue(), "{flow:?}");
    }

    fn not_found() -> Error {
        Error::service_with_http_metadata(
            ServiceError::default().set_code("NotAuthorizedOrNotFound"),
            Some(404),
            None,
        )
    }
}
