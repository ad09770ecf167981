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

//! The state of a retry loop, as seen by retry and backoff policies.

use std::time::Instant;

/// The input into retry and backoff policy queries.
///
/// The retry loop creates one instance when it starts, and updates the attempt
/// count after each failure. Custom policies receive a reference to it.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct RetryState {
    /// If true, sending the request more than once is safe.
    ///
    /// Idempotent operations are `GET`, `PUT`, `DELETE`, and any `POST` sent
    /// with an `opc-retry-token` header.
    pub idempotent: bool,

    /// When the retry loop started.
    pub start: Instant,

    /// How many attempts have completed, successful or not.
    pub attempt_count: u32,
}

impl RetryState {
    /// Creates the state for a new loop, starting now.
    pub fn new(idempotent: bool) -> Self {
        Self {
            idempotent,
            start: tokio::time::Instant::now().into_std(),
            attempt_count: 0,
        }
    }

    /// Changes the start time, useful in tests and mocks.
    pub fn set_start<T: Into<Instant>>(mut self, v: T) -> Self {
        self.start = v.into();
        self
    }

    /// Changes the attempt count, useful in tests and mocks.
    pub fn set_attempt_count<T: Into<u32>>(mut self, v: T) -> Self {
        self.attempt_count = v.into();
        self
    }
}

impl Default for RetryState {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters() {
        let state = RetryState::new(true);
        assert!(state.idempotent);
        assert_eq!(state.attempt_count, 0);

        let start = Instant::now();
        let state = RetryState::default()
            .set_start(start)
            .set_attempt_count(3_u32);
        assert!(!state.idempotent);
        assert_eq!(state.start, start);
        assert_eq!(state.attempt_count, 3);
    }
}
