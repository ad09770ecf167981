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

//! Data Catalog client helpers.
//!
//! This crate contains the types and functions shared by the Data Catalog
//! client library: the error type, the response wrapper, the client and
//! request options, the retry and backoff policies, and the request signer
//! abstraction.
//!
//! <div class="warning">
//! Items marked as "not part of the public API" are used by the generated
//! client and may change without notice.
//! </div>

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping service operations.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by the client.
pub mod error;

pub mod backoff_policy;
pub mod client_builder;
pub mod exponential_backoff;
pub mod options;
pub mod response;
pub mod retry_policy;
pub mod retry_result;
pub mod retry_state;
pub mod signer;

#[doc(hidden)]
pub mod retry_loop_internal;

#[cfg(test)]
pub(crate) mod mock_rng;
