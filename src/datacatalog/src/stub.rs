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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! client and service behavior. Such test can define mocks implementing the
//! trait(s) defined in this module, initialize the client with an instance of
//! this mock in their tests, and verify their application responds as expected.

use crate::Result;
use crate::operation::Operation;
use crate::request::OperationRequest;
use gax::options::RequestOptions;
use gax::response::Response;
use serde_json::Value;

pub(crate) mod dynamic;

/// Defines the trait used to implement [crate::client::DataCatalog].
///
/// Application developers may need to implement this trait to mock
/// `client::DataCatalog`. In other use-cases, application developers only
/// use `client::DataCatalog` and need not be concerned with this trait or
/// its implementations.
///
/// Every operation in the service goes through [execute][DataCatalog::execute].
/// Mocks can match on [Operation::name] to respond differently to each
/// operation.
pub trait DataCatalog: std::fmt::Debug + Send + Sync {
    /// Implements [crate::builder::RequestBuilder::send].
    fn execute(
        &self,
        _operation: &'static Operation,
        _request: OperationRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<Value>>> + Send {
        gaxi::unimplemented::unimplemented_stub::<Value>()
    }
}
