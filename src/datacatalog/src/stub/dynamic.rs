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

use crate::Result;
use crate::operation::Operation;
use crate::request::OperationRequest;
use gax::options::RequestOptions;
use gax::response::Response;
use serde_json::Value;

/// A dyn-compatible, crate-private version of [super::DataCatalog].
#[async_trait::async_trait]
pub trait DataCatalog: std::fmt::Debug + Send + Sync {
    async fn execute(
        &self,
        operation: &'static Operation,
        request: OperationRequest,
        options: RequestOptions,
    ) -> Result<Response<Value>>;
}

/// All implementations of [super::DataCatalog] also implement [DataCatalog].
#[async_trait::async_trait]
impl<T: super::DataCatalog> DataCatalog for T {
    async fn execute(
        &self,
        operation: &'static Operation,
        request: OperationRequest,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        T::execute(self, operation, request, options).await
    }
}
