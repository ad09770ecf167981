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

//! Data Catalog client library for Rust.
//!
//! This crate contains a client for the Data Catalog API (version
//! `20190325`). Every operation in the service is described by a static
//! [Operation][operation::Operation] in [operations], and the
//! [DataCatalog][client::DataCatalog] client has one accessor per operation.
//!
//! # Example
//! ```no_run
//! # tokio_test::block_on(async {
//! use datacatalog::client::DataCatalog;
//! use gax::retry_policy::{DefaultRetryPolicy, RetryPolicyExt};
//! use gax::signer::anonymous;
//!
//! let client = DataCatalog::builder()
//!     .with_endpoint("http://localhost:8080/20190325")
//!     .with_signer(anonymous::new())
//!     .with_retry_policy(DefaultRetryPolicy.with_attempt_limit(3))
//!     .build()
//!     .await?;
//! let glossaries = client
//!     .list_glossaries()
//!     .set_path_parameter("catalogId", "ocid1.datacatalog.oc1..example")
//!     .set_query_parameter("fields", ["key", "displayName"])
//!     .send::<datacatalog::model::Collection<datacatalog::model::Glossary>>()
//!     .await?;
//! for g in &glossaries.body().items {
//!     println!("{} {:?}", g.key, g.display_name);
//! }
//! if let Some(page) = glossaries.opc_next_page() {
//!     println!("more results at {page}");
//! }
//! # anyhow::Result::<()>::Ok(()) });
//! ```
//!
//! **WARNING:** this crate is under active development. We expect multiple
//! breaking changes in the upcoming releases. Testing is also incomplete, we do
//! **not** recommend that you use this crate in production.

pub use gax::Result;
pub use gax::error::Error;
pub use gax::response::Response;

pub mod builder;
pub mod client;
pub mod model;
pub mod operation;
pub mod operations;
pub mod request;
pub mod stub;

mod tracing;
mod transport;
