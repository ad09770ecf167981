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

use crate::builder::RequestBuilder;
use crate::operation::Operation;
use std::sync::Arc;

/// Implements a client for the Data Catalog API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use datacatalog::client::DataCatalog;
/// use gax::signer::static_headers;
/// use serde_json::Value;
/// let signer = static_headers::Builder::new()
///     .with_header("authorization", "Bearer my-token")
///     .build()?;
/// let client = DataCatalog::builder()
///     .with_region("us-ashburn-1")
///     .with_signer(signer)
///     .build()
///     .await?;
/// let response = client
///     .list_catalogs()
///     .set_query_parameter("compartmentId", "ocid1.compartment.oc1..example")
///     .send::<Value>()
///     .await?;
/// println!("{:?}", response.body());
/// # anyhow::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Use the Data Catalog APIs to collect, organize, find, access, understand,
/// enrich, and activate technical, business, and operational metadata.
///
/// # Configuration
///
/// To configure `DataCatalog` use the `with_*` methods in the type returned
/// by [builder()][DataCatalog::builder]. The client requires a signer and
/// either a region or an explicit endpoint.
///
/// * [with_region()]: sets the region, the client computes the endpoint.
/// * [with_endpoint()]: overrides the endpoint, e.g. for a local emulator.
/// * [with_signer()]: sets the signer used to authenticate each request.
///
/// [with_region()]: gax::client_builder::ClientBuilder::with_region
/// [with_endpoint()]: gax::client_builder::ClientBuilder::with_endpoint
/// [with_signer()]: gax::client_builder::ClientBuilder::with_signer
///
/// # Pooling and Cloning
///
/// `DataCatalog` holds a connection pool internally, it is advised to
/// create one and reuse it. You do not need to wrap `DataCatalog` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an
/// `Arc` internally.
#[derive(Clone, Debug)]
pub struct DataCatalog {
    inner: Arc<dyn crate::stub::dynamic::DataCatalog>,
}

impl DataCatalog {
    /// Returns a builder for [DataCatalog].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use datacatalog::client::DataCatalog;
    /// use gax::signer::anonymous;
    /// let client = DataCatalog::builder()
    ///     .with_endpoint("http://localhost:8080/20190325")
    ///     .with_signer(anonymous::new())
    ///     .build()
    ///     .await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> crate::builder::ClientBuilder {
        gax::client_builder::internal::new_builder(crate::builder::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: crate::stub::DataCatalog + 'static,
    {
        Self {
            inner: Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Arc<dyn crate::stub::dynamic::DataCatalog>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl crate::stub::DataCatalog> {
        crate::transport::DataCatalog::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl crate::stub::DataCatalog> {
        Self::build_transport(conf)
            .await
            .map(crate::tracing::DataCatalog::new)
    }

    /// Returns a request builder for any operation.
    ///
    /// Each operation also has a dedicated accessor, e.g.
    /// [get_catalog()][DataCatalog::get_catalog]. This function is useful
    /// when the operation is selected at runtime.
    ///
    /// ```
    /// # use datacatalog::client::DataCatalog;
    /// # async fn sample(client: &DataCatalog) -> anyhow::Result<()> {
    /// let operation = datacatalog::operations::find("GetCatalog").expect("a known operation");
    /// let response = client
    ///     .operation(operation)
    ///     .set_path_parameter("catalogId", "ocid1.datacatalog.oc1..example")
    ///     .send::<serde_json::Value>()
    ///     .await?;
    /// # Ok(()) }
    /// ```
    pub fn operation(&self, operation: &'static Operation) -> RequestBuilder {
        RequestBuilder::new(self.inner.clone(), operation)
    }
}
