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
use crate::operation::{OPC_RETRY_TOKEN, Operation};
use crate::request::OperationRequest;
use gax::error::Error;
use gax::options::RequestOptions;
use gax::response::Response;
use std::sync::Arc;

/// A builder for [DataCatalog][crate::client::DataCatalog].
///
/// ```
/// # tokio_test::block_on(async {
/// # use datacatalog::*;
/// # use builder::ClientBuilder;
/// # use client::DataCatalog;
/// let builder: ClientBuilder = DataCatalog::builder();
/// let client = builder
///     .with_endpoint("http://localhost:8080/20190325")
///     .with_signer(gax::signer::anonymous::new())
///     .build()
///     .await?;
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
pub type ClientBuilder =
    gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Signer>;

pub(crate) mod client {
    use super::super::client::DataCatalog;
    pub struct Factory;
    impl gax::client_builder::internal::ClientFactory for Factory {
        type Client = DataCatalog;
        type Signer = gaxi::options::Signer;
        async fn build(
            self,
            config: gaxi::options::ClientConfig,
        ) -> gax::client_builder::Result<Self::Client> {
            Self::Client::new(config).await
        }
    }
}

/// The request builder for all [DataCatalog][crate::client::DataCatalog] operations.
///
/// Obtain one from the client accessor for the operation, set the parameters,
/// and then call [send][RequestBuilder::send].
///
/// # Example
/// ```
/// # use datacatalog::client::DataCatalog;
/// # async fn sample(client: &DataCatalog) -> anyhow::Result<()> {
/// use gax::options::RequestOptionsBuilder;
/// use serde_json::{Value, json};
/// let response = client
///     .create_glossary()
///     .set_path_parameter("catalogId", "ocid1.datacatalog.oc1..example")
///     .set_body(json!({"displayName": "Finance"}))
///     .with_attempt_timeout(std::time::Duration::from_secs(30))
///     .send::<Value>()
///     .await?;
/// println!("created {:?} with etag {:?}", response.body(), response.etag());
/// # Ok(()) }
/// ```
#[derive(Debug)]
pub struct RequestBuilder {
    stub: Arc<dyn crate::stub::dynamic::DataCatalog>,
    operation: &'static Operation,
    request: OperationRequest,
    options: RequestOptions,
    // The first failure converting a value to JSON, reported by `send()`.
    error: Option<Error>,
}

impl RequestBuilder {
    pub(crate) fn new(
        stub: Arc<dyn crate::stub::dynamic::DataCatalog>,
        operation: &'static Operation,
    ) -> Self {
        Self {
            stub,
            operation,
            request: OperationRequest::default(),
            options: RequestOptions::default(),
            error: None,
        }
    }

    /// The operation this builder sends.
    pub fn operation(&self) -> &'static Operation {
        self.operation
    }

    /// The request parameters set so far.
    pub fn request(&self) -> &OperationRequest {
        &self.request
    }

    /// Sends the request.
    ///
    /// The response body is deserialized as `O`. Use [serde_json::Value] to
    /// receive the raw JSON, or `()` for operations that return no content.
    pub async fn send<O>(self) -> Result<Response<O>>
    where
        O: serde::de::DeserializeOwned,
    {
        if let Some(e) = self.error {
            return Err(e);
        }
        let response = self
            .stub
            .execute(self.operation, self.request, self.options)
            .await?;
        let (parts, body) = response.into_parts();
        let body = serde_json::from_value::<O>(body).map_err(Error::deser)?;
        Ok(Response::from_parts(parts, body))
    }

    /// Sets a path parameter, e.g. `catalogId`.
    pub fn set_path_parameter<K: Into<String>, V: Into<String>>(mut self, name: K, v: V) -> Self {
        self.request = self.request.set_path_parameter(name, v);
        self
    }

    /// Sets a query parameter.
    ///
    /// The value can be any type serializing to a JSON string, number,
    /// boolean, or an array of these. `None` leaves the parameter unset.
    pub fn set_query_parameter<K, V>(mut self, name: K, v: V) -> Self
    where
        K: Into<String>,
        V: serde::Serialize,
    {
        match serde_json::to_value(v) {
            Ok(v) => self.request = self.request.set_query_parameter(name, v),
            Err(e) => self.defer(Error::ser(e)),
        }
        self
    }

    /// Sets a header parameter, e.g. `if-match`.
    pub fn set_header<K: AsRef<str>, V: Into<String>>(mut self, name: K, v: V) -> Self {
        self.request = self.request.set_header(name, v);
        self
    }

    /// Sets the `opc-request-id` header, used to correlate requests with the service logs.
    pub fn set_opc_request_id<V: Into<String>>(self, v: V) -> Self {
        self.set_header(gax::response::OPC_REQUEST_ID, v)
    }

    /// Sets the `if-match` header for optimistic concurrency control.
    pub fn set_if_match<V: Into<String>>(self, v: V) -> Self {
        self.set_header("if-match", v)
    }

    /// Sets the `opc-retry-token` header.
    ///
    /// The client generates a token for operations that accept one when
    /// retries are enabled. Set the token explicitly to deduplicate requests
    /// across separate calls.
    pub fn set_retry_token<V: Into<String>>(self, v: V) -> Self {
        self.set_header(OPC_RETRY_TOKEN, v)
    }

    /// Sets the request body.
    pub fn set_body<V: serde::Serialize>(mut self, v: V) -> Self {
        match serde_json::to_value(v) {
            Ok(v) => self.request = self.request.set_body(v),
            Err(e) => self.defer(Error::ser(e)),
        }
        self
    }

    fn defer(&mut self, error: Error) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }
}

impl gax::options::internal::RequestBuilder for RequestBuilder {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::DataCatalog;
    use gax::options::RequestOptionsBuilder;
    use gax::response::Parts;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use std::collections::BTreeMap;
    use std::time::Duration;
    type TestResult = anyhow::Result<()>;

    mockall::mock! {
        #[derive(Debug)]
        DataCatalog {}
        impl crate::stub::DataCatalog for DataCatalog {
            async fn execute(
                &self,
                operation: &'static Operation,
                request: OperationRequest,
                options: RequestOptions,
            ) -> Result<Response<Value>>;
        }
    }

    #[derive(Debug, serde::Deserialize, PartialEq)]
    struct Catalog {
        id: String,
    }

    #[tokio::test]
    async fn send_typed() -> TestResult {
        let mut mock = MockDataCatalog::new();
        mock.expect_execute()
            .withf(|op, request, options| {
                op.name == "GetCatalog"
                    && request.path_parameter("catalogId") == Some("c")
                    && request.header("opc-request-id") == Some("r")
                    && options.attempt_timeout() == &Some(Duration::from_secs(5))
            })
            .return_once(|_, _, _| {
                Ok(Response::from_parts(
                    Parts::new().set_status_code(200),
                    json!({"id": "c"}),
                ))
            });
        let client = DataCatalog::from_stub(mock);
        let response = client
            .get_catalog()
            .set_path_parameter("catalogId", "c")
            .set_opc_request_id("r")
            .with_attempt_timeout(Duration::from_secs(5))
            .send::<Catalog>()
            .await?;
        assert_eq!(response.status_code(), Some(200));
        assert_eq!(
            response.into_body(),
            Catalog {
                id: "c".to_string()
            }
        );
        Ok(())
    }

    #[tokio::test]
    async fn send_deser_error() {
        let mut mock = MockDataCatalog::new();
        mock.expect_execute()
            .return_once(|_, _, _| Ok(Response::from(json!([1, 2, 3]))));
        let client = DataCatalog::from_stub(mock);
        let got = client.get_catalog().send::<Catalog>().await;
        assert!(matches!(&got, Err(e) if e.is_deserialization()), "{got:?}");
    }

    #[tokio::test]
    async fn query_and_body() -> TestResult {
        let mut mock = MockDataCatalog::new();
        mock.expect_execute()
            .withf(|op, request, _| {
                op.name == "ListCatalogs"
                    && request.query_parameter("compartmentId") == Some(&json!("c"))
                    && request.query_parameter("limit") == Some(&json!(10))
                    && request.query_parameter("page") == Some(&Value::Null)
                    && request.body().is_none()
            })
            .return_once(|_, _, _| Ok(Response::from(json!([]))));
        let client = DataCatalog::from_stub(mock);
        let response = client
            .list_catalogs()
            .set_query_parameter("compartmentId", "c")
            .set_query_parameter("limit", 10)
            .set_query_parameter("page", None::<String>)
            .send::<Value>()
            .await?;
        assert_eq!(response.into_body(), json!([]));
        Ok(())
    }

    #[tokio::test]
    async fn serialization_error_is_deferred() {
        // JSON object keys must be strings.
        let bad = BTreeMap::from([((1, 2), "x")]);
        let mut mock = MockDataCatalog::new();
        mock.expect_execute().never();
        let client = DataCatalog::from_stub(mock);
        let got = client
            .create_catalog()
            .set_body(&bad)
            .set_retry_token("t")
            .send::<Value>()
            .await;
        assert!(matches!(&got, Err(e) if e.is_serialization()), "{got:?}");
    }

    #[tokio::test]
    async fn headers() {
        let mock = MockDataCatalog::new();
        let client = DataCatalog::from_stub(mock);
        let builder = client
            .update_catalog()
            .set_if_match("etag-1")
            .set_retry_token("token");
        assert_eq!(builder.operation().name, "UpdateCatalog");
        assert_eq!(builder.request().header("If-Match"), Some("etag-1"));
        assert_eq!(builder.request().header(OPC_RETRY_TOKEN), Some("token"));
    }
}
