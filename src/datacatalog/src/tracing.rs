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
use ::tracing::{Instrument, Span, field};
use gax::error::Error;
use gax::options::RequestOptions;
use gax::response::Response;
use serde_json::Value;

const STATUS: &str = "otel.status_code";
const STATUS_DESCRIPTION: &str = "otel.status_description";
const ERROR_TYPE: &str = "error.type";
const RESPONSE_STATUS_CODE: &str = "http.response.status_code";
const REQUEST_ID: &str = "opc_request_id";

/// Implements a [DataCatalog](crate::stub::DataCatalog) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct DataCatalog<T>
where
    T: crate::stub::DataCatalog + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> DataCatalog<T>
where
    T: crate::stub::DataCatalog + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> crate::stub::DataCatalog for DataCatalog<T>
where
    T: crate::stub::DataCatalog + std::fmt::Debug + Send + Sync,
{
    async fn execute(
        &self,
        operation: &'static Operation,
        request: OperationRequest,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let span = request_span(operation);
        let result = self
            .inner
            .execute(operation, request, options)
            .instrument(span.clone())
            .await;
        record_outcome(&span, &result);
        result
    }
}

fn request_span(operation: &'static Operation) -> Span {
    ::tracing::info_span!(
        "datacatalog_request",
        operation = operation.name,
        "http.method" = operation.verb.as_str(),
        "url.template" = operation.path,
        { STATUS } = "UNSET",
        { STATUS_DESCRIPTION } = field::Empty,
        { ERROR_TYPE } = field::Empty,
        { RESPONSE_STATUS_CODE } = field::Empty,
        { REQUEST_ID } = field::Empty,
    )
}

fn record_outcome(span: &Span, result: &Result<Response<Value>>) {
    match result {
        Ok(response) => {
            span.record(STATUS, "OK");
            if let Some(code) = response.status_code() {
                span.record(RESPONSE_STATUS_CODE, code as i64);
            }
            if let Some(id) = response.opc_request_id() {
                span.record(REQUEST_ID, id);
            }
            ::tracing::debug!(parent: span, "request completed");
        }
        Err(e) => {
            span.record(STATUS, "ERROR");
            span.record(ERROR_TYPE, error_type(e));
            span.record(STATUS_DESCRIPTION, e.to_string());
            if let Some(code) = e.http_status_code() {
                span.record(RESPONSE_STATUS_CODE, code as i64);
            }
            if let Some(id) = e.opc_request_id() {
                span.record(REQUEST_ID, id);
            }
            ::tracing::debug!(parent: span, "request failed: {e}");
        }
    }
}

/// A low-cardinality name for the error.
///
/// Service errors use the service's error code, e.g. `NotAuthorizedOrNotFound`.
fn error_type(error: &Error) -> String {
    if let Some(service) = error.service_error() {
        return service.code.clone();
    }
    if let Some(code) = error.http_status_code() {
        return code.to_string();
    }
    let name = match error {
        e if e.is_binding() => "CLIENT_REQUEST_ERROR",
        e if e.is_serialization() => "CLIENT_REQUEST_ERROR",
        e if e.is_deserialization() => "CLIENT_RESPONSE_DECODE_ERROR",
        e if e.is_authentication() => "CLIENT_AUTHENTICATION_ERROR",
        e if e.is_timeout() => "CLIENT_TIMEOUT",
        e if e.is_exhausted() => "CLIENT_RETRY_EXHAUSTED",
        e if e.is_io() => "CLIENT_CONNECTION_ERROR",
        _ => "UNKNOWN",
    };
    name.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::{GET_CATALOG, LIST_CATALOGS};
    use gax::error::ServiceError;
    use gax::error::binding::BindingError;
    use gax::response::Parts;
    use http::{HeaderMap, HeaderValue};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tracing_subscriber::util::SubscriberInitExt;

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

    #[tokio::test]
    async fn forwards_success() -> anyhow::Result<()> {
        let _guard = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(::tracing::Level::DEBUG)
            .set_default();
        let mut mock = MockDataCatalog::new();
        mock.expect_execute()
            .withf(|op, request, _| {
                op.name == "GetCatalog" && request.path_parameter("catalogId") == Some("c")
            })
            .return_once(|_, _, _| {
                let mut headers = HeaderMap::new();
                headers.insert("opc-request-id", HeaderValue::from_static("req-1"));
                let parts = Parts::new().set_status_code(200).set_headers(headers);
                Ok(Response::from_parts(parts, json!({"id": "c"})))
            });
        let stub = DataCatalog::new(mock);
        let response = crate::stub::DataCatalog::execute(
            &stub,
            &GET_CATALOG,
            OperationRequest::default().set_path_parameter("catalogId", "c"),
            RequestOptions::default(),
        )
        .await?;
        assert_eq!(response.opc_request_id(), Some("req-1"));
        assert_eq!(response.into_body(), json!({"id": "c"}));
        Ok(())
    }

    #[tokio::test]
    async fn forwards_error() {
        let mut mock = MockDataCatalog::new();
        mock.expect_execute().return_once(|_, _, _| {
            Err(Error::binding(BindingError::MissingRequiredParameter {
                operation: "ListCatalogs",
                name: "compartmentId".to_string(),
            }))
        });
        let stub = DataCatalog::new(mock);
        let got = crate::stub::DataCatalog::execute(
            &stub,
            &LIST_CATALOGS,
            OperationRequest::default(),
            RequestOptions::default(),
        )
        .await;
        assert!(matches!(&got, Err(e) if e.is_binding()), "{got:?}");
    }

    #[test]
    fn error_types() {
        let service = ServiceError::default()
            .set_code("NotAuthorizedOrNotFound")
            .set_message("not found");
        let e = Error::service_with_http_metadata(service, Some(404), None);
        assert_eq!(error_type(&e), "NotAuthorizedOrNotFound");

        let e = Error::http(502, HeaderMap::new(), bytes::Bytes::from_static(b"bad gateway"));
        assert_eq!(error_type(&e), "502");

        let e = Error::timeout("deadline");
        assert_eq!(error_type(&e), "CLIENT_TIMEOUT");

        let e = Error::io("connection reset");
        assert_eq!(error_type(&e), "CLIENT_CONNECTION_ERROR");

        let e = Error::deser("bad json");
        assert_eq!(error_type(&e), "CLIENT_RESPONSE_DECODE_ERROR");
    }
}
