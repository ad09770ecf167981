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

//! Response types.
//!
//! This module contains the `Response` type returned by every client
//! operation, and the `Parts` type holding the response metadata.
//!
//! # Examples
//!
//! Inspecting the result of a request
//!
//! ```no_run
//! # use datacatalog_gax::Result;
//! # use datacatalog_gax::response::Response;
//! async fn get_catalog(catalog_id: &str) -> Result<Response<serde_json::Value>> {
//!   // ...
//! # panic!()
//! }
//!
//! # tokio_test::block_on(async {
//! let response = get_catalog("ocid1.datacatalog.oc1..example").await?;
//! if let Some(etag) = response.etag() {
//!     // use the etag in the `if-match` header of an update
//! }
//! let catalog = response.body();
//! # Result::<()>::Ok(()) });
//! ```
//!
//! Creating a response for mocks
//!
//! ```
//! # use datacatalog_gax::Result;
//! # use datacatalog_gax::response::Response;
//! fn make_mock_response(body: serde_json::Value) -> Result<Response<serde_json::Value>> {
//!     Ok(Response::from(body))
//! }
//! ```

/// The header carrying the service-assigned request id.
pub const OPC_REQUEST_ID: &str = "opc-request-id";
/// The header carrying the token for the next page in list operations.
pub const OPC_NEXT_PAGE: &str = "opc-next-page";
/// The header carrying the id of the work request for asynchronous operations.
pub const OPC_WORK_REQUEST_ID: &str = "opc-work-request-id";

/// Represents a Data Catalog service response.
///
/// A response consists of a body (potentially the unit type), and some
/// metadata: the HTTP status code and headers.
///
/// The service returns several well-known headers. This type provides
/// accessors for them, for example [etag][Response::etag] is needed to make
/// conditional updates, and [opc_next_page][Response::opc_next_page] is needed
/// to fetch the next page of a list operation.
#[derive(Clone, Debug)]
pub struct Response<T> {
    parts: Parts,
    body: T,
}

impl<T> Response<T> {
    /// Creates a response from the body.
    ///
    /// # Example
    /// ```
    /// # use datacatalog_gax::response::Response;
    /// let response = Response::from(serde_json::json!({"displayName": "test"}));
    /// assert!(response.headers().is_empty());
    /// ```
    pub fn from(body: T) -> Self {
        Self {
            body,
            parts: Parts::default(),
        }
    }

    /// Creates a response from the given parts.
    ///
    /// # Example
    /// ```
    /// # use datacatalog_gax::response::{Parts, Response};
    /// let mut headers = http::HeaderMap::new();
    /// headers.insert("etag", http::HeaderValue::from_static("abc123"));
    /// let response = Response::from_parts(Parts::new().set_headers(headers), ());
    /// assert_eq!(response.etag(), Some("abc123"));
    /// ```
    pub fn from_parts(parts: Parts, body: T) -> Self {
        Self { parts, body }
    }

    /// Returns the headers associated with this response.
    pub fn headers(&self) -> &http::HeaderMap<http::HeaderValue> {
        &self.parts.headers
    }

    /// Returns the HTTP status code, if the response came from the service.
    pub fn status_code(&self) -> Option<u16> {
        self.parts.status_code
    }

    /// Returns the body associated with this response.
    pub fn body(&self) -> &T {
        &self.body
    }

    /// Consumes the response returning the metadata, and body.
    pub fn into_parts(self) -> (Parts, T) {
        (self.parts, self.body)
    }

    /// Consumes the response returning only its body.
    pub fn into_body(self) -> T {
        self.body
    }

    /// Transforms the body, preserving the metadata.
    ///
    /// # Example
    /// ```
    /// # use datacatalog_gax::response::Response;
    /// let response = Response::from("42".to_string());
    /// let response = response.map(|s| s.len());
    /// assert_eq!(response.body(), &2);
    /// ```
    pub fn map<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        Response {
            parts: self.parts,
            body: f(self.body),
        }
    }

    /// The service-assigned request id.
    ///
    /// Include this value when contacting support about a request.
    pub fn opc_request_id(&self) -> Option<&str> {
        self.header_str(OPC_REQUEST_ID)
    }

    /// The entity tag of the returned resource.
    ///
    /// Use this value in the `if-match` header of an update or delete to
    /// ensure the resource has not changed since it was fetched.
    pub fn etag(&self) -> Option<&str> {
        self.header_str(http::header::ETAG.as_str())
    }

    /// The pagination token for the next page, if there are more results.
    pub fn opc_next_page(&self) -> Option<&str> {
        self.header_str(OPC_NEXT_PAGE)
    }

    /// The id of the work request tracking an asynchronous operation.
    pub fn opc_work_request_id(&self) -> Option<&str> {
        self.header_str(OPC_WORK_REQUEST_ID)
    }

    fn header_str(&self, name: &str) -> Option<&str> {
        self.parts.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Component parts of a response.
///
/// # Example
/// ```
/// # use datacatalog_gax::response::Parts;
/// let mut headers = http::HeaderMap::new();
/// headers.insert(http::header::CONTENT_TYPE, http::HeaderValue::from_static("application/json"));
/// let parts = Parts::new().set_status_code(200).set_headers(headers);
///
/// assert_eq!(
///     parts.headers.get(http::header::CONTENT_TYPE),
///     Some(&http::HeaderValue::from_static("application/json"))
/// );
/// ```
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct Parts {
    /// The HTTP status code, `None` for responses created in mocks.
    pub status_code: Option<u16>,
    /// The HTTP headers.
    pub headers: http::HeaderMap<http::HeaderValue>,
}

impl Parts {
    /// Create a new instance.
    pub fn new() -> Self {
        Parts::default()
    }

    /// Set the status code.
    pub fn set_status_code(mut self, v: u16) -> Self {
        self.status_code = Some(v);
        self
    }

    /// Set the headers.
    pub fn set_headers<V>(mut self, v: V) -> Self
    where
        V: Into<http::HeaderMap>,
    {
        self.headers = v.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn response_from() {
        let response = Response::from("abc123".to_string());
        assert!(response.headers().is_empty());
        assert!(response.status_code().is_none());
        assert_eq!(response.body().as_str(), "abc123");
        assert!(response.opc_request_id().is_none());
        assert!(response.etag().is_none());

        let body = response.into_body();
        assert_eq!(body.as_str(), "abc123");
    }

    #[test]
    fn response_from_parts() {
        let mut headers = http::HeaderMap::new();
        headers.insert(OPC_REQUEST_ID, HeaderValue::from_static("req-1"));
        headers.insert("etag", HeaderValue::from_static("etag-1"));
        headers.insert(OPC_NEXT_PAGE, HeaderValue::from_static("page-2"));
        headers.insert(OPC_WORK_REQUEST_ID, HeaderValue::from_static("wr-1"));
        let parts = Parts::new()
            .set_status_code(202)
            .set_headers(headers.clone());

        let response = Response::from_parts(parts, "abc123".to_string());
        assert_eq!(response.status_code(), Some(202));
        assert_eq!(response.opc_request_id(), Some("req-1"));
        assert_eq!(response.etag(), Some("etag-1"));
        assert_eq!(response.opc_next_page(), Some("page-2"));
        assert_eq!(response.opc_work_request_id(), Some("wr-1"));

        let (parts, body) = response.into_parts();
        assert_eq!(body.as_str(), "abc123");
        assert_eq!(parts.headers, headers);
    }

    #[test]
    fn map() {
        let mut headers = http::HeaderMap::new();
        headers.insert("etag", HeaderValue::from_static("etag-1"));
        let response = Response::from_parts(Parts::new().set_headers(headers), "abc");
        let response = response.map(str::len);
        assert_eq!(response.body(), &3);
        assert_eq!(response.etag(), Some("etag-1"));
    }
}
