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

//! Types to sign requests before they are sent.
//!
//! The Data Catalog service authenticates every request by inspecting a set
//! of signing headers. The client library does not implement any particular
//! signing algorithm. Instead, it calls a [RequestSigner] before each attempt
//! and adds the headers returned by the signer to the request.
//!
//! # Example
//! ```
//! # use datacatalog_gax::signer::*;
//! # use http::{HeaderMap, HeaderValue};
//! #[derive(Debug)]
//! struct MySigner;
//! #[async_trait::async_trait]
//! impl RequestSigner for MySigner {
//!     async fn sign(&self, request: SigningRequest<'_>) -> Result<HeaderMap> {
//!         let mut headers = HeaderMap::new();
//!         headers.insert("authorization", HeaderValue::from_static("Signature ..."));
//!         Ok(headers)
//!     }
//! }
//! let signer = Signer::from(MySigner);
//! ```

use http::{HeaderMap, HeaderName, HeaderValue, Method};
use std::sync::Arc;

pub type Result<T> = std::result::Result<T, SigningError>;

/// The request details available to a [RequestSigner].
///
/// Signing algorithms typically hash some of the headers, the target URL, and
/// the body. The client library provides all of them.
#[derive(Clone, Copy, Debug)]
#[non_exhaustive]
pub struct SigningRequest<'a> {
    /// The HTTP method.
    pub method: &'a Method,
    /// The full request URL, including the query string.
    pub url: &'a str,
    /// The headers set on the request so far.
    pub headers: &'a HeaderMap,
    /// The serialized body, if any.
    pub body: Option<&'a [u8]>,
}

impl<'a> SigningRequest<'a> {
    /// Creates a new instance.
    pub fn new(
        method: &'a Method,
        url: &'a str,
        headers: &'a HeaderMap,
        body: Option<&'a [u8]>,
    ) -> Self {
        Self {
            method,
            url,
            headers,
            body,
        }
    }
}

/// Computes the signing headers for a request.
///
/// Implementations may block on network calls, for example, to refresh a
/// session token. Errors marked as transient are retried by the
/// default retry policy, because the request never left the client.
#[async_trait::async_trait]
pub trait RequestSigner: Send + Sync + std::fmt::Debug {
    /// Returns the headers to add to `request`.
    async fn sign(&self, request: SigningRequest<'_>) -> Result<HeaderMap>;
}

/// A cloneable handle to a [RequestSigner].
#[derive(Clone, Debug)]
pub struct Signer {
    inner: Arc<dyn dynamic::RequestSigner>,
}

impl<T> std::convert::From<T> for Signer
where
    T: RequestSigner + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Signer {
    /// Returns the signing headers for `request`.
    pub async fn sign(&self, request: SigningRequest<'_>) -> Result<HeaderMap> {
        self.inner.sign(request).await
    }
}

pub(crate) mod dynamic {
    use super::{HeaderMap, Result, SigningRequest};

    /// A dyn-compatible, crate-private version of `RequestSigner`.
    #[async_trait::async_trait]
    pub trait RequestSigner: Send + Sync + std::fmt::Debug {
        async fn sign(&self, request: SigningRequest<'_>) -> Result<HeaderMap>;
    }

    /// The public RequestSigner implements the dyn-compatible RequestSigner.
    #[async_trait::async_trait]
    impl<T> RequestSigner for T
    where
        T: super::RequestSigner + Send + Sync,
    {
        async fn sign(&self, request: SigningRequest<'_>) -> Result<HeaderMap> {
            T::sign(self, request).await
        }
    }
}

/// A signer that adds no headers.
///
/// Useful with local emulators and in tests.
pub mod anonymous {
    use super::*;

    #[derive(Debug)]
    struct Anonymous;

    #[async_trait::async_trait]
    impl RequestSigner for Anonymous {
        async fn sign(&self, _request: SigningRequest<'_>) -> Result<HeaderMap> {
            Ok(HeaderMap::new())
        }
    }

    /// Returns a signer that adds no headers.
    pub fn new() -> Signer {
        Signer::from(Anonymous)
    }
}

/// A signer that adds a fixed set of headers to every request.
///
/// Useful with proxies that accept a bearer token, or with emulators.
///
/// # Example
/// ```
/// # use datacatalog_gax::signer::static_headers;
/// let signer = static_headers::Builder::new()
///     .with_header("authorization", "Bearer test-only-token")
///     .build()?;
/// # Ok::<(), datacatalog_gax::signer::SigningError>(())
/// ```
pub mod static_headers {
    use super::*;

    #[derive(Debug)]
    struct StaticHeaders(HeaderMap);

    #[async_trait::async_trait]
    impl RequestSigner for StaticHeaders {
        async fn sign(&self, _request: SigningRequest<'_>) -> Result<HeaderMap> {
            Ok(self.0.clone())
        }
    }

    /// Collects the headers for a static signer.
    #[derive(Debug, Default)]
    pub struct Builder {
        headers: Vec<(String, String)>,
    }

    impl Builder {
        pub fn new() -> Self {
            Self::default()
        }

        /// Adds a header. Later values with the same name are appended.
        pub fn with_header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
            self.headers.push((name.into(), value.into()));
            self
        }

        /// Creates the signer, validating the header names and values.
        pub fn build(self) -> Result<Signer> {
            let mut headers = HeaderMap::new();
            for (name, value) in self.headers {
                let name = HeaderName::try_from(name.as_str())
                    .map_err(|e| SigningError::new(false, e))?;
                let mut value =
                    HeaderValue::try_from(value).map_err(|e| SigningError::new(false, e))?;
                value.set_sensitive(true);
                headers.append(name, value);
            }
            Ok(Signer::from(StaticHeaders(headers)))
        }
    }
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Represents an error computing the signing headers.
#[derive(Debug)]
pub struct SigningError {
    transient: bool,
    source: BoxError,
}

const RETRYABLE_MSG: &str = "but future attempts may succeed";
const NON_RETRYABLE_MSG: &str = "and future attempts will not succeed";

impl std::fmt::Display for SigningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = if self.transient {
            RETRYABLE_MSG
        } else {
            NON_RETRYABLE_MSG
        };
        write!(f, "cannot sign the request, {msg}, source: {}", self.source)
    }
}

impl std::error::Error for SigningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl SigningError {
    /// Creates a new error.
    ///
    /// # Parameters
    /// * `transient` - if true, a future attempt to sign the request may succeed.
    /// * `source` - the underlying error.
    pub fn new<T: Into<BoxError>>(transient: bool, source: T) -> Self {
        Self {
            transient,
            source: source.into(),
        }
    }

    /// Creates a new error from a message.
    pub fn from_msg<T: Into<String>>(transient: bool, message: T) -> Self {
        Self::new(transient, message.into())
    }

    /// If true, a future attempt to sign the request may succeed.
    pub fn is_transient(&self) -> bool {
        self.transient
    }
}
