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

use bytes::Bytes;
use gax::Result;
use gax::backoff_policy::BackoffPolicy;
use gax::client_builder::Error as BuilderError;
use gax::error::{Error, ServiceError};
use gax::exponential_backoff::ExponentialBackoff;
use gax::response::{Parts, Response};
use gax::retry_policy::RetryPolicy;
use gax::signer::{Signer, SigningRequest};
use http::HeaderMap;
use http::header::{ACCEPT, CONTENT_TYPE, HeaderValue, USER_AGENT};
use std::sync::Arc;

/// The header used to ask the service to deduplicate retried requests.
pub const OPC_RETRY_TOKEN: &str = "opc-retry-token";
/// The header telling the service the client may retry the request.
pub const OPC_CLIENT_RETRIES: &str = "opc-client-retries";

const DEFAULT_USER_AGENT: &str = concat!("datacatalog-rust/", env!("CARGO_PKG_VERSION"));
const APPLICATION_JSON: &str = "application/json";

#[derive(Clone, Debug)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    signer: Signer,
    endpoint: String,
    user_agent: Option<String>,
    retry_policy: Option<Arc<dyn RetryPolicy>>,
    backoff_policy: Option<Arc<dyn BackoffPolicy>>,
}

impl ReqwestClient {
    pub async fn new(config: crate::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let endpoint = crate::options::endpoint(&config).ok_or_else(|| {
            BuilderError::endpoint("the client requires an explicit endpoint or a region")
        })?;
        let signer = config.signer.ok_or_else(|| {
            BuilderError::signer(
                "the client requires a signer, use `signer::anonymous::new()` for emulators",
            )
        })?;
        let inner = reqwest::Client::builder()
            .build()
            .map_err(BuilderError::transport)?;
        Ok(Self {
            inner,
            signer,
            endpoint,
            user_agent: config.user_agent,
            retry_policy: config.retry_policy,
            backoff_policy: config.backoff_policy,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn builder(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.inner
            .request(method, format!("{}{path}", &self.endpoint))
    }

    /// Returns true if requests with these options may be sent more than once.
    pub fn retries_enabled(&self, options: &gax::options::RequestOptions) -> bool {
        self.get_retry_policy(options)
            .is_some_and(|policy| policy.may_retry())
    }

    pub async fn execute<I: serde::ser::Serialize, O: serde::de::DeserializeOwned>(
        &self,
        mut builder: reqwest::RequestBuilder,
        body: Option<I>,
        options: gax::options::RequestOptions,
    ) -> Result<Response<O>> {
        let user_agent = match options.user_agent().as_ref().or(self.user_agent.as_ref()) {
            Some(prefix) => format!("{prefix} {DEFAULT_USER_AGENT}"),
            None => DEFAULT_USER_AGENT.to_string(),
        };
        builder = builder
            .header(
                USER_AGENT,
                HeaderValue::from_str(&user_agent).map_err(Error::ser)?,
            )
            .header(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
        if let Some(body) = body {
            let payload = serde_json::to_vec(&body).map_err(Error::ser)?;
            builder = builder
                .header(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON))
                .body(payload);
        }
        match self.get_retry_policy(&options) {
            Some(policy) if policy.may_retry() => {
                let builder = builder.header(OPC_CLIENT_RETRIES, HeaderValue::from_static("true"));
                self.retry_loop::<O>(builder, options, policy).await
            }
            _ => self.request_attempt::<O>(builder, &options, None).await,
        }
    }

    async fn retry_loop<O: serde::de::DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
        options: gax::options::RequestOptions,
        retry_policy: Arc<dyn RetryPolicy>,
    ) -> Result<Response<O>> {
        let idempotent = options.idempotent().unwrap_or(false);
        let backoff = self.get_backoff_policy(&options);
        let this = self.clone();
        let inner = async move |d| {
            // Request bodies are always in memory, cloning cannot fail.
            let builder = builder
                .try_clone()
                .ok_or_else(|| Error::ser("the request body cannot be cloned"))?;
            this.request_attempt(builder, &options, d).await
        };
        let sleep = async |d| tokio::time::sleep(d).await;
        gax::retry_loop_internal::retry_loop(inner, sleep, idempotent, retry_policy, backoff)
            .await
    }

    async fn request_attempt<O: serde::de::DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
        options: &gax::options::RequestOptions,
        remaining_time: Option<std::time::Duration>,
    ) -> Result<Response<O>> {
        let mut request = builder.build().map_err(Self::map_send_error)?;
        let url = request.url().to_string();
        let signing_headers = {
            let body = request.body().and_then(|b| b.as_bytes());
            let signing = SigningRequest::new(request.method(), &url, request.headers(), body);
            self.signer.sign(signing).await.map_err(|e| {
                tracing::warn!(url = %url, "cannot sign request: {e}");
                Error::authentication(e)
            })?
        };
        request.headers_mut().extend(signing_headers);
        *request.timeout_mut() =
            gax::retry_loop_internal::effective_timeout(options, remaining_time);
        tracing::debug!(
            method = %request.method(),
            url = %url,
            timeout = ?request.timeout(),
            "sending request"
        );

        let response = self
            .inner
            .execute(request)
            .await
            .map_err(Self::map_send_error)?;
        let status_code = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(Self::map_send_error)?;
        if !(200..300).contains(&status_code) {
            return Err(self::to_http_error(status_code, headers, body));
        }
        self::to_http_response(status_code, headers, body)
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }

    fn get_retry_policy(
        &self,
        options: &gax::options::RequestOptions,
    ) -> Option<Arc<dyn RetryPolicy>> {
        options
            .retry_policy()
            .clone()
            .or_else(|| self.retry_policy.clone())
    }

    pub(crate) fn get_backoff_policy(
        &self,
        options: &gax::options::RequestOptions,
    ) -> Arc<dyn BackoffPolicy> {
        options
            .backoff_policy()
            .clone()
            .or_else(|| self.backoff_policy.clone())
            .unwrap_or_else(|| Arc::new(ExponentialBackoff::default()))
    }
}

/// Generates a new value for the `opc-retry-token` header.
pub fn new_retry_token() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

pub fn to_http_error(status_code: u16, headers: HeaderMap, body: Bytes) -> Error {
    match ServiceError::try_from(&body) {
        Ok(error) => Error::service_with_http_metadata(error, Some(status_code), Some(headers)),
        Err(_) => Error::http(status_code, headers, body),
    }
}

pub fn to_http_response<O: serde::de::DeserializeOwned>(
    status_code: u16,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response<O>> {
    // Some operations, notably deletes and asynchronous actions, return no
    // content. Treat an empty body as `null`.
    let content: &[u8] = if body.is_empty() { b"null" } else { &body };
    let response = serde_json::from_slice::<O>(content).map_err(Error::deser)?;
    Ok(Response::from_parts(
        Parts::new()
            .set_status_code(status_code)
            .set_headers(headers),
        response,
    ))
}
