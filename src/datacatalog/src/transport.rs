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
use crate::operation::{Body, OPC_RETRY_TOKEN, Operation, Parameter, Style};
use crate::request::OperationRequest;
use gax::error::Error;
use gax::error::binding::{BindingError, ParameterLocation};
use gax::options::RequestOptions;
use gax::response::Response;
use gaxi::path_parameter;
use gaxi::query_parameter::{ArrayFormat, flatten};
use http::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;

/// A request validated against its operation, ready to send.
#[derive(Debug)]
pub(crate) struct Binding {
    pub method: reqwest::Method,
    /// The path with all placeholders substituted, relative to the endpoint.
    pub path: String,
    /// The query parameters, in the order declared by the operation.
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
    pub body: Option<Value>,
    pub idempotent: bool,
}

/// Validates `request` against `operation` and computes the wire request.
pub(crate) fn bind(operation: &'static Operation, mut request: OperationRequest) -> Result<Binding> {
    check_declared(operation, &request)?;

    let path = path_parameter::expand(operation.path, |name| {
        let value = request
            .path_parameter(name)
            .filter(|v| !path_parameter::is_blank(v))
            .ok_or_else(|| path_parameter::missing(operation.name, name))?;
        if path_parameter::is_dot_segment(value) {
            return Err(path_parameter::dot_segment(operation.name, name, value));
        }
        Ok(value)
    })?;

    let mut query = Vec::new();
    for parameter in operation.query {
        let value = request.query_parameter(parameter.name).unwrap_or(&Value::Null);
        let format = match parameter.style {
            Style::Single => ArrayFormat::Csv,
            Style::Multi => ArrayFormat::Repeat,
        };
        let values = flatten(value, format).map_err(|_| {
            Error::binding(BindingError::InvalidQueryValue {
                operation: operation.name,
                name: parameter.name.to_string(),
            })
        })?;
        if values.is_empty() {
            check_required(operation, parameter)?;
            continue;
        }
        // Check each element, comma-joined values are checked before joining.
        for v in flatten(value, ArrayFormat::Repeat).unwrap_or_default() {
            check_allowed(operation, parameter, &v)?;
        }
        query.extend(values.into_iter().map(|v| (parameter.name.to_string(), v)));
    }

    let mut headers = HeaderMap::new();
    for parameter in operation.headers {
        let Some(value) = request.header(parameter.name) else {
            check_required(operation, parameter)?;
            continue;
        };
        check_allowed(operation, parameter, value)?;
        let name = HeaderName::from_static(parameter.name);
        let value = HeaderValue::from_str(value).map_err(Error::binding)?;
        headers.insert(name, value);
    }

    let body = request.take_body();
    match (operation.body, &body) {
        (Body::Required, None) => {
            return Err(Error::binding(BindingError::MissingBody {
                operation: operation.name,
            }));
        }
        (Body::None, Some(_)) => {
            return Err(Error::binding(BindingError::UnexpectedBody {
                operation: operation.name,
            }));
        }
        _ => {}
    }

    Ok(Binding {
        method: operation.verb.into(),
        path,
        query,
        headers,
        body,
        idempotent: operation.is_idempotent(),
    })
}

fn check_declared(operation: &'static Operation, request: &OperationRequest) -> Result<()> {
    let unsupported = |location, name: &str| {
        Error::binding(BindingError::UnsupportedParameter {
            operation: operation.name,
            location,
            name: name.to_string(),
        })
    };
    if let Some((name, _)) = request
        .path_parameters()
        .find(|(name, _)| !operation.path_parameters().any(|p| p == *name))
    {
        return Err(unsupported(ParameterLocation::Path, name));
    }
    if let Some((name, _)) = request
        .query_parameters()
        .find(|(name, _)| operation.query_parameter(name).is_none())
    {
        return Err(unsupported(ParameterLocation::Query, name));
    }
    if let Some((name, _)) = request
        .headers()
        .find(|(name, _)| operation.header_parameter(name).is_none())
    {
        return Err(unsupported(ParameterLocation::Header, name));
    }
    Ok(())
}

fn check_required(operation: &'static Operation, parameter: &Parameter) -> Result<()> {
    if parameter.required {
        return Err(path_parameter::missing(operation.name, parameter.name));
    }
    Ok(())
}

fn check_allowed(operation: &'static Operation, parameter: &Parameter, value: &str) -> Result<()> {
    if parameter.accepts(value) {
        return Ok(());
    }
    Err(Error::binding(BindingError::InvalidValue {
        operation: operation.name,
        name: parameter.name.to_string(),
        value: value.to_string(),
        allowed: parameter.allowed,
    }))
}

/// Implements [crate::stub::DataCatalog] over HTTP.
#[derive(Clone, Debug)]
pub struct DataCatalog {
    inner: gaxi::http::ReqwestClient,
}

impl DataCatalog {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config).await?;
        Ok(Self { inner })
    }
}

impl crate::stub::DataCatalog for DataCatalog {
    async fn execute(
        &self,
        operation: &'static Operation,
        request: OperationRequest,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let mut binding = bind(operation, request)?;
        let options =
            gax::options::internal::set_default_idempotency(options, binding.idempotent);
        if operation.accepts_retry_token()
            && !binding.headers.contains_key(OPC_RETRY_TOKEN)
            && self.inner.retries_enabled(&options)
        {
            let token = HeaderValue::from_str(&gaxi::http::new_retry_token())
                .map_err(Error::binding)?;
            binding
                .headers
                .insert(HeaderName::from_static(OPC_RETRY_TOKEN), token);
        }
        let builder = self
            .inner
            .builder(binding.method, &binding.path)
            .query(&binding.query)
            .headers(binding.headers);
        self.inner.execute(builder, binding.body, options).await
    }
}
