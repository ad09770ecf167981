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

//! Describes the shape of a service operation.
//!
//! Every operation in the Data Catalog service follows the same pattern: a
//! path template with some `{name}` placeholders, a fixed set of query and
//! header parameters, and possibly a JSON body. An [Operation] captures that
//! shape as static data, the client validates and builds each request from
//! it.
//!
//! The service operations are defined in [crate::operations].

/// The HTTP verb used by an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl Verb {
    /// The verb as it appears on the wire.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
        }
    }
}

impl std::fmt::Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Verb> for reqwest::Method {
    fn from(value: Verb) -> Self {
        match value {
            Verb::Get => reqwest::Method::GET,
            Verb::Post => reqwest::Method::POST,
            Verb::Put => reqwest::Method::PUT,
            Verb::Delete => reqwest::Method::DELETE,
            Verb::Patch => reqwest::Method::PATCH,
        }
    }
}

/// How a parameter with multiple values is sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Style {
    /// The parameter takes a single value. Arrays are joined with commas.
    Single,
    /// The parameter is repeated once per value, e.g. `fields=a&fields=b`.
    Multi,
}

/// A query or header parameter declared by an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Parameter {
    /// The name of the parameter on the wire.
    pub name: &'static str,
    /// If true, requests without this parameter fail locally.
    pub required: bool,
    pub style: Style,
    /// The accepted values. An empty list accepts any value.
    pub allowed: &'static [&'static str],
}

impl Parameter {
    /// An optional parameter taking a single value.
    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            required: false,
            style: Style::Single,
            allowed: &[],
        }
    }

    /// A required parameter taking a single value.
    pub const fn required(name: &'static str) -> Self {
        Self {
            required: true,
            ..Self::optional(name)
        }
    }

    /// Repeat the parameter for each value.
    pub const fn multi(self) -> Self {
        Self {
            style: Style::Multi,
            ..self
        }
    }

    /// Restrict the parameter to a fixed set of values.
    pub const fn one_of(self, allowed: &'static [&'static str]) -> Self {
        Self { allowed, ..self }
    }

    /// Returns true if `value` is acceptable for this parameter.
    pub fn accepts(&self, value: &str) -> bool {
        self.allowed.is_empty() || self.allowed.contains(&value)
    }
}

/// Whether an operation takes a request body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Body {
    /// Sending a body is an error.
    None,
    /// The body may be omitted.
    Optional,
    /// Requests without a body fail locally.
    Required,
}

/// A service operation.
///
/// # Example
/// ```
/// # use datacatalog::operation::{Body, Operation, Parameter};
/// const HEADERS: &[Parameter] = &[Parameter::optional("opc-request-id")];
/// const GET_THING: Operation = Operation::get("GetThing", "/catalogs/{catalogId}/things/{thingKey}")
///     .with_headers(HEADERS);
/// assert_eq!(GET_THING.path_parameters().collect::<Vec<_>>(), vec!["catalogId", "thingKey"]);
/// assert!(GET_THING.is_idempotent());
/// assert_eq!(GET_THING.body, Body::None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Operation {
    /// The name of the operation, e.g. `GetCatalog`.
    pub name: &'static str,
    pub verb: Verb,
    /// The path template, relative to the endpoint.
    pub path: &'static str,
    pub query: &'static [Parameter],
    pub headers: &'static [Parameter],
    pub body: Body,
}

/// The header used to make retries of non-idempotent requests safe.
pub const OPC_RETRY_TOKEN: &str = gaxi::http::OPC_RETRY_TOKEN;

impl Operation {
    pub const fn new(name: &'static str, verb: Verb, path: &'static str) -> Self {
        Self {
            name,
            verb,
            path,
            query: &[],
            headers: &[],
            body: Body::None,
        }
    }

    pub const fn get(name: &'static str, path: &'static str) -> Self {
        Self::new(name, Verb::Get, path)
    }

    /// A `POST` operation, initially requiring a body.
    pub const fn post(name: &'static str, path: &'static str) -> Self {
        Self::new(name, Verb::Post, path).with_body(Body::Required)
    }

    /// A `PUT` operation, initially requiring a body.
    pub const fn put(name: &'static str, path: &'static str) -> Self {
        Self::new(name, Verb::Put, path).with_body(Body::Required)
    }

    pub const fn delete(name: &'static str, path: &'static str) -> Self {
        Self::new(name, Verb::Delete, path)
    }

    pub const fn with_query(self, query: &'static [Parameter]) -> Self {
        Self { query, ..self }
    }

    pub const fn with_headers(self, headers: &'static [Parameter]) -> Self {
        Self { headers, ..self }
    }

    pub const fn with_body(self, body: Body) -> Self {
        Self { body, ..self }
    }

    /// The names of the placeholders in the path template, in order.
    pub fn path_parameters(&self) -> impl Iterator<Item = &'static str> {
        gaxi::path_parameter::placeholders(self.path)
    }

    /// Finds a declared query parameter.
    pub fn query_parameter(&self, name: &str) -> Option<&'static Parameter> {
        self.query.iter().find(|p| p.name == name)
    }

    /// Finds a declared header parameter. Header names are case-insensitive.
    pub fn header_parameter(&self, name: &str) -> Option<&'static Parameter> {
        self.headers
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Returns true if the operation accepts an `opc-retry-token` header.
    pub fn accepts_retry_token(&self) -> bool {
        self.header_parameter(OPC_RETRY_TOKEN).is_some()
    }

    /// Returns true if sending the request more than once is safe.
    ///
    /// `GET`, `PUT` and `DELETE` requests are idempotent. A `POST` request is
    /// idempotent when it carries a retry token, the client generates one if
    /// the application does not provide it.
    pub fn is_idempotent(&self) -> bool {
        match self.verb {
            Verb::Get | Verb::Put | Verb::Delete => true,
            Verb::Post | Verb::Patch => self.accepts_retry_token(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const HEADERS: &[Parameter] = &[
        Parameter::optional("opc-request-id"),
        Parameter::optional("opc-retry-token"),
    ];
    const QUERY: &[Parameter] = &[
        Parameter::required("compartmentId"),
        Parameter::optional("fields").multi(),
        Parameter::optional("sortOrder").one_of(&["ASC", "DESC"]),
    ];

    #[test_case(Verb::Get, reqwest::Method::GET)]
    #[test_case(Verb::Post, reqwest::Method::POST)]
    #[test_case(Verb::Put, reqwest::Method::PUT)]
    #[test_case(Verb::Delete, reqwest::Method::DELETE)]
    #[test_case(Verb::Patch, reqwest::Method::PATCH)]
    fn verb(input: Verb, want: reqwest::Method) {
        assert_eq!(input.to_string(), want.as_str());
        assert_eq!(reqwest::Method::from(input), want);
    }

    #[test]
    fn parameters() {
        let p = Parameter::required("compartmentId");
        assert!(p.required);
        assert_eq!(p.style, Style::Single);
        assert!(p.accepts("anything"));

        let p = Parameter::optional("fields").multi();
        assert!(!p.required);
        assert_eq!(p.style, Style::Multi);

        let p = Parameter::optional("sortOrder").one_of(&["ASC", "DESC"]);
        assert!(p.accepts("ASC"));
        assert!(!p.accepts("asc"));
        assert!(!p.accepts(""));
    }

    #[test]
    fn lookups() {
        let op = Operation::get("ListThings", "/things")
            .with_query(QUERY)
            .with_headers(HEADERS);
        assert_eq!(
            op.query_parameter("fields").map(|p| p.style),
            Some(Style::Multi)
        );
        assert!(op.query_parameter("Fields").is_none());
        assert!(op.header_parameter("OPC-Request-ID").is_some());
        assert!(op.header_parameter("if-match").is_none());
        assert!(op.accepts_retry_token());
    }

    #[test]
    fn path_parameters() {
        let op = Operation::get(
            "GetJobLog",
            "/catalogs/{catalogId}/jobs/{jobKey}/executions/{jobExecutionKey}/logs/{jobLogKey}",
        );
        assert_eq!(
            op.path_parameters().collect::<Vec<_>>(),
            vec!["catalogId", "jobKey", "jobExecutionKey", "jobLogKey"]
        );
        let op = Operation::get("ListCatalogs", "/catalogs");
        assert_eq!(op.path_parameters().count(), 0);
    }

    #[test]
    fn idempotency() {
        assert!(Operation::get("Get", "/x").is_idempotent());
        assert!(Operation::put("Update", "/x").is_idempotent());
        assert!(Operation::delete("Delete", "/x").is_idempotent());
        assert!(!Operation::post("Search", "/x").is_idempotent());
        assert!(
            Operation::post("Create", "/x")
                .with_headers(HEADERS)
                .is_idempotent()
        );
        assert!(!Operation::new("Patch", Verb::Patch, "/x").is_idempotent());
    }

    #[test]
    fn bodies() {
        assert_eq!(Operation::get("Get", "/x").body, Body::None);
        assert_eq!(Operation::post("Create", "/x").body, Body::Required);
        assert_eq!(Operation::put("Update", "/x").body, Body::Required);
        assert_eq!(Operation::delete("Delete", "/x").body, Body::None);
        assert_eq!(
            Operation::post("Test", "/x").with_body(Body::Optional).body,
            Body::Optional
        );
    }
}
