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

use serde_json::Value;
use std::collections::BTreeMap;

/// The parameters of a single request, before validation.
///
/// The client validates these values against the [Operation] they are sent
/// with. Applications mocking [stub::DataCatalog] receive this type and can
/// inspect the parameters with the accessors.
///
/// # Example
/// ```
/// # use datacatalog::request::OperationRequest;
/// # use serde_json::json;
/// let request = OperationRequest::default()
///     .set_path_parameter("catalogId", "ocid1.datacatalog.oc1..example")
///     .set_query_parameter("fields", json!(["key", "displayName"]))
///     .set_header("opc-request-id", "my-request");
/// assert_eq!(request.path_parameter("catalogId"), Some("ocid1.datacatalog.oc1..example"));
/// assert_eq!(request.header("OPC-Request-Id"), Some("my-request"));
/// ```
///
/// [Operation]: crate::operation::Operation
/// [stub::DataCatalog]: crate::stub::DataCatalog
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct OperationRequest {
    path: BTreeMap<String, String>,
    query: BTreeMap<String, Value>,
    // Keys are lowercase.
    headers: BTreeMap<String, String>,
    body: Option<Value>,
}

impl OperationRequest {
    /// Sets the value of a path parameter, replacing any previous value.
    pub fn set_path_parameter<K: Into<String>, V: Into<String>>(mut self, name: K, v: V) -> Self {
        self.path.insert(name.into(), v.into());
        self
    }

    /// Sets the value of a query parameter.
    ///
    /// Setting a parameter to `null` is equivalent to not setting it.
    pub fn set_query_parameter<K: Into<String>>(mut self, name: K, v: Value) -> Self {
        self.query.insert(name.into(), v);
        self
    }

    /// Sets the value of a header. Header names are case-insensitive.
    pub fn set_header<K: AsRef<str>, V: Into<String>>(mut self, name: K, v: V) -> Self {
        self.headers
            .insert(name.as_ref().to_ascii_lowercase(), v.into());
        self
    }

    pub fn set_body(mut self, v: Value) -> Self {
        self.body = Some(v);
        self
    }

    pub fn set_or_clear_body(mut self, v: Option<Value>) -> Self {
        self.body = v;
        self
    }

    pub fn path_parameter(&self, name: &str) -> Option<&str> {
        self.path.get(name).map(String::as_str)
    }

    pub fn query_parameter(&self, name: &str) -> Option<&Value> {
        self.query.get(name)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    pub fn path_parameters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.path.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn query_parameters(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.query.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub(crate) fn take_body(&mut self) -> Option<Value> {
        self.body.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn replace_values() {
        let request = OperationRequest::default()
            .set_path_parameter("catalogId", "a")
            .set_path_parameter("catalogId", "b")
            .set_header("If-Match", "etag-1")
            .set_header("if-match", "etag-2");
        assert_eq!(request.path_parameter("catalogId"), Some("b"));
        assert_eq!(request.header("IF-MATCH"), Some("etag-2"));
        assert_eq!(request.headers().count(), 1);
    }

    #[test]
    fn query_and_body() {
        let mut request = OperationRequest::default()
            .set_query_parameter("limit", json!(10))
            .set_query_parameter("fields", json!(["key"]))
            .set_body(json!({"displayName": "test"}));
        assert_eq!(request.query_parameter("limit"), Some(&json!(10)));
        let names = request
            .query_parameters()
            .map(|(k, _)| k)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["fields", "limit"]);
        assert_eq!(request.body(), Some(&json!({"displayName": "test"})));
        assert_eq!(request.take_body(), Some(json!({"displayName": "test"})));
        assert_eq!(request.body(), None);

        let request = request.set_or_clear_body(Some(json!(1))).set_or_clear_body(None);
        assert!(request.body().is_none());
    }
}
