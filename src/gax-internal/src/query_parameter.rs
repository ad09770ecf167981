// Copyright 2024 Google LLC
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

//! Helpers to serialize query parameters.
//!
//! Query parameters in the Data Catalog service can be strings, integers,
//! booleans, timestamps, or arrays of any of these. The client library
//! represents all of them as a [serde_json::Value], and this module flattens
//! the value into the strings sent on the wire.

use serde_json::Value;

/// How arrays are sent as query parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrayFormat {
    /// Repeat the parameter for each element: `fields=a&fields=b`.
    Repeat,
    /// Join the elements with commas: `fields=a,b`.
    Csv,
}

/// The value cannot be represented as a query parameter.
#[derive(thiserror::Error, Debug, PartialEq)]
#[error("objects and nested arrays cannot be sent as query parameters")]
pub struct UnsupportedValue;

/// Flattens `value` into the values for a single query parameter.
///
/// Returns an empty vector for `null`, which means the parameter is omitted.
///
/// # Example
/// ```
/// # use datacatalog_gax_internal::query_parameter::{flatten, ArrayFormat};
/// # use serde_json::json;
/// assert_eq!(flatten(&json!(["a", "b"]), ArrayFormat::Repeat)?, vec!["a", "b"]);
/// assert_eq!(flatten(&json!(["a", "b"]), ArrayFormat::Csv)?, vec!["a,b"]);
/// assert!(flatten(&json!(null), ArrayFormat::Csv)?.is_empty());
/// # Ok::<(), datacatalog_gax_internal::query_parameter::UnsupportedValue>(())
/// ```
pub fn flatten(value: &Value, format: ArrayFormat) -> Result<Vec<String>, UnsupportedValue> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(array) => {
            let items = array
                .iter()
                .filter(|v| !v.is_null())
                .map(scalar)
                .collect::<Result<Vec<_>, _>>()?;
            match format {
                ArrayFormat::Repeat => Ok(items),
                ArrayFormat::Csv if items.is_empty() => Ok(items),
                ArrayFormat::Csv => Ok(vec![items.join(",")]),
            }
        }
        v => scalar(v).map(|s| vec![s]),
    }
}

fn scalar(value: &Value) -> Result<String, UnsupportedValue> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(format!("{n}")),
        Value::Bool(b) => Ok(format!("{b}")),
        Value::Null | Value::Array(_) | Value::Object(_) => Err(UnsupportedValue),
    }
}
