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

//! Helpers to build the request path.
//!
//! Parameters used to build the request path (aka 'path parameters') are
//! always required. The service keys are opaque strings, they may contain
//! characters with special meaning in a URL and must be encoded.

use gax::error::Error;
use gax::error::binding::BindingError;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

// Everything except the RFC 3986 unreserved characters.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encodes a single path segment.
///
/// # Example
/// ```
/// # use datacatalog_gax_internal::path_parameter::encode;
/// assert_eq!(encode("a b/c"), "a%20b%2Fc");
/// ```
pub fn encode(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

/// Returns true if the value cannot be used as a path parameter.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Returns true if the value is a `.` or `..` segment.
///
/// Percent-encoding does not help: URL parsers also treat `%2E` and `%2E%2E`
/// as dot segments and remove them.
pub fn is_dot_segment(value: &str) -> bool {
    matches!(value, "." | "..")
}

/// The error returned for `.` and `..` path parameters.
pub fn dot_segment(operation: &'static str, name: &str, value: &str) -> Error {
    Error::binding(BindingError::InvalidPathValue {
        operation,
        name: name.to_string(),
        value: value.to_string(),
    })
}

/// The error returned for missing or blank path parameters.
pub fn missing(operation: &'static str, name: &str) -> Error {
    Error::binding(BindingError::MissingRequiredParameter {
        operation,
        name: name.to_string(),
    })
}

/// Substitutes each `{name}` placeholder in `template`.
///
/// The `lookup` function returns the value for each placeholder. Values are
/// percent-encoded before substitution.
///
/// # Example
/// ```
/// # use datacatalog_gax_internal::path_parameter::expand;
/// let path = expand("/catalogs/{catalogId}/dataAssets/{dataAssetKey}", |name| match name {
///     "catalogId" => Ok("ocid1.catalog"),
///     _ => Ok("my asset"),
/// })?;
/// assert_eq!(path, "/catalogs/ocid1.catalog/dataAssets/my%20asset");
/// # Ok::<(), gax::error::Error>(())
/// ```
pub fn expand<'a, F>(template: &str, mut lookup: F) -> gax::Result<String>
where
    F: FnMut(&str) -> gax::Result<&'a str>,
{
    let mut path = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        path.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        let Some(end) = tail.find('}') else {
            // Unbalanced braces are copied verbatim.
            path.push_str(&rest[start..]);
            return Ok(path);
        };
        let value = lookup(&tail[..end])?;
        path.push_str(&encode(value));
        rest = &tail[end + 1..];
    }
    path.push_str(rest);
    Ok(path)
}

/// The names of the `{name}` placeholders in `template`, in order.
pub fn placeholders(template: &str) -> impl Iterator<Item = &str> {
    template
        .split('{')
        .skip(1)
        .filter_map(|s| s.split_once('}').map(|(name, _)| name))
}
