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

/// A failure to bind a request to its operation.
///
/// Each service operation declares its path parameters, query parameters,
/// header parameters, and whether it takes a body. The client validates the
/// request against that declaration before sending anything. Any mismatch is
/// reported with one of these variants, wrapped in an
/// [Error][crate::error::Error] where [is_binding][crate::error::Error::is_binding]
/// returns `true`.
///
/// # Example
/// ```
/// # use datacatalog_gax::error::{Error, binding::BindingError};
/// # use std::error::Error as _;
/// let error = Error::binding(BindingError::MissingRequiredParameter {
///     operation: "GetCatalog",
///     name: "catalogId".to_string(),
/// });
/// assert!(error.is_binding());
/// let source = error.source().and_then(|e| e.downcast_ref::<BindingError>());
/// assert!(matches!(source, Some(BindingError::MissingRequiredParameter { .. })));
/// ```
#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum BindingError {
    /// A required parameter is not set, or it is set to a blank value.
    #[error(
        "missing required parameter {name} in {operation}, it cannot be unset, whitespace or an empty string"
    )]
    MissingRequiredParameter {
        operation: &'static str,
        name: String,
    },

    /// The value would change the meaning of the request path, e.g. `..`.
    #[error(
        "invalid value {value:?} for path parameter {name} in {operation}, `.` and `..` are relative path segments"
    )]
    InvalidPathValue {
        operation: &'static str,
        name: String,
        value: String,
    },

    /// The operation does not declare a parameter with this name.
    #[error("{operation} does not support the {location} parameter {name}")]
    UnsupportedParameter {
        operation: &'static str,
        location: ParameterLocation,
        name: String,
    },

    /// The parameter only accepts a fixed set of values.
    #[error("invalid value {value:?} for {name} in {operation}, must be one of {allowed:?}")]
    InvalidValue {
        operation: &'static str,
        name: String,
        value: String,
        allowed: &'static [&'static str],
    },

    /// The value cannot be represented as a query parameter.
    #[error("the value for query parameter {name} in {operation} must be a scalar or an array")]
    InvalidQueryValue {
        operation: &'static str,
        name: String,
    },

    /// The operation requires a body and none was provided.
    #[error("{operation} requires a request body")]
    MissingBody { operation: &'static str },

    /// The operation does not take a body and one was provided.
    #[error("{operation} does not accept a request body")]
    UnexpectedBody { operation: &'static str },
}

/// Where a request parameter is placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
}

impl std::fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Path => "path",
            Self::Query => "query",
            Self::Header => "header",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_required() {
        let e = BindingError::MissingRequiredParameter {
            operation: "GetCatalog",
            name: "catalogId".to_string(),
        };
        let fmt = e.to_string();
        assert!(fmt.contains("catalogId"), "{fmt}");
        assert!(fmt.contains("GetCatalog"), "{fmt}");
    }

    #[test]
    fn invalid_path_value() {
        let e = BindingError::InvalidPathValue {
            operation: "DeleteDataAsset",
            name: "dataAssetKey".to_string(),
            value: "..".to_string(),
        };
        let fmt = e.to_string();
        assert!(fmt.contains("dataAssetKey"), "{fmt}");
        assert!(fmt.contains("\"..\""), "{fmt}");
    }

    #[test]
    fn unsupported() {
        let e = BindingError::UnsupportedParameter {
            operation: "ListCatalogs",
            location: ParameterLocation::Query,
            name: "pageSize".to_string(),
        };
        let fmt = e.to_string();
        assert!(fmt.contains("query parameter pageSize"), "{fmt}");
    }

    #[test]
    fn invalid_value() {
        let e = BindingError::InvalidValue {
            operation: "ListCatalogs",
            name: "sortOrder".to_string(),
            value: "UP".to_string(),
            allowed: &["ASC", "DESC"],
        };
        let fmt = e.to_string();
        assert!(fmt.contains("\"UP\""), "{fmt}");
        assert!(fmt.contains("ASC"), "{fmt}");
        assert!(fmt.contains("DESC"), "{fmt}");
    }

    #[test]
    fn body() {
        let e = BindingError::MissingBody {
            operation: "CreateCatalog",
        };
        assert!(e.to_string().contains("requires a request body"), "{e}");
        let e = BindingError::UnexpectedBody {
            operation: "GetCatalog",
        };
        assert!(e.to_string().contains("does not accept"), "{e}");
    }
}
