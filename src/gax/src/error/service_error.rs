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

use bytes::Bytes;

/// The error document returned by the Data Catalog service.
///
/// Failed requests return a JSON document with a machine-readable `code`
/// (e.g. `NotAuthorizedOrNotFound`, `IncorrectState`) and a human-readable
/// `message`. The client library parses this document when possible.
///
/// # Example
/// ```
/// # use datacatalog_gax::error::ServiceError;
/// let error = ServiceError::default()
///     .set_code("NotAuthorizedOrNotFound")
///     .set_message("Authorization failed or requested resource not found.");
/// assert_eq!(error.code, "NotAuthorizedOrNotFound");
/// ```
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ServiceError {
    /// A short, machine-readable error code.
    pub code: String,

    /// A human-readable description of the error.
    pub message: String,
}

impl ServiceError {
    /// Sets the value of [code][ServiceError::code].
    pub fn set_code<T: Into<String>>(mut self, v: T) -> Self {
        self.code = v.into();
        self
    }

    /// Sets the value of [message][ServiceError::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }
}

impl TryFrom<&Bytes> for ServiceError {
    type Error = serde_json::Error;

    fn try_from(value: &Bytes) -> Result<Self, Self::Error> {
        // Require both fields, a `{}` payload from a proxy is not a service
        // error document.
        #[derive(serde::Deserialize)]
        struct Wire {
            code: String,
            message: String,
        }
        let wire = serde_json::from_slice::<Wire>(value)?;
        Ok(Self {
            code: wire.code,
            message: wire.message,
        })
    }
}
