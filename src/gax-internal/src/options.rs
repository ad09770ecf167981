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

pub use gax::signer::Signer;

// The client configuration for [crate::http::ReqwestClient].
pub type ClientConfig = gax::client_builder::internal::ClientConfig<Signer>;

pub(crate) const LOGGING_VAR: &str = "DATACATALOG_RUST_LOGGING";

/// The API version, included in every endpoint.
pub const API_VERSION: &str = "20190325";

// Returns true if the environment or client configuration enables tracing.
pub fn tracing_enabled(config: &ClientConfig) -> bool {
    if config.tracing {
        return true;
    }
    std::env::var(LOGGING_VAR)
        .map(|v| v == "true")
        .unwrap_or(false)
}

/// Returns the default endpoint for a region.
pub fn default_endpoint(region: &str) -> String {
    format!("https://datacatalog.{region}.oci.oraclecloud.com/{API_VERSION}")
}

// The endpoint configured explicitly, or the default endpoint for the region.
pub(crate) fn endpoint(config: &ClientConfig) -> Option<String> {
    config
        .endpoint
        .as_deref()
        .map(|e| e.trim_end_matches('/').to_string())
        .or_else(|| config.region.as_deref().map(default_endpoint))
}
