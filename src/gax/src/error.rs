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

mod core_error;
pub use core_error::*;
mod service_error;
pub use service_error::*;

/// Errors and error details related to local request validation.
///
/// These errors occur when required parameters in a request are either
/// missing, or are present, but in an invalid format. The client fails these
/// requests locally because it does not know how to send such requests.
pub mod binding;
