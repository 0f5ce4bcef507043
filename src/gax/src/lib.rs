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

//! Block Storage client helpers.
//!
//! This crate contains a number of types and functions shared by the Block
//! Storage client library and its composite operations: the error type
//! returned by all operations, the response envelope, per-request options,
//! and the backoff policies used while polling for resource state.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping service calls.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by the client libraries.
pub mod error;

/// Validation of required parameters.
///
/// Resource ids appear in the request path. An empty id cannot be sent, and
/// the client fails such requests locally, before making any network call.
pub mod path_parameter;

pub mod exponential_backoff;
pub mod options;
pub mod polling_backoff_policy;
pub mod response;
