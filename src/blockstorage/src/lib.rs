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

//! Block Storage Client Library for Rust.
//!
//! This crate contains a client for the Block Storage API: volumes, boot
//! volumes, volume groups, and their backups.
//!
//! * [client::BlockStorage] sends one request per service operation.
//! * [composite::BlockStorageCompositeOperations] sends a mutating request and
//!   waits until the affected resource reaches a lifecycle state.
//!
//! The client delegates each request to an implementation of
//! [stub::BlockStorage]. The transport, authentication, and retry policies
//! for the underlying requests are the responsibility of that implementation.

/// The result type used by this library.
pub use gax::Result;

/// The error type used by this library.
pub use gax::error::Error;

pub mod client;
pub mod composite;
pub mod model;
pub mod stub;
