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

//! A fake resource and service used in the integration tests.

#![allow(dead_code)]

use blockstorage_waiter::LifecycleResource;
use gax::Result;
use gax::error::Error;
use gax::error::rpc::Status;
use gax::response::Response;
use std::sync::{Arc, Mutex};
use tokio::time::Instant;

pub const DISK_ID: &str = "ocid1.disk.test";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Disk {
    pub id: Option<String>,
    pub lifecycle_state: Option<String>,
}

impl LifecycleResource for Disk {
    const KNOWN_LIFECYCLE_STATES: &'static [&'static str] = &[
        "PROVISIONING",
        "AVAILABLE",
        "TERMINATING",
        "TERMINATED",
        "FAULTY",
    ];
    fn resource_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
    fn lifecycle_state(&self) -> Option<&str> {
        self.lifecycle_state.as_deref()
    }
}

pub fn disk(state: &str) -> Response<Disk> {
    Response::from(Disk {
        id: Some(DISK_ID.to_string()),
        lifecycle_state: Some(state.to_string()),
    })
}

pub fn not_found() -> Error {
    Error::service_with_http_metadata(
        Status::default()
            .set_code("NotAuthorizedOrNotFound")
            .set_message("resource not found"),
        Some(404),
        None,
    )
}

pub fn unavailable() -> Error {
    Error::http(
        503,
        http::HeaderMap::new(),
        bytes::Bytes::from_static(b"service unavailable"),
    )
}

pub trait Service {
    fn create(&self) -> Result<Response<Disk>>;
    fn get(&self, id: String) -> Result<Response<Disk>>;
    fn delete(&self, id: String) -> Result<Response<()>>;
}

mockall::mock! {
    pub Service {}
    impl Service for Service {
        fn create(&self) -> Result<Response<Disk>>;
        fn get(&self, id: String) -> Result<Response<Disk>>;
        fn delete(&self, id: String) -> Result<Response<()>>;
    }
}

/// Wraps a mock so it can be shared by the closures used in waits.
///
/// Records the (virtual) time of each `get()` call.
#[derive(Clone)]
pub struct Fake {
    mock: Arc<MockService>,
    polls: Arc<Mutex<Vec<Instant>>>,
}

impl Fake {
    pub fn new(mock: MockService) -> Self {
        Self {
            mock: Arc::new(mock),
            polls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub async fn create(&self) -> Result<Response<Disk>> {
        self.mock.create()
    }

    pub async fn get(&self, id: String) -> Result<Response<Disk>> {
        self.polls.lock().unwrap().push(Instant::now());
        self.mock.get(id)
    }

    pub async fn delete(&self, id: String) -> Result<Response<()>> {
        self.mock.delete(id)
    }

    pub fn poll_times(&self) -> Vec<Instant> {
        self.polls.lock().unwrap().clone()
    }
}

/// Verifies a duration measured with the paused clock.
///
/// The timer wheel has millisecond resolution, so sleeps may complete
/// slightly after their deadline.
pub fn assert_near(got: std::time::Duration, want: std::time::Duration) {
    let tolerance = std::time::Duration::from_millis(5);
    assert!(
        got >= want && got <= want + tolerance,
        "got={got:?}, want={want:?}"
    );
}
