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

//! Waits for Block Storage resources to reach a lifecycle state.
//!
//! Most Block Storage mutations are asynchronous: the service accepts the
//! request, returns the resource in a transitional state (`PROVISIONING`,
//! `TERMINATING`, etc.), and completes the work in the background. This crate
//! implements the polling loop used to wait until the resource reaches a
//! desired state, and the composite operations combining a mutating request
//! with such a wait.
//!
//! Applications rarely use this crate directly. The client library exposes
//! the composite operations for each resource type.
//!
//! # Example
//! ```
//! # use blockstorage_waiter::*;
//! # use gax::response::Response;
//! #[derive(Clone, Debug)]
//! struct Disk(&'static str);
//! impl LifecycleResource for Disk {
//!     const KNOWN_LIFECYCLE_STATES: &'static [&'static str] = &["PROVISIONING", "AVAILABLE"];
//!     fn resource_id(&self) -> Option<&str> { Some("disk-1") }
//!     fn lifecycle_state(&self) -> Option<&str> { Some(self.0) }
//! }
//! # tokio_test::block_on(async {
//! let query = |_id: String| async { Ok(Response::from(Disk("AVAILABLE"))) };
//! let poller = new_state_poller(
//!     "disk-1", query, WaitTarget::new(["AVAILABLE"]), &WaiterOptions::default())?;
//! match poller.until_done().await? {
//!     WaitOutcome::Reached(r) => println!("disk is {}", r.body().0),
//!     WaitOutcome::NotFound => println!("disk is gone"),
//! }
//! # gax::Result::<()>::Ok(()) });
//! ```

use gax::response::Response;
use std::future::Future;

pub use gax::Result;

pub mod composite;
mod lifecycle;
pub mod options;
pub mod poller;
pub mod predicate;

pub use lifecycle::{LifecycleResource, WaitTarget, WaitTargetError};
pub use options::WaiterOptions;
pub use poller::{StatePoller, WaitTimeout};

/// The result of polling a resource once.
#[derive(Debug)]
pub enum PollingResult<T> {
    /// The resource has not reached the desired state and the wait has not
    /// expired. This includes the snapshot of the resource.
    InProgress(Response<T>),
    /// The wait completed. This includes the outcome.
    ///
    /// Errors here are terminal: the query failed, or the wait exceeded its
    /// deadline.
    Completed(Result<WaitOutcome<T>>),
}

/// How a successful wait ended.
#[derive(Debug)]
pub enum WaitOutcome<T> {
    /// The resource reached one of the target states. This is the snapshot
    /// that matched.
    Reached(Response<T>),
    /// The resource was not found, and the wait was configured to treat that
    /// as success.
    NotFound,
}

mod sealed {
    pub trait Poller {}
}

/// The trait implemented by resource state pollers.
///
/// Applications may poll step by step with [poll][Poller::poll], or wait for
/// the final outcome with [until_done][Poller::until_done].
pub trait Poller<T>: sealed::Poller {
    /// Queries the resource once.
    ///
    /// Returns `None` once the wait has completed.
    fn poll(&mut self) -> impl Future<Output = Option<PollingResult<T>>>;

    /// Polls the resource until the wait completes.
    ///
    /// Sleeps between polls, following the backoff configured in
    /// [WaiterOptions].
    fn until_done(self) -> impl Future<Output = Result<WaitOutcome<T>>>;

    /// Converts the poller into a [futures::Stream] of polling results.
    ///
    /// The stream sleeps between polls and ends after the wait completes.
    #[cfg(feature = "unstable-stream")]
    fn into_stream(self) -> impl futures::Stream<Item = PollingResult<T>> + Unpin;
}

/// Creates a poller waiting for a resource to reach one of the `target`
/// states.
///
/// A "not found" error completes the wait with an error. Use
/// [StatePoller::with_succeed_on_not_found] to wait for deleted resources.
///
/// # Parameters
/// * `resource_id` - the id of the resource.
/// * `query` - fetches the resource by id.
/// * `target` - the lifecycle states that complete the wait.
/// * `options` - how long and how often to poll.
pub fn new_state_poller<T, Q, QF, I>(
    resource_id: I,
    query: Q,
    target: WaitTarget,
    options: &WaiterOptions,
) -> Result<StatePoller<T, predicate::LifecycleStatePredicate, Q>>
where
    T: LifecycleResource + Clone,
    Q: Fn(String) -> QF,
    QF: Future<Output = Result<Response<T>>>,
    I: Into<String>,
{
    target.validate()?;
    let predicate = predicate::LifecycleStatePredicate::new(target);
    StatePoller::new(resource_id, query, predicate, options)
}
