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

//! Composite operations: a mutating request followed by a wait.
//!
//! The functions in this module are generic over the resource type. The
//! client library binds them to each mutating request and to the request
//! used to query the resource.

use crate::options::WaiterOptions;
use crate::poller::StatePoller;
use crate::predicate::LifecycleStatePredicate;
use crate::{LifecycleResource, Result, WaitOutcome, WaitTarget};
use gax::error::Error;
use gax::response::Response;
use std::future::Future;

/// The results obtained before a composite operation failed.
///
/// # Parameters
/// * `R` - the type returned by the mutating request. This is the resource
///   type for creates, updates, and copies, and `()` for deletes.
/// * `T` - the resource type.
#[derive(Clone, Debug)]
pub struct PartialResults<R, T> {
    mutation: Response<R>,
    last_observed: Option<Response<T>>,
}

impl<R, T> PartialResults<R, T> {
    /// The response of the mutating request, which succeeded.
    pub fn mutation(&self) -> &Response<R> {
        &self.mutation
    }

    /// The last snapshot of the resource observed while waiting, if any.
    pub fn last_observed(&self) -> Option<&Response<T>> {
        self.last_observed.as_ref()
    }

    pub fn into_parts(self) -> (Response<R>, Option<Response<T>>) {
        (self.mutation, self.last_observed)
    }
}

/// A composite operation failed after the mutating request succeeded.
///
/// The changes made by the mutating request remain in effect. This error
/// preserves the response of the mutating request and the last observed
/// state of the resource, so applications can decide how to recover. The
/// [cause][CompositeOperationError::cause] is the error that stopped the wait:
/// a timeout, a service or transport error while polling, or a malformed
/// response.
///
/// The client returns this type as the source of a [gax::error::Error] for
/// which `is_composite()` is true.
///
/// # Example
/// ```
/// # use blockstorage_waiter::composite::CompositeOperationError;
/// # use gax::error::Error;
/// #[derive(Debug)]
/// struct Volume;
/// fn handle(error: &Error) {
///     if let Some(e) = CompositeOperationError::<Volume, Volume>::from_error(error) {
///         println!("created {:?}, but {}", e.partial_results().mutation().body(), e.cause());
///     }
/// }
/// ```
#[derive(Debug)]
pub struct CompositeOperationError<R, T> {
    partial_results: PartialResults<R, T>,
    cause: Error,
}

impl<R, T> CompositeOperationError<R, T> {
    pub fn new(partial_results: PartialResults<R, T>, cause: Error) -> Self {
        Self {
            partial_results,
            cause,
        }
    }

    pub fn partial_results(&self) -> &PartialResults<R, T> {
        &self.partial_results
    }

    /// The error that stopped the wait.
    pub fn cause(&self) -> &Error {
        &self.cause
    }

    pub fn into_parts(self) -> (PartialResults<R, T>, Error) {
        (self.partial_results, self.cause)
    }
}

impl<R, T> CompositeOperationError<R, T>
where
    R: std::fmt::Debug + Send + Sync + 'static,
    T: std::fmt::Debug + Send + Sync + 'static,
{
    /// Returns the composite error wrapped in `error`, if any.
    ///
    /// The resource types must match those of the composite operation that
    /// returned `error`.
    pub fn from_error(error: &Error) -> Option<&Self> {
        if !error.is_composite() {
            return None;
        }
        error.as_inner::<Self>()
    }
}

impl<R, T> std::fmt::Display for CompositeOperationError<R, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "the mutating request succeeded, but waiting for the resource failed: {}",
            self.cause
        )
    }
}

impl<R, T> std::error::Error for CompositeOperationError<R, T>
where
    R: std::fmt::Debug,
    T: std::fmt::Debug,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}

/// The response of a mutating request is missing the resource id.
#[derive(thiserror::Error, Debug, PartialEq)]
#[error("the response is missing the resource id, cannot wait for the resource state")]
pub struct MissingResourceId;

/// The wait completed without the resource, but the resource should exist.
#[derive(thiserror::Error, Debug, PartialEq)]
#[error("the resource was not found while waiting for its state")]
pub struct UnexpectedNotFound;

/// The final disposition of a delete composite operation.
#[derive(Debug)]
pub enum DeleteOutcome<T> {
    /// No wait was requested. This is the response to the delete request.
    Accepted(Response<()>),
    /// The resource reached one of the target states, typically `TERMINATED`.
    Reached(Response<T>),
    /// The resource is gone.
    NotFound,
}

/// Runs a create, update, or copy request and waits for the resulting
/// resource to reach one of the `target` states.
///
/// If `target` is empty this returns the response of the mutating request
/// without querying the resource. Errors in the mutating request are returned
/// unchanged. Errors after the mutating request succeeds are wrapped in a
/// [CompositeOperationError].
///
/// # Parameters
/// * `mutate` - sends the mutating request. It should have captured the
///   request and its options.
/// * `query` - fetches the resource by id.
/// * `target` - the lifecycle states that complete the wait.
/// * `options` - how long and how often to poll.
pub async fn mutate_and_wait<T, M, MF, Q, QF>(
    mutate: M,
    query: Q,
    target: WaitTarget,
    options: &WaiterOptions,
) -> Result<Response<T>>
where
    T: LifecycleResource + Clone + std::fmt::Debug + Send + Sync + 'static,
    M: FnOnce() -> MF,
    MF: Future<Output = Result<Response<T>>>,
    Q: Fn(String) -> QF,
    QF: Future<Output = Result<Response<T>>>,
{
    validate::<T>(&target, options)?;
    let mutation = mutate().await?;
    if target.is_empty() {
        return Ok(mutation);
    }
    let id = mutation.body().resource_id().map(str::to_string);
    let Some(id) = id else {
        return Err(composite_error::<T, T>(
            mutation,
            None,
            Error::deser(MissingResourceId),
        ));
    };
    tracing::debug!(resource_id = %id, %target, "waiting for resource state");
    let predicate = LifecycleStatePredicate::new(target);
    let mut poller = StatePoller::new(id, query, predicate, options)?;
    match reached(poller.wait().await) {
        Ok(r) => Ok(r),
        Err(e) => Err(composite_error(mutation, poller.into_last_observed(), e)),
    }
}

/// Deletes a resource and waits for it to reach one of the `target` states
/// or disappear.
///
/// The resource is fetched before the delete request is sent. If `target` is
/// empty this returns [DeleteOutcome::Accepted] with the response to the
/// delete request. Otherwise, the resource is polled until it reaches one of
/// the target states or the service no longer finds it.
///
/// Errors fetching the resource or deleting it are returned unchanged,
/// including "not found" errors. Errors after the delete request succeeds are
/// wrapped in a [CompositeOperationError].
///
/// # Parameters
/// * `resource_id` - the id of the resource to delete.
/// * `delete` - sends the delete request. It should have captured the request
///   options.
/// * `query` - fetches the resource by id.
/// * `target` - the lifecycle states that complete the wait.
/// * `options` - how long and how often to poll.
pub async fn delete_and_wait<T, D, DF, Q, QF>(
    resource_id: &str,
    delete: D,
    query: Q,
    target: WaitTarget,
    options: &WaiterOptions,
) -> Result<DeleteOutcome<T>>
where
    T: LifecycleResource + Clone + std::fmt::Debug + Send + Sync + 'static,
    D: FnOnce(String) -> DF,
    DF: Future<Output = Result<Response<()>>>,
    Q: Fn(String) -> QF,
    QF: Future<Output = Result<Response<T>>>,
{
    validate::<T>(&target, options)?;
    let snapshot = query(resource_id.to_string()).await?;
    let mutation = delete(resource_id.to_string()).await?;
    if target.is_empty() {
        return Ok(DeleteOutcome::Accepted(mutation));
    }
    tracing::debug!(resource_id, %target, "waiting for deleted resource state");
    let predicate = LifecycleStatePredicate::new(target);
    let mut poller = StatePoller::new(resource_id, query, predicate, options)?
        .with_succeed_on_not_found(true)
        .with_last_observed(snapshot);
    match poller.wait().await {
        Ok(WaitOutcome::Reached(r)) => Ok(DeleteOutcome::Reached(r)),
        Ok(WaitOutcome::NotFound) => Ok(DeleteOutcome::NotFound),
        Err(e) => Err(composite_error(mutation, poller.into_last_observed(), e)),
    }
}

// Waits after create, update, and copy only succeed on a target state.
fn reached<T>(outcome: Result<WaitOutcome<T>>) -> Result<Response<T>> {
    match outcome? {
        WaitOutcome::Reached(r) => Ok(r),
        WaitOutcome::NotFound => Err(Error::other(UnexpectedNotFound)),
    }
}

fn validate<T: LifecycleResource>(target: &WaitTarget, options: &WaiterOptions) -> Result<()> {
    target.validate()?;
    options.validate()?;
    let unknown = target.unknown_states::<T>();
    if !unknown.is_empty() {
        tracing::warn!(
            ?unknown,
            known = ?T::KNOWN_LIFECYCLE_STATES,
            "the wait target includes lifecycle states unknown to this library"
        );
    }
    Ok(())
}

fn composite_error<R, T>(
    mutation: Response<R>,
    last_observed: Option<Response<T>>,
    cause: Error,
) -> Error
where
    R: std::fmt::Debug + Send + Sync + 'static,
    T: std::fmt::Debug + Send + Sync + 'static,
{
    let partial_results = PartialResults {
        mutation,
        last_observed,
    };
    Error::composite(CompositeOperationError::new(partial_results, cause))
}
