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

//! Polls a resource until it reaches a lifecycle state.
//!
//! The poller queries the resource, evaluates a predicate on the snapshot, and
//! either completes or backs off before the next query. The total wait is
//! bounded by a hard deadline, checked after every query and before any
//! sleep. Errors from the query are never retried at this layer: retrying
//! transport errors is the job of the stub.

use crate::options::WaiterOptions;
use crate::predicate::PollPredicate;
use crate::{LifecycleResource, PollingResult, Result, WaitOutcome};
use gax::error::Error;
use gax::polling_backoff_policy::PollingBackoffPolicy;
use gax::response::Response;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// The wait for a resource exceeded its deadline.
///
/// This is the [source][std::error::Error::source] of timeout errors returned
/// by the poller.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error(
    "resource {resource_id} did not reach the desired state after {attempt_count} attempt(s) in {elapsed:?}, the maximum wait is {max_wait:?}, the last observed state is {}",
    .last_state.as_deref().unwrap_or("unknown")
)]
#[non_exhaustive]
pub struct WaitTimeout {
    /// The id of the resource.
    pub resource_id: String,
    /// The number of queries made.
    pub attempt_count: u32,
    /// The time elapsed since the first query.
    pub elapsed: Duration,
    /// The configured maximum wait.
    pub max_wait: Duration,
    /// The lifecycle state in the last snapshot, if any.
    pub last_state: Option<String>,
}

/// An implementation of [Poller][crate::Poller] based on a query closure and a
/// predicate.
///
/// # Parameters
/// * `T` - the resource type.
/// * `P` - the predicate deciding when the wait is complete.
/// * `Q` - the query closure. It receives the resource id as its only input
///   parameter. It should have captured any stubs and request options.
pub struct StatePoller<T, P, Q> {
    resource_id: String,
    query: Q,
    predicate: P,
    backoff_policy: Arc<dyn PollingBackoffPolicy>,
    max_interval: Duration,
    max_wait: Duration,
    succeed_on_not_found: bool,
    loop_start: Option<Instant>,
    attempt_count: u32,
    last_observed: Option<Response<T>>,
    done: bool,
}

impl<T, P, Q, QF> StatePoller<T, P, Q>
where
    T: LifecycleResource + Clone,
    P: PollPredicate<T>,
    Q: Fn(String) -> QF,
    QF: Future<Output = Result<Response<T>>>,
{
    /// Creates a new poller.
    ///
    /// Fails if the options are invalid.
    pub fn new<I: Into<String>>(
        resource_id: I,
        query: Q,
        predicate: P,
        options: &WaiterOptions,
    ) -> Result<Self> {
        Ok(Self {
            resource_id: resource_id.into(),
            query,
            predicate,
            backoff_policy: options.polling_backoff_policy()?,
            max_interval: options.max_interval(),
            max_wait: options.max_wait(),
            succeed_on_not_found: false,
            loop_start: None,
            attempt_count: 0,
            last_observed: None,
            done: false,
        })
    }

    /// If true, a "not found" error from the query completes the wait
    /// successfully.
    ///
    /// Use this when waiting for a deleted resource: once the service purges
    /// the resource it is no longer found.
    pub fn with_succeed_on_not_found(mut self, v: bool) -> Self {
        self.succeed_on_not_found = v;
        self
    }

    /// Sets the snapshot reported as last observed until the first query
    /// succeeds.
    pub fn with_last_observed(mut self, v: Response<T>) -> Self {
        self.last_observed = Some(v);
        self
    }

    pub fn resource_id(&self) -> &str {
        &self.resource_id
    }

    /// The number of queries made so far.
    pub fn attempt_count(&self) -> u32 {
        self.attempt_count
    }

    /// The most recent successful snapshot of the resource.
    pub fn last_observed(&self) -> Option<&Response<T>> {
        self.last_observed.as_ref()
    }

    pub fn into_last_observed(self) -> Option<Response<T>> {
        self.last_observed
    }

    /// Queries the resource once.
    ///
    /// Returns `None` once the poller has completed.
    pub async fn poll_once(&mut self) -> Option<PollingResult<T>> {
        if self.done {
            return None;
        }
        let loop_start = *self.loop_start.get_or_insert_with(Instant::now);
        self.attempt_count += 1;
        let result = (self.query)(self.resource_id.clone()).await;
        if let Ok(response) = &result {
            self.last_observed = Some(response.clone());
        }
        let context = PollContext {
            resource_id: &self.resource_id,
            attempt_count: self.attempt_count,
            elapsed: loop_start.elapsed(),
            max_wait: self.max_wait,
            succeed_on_not_found: self.succeed_on_not_found,
        };
        let poll = handle_poll(&context, &self.predicate, result);
        self.done = matches!(poll, PollingResult::Completed(_));
        Some(poll)
    }

    /// Polls the resource until the wait completes, sleeping between polls.
    pub async fn wait(&mut self) -> Result<WaitOutcome<T>> {
        while let Some(p) = self.poll_once().await {
            match p {
                // Return, the resource reached the desired state, or the wait
                // failed.
                PollingResult::Completed(r) => return r,
                // Continue, the resource is not in the desired state yet and
                // the deadline has not expired.
                PollingResult::InProgress(_) => (),
            }
            let delay = self.next_delay();
            tracing::debug!(
                resource_id = %self.resource_id,
                attempt = self.attempt_count,
                delay_ms = delay.as_millis() as u64,
                "waiting before the next poll"
            );
            tokio::time::sleep(delay).await;
        }
        Err(Error::other("the wait has already completed"))
    }

    fn next_delay(&self) -> Duration {
        let loop_start = self.loop_start.unwrap_or_else(Instant::now);
        self.backoff_policy
            .wait_period(loop_start.into_std(), self.attempt_count)
            .min(self.max_interval)
    }
}

impl<T, P, Q> crate::sealed::Poller for StatePoller<T, P, Q> {}

impl<T, P, Q, QF> crate::Poller<T> for StatePoller<T, P, Q>
where
    T: LifecycleResource + Clone,
    P: PollPredicate<T>,
    Q: Fn(String) -> QF,
    QF: Future<Output = Result<Response<T>>>,
{
    async fn poll(&mut self) -> Option<PollingResult<T>> {
        self.poll_once().await
    }

    async fn until_done(mut self) -> Result<WaitOutcome<T>> {
        self.wait().await
    }

    #[cfg(feature = "unstable-stream")]
    fn into_stream(self) -> impl futures::Stream<Item = PollingResult<T>> + Unpin {
        use futures::stream::unfold;
        Box::pin(unfold(self, move |mut poller| async move {
            if poller.done {
                return None;
            }
            if poller.attempt_count > 0 {
                tokio::time::sleep(poller.next_delay()).await;
            }
            let pr = poller.poll_once().await?;
            Some((pr, poller))
        }))
    }
}

struct PollContext<'a> {
    resource_id: &'a str,
    attempt_count: u32,
    elapsed: Duration,
    max_wait: Duration,
    succeed_on_not_found: bool,
}

fn handle_poll<T, P>(
    context: &PollContext<'_>,
    predicate: &P,
    result: Result<Response<T>>,
) -> PollingResult<T>
where
    T: LifecycleResource,
    P: PollPredicate<T> + ?Sized,
{
    let response = match result {
        Err(e) if context.succeed_on_not_found && e.is_not_found() => {
            tracing::debug!(
                resource_id = context.resource_id,
                attempt = context.attempt_count,
                "resource not found, treating as success"
            );
            return PollingResult::Completed(Ok(WaitOutcome::NotFound));
        }
        Err(e) => {
            tracing::debug!(
                resource_id = context.resource_id,
                attempt = context.attempt_count,
                error = %e,
                "polling failed"
            );
            return PollingResult::Completed(Err(e));
        }
        Ok(r) => r,
    };
    let state = response.body().lifecycle_state();
    tracing::debug!(
        resource_id = context.resource_id,
        attempt = context.attempt_count,
        state,
        elapsed_ms = context.elapsed.as_millis() as u64,
        "polled resource"
    );
    if predicate.matches(response.body()) {
        return PollingResult::Completed(Ok(WaitOutcome::Reached(response)));
    }
    if context.elapsed >= context.max_wait {
        let timeout = WaitTimeout {
            resource_id: context.resource_id.to_string(),
            attempt_count: context.attempt_count,
            elapsed: context.elapsed,
            max_wait: context.max_wait,
            last_state: state.map(str::to_string),
        };
        tracing::warn!("{timeout}");
        return PollingResult::Completed(Err(Error::timeout(timeout)));
    }
    PollingResult::InProgress(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WaitTarget;
    use crate::predicate::LifecycleStatePredicate;
    use gax::error::rpc::Status;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct TestResource {
        id: Option<String>,
        state: Option<String>,
    }

    impl LifecycleResource for TestResource {
        const KNOWN_LIFECYCLE_STATES: &'static [&'static str] =
            &["PROVISIONING", "AVAILABLE", "TERMINATED"];
        fn resource_id(&self) -> Option<&str> {
            self.id.as_deref()
        }
        fn lifecycle_state(&self) -> Option<&str> {
            self.state.as_deref()
        }
    }

    fn resource(state: &str) -> Response<TestResource> {
        Response::from(TestResource {
            id: Some("test-id".into()),
            state: Some(state.into()),
        })
    }

    fn not_found() -> Error {
        Error::service_with_http_metadata(
            Status::default()
                .set_code("NotAuthorizedOrNotFound")
                .set_message("NOT FOUND"),
            Some(404),
            None,
        )
    }

    fn unavailable() -> Error {
        Error::http(
            503,
            http::HeaderMap::new(),
            bytes::Bytes::from_static(b"try-again"),
        )
    }

    fn available() -> LifecycleStatePredicate {
        LifecycleStatePredicate::new(WaitTarget::new(["AVAILABLE"]))
    }

    fn context(elapsed: Duration, succeed_on_not_found: bool) -> PollContext<'static> {
        PollContext {
            resource_id: "test-id",
            attempt_count: 3,
            elapsed,
            max_wait: Duration::from_secs(10),
            succeed_on_not_found,
        }
    }

    #[test]
    fn poll_reached() {
        let ctx = context(Duration::ZERO, false);
        let got = handle_poll(&ctx, &available(), Ok(resource("Available")));
        assert!(
            matches!(got, PollingResult::Completed(Ok(WaitOutcome::Reached(ref r))) if r.body().state.as_deref() == Some("Available")),
            "{got:?}"
        );
    }

    #[test]
    fn poll_reached_at_deadline() {
        let ctx = context(Duration::from_secs(60), false);
        let got = handle_poll(&ctx, &available(), Ok(resource("AVAILABLE")));
        assert!(
            matches!(got, PollingResult::Completed(Ok(WaitOutcome::Reached(_)))),
            "{got:?}"
        );
    }

    #[test]
    fn poll_in_progress() {
        let ctx = context(Duration::from_secs(9), false);
        let got = handle_poll(&ctx, &available(), Ok(resource("PROVISIONING")));
        assert!(matches!(got, PollingResult::InProgress(_)), "{got:?}");
    }

    #[test]
    fn poll_missing_state() {
        let ctx = context(Duration::ZERO, false);
        let got = handle_poll(
            &ctx,
            &available(),
            Ok(Response::from(TestResource::default())),
        );
        assert!(matches!(got, PollingResult::InProgress(_)), "{got:?}");
    }

    #[test]
    fn poll_timeout() {
        let ctx = context(Duration::from_secs(10), false);
        let got = handle_poll(&ctx, &available(), Ok(resource("PROVISIONING")));
        let e = match got {
            PollingResult::Completed(Err(e)) => e,
            other => panic!("expected a timeout error, got={other:?}"),
        };
        assert!(e.is_timeout(), "{e:?}");
        let timeout = e.as_inner::<WaitTimeout>();
        let want = WaitTimeout {
            resource_id: "test-id".into(),
            attempt_count: 3,
            elapsed: Duration::from_secs(10),
            max_wait: Duration::from_secs(10),
            last_state: Some("PROVISIONING".into()),
        };
        assert_eq!(timeout, Some(&want));
        assert!(e.to_string().contains("PROVISIONING"), "{e}");
    }

    #[test]
    fn poll_error() {
        let ctx = context(Duration::ZERO, true);
        let got = handle_poll::<TestResource, _>(&ctx, &available(), Err(unavailable()));
        assert!(
            matches!(got, PollingResult::Completed(Err(ref e)) if e.http_status_code() == Some(503)),
            "{got:?}"
        );
    }

    #[test]
    fn poll_not_found() {
        let ctx = context(Duration::ZERO, false);
        let got = handle_poll::<TestResource, _>(&ctx, &available(), Err(not_found()));
        assert!(
            matches!(got, PollingResult::Completed(Err(ref e)) if e.is_not_found()),
            "{got:?}"
        );

        let ctx = context(Duration::ZERO, true);
        let got = handle_poll::<TestResource, _>(&ctx, &available(), Err(not_found()));
        assert!(
            matches!(got, PollingResult::Completed(Ok(WaitOutcome::NotFound))),
            "{got:?}"
        );
    }

    #[test]
    fn wait_timeout_display() {
        let timeout = WaitTimeout {
            resource_id: "test-id".into(),
            attempt_count: 1,
            elapsed: Duration::ZERO,
            max_wait: Duration::ZERO,
            last_state: None,
        };
        let fmt = timeout.to_string();
        assert!(fmt.contains("test-id"), "{fmt}");
        assert!(fmt.contains("unknown"), "{fmt}");
    }

    #[tokio::test(start_paused = true)]
    async fn poll_once_records_last_observed() -> anyhow::Result<()> {
        let query = |_id: String| async { Ok(resource("PROVISIONING")) };
        let mut poller = StatePoller::new("test-id", query, available(), &WaiterOptions::default())?
            .with_last_observed(resource("CREATING"));
        assert_eq!(poller.resource_id(), "test-id");
        assert_eq!(poller.attempt_count(), 0);
        assert_eq!(
            poller.last_observed().and_then(|r| r.body().state.as_deref()),
            Some("CREATING")
        );

        let got = poller.poll_once().await;
        assert!(matches!(got, Some(PollingResult::InProgress(_))), "{got:?}");
        assert_eq!(poller.attempt_count(), 1);
        let last = poller.into_last_observed();
        assert_eq!(
            last.as_ref().and_then(|r| r.body().state.as_deref()),
            Some("PROVISIONING")
        );
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn poll_once_after_completion() -> anyhow::Result<()> {
        let query = |_id: String| async { Ok(resource("AVAILABLE")) };
        let mut poller = StatePoller::new("test-id", query, available(), &WaiterOptions::default())?;
        let got = poller.poll_once().await;
        assert!(
            matches!(got, Some(PollingResult::Completed(Ok(_)))),
            "{got:?}"
        );
        let got = poller.poll_once().await;
        assert!(got.is_none(), "{got:?}");
        assert_eq!(poller.attempt_count(), 1);

        let got = poller.wait().await;
        assert!(got.is_err(), "{got:?}");
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn next_delay_capped_by_max_interval() -> anyhow::Result<()> {
        #[derive(Debug)]
        struct Huge;
        impl PollingBackoffPolicy for Huge {
            fn wait_period(&self, _loop_start: std::time::Instant, _attempt_count: u32) -> Duration {
                Duration::from_secs(3600)
            }
        }
        let options = WaiterOptions::default()
            .with_max_interval(Duration::from_secs(5))
            .with_polling_backoff_policy(Huge);
        let query = |_id: String| async { Ok(resource("PROVISIONING")) };
        let poller = StatePoller::new("test-id", query, available(), &options)?;
        assert_eq!(poller.next_delay(), Duration::from_secs(5));
        Ok(())
    }

    #[test]
    fn new_with_invalid_options() {
        let options = WaiterOptions::default().with_max_interval(Duration::ZERO);
        let query = |_id: String| async { Ok(resource("PROVISIONING")) };
        let got = StatePoller::new("test-id", query, available(), &options);
        assert!(matches!(got, Err(ref e) if e.is_binding()), "{:?}", got.err());
    }
}
