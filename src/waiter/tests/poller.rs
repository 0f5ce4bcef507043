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

mod fake;

#[cfg(test)]
mod tests {
    use super::fake::*;
    use anyhow::Result;
    use blockstorage_waiter::*;
    use std::time::Duration;
    use test_case::test_case;

    #[tokio::test(start_paused = true)]
    async fn reached_after_provisioning() -> Result<()> {
        let mut mock = MockService::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_get()
            .times(2)
            .in_sequence(&mut seq)
            .withf(|id| id == DISK_ID)
            .returning(|_| Ok(disk("PROVISIONING")));
        mock.expect_get()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(disk("AVAILABLE")));
        let fake = Fake::new(mock);

        let start = tokio::time::Instant::now();
        let poller = new_state_poller(
            DISK_ID,
            |id| fake.get(id),
            WaitTarget::new(["AVAILABLE"]),
            &WaiterOptions::default(),
        )?;
        let response = match poller.until_done().await? {
            WaitOutcome::Reached(r) => r,
            got => panic!("expected the resource to reach the target state, got={got:?}"),
        };
        assert_eq!(response.body().lifecycle_state.as_deref(), Some("AVAILABLE"));
        // The delays are 1s and 2s.
        assert_near(start.elapsed(), Duration::from_secs(3));
        assert_eq!(fake.poll_times().len(), 3);
        Ok(())
    }

    #[test_case("available")]
    #[test_case("Available")]
    #[test_case("AVAILABLE")]
    #[tokio::test(start_paused = true)]
    async fn reached_ignores_case(state: &'static str) -> Result<()> {
        let mut mock = MockService::new();
        mock.expect_get()
            .times(1)
            .returning(move |_| Ok(disk(state)));
        let fake = Fake::new(mock);

        let poller = new_state_poller(
            DISK_ID,
            |id| fake.get(id),
            WaitTarget::new(["AVAILABLE"]),
            &WaiterOptions::default(),
        )?;
        let got = poller.until_done().await?;
        assert!(matches!(got, WaitOutcome::Reached(_)), "{got:?}");
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn intervals_are_non_decreasing_and_bounded() -> Result<()> {
        let mut mock = MockService::new();
        mock.expect_get().returning(|_| Ok(disk("PROVISIONING")));
        let fake = Fake::new(mock);

        let options = WaiterOptions::default()
            .with_max_interval(Duration::from_secs(4))
            .with_max_wait(Duration::from_secs(20));
        let poller = new_state_poller(
            DISK_ID,
            |id| fake.get(id),
            WaitTarget::new(["AVAILABLE"]),
            &options,
        )?;
        let got = poller.until_done().await;
        assert!(matches!(got, Err(ref e) if e.is_timeout()), "{got:?}");

        let times = fake.poll_times();
        let intervals = times
            .windows(2)
            .map(|w| w[1] - w[0])
            .collect::<Vec<_>>();
        let want = [1, 2, 4, 4, 4, 4, 4].map(Duration::from_secs);
        assert_eq!(intervals.len(), want.len(), "{intervals:?}");
        for (got, want) in intervals.into_iter().zip(want) {
            assert_near(got, want);
        }
        // Polls at 0s, 1s, 3s, 7s, 11s, 15s, 19s, and 23s.
        assert_eq!(times.len(), 8);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn timeout() -> Result<()> {
        let mut mock = MockService::new();
        mock.expect_get()
            .times(5)
            .returning(|_| Ok(disk("PROVISIONING")));
        let fake = Fake::new(mock);

        // Polls at 0s, 1s, 3s, 7s, and 15s. The deadline is detected on the
        // last poll.
        let options = WaiterOptions::default().with_max_wait(Duration::from_secs(10));
        let poller = new_state_poller(
            DISK_ID,
            |id| fake.get(id),
            WaitTarget::new(["AVAILABLE"]),
            &options,
        )?;
        let err = match poller.until_done().await {
            Err(e) => e,
            Ok(o) => panic!("expected a timeout, got={o:?}"),
        };
        assert!(err.is_timeout(), "{err:?}");
        let timeout = err.as_inner::<WaitTimeout>();
        assert!(timeout.is_some(), "{err:?}");
        let timeout = timeout.unwrap();
        assert_eq!(timeout.resource_id, DISK_ID);
        assert_eq!(timeout.attempt_count, 5);
        assert_near(timeout.elapsed, Duration::from_secs(15));
        assert_eq!(timeout.max_wait, Duration::from_secs(10));
        assert_eq!(timeout.last_state.as_deref(), Some("PROVISIONING"));
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn zero_max_wait_polls_once() -> Result<()> {
        let mut mock = MockService::new();
        mock.expect_get()
            .times(1)
            .returning(|_| Ok(disk("PROVISIONING")));
        let fake = Fake::new(mock);

        let options = WaiterOptions::default().with_max_wait(Duration::ZERO);
        let poller = new_state_poller(
            DISK_ID,
            |id| fake.get(id),
            WaitTarget::new(["AVAILABLE"]),
            &options,
        )?;
        let got = poller.until_done().await;
        assert!(matches!(got, Err(ref e) if e.is_timeout()), "{got:?}");
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn zero_max_wait_still_matches() -> Result<()> {
        let mut mock = MockService::new();
        mock.expect_get()
            .times(1)
            .returning(|_| Ok(disk("AVAILABLE")));
        let fake = Fake::new(mock);

        let options = WaiterOptions::default().with_max_wait(Duration::ZERO);
        let poller = new_state_poller(
            DISK_ID,
            |id| fake.get(id),
            WaitTarget::new(["AVAILABLE"]),
            &options,
        )?;
        let got = poller.until_done().await?;
        assert!(matches!(got, WaitOutcome::Reached(_)), "{got:?}");
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn query_errors_are_terminal() -> Result<()> {
        let mut mock = MockService::new();
        mock.expect_get().times(1).returning(|_| Err(unavailable()));
        let fake = Fake::new(mock);

        let poller = new_state_poller(
            DISK_ID,
            |id| fake.get(id),
            WaitTarget::new(["AVAILABLE"]),
            &WaiterOptions::default(),
        )?;
        let got = poller.until_done().await;
        assert!(
            matches!(got, Err(ref e) if e.http_status_code() == Some(503)),
            "{got:?}"
        );
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn not_found_is_an_error_by_default() -> Result<()> {
        let mut mock = MockService::new();
        mock.expect_get().times(1).returning(|_| Err(not_found()));
        let fake = Fake::new(mock);

        let poller = new_state_poller(
            DISK_ID,
            |id| fake.get(id),
            WaitTarget::new(["AVAILABLE"]),
            &WaiterOptions::default(),
        )?;
        let got = poller.until_done().await;
        assert!(matches!(got, Err(ref e) if e.is_not_found()), "{got:?}");
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn succeed_on_not_found() -> Result<()> {
        let mut mock = MockService::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_get()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(disk("TERMINATING")));
        mock.expect_get()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(not_found()));
        let fake = Fake::new(mock);

        let poller = new_state_poller(
            DISK_ID,
            |id| fake.get(id),
            WaitTarget::new(["TERMINATED"]),
            &WaiterOptions::default(),
        )?
        .with_succeed_on_not_found(true);
        let got = poller.until_done().await?;
        assert!(matches!(got, WaitOutcome::NotFound), "{got:?}");
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn poll_step_by_step() -> Result<()> {
        let mut mock = MockService::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_get()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(disk("PROVISIONING")));
        mock.expect_get()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(disk("AVAILABLE")));
        let fake = Fake::new(mock);

        let mut poller = new_state_poller(
            DISK_ID,
            |id| fake.get(id),
            WaitTarget::new(["AVAILABLE"]),
            &WaiterOptions::default(),
        )?;
        let p = poller.poll().await;
        assert!(matches!(p, Some(PollingResult::InProgress(_))), "{p:?}");
        let p = poller.poll().await;
        assert!(
            matches!(p, Some(PollingResult::Completed(Ok(WaitOutcome::Reached(_))))),
            "{p:?}"
        );
        let p = poller.poll().await;
        assert!(p.is_none(), "{p:?}");
        Ok(())
    }

    #[cfg(feature = "unstable-stream")]
    #[tokio::test(start_paused = true)]
    async fn stream() -> Result<()> {
        use futures::stream::StreamExt;

        let mut mock = MockService::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_get()
            .times(2)
            .in_sequence(&mut seq)
            .returning(|_| Ok(disk("PROVISIONING")));
        mock.expect_get()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(disk("AVAILABLE")));
        let fake = Fake::new(mock);

        let poller = new_state_poller(
            DISK_ID,
            |id| fake.get(id),
            WaitTarget::new(["AVAILABLE"]),
            &WaiterOptions::default(),
        )?;
        let got = poller.into_stream().collect::<Vec<_>>().await;
        assert_eq!(got.len(), 3, "{got:?}");
        assert!(matches!(got[0], PollingResult::InProgress(_)), "{got:?}");
        assert!(matches!(got[1], PollingResult::InProgress(_)), "{got:?}");
        assert!(
            matches!(got[2], PollingResult::Completed(Ok(WaitOutcome::Reached(_)))),
            "{got:?}"
        );
        Ok(())
    }
}
