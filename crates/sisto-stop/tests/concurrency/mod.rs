use std::sync::Arc;

use sisto_stop::StopState;
use sisto_stop::coordinator::StopCoordinator;
use sisto_stop::event::StoppingEvent;
use test_log::test;
use tokio::sync::Barrier;

use crate::common::RecordingSink;

const REQUESTERS: usize = 16;
const ROUNDS: usize = 200;

#[test(tokio::test(flavor = "multi_thread", worker_threads = 4))]
async fn concurrent_requests_from_idle() {
    let coordinator = Arc::new(StopCoordinator::new(RecordingSink::<u64>::default()));
    let barrier = Arc::new(Barrier::new(REQUESTERS));

    let tasks = (0..REQUESTERS)
        .map(|_| {
            let coordinator = Arc::clone(&coordinator);
            let barrier = Arc::clone(&barrier);

            tokio::spawn(async move {
                barrier.wait().await;
                coordinator.request_stop()
            })
        })
        .collect::<Vec<_>>();

    let mut granted = 0;

    for task in tasks {
        if task.await.unwrap().unwrap() {
            granted += 1;
        }
    }

    assert_eq!(granted, 1);
    assert_eq!(coordinator.state(), Ok(StopState::PendingStopRequest));
    assert_eq!(coordinator.event_sink().count(), 0);
}

/// Races a user stop request with a breakpoint hit: whatever the
/// interleaving, the front end receives exactly one synthetic completion.
#[test(tokio::test(flavor = "multi_thread", worker_threads = 2))]
async fn stop_request_racing_with_routed_event() {
    for _ in 0..ROUNDS {
        let coordinator = Arc::new(StopCoordinator::new(RecordingSink::<u64>::default()));
        let barrier = Arc::new(Barrier::new(2));

        let router = tokio::spawn({
            let coordinator = Arc::clone(&coordinator);
            let barrier = Arc::clone(&barrier);

            async move {
                barrier.wait().await;
                coordinator.route_event(StoppingEvent::Breakpoint, 7, || ())
            }
        });

        let requester = tokio::spawn({
            let coordinator = Arc::clone(&coordinator);
            let barrier = Arc::clone(&barrier);

            async move {
                barrier.wait().await;
                coordinator.request_stop()
            }
        });

        router.await.unwrap().unwrap();
        requester.await.unwrap().unwrap();

        assert_eq!(coordinator.state(), Ok(StopState::StopRequestSent));
        assert_eq!(coordinator.event_sink().completions(), [7]);
    }
}
