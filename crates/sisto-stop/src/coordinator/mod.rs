mod builder;

use std::sync::atomic::{AtomicU8, Ordering};

pub use self::builder::Builder;
use self::builder::NeedsSink;
use crate::StopState;
use crate::collab::{EventSink, LastEventThread, ThreadRegistry};
use crate::event::StoppingEvent;

/// Coordinator of asynchronous stop requests for a single debug session.
///
/// All the operations are lock-free, and can be called concurrently from
/// any thread (e.g., debuggee event threads and front-end request threads).
/// Each operation re-reads the current stop state and retries its
/// compare-and-exchange until it either commits or finds that no transition
/// applies.
pub struct StopCoordinator<S, R = LastEventThread> {
    state: AtomicU8,
    sink: S,
    registry: R,
}

impl StopCoordinator<(), ()> {
    /// Creates a builder for configuring a [StopCoordinator].
    pub const fn builder() -> Builder<NeedsSink> {
        Builder::new()
    }
}

impl<S: EventSink<Thread = u64>> StopCoordinator<S, LastEventThread> {
    /// Creates a new coordinator delivering synthetic completions to the
    /// given sink, with a built-in [LastEventThread] registry.
    pub fn new(sink: S) -> Self {
        Self::from_parts(sink, LastEventThread::new())
    }

    /// Records the thread of the stopping event about to be routed.
    pub fn record_event_thread(&self, thread_id: u64) {
        self.registry.record(thread_id);
    }

    /// Routes a single stopping event to the front end.
    ///
    /// This records `thread_id` as the event's origin thread and brackets
    /// `dispatch` (which actually delivers the event) with
    /// [begin_event_routing](Self::begin_event_routing) and
    /// [end_event_routing](Self::end_event_routing).
    ///
    /// # Warning
    ///
    /// If `dispatch` panics, the routing is never ended and the coordinator
    /// is left in [EventInRoute](StopState::EventInRoute) until
    /// [reset](Self::reset) is called.
    #[tracing::instrument(name = "RouteEvent", skip(self, dispatch))]
    pub fn route_event<T>(
        &self,
        kind: StoppingEvent,
        thread_id: u64,
        dispatch: impl FnOnce() -> T,
    ) -> crate::Result<T> {
        self.record_event_thread(thread_id);
        self.begin_event_routing();

        let dispatched = dispatch();

        self.end_event_routing(kind)?;
        Ok(dispatched)
    }
}

impl<S, R> StopCoordinator<S, R> {
    const fn from_parts(sink: S, registry: R) -> Self {
        Self {
            state: AtomicU8::new(StopState::Idle.as_raw()),
            sink,
            registry,
        }
    }

    /// Returns the sink receiving synthetic completions.
    pub const fn event_sink(&self) -> &S {
        &self.sink
    }

    /// Returns the registry of the last stopping event thread.
    pub const fn thread_registry(&self) -> &R {
        &self.registry
    }

    /// Returns the current stop state.
    pub fn state(&self) -> crate::Result<StopState> {
        self.snapshot("State")
    }

    /// Forces the stop state back to [Idle](StopState::Idle).
    ///
    /// # Warning
    ///
    /// This isn't linearized against the other operations. It must only be
    /// called when no stopping event is being routed (e.g., when the debuggee
    /// is resumed, or when the debug session is detached or restarted).
    #[tracing::instrument(name = "Reset", skip_all)]
    pub fn reset(&self) {
        let previous = self
            .state
            .swap(StopState::Idle.as_raw(), Ordering::AcqRel);

        if previous != StopState::Idle.as_raw() {
            tracing::debug!(from = %crate::state::describe_raw(&previous), "stop state reset");
        }
    }

    fn snapshot(&self, operation: &'static str) -> crate::Result<StopState> {
        let raw = self.state.load(Ordering::Acquire);
        StopState::from_raw(raw).ok_or_else(|| invariant_violation(operation, raw))
    }

    /// Attempts to commit a transition from `current` to `new`.
    ///
    /// It returns whether the transition was committed.
    fn transition(&self, current: StopState, new: StopState) -> bool {
        let committed = self
            .state
            .compare_exchange(
                current.as_raw(),
                new.as_raw(),
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok();

        if committed {
            tracing::debug!(from = %current, to = %new, "stop state changed");
        }

        committed
    }
}

impl<S, R> StopCoordinator<S, R>
where
    S: EventSink,
    R: ThreadRegistry<Thread = S::Thread>,
{
    /// Registers a request for asynchronously stopping the debuggee.
    ///
    /// It returns `true` if the caller must now send the actual stop request
    /// to the debuggee, or `false` if the request was merged with an already
    /// outstanding stop (possibly answered right away with a synthetic
    /// completion).
    #[tracing::instrument(name = "RequestStop", skip_all)]
    pub fn request_stop(&self) -> crate::Result<bool> {
        loop {
            let snapshot = self.snapshot("RequestStop")?;

            match snapshot {
                StopState::Idle => {
                    if self.transition(snapshot, StopState::PendingStopRequest) {
                        return Ok(true);
                    }
                }

                StopState::PendingStopRequest | StopState::StopRequestSent => return Ok(false),

                // the stopping event in route will answer this request
                StopState::EventInRoute => {
                    if self.transition(snapshot, StopState::PendingStopRequest) {
                        return Ok(false);
                    }
                }

                StopState::EventRoutingCompletedWithPendingStop => {
                    if self.transition(snapshot, StopState::StopRequestSent) {
                        self.send_generated_stop_complete()?;
                        return Ok(false);
                    }
                }
            }
        }
    }

    /// Updates the stop state after a stopping event of the given kind was
    /// delivered to the front end.
    #[tracing::instrument(name = "EventDelivered", skip(self))]
    pub fn notify_event_delivered(&self, kind: StoppingEvent) -> crate::Result<()> {
        loop {
            let snapshot = self.snapshot("EventDelivered")?;

            match snapshot {
                StopState::Idle => return Ok(()),

                StopState::PendingStopRequest => {
                    if self.transition(snapshot, StopState::StopRequestSent) {
                        // only an explicit completion satisfies the front end
                        if !kind.is_stop_complete() {
                            self.send_generated_stop_complete()?;
                        }
                        return Ok(());
                    }
                }

                StopState::EventInRoute => {
                    if self.transition(snapshot, StopState::EventRoutingCompletedWithPendingStop) {
                        return Ok(());
                    }
                }

                StopState::StopRequestSent | StopState::EventRoutingCompletedWithPendingStop => {
                    return Err(invariant_violation("EventDelivered", snapshot.as_raw()));
                }
            }
        }
    }

    /// Marks a stopping event as about to be delivered to the front end.
    ///
    /// This only has an effect if no stop is currently tracked. Otherwise,
    /// the event is routed without any bookkeeping.
    #[tracing::instrument(name = "BeginEventRouting", skip_all)]
    pub fn begin_event_routing(&self) {
        if !self.transition(StopState::Idle, StopState::EventInRoute) {
            tracing::trace!("stop already tracked");
        }
    }

    /// Marks a stopping event of the given kind as delivered to the front end.
    ///
    /// This is equivalent to [notify_event_delivered](Self::notify_event_delivered).
    pub fn end_event_routing(&self, kind: StoppingEvent) -> crate::Result<()> {
        self.notify_event_delivered(kind)
    }

    fn send_generated_stop_complete(&self) -> crate::Result<()> {
        let Some(thread) = self.registry.last_event_thread() else {
            tracing::error!("no stopping event thread recorded");
            return Err(crate::Error::MissingOriginThread);
        };

        tracing::info!("sending synthetic stop completion");
        self.sink.stop_complete(&thread);

        Ok(())
    }
}

fn invariant_violation(operation: &'static str, state: u8) -> crate::Error {
    tracing::error!(
        operation,
        state = %crate::state::describe_raw(&state),
        "unexpected stop state"
    );

    crate::Error::InvariantViolation { operation, state }
}
