use super::StopCoordinator;
use crate::collab::{EventSink, LastEventThread, ThreadRegistry};

/// Builder for [StopCoordinator].
///
/// It is usually created by calling [StopCoordinator::builder], and allows to
/// specify which event sink and thread registry the coordinator works with.
pub struct Builder<S> {
    state: S,
}

impl Builder<NeedsSink> {
    pub(super) const fn new() -> Self {
        Self { state: NeedsSink }
    }

    /// Specifies the sink receiving synthetic stop completions.
    pub const fn with_event_sink<S: EventSink>(self, sink: S) -> Builder<NeedsRegistry<S>> {
        Builder {
            state: NeedsRegistry { sink },
        }
    }
}

impl<S: EventSink> Builder<NeedsRegistry<S>> {
    /// Specifies the registry supplying the thread of the most recent
    /// stopping event.
    ///
    /// The registry must be updated by the event-routing logic *before*
    /// each stopping event is routed.
    pub fn with_thread_registry<R>(self, registry: R) -> Builder<Ready<S, R>>
    where
        R: ThreadRegistry<Thread = S::Thread>,
    {
        Builder {
            state: Ready {
                sink: self.state.sink,
                registry,
            },
        }
    }
}

impl<S: EventSink<Thread = u64>> Builder<NeedsRegistry<S>> {
    /// Specifies to use the built-in [LastEventThread] registry.
    ///
    /// Threads are then recorded with
    /// [record_event_thread](StopCoordinator::record_event_thread).
    pub fn with_last_event_thread(self) -> Builder<Ready<S, LastEventThread>> {
        self.with_thread_registry(LastEventThread::new())
    }
}

impl<S, R> Builder<Ready<S, R>> {
    /// Builds the coordinator, in the [Idle](crate::StopState::Idle) state.
    pub fn build(self) -> StopCoordinator<S, R> {
        StopCoordinator::from_parts(self.state.sink, self.state.registry)
    }
}

pub struct NeedsSink;

pub struct NeedsRegistry<S> {
    sink: S,
}

pub struct Ready<S, R> {
    sink: S,
    registry: R,
}
