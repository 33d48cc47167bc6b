mod thread;

use std::sync::Arc;

pub use self::thread::LastEventThread;

/// Trait for implementing the receiver of generated stop completions.
///
/// This is usually the channel delivering events to the debugger front end.
pub trait EventSink {
    /// Thread handle attached to a stop completion.
    type Thread;

    /// Function called when a synthetic "stop complete" notification must be
    /// delivered for the given thread.
    ///
    /// It is called synchronously from within a coordinator transition, so
    /// it must not call back into the coordinator.
    fn stop_complete(&self, thread: &Self::Thread);
}

/// Trait providing the thread of the most recent stopping event.
pub trait ThreadRegistry {
    /// Thread handle supplied by this registry.
    type Thread;

    /// Returns the thread of the most recent stopping event, if any was
    /// recorded.
    fn last_event_thread(&self) -> Option<Self::Thread>;
}

impl<S: EventSink + ?Sized> EventSink for Arc<S> {
    type Thread = S::Thread;

    fn stop_complete(&self, thread: &Self::Thread) {
        (**self).stop_complete(thread);
    }
}

impl<R: ThreadRegistry + ?Sized> ThreadRegistry for Arc<R> {
    type Thread = R::Thread;

    fn last_event_thread(&self) -> Option<Self::Thread> {
        (**self).last_event_thread()
    }
}
