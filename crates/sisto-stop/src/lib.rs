//! This crate coordinates asynchronous stop requests between a running
//! debuggee and the front end of a debug engine.
//!
//! When the front end asks the engine to break into a running debuggee, it
//! expects exactly one "stop complete" notification in return. The debuggee,
//! however, may stop on its own at the same moment (breakpoint hit, exception,
//! step completion), in which case the real stop request may never be answered.
//! The [StopCoordinator](self::coordinator::StopCoordinator) keeps track of
//! these races and generates a *synthetic* completion whenever the debuggee
//! itself won't.
//!
//! Two collaborators are plugged into the coordinator:
//! - An [EventSink](self::collab::EventSink), which receives the generated
//!   "stop complete" notifications.
//! - A [ThreadRegistry](self::collab::ThreadRegistry), which supplies the
//!   thread of the most recent stopping event. The built-in
//!   [LastEventThread](self::collab::LastEventThread) is enough most of the
//!   time.
//!
//! ```
//! use sisto_stop::collab::EventSink;
//! use sisto_stop::coordinator::StopCoordinator;
//! use sisto_stop::event::StoppingEvent;
//!
//! struct FrontEnd;
//!
//! impl EventSink for FrontEnd {
//!     type Thread = u64;
//!
//!     fn stop_complete(&self, thread: &u64) {
//!         tracing::info!(thread, "stop complete");
//!     }
//! }
//!
//! # fn main() -> sisto_stop::Result<()> {
//! let coordinator = StopCoordinator::new(FrontEnd);
//!
//! // the user hits "break all"
//! if coordinator.request_stop()? {
//!     // send the real stop request to the debuggee here
//! }
//!
//! // meanwhile, the debuggee hits a breakpoint on thread 42
//! coordinator.route_event(StoppingEvent::Breakpoint, 42, || {
//!     // deliver the breakpoint event to the front end here
//! })?;
//! # Ok(())
//! # }
//! ```

/// Module containing the collaborators consumed by the coordinator.
pub mod collab;

/// Module implementing the stop coordinator.
pub mod coordinator;

mod error;

/// Module containing the kinds of stopping events.
pub mod event;

mod state;

pub use self::error::{Error, Result};
pub use self::state::StopState;
