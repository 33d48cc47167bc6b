/// Kind of a stopping event delivered to the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoppingEvent {
    /// A breakpoint was hit.
    Breakpoint,

    /// An exception was raised by the debuggee.
    Exception,

    /// A step operation has completed.
    StepComplete,

    /// The debuggee reached its entry point.
    EntryPoint,

    /// A break instruction was executed by the debuggee.
    BreakComplete,

    /// An asynchronous stop request was serviced.
    StopComplete,
}

impl StoppingEvent {
    /// Returns whether this event itself answers an asynchronous stop request.
    pub const fn is_stop_complete(self) -> bool {
        matches!(self, Self::StopComplete)
    }
}
