use std::fmt;

/// State of asynchronous stop coordination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StopState {
    /// No asynchronous stop is outstanding.
    Idle = 0,

    /// A stop was requested, and the requester is sending it downstream.
    PendingStopRequest = 1,

    /// A stop completion was sent (or is about to be) to the front end.
    StopRequestSent = 2,

    /// A stopping event is about to be delivered to the front end.
    EventInRoute = 3,

    /// A stopping event was delivered while no stop was pending.
    ///
    /// The next stop request is answered with a synthetic completion.
    EventRoutingCompletedWithPendingStop = 4,
}

impl StopState {
    /// Returns the raw value of this state, as stored in the atomic word.
    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    /// Returns the state matching the given raw value, if any.
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Idle),
            1 => Some(Self::PendingStopRequest),
            2 => Some(Self::StopRequestSent),
            3 => Some(Self::EventInRoute),
            4 => Some(Self::EventRoutingCompletedWithPendingStop),
            _ => None,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::PendingStopRequest => "PendingStopRequest",
            Self::StopRequestSent => "StopRequestSent",
            Self::EventInRoute => "EventInRoute",
            Self::EventRoutingCompletedWithPendingStop => "EventRoutingCompletedWithPendingStop",
        }
    }
}

impl fmt::Display for StopState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for StopState {
    type Error = crate::Error;

    fn try_from(raw: u8) -> crate::Result<Self> {
        Self::from_raw(raw).ok_or(crate::Error::InvariantViolation {
            operation: "DecodeState",
            state: raw,
        })
    }
}

/// Returns a printable form of a raw stop state.
pub(crate) fn describe_raw(raw: &u8) -> String {
    match StopState::from_raw(*raw) {
        Some(state) => state.to_string(),
        None => format!("<unknown {raw}>"),
    }
}
