use std::fmt;

/// Event stream a file handler is registered on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventStream {
    Invalid,
    /// Document events that should refresh vulnerability diagnostics
    Diagnostics,
}

impl fmt::Display for EventStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventStream::Invalid => write!(f, "invalid"),
            EventStream::Diagnostics => write!(f, "diagnostics"),
        }
    }
}
