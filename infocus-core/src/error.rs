use thiserror::Error;

/// Unified fetch error for the infocus workspace.
///
/// The taxonomy is deliberately two-kind: a request either failed to produce
/// a usable payload at the transport level, or produced a payload that could
/// not be decoded. Both are terminal for the pipeline call that raised them;
/// recovery is always user-triggered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Transport failure, timeout, or a non-200 status.
    #[error("network error: {0}")]
    Network(String),

    /// Payload was delivered but is malformed or missing a required field.
    #[error("decode error: {0}")]
    Decode(String),
}

/// Discriminant of a [`FetchError`], for consumers that branch on the kind
/// alone (the error reporter, primarily).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// See [`FetchError::Network`].
    Network,
    /// See [`FetchError::Decode`].
    Decode,
}

impl FetchError {
    /// Helper: build a `Network` error from any message.
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Helper: build a `Decode` error from any message.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// The kind discriminant of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Network(_) => ErrorKind::Network,
            Self::Decode(_) => ErrorKind::Decode,
        }
    }

    /// Whether this is a transport-level failure.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// Whether this is a payload decode failure.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}
