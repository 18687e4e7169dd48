use std::fmt::{Display, Formatter};

/// Reasons for rejecting a line or a byte buffer as a [`Frame`](crate::Frame).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The line does not contain the `Data:` marker token.
    MissingMarker,
    /// The number of byte tokens after the marker is not the frame size.
    InvalidTokenCount {
        /// The number of byte tokens in a frame line.
        expected: usize,
        /// The number of tokens following the marker.
        found: usize,
    },
    /// A byte token is not a hexadecimal value in `0x00..=0xFF`.
    InvalidToken {
        /// Position of the token among the byte tokens.
        index: usize,
        /// The offending token.
        token: String,
    },
    /// The first byte is not the sync byte.
    InvalidSync(u8),
    /// A byte buffer does not have the frame size.
    InvalidLength {
        /// The frame size in bytes.
        expected: usize,
        /// The size of the buffer.
        found: usize,
    },
}

impl Error {
    /// Returns `true` if the error stems from the shape of the line rather than from a
    /// malformed byte token.
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        !matches!(self, Self::InvalidToken { .. })
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingMarker => write!(f, "Missing data marker."),
            Self::InvalidTokenCount { expected, found } => write!(
                f,
                "Invalid token count. Expected {expected} tokens, but found {found} tokens."
            ),
            Self::InvalidToken { index, token } => {
                write!(f, "Invalid byte token #{index}: {token:?}")
            }
            Self::InvalidSync(byte) => write!(f, "Invalid sync byte: {byte:#04X}"),
            Self::InvalidLength { expected, found } => write!(
                f,
                "Invalid buffer size. Expected {expected} bytes, but found {found} bytes."
            ),
        }
    }
}

impl std::error::Error for Error {}
