use core::fmt::{Display, Formatter};

use crate::checksum::{additive, table_driven, ChecksumPair};

/// The checksum algorithm protecting a frame.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Mode {
    /// The 16-bit sum of the payload bytes.
    Additive,
    /// The table-driven rolling checksum.
    TableDriven,
}

impl Mode {
    /// Bit of the control byte that selects [`Mode::TableDriven`].
    pub const MASK: u8 = 0x80;

    /// Determines the mode from the frame's control byte.
    #[must_use]
    pub const fn from_control_byte(byte: u8) -> Self {
        if byte & Self::MASK == 0 {
            Self::Additive
        } else {
            Self::TableDriven
        }
    }

    /// Calculates the checksum of `payload` with this mode's algorithm.
    #[must_use]
    pub fn checksum(self, payload: &[u8]) -> ChecksumPair {
        match self {
            Self::Additive => additive(payload),
            Self::TableDriven => table_driven(payload),
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Additive => write!(f, "additive"),
            Self::TableDriven => write!(f, "table-driven"),
        }
    }
}
