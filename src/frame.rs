//! The 16-byte sync frame.

use core::fmt::{Display, Formatter, LowerHex, UpperHex};
use core::str::FromStr;
use std::iter::Copied;
use std::slice::Iter;

pub use mode::Mode;

use crate::checksum::ChecksumPair;
use crate::error::Error;
use crate::utils::HexSlice;
use crate::validate::Validate;

mod mode;

/// A frame decoded from a log line.
///
/// A `Frame` always starts with [`Frame::SYNC`]. The first [`Frame::PAYLOAD_SIZE`] bytes are
/// covered by the checksum stored in the last two bytes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Frame {
    bytes: [u8; Self::SIZE],
}

impl Frame {
    /// The size of a frame in bytes.
    pub const SIZE: usize = 16;

    /// The size of the checksummed part of a frame in bytes.
    pub const PAYLOAD_SIZE: usize = Self::SIZE - ChecksumPair::SIZE;

    /// The sync byte every frame starts with.
    pub const SYNC: u8 = 0xAA;

    const MODE_INDEX: usize = 1;

    /// Returns the frame's bytes.
    #[must_use]
    pub const fn bytes(&self) -> &[u8; Self::SIZE] {
        &self.bytes
    }

    /// Returns the checksummed bytes, i.e. everything but the trailing checksum.
    #[must_use]
    pub fn payload(&self) -> &[u8] {
        &self.bytes[..Self::PAYLOAD_SIZE]
    }

    /// Returns the checksum mode selected by the frame's mode bit.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        Mode::from_control_byte(self.bytes[Self::MODE_INDEX])
    }

    /// Returns an iterator over the frame's bytes.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.into_iter()
    }
}

/// Displays the bytes as a list of decimal numbers.
impl Display for Frame {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.bytes)
    }
}

impl UpperHex for Frame {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        UpperHex::fmt(&HexSlice::new(&self.bytes), f)
    }
}

impl LowerHex for Frame {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        LowerHex::fmt(&HexSlice::new(&self.bytes), f)
    }
}

impl Validate for Frame {
    fn checksum(&self) -> ChecksumPair {
        ChecksumPair::new(self.bytes[Self::SIZE - 2], self.bytes[Self::SIZE - 1])
    }

    fn calculate_checksum(&self) -> ChecksumPair {
        self.mode().checksum(self.payload())
    }
}

impl<'frame> IntoIterator for &'frame Frame {
    type Item = u8;
    type IntoIter = Copied<Iter<'frame, u8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.bytes.iter().copied()
    }
}

impl AsRef<[u8]> for Frame {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Frame> for [u8; Frame::SIZE] {
    fn from(frame: Frame) -> Self {
        frame.bytes
    }
}

impl TryFrom<[u8; Frame::SIZE]> for Frame {
    type Error = Error;

    fn try_from(bytes: [u8; Self::SIZE]) -> Result<Self, Self::Error> {
        if bytes[0] == Self::SYNC {
            Ok(Self { bytes })
        } else {
            Err(Error::InvalidSync(bytes[0]))
        }
    }
}

impl TryFrom<&[u8]> for Frame {
    type Error = Error;

    fn try_from(buffer: &[u8]) -> Result<Self, Self::Error> {
        <[u8; Self::SIZE]>::try_from(buffer)
            .map_err(|_| Error::InvalidLength {
                expected: Self::SIZE,
                found: buffer.len(),
            })?
            .try_into()
    }
}

impl FromStr for Frame {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        crate::parser::try_parse_line(line)
    }
}
