use core::fmt::{Display, Formatter};

/// A two-byte checksum as it appears at the end of a frame.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct ChecksumPair {
    high: u8,
    low: u8,
}

impl ChecksumPair {
    /// The size of the checksum field in bytes.
    pub const SIZE: usize = 2;

    /// Creates a new checksum pair.
    #[must_use]
    pub const fn new(high: u8, low: u8) -> Self {
        Self { high, low }
    }

    /// Returns the high byte.
    #[must_use]
    pub const fn high(self) -> u8 {
        self.high
    }

    /// Returns the low byte.
    #[must_use]
    pub const fn low(self) -> u8 {
        self.low
    }

    /// Returns the bytes in frame order.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; Self::SIZE] {
        [self.high, self.low]
    }
}

impl Display for ChecksumPair {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:#04X}, {:#04X})", self.high, self.low)
    }
}

impl From<[u8; 2]> for ChecksumPair {
    fn from([high, low]: [u8; 2]) -> Self {
        Self::new(high, low)
    }
}

impl From<u16> for ChecksumPair {
    fn from(value: u16) -> Self {
        value.to_be_bytes().into()
    }
}

impl From<ChecksumPair> for u16 {
    fn from(pair: ChecksumPair) -> Self {
        Self::from_be_bytes(pair.to_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::ChecksumPair;

    #[test]
    fn test_u16_conversion() {
        let pair = ChecksumPair::from(0x1AADu16);
        assert_eq!(pair.high(), 0x1A);
        assert_eq!(pair.low(), 0xAD);
        assert_eq!(u16::from(pair), 0x1AAD);
    }

    #[test]
    fn test_to_string() {
        assert_eq!(
            &ChecksumPair::new(0x00, 0x0E).to_string(),
            "(0x00, 0x0E)"
        );
    }
}
