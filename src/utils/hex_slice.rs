use std::fmt::{Formatter, LowerHex, UpperHex};

/// A wrapper around a slice of bytes to format it as space-separated hexadecimal bytes.
///
/// This is the notation frames take in the log lines they are read from, e.g. `AA 01 FF`.
/// The alternate flag (`{:#X}`) prefixes each byte with `0x`.
pub struct HexSlice<'a>(&'a [u8]);

impl<'a> HexSlice<'a> {
    /// Creates a new `HexSlice`.
    pub const fn new(slice: &'a [u8]) -> Self {
        Self(slice)
    }

    fn fmt_with(
        &self,
        f: &mut Formatter<'_>,
        byte_fmt: fn(&u8, &mut Formatter<'_>) -> std::fmt::Result,
    ) -> std::fmt::Result {
        for (index, byte) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }

            if f.alternate() {
                write!(f, "0x")?;
            }

            byte_fmt(byte, f)?;
        }

        Ok(())
    }
}

impl UpperHex for HexSlice<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.fmt_with(f, |byte, f| write!(f, "{byte:02X}"))
    }
}

impl LowerHex for HexSlice<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.fmt_with(f, |byte, f| write!(f, "{byte:02x}"))
    }
}
