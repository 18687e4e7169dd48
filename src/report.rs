//! Validation outcome of a single frame.

use core::fmt::{Display, Formatter};

use crate::frame::Frame;

/// A frame together with the result of its checksum validation.
///
/// `Display` renders the frame's bytes in decimal, the alternate form (`{:#}`) in hexadecimal.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Report {
    frame: Frame,
    is_valid: bool,
}

impl Report {
    /// Creates a new report.
    #[must_use]
    pub const fn new(frame: Frame, is_valid: bool) -> Self {
        Self { frame, is_valid }
    }

    /// Returns the validated frame.
    #[must_use]
    pub const fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Returns `true` if the frame's checksum matched.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Returns the verdict as printed in reports.
    #[must_use]
    pub const fn verdict(&self) -> &'static str {
        if self.is_valid {
            "CRC OK"
        } else {
            "CRC FAIL"
        }
    }

    /// Consumes the report and returns the frame and its validity.
    #[must_use]
    pub const fn into_parts(self) -> (Frame, bool) {
        (self.frame, self.is_valid)
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            write!(f, "Frame {:X} {}", self.frame, self.verdict())
        } else {
            write!(f, "Frame {} {}", self.frame, self.verdict())
        }
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::Report;
    use crate::frame::Frame;

    const BYTES: [u8; 16] = [
        0xAA, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0xAA,
    ];

    #[test]
    fn test_to_string() {
        let frame = Frame::try_from(BYTES).unwrap();
        assert_eq!(
            &Report::new(frame, true).to_string(),
            "Frame [170, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 170] CRC OK"
        );
        assert_eq!(
            &Report::new(frame, false).to_string(),
            "Frame [170, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 170] CRC FAIL"
        );
    }

    #[test]
    fn test_alternate() {
        let frame = Frame::try_from(BYTES).unwrap();
        assert_eq!(
            format!("{:#}", Report::new(frame, true)),
            "Frame AA 00 00 00 00 00 00 00 00 00 00 00 00 00 00 AA CRC OK"
        );
    }

    #[test]
    fn test_into_parts() {
        let frame = Frame::try_from(BYTES).unwrap();
        assert_eq!(Report::new(frame, false).into_parts(), (frame, false));
    }
}
