//! Checksum validation.

use log::debug;

use crate::checksum::ChecksumPair;
use crate::frame::Frame;
use crate::report::Report;

/// A trait for checksum based data validation.
pub trait Validate: Sized {
    /// Returns the checksum stored in the data.
    fn checksum(&self) -> ChecksumPair;

    /// Calculates the expected checksum of the data.
    fn calculate_checksum(&self) -> ChecksumPair;

    /// Determines whether the stored checksum matches the calculated one.
    fn is_checksum_valid(&self) -> bool {
        self.checksum() == self.calculate_checksum()
    }

    /// Validates whether the checksum is valid.
    ///
    /// # Returns
    ///
    /// Returns `Self` if the checksum is valid.
    ///
    /// # Errors
    ///
    /// Returns the calculated checksum if invalid.
    fn validate(self) -> Result<Self, ChecksumPair> {
        let calculated = self.calculate_checksum();

        if self.checksum() == calculated {
            Ok(self)
        } else {
            Err(calculated)
        }
    }
}

/// Validates the checksum of `frame` and reports the outcome.
///
/// A mismatch is a regular outcome and reported as such.
#[must_use]
pub fn validate(frame: Frame) -> Report {
    match frame.validate() {
        Ok(frame) => Report::new(frame, true),
        Err(expected) => {
            debug!(
                "{} checksum mismatch: stored {}, expected {expected}",
                frame.mode(),
                frame.checksum()
            );
            Report::new(frame, false)
        }
    }
}
