use super::ChecksumPair;

/// Calculates the additive checksum of `payload`.
///
/// The result is the lower 16 bits of the sum of all bytes. Carries out of bit 15 are
/// dropped, so payloads of any length are accepted.
#[must_use]
pub fn additive(payload: &[u8]) -> ChecksumPair {
    payload
        .iter()
        .fold(0u16, |sum, &byte| sum.wrapping_add(u16::from(byte)))
        .into()
}
