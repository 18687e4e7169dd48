use log::trace;

use super::tables::{CRCTABLE_HI, CRCTABLE_LO};
use super::ChecksumPair;

/// Initial register values `(a, b)`.
const INITIAL_REGISTERS: (u8, u8) = (60, 127);

/// Calculates the table-driven checksum of `payload`.
///
/// Two byte registers roll over the payload in order.
/// Each byte selects a table row by its XOR with register `a`.
/// Register `a` becomes the old register `b` folded with the high table entry and register `b`
/// becomes the low table entry.
#[must_use]
pub fn table_driven(payload: &[u8]) -> ChecksumPair {
    let (high, low) = payload
        .iter()
        .fold(INITIAL_REGISTERS, |(reg_a, reg_b), &byte| {
            let index = usize::from(reg_a ^ byte);
            (reg_b ^ CRCTABLE_HI[index], CRCTABLE_LO[index])
        });
    trace!("Table-driven registers after {} bytes: ({high}, {low})", payload.len());
    ChecksumPair::new(high, low)
}

#[cfg(test)]
mod tests {
    use crc::{Algorithm, Crc};

    use super::{table_driven, ChecksumPair, INITIAL_REGISTERS};

    /// Reflected CRC-16 over `0x8005` whose register starts at `0x7F3C`.
    ///
    /// The catalog notation takes the initial value unreflected, hence `0x3CFE`.
    const ALGORITHM: Algorithm<u16> = Algorithm {
        width: 16,
        poly: 0x8005,
        init: 0x3CFE,
        refin: true,
        refout: true,
        xorout: 0x0000,
        check: 0xDE7B,
        residue: 0x0000,
    };
    const CRC: Crc<u16> = Crc::<u16>::new(&ALGORITHM);

    #[test]
    fn test_empty_payload_yields_initial_registers() {
        let (high, low) = INITIAL_REGISTERS;
        assert_eq!(table_driven(&[]), ChecksumPair::new(high, low));
    }

    #[test]
    fn test_zero_payload() {
        assert_eq!(table_driven(&[0x00; 14]), ChecksumPair::new(0x97, 0x03));
    }

    #[test]
    fn test_ones_payload() {
        assert_eq!(table_driven(&[0x01; 14]), ChecksumPair::new(0x4D, 0x58));
    }

    #[test]
    fn test_check_value() {
        let [low, high] = ALGORITHM.check.to_le_bytes();
        assert_eq!(table_driven(b"123456789"), ChecksumPair::new(low, high));
    }

    #[test]
    fn test_matches_crc16() {
        let payloads: [&[u8]; 4] = [
            &[0x00; 14],
            &[0xAA, 0x80, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01],
            &[0xAA, 0x81, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D],
            &[0xFF; 14],
        ];

        for payload in payloads {
            let [low, high] = CRC.checksum(payload).to_le_bytes();
            assert_eq!(table_driven(payload), ChecksumPair::new(low, high));
        }
    }

    #[test]
    fn test_order_matters() {
        let forward = [0xAA, 0x81, 0x02, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
        let mut backward = forward;
        backward.reverse();
        assert_eq!(table_driven(&forward), ChecksumPair::new(0x6D, 0xEE));
        assert_ne!(table_driven(&forward), table_driven(&backward));
    }
}
