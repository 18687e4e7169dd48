//! Decoding of log lines into frames.
//!
//! A frame line carries arbitrary leading tokens, the marker token `Data:` and then exactly
//! [`Frame::SIZE`] hexadecimal byte tokens, e.g.
//!
//! ```text
//! 12:00:01.250 RX Data: AA 00 01 01 01 01 01 01 01 01 01 01 01 01 00 B6
//! ```

use log::{trace, warn};

use crate::error::Error;
use crate::frame::Frame;
use crate::types::RawFrame;

/// The token preceding the frame's bytes.
pub const MARKER: &str = "Data:";

/// Parses a frame from a log line.
///
/// Returns `None` for any line that does not carry a well-formed frame.
#[must_use]
pub fn parse_line(line: &str) -> Option<Frame> {
    match try_parse_line(line) {
        Ok(frame) => Some(frame),
        Err(error) if error.is_structural() => {
            trace!("Skipping line: {error}");
            None
        }
        Err(error) => {
            warn!("Skipping malformed frame line: {error}");
            None
        }
    }
}

/// Parses a frame from a log line.
///
/// # Errors
///
/// Returns an [`Error`] describing why the line does not carry a frame.
pub fn try_parse_line(line: &str) -> Result<Frame, Error> {
    let mut tokens = line.split_whitespace();

    if !tokens.any(|token| token == MARKER) {
        return Err(Error::MissingMarker);
    }

    let found = tokens.clone().count();

    if found != Frame::SIZE {
        return Err(Error::InvalidTokenCount {
            expected: Frame::SIZE,
            found,
        });
    }

    let mut raw = RawFrame::new();

    for (index, token) in tokens.enumerate() {
        let byte = parse_byte(token).ok_or_else(|| Error::InvalidToken {
            index,
            token: token.into(),
        })?;
        raw.push(byte).map_err(|_| Error::InvalidTokenCount {
            expected: Frame::SIZE,
            found,
        })?;
    }

    Frame::try_from(raw.as_slice())
}

/// Parses a case-insensitive hexadecimal byte without sign or prefix.
fn parse_byte(token: &str) -> Option<u8> {
    if token.is_empty() || !token.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return None;
    }

    u8::from_str_radix(token, 16).ok()
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::{parse_byte, parse_line, try_parse_line};
    use crate::error::Error;
    use crate::frame::Frame;

    const LINE: &str = "2024-03-01 12:00:01.250 RX Data: AA 00 01 01 01 01 01 01 01 01 01 01 01 01 00 B6";

    #[test]
    fn test_parse_line() {
        let frame = parse_line(LINE).unwrap();
        assert_eq!(
            frame.bytes(),
            &[0xAA, 0x00, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x00, 0xB6]
        );
    }

    #[test]
    fn test_marker_only_line() {
        let frame = parse_line("Data: aa 80 00 00 00 00 00 00 00 00 00 00 00 00 c2 68").unwrap();
        assert_eq!(frame.bytes()[0], Frame::SYNC);
        assert_eq!(frame.bytes()[14..], [0xC2, 0x68]);
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert!(parse_line("\t Data:  AA 00 00 00 00 00 00 00 00 00 00 00 00 00 00 AA \r\n").is_some());
    }

    #[test]
    fn test_missing_marker() {
        assert_eq!(
            try_parse_line("RX AA 00 01 01 01 01 01 01 01 01 01 01 01 01 00 B6"),
            Err(Error::MissingMarker)
        );
        assert_eq!(try_parse_line(""), Err(Error::MissingMarker));
        assert_eq!(
            try_parse_line("Data AA 00 01 01 01 01 01 01 01 01 01 01 01 01 00 B6"),
            Err(Error::MissingMarker)
        );
    }

    #[test]
    fn test_token_count() {
        assert_eq!(
            try_parse_line("Data: AA 00 01 01 01 01 01 01 01 01 01 01 01 01 00"),
            Err(Error::InvalidTokenCount {
                expected: 16,
                found: 15
            })
        );
        assert_eq!(
            try_parse_line("Data: AA 00 01 01 01 01 01 01 01 01 01 01 01 01 00 B6 00"),
            Err(Error::InvalidTokenCount {
                expected: 16,
                found: 17
            })
        );
        assert_eq!(
            try_parse_line("Data:"),
            Err(Error::InvalidTokenCount {
                expected: 16,
                found: 0
            })
        );
    }

    #[test]
    fn test_bytes_follow_first_marker() {
        assert_eq!(
            try_parse_line("Data: Data: AA 00 01 01 01 01 01 01 01 01 01 01 01 01 00 B6"),
            Err(Error::InvalidTokenCount {
                expected: 16,
                found: 17
            })
        );
    }

    #[test]
    fn test_invalid_sync() {
        for first in ["00", "55", "AB", "FF"] {
            let line = format!("Data: {first} 00 01 01 01 01 01 01 01 01 01 01 01 01 00 B6");
            assert_eq!(
                try_parse_line(&line),
                Err(Error::InvalidSync(u8::from_str_radix(first, 16).unwrap()))
            );
            assert_eq!(parse_line(&line), None);
        }
    }

    #[test]
    fn test_invalid_token() {
        let line = "Data: AA 00 01 ZZ 01 01 01 01 01 01 01 01 01 01 00 B6";
        assert_eq!(
            try_parse_line(line),
            Err(Error::InvalidToken {
                index: 3,
                token: "ZZ".into()
            })
        );
        assert_eq!(parse_line(line), None);
    }

    #[test]
    fn test_out_of_range_token() {
        assert_eq!(
            try_parse_line("Data: AA 100 01 01 01 01 01 01 01 01 01 01 01 01 00 B6"),
            Err(Error::InvalidToken {
                index: 1,
                token: "100".into()
            })
        );
    }

    #[test]
    fn test_parse_byte() {
        assert_eq!(parse_byte("AA"), Some(0xAA));
        assert_eq!(parse_byte("aa"), Some(0xAA));
        assert_eq!(parse_byte("0"), Some(0x00));
        assert_eq!(parse_byte("0ff"), Some(0xFF));
        assert_eq!(parse_byte("+1"), None);
        assert_eq!(parse_byte("0x1"), None);
        assert_eq!(parse_byte("-1"), None);
        assert_eq!(parse_byte("1FF"), None);
        assert_eq!(parse_byte(""), None);
    }
}
