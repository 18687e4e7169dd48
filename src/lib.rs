//! Decoder and checksum validator for hex-dumped sync frames.
//!
//! Log files of the serial link dump every received frame as a line such as
//!
//! ```text
//! 10:00:01 RX Data: AA 80 01 01 01 01 01 01 01 01 01 01 01 01 1A 73
//! ```
//!
//! A frame is 16 bytes long and starts with the sync byte `0xAA`. The high bit of its second
//! byte selects the checksum that protects its first 14 bytes: a table-driven rolling checksum
//! if set, or the 16-bit sum of the bytes otherwise. The checksum is stored in the last two
//! bytes, high byte first.
//!
//! ```
//! use hexframes::{parse_line, validate};
//!
//! let frame = parse_line("RX Data: AA 80 01 01 01 01 01 01 01 01 01 01 01 01 1A 73")
//!     .expect("Line should carry a frame.");
//! assert_eq!(validate(frame).to_string(), "Frame [170, 128, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 26, 115] CRC OK");
//! ```

#[cfg(feature = "cli")]
use clap as _;
#[cfg(feature = "cli")]
use env_logger as _;

pub use checksum::ChecksumPair;
pub use error::Error;
pub use frame::{Frame, Mode};
pub use parser::{parse_line, try_parse_line, MARKER};
pub use reader::{FrameReader, Summary};
pub use report::Report;
pub use utils::HexSlice;
pub use validate::{validate, Validate};

pub mod checksum;
mod error;
mod frame;
mod parser;
mod reader;
mod report;
mod types;
mod utils;
mod validate;
