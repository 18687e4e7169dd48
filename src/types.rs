//! Common types used while decoding frames.

use crate::Frame;

/// A stack-allocated buffer that collects the bytes of a frame while its line is parsed.
pub type RawFrame = heapless::Vec<u8, { Frame::SIZE }>;
