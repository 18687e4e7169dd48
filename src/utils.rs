//! Miscellaneous utility types and functions.

pub use hex_slice::HexSlice;

mod hex_slice;
