//! Frame checksum algorithms.

pub use additive::additive;
pub use pair::ChecksumPair;
pub use table::table_driven;
pub use tables::{CRCTABLE_HI, CRCTABLE_LO};

mod additive;
mod pair;
mod table;
mod tables;
