//! Reading frames from line-oriented input.

use core::fmt::{Display, Formatter};
use std::io::{self, BufRead};

use log::{debug, trace};

use crate::parser::parse_line;
use crate::report::Report;
use crate::validate::validate;

/// Counters of a [`FrameReader`] run.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Summary {
    /// Lines read from the input.
    pub lines: usize,
    /// Lines that carried a frame.
    pub frames: usize,
    /// Frames with a matching checksum.
    pub valid: usize,
}

impl Summary {
    /// Returns the number of frames with a mismatching checksum.
    #[must_use]
    pub const fn invalid(&self) -> usize {
        self.frames.saturating_sub(self.valid)
    }

    /// Returns the number of lines that did not carry a frame.
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.lines.saturating_sub(self.frames)
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} lines, {} frames, {} CRC OK, {} CRC FAIL, {} skipped",
            self.lines,
            self.frames,
            self.valid,
            self.invalid(),
            self.skipped()
        )
    }
}

/// Reads lines from a buffered reader and yields a [`Report`] for every frame line.
///
/// Lines that do not carry a frame are skipped.
/// Bytes that are not valid UTF-8 are replaced before a line is parsed.
#[derive(Debug)]
pub struct FrameReader<R> {
    inner: R,
    buffer: Vec<u8>,
    summary: Summary,
}

impl<R> FrameReader<R> {
    /// Creates a new `FrameReader` reading from `inner`.
    #[must_use]
    pub const fn new(inner: R) -> Self {
        Self {
            inner,
            buffer: Vec::new(),
            summary: Summary {
                lines: 0,
                frames: 0,
                valid: 0,
            },
        }
    }

    /// Returns the counters accumulated so far.
    #[must_use]
    pub const fn summary(&self) -> Summary {
        self.summary
    }

    /// Return the inner reader.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R> FrameReader<R>
where
    R: BufRead,
{
    /// Reads lines until the next frame and validates it.
    ///
    /// Returns `Ok(None)` at the end of the input.
    ///
    /// # Errors
    ///
    /// Returns an [`io::Error`] if reading from the inner reader fails.
    pub fn read_report(&mut self) -> io::Result<Option<Report>> {
        loop {
            self.buffer.clear();

            if self.inner.read_until(b'\n', &mut self.buffer)? == 0 {
                debug!("End of input: {}", self.summary);
                return Ok(None);
            }

            self.summary.lines += 1;

            let Some(frame) = parse_line(&String::from_utf8_lossy(&self.buffer)) else {
                trace!("Line {} carries no frame.", self.summary.lines);
                continue;
            };

            let report = validate(frame);
            self.summary.frames += 1;

            if report.is_valid() {
                self.summary.valid += 1;
            }

            return Ok(Some(report));
        }
    }
}

impl<R> Iterator for FrameReader<R>
where
    R: BufRead,
{
    type Item = io::Result<Report>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_report().transpose()
    }
}
