use super::constants::*;
use super::error::RecordError;

/// A single fixed-width reading from the consolidation logger.
///
/// Records carry no delimiters; each field lives at a fixed character offset
/// (see [`constants`](super::constants)).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    pub dive: i64,
    pub hours: i64,
    pub minutes: i64,
    pub tenths: i64,
}

impl Record {
    /// Decode a record from a chunk of characters.
    ///
    /// Fields that run past the end of the chunk are read as whatever remains of it,
    /// so a truncated chunk fails on its first empty field.
    pub fn from_chunk(chunk: &[char]) -> Result<Self, RecordError> {
        Ok(Self {
            dive: parse_field(chunk, DIVE_START, DIVE_END, "dive")?,
            hours: parse_field(chunk, HOURS_START, HOURS_END, "hours")?,
            minutes: parse_field(chunk, MINUTES_START, MINUTES_END, "minutes")?,
            tenths: parse_field(chunk, TENTHS_START, TENTHS_END, "tenths")?,
        })
    }

    /// Total elapsed time in tenths of a minute
    pub fn elapsed_tenths(&self) -> i64 {
        (self.hours * MINUTES_PER_HOUR + self.minutes) * TENTHS_PER_MINUTE + self.tenths
    }

    /// Elapsed time in minutes, at one decimal place
    pub fn elapsed_minutes(&self) -> f64 {
        self.elapsed_tenths() as f64 / TENTHS_PER_MINUTE as f64
    }
}

fn parse_field(
    chunk: &[char],
    start: usize,
    end: usize,
    field: &'static str,
) -> Result<i64, RecordError> {
    let text: String = chunk.iter().skip(start).take(end - start).collect();
    match text.trim().parse::<i64>() {
        Ok(value) => Ok(value),
        Err(source) => Err(RecordError::InvalidField {
            field,
            text,
            source,
        }),
    }
}
