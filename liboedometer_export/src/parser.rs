use std::path::Path;

use super::constants::{DIVE_PARAMETER, MINUTES_PARAMETER, MIN_CHUNK_LENGTH, RECORD_LENGTH};
use super::error::{ChunkError, ParserError};
use super::record::Record;

/// The readings of one logger file, as two index-aligned series.
///
/// Entry `i` of `dive` and entry `i` of `elapsed_minutes` come from the same record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedFileResult {
    dive: Vec<i64>,
    elapsed_minutes: Vec<f64>,
}

impl ParsedFileResult {
    pub fn push(&mut self, record: &Record) {
        self.dive.push(record.dive);
        self.elapsed_minutes.push(record.elapsed_minutes());
    }

    pub fn dive(&self) -> &[i64] {
        &self.dive
    }

    pub fn elapsed_minutes(&self) -> &[f64] {
        &self.elapsed_minutes
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.dive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dive.is_empty()
    }

    /// The (name, value) pairs of this result as they appear in a schedule stage:
    /// every dive reading in record order, then every elapsed time in record order.
    pub fn parameters(&self) -> impl Iterator<Item = (&'static str, String)> + '_ {
        let dives = self
            .dive
            .iter()
            .map(|value| (DIVE_PARAMETER, value.to_string()));
        let minutes = self
            .elapsed_minutes
            .iter()
            .map(|value| (MINUTES_PARAMETER, format_decimal(*value)));
        dives.chain(minutes)
    }
}

/// Format a decimal so that whole values keep a fractional digit (60 -> "60.0")
pub fn format_decimal(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}

/// Text-mode line endings: CRLF and lone CR become LF
fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Parse the full contents of a logger file.
///
/// The text is split into consecutive [`RECORD_LENGTH`] character chunks. Chunks of
/// [`MIN_CHUNK_LENGTH`] characters or fewer are padding and skipped. A trailing chunk
/// that is longer than that but still short of a full record is dropped with a warning.
pub fn parse_str(text: &str) -> Result<ParsedFileResult, ChunkError> {
    let chars: Vec<char> = normalize_newlines(text).chars().collect();
    let mut result = ParsedFileResult::default();
    for (index, chunk) in chars.chunks(RECORD_LENGTH).enumerate() {
        if chunk.len() <= MIN_CHUNK_LENGTH {
            continue;
        }
        if chunk.len() < RECORD_LENGTH {
            log::warn!(
                "Dropping truncated record {index} ({} of {RECORD_LENGTH} characters)",
                chunk.len()
            );
            continue;
        }
        let record = Record::from_chunk(chunk)
            .map_err(|source| ChunkError { index, source })?;
        result.push(&record);
    }
    Ok(result)
}

/// Read and parse a single logger file
pub fn parse_file(path: &Path) -> Result<ParsedFileResult, ParserError> {
    if !path.exists() {
        return Err(ParserError::BadFilePath(path.to_path_buf()));
    }
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(source) => {
            return Err(ParserError::ReadError {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    let result = match parse_str(&text) {
        Ok(result) => result,
        Err(ChunkError { index, source }) => {
            return Err(ParserError::BadRecord {
                path: path.to_path_buf(),
                index,
                source,
            })
        }
    };
    log::info!(
        "Parsed {} records from {} ({})",
        result.len(),
        path.display(),
        human_bytes::human_bytes(text.len() as f64)
    );
    Ok(result)
}
