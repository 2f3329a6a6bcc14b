use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum RecordError {
    #[error("Record field {field} could not be parsed from {text:?}: {source}")]
    InvalidField {
        field: &'static str,
        text: String,
        source: std::num::ParseIntError,
    },
}

/// A record that failed to decode, by its position in the text
#[derive(Debug, Clone, Error)]
#[error("Record {index} is invalid: {source}")]
pub struct ChunkError {
    pub index: usize,
    pub source: RecordError,
}

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("Could not open reading file because file {0:?} does not exist")]
    BadFilePath(PathBuf),
    #[error("Parser failed to read {path:?}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Parser failed on record {index} of {path:?}: {source}")]
    BadRecord {
        path: PathBuf,
        index: usize,
        source: RecordError,
    },
}

impl ParserError {
    /// The file the error came from
    pub fn path(&self) -> &Path {
        match self {
            Self::BadFilePath(path) => path,
            Self::ReadError { path, .. } => path,
            Self::BadRecord { path, .. } => path,
        }
    }
}

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("Schedule failed to write XML: {0}")]
    XmlError(#[from] quick_xml::Error),
    #[error("Schedule failed to format timestamp: {0}")]
    TimestampError(#[from] time::error::Format),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration as file {0:?} does not exist")]
    BadFilePath(PathBuf),
    #[error("Config failed due to IO error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Config failed to parse YAML: {0}")]
    ParsingError(#[from] serde_yaml::Error),
    #[error("Config does not have an output path")]
    NoOutputPath,
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Export failed because no input files were given")]
    NoInputFiles,
    #[error("Export failed due to Parser error: {0}")]
    ParserError(#[from] ParserError),
    #[error("Export failed due to Schedule error: {0}")]
    ScheduleError(#[from] ScheduleError),
    #[error("Export failed due to Config error: {0}")]
    ConfigError(#[from] ConfigError),
    #[error("Export failed to write {path:?}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
}
