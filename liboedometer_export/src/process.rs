use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use super::config::Config;
use super::error::{ExportError, ParserError};
use super::parser::{parse_file, ParsedFileResult};
use super::schedule::generate_xml;
use super::status::{ExportPhase, ExportStatus};

/// Parse every file in order. The first failure aborts the whole batch.
pub fn parse_results<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<ParsedFileResult>, ParserError> {
    parse_results_with(paths, |_, _, _| ())
}

/// Parse every file in order, calling `on_parsed` with the index, path and result of
/// each file as it completes. The first failure aborts the whole batch.
pub fn parse_results_with<P, F>(
    paths: &[P],
    mut on_parsed: F,
) -> Result<Vec<ParsedFileResult>, ParserError>
where
    P: AsRef<Path>,
    F: FnMut(usize, &Path, &ParsedFileResult),
{
    let mut results = Vec::with_capacity(paths.len());
    for (idx, path) in paths.iter().enumerate() {
        let path = path.as_ref();
        let result = parse_file(path)?;
        on_parsed(idx, path, &result);
        results.push(result);
    }
    Ok(results)
}

/// Write a schedule to disk.
///
/// The bytes go to a uniquely named temporary file in the same directory as `path`,
/// which is then renamed over it, so a failed write never leaves a partial schedule at
/// `path`. The temporary file is removed if anything fails.
pub fn write_schedule(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    let write_error = |source| ExportError::WriteError {
        path: path.to_path_buf(),
        source,
    };
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(directory).map_err(write_error)?;
    file.write_all(bytes).map_err(write_error)?;
    file.as_file().sync_all().map_err(write_error)?;
    file.persist(path).map_err(|e| write_error(e.error))?;
    Ok(())
}

/// The main loop of oedometer_export.
///
/// Parses every input file of the config in order, serializes them as schedule stages,
/// and writes the schedule to the output path. Progress is reported through `on_status`.
pub fn export<F: FnMut(ExportStatus)>(
    config: &Config,
    mut on_status: F,
) -> Result<(), ExportError> {
    if !config.has_inputs() {
        return Err(ExportError::NoInputFiles);
    }
    let output_path = config.get_output_path()?;
    let n_files = config.input_paths.len();

    on_status(ExportStatus::new(0.0, 0, ExportPhase::Parsing));
    let results = parse_results_with(config.input_paths.as_slice(), |idx, path, result| {
        log::info!(
            "Stage {}: {} with {} readings",
            idx + 1,
            path.display(),
            result.len()
        );
        on_status(ExportStatus::new(
            (idx + 1) as f32 / n_files as f32,
            idx + 1,
            ExportPhase::Parsing,
        ));
    })?;

    on_status(ExportStatus::new(1.0, n_files, ExportPhase::Writing));
    let xml = generate_xml(&results)?;
    write_schedule(output_path, &xml)?;
    log::info!(
        "Wrote {} stages to {} ({})",
        results.len(),
        output_path.display(),
        human_bytes::human_bytes(xml.len() as f64)
    );

    on_status(ExportStatus::new(1.0, n_files, ExportPhase::Done));
    Ok(())
}
