use super::constants::{MM_PER_READING, READINGS_PER_MM};
use super::parser::{format_decimal, ParsedFileResult};
use super::rounding::{round_down, round_up};

/// Diagnostics for a single stage: settlement and duration, plus the axis bounds
/// used when plotting gauge reading (mm) against time (minutes).
#[derive(Debug, Clone, PartialEq)]
pub struct StageSummary {
    pub displacement_mm: f64,
    pub max_reading: i64,
    pub min_reading: i64,
    pub time_taken: i64,
    pub time_bounds: (f64, f64),
    pub reading_bounds_mm: (f64, f64),
}

impl StageSummary {
    /// Summarize a parsed file. Returns None if the file had no records.
    pub fn new(result: &ParsedFileResult) -> Option<Self> {
        let max_reading = *result.dive().iter().max()?;
        let min_reading = *result.dive().iter().min()?;

        let readings_mm: Vec<f64> = result
            .dive()
            .iter()
            .map(|value| *value as f64 * MM_PER_READING)
            .collect();
        let max_mm = readings_mm.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min_mm = readings_mm.iter().copied().fold(f64::INFINITY, f64::min);

        let minutes = result.elapsed_minutes();
        let max_time = minutes.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min_time = minutes.iter().copied().fold(f64::INFINITY, f64::min);

        // Whole readings are exact, so the difference needs no rounding
        Some(Self {
            displacement_mm: (max_reading - min_reading) as f64 / READINGS_PER_MM,
            max_reading,
            min_reading,
            time_taken: max_time.trunc() as i64,
            time_bounds: (min_time, round_up(max_time, -2)),
            reading_bounds_mm: (round_down(min_mm, 1), max_mm),
        })
    }

    pub fn reading_diff(&self) -> i64 {
        self.max_reading - self.min_reading
    }

    /// Human readable lines describing the stage
    pub fn report_lines(&self) -> Vec<String> {
        vec![
            format!("Displacement = {}mm", format_decimal(self.displacement_mm)),
            format!("Max Gauge Reading = {}", self.max_reading),
            format!("Min Gauge Reading = {}", self.min_reading),
            format!("Gauge Reading Diff = {}", self.reading_diff()),
            format!("Time Taken = {} min", self.time_taken),
        ]
    }
}
