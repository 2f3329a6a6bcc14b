// Record layout of the consolidation logger output. Offsets are character
// offsets into a single record, [start, end).
pub const RECORD_LENGTH: usize = 17;
/// Chunks this short or shorter are padding (typically a trailing newline)
pub const MIN_CHUNK_LENGTH: usize = 1;

pub const DIVE_START: usize = 3;
pub const DIVE_END: usize = 9;
pub const HOURS_START: usize = 9;
pub const HOURS_END: usize = 14;
pub const MINUTES_START: usize = 14;
pub const MINUTES_END: usize = 16;
pub const TENTHS_START: usize = 16;
pub const TENTHS_END: usize = 17;

pub const MINUTES_PER_HOUR: i64 = 60;
pub const TENTHS_PER_MINUTE: i64 = 10;

// KeyLAB schedule
pub const KEYLAB_NAMESPACE: &str = "http://www.keynetix.com/XSD/KeyLAB/Export";
pub const KEYLAB_CONTENT: &str = "schedule";
pub const TEST_CODE: &str = "OEDOISO";
pub const TEST_NAME: &str = "One Dimensional Consolidation ISO";
pub const UNKNOWN_ID: &str = "Unknown";
pub const SPECIMEN: &str = "1";

pub const DIVE_PARAMETER: &str = "Stage_StageReadings_StagePasteDive1";
pub const MINUTES_PARAMETER: &str = "Stage_StageReadings_StagePasteMins1";
/// Properties in the order they are declared in the test definition
pub const TEST_PROPERTIES: [&str; 2] = [MINUTES_PARAMETER, DIVE_PARAMETER];

/// Gauge readings are logged in micrometres
pub const MM_PER_READING: f64 = 0.001;
pub const READINGS_PER_MM: f64 = 1000.0;
