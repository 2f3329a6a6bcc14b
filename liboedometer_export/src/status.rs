#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportPhase {
    #[default]
    Parsing,
    Writing,
    Done,
}

/// Progress report sent by the export driver
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportStatus {
    pub progress: f32,
    pub stage: usize,
    pub phase: ExportPhase,
}

impl ExportStatus {
    pub fn new(progress: f32, stage: usize, phase: ExportPhase) -> Self {
        Self {
            progress,
            stage,
            phase,
        }
    }
}
