use model::{core::identifiers::StepName, log::Severity};
use std::sync::Mutex;
use tracing::{error, info};

/// Destination of row log messages. Shared by all copies of a step.
pub trait LogSink: Send + Sync {
    /// Emit `message` at `severity`. Never called with [`Severity::None`].
    fn emit(&self, step: &StepName, copy_nr: usize, severity: Severity, message: &str);
}

/// Emits through `tracing`: errors at ERROR level, basic messages at INFO.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn emit(&self, step: &StepName, copy_nr: usize, severity: Severity, message: &str) {
        match severity {
            Severity::Error => error!(step = %step, copy = copy_nr, "{message}"),
            Severity::Basic => info!(step = %step, copy = copy_nr, "{message}"),
            Severity::None => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub step: StepName,
    pub copy_nr: usize,
    pub severity: Severity,
    pub message: String,
}

/// Keeps every emitted message in memory, in emission order.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<LogRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl LogSink for MemorySink {
    fn emit(&self, step: &StepName, copy_nr: usize, severity: Severity, message: &str) {
        if severity == Severity::None {
            return;
        }
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(LogRecord {
                step: step.clone(),
                copy_nr,
                severity,
                message: message.to_string(),
            });
    }
}
