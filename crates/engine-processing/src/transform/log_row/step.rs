use super::{format::MessageFormat, policy::evaluate};
use crate::{sink::LogSink, transform::pipeline::Step};
use model::{
    core::identifiers::StepName,
    log::RowEvaluationContext,
    records::{meta::RowMeta, row::RowData},
    settings::LogRowSettings,
};
use std::sync::Arc;
use tracing::trace;

/// Logs rows according to [`LogRowSettings`] and forwards them untouched.
///
/// Each instance tracks whether it has seen its first row. Copies made with
/// [`Step::copy`] start over, so every partition logs its own first row.
pub struct LogRowStep {
    name: StepName,
    copy_nr: usize,
    settings: LogRowSettings,
    format: MessageFormat,
    sink: Arc<dyn LogSink>,
    first: bool,
    rows_processed: u64,
}

impl LogRowStep {
    pub fn new(name: impl Into<StepName>, settings: LogRowSettings, sink: Arc<dyn LogSink>) -> Self {
        Self {
            name: name.into(),
            copy_nr: 0,
            settings,
            format: MessageFormat::default(),
            sink,
            first: true,
            rows_processed: 0,
        }
    }

    pub fn with_format(mut self, format: MessageFormat) -> Self {
        self.format = format;
        self
    }

    pub fn copy_nr(&self) -> usize {
        self.copy_nr
    }

    pub fn is_first_row(&self) -> bool {
        self.first
    }

    pub fn rows_processed(&self) -> u64 {
        self.rows_processed
    }
}

impl Step for LogRowStep {
    fn name(&self) -> &StepName {
        &self.name
    }

    fn process_row(&mut self, input_meta: &RowMeta, row: RowData) -> RowData {
        let field_names = input_meta.field_names();
        let ctx = RowEvaluationContext::for_row(input_meta, &field_names, &row, self.first);
        let directive = evaluate(&self.settings, &ctx, &self.format);

        if let Some(message) = directive.message() {
            self.sink
                .emit(&self.name, self.copy_nr, directive.severity(), message);
        }

        trace!(
            step = %self.name,
            copy = self.copy_nr,
            severity = %directive.severity(),
            "Forwarding row"
        );

        self.first = false;
        self.rows_processed += 1;
        row
    }

    fn copy(&self, copy_nr: usize) -> Self {
        Self {
            name: self.name.clone(),
            copy_nr,
            settings: self.settings,
            format: self.format,
            sink: Arc::clone(&self.sink),
            first: true,
            rows_processed: 0,
        }
    }
}
