use model::{
    core::identifiers::StepName,
    records::{meta::RowMeta, row::RowData},
};

/// A row-at-a-time pipeline step.
///
/// A step instance is driven by a single task. Parallel execution over
/// partitioned input uses one independent copy per partition, obtained with
/// [`Step::copy`].
pub trait Step: Send {
    fn name(&self) -> &StepName;

    /// Schema of the rows this step forwards, given the schema it receives.
    fn output_meta(&self, input_meta: &RowMeta) -> RowMeta {
        input_meta.clone()
    }

    /// Handle one row and return the row to forward.
    fn process_row(&mut self, input_meta: &RowMeta, row: RowData) -> RowData;

    /// A fresh instance with the same configuration and no per-row state.
    fn copy(&self, copy_nr: usize) -> Self
    where
        Self: Sized;
}
