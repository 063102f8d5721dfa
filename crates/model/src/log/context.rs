use crate::{
    core::value::Value,
    records::{meta::RowMeta, row::RowData},
};

/// Borrowed per-row input of the logging policy.
///
/// `expected_field_count` is an explicit input rather than being derived from
/// `field_names`, so a host can compare against whichever schema it considers
/// authoritative.
#[derive(Debug, Clone, Copy)]
pub struct RowEvaluationContext<'a> {
    pub expected_field_count: usize,
    pub actual_value_count: usize,
    pub is_first_row: bool,
    pub field_names: &'a [&'a str],
    pub values: &'a [Value],
}

impl<'a> RowEvaluationContext<'a> {
    pub fn new(field_names: &'a [&'a str], values: &'a [Value], is_first_row: bool) -> Self {
        Self {
            expected_field_count: field_names.len(),
            actual_value_count: values.len(),
            is_first_row,
            field_names,
            values,
        }
    }

    /// Context for a row described by `meta`. `field_names` must be the names
    /// of `meta`, usually from [`RowMeta::field_names`].
    pub fn for_row(
        meta: &RowMeta,
        field_names: &'a [&'a str],
        row: &'a RowData,
        is_first_row: bool,
    ) -> Self {
        Self {
            expected_field_count: meta.size(),
            actual_value_count: row.len(),
            is_first_row,
            field_names,
            values: row.values(),
        }
    }

    pub fn is_under_run(&self) -> bool {
        self.expected_field_count > self.actual_value_count
    }
}
