use crate::{error::CliError, rows};
use engine_processing::{runner::run_copies, transform::log_row::LogRowStep};
use std::io::{Read, Write};
use tracing::info;

/// Read CSV rows from `input`, pass them through `copies` copies of `step`
/// and write the forwarded rows to `output` in input order. Returns the
/// number of rows written.
pub async fn run_csv<R, W>(
    step: &LogRowStep,
    copies: usize,
    input: R,
    output: W,
) -> Result<usize, CliError>
where
    R: Read,
    W: Write,
{
    let (meta, input_rows) = rows::read_rows(input)?;
    info!(fields = meta.size(), rows = input_rows.len(), "Read input rows");

    let forwarded = run_copies(step, copies, meta, input_rows).await?;
    let meta = forwarded.meta.clone();
    let out_rows = forwarded.into_input_order();

    rows::write_rows(output, &meta, &out_rows)?;
    Ok(out_rows.len())
}
