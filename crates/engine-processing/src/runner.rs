//! Runs parallel copies of a step over partitioned input.
//!
//! Rows are dealt round-robin to the copies. Each copy runs on its own task
//! and owns its per-row state, so nothing is shared between copies apart
//! from what the step itself shares (such as its log sink).

use crate::{error::ProcessingError, transform::pipeline::Step};
use futures::future::try_join_all;
use model::records::{meta::RowMeta, row::RowData};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};

const ROW_CHANNEL_CAPACITY: usize = 1024;

/// Rows forwarded by each copy, indexed by copy number, in the order the
/// copy received them.
#[derive(Debug, Default)]
pub struct CopiesOutput {
    pub meta: RowMeta,
    pub copies: Vec<Vec<RowData>>,
}

impl CopiesOutput {
    pub fn row_count(&self) -> usize {
        self.copies.iter().map(Vec::len).sum()
    }

    /// Forwarded rows in input order, undoing the round-robin partitioning.
    pub fn into_input_order(self) -> Vec<RowData> {
        let total = self.row_count();
        let mut iters: Vec<_> = self.copies.into_iter().map(Vec::into_iter).collect();
        let mut rows = Vec::with_capacity(total);
        if iters.is_empty() {
            return rows;
        }
        for index in 0..total {
            let copy = index % iters.len();
            if let Some(row) = iters[copy].next() {
                rows.push(row);
            }
        }
        rows
    }
}

pub async fn run_copies<S>(
    template: &S,
    copies: usize,
    input_meta: RowMeta,
    rows: Vec<RowData>,
) -> Result<CopiesOutput, ProcessingError>
where
    S: Step + 'static,
{
    if copies == 0 {
        return Err(ProcessingError::InvalidCopies(copies));
    }

    let output_meta = template.output_meta(&input_meta);
    let input_meta = Arc::new(input_meta);

    info!(step = %template.name(), copies, rows = rows.len(), "Starting step copies");

    let mut senders = Vec::with_capacity(copies);
    let mut handles = Vec::with_capacity(copies);

    for copy_nr in 0..copies {
        let (tx, mut rx) = mpsc::channel::<RowData>(ROW_CHANNEL_CAPACITY);
        let mut step = template.copy(copy_nr);
        let meta = Arc::clone(&input_meta);

        handles.push(tokio::spawn(async move {
            let mut forwarded = Vec::new();
            while let Some(row) = rx.recv().await {
                forwarded.push(step.process_row(&meta, row));
            }
            debug!(step = %step.name(), copy = copy_nr, rows = forwarded.len(), "Step copy finished");
            forwarded
        }));
        senders.push(tx);
    }

    for (index, row) in rows.into_iter().enumerate() {
        let copy_nr = index % copies;
        senders[copy_nr]
            .send(row)
            .await
            .map_err(|_| ProcessingError::ChannelClosed(copy_nr))?;
    }
    drop(senders);

    let forwarded = try_join_all(handles)
        .await
        .map_err(|e| ProcessingError::CopyFailed(e.to_string()))?;

    let output = CopiesOutput {
        meta: output_meta,
        copies: forwarded,
    };
    info!(step = %template.name(), rows = output.row_count(), "Step copies finished");

    Ok(output)
}
