//! Worker loop.

use super::probe::Prober;
use super::progress::Progress;
use super::queue::{ResultSlots, TaskQueue};
use super::PortResult;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

/// Everything a worker shares with its siblings.
#[derive(Clone)]
pub(crate) struct WorkerContext {
    pub queue: Arc<TaskQueue>,
    pub slots: Arc<ResultSlots>,
    pub prober: Arc<dyn Prober>,
    pub progress: Arc<dyn Progress>,
    pub cancel: CancellationToken,
}

/// Drain the queue until it is exhausted or the scan is cancelled.
///
/// Returns the number of tasks this worker completed. A probe interrupted
/// by cancellation leaves its slot empty.
pub(crate) async fn run_worker(id: usize, ctx: WorkerContext) -> usize {
    let mut completed = 0;

    while !ctx.cancel.is_cancelled() {
        let Some(task) = ctx.queue.next_task() else {
            break;
        };

        let open = tokio::select! {
            biased;
            _ = ctx.cancel.cancelled() => break,
            open = ctx.prober.probe(task.port) => open,
        };

        trace!(worker = id, port = %task.port, open, "probe complete");
        if !ctx.slots.fill(task.index, PortResult::new(task.port, open)) {
            debug!(worker = id, index = task.index, "result slot already filled");
        }
        ctx.progress.advance();
        completed += 1;
    }

    trace!(worker = id, completed, "worker finished");
    completed
}
