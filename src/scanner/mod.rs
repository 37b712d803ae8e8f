//! Scanner module - the concurrent connect-scan engine.
//!
//! A scan parses the port expression, resolves the scan mode, then fans a
//! fixed task queue out to a pool of tokio workers. Each worker writes into
//! the result slot named by its task, so results come back in port-list
//! order however the probes interleave.

pub mod probe;
pub mod progress;
pub mod queue;
mod worker;

use crate::config::ScanMode;
use crate::error::ScanResult;
use crate::types::{Port, PortList};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

pub use probe::{Prober, TcpConnectProber};
pub use progress::{progress_bar, NoProgress, Progress};
pub use queue::{ResultSlots, Task, TaskQueue};

use worker::{run_worker, WorkerContext};

/// Result of probing a single port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortResult {
    /// The port that was probed.
    pub port: Port,
    /// Whether a connection was established within the timeout.
    #[serde(rename = "status")]
    pub open: bool,
}

impl PortResult {
    pub const fn new(port: Port, open: bool) -> Self {
        Self { port, open }
    }
}

impl fmt::Display for PortResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.open { "open" } else { "closed" };
        write!(f, "{} {}", self.port, state)
    }
}

/// What the caller asks to scan, before any validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    /// Target host name or IP address.
    pub address: String,
    /// Port expression, e.g. `"1-1024"` or `"22,80,443"`.
    pub ports: String,
    /// Scan mode name; unknown names fall back to the default mode.
    pub mode: String,
    /// Per-connection timeout override in milliseconds, 0 for the mode's own.
    pub timeout_ms: u64,
}

impl ScanRequest {
    pub fn new(address: impl Into<String>, ports: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ports: ports.into(),
            mode: ScanMode::default().to_string(),
            timeout_ms: 0,
        }
    }

    /// Set the scan mode name.
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    /// Set the timeout override in milliseconds.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Validate the request into a runnable plan.
    ///
    /// A malformed port expression fails the whole request. An unknown
    /// mode does not: it silently becomes the default mode.
    pub fn plan(&self) -> ScanResult<ScanPlan> {
        let ports = PortList::parse(&self.ports)?;

        let mode = ScanMode::resolve(&self.mode).unwrap_or_else(|e| {
            debug!(error = %e, fallback = %ScanMode::default(), "using default scan mode");
            ScanMode::default()
        });

        Ok(ScanPlan {
            ports,
            mode,
            timeout: mode.effective_timeout(self.timeout_ms),
        })
    }
}

/// A validated scan: ports to probe, the mode, and the effective timeout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanPlan {
    pub ports: PortList,
    pub mode: ScanMode,
    pub timeout: Duration,
}

impl ScanPlan {
    /// Number of workers the plan launches.
    pub fn workers(&self) -> usize {
        self.mode.workers()
    }
}

/// Outcome of a scan.
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub address: String,
    pub mode: ScanMode,
    pub timeout: Duration,
    pub duration: Duration,
    /// One result per port, in port-list order. Shorter than the port list
    /// only when the scan was cancelled.
    pub results: Vec<PortResult>,
    pub cancelled: bool,
}

impl ScanReport {
    /// Ports that accepted a connection, in port-list order.
    pub fn open_ports(&self) -> impl Iterator<Item = Port> + '_ {
        self.results.iter().filter(|r| r.open).map(|r| r.port)
    }
}

/// Results gathered by the worker pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    pub results: Vec<PortResult>,
    pub cancelled: bool,
}

/// Scan `request` to completion without progress reporting.
pub async fn scan(request: &ScanRequest) -> ScanResult<ScanReport> {
    scan_with(request, Arc::new(NoProgress), CancellationToken::new()).await
}

/// Scan `request`, reporting progress and honouring `cancel`.
///
/// If `cancel` fires, in-flight probes are abandoned and the report holds
/// only the results that completed, with `cancelled` set.
pub async fn scan_with(
    request: &ScanRequest,
    progress: Arc<dyn Progress>,
    cancel: CancellationToken,
) -> ScanResult<ScanReport> {
    let plan = request.plan()?;
    execute_plan(&request.address, &plan, progress, cancel).await
}

/// Run an already validated plan against `address`.
pub async fn execute_plan(
    address: &str,
    plan: &ScanPlan,
    progress: Arc<dyn Progress>,
    cancel: CancellationToken,
) -> ScanResult<ScanReport> {
    let prober = Arc::new(TcpConnectProber::new(address, plan.timeout));

    debug!(
        address,
        ports = plan.ports.len(),
        mode = %plan.mode,
        timeout_ms = plan.timeout.as_millis() as u64,
        "starting scan"
    );

    let start = Instant::now();
    let outcome = run_workers(&plan.ports, plan.workers(), prober, progress, cancel).await?;
    let duration = start.elapsed();

    if outcome.cancelled {
        warn!(
            completed = outcome.results.len(),
            total = plan.ports.len(),
            "scan cancelled"
        );
    } else {
        debug!(
            open = outcome.results.iter().filter(|r| r.open).count(),
            total = outcome.results.len(),
            elapsed_ms = duration.as_millis() as u64,
            "scan complete"
        );
    }

    Ok(ScanReport {
        address: address.to_string(),
        mode: plan.mode,
        timeout: plan.timeout,
        duration,
        results: outcome.results,
        cancelled: outcome.cancelled,
    })
}

/// Probe every port with a pool of `workers` concurrent tasks.
///
/// Workers beyond the number of ports would find the queue already
/// exhausted, so at most `ports.len()` are spawned.
pub async fn run_workers(
    ports: &[Port],
    workers: usize,
    prober: Arc<dyn Prober>,
    progress: Arc<dyn Progress>,
    cancel: CancellationToken,
) -> ScanResult<ScanOutcome> {
    let ctx = WorkerContext {
        queue: Arc::new(TaskQueue::new(ports)),
        slots: Arc::new(ResultSlots::new(ports.len())),
        prober,
        progress,
        cancel,
    };

    let mut set = JoinSet::new();
    for id in 0..workers.max(1).min(ports.len()) {
        set.spawn(run_worker(id, ctx.clone()));
    }

    while let Some(joined) = set.join_next().await {
        joined?;
    }

    let results = ctx.slots.collect();
    let cancelled = results.len() < ports.len();

    Ok(ScanOutcome { results, cancelled })
}
