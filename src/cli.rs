//! Command-line interface for portsweep.
//!
//! Uses `clap` derive macros for declarative argument parsing. Flags left
//! unset fall back to the user's settings file, then to built-in defaults.

use crate::config::{is_dockerized, AppSettings};
use crate::error::CliResult;
use crate::output::{self, OutputFormat};
use crate::scanner::{execute_plan, progress_bar, NoProgress, Progress, ScanRequest};
use clap::Parser;
use indicatif::ProgressBar;
use std::path::PathBuf;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Probe TCP reachability of a range of ports on one host.
#[derive(Parser, Debug, Clone)]
#[command(name = "portsweep")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A concurrent TCP connect port scanner", long_about = None)]
#[command(after_help = usage_examples())]
pub struct Args {
    /// Domain or IP address to scan
    #[arg(short, long, env = "PORTSWEEP_ADDRESS")]
    pub address: String,

    /// Ports to scan, as a range ("1-1024") or a list ("80,443")
    #[arg(short, long, default_value = "1-65535")]
    pub ports: String,

    /// Scan mode: stealth, default, rapid
    #[arg(short, long, env = "PORTSWEEP_MODE")]
    pub mode: Option<String>,

    /// Output file name or directory (ending in a path separator)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format: txt, json, csv
    #[arg(short, long)]
    pub format: Option<String>,

    /// Timeout per port in milliseconds (0 keeps the mode's timeout)
    #[arg(short, long, default_value_t = 0)]
    pub timeout: u64,

    /// Hide the banner and progress bar
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to a settings file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Load settings from `--config`, or the default location.
    pub fn settings(&self) -> CliResult<AppSettings> {
        let settings = match &self.config {
            Some(path) => AppSettings::load_from(path)?,
            None => AppSettings::load()?,
        };
        Ok(settings)
    }

    /// Build the scan request, letting explicit flags win over settings.
    pub fn request(&self, settings: &AppSettings) -> ScanRequest {
        let mode = self.mode.as_deref().unwrap_or(&settings.default_mode);
        ScanRequest::new(&self.address, &self.ports)
            .with_mode(mode)
            .with_timeout_ms(self.timeout)
    }

    /// Output format, falling back to text for unknown names.
    pub fn format(&self, settings: &AppSettings) -> OutputFormat {
        OutputFormat::parse_or_default(self.format.as_deref().unwrap_or(&settings.default_format))
    }

    /// Run the scan and export the results. Returns the written path.
    pub async fn execute(&self) -> CliResult<PathBuf> {
        let settings = self.settings()?;
        let request = self.request(&settings);
        let plan = request.plan()?;
        debug!(mode = %plan.mode, ports = plan.ports.len(), "scan planned");

        let bar = if self.quiet {
            None
        } else {
            output::print_scan_header(&request.address, plan.mode.name(), plan.ports.len());
            Some(progress_bar(plan.ports.len()))
        };
        let progress: Arc<dyn Progress> = match &bar {
            Some(pb) => Arc::new(pb.clone()),
            None => Arc::new(NoProgress),
        };

        let cancel = CancellationToken::new();
        let on_interrupt = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                on_interrupt.cancel();
            }
        });

        let report = execute_plan(&request.address, &plan, progress, cancel).await?;
        finish(bar);

        if !self.quiet {
            output::print_summary(&report);
        }

        let destination = self.output.as_deref().unwrap_or(&settings.default_output);
        let path = output::export(
            &report.results,
            self.format(&settings),
            destination,
            is_dockerized(),
        )?;
        println!("{}", path.display());

        Ok(path)
    }
}

fn finish(bar: Option<ProgressBar>) {
    if let Some(pb) = bar {
        pb.finish_and_clear();
    }
}

fn usage_examples() -> String {
    let lines: [&str; 3] = if is_dockerized() {
        [
            "docker run --rm -v /path/to/your/output:/output portsweep -a 192.168.1.134",
            "docker run --rm -v /path/to/your/output:/output portsweep -a 192.168.1.134 -p 1-1024 -m stealth",
            "docker run --rm -v /path/to/your/output:/output portsweep -a 192.168.1.134 -p 80,443 -o results -f json",
        ]
    } else {
        [
            "portsweep -a 192.168.1.134",
            "portsweep -a 192.168.1.134 -p 1-1024 -m stealth",
            "portsweep -a 192.168.1.134 -p 80,443 -o results -f json",
        ]
    };
    format!("Examples:\n  {}", lines.join("\n  "))
}
