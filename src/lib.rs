//! # portsweep - A concurrent TCP connect port scanner
//!
//! portsweep probes a set of ports on one host and reports, per port,
//! whether a TCP connection could be established within a bounded time.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use portsweep::scanner::{scan, ScanRequest};
//!
//! #[tokio::main]
//! async fn main() {
//!     let request = ScanRequest::new("127.0.0.1", "22,80,443").with_mode("rapid");
//!     let report = scan(&request).await.unwrap();
//!
//!     for result in &report.results {
//!         println!("{result}");
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - `Port` and the port expression parser
//! - [`config`] - scan modes, settings, environment detection
//! - [`scanner`] - task queue, worker pool, TCP probe and orchestration
//! - [`output`] - text/CSV/JSON rendering and file export
//! - [`cli`] - command-line driver
//! - [`error`] - error types

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod scanner;
pub mod types;

// Re-export commonly used types
pub use config::ScanMode;
pub use error::{CliError, ModeError, OutputError, PortError, ScanError};
pub use scanner::{scan, scan_with, PortResult, ScanReport, ScanRequest};
pub use types::{Port, PortList};
