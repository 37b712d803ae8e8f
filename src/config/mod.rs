//! Configuration for portsweep.
//!
//! Holds the fixed scan mode table, optional user settings, and
//! environment detection.

mod env;
mod mode;
mod settings;

pub use env::{is_dockerized, parse_bool, DOCKERIZED_VAR};
pub use mode::ScanMode;
pub use settings::{AppSettings, Paths};
