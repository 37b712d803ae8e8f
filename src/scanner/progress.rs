//! Progress observers.
//!
//! Workers signal one increment per completed probe. Observers never
//! influence the scan; a scan without a consumer uses [`NoProgress`].

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Receives one `advance` call per completed probe, from any worker.
pub trait Progress: Send + Sync {
    fn advance(&self);
}

/// Observer that discards every signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn advance(&self) {}
}

impl Progress for ProgressBar {
    fn advance(&self) {
        self.inc(1);
    }
}

impl Progress for AtomicUsize {
    fn advance(&self) {
        self.fetch_add(1, Ordering::Relaxed);
    }
}

/// Terminal progress bar sized to the number of ports.
pub fn progress_bar(total: usize) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("Scanning {pos} / {len} [{bar:60.cyan/blue}] {percent}%")
    {
        pb.set_style(style.progress_chars("=>-"));
    }
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_progress() {
        let counter = AtomicUsize::new(0);
        counter.advance();
        counter.advance();
        assert_eq!(counter.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn test_progress_bar_advances() {
        let pb = ProgressBar::hidden();
        pb.set_length(3);
        pb.advance();
        assert_eq!(pb.position(), 1);
        assert_eq!(progress_bar(7).length(), Some(7));
    }
}
