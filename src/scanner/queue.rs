//! Task queue and result slots shared by the worker pool.
//!
//! Both are sized to the port list before any worker starts. The queue is
//! never pushed to after construction, and each result slot is written by
//! the one worker holding the matching task.

use super::PortResult;
use crate::types::Port;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// One unit of scan work: a port and its position in the port list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Task {
    pub index: usize,
    pub port: Port,
}

/// Fixed set of tasks drained concurrently by workers.
///
/// Tasks are claimed through an atomic cursor; once it passes the end the
/// queue is exhausted and stays that way.
#[derive(Debug)]
pub struct TaskQueue {
    tasks: Box<[Task]>,
    cursor: AtomicUsize,
}

impl TaskQueue {
    /// Load one task per port, in port-list order.
    pub fn new(ports: &[Port]) -> Self {
        let tasks = ports
            .iter()
            .enumerate()
            .map(|(index, &port)| Task { index, port })
            .collect();

        Self {
            tasks,
            cursor: AtomicUsize::new(0),
        }
    }

    /// Claim the next task, or `None` once the queue is exhausted.
    pub fn next_task(&self) -> Option<Task> {
        let index = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.tasks.get(index).copied()
    }

    /// Total number of tasks loaded.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Pre-sized, index-addressed collection of write-once result cells.
#[derive(Debug)]
pub struct ResultSlots {
    slots: Box<[OnceLock<PortResult>]>,
}

impl ResultSlots {
    pub fn new(len: usize) -> Self {
        Self {
            slots: (0..len).map(|_| OnceLock::new()).collect(),
        }
    }

    /// Store the result for the task at `index`.
    ///
    /// Returns `false` if the index is out of bounds or already written,
    /// neither of which happens when every task is claimed exactly once.
    pub fn fill(&self, index: usize, result: PortResult) -> bool {
        self.slots
            .get(index)
            .is_some_and(|slot| slot.set(result).is_ok())
    }

    /// Number of slots written so far.
    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|slot| slot.get().is_some()).count()
    }

    /// Written results in index order, skipping unwritten slots.
    pub fn collect(&self) -> Vec<PortResult> {
        self.slots.iter().filter_map(|slot| slot.get().copied()).collect()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
