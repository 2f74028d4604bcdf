//! Process snapshot module.
//!
//! Holds the list of processes reported by the target at one point in
//! time. The list is a snapshot: when the target's process list changes
//! the transport builds a new one, it is never mutated in place.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a name-based lookup compares candidates against the query.
///
/// Both variants are case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Byte-for-byte name equality.
    #[default]
    Exact,
    /// Name contains the query as a substring.
    Contains,
}

impl MatchMode {
    /// Check whether `candidate` satisfies the query under this mode.
    pub fn matches(self, candidate: &str, query: &str) -> bool {
        match self {
            MatchMode::Exact => candidate == query,
            MatchMode::Contains => candidate.contains(query),
        }
    }
}

/// One identified process on the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Process ID.
    pub pid: i32,
    /// Display name of the process.
    pub name: String,
}

impl Process {
    /// Create a new process entity.
    pub fn new(pid: i32, name: impl Into<String>) -> Self {
        Self { pid, name: name.into() }
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.pid, self.name)
    }
}

/// Snapshot of the target's process list.
///
/// Built once from the parallel name/pid sequences the transport decoded;
/// queried repeatedly, replaced wholesale on refresh.
#[derive(Debug, Clone)]
pub struct ProcessList {
    processes: Vec<Process>,
}

impl ProcessList {
    /// Build a snapshot from `count` parallel (name, pid) pairs,
    /// preserving input order.
    ///
    /// Supplying sequences shorter than `count` is a contract violation
    /// on the transport's side; the snapshot is bounded by the aligned
    /// pairs actually present.
    pub fn new(count: usize, names: Vec<String>, pids: Vec<i32>) -> Self {
        let processes: Vec<Process> = names
            .into_iter()
            .zip(pids)
            .take(count)
            .map(|(name, pid)| Process { pid, name })
            .collect();
        log::debug!("built process snapshot with {} entries", processes.len());
        Self { processes }
    }

    /// Find the first process whose name satisfies the query.
    ///
    /// Linear scan in snapshot order; the first match wins. Returns
    /// `None` if nothing matches.
    pub fn find_process(&self, name: &str, mode: MatchMode) -> Option<&Process> {
        self.processes.iter().find(|p| mode.matches(&p.name, name))
    }

    /// All processes in snapshot order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Number of processes in the snapshot.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }
}
