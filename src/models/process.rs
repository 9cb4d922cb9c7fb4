//! Process model.
//!
//! A process is a unit of CPU demand: it becomes ready at `arrival` and
//! needs `burst` ticks of CPU time. Priority is only consulted by the
//! priority disciplines; lower values are more urgent.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 3.1

use serde::{Deserialize, Serialize};

/// A schedulable process (simulation input).
///
/// All times are integer ticks relative to the simulation epoch (t=0).
/// The record is immutable for the duration of a run; per-run mutable
/// state (remaining burst) lives inside the algorithm, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier (conventionally `P1`, `P2`, ... in input order).
    pub id: String,
    /// Tick at which the process becomes ready. Non-negative.
    pub arrival: i64,
    /// Total CPU time required. Strictly positive.
    pub burst: i64,
    /// Scheduling priority (lower = more urgent). Ignored by Round Robin.
    #[serde(default)]
    pub priority: i32,
}

impl Process {
    /// Creates a process with default priority 0.
    pub fn new(id: impl Into<String>, arrival: i64, burst: i64) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
            priority: 0,
        }
    }

    /// Sets the scheduling priority (lower = more urgent).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Consumes this process into its completed form.
    ///
    /// Derives the two timing identities from the completion tick:
    /// `turnaround = completion - arrival`, `waiting = turnaround - burst`.
    pub(crate) fn complete(self, completion: i64) -> CompletedProcess {
        let turnaround = completion - self.arrival;
        let waiting = turnaround - self.burst;
        CompletedProcess {
            id: self.id,
            arrival: self.arrival,
            burst: self.burst,
            priority: self.priority,
            completion,
            turnaround,
            waiting,
        }
    }
}

/// A finished process with derived timing metrics (simulation output).
///
/// Produced exactly once per process per run and never mutated afterwards.
/// The invariants `turnaround == completion - arrival` and
/// `waiting == turnaround - burst` hold by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedProcess {
    /// Process identifier.
    pub id: String,
    /// Tick at which the process became ready.
    pub arrival: i64,
    /// Total CPU time the process consumed.
    pub burst: i64,
    /// Scheduling priority it carried.
    pub priority: i32,
    /// Tick at which the process finished.
    pub completion: i64,
    /// `completion - arrival`.
    pub turnaround: i64,
    /// `turnaround - burst`: time spent ready but not running.
    pub waiting: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new("P1", 3, 7).with_priority(2);
        assert_eq!(p.id, "P1");
        assert_eq!(p.arrival, 3);
        assert_eq!(p.burst, 7);
        assert_eq!(p.priority, 2);
    }

    #[test]
    fn test_default_priority() {
        let p = Process::new("P1", 0, 1);
        assert_eq!(p.priority, 0);
    }

    #[test]
    fn test_complete_identities() {
        let done = Process::new("P1", 2, 4).complete(10);
        assert_eq!(done.completion, 10);
        assert_eq!(done.turnaround, 8); // 10 - 2
        assert_eq!(done.waiting, 4); // 8 - 4
    }

    #[test]
    fn test_complete_no_waiting() {
        // Dispatched immediately on arrival, never preempted.
        let done = Process::new("P1", 5, 3).complete(8);
        assert_eq!(done.turnaround, 3);
        assert_eq!(done.waiting, 0);
    }

    #[test]
    fn test_serde_priority_defaults() {
        // Priority may be omitted on the wire (the form field is optional).
        let p: Process = serde_json::from_str(r#"{"id":"P1","arrival":0,"burst":4}"#).unwrap();
        assert_eq!(p.priority, 0);
    }

    #[test]
    fn test_serde_round_trip() {
        let done = Process::new("P2", 1, 3).with_priority(1).complete(6);
        let json = serde_json::to_string(&done).unwrap();
        let back: CompletedProcess = serde_json::from_str(&json).unwrap();
        assert_eq!(back, done);
    }
}
