//! Scheduling algorithms and simulation results.
//!
//! Three independent single-CPU disciplines over one fixed batch of
//! processes:
//!
//! | Strategy | Preemption | Selection |
//! |----------|-----------|-----------|
//! | `RoundRobin` | At quantum expiry | FIFO ready queue |
//! | `PriorityNonPreemptive` | None | Smallest priority value |
//! | `PriorityPreemptive` | Every tick | Smallest priority value |
//!
//! Each algorithm is a pure function of its input: the caller's slice is
//! borrowed, all simulation state is owned by the single invocation, and
//! independent simulations may run concurrently.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

mod metrics;
mod priority;
mod round_robin;

pub use metrics::SimulationKpi;
pub use priority::{PriorityNonPreemptive, PriorityPreemptive};
pub use round_robin::RoundRobin;

use serde::{Deserialize, Serialize};

use crate::models::{CompletedProcess, Process, Timeline};

/// Per-run mutable state of one process: its input record plus the burst
/// still outstanding. Consumed into a `CompletedProcess` when it hits zero.
#[derive(Debug, Clone)]
pub(crate) struct Running {
    pub process: Process,
    pub remaining: i64,
}

impl Running {
    pub fn admit(process: Process) -> Self {
        let remaining = process.burst;
        Self { process, remaining }
    }

    pub fn finish(self, completion: i64) -> CompletedProcess {
        self.process.complete(completion)
    }
}

/// Outcome of one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// All processes, completed, in completion order.
    pub processes: Vec<CompletedProcess>,
    /// Execution timeline in dispatch order.
    pub timeline: Timeline,
}

impl SimulationResult {
    /// Looks up a completed process by id.
    pub fn process(&self, id: &str) -> Option<&CompletedProcess> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Latest completion tick (0 for an empty run).
    pub fn makespan(&self) -> i64 {
        self.timeline.makespan()
    }
}

/// Algorithm selector.
///
/// Serializes to the wire tags the presentation layer uses
/// (`"RR"`, `"Priority-NP"`, `"Priority-P"`).
///
/// # Example
///
/// ```
/// use cpu_sched::models::Process;
/// use cpu_sched::scheduler::Algorithm;
///
/// let batch = vec![Process::new("P1", 0, 4).with_priority(2),
///                  Process::new("P2", 0, 2).with_priority(1)];
/// let result = Algorithm::PriorityNonPreemptive.simulate(&batch);
/// assert_eq!(result.process("P2").unwrap().completion, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "algorithm")]
pub enum Algorithm {
    /// Round Robin with the given time quantum. The quantum must be
    /// positive; see `validation`.
    #[serde(rename = "RR")]
    RoundRobin {
        /// Maximum contiguous CPU time granted per dispatch.
        quantum: i64,
    },
    /// Run the most urgent available process to completion.
    #[serde(rename = "Priority-NP")]
    PriorityNonPreemptive,
    /// Re-evaluate the most urgent available process every tick.
    #[serde(rename = "Priority-P")]
    PriorityPreemptive,
}

impl Algorithm {
    /// Runs the selected discipline over a batch of processes.
    ///
    /// The batch must satisfy the `validation` contract (non-empty,
    /// positive bursts, positive quantum for Round Robin); the engine
    /// does not re-validate.
    pub fn simulate(&self, processes: &[Process]) -> SimulationResult {
        match *self {
            Algorithm::RoundRobin { quantum } => RoundRobin::new(quantum).run(processes),
            Algorithm::PriorityNonPreemptive => PriorityNonPreemptive.run(processes),
            Algorithm::PriorityPreemptive => PriorityPreemptive.run(processes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 3).with_priority(2),
            Process::new("P2", 1, 2).with_priority(1),
        ]
    }

    #[test]
    fn test_selector_dispatches_round_robin() {
        let result = Algorithm::RoundRobin { quantum: 2 }.simulate(&batch());
        assert_eq!(result.processes.len(), 2);
        // First slice bounded by the quantum.
        assert_eq!(result.timeline.slots[0].duration(), 2);
    }

    #[test]
    fn test_selector_dispatches_preemptive() {
        let result = Algorithm::PriorityPreemptive.simulate(&batch());
        // P2 (priority 1) preempts P1 at t=1.
        assert_eq!(result.process("P2").unwrap().completion, 3);
    }

    #[test]
    fn test_result_lookup_and_makespan() {
        let result = Algorithm::PriorityNonPreemptive.simulate(&batch());
        assert!(result.process("P1").is_some());
        assert!(result.process("P9").is_none());
        assert_eq!(result.makespan(), 5);
    }

    #[test]
    fn test_caller_batch_untouched() {
        let original = batch();
        let copy = original.clone();
        let _ = Algorithm::RoundRobin { quantum: 1 }.simulate(&original);
        assert_eq!(original, copy);
    }

    #[test]
    fn test_algorithm_wire_tags() {
        let json = serde_json::to_string(&Algorithm::RoundRobin { quantum: 3 }).unwrap();
        assert_eq!(json, r#"{"algorithm":"RR","quantum":3}"#);

        let np: Algorithm = serde_json::from_str(r#"{"algorithm":"Priority-NP"}"#).unwrap();
        assert_eq!(np, Algorithm::PriorityNonPreemptive);

        let p: Algorithm = serde_json::from_str(r#"{"algorithm":"Priority-P"}"#).unwrap();
        assert_eq!(p, Algorithm::PriorityPreemptive);
    }
}
