//! Round Robin scheduler.
//!
//! # Algorithm
//!
//! 1. Sort the batch by arrival (stable, so equal arrivals keep input order).
//! 2. Admit every arrived process into a FIFO ready queue.
//! 3. Dispatch the queue head for `min(remaining, quantum)` ticks.
//! 4. Admit processes that arrived during the slice, then re-queue the
//!    preempted process if it still has work left.
//!
//! Step 4's ordering is the defining tie-break: a process arriving exactly
//! when the quantum expires joins the queue ahead of the process being
//! preempted.
//!
//! # Complexity
//! O(total burst / quantum + n) dispatches for n processes.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.4

use std::collections::VecDeque;

use super::{Running, SimulationResult};
use crate::models::{Process, Timeline};

/// Round Robin: FIFO dispatch with a fixed time quantum.
///
/// # Example
///
/// ```
/// use cpu_sched::models::Process;
/// use cpu_sched::scheduler::RoundRobin;
///
/// let batch = vec![Process::new("P1", 0, 3), Process::new("P2", 0, 3)];
/// let result = RoundRobin::new(2).run(&batch);
///
/// // P1 [0,2), P2 [2,4), P1 [4,5), P2 [5,6)
/// assert_eq!(result.timeline.slot_count(), 4);
/// assert_eq!(result.process("P2").unwrap().completion, 6);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: i64,
}

impl RoundRobin {
    /// Creates a Round Robin scheduler with the given quantum.
    ///
    /// The quantum must be positive; see `validation::validate_request`.
    pub fn new(quantum: i64) -> Self {
        Self { quantum }
    }

    /// The configured time quantum.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }

    /// Simulates the batch to completion.
    pub fn run(&self, processes: &[Process]) -> SimulationResult {
        let mut backlog: VecDeque<Running> = {
            let mut pending: Vec<Running> =
                processes.iter().cloned().map(Running::admit).collect();
            // Stable: equal arrivals stay in input order.
            pending.sort_by_key(|r| r.process.arrival);
            pending.into()
        };

        let mut ready: VecDeque<Running> = VecDeque::new();
        let mut timeline = Timeline::new();
        let mut completed = Vec::with_capacity(processes.len());
        let mut time: i64 = 0;

        loop {
            admit_arrived(&mut backlog, &mut ready, time);

            let Some(mut current) = ready.pop_front() else {
                match backlog.front() {
                    // Idle CPU: jump to the next arrival.
                    Some(next) => {
                        time = next.process.arrival;
                        continue;
                    }
                    None => break,
                }
            };

            let slice = current.remaining.min(self.quantum);
            let start = time;
            time += slice;
            current.remaining -= slice;
            timeline.record(current.process.id.clone(), start, time);

            // Arrivals during the slice are queued ahead of the preempted
            // process.
            admit_arrived(&mut backlog, &mut ready, time);

            if current.remaining > 0 {
                ready.push_back(current);
            } else {
                completed.push(current.finish(time));
            }
        }

        SimulationResult {
            processes: completed,
            timeline,
        }
    }
}

/// Moves every backlog process with `arrival <= time` to the ready queue,
/// preserving arrival order.
fn admit_arrived(backlog: &mut VecDeque<Running>, ready: &mut VecDeque<Running>, time: i64) {
    while let Some(next) = backlog.front() {
        if next.process.arrival > time {
            break;
        }
        if let Some(admitted) = backlog.pop_front() {
            ready.push_back(admitted);
        }
    }
}
