//! Priority schedulers (non-preemptive and preemptive).
//!
//! Both disciplines pick the available process with the numerically
//! smallest priority value. Selection is a stable minimum scan over the
//! batch in input order: the first candidate holding the minimum wins
//! ties. The preemptive variant re-runs that scan every tick, so an
//! equal-priority latecomer never displaces the incumbent — only a
//! strictly more urgent arrival does.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.3

use super::{Running, SimulationResult};
use crate::models::{Process, Timeline};

/// Stable minimum-priority scan.
///
/// Returns the index of the first candidate carrying the smallest
/// priority value. A later candidate replaces the current best only when
/// strictly smaller, which is the tie-break contract.
fn select_most_urgent(candidates: impl Iterator<Item = (usize, i32)>) -> Option<usize> {
    let mut best: Option<(usize, i32)> = None;
    for (idx, priority) in candidates {
        match best {
            Some((_, held)) if priority >= held => {}
            _ => best = Some((idx, priority)),
        }
    }
    best.map(|(idx, _)| idx)
}

/// Non-preemptive priority: the most urgent available process runs to
/// completion before the next selection.
///
/// Each process occupies exactly one timeline slot spanning its whole
/// burst.
///
/// # Example
///
/// ```
/// use cpu_sched::models::Process;
/// use cpu_sched::scheduler::PriorityNonPreemptive;
///
/// let batch = vec![
///     Process::new("P1", 0, 4).with_priority(2),
///     Process::new("P2", 0, 2).with_priority(1),
/// ];
/// let result = PriorityNonPreemptive.run(&batch);
/// assert_eq!(result.timeline.first_dispatch("P2"), Some(0));
/// assert_eq!(result.process("P1").unwrap().completion, 6);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityNonPreemptive;

impl PriorityNonPreemptive {
    /// Simulates the batch to completion.
    pub fn run(&self, processes: &[Process]) -> SimulationResult {
        let mut pending: Vec<Option<Process>> = processes.iter().cloned().map(Some).collect();
        let mut completed = Vec::with_capacity(processes.len());
        let mut timeline = Timeline::new();
        let mut time: i64 = 0;

        while completed.len() < processes.len() {
            let available = pending
                .iter()
                .enumerate()
                .filter_map(|(idx, slot)| slot.as_ref().map(|p| (idx, p)))
                .filter(|(_, p)| p.arrival <= time)
                .map(|(idx, p)| (idx, p.priority));

            let Some(idx) = select_most_urgent(available) else {
                // Idle tick: nothing has arrived yet.
                time += 1;
                continue;
            };

            if let Some(process) = pending[idx].take() {
                let start = time;
                let completion = start + process.burst;
                timeline.record(process.id.clone(), start, completion);
                time = completion;
                completed.push(process.complete(completion));
            }
        }

        SimulationResult {
            processes: completed,
            timeline,
        }
    }
}

/// Preemptive priority: selection is re-evaluated every tick, so a more
/// urgent arrival interrupts the running process immediately.
///
/// Adjacent ticks of the same uninterrupted process merge into a single
/// timeline slot.
///
/// # Example
///
/// ```
/// use cpu_sched::models::Process;
/// use cpu_sched::scheduler::PriorityPreemptive;
///
/// let batch = vec![
///     Process::new("P1", 0, 5).with_priority(2),
///     Process::new("P2", 1, 3).with_priority(1),
/// ];
/// let result = PriorityPreemptive.run(&batch);
/// // P1 [0,1), preempted by P2 [1,4), P1 resumes [4,8).
/// assert_eq!(result.timeline.slot_count(), 3);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityPreemptive;

impl PriorityPreemptive {
    /// Simulates the batch to completion in unit-tick steps.
    pub fn run(&self, processes: &[Process]) -> SimulationResult {
        let mut pending: Vec<Option<Running>> = processes
            .iter()
            .cloned()
            .map(|p| Some(Running::admit(p)))
            .collect();
        let mut completed = Vec::with_capacity(processes.len());
        let mut timeline = Timeline::new();
        let mut time: i64 = 0;

        while completed.len() < processes.len() {
            let available = pending
                .iter()
                .enumerate()
                .filter_map(|(idx, slot)| slot.as_ref().map(|r| (idx, r)))
                .filter(|(_, r)| r.process.arrival <= time)
                .map(|(idx, r)| (idx, r.process.priority));

            let Some(idx) = select_most_urgent(available) else {
                time += 1;
                continue;
            };

            if let Some(running) = pending[idx].as_mut() {
                timeline.extend_or_open(&running.process.id, time);
                running.remaining -= 1;
            }
            time += 1;

            let finished = pending[idx].as_ref().is_some_and(|r| r.remaining == 0);
            if finished {
                if let Some(done) = pending[idx].take() {
                    completed.push(done.finish(time));
                }
            }
        }

        SimulationResult {
            processes: completed,
            timeline,
        }
    }
}
