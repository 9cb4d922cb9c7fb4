//! Single-CPU scheduling simulator.
//!
//! Simulates three classical scheduling disciplines — Round Robin,
//! Non-Preemptive Priority, and Preemptive Priority — over a fixed batch
//! of processes, producing per-process timing metrics and a Gantt-style
//! execution timeline. Presentation (tables, charts) is left to the
//! consumer; this crate is the engine and its data model only.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `CompletedProcess`,
//!   `Timeline`, `TimelineSlot`
//! - **`scheduler`**: The three algorithms, the `Algorithm` selector,
//!   `SimulationResult`, and `SimulationKpi`
//! - **`validation`**: Input integrity checks (sequence shape, quantum,
//!   burst positivity) performed before the engine runs
//!
//! # Example
//!
//! ```
//! use cpu_sched::models::Process;
//! use cpu_sched::scheduler::{Algorithm, SimulationKpi};
//!
//! let processes = vec![
//!     Process::new("P1", 0, 5),
//!     Process::new("P2", 1, 3),
//! ];
//! let result = Algorithm::RoundRobin { quantum: 2 }.simulate(&processes);
//!
//! assert_eq!(result.processes.len(), 2);
//! let kpi = SimulationKpi::calculate(&result);
//! assert_eq!(kpi.makespan, 8);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod models;
pub mod scheduler;
pub mod validation;
