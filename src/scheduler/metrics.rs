//! Simulation quality metrics.
//!
//! Computes the summary indicators the presentation layer shows next to
//! the results table and Gantt chart.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Turnaround | mean(completion - arrival) |
//! | Avg Waiting | mean(turnaround - burst) |
//! | Makespan | Latest slot end |
//! | CPU Utilization | busy time / makespan |
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.2

use std::fmt;

use super::SimulationResult;

/// Summary indicators for one simulation run.
///
/// All times are in ticks; averages are exact f64 quotients. `Display`
/// renders the two-decimal average line shown under the Gantt chart.
#[derive(Debug, Clone)]
pub struct SimulationKpi {
    /// Mean turnaround time across all processes.
    pub avg_turnaround: f64,
    /// Mean waiting time across all processes.
    pub avg_waiting: f64,
    /// Latest completion tick.
    pub makespan: i64,
    /// Fraction of the makespan the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
}

impl SimulationKpi {
    /// Computes KPIs from a completed simulation.
    pub fn calculate(result: &SimulationResult) -> Self {
        let count = result.processes.len();
        let makespan = result.timeline.makespan();

        let (avg_turnaround, avg_waiting) = if count == 0 {
            (0.0, 0.0)
        } else {
            let total_turnaround: i64 = result.processes.iter().map(|p| p.turnaround).sum();
            let total_waiting: i64 = result.processes.iter().map(|p| p.waiting).sum();
            (
                total_turnaround as f64 / count as f64,
                total_waiting as f64 / count as f64,
            )
        };

        let cpu_utilization = if makespan <= 0 {
            0.0
        } else {
            result.timeline.busy_time() as f64 / makespan as f64
        };

        Self {
            avg_turnaround,
            avg_waiting,
            makespan,
            cpu_utilization,
        }
    }
}

impl fmt::Display for SimulationKpi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Average Turnaround Time: {:.2} | Average Waiting Time: {:.2}",
            self.avg_turnaround, self.avg_waiting
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;
    use crate::scheduler::Algorithm;

    #[test]
    fn test_kpi_round_robin() {
        let batch = vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3),
            Process::new("P3", 2, 1),
        ];
        let result = Algorithm::RoundRobin { quantum: 2 }.simulate(&batch);
        let kpi = SimulationKpi::calculate(&result);

        // Turnarounds 9, 7, 3; waitings 4, 4, 2.
        assert!((kpi.avg_turnaround - 19.0 / 3.0).abs() < 1e-10);
        assert!((kpi.avg_waiting - 10.0 / 3.0).abs() < 1e-10);
        assert_eq!(kpi.makespan, 9);
        assert!((kpi.cpu_utilization - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_with_idle_time() {
        let batch = vec![Process::new("P1", 3, 2)];
        let result = Algorithm::PriorityNonPreemptive.simulate(&batch);
        let kpi = SimulationKpi::calculate(&result);

        assert_eq!(kpi.makespan, 5);
        // Busy [3,5) over horizon 5.
        assert!((kpi.cpu_utilization - 0.4).abs() < 1e-10);
        assert!((kpi.avg_waiting - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_empty_run() {
        let result = SimulationResult {
            processes: Vec::new(),
            timeline: crate::models::Timeline::new(),
        };
        let kpi = SimulationKpi::calculate(&result);
        assert_eq!(kpi.makespan, 0);
        assert!((kpi.avg_turnaround - 0.0).abs() < 1e-10);
        assert!((kpi.cpu_utilization - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_display_two_decimals() {
        let batch = vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3),
            Process::new("P3", 2, 1),
        ];
        let result = Algorithm::RoundRobin { quantum: 2 }.simulate(&batch);
        let kpi = SimulationKpi::calculate(&result);

        assert_eq!(
            kpi.to_string(),
            "Average Turnaround Time: 6.33 | Average Waiting Time: 3.33"
        );
    }
}
