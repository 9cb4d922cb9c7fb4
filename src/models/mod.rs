//! Simulation domain models.
//!
//! Provides the core data types for a single-CPU batch simulation:
//! the immutable process input record, the completed record carrying
//! derived timing metrics, and the execution timeline.
//!
//! # Lifecycle
//!
//! | Stage | Type | Mutability |
//! |-------|------|-----------|
//! | Input | `Process` | Immutable |
//! | Running | (private, per-algorithm) | Owned by one run |
//! | Done | `CompletedProcess` | Immutable |
//!
//! A `Process` is created once per run from raw input; an algorithm owns
//! a private running state for it and consumes that state into exactly
//! one `CompletedProcess`. Nothing caller-owned is ever mutated.

mod process;
mod timeline;

pub use process::{CompletedProcess, Process};
pub use timeline::{Timeline, TimelineSlot};
