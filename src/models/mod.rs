//! Simulation domain models.
//!
//! Core data types for describing scheduling workloads and results.
//! A [`Process`] is the caller-owned input record; the engine operates
//! on its own copy and reports back a [`SimulationResult`] holding the
//! execution [`Timeline`] and the [`CompletedProcess`] metrics list.
//!
//! All types serialize with serde so the rendering layer can consume
//! results as plain data.

mod process;
mod result;
mod timeline;

pub use process::{CompletedProcess, Process};
pub use result::SimulationResult;
pub use timeline::{GanttEntry, Timeline, TimelineBuilder};
