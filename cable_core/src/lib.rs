//! # cable_core - MV Cable Ampacity Calculation Engine
//!
//! `cable_core` is the computational heart of CableCalc, verifying
//! medium-voltage underground cable sizing per IEC 60502-2 Annex B. All
//! inputs and outputs are JSON-serializable, making it easy to drive from a
//! UI, a CLI, or an automation pipeline.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: pure functions that take input and return results; the
//!   reference tables are an explicit argument, never ambient global state
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//! - **Total lookups**: missing published data yields sentinels and
//!   provenance notes, never a crash
//!
//! ## Quick Start
//!
//! ```rust
//! use cable_core::calculations::segment_check::{calculate, SegmentCheckInput};
//! use cable_core::tables::ReferenceData;
//!
//! let input = SegmentCheckInput::default();
//! let result = calculate(ReferenceData::standard(), &input);
//!
//! println!("Ib  = {:.2} A", result.design_current_a);
//! println!("Iz' = {:.2} A", result.corrected_ampacity_a);
//! assert!(result.passes);
//! ```
//!
//! ## Modules
//!
//! - [`project`] - Project container, site conditions, circuits and segments
//! - [`calculations`] - Design current and per-segment verification
//! - [`factors`] - The K1-K4 correction factor resolvers
//! - [`tables`] - Immutable Annex B reference data and the ampacity store
//! - [`cable`] - Cable attribute enumerations
//! - [`interpolation`] - Shared piecewise-linear interpolation
//! - [`errors`] - Structured error types
//! - [`file_io`] - File operations with atomic saves and locking

pub mod cable;
pub mod calculations;
pub mod errors;
pub mod factors;
pub mod file_io;
pub mod interpolation;
pub mod project;
pub mod tables;

// Re-export commonly used types at crate root for convenience
pub use calculations::segment_check::{SegmentCheckInput, SegmentCheckResult};
pub use errors::{CableError, CableResult};
pub use factors::Factor;
pub use file_io::{load_project, save_project, FileLock};
pub use project::{Circuit, Project, ProjectMetadata, Segment, SiteConditions};
pub use tables::{AmpacityKey, BaseAmpacity, ReferenceData};
