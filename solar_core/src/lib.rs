//! # solar_core - Solar Panel + Battery Sizing Engine
//!
//! `solar_core` is the computational heart of the solar sizing tool: given a
//! household's energy-use parameters and equipment specs, it computes a panel
//! array + battery bank sizing and a cost estimate, then renders the result
//! as a sectioned report document. All inputs and outputs are
//! JSON-serializable, so any frontend (CLI, GUI, web form) can drive it.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Reproducible Reports**: Timestamps are supplied by the caller, never
//!   read internally, so report output is deterministic and testable
//!
//! ## Quick Start
//!
//! ```rust
//! use solar_core::sizing::{compute, SizingInput};
//!
//! let input = SizingInput::default();
//! let result = compute(&input).unwrap();
//!
//! println!("Panel array: {:.2} kW", result.panel_array_kw);
//! println!("Panels: {}", result.panel_count);
//! println!("Battery: {} Ah", result.battery_capacity_ah);
//! ```
//!
//! ## Modules
//!
//! - [`sizing`] - Input model, validation, and the sizing calculation
//! - [`battery`] - Battery chemistry enum and its fixed profile table
//! - [`format`] - Display formatting for kW and money values
//! - [`report`] - Report document built from a computed result
//! - [`pdf`] - PDF rendering of the report via Typst
//! - [`email`] - Email delivery stub (not available, by design)
//! - [`errors`] - Structured error types

pub mod battery;
pub mod email;
pub mod errors;
pub mod format;
pub mod pdf;
pub mod report;
pub mod sizing;

// Re-export commonly used types at crate root for convenience
pub use battery::{BatteryProfile, BatteryType};
pub use errors::{SolarError, SolarResult};
pub use report::SizingReport;
pub use sizing::{compute, SizingInput, SizingResult};
