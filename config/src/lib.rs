//! # Config Crate
//!
//! Centralized configuration constants for the earcut3d triangulation
//! pipeline. All tolerances and limits shared between the plane fitter, the
//! vertex welder and the OBJ exporter are defined here.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_WELD_THRESHOLD, ZERO_VECTOR_EPSILON};
//!
//! // Components below ZERO_VECTOR_EPSILON are treated as zero
//! let component: f64 = 1e-11;
//! assert!(component.abs() < ZERO_VECTOR_EPSILON);
//!
//! // Points closer than the weld threshold collapse into one vertex
//! let gap = 0.004;
//! assert!(gap < DEFAULT_WELD_THRESHOLD);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated Overrides**: Runtime overrides go through `GlobalConfig::new`

pub mod constants;

#[cfg(test)]
mod tests;
