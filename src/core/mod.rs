// src/core/mod.rs

//! Core data structures and types

pub mod constants;
pub mod error;
pub mod params;
pub mod state;

// Re-export public types for convenient access via `grover_sim::core::TypeName`
pub use constants::grover_constants::{MAX_QUBITS, NORM_TOLERANCE, PI};
pub use error::{GroverError, Result};
pub use params::{IterationCount, SearchParams};
pub use state::AmplitudeVector;
