//! Numerical constants shared across the simulator.

/// Constants governing the dense amplitude representation.
pub mod grover_constants {
    /// Allowed deviation of the total squared magnitude from 1.0.
    pub const NORM_TOLERANCE: f64 = 1e-9;
    /// Widest register the dense representation accepts.
    /// 2^24 `Complex<f64>` amplitudes occupy 256 MiB.
    pub const MAX_QUBITS: u32 = 24;
    /// Used for the closed-form success probability.
    pub const PI: f64 = std::f64::consts::PI;
}
