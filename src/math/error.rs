// src/math/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("epsilon must be a positive number (got {0})")]
    InvalidEpsilon(f64),
    #[error("initial step count must be even and at least 2 (got {0})")]
    InvalidInitialSteps(usize),
    #[error("integral did not converge after {iterations} refinements ({steps} steps, error estimate {error})")]
    DidNotConverge {
        iterations: u32,
        steps: usize,
        error: f64,
    },
}
