// src/functions/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("{formula} is only defined for x > {bound}")]
    BelowLowerBound {
        formula: &'static str,
        bound: f64,
    },
}
