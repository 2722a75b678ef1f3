// src/session/error.rs

use thiserror::Error;

use crate::functions::DomainError;
use crate::math::MathError;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("input closed before all values were entered")]
    InputClosed,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// 積分計算で発生するエラー
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Math(#[from] MathError),
}
