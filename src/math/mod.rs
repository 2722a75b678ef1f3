// src/math/mod.rs

pub mod simpson;
pub mod result;
pub mod error;

pub use simpson::SimpsonIntegrator;
pub use result::IntegrationResult;
pub use error::MathError;
