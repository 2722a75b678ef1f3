// src/config/mod.rs

pub mod parameters;
pub mod load_parameters;
pub mod error;

pub use parameters::IntegrationParameters;
pub use load_parameters::resolve_parameters;
