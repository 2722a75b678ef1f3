// src/functions/mod.rs

pub mod catalog;
pub mod domain;
pub mod error;

pub use catalog::{CatalogFunction, IntegrationPlan};
pub use error::DomainError;
