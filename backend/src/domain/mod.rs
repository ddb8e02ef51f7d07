//! Domain layer: validation and the debt lifecycle workflows.

pub mod debt_service;

pub use debt_service::{DebtError, DebtService};
