//! Storage layer: the SQLite connection handle and the debt repository.

pub mod connection;
pub mod debt_repository;
pub mod traits;

pub use connection::DbConnection;
pub use debt_repository::DebtRepository;
pub use traits::DebtStorage;
