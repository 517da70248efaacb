//! Endpoints under `/api/admin`.

pub mod appointments;
pub mod employees;
pub mod products;
pub mod statistics;
