//! Endpoints under `/api/client`. Most paths embed the stored client id.

pub mod account;
pub mod appointments;
pub mod cart;
pub mod history;
pub mod products;
pub mod team;
