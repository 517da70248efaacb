pub mod account;
pub mod appointment;
pub mod cart;
pub mod catalog;
pub mod employee;
pub mod page;
pub mod product;
pub mod report;
pub mod review;
