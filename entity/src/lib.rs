//! SeaORM entities backing the service.

pub mod employees;
