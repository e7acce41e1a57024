//! Service layer providing the employee directory operations on top of models.
//! - Separates business logic from data access behind `EmployeeRepository`.
//! - Ships a SeaORM repository and an in-memory one for tests.
//! - Signals a missing record as `ServiceError::NotFound`, distinct from success.

pub mod errors;
pub mod employee;
#[cfg(test)]
pub mod test_support;

pub use employee::EmployeeService;
