//! Employee directory: three-layer architecture (domain, repository, service).
//!
//! The service is framework independent; the HTTP layer lives in the `server` crate.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;
pub mod validation;

pub use domain::{AddEmployeeDto, Employee, UpdateEmployeeDto};
pub use repository::EmployeeRepository;
pub use service::{EmployeeService, EmployeeServiceConfig};
