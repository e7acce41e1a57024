use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::employee::{
    repo::seaorm::SeaOrmEmployeeRepository, EmployeeRepository, EmployeeService, EmployeeServiceConfig,
};

/// Shared handler state; cloning is cheap.
#[derive(Clone)]
pub struct ServerState {
    pub employees: Arc<EmployeeService<dyn EmployeeRepository>>,
}

impl ServerState {
    /// Wire the directory to any repository implementation.
    pub fn new(repo: Arc<dyn EmployeeRepository>, cfg: EmployeeServiceConfig) -> Self {
        Self { employees: Arc::new(EmployeeService::with_config(repo, cfg)) }
    }

    /// Directory backed by the SeaORM repository on `db`.
    pub fn from_db(db: DatabaseConnection, cfg: EmployeeServiceConfig) -> Self {
        Self::new(Arc::new(SeaOrmEmployeeRepository::new(db)), cfg)
    }
}
