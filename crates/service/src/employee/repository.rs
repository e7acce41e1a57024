use async_trait::async_trait;
use uuid::Uuid;

use super::domain::Employee;
use crate::errors::ServiceError;

/// Persistence collaborator for the employee directory.
///
/// Every mutating call is committed before it returns, so later reads observe it.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// All records in insertion order.
    async fn list_all(&self) -> Result<Vec<Employee>, ServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Employee>, ServiceError>;
    async fn insert(&self, employee: Employee) -> Result<Employee, ServiceError>;
    /// Write name, email, phone and salary of an existing record.
    async fn update(&self, employee: Employee) -> Result<Employee, ServiceError>;
    async fn remove(&self, employee: &Employee) -> Result<(), ServiceError>;
}

/// Simple in-memory repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::sync::{Mutex, MutexGuard};

    #[derive(Default)]
    pub struct InMemoryEmployeeRepository {
        rows: Mutex<Vec<Employee>>, // insertion order
    }

    impl InMemoryEmployeeRepository {
        pub fn seeded(rows: Vec<Employee>) -> Self {
            Self { rows: Mutex::new(rows) }
        }

        pub fn len(&self) -> Result<usize, ServiceError> {
            Ok(self.rows()?.len())
        }

        pub fn is_empty(&self) -> Result<bool, ServiceError> {
            Ok(self.rows()?.is_empty())
        }

        fn rows(&self) -> Result<MutexGuard<'_, Vec<Employee>>, ServiceError> {
            self.rows.lock().map_err(|_| ServiceError::Db("employee store lock poisoned".into()))
        }
    }

    #[async_trait]
    impl EmployeeRepository for InMemoryEmployeeRepository {
        async fn list_all(&self) -> Result<Vec<Employee>, ServiceError> {
            Ok(self.rows()?.clone())
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<Employee>, ServiceError> {
            Ok(self.rows()?.iter().find(|e| e.id == id).cloned())
        }

        async fn insert(&self, employee: Employee) -> Result<Employee, ServiceError> {
            let mut rows = self.rows()?;
            if rows.iter().any(|e| e.id == employee.id) {
                return Err(ServiceError::Db(format!("duplicate employee id {}", employee.id)));
            }
            rows.push(employee.clone());
            Ok(employee)
        }

        async fn update(&self, employee: Employee) -> Result<Employee, ServiceError> {
            let mut rows = self.rows()?;
            let slot = rows
                .iter_mut()
                .find(|e| e.id == employee.id)
                .ok_or_else(|| ServiceError::not_found("employee"))?;
            slot.name = employee.name;
            slot.email = employee.email;
            slot.phone = employee.phone;
            slot.salary = employee.salary;
            Ok(slot.clone())
        }

        async fn remove(&self, employee: &Employee) -> Result<(), ServiceError> {
            let mut rows = self.rows()?;
            let idx = rows
                .iter()
                .position(|e| e.id == employee.id)
                .ok_or_else(|| ServiceError::not_found("employee"))?;
            rows.remove(idx);
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::sync::Arc;

        #[test]
        fn poisoned_store_reports_an_error() {
            let repo = Arc::new(InMemoryEmployeeRepository::default());
            assert_eq!(repo.len().unwrap(), 0);
            assert!(repo.is_empty().unwrap());

            let held = repo.clone();
            let _ = std::thread::spawn(move || {
                let _guard = held.rows.lock().unwrap();
                panic!("poison the store");
            })
            .join();

            assert!(matches!(repo.len(), Err(ServiceError::Db(_))));
            assert!(repo.is_empty().is_err());
            let listed = tokio_test::block_on(repo.list_all());
            assert!(matches!(listed, Err(ServiceError::Db(_))));
        }
    }
}
