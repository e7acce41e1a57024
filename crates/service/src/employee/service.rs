use std::sync::Arc;

use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::domain::{AddEmployeeDto, Employee, UpdateEmployeeDto};
use super::repository::EmployeeRepository;
use super::validation::Validate;
use crate::errors::ServiceError;

/// Employee service configuration
#[derive(Clone, Debug, Default)]
pub struct EmployeeServiceConfig {
    /// Check DTOs before writing. Off by default, which stores any input as given.
    pub validate_input: bool,
}

/// Employee directory operations, independent of web framework.
///
/// Holds no state of its own: every call goes to the repository.
pub struct EmployeeService<R: EmployeeRepository + ?Sized> {
    repo: Arc<R>,
    cfg: EmployeeServiceConfig,
}

impl<R: EmployeeRepository + ?Sized> EmployeeService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self::with_config(repo, EmployeeServiceConfig::default()) }

    pub fn with_config(repo: Arc<R>, cfg: EmployeeServiceConfig) -> Self { Self { repo, cfg } }

    /// Every stored employee in insertion order. An empty directory is not an error.
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ServiceError> {
        self.repo.list_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_employee(&self, id: Uuid) -> Result<Employee, ServiceError> {
        self.find_existing(id).await
    }

    /// Store a new employee under a freshly generated id.
    ///
    /// # Examples
    /// ```
    /// use service::employee::{AddEmployeeDto, EmployeeService};
    /// use service::employee::repository::mock::InMemoryEmployeeRepository;
    /// use rust_decimal::Decimal;
    /// use std::sync::Arc;
    /// let svc = EmployeeService::new(Arc::new(InMemoryEmployeeRepository::default()));
    /// let dto = AddEmployeeDto { name: "New Employee".into(), email: "newemployee@example.com".into(), phone: "123456789".into(), salary: Decimal::from(45000) };
    /// let created = tokio_test::block_on(svc.add_employee(dto)).unwrap();
    /// let found = tokio_test::block_on(svc.get_employee(created.id)).unwrap();
    /// assert_eq!(found.name, "New Employee");
    /// ```
    #[instrument(skip(self, dto))]
    pub async fn add_employee(&self, dto: AddEmployeeDto) -> Result<Employee, ServiceError> {
        if self.cfg.validate_input {
            dto.validate()?;
        }
        let created = self.repo.insert(Employee::from_add(dto)).await?;
        info!(employee_id = %created.id, "employee_created");
        Ok(created)
    }

    /// Replace name, email, phone and salary of an existing employee.
    #[instrument(skip(self, dto))]
    pub async fn update_employee(&self, id: Uuid, dto: UpdateEmployeeDto) -> Result<Employee, ServiceError> {
        if self.cfg.validate_input {
            dto.validate()?;
        }
        let mut employee = self.find_existing(id).await?;
        employee.apply_update(dto);
        let updated = self.repo.update(employee).await?;
        info!(employee_id = %updated.id, "employee_updated");
        Ok(updated)
    }

    /// Remove an employee and hand back the record as it was before deletion.
    #[instrument(skip(self))]
    pub async fn delete_employee(&self, id: Uuid) -> Result<Employee, ServiceError> {
        let employee = self.find_existing(id).await?;
        self.repo.remove(&employee).await?;
        info!(employee_id = %employee.id, "employee_deleted");
        Ok(employee)
    }

    async fn find_existing(&self, id: Uuid) -> Result<Employee, ServiceError> {
        match self.repo.find_by_id(id).await? {
            Some(e) => Ok(e),
            None => {
                debug!(employee_id = %id, "employee_not_found");
                Err(ServiceError::not_found("employee"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employee::repository::mock::InMemoryEmployeeRepository;
    use crate::test_support::{john_and_jane, memory_repo, seaorm_repo, update_dto};
    use rust_decimal::Decimal;

    fn seeded() -> (Arc<InMemoryEmployeeRepository>, EmployeeService<InMemoryEmployeeRepository>) {
        let repo = Arc::new(memory_repo(john_and_jane()));
        (repo.clone(), EmployeeService::new(repo))
    }

    fn new_employee_dto() -> AddEmployeeDto {
        AddEmployeeDto {
            name: "New Employee".into(),
            email: "newemployee@example.com".into(),
            phone: "123456789".into(),
            salary: Decimal::from(45000),
        }
    }

    #[tokio::test]
    async fn list_returns_all_seeded_employees() -> Result<(), anyhow::Error> {
        let (_, svc) = seeded();
        let all = svc.list_employees().await?;
        assert_eq!(all.len(), 2);
        assert!(all.iter().any(|e| e.name == "John Doe"));
        assert!(all.iter().any(|e| e.name == "Jane Smith"));
        Ok(())
    }

    #[tokio::test]
    async fn list_on_empty_directory_is_ok() -> Result<(), anyhow::Error> {
        let svc = EmployeeService::new(Arc::new(InMemoryEmployeeRepository::default()));
        assert!(svc.list_employees().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn get_existing_employee() -> Result<(), anyhow::Error> {
        let (repo, svc) = seeded();
        let first = repo.list_all().await?.remove(0);
        let found = svc.get_employee(first.id).await?;
        assert_eq!(found.id, first.id);
        assert_eq!(found.name, first.name);
        Ok(())
    }

    #[tokio::test]
    async fn get_missing_employee_is_not_found() {
        let (_, svc) = seeded();
        let err = svc.get_employee(Uuid::new_v4()).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn get_twice_returns_identical_records() -> Result<(), anyhow::Error> {
        let (repo, svc) = seeded();
        let id = repo.list_all().await?[1].id;
        let a = svc.get_employee(id).await?;
        let b = svc.get_employee(id).await?;
        assert_eq!(a, b);
        Ok(())
    }

    #[tokio::test]
    async fn add_assigns_id_and_keeps_fields() -> Result<(), anyhow::Error> {
        let (repo, svc) = seeded();
        let created = svc.add_employee(new_employee_dto()).await?;
        assert_eq!(created.name, "New Employee");
        assert_eq!(repo.len()?, 3);

        let found = svc.get_employee(created.id).await?;
        assert_eq!(found.name, "New Employee");
        assert_eq!(found.email, "newemployee@example.com");
        assert_eq!(found.phone, "123456789");
        assert_eq!(found.salary, Decimal::from(45000));
        Ok(())
    }

    #[tokio::test]
    async fn add_accepts_empty_strings_by_default() -> Result<(), anyhow::Error> {
        let (_, svc) = seeded();
        let dto = AddEmployeeDto { name: String::new(), email: String::new(), phone: String::new(), salary: Decimal::ZERO };
        let created = svc.add_employee(dto).await?;
        assert_eq!(svc.get_employee(created.id).await?.name, "");
        Ok(())
    }

    #[tokio::test]
    async fn add_never_reuses_ids() -> Result<(), anyhow::Error> {
        let (_, svc) = seeded();
        let a = svc.add_employee(new_employee_dto()).await?;
        svc.delete_employee(a.id).await?;
        let b = svc.add_employee(new_employee_dto()).await?;
        assert_ne!(a.id, b.id);
        Ok(())
    }

    #[tokio::test]
    async fn update_existing_employee() -> Result<(), anyhow::Error> {
        let (repo, svc) = seeded();
        let id = repo.list_all().await?[0].id;
        let updated = svc.update_employee(id, update_dto()).await?;
        assert_eq!(updated.id, id);
        assert_eq!(updated.name, "Updated Name");
        assert_eq!(updated.email, "updated@example.com");
        assert_eq!(updated.phone, "111222333");
        Ok(())
    }

    #[tokio::test]
    async fn update_stores_the_supplied_salary() -> Result<(), anyhow::Error> {
        let (repo, svc) = seeded();
        let id = repo.list_all().await?[0].id;
        let dto = UpdateEmployeeDto { phone: "123123123".into(), salary: Decimal::from(80000), ..update_dto() };
        let updated = svc.update_employee(id, dto).await?;
        assert_eq!(updated.salary, Decimal::from(80000));
        assert_eq!(svc.get_employee(id).await?.salary, Decimal::from(80000));
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_employee_changes_nothing() -> Result<(), anyhow::Error> {
        let (repo, svc) = seeded();
        let before = repo.list_all().await?;
        let err = svc.update_employee(Uuid::new_v4(), update_dto()).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(repo.list_all().await?, before);
        Ok(())
    }

    #[tokio::test]
    async fn delete_existing_returns_prior_record() -> Result<(), anyhow::Error> {
        let (repo, svc) = seeded();
        let first = repo.list_all().await?.remove(0);
        let deleted = svc.delete_employee(first.id).await?;
        assert_eq!(deleted, first);
        assert_eq!(repo.len()?, 1);
        assert!(svc.get_employee(first.id).await.unwrap_err().is_not_found());
        Ok(())
    }

    #[tokio::test]
    async fn delete_missing_employee_keeps_cardinality() {
        let (repo, svc) = seeded();
        let err = svc.delete_employee(Uuid::new_v4()).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(repo.len().unwrap(), 2);
    }

    #[tokio::test]
    async fn validation_rejects_bad_input_without_writing() {
        let repo = Arc::new(memory_repo(john_and_jane()));
        let svc = EmployeeService::with_config(repo.clone(), EmployeeServiceConfig { validate_input: true });
        let bad = AddEmployeeDto { email: "not-an-email".into(), ..new_employee_dto() };
        let err = svc.add_employee(bad).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(repo.len().unwrap(), 2);

        let id = repo.list_all().await.unwrap()[0].id;
        let bad_update = UpdateEmployeeDto { name: " ".into(), ..update_dto() };
        assert!(matches!(svc.update_employee(id, bad_update).await, Err(ServiceError::Validation(_))));
        assert_eq!(svc.get_employee(id).await.unwrap().name, "John Doe");
    }

    #[tokio::test]
    async fn validation_passes_good_input() -> Result<(), anyhow::Error> {
        let repo = Arc::new(memory_repo(Vec::new()));
        let svc = EmployeeService::with_config(repo, EmployeeServiceConfig { validate_input: true });
        svc.add_employee(new_employee_dto()).await?;
        Ok(())
    }

    #[tokio::test]
    async fn works_through_a_trait_object() -> Result<(), anyhow::Error> {
        let repo: Arc<dyn EmployeeRepository> = Arc::new(memory_repo(john_and_jane()));
        let svc: EmployeeService<dyn EmployeeRepository> = EmployeeService::new(repo);
        assert_eq!(svc.list_employees().await?.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn full_lifecycle_on_in_memory_sqlite() -> Result<(), anyhow::Error> {
        let svc = EmployeeService::new(Arc::new(seaorm_repo(john_and_jane()).await?));
        assert_eq!(svc.list_employees().await?.len(), 2);

        let created = svc.add_employee(new_employee_dto()).await?;
        let found = svc.get_employee(created.id).await?;
        assert_eq!((found.name.as_str(), found.salary), ("New Employee", Decimal::from(45000)));

        let updated = svc.update_employee(created.id, update_dto()).await?;
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Updated Name");
        assert_eq!(updated.salary, Decimal::from(55000));

        let deleted = svc.delete_employee(created.id).await?;
        assert_eq!(deleted.name, "Updated Name");
        assert!(svc.get_employee(created.id).await.unwrap_err().is_not_found());
        assert!(svc.delete_employee(Uuid::new_v4()).await.unwrap_err().is_not_found());
        assert!(svc.update_employee(Uuid::new_v4(), update_dto()).await.unwrap_err().is_not_found());
        assert_eq!(svc.list_employees().await?.len(), 2);
        Ok(())
    }
}
