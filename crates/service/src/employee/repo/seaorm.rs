use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::employee::domain::Employee;
use crate::employee::repository::EmployeeRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository. Each write runs as its own autocommitted statement.
#[derive(Clone)]
pub struct SeaOrmEmployeeRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmEmployeeRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl EmployeeRepository for SeaOrmEmployeeRepository {
    async fn list_all(&self) -> Result<Vec<Employee>, ServiceError> {
        let rows = models::employee::list(&self.db).await?;
        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Employee>, ServiceError> {
        Ok(models::employee::find(&self.db, id).await?.map(Employee::from))
    }

    async fn insert(&self, employee: Employee) -> Result<Employee, ServiceError> {
        let created = models::employee::insert(&self.db, employee.into()).await?;
        Ok(created.into())
    }

    async fn update(&self, employee: Employee) -> Result<Employee, ServiceError> {
        models::employee::replace_fields(&self.db, employee.into())
            .await?
            .map(Employee::from)
            .ok_or_else(|| ServiceError::not_found("employee"))
    }

    async fn remove(&self, employee: &Employee) -> Result<(), ServiceError> {
        if !models::employee::delete(&self.db, employee.id).await? {
            return Err(ServiceError::not_found("employee"));
        }
        Ok(())
    }
}
