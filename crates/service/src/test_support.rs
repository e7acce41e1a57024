#![cfg(test)]
use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::employee::domain::{Employee, UpdateEmployeeDto};
use crate::employee::repo::seaorm::SeaOrmEmployeeRepository;
use crate::employee::repository::{mock::InMemoryEmployeeRepository, EmployeeRepository};

/// The two records every directory test starts from, one second apart.
pub fn john_and_jane() -> Vec<Employee> {
    let base = Utc::now();
    vec![
        Employee {
            id: Uuid::new_v4(),
            name: "John Doe".into(),
            email: "john@example.com".into(),
            phone: "123456789".into(),
            salary: Decimal::from(50000),
            created_at: base,
        },
        Employee {
            id: Uuid::new_v4(),
            name: "Jane Smith".into(),
            email: "jane@example.com".into(),
            phone: "987654321".into(),
            salary: Decimal::from(60000),
            created_at: base + Duration::seconds(1),
        },
    ]
}

pub fn update_dto() -> UpdateEmployeeDto {
    UpdateEmployeeDto {
        name: "Updated Name".into(),
        email: "updated@example.com".into(),
        phone: "111222333".into(),
        salary: Decimal::from(55000),
    }
}

pub fn memory_repo(seed: Vec<Employee>) -> InMemoryEmployeeRepository {
    InMemoryEmployeeRepository::seeded(seed)
}

/// Fresh in-memory SQLite database, migrated and seeded.
pub async fn seaorm_repo(seed: Vec<Employee>) -> Result<SeaOrmEmployeeRepository, anyhow::Error> {
    let db = models::db::connect_in_memory().await?;
    let repo = SeaOrmEmployeeRepository::new(db);
    for e in seed {
        repo.insert(e).await?;
    }
    Ok(repo)
}
