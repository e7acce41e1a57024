use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stored employee record (business view)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub salary: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Creation input; the id is assigned by the service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddEmployeeDto {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub salary: Decimal,
}

/// Full replacement of the four mutable fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateEmployeeDto {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub salary: Decimal,
}

impl Employee {
    /// New record with a fresh random id.
    pub fn from_add(dto: AddEmployeeDto) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: dto.name,
            email: dto.email,
            phone: dto.phone,
            salary: dto.salary,
            created_at: Utc::now(),
        }
    }

    /// Overwrite every mutable field; `id` and `created_at` stay as they are.
    pub fn apply_update(&mut self, dto: UpdateEmployeeDto) {
        self.name = dto.name;
        self.email = dto.email;
        self.phone = dto.phone;
        self.salary = dto.salary;
    }
}

impl From<models::employee::Model> for Employee {
    fn from(m: models::employee::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
            phone: m.phone,
            salary: m.salary,
            created_at: m.created_at.with_timezone(&Utc),
        }
    }
}

impl From<Employee> for models::employee::Model {
    fn from(e: Employee) -> Self {
        Self {
            id: e.id,
            name: e.name,
            email: e.email,
            phone: e.phone,
            salary: e.salary,
            created_at: e.created_at.into(),
        }
    }
}
