//! Optional input checks.
//!
//! The directory stores whatever it is given unless
//! `EmployeeServiceConfig::validate_input` is switched on.

use rust_decimal::Decimal;

use super::domain::{AddEmployeeDto, UpdateEmployeeDto};
use crate::errors::ServiceError;

pub trait Validate {
    fn validate(&self) -> Result<(), ServiceError>;
}

pub fn validate_name(name: &str) -> Result<(), ServiceError> {
    if name.trim().is_empty() {
        return Err(ServiceError::Validation("name required".into()));
    }
    Ok(())
}

/// Exactly one `@` with something on both sides.
pub fn validate_email(email: &str) -> Result<(), ServiceError> {
    let invalid = || ServiceError::Validation(format!("invalid email: {email:?}"));
    let (local, domain) = email.trim().split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), ServiceError> {
    if phone.trim().is_empty() {
        return Err(ServiceError::Validation("phone required".into()));
    }
    Ok(())
}

pub fn validate_salary(salary: &Decimal) -> Result<(), ServiceError> {
    if *salary < Decimal::ZERO {
        return Err(ServiceError::Validation("salary must not be negative".into()));
    }
    Ok(())
}

fn validate_fields(name: &str, email: &str, phone: &str, salary: &Decimal) -> Result<(), ServiceError> {
    validate_name(name)?;
    validate_email(email)?;
    validate_phone(phone)?;
    validate_salary(salary)
}

impl Validate for AddEmployeeDto {
    fn validate(&self) -> Result<(), ServiceError> {
        validate_fields(&self.name, &self.email, &self.phone, &self.salary)
    }
}

impl Validate for UpdateEmployeeDto {
    fn validate(&self) -> Result<(), ServiceError> {
        validate_fields(&self.name, &self.email, &self.phone, &self.salary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(name: &str, email: &str, phone: &str, salary: Decimal) -> AddEmployeeDto {
        AddEmployeeDto { name: name.into(), email: email.into(), phone: phone.into(), salary }
    }

    #[test]
    fn accepts_well_formed_input() {
        assert!(dto("New Employee", "newemployee@example.com", "123456789", Decimal::from(45000)).validate().is_ok());
        assert!(dto("Intern", "intern@example.com", "1", Decimal::ZERO).validate().is_ok());
    }

    #[test]
    fn rejects_blank_name_and_phone() {
        assert!(dto("  ", "a@example.com", "1", Decimal::ONE).validate().is_err());
        assert!(dto("A", "a@example.com", "", Decimal::ONE).validate().is_err());
    }

    #[test]
    fn rejects_malformed_emails() {
        for bad in ["", "plain", "@example.com", "a@", "a@b@c.com", "  @  "] {
            assert!(validate_email(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn domain_needs_no_dot() {
        for good in ["a@localhost", "root@mailhost", "x@example.com"] {
            assert!(validate_email(good).is_ok(), "{good} should be accepted");
        }
    }

    #[test]
    fn rejects_negative_salary() {
        let err = dto("A", "a@example.com", "1", Decimal::from(-1)).validate().unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn update_dto_uses_same_rules() {
        let bad = UpdateEmployeeDto { name: "A".into(), email: "nope".into(), phone: "1".into(), salary: Decimal::ONE };
        assert!(bad.validate().is_err());
    }
}
