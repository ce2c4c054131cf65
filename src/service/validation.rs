//! Employee input validation and normalization.
//!
//! Values are trimmed, emails lowercased and country codes uppercased before
//! they are checked, so what is validated is exactly what is stored.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::ValidationConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{Cents, EmployeeUpdate, NewEmployee};

const MAX_NAME_LEN: usize = 100;
const MAX_EMAIL_LEN: usize = 254;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
});

fn required_text(field: &str, value: &str) -> EngineResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(EngineError::invalid(field, "must not be empty"));
    }
    if value.chars().count() > MAX_NAME_LEN {
        return Err(EngineError::invalid(
            field,
            format!("must be at most {} characters", MAX_NAME_LEN),
        ));
    }
    Ok(value.to_string())
}

fn email(value: &str) -> EngineResult<String> {
    let value = value.trim().to_lowercase();
    if value.len() > MAX_EMAIL_LEN || !EMAIL_PATTERN.is_match(&value) {
        return Err(EngineError::invalid("email", "must be a valid email address"));
    }
    Ok(value)
}

fn country(value: &str) -> EngineResult<String> {
    let value = value.trim();
    if value.len() != 2 || !value.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(EngineError::invalid(
            "country",
            "must be a two-letter country code",
        ));
    }
    Ok(value.to_ascii_uppercase())
}

fn salary(value: Cents, limits: &ValidationConfig) -> EngineResult<Cents> {
    if value < limits.min_salary_cents {
        return Err(EngineError::invalid(
            "salaryCents",
            format!("must be at least {}", limits.min_salary_cents),
        ));
    }
    if value > limits.max_salary_cents {
        return Err(EngineError::invalid(
            "salaryCents",
            format!("must be at most {}", limits.max_salary_cents),
        ));
    }
    Ok(value)
}

/// Validates and normalizes a new employee.
pub fn validate_new_employee(
    employee: NewEmployee,
    limits: &ValidationConfig,
) -> EngineResult<NewEmployee> {
    Ok(NewEmployee {
        first_name: required_text("firstName", &employee.first_name)?,
        last_name: required_text("lastName", &employee.last_name)?,
        email: email(&employee.email)?,
        job_title: required_text("jobTitle", &employee.job_title)?,
        country: employee.country.as_deref().map(country).transpose()?,
        salary_cents: salary(employee.salary_cents, limits)?,
    })
}

/// Validates and normalizes the fields present in an update.
pub fn validate_update(
    update: EmployeeUpdate,
    limits: &ValidationConfig,
) -> EngineResult<EmployeeUpdate> {
    if update.is_empty() {
        return Err(EngineError::invalid("body", "at least one field must be provided"));
    }
    Ok(EmployeeUpdate {
        first_name: update
            .first_name
            .map(|v| required_text("firstName", &v))
            .transpose()?,
        last_name: update
            .last_name
            .map(|v| required_text("lastName", &v))
            .transpose()?,
        email: update.email.map(|v| email(&v)).transpose()?,
        job_title: update
            .job_title
            .map(|v| required_text("jobTitle", &v))
            .transpose()?,
        country: update
            .country
            .map(|c| c.as_deref().map(country).transpose())
            .transpose()?,
        salary_cents: update
            .salary_cents
            .map(|v| salary(v, limits))
            .transpose()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_employee() -> NewEmployee {
        NewEmployee {
            first_name: "  Ada ".to_string(),
            last_name: "Lovelace".to_string(),
            email: " Ada@Example.COM ".to_string(),
            job_title: "Engineer".to_string(),
            country: Some("uk".to_string()),
            salary_cents: 9_000_000,
        }
    }

    fn field_of(error: EngineError) -> String {
        match error {
            EngineError::InvalidEmployee { field, .. } => field,
            other => panic!("expected InvalidEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_employee_is_normalized() {
        let employee =
            validate_new_employee(valid_employee(), &ValidationConfig::default()).unwrap();

        assert_eq!(employee.first_name, "Ada");
        assert_eq!(employee.email, "ada@example.com");
        assert_eq!(employee.country.as_deref(), Some("UK"));
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut employee = valid_employee();
        employee.first_name = "   ".to_string();
        let error = validate_new_employee(employee, &ValidationConfig::default()).unwrap_err();
        assert_eq!(field_of(error), "firstName");
    }

    #[test]
    fn test_long_job_title_rejected() {
        let mut employee = valid_employee();
        employee.job_title = "x".repeat(101);
        let error = validate_new_employee(employee, &ValidationConfig::default()).unwrap_err();
        assert_eq!(field_of(error), "jobTitle");
    }

    #[test]
    fn test_invalid_email_rejected() {
        for bad in ["plainaddress", "a@b", "a b@example.com", "@example.com"] {
            let mut employee = valid_employee();
            employee.email = bad.to_string();
            let error = validate_new_employee(employee, &ValidationConfig::default()).unwrap_err();
            assert_eq!(field_of(error), "email", "{} should be rejected", bad);
        }
    }

    #[test]
    fn test_invalid_country_rejected() {
        for bad in ["USA", "U", "1A"] {
            let mut employee = valid_employee();
            employee.country = Some(bad.to_string());
            let error = validate_new_employee(employee, &ValidationConfig::default()).unwrap_err();
            assert_eq!(field_of(error), "country", "{} should be rejected", bad);
        }
    }

    #[test]
    fn test_unsupported_but_well_formed_country_accepted() {
        let mut employee = valid_employee();
        employee.country = Some("xx".to_string());
        let employee = validate_new_employee(employee, &ValidationConfig::default()).unwrap();
        assert_eq!(employee.country.as_deref(), Some("XX"));
    }

    #[test]
    fn test_salary_below_minimum_rejected() {
        let mut employee = valid_employee();
        employee.salary_cents = 99_999;
        let error = validate_new_employee(employee, &ValidationConfig::default()).unwrap_err();
        assert_eq!(field_of(error), "salaryCents");
    }

    #[test]
    fn test_salary_above_maximum_rejected() {
        let mut employee = valid_employee();
        employee.salary_cents = 100_000_000_001;
        let error = validate_new_employee(employee, &ValidationConfig::default()).unwrap_err();
        assert_eq!(field_of(error), "salaryCents");
    }

    #[test]
    fn test_empty_update_rejected() {
        let error = validate_update(EmployeeUpdate::default(), &ValidationConfig::default())
            .unwrap_err();
        assert_eq!(field_of(error), "body");
    }

    #[test]
    fn test_update_normalizes_present_fields() {
        let update = EmployeeUpdate {
            email: Some("NEW@example.com".to_string()),
            country: Some(Some("ca".to_string())),
            ..Default::default()
        };
        let update = validate_update(update, &ValidationConfig::default()).unwrap();

        assert_eq!(update.email.as_deref(), Some("new@example.com"));
        assert_eq!(update.country, Some(Some("CA".to_string())));
        assert!(update.first_name.is_none());
    }

    #[test]
    fn test_update_can_clear_country() {
        let update = EmployeeUpdate {
            country: Some(None),
            ..Default::default()
        };
        let update = validate_update(update, &ValidationConfig::default()).unwrap();
        assert_eq!(update.country, Some(None));
    }
}
