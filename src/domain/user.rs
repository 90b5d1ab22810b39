//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateEmail, ValidationError, ValidationErrors};

use crate::config::MIN_PASSWORD_LENGTH;

/// User domain entity
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Database-assigned identifier; `0` until persisted
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl User {
    /// Create a not-yet-persisted user from an already hashed password
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        Self {
            id: 0,
            name,
            email,
            password_hash,
        }
    }
}

/// User creation request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUser {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Partial user update. Absent or empty fields leave the stored value alone.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.is_empty())
}

impl UpdateUser {
    pub fn name(&self) -> Option<&str> {
        present(&self.name)
    }

    pub fn email(&self) -> Option<&str> {
        present(&self.email)
    }

    pub fn password(&self) -> Option<&str> {
        present(&self.password)
    }
}

impl Validate for UpdateUser {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Some(email) = self.email() {
            if !email.validate_email() {
                let mut error = ValidationError::new("email");
                error.message = Some("Invalid email format".into());
                errors.add("email", error);
            }
        }

        if let Some(password) = self.password() {
            if password.chars().count() < MIN_PASSWORD_LENGTH as usize {
                let mut error = ValidationError::new("length");
                error.message = Some("Password must be at least 6 characters".into());
                errors.add("password", error);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// Login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login response carrying the signed token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}
