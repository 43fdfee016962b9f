//! Form Validation
//!
//! Raw user input, validated field by field into domain values. The first
//! failing field is reported so the view can mark it.

use kernel::error::app_error::AppError;

use crate::application::login::LoginInput;
use crate::application::sign_up::SignUpInput;
use crate::domain::entity::pending_registration::PendingRole;
use crate::domain::value_object::{
    display_name::DisplayName, email::Email, password::RawPassword, phone::Phone,
    registration_number::RegistrationNumber, role::Role,
};

/// A rejected form field
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    fn from_app(field: &'static str, e: AppError) -> Self {
        Self::new(field, e.to_string())
    }
}

/// Login form input
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(self) -> Result<LoginInput, ValidationError> {
        let email = Email::new(self.email).map_err(|e| ValidationError::from_app("email", e))?;

        // The password is required but not checked against anything; no
        // credential store exists on this side.
        if self.password.is_empty() {
            return Err(ValidationError::new("password", "Password cannot be empty"));
        }

        Ok(LoginInput { email })
    }
}

/// Signup form input, shared by both roles
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub role: String,
    pub library_name: String,
    pub library_description: String,
    pub registration_number: String,
}

impl SignupForm {
    pub fn validate(self) -> Result<SignUpInput, ValidationError> {
        if self.password != self.confirm_password {
            return Err(ValidationError::new(
                "confirmPassword",
                "Passwords do not match",
            ));
        }

        let password =
            RawPassword::new(self.password).map_err(|e| ValidationError::from_app("password", e))?;

        let role = Role::from_code(&self.role)
            .ok_or_else(|| ValidationError::new("role", "Select a role"))?;

        let details = match role {
            Role::Owner => {
                let library_name = self.library_name.trim().to_string();
                if library_name.is_empty() {
                    return Err(ValidationError::new(
                        "libraryName",
                        "Library name is required",
                    ));
                }
                let library_description = {
                    let d = self.library_description.trim();
                    (!d.is_empty()).then(|| d.to_string())
                };
                PendingRole::Owner {
                    library_name,
                    library_description,
                }
            }
            Role::Student => {
                let registration_number = RegistrationNumber::new(self.registration_number)
                    .map_err(|e| ValidationError::from_app("registrationNumber", e))?;
                PendingRole::Student {
                    registration_number,
                }
            }
        };

        let name =
            DisplayName::new(self.name).map_err(|e| ValidationError::from_app("name", e))?;
        let email = Email::new(self.email).map_err(|e| ValidationError::from_app("email", e))?;
        let phone = Phone::new(self.phone).map_err(|e| ValidationError::from_app("phone", e))?;

        Ok(SignUpInput {
            name,
            email,
            phone,
            password,
            details,
        })
    }
}

/// Verification code form input
#[derive(Debug, Clone, Default)]
pub struct CodeForm {
    pub code: String,
}

impl CodeForm {
    /// Shape check only. Whether the code is the right one is decided by
    /// the verify use case.
    pub fn validate(self) -> Result<String, ValidationError> {
        let code = self.code.trim().to_string();
        if code.len() != 4 || !code.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::new("code", "Enter the 4-digit code"));
        }
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student_form() -> SignupForm {
        SignupForm {
            name: "Alice Johnson".to_string(),
            email: "alice@example.com".to_string(),
            phone: "+1234567890".to_string(),
            password: "secret123".to_string(),
            confirm_password: "secret123".to_string(),
            role: "student".to_string(),
            registration_number: "REG-2024-042".to_string(),
            ..Default::default()
        }
    }

    fn owner_form() -> SignupForm {
        SignupForm {
            name: "Bob".to_string(),
            email: "bob@example.com".to_string(),
            phone: "+1234567890".to_string(),
            password: "secret123".to_string(),
            confirm_password: "secret123".to_string(),
            role: "owner".to_string(),
            library_name: "City Library".to_string(),
            library_description: "  ".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_login_form_valid() {
        let form = LoginForm {
            email: "Alice@Example.com".to_string(),
            password: "whatever".to_string(),
        };
        let input = form.validate().unwrap();
        assert_eq!(input.email.as_str(), "alice@example.com");
    }

    #[test]
    fn test_login_form_rejections() {
        let err = LoginForm {
            email: "not-an-email".to_string(),
            password: "x".to_string(),
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.field, "email");

        let err = LoginForm {
            email: "a@example.com".to_string(),
            password: String::new(),
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.field, "password");
    }

    #[test]
    fn test_signup_student_valid() {
        let input = student_form().validate().unwrap();
        assert_eq!(input.email.as_str(), "alice@example.com");
        assert!(matches!(input.details, PendingRole::Student { .. }));
    }

    #[test]
    fn test_signup_owner_valid_blank_description_dropped() {
        let input = owner_form().validate().unwrap();
        match input.details {
            PendingRole::Owner {
                library_name,
                library_description,
            } => {
                assert_eq!(library_name, "City Library");
                assert!(library_description.is_none());
            }
            PendingRole::Student { .. } => panic!("expected owner details"),
        }
    }

    #[test]
    fn test_signup_password_mismatch_checked_first() {
        let mut form = student_form();
        form.confirm_password = "different".to_string();
        form.email = "broken".to_string(); // would also fail, later
        let err = form.validate().unwrap_err();
        assert_eq!(err.field, "confirmPassword");
    }

    #[test]
    fn test_signup_short_password_rejected() {
        let mut form = student_form();
        form.password = "12345".to_string();
        form.confirm_password = "12345".to_string();
        let err = form.validate().unwrap_err();
        assert_eq!(err.field, "password");
    }

    #[test]
    fn test_signup_owner_requires_library_name() {
        let mut form = owner_form();
        form.library_name = "   ".to_string();
        let err = form.validate().unwrap_err();
        assert_eq!(err.field, "libraryName");
    }

    #[test]
    fn test_signup_student_requires_registration_number() {
        let mut form = student_form();
        form.registration_number = String::new();
        let err = form.validate().unwrap_err();
        assert_eq!(err.field, "registrationNumber");
    }

    #[test]
    fn test_signup_unknown_role_rejected() {
        let mut form = student_form();
        form.role = "admin".to_string();
        let err = form.validate().unwrap_err();
        assert_eq!(err.field, "role");
    }

    #[test]
    fn test_code_form() {
        assert_eq!(
            CodeForm {
                code: " 0000 ".to_string()
            }
            .validate()
            .unwrap(),
            "0000"
        );
        assert!(
            CodeForm {
                code: "123".to_string()
            }
            .validate()
            .is_err()
        );
        assert!(
            CodeForm {
                code: "12a4".to_string()
            }
            .validate()
            .is_err()
        );
        assert!(
            CodeForm {
                code: "12345".to_string()
            }
            .validate()
            .is_err()
        );
    }
}
