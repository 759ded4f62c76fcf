//! Author login/signup and admin login forms.

use super::{require, require_email, FieldErrors, FormModel, FormPayload};

/// Minimum password length for new accounts.
pub const PASSWORD_MIN_CHARS: usize = 8;

/// Author login (`/loginForm`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl FormModel for LoginForm {
    const FORM_NAME: &'static str = "login";
    const SUCCESS_MESSAGE: &'static str = "Login successful.";

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require_email(&mut errors, "email", &self.email);
        if self.password.is_empty() {
            errors.insert("password", "Password is required");
        }
        errors.into_result()
    }

    fn payload(&self) -> FormPayload {
        let mut payload = FormPayload::new(Self::FORM_NAME).field("email", &self.email);
        payload
            .fields
            .push(("password".to_string(), self.password.clone()));
        payload
    }
}

/// Author registration (`/signupForm`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub affiliation: String,
    pub password: String,
    pub confirm_password: String,
    pub accept_terms: bool,
}

impl FormModel for SignupForm {
    const FORM_NAME: &'static str = "signup";
    const SUCCESS_MESSAGE: &'static str = "Registration successful. You can now log in.";

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "full_name", "Full name", &self.full_name);
        require_email(&mut errors, "email", &self.email);
        require(&mut errors, "affiliation", "Affiliation", &self.affiliation);

        if self.password.is_empty() {
            errors.insert("password", "Password is required");
        } else if self.password.chars().count() < PASSWORD_MIN_CHARS {
            errors.insert(
                "password",
                format!("Password must be at least {PASSWORD_MIN_CHARS} characters"),
            );
        }
        if self.confirm_password != self.password {
            errors.insert("confirm_password", "Passwords do not match");
        }
        if !self.accept_terms {
            errors.insert("accept_terms", "You must accept the terms and conditions");
        }
        errors.into_result()
    }

    fn payload(&self) -> FormPayload {
        let mut payload = FormPayload::new(Self::FORM_NAME)
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("affiliation", &self.affiliation);
        payload
            .fields
            .push(("password".to_string(), self.password.clone()));
        payload
    }
}

/// Admin panel login (`/admin-login`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminLoginForm {
    pub email: String,
    pub password: String,
}

impl AdminLoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl FormModel for AdminLoginForm {
    const FORM_NAME: &'static str = "admin_login";
    const SUCCESS_MESSAGE: &'static str = "Welcome back.";

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require_email(&mut errors, "email", &self.email);
        if self.password.is_empty() {
            errors.insert("password", "Password is required");
        }
        errors.into_result()
    }

    fn payload(&self) -> FormPayload {
        FormPayload::new(Self::FORM_NAME).field("email", &self.email)
    }
}
