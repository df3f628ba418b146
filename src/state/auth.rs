//! Login and signup form fields.
//!
//! Validation mirrors the `required` attributes on the inputs: every field
//! must be non-blank before anything is sent.

use crate::error::FormError;
use crate::models::{Credentials, NewAccount};

pub const LOGIN_SUCCESS: &str = "Login successful!";
pub const LOGIN_FAILED: &str = "Login failed";
pub const SIGNUP_SUCCESS: &str = "Signup successful";
pub const SIGNUP_FAILED: &str = "Signup failed";
pub const LOGOUT_SUCCESS: &str = "Logout Successful";

fn required(value: &str, field: &'static str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        Err(FormError::Blank(field))
    } else {
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<Credentials, FormError> {
        required(&self.email, "email")?;
        required(&self.password, "password")?;
        Ok(Credentials {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<NewAccount, FormError> {
        required(&self.name, "name")?;
        required(&self.email, "email")?;
        required(&self.password, "password")?;
        Ok(NewAccount {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
