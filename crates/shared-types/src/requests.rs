use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

/// Message shown when either sign-in field is left empty.
pub const MISSING_CREDENTIALS_MESSAGE: &str = "Please enter both username and password";

/// Sign-in form submission. Only non-emptiness is checked; nothing is verified.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct SignInRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Please enter both username and password"))
    )]
    pub username: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Please enter both username and password"))
    )]
    pub password: String,
}

impl SignInRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}
