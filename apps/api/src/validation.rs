//! Form validation shared by the candidate and company endpoints.
//!
//! Rules collect every failure instead of stopping at the first, so a client can
//! highlight all offending fields at once.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::AppError;

#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<String>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(&mut self, label: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.errors.push(format!("{label} is required"));
        }
        self
    }

    /// Checks the format only when a value is present; pair with `required` as needed.
    pub fn email(&mut self, label: &str, value: &str) -> &mut Self {
        if !value.is_empty() && !is_valid_email(value) {
            self.errors.push(format!("{label}: Invalid email address"));
        }
        self
    }

    pub fn phone(&mut self, label: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            if !is_valid_phone(value) {
                self.errors.push(format!("{label}: Invalid phone number"));
            }
        }
        self
    }

    pub fn range(&mut self, label: &str, value: Option<i64>, min: i64, max: i64) -> &mut Self {
        if let Some(v) = value {
            if v < min || v > max {
                self.errors
                    .push(format!("{label} must be between {min} and {max}"));
            }
        }
        self
    }

    pub fn finish(&self) -> Result<(), AppError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self.errors.join("; ")))
        }
    }
}

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Email pattern must compile")
});

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+]?[(]?[0-9]{3}[)]?[-\s.]?[0-9]{3}[-\s.]?[0-9]{4,6}$")
        .expect("Phone pattern must compile")
});

/// `local@domain.tld`: one `@`, no whitespace, and a dot strictly inside the domain.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Optional `+`, area code (parentheses optional), three digits, then four to six
/// digits. Groups may be split by a single `-`, whitespace, or `.`.
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_REGEX.is_match(value)
}
