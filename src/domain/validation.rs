use crate::errors::{FieldError, ServerError};

/// Collects every field problem of a payload so the caller sees them all at once.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required<T>(&mut self, field: &str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.errors.push(FieldError::new(field, "Required"));
        }
        value
    }

    /// Required and non-blank. The value is returned trimmed.
    pub fn required_text(&mut self, field: &str, value: Option<String>) -> Option<String> {
        match value.map(|v| v.trim().to_string()) {
            Some(v) if !v.is_empty() => Some(v),
            Some(_) => {
                self.errors.push(FieldError::new(field, "Must not be empty"));
                None
            }
            None => {
                self.errors.push(FieldError::new(field, "Required"));
                None
            }
        }
    }

    /// Optional, but if present it must not be blank.
    pub fn optional_text(&mut self, field: &str, value: Option<String>) -> Option<String> {
        let value = value.map(|v| v.trim().to_string());
        if matches!(value.as_deref(), Some("")) {
            self.errors.push(FieldError::new(field, "Must not be empty"));
            return None;
        }
        value
    }

    pub fn check(&mut self, ok: bool, field: &str, message: &str) {
        if !ok {
            self.errors.push(FieldError::new(field, message));
        }
    }

    pub fn min_i64(&mut self, field: &str, value: Option<i64>, min: i64) {
        if let Some(v) = value {
            self.check(v >= min, field, &format!("Must be at least {min}"));
        }
    }

    pub fn max_i64(&mut self, field: &str, value: Option<i64>, max: i64) {
        if let Some(v) = value {
            self.check(v <= max, field, &format!("Must be at most {max}"));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// `Ok(())` when nothing was recorded, otherwise a 400-mapped error.
    pub fn finish(self, subject: &str) -> Result<(), ServerError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ServerError::validation(subject, self.errors))
        }
    }
}
