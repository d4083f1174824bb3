use std::fmt;

use crate::models::category::{CreateCategoryRequest, UpdateCategoryRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

// Errores de validación por campo; se traducen a 400
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for ValidationError {}

pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

// Reglas de "name": required + min=1 (sin contar espacios)
fn check_name(name: Option<&str>, errors: &mut ValidationError) {
    match name {
        None => errors.add("name", "name is required"),
        Some(name) if name.trim().is_empty() => errors.add("name", "name must not be empty"),
        Some(_) => {}
    }
}

impl Validate for CreateCategoryRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();
        check_name(self.name.as_deref(), &mut errors);
        errors.into_result()
    }
}

impl Validate for UpdateCategoryRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();
        check_name(self.name.as_deref(), &mut errors);
        errors.into_result()
    }
}
