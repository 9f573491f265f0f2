//! Declarative submission constraints. Failures are field-scoped and
//! collected rather than short-circuited, so a caller can surface every
//! problem in one pass.

use serde::Serialize;

use super::domain::OrderSubmission;
use super::rules::{legal_materials, legal_sizes};

/// A single field-scoped validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        FieldError {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validation outcome blocking a submission. Nothing is persisted when this
/// is raised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("order submission rejected ({} field error(s))", .errors.len())]
pub struct SubmissionRejected {
    pub errors: Vec<FieldError>,
}

impl SubmissionRejected {
    pub fn field(&self, name: &str) -> Option<&FieldError> {
        self.errors.iter().find(|error| error.field == name)
    }
}

const SPELLING_MESSAGE: &str = "You must confirm the spelling";

pub fn validate_submission(submission: &OrderSubmission) -> Result<(), SubmissionRejected> {
    let mut errors = Vec::new();

    if submission.customer_name.trim().is_empty() {
        errors.push(FieldError::new("customer_name", "Customer name is required"));
    }

    if submission.phone_number.trim().is_empty() {
        errors.push(FieldError::new("phone_number", "Phone number is required"));
    }

    if let Some(email) = submission.email.as_deref() {
        if !email.trim().is_empty() && !is_valid_email(email.trim()) {
            errors.push(FieldError::new("email", "Enter a valid email address"));
        }
    }

    if submission.tags.is_empty() {
        errors.push(FieldError::new("tags", "At least one tag is required"));
    }

    for (index, tag) in submission.tags.iter().enumerate() {
        if tag.pet_name.trim().is_empty() {
            errors.push(FieldError::new(
                format!("tags[{index}].pet_name"),
                "Pet name is required",
            ));
        }
        if tag.shape.trim().is_empty() {
            errors.push(FieldError::new(
                format!("tags[{index}].shape"),
                "Shape is required",
            ));
        }
        if tag.front_line_1.trim().is_empty() {
            errors.push(FieldError::new(
                format!("tags[{index}].front_line_1"),
                "Front line 1 is required",
            ));
        }
        if tag.back_line_1.trim().is_empty() {
            errors.push(FieldError::new(
                format!("tags[{index}].back_line_1"),
                "Back line 1 is required",
            ));
        }
        if !legal_materials(&tag.shape).contains(&tag.material) {
            errors.push(FieldError::new(
                format!("tags[{index}].material"),
                format!(
                    "{} is not available for {} tags",
                    tag.material.label(),
                    tag.shape
                ),
            ));
        }
        if !legal_sizes(&tag.shape).contains(&tag.size) {
            errors.push(FieldError::new(
                format!("tags[{index}].size"),
                format!("{} is not available for {} tags", tag.size.label(), tag.shape),
            ));
        }
    }

    if !submission.spelling_confirmed {
        errors.push(FieldError::new("spelling_confirmed", SPELLING_MESSAGE));
    }

    if submission.signature.trim().is_empty() {
        errors.push(FieldError::new("signature", "Signature is required"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(SubmissionRejected { errors })
    }
}

fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        _ => false,
    }
}
