use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

// Letters and spaces only, nothing else. An empty string does not match.
static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z ]+$").expect("name pattern is a valid regex")
});

/// Reasons user-supplied text was rejected before becoming a record.
/// The display text is the exact message the presentation layer surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid name.")]
    InvalidName,
    #[error("Please fill in both name and grade.")]
    EmptyField,
    #[error("Please enter a valid grade.")]
    InvalidGrade,
}

pub fn validate_name(text: &str) -> Result<String, ValidationError> {
    if NAME_PATTERN.is_match(text) {
        Ok(text.to_string())
    } else {
        Err(ValidationError::InvalidName)
    }
}

pub fn validate_grade(name_text: &str, grade_text: &str) -> Result<i32, ValidationError> {
    if name_text.is_empty() || grade_text.is_empty() {
        return Err(ValidationError::EmptyField);
    }

    grade_text
        .parse::<i32>()
        .map_err(|_| ValidationError::InvalidGrade)
}

/// Checks run in the same order the original form applied them: name
/// pattern first, then the empty-field check, then the grade parse. A
/// blank name therefore reports `InvalidName`, never `EmptyField`.
pub fn validate_entry(
    name_text: &str,
    grade_text: &str,
) -> Result<(String, i32), ValidationError> {
    let name = validate_name(name_text)?;
    let grade = validate_grade(name_text, grade_text)?;

    Ok((name, grade))
}
