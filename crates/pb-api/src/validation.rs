use crate::error::ApiError;

/// Validate a subject name from a submission payload.
///
/// Subjects are free-form but bounded: non-empty, at most 100 characters
/// (the column width), and no HTML/script characters since they are echoed
/// back on display surfaces.
pub fn validate_subject(subject: &str) -> Result<(), ApiError> {
    if subject.trim().is_empty() {
        return Err(ApiError::Validation("Subject cannot be empty".to_string()));
    }

    if subject.len() > 100 {
        return Err(ApiError::Validation(
            "Subject must be at most 100 characters long".to_string(),
        ));
    }

    if !subject
        .chars()
        .all(|c| c.is_alphanumeric() || c.is_whitespace() || c == '-' || c == '&')
    {
        return Err(ApiError::Validation(
            "Subject can only contain letters, numbers, spaces, hyphens, and ampersands"
                .to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_normal_subjects() {
        assert!(validate_subject("Physics").is_ok());
        assert!(validate_subject("General Knowledge").is_ok());
        assert!(validate_subject("Maths & Reasoning").is_ok());
    }

    #[test]
    fn rejects_empty_subject() {
        assert!(validate_subject("").is_err());
        assert!(validate_subject("   ").is_err());
    }

    #[test]
    fn rejects_overlong_subject() {
        assert!(validate_subject(&"x".repeat(101)).is_err());
    }

    #[test]
    fn rejects_markup() {
        assert!(validate_subject("<script>alert(1)</script>").is_err());
    }
}
