use thiserror::Error;

/// Engine-level error type.
///
/// Scoring itself never fails; these cover the boundaries where the caller
/// hands over raw input that cannot be turned into something scorable.
#[derive(Debug, Error)]
pub enum AtsError {
    #[error("Invalid resume record: {0}")]
    InvalidResume(#[from] serde_json::Error),

    #[error("Resume record must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("Markup too large: {actual} bytes exceeds the {limit} byte limit")]
    MarkupTooLarge { actual: usize, limit: usize },
}

impl AtsError {
    /// Stable machine-readable code for callers that surface errors over a wire.
    pub fn code(&self) -> &'static str {
        match self {
            AtsError::InvalidResume(_) => "INVALID_RESUME",
            AtsError::NotAnObject(_) => "RESUME_NOT_OBJECT",
            AtsError::MarkupTooLarge { .. } => "MARKUP_TOO_LARGE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_resume_from_serde() {
        let err: AtsError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert_eq!(err.code(), "INVALID_RESUME");
        assert!(err.to_string().starts_with("Invalid resume record"));
    }

    #[test]
    fn test_markup_too_large_message() {
        let err = AtsError::MarkupTooLarge {
            actual: 10,
            limit: 5,
        };
        assert_eq!(err.code(), "MARKUP_TOO_LARGE");
        assert_eq!(
            err.to_string(),
            "Markup too large: 10 bytes exceeds the 5 byte limit"
        );
    }
}
