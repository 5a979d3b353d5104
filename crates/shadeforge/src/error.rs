use thiserror::Error;

pub type Result<T> = std::result::Result<T, ColorError>;

/// Failures raised at a color parse boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid color format {input:?}: {reason}")]
    InvalidColorFormat { input: String, reason: &'static str },
}

impl ColorError {
    #[must_use]
    pub fn invalid(input: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidColorFormat {
            input: input.into(),
            reason,
        }
    }

    /// The rejected input text.
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidColorFormat { input, .. } => input,
        }
    }
}

/// A string that is not one of the ten shade labels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown shade key {0:?}")]
pub struct UnknownShadeKey(pub String);

#[cfg(test)]
mod tests {
    use super::ColorError;

    #[test]
    fn invalid_constructor_preserves_input_and_reason() {
        let error = ColorError::invalid("#12", "expected 3 or 6 hex digits");
        assert_eq!(error.input(), "#12");
        assert_eq!(
            error.to_string(),
            "invalid color format \"#12\": expected 3 or 6 hex digits"
        );
    }
}
