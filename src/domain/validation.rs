use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    UnknownIsoCountry { code: String },
    InvalidTimeout { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::UnknownIsoCountry { code } => write!(f, "unknown ISO country code: {code}"),
            Self::InvalidTimeout { input } => {
                write!(f, "invalid timeout: {input} (expected whole seconds)")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "token" };
        assert_eq!(err.to_string(), "token must not be empty");

        let err = ValidationError::UnknownIsoCountry {
            code: "ZZ".to_owned(),
        };
        assert_eq!(err.to_string(), "unknown ISO country code: ZZ");

        let err = ValidationError::InvalidTimeout {
            input: "soon".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "invalid timeout: soon (expected whole seconds)"
        );
    }
}
