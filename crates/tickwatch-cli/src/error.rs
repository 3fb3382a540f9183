use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] tickwatch_core::ValidationError),

    #[error(transparent)]
    Repository(#[from] tickwatch_core::RepositoryError),

    #[error("'{value}' is not a valid {expected}")]
    InvalidNumber {
        value: String,
        expected: &'static str,
    },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::InvalidNumber { .. } => 2,
            Self::Repository(_) => 3,
            Self::Serialization(_) => 4,
            Self::Io(_) => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tickwatch_core::{RepositoryError, ValidationError};

    #[test]
    fn errors_keep_their_exit_category() {
        let invalid: CliError = ValidationError::EmptySymbol.into();
        assert_eq!(invalid.exit_code(), 2);

        let repository: CliError = RepositoryError::storage("disk full").into();
        assert_eq!(repository.exit_code(), 3);

        let number = CliError::InvalidNumber {
            value: String::from("abc"),
            expected: "price",
        };
        assert_eq!(number.exit_code(), 2);
    }
}
