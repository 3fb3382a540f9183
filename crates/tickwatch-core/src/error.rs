use thiserror::Error;

/// Rejected input at a domain boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be blank")]
    EmptySymbol,

    #[error("unknown market '{value}' (expected US, JP or HK)")]
    InvalidMarket { value: String },

    #[error("quote {field} must be a finite number")]
    NonFiniteValue { field: &'static str },

    #[error("quote {field} cannot be negative")]
    NegativeValue { field: &'static str },
}
