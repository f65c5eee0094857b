use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl EngineError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        EngineError::InvalidInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;

/// Reject zero, negative, NaN and infinite values for prices and capital.
pub fn ensure_positive(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(EngineError::invalid(format!(
            "{} must be a positive number, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Reject negative, NaN and infinite counts and volumes.
pub fn ensure_non_negative(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(EngineError::invalid(format!(
            "{} must be zero or greater, got {}",
            name, value
        )));
    }
    Ok(())
}
