use thiserror::Error;

pub type LmResult<T> = Result<T, LmError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LmError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Value for {what} must be strictly positive, got {value}")]
    NonPositive { what: &'static str, value: f64 },
}
