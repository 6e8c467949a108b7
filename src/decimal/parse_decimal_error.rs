use thiserror::Error;

/// Error returned when a string is not, in its entirety, a decimal number.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseDecimalError {
    #[error("cannot parse decimal from a string without digits")]
    Empty,

    #[error("invalid character at byte {position}")]
    InvalidDigit { position: usize },
}
