//! Error type shared by every fallible operation on [`Ratio`](crate::Ratio).

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = FractionError> = core::result::Result<T, E>;

/// Failure of a fraction operation.
///
/// Every variant reflects a mathematical impossibility or a representational
/// limit of the stored integer width, so retrying with the same inputs always
/// fails again.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FractionError {
    /// A zero denominator was supplied, or a zero value was divided by or inverted.
    #[error("zero denominator in fraction")]
    DivisionByZero,

    /// An exact result does not fit the stored integer width.
    #[error("overflow: fraction does not fit the stored integer width")]
    Overflow,

    /// No convergent came within epsilon of the value in the allowed number of steps.
    #[error("unable to convert {value} to fraction after {max_iterations} iterations")]
    ConversionFailed { value: f64, max_iterations: u32 },

    /// A convergent overflowed before the stopping rule was satisfied.
    #[error("overflow trying to convert {value} to fraction ({numerator}/{denominator})")]
    ConversionOverflow {
        value: f64,
        numerator: i128,
        denominator: i128,
    },

    /// A parameter lies outside the domain of the operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_diagnostics() {
        let failed = FractionError::ConversionFailed {
            value: 0.5,
            max_iterations: 3,
        };
        assert_eq!(
            failed.to_string(),
            "unable to convert 0.5 to fraction after 3 iterations"
        );

        let overflow = FractionError::ConversionOverflow {
            value: 1e10,
            numerator: 10_000_000_000,
            denominator: 1,
        };
        assert_eq!(
            overflow.to_string(),
            "overflow trying to convert 10000000000 to fraction (10000000000/1)"
        );
    }

    #[test]
    fn test_invalid_argument_message() {
        let err = FractionError::InvalidArgument("epsilon must be non-negative".into());
        assert_eq!(err.to_string(), "invalid argument: epsilon must be non-negative");
    }
}
