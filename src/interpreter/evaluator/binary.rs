use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, operator::OperatorKind},
};

/// Applies an additive or multiplicative operator to two operands.
///
/// Floating-point anomalies are not errors: division by zero yields an
/// infinity or `NaN`, and `%` keeps the sign of the dividend.
///
/// # Parameters
/// - `op`: One of `+`, `-`, `*`, `/` or `%`.
/// - `first`: Left operand.
/// - `second`: Right operand.
///
/// # Errors
/// Returns [`EvalError::UnexpectedToken`] if `op` is not an arithmetic
/// operator.
///
/// # Example
/// ```
/// use calcdescent::interpreter::{evaluator::binary::apply_binary, operator::OperatorKind};
///
/// assert_eq!(apply_binary(OperatorKind::Minus, 8.0, 3.0).unwrap(), 5.0);
/// assert_eq!(apply_binary(OperatorKind::Remainder, -7.0, 3.0).unwrap(), -1.0);
/// assert!(apply_binary(OperatorKind::Divide, 1.0, 0.0).unwrap().is_infinite());
/// ```
pub fn apply_binary(op: OperatorKind, first: f64, second: f64) -> EvalResult<f64> {
    match op {
        OperatorKind::Plus => Ok(first + second),
        OperatorKind::Minus => Ok(first - second),
        OperatorKind::Multiply => Ok(first * second),
        OperatorKind::Divide => Ok(first / second),
        OperatorKind::Remainder => Ok(first % second),
        _ => Err(EvalError::UnexpectedToken { text: op.symbol().to_string() }),
    }
}
