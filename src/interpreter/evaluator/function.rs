use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, operator::OperatorKind},
    util::num::{MAX_FINITE_FACTORIAL, is_integral},
};

/// Applies `sqrt`, `lg` or `fact` to its argument.
///
/// Out-of-domain inputs to `sqrt` and `lg` produce `NaN` or an infinity
/// rather than an error.
///
/// # Errors
/// - [`EvalError::IntegerExpected`] from `fact` on a non-integral argument.
/// - [`EvalError::UnexpectedToken`] if `op` is not a unary function.
pub fn apply_unary_function(op: OperatorKind, argument: f64) -> EvalResult<f64> {
    match op {
        OperatorKind::Sqrt => Ok(argument.sqrt()),
        OperatorKind::Lg => Ok(argument.log10()),
        OperatorKind::Fact => factorial(argument),
        _ => Err(EvalError::UnexpectedToken { text: op.symbol().to_string() }),
    }
}

/// Applies `pow` or `log` to its two arguments.
///
/// - `pow(base, exponent)` is `base ^ exponent`.
/// - `log(base, value)` is `ln(value) / ln(base)`.
///
/// # Errors
/// Returns [`EvalError::UnexpectedToken`] if `op` is not a binary function.
///
/// # Example
/// ```
/// use calcdescent::interpreter::{evaluator::function::apply_binary_function,
///                                operator::OperatorKind};
///
/// assert_eq!(apply_binary_function(OperatorKind::Pow, 2.0, 10.0).unwrap(), 1024.0);
/// let three = apply_binary_function(OperatorKind::Log, 2.0, 8.0).unwrap();
/// assert!((three - 3.0).abs() < 1e-12);
/// ```
pub fn apply_binary_function(op: OperatorKind, first: f64, second: f64) -> EvalResult<f64> {
    match op {
        OperatorKind::Pow => Ok(first.powf(second)),
        OperatorKind::Log => Ok(second.ln() / first.ln()),
        _ => Err(EvalError::UnexpectedToken { text: op.symbol().to_string() }),
    }
}

/// Computes `n!` as the product `2 * 3 * ... * n`.
///
/// `0!`, `1!` and negative integers all give `1`. Arguments above `170`
/// overflow to infinity.
///
/// # Errors
/// Returns [`EvalError::IntegerExpected`] if `n` has a fractional part or is
/// not finite.
///
/// # Example
/// ```
/// use calcdescent::{error::EvalError, interpreter::evaluator::function::factorial};
///
/// assert_eq!(factorial(5.0).unwrap(), 120.0);
/// assert_eq!(factorial(0.0).unwrap(), 1.0);
/// assert_eq!(factorial(2.5), Err(EvalError::IntegerExpected));
/// ```
pub fn factorial(n: f64) -> EvalResult<f64> {
    if !is_integral(n) {
        return Err(EvalError::IntegerExpected);
    }
    if n > MAX_FINITE_FACTORIAL {
        return Ok(f64::INFINITY);
    }

    let mut product = 1.0;
    let mut factor = 2.0;
    while factor <= n {
        product *= factor;
        factor += 1.0;
    }
    Ok(product)
}
