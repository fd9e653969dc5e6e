/// Evaluation errors.
///
/// Defines every failure that can be raised while tokenizing, parsing or
/// evaluating an expression. Tokenization failures (an unknown symbol) and
/// syntax failures share one enum so that callers only deal with a single
/// error type.
pub mod eval_error;

pub use eval_error::EvalError;
