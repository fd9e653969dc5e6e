use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{binary::apply_binary, core::EvalResult},
        operator::ADDITIVE,
        parser::group::parse_group,
        tokenizer::Tokenizer,
    },
};

/// Parses an optionally signed factor.
///
/// A leading sign is evaluated as `0 + factor` or `0 - factor`. Only one sign
/// is accepted: the factor that follows cannot start with another sign, so
/// `--1` fails with [`EvalError::NumberExpected`].
///
/// Grammar:
/// ```text
///     unary := ("+" | "-")? factor
/// ```
pub fn parse_unary(tokenizer: &mut Tokenizer<'_>) -> EvalResult<f64> {
    if tokenizer.peek_is_operator(ADDITIVE) {
        let sign = tokenizer.pop_operator()?;
        let factor = parse_factor(tokenizer)?;
        return apply_binary(sign, 0.0, factor);
    }
    parse_factor(tokenizer)
}

/// Parses a number or a group.
///
/// Grammar:
/// ```text
///     factor := number | group
/// ```
///
/// # Errors
/// Returns [`EvalError::NumberExpected`] if the look-ahead starts neither.
pub fn parse_factor(tokenizer: &mut Tokenizer<'_>) -> EvalResult<f64> {
    if tokenizer.peek_is_number() {
        return tokenizer.pop_number();
    }
    parse_group(tokenizer)?.ok_or(EvalError::NumberExpected)
}
