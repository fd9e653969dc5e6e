use tracing::debug;

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::EvalResult,
        parser::binary::{parse_expression_tail, parse_term},
        tokenizer::Tokenizer,
    },
};

/// Parses and evaluates a complete expression.
///
/// Parsing and evaluation happen in a single pass: every grammar rule returns
/// the value of the input it matched, so no syntax tree is built.
///
/// Grammar: `input := expression <end>`
///
/// # Errors
/// - Any error raised while parsing the expression.
/// - [`EvalError::UnexpectedToken`] if input remains after the expression.
///
/// # Example
/// ```
/// use calcdescent::interpreter::{parser::core::parse_and_evaluate, tokenizer::Tokenizer};
///
/// let mut tokenizer = Tokenizer::new("2+3*4").unwrap();
/// assert_eq!(parse_and_evaluate(&mut tokenizer).unwrap(), 14.0);
/// ```
pub fn parse_and_evaluate(tokenizer: &mut Tokenizer<'_>) -> EvalResult<f64> {
    let value = parse_expression(tokenizer)?;
    if !tokenizer.is_at_end() {
        let text = tokenizer.peek_text();
        debug!("trailing input starting at {text:?}");
        return Err(EvalError::UnexpectedToken { text: text.to_string() });
    }
    Ok(value)
}

/// Parses an expression: a term followed by any number of `+`/`-` terms.
///
/// This is the lowest precedence level and the rule re-entered by
/// parenthesized groups and function arguments.
///
/// Grammar: `expression := term expression_tail`
pub fn parse_expression(tokenizer: &mut Tokenizer<'_>) -> EvalResult<f64> {
    let term = parse_term(tokenizer)?;
    parse_expression_tail(tokenizer, term)
}
