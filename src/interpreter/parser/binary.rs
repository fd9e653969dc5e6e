use crate::interpreter::{
    evaluator::{binary::apply_binary, core::EvalResult},
    operator::{ADDITIVE, MULTIPLICATIVE},
    parser::unary::parse_unary,
    tokenizer::Tokenizer,
};

/// Continues an expression after its first term.
///
/// `left` is the value accumulated so far. Each `+` or `-` folds the next term
/// into it, which makes the operators left-associative: `8-3-2` is
/// `(8-3)-2`. The repetition is a loop, so long chains use constant stack.
///
/// The rule is: `expression_tail := ("+" | "-") term expression_tail | ε`
///
/// # Parameters
/// - `tokenizer`: Tokenizer positioned after the left operand.
/// - `left`: Value of everything parsed so far at this level.
///
/// # Returns
/// The value of the whole additive chain.
pub fn parse_expression_tail(tokenizer: &mut Tokenizer<'_>, mut left: f64) -> EvalResult<f64> {
    while tokenizer.peek_is_operator(ADDITIVE) {
        let op = tokenizer.pop_operator()?;
        let right = parse_term(tokenizer)?;
        left = apply_binary(op, left, right)?;
    }
    Ok(left)
}

/// Parses a term: a unary expression followed by any number of `*`, `/` or
/// `%` operands.
///
/// The rule is: `term := unary term_tail`
pub fn parse_term(tokenizer: &mut Tokenizer<'_>) -> EvalResult<f64> {
    let unary = parse_unary(tokenizer)?;
    parse_term_tail(tokenizer, unary)
}

/// Continues a term after its first operand.
///
/// Same folding as [`parse_expression_tail`], one precedence level higher.
///
/// The rule is: `term_tail := ("*" | "/" | "%") unary term_tail | ε`
pub fn parse_term_tail(tokenizer: &mut Tokenizer<'_>, mut left: f64) -> EvalResult<f64> {
    while tokenizer.peek_is_operator(MULTIPLICATIVE) {
        let op = tokenizer.pop_operator()?;
        let right = parse_unary(tokenizer)?;
        left = apply_binary(op, left, right)?;
    }
    Ok(left)
}
