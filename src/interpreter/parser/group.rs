use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            function::{apply_binary_function, apply_unary_function},
        },
        operator::{BINARY_FUNCTIONS, OperatorKind, UNARY_FUNCTIONS},
        parser::core::parse_expression,
        tokenizer::Tokenizer,
    },
};

/// Deepest parenthesis nesting accepted. Each level re-enters the descent, so
/// the bound keeps recursion within a small, fixed amount of stack.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Parses a parenthesized expression or a function call.
///
/// Grammar:
/// ```text
///     group := "(" expression ")"
///            | ("sqrt" | "lg" | "fact") "(" expression ")"
///            | ("pow" | "log") "(" expression "," expression ")"
/// ```
///
/// # Returns
/// - `Ok(Some(value))` if a group was parsed.
/// - `Ok(None)` if the look-ahead does not start a group; nothing is consumed.
///
/// # Errors
/// - [`EvalError::ParenthesizedEquationExpected`] if a function name is not
///   followed by `(`.
/// - [`EvalError::SecondParameterExpected`] if `pow` or `log` lacks a `,`.
/// - [`EvalError::UnclosedParenthesis`] if the closing `)` is missing.
/// - [`EvalError::NestingTooDeep`] past [`MAX_NESTING_DEPTH`] open groups.
/// - Errors from the function itself, such as `fact(2.5)`.
pub fn parse_group(tokenizer: &mut Tokenizer<'_>) -> EvalResult<Option<f64>> {
    if tokenizer.peek_is_operator(&[OperatorKind::ParenOpen]) {
        tokenizer.pop_operator()?;
        check_nesting(tokenizer)?;
        let value = parse_expression(tokenizer)?;
        expect_closing_paren(tokenizer)?;
        return Ok(Some(value));
    }

    if tokenizer.peek_is_operator(UNARY_FUNCTIONS) {
        let function = tokenizer.pop_operator()?;
        expect_opening_paren(tokenizer)?;
        let argument = parse_expression(tokenizer)?;
        expect_closing_paren(tokenizer)?;
        return apply_unary_function(function, argument).map(Some);
    }

    if tokenizer.peek_is_operator(BINARY_FUNCTIONS) {
        let function = tokenizer.pop_operator()?;
        expect_opening_paren(tokenizer)?;
        let first = parse_expression(tokenizer)?;
        if !tokenizer.peek_is_operator(&[OperatorKind::Comma]) {
            return Err(EvalError::SecondParameterExpected);
        }
        tokenizer.pop_operator()?;
        let second = parse_expression(tokenizer)?;
        expect_closing_paren(tokenizer)?;
        return apply_binary_function(function, first, second).map(Some);
    }

    Ok(None)
}

fn expect_opening_paren(tokenizer: &mut Tokenizer<'_>) -> EvalResult<()> {
    if !tokenizer.peek_is_operator(&[OperatorKind::ParenOpen]) {
        return Err(EvalError::ParenthesizedEquationExpected);
    }
    tokenizer.pop_operator()?;
    check_nesting(tokenizer)
}

fn check_nesting(tokenizer: &Tokenizer<'_>) -> EvalResult<()> {
    if tokenizer.open_groups() > MAX_NESTING_DEPTH {
        return Err(EvalError::NestingTooDeep { limit: MAX_NESTING_DEPTH });
    }
    Ok(())
}

fn expect_closing_paren(tokenizer: &mut Tokenizer<'_>) -> EvalResult<()> {
    if !tokenizer.peek_is_operator(&[OperatorKind::ParenClose]) {
        return Err(EvalError::UnclosedParenthesis);
    }
    tokenizer.pop_operator()?;
    Ok(())
}
