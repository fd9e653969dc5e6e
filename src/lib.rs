//! # calcdescent
//!
//! calcdescent is an arithmetic expression evaluator written in Rust.
//! It tokenizes an expression with a single token of look-ahead and evaluates
//! it with a recursive-descent parser, computing each rule's value as it is
//! parsed. Supported are `+ - * / %`, parentheses, unary signs and the
//! functions `sqrt`, `lg`, `fact`, `pow` and `log`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::interpreter::{
    evaluator::core::EvalResult,
    parser::core::parse_and_evaluate,
    tokenizer::Tokenizer,
};

/// Line handling for the interactive command line tool.
///
/// Interprets a raw input line as a command (`help`, `quit`) or an expression
/// and formats results for display. The read loop itself lives in the binary.
pub mod cli;
/// Provides the error type for tokenizing and evaluation.
///
/// This module defines every error that can be raised while evaluating an
/// expression, from unknown symbols found by the tokenizer to syntax errors
/// and domain errors found by the parser.
///
/// # Responsibilities
/// - Defines the `EvalError` enum for all failure modes.
/// - Produces the human-readable messages shown to users.
/// - Integrates with `std::error::Error`.
pub mod error;
/// Tokenizer, parser and evaluation routines.
///
/// This module ties together lexing, look-ahead tokenizing and the
/// recursive-descent parser that evaluates as it parses.
///
/// # Responsibilities
/// - Splits input into tokens on demand.
/// - Parses the expression grammar with correct precedence and associativity.
/// - Applies arithmetic operators and built-in functions.
pub mod interpreter;
/// General numeric and logging utilities.
pub mod util;

/// Removes every whitespace character from `input`.
///
/// # Example
/// ```
/// use calcdescent::strip_whitespace;
///
/// assert_eq!(strip_whitespace(" pow( 2,\t10 ) "), "pow(2,10)");
/// ```
#[must_use]
pub fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Evaluates an arithmetic expression.
///
/// Whitespace is removed before tokenizing. Each call uses a fresh tokenizer,
/// so evaluating the same input twice always gives the same outcome.
/// Floating-point anomalies such as division by zero are returned as
/// infinities or `NaN`, not as errors.
///
/// Function names are matched case-sensitively against their lowercase forms.
///
/// # Errors
/// Returns the first tokenization or syntax error encountered; there is no
/// partial result.
///
/// # Examples
/// ```
/// use calcdescent::{error::EvalError, evaluate};
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(evaluate("fact(5)").unwrap(), 120.0);
///
/// // Missing closing parenthesis.
/// assert_eq!(evaluate("(2+3"), Err(EvalError::UnclosedParenthesis));
/// ```
pub fn evaluate(expression: &str) -> EvalResult<f64> {
    let source = strip_whitespace(expression);
    debug!("evaluating {source:?}");

    let result = Tokenizer::new(&source).and_then(|mut tokenizer| parse_and_evaluate(&mut tokenizer));
    match &result {
        Ok(value) => debug!("{source:?} evaluated to {value}"),
        Err(e) => debug!("{source:?} failed: {e}"),
    }
    result
}
