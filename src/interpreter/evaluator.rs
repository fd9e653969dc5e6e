/// Shared result type for the tokenizer, parser and evaluator.
pub mod core;

/// Binary arithmetic operators.
///
/// Applies `+`, `-`, `*`, `/` and `%` to two already evaluated operands.
pub mod binary;

/// Built-in functions.
///
/// Evaluates `sqrt`, `lg` and `fact` on one argument and `pow` and `log` on
/// two arguments.
pub mod function;
