/// Shared evaluation helpers.
///
/// Because values are computed while parsing, this module holds no tree
/// walker. It contains the arithmetic and the built-in functions that the
/// parser applies as soon as both operands of a rule are known.
///
/// # Responsibilities
/// - Applies binary operators with IEEE-754 semantics.
/// - Evaluates `sqrt`, `lg`, `fact`, `pow` and `log`.
/// - Defines the shared `EvalResult` type.
pub mod evaluator;
/// The lexer module splits source text into raw lexemes.
///
/// A `logos` lexer classifies maximal runs of characters as numerals, words or
/// single-character symbols. It does not decide whether a word is known.
pub mod lexer;
/// The fixed table of operators and function names.
pub mod operator;
/// The parser module implements the recursive descent.
///
/// Each grammar rule is a function over the tokenizer that returns the value
/// of the input it consumed.
///
/// # Responsibilities
/// - Gives `*`, `/` and `%` higher precedence than `+` and `-`.
/// - Folds operators of the same level left to right.
/// - Reports syntax errors at the point they are detected.
pub mod parser;
/// The tokenizer turns lexemes into tokens with a single look-ahead.
///
/// # Responsibilities
/// - Converts numeral runs into numbers and words into operators.
/// - Rejects unknown symbols as soon as they are scanned.
/// - Reports end of input as a terminal token.
pub mod tokenizer;
