/// Entry points of the recursive descent.
///
/// Parses a whole expression and checks that no input is left over.
pub mod core;

/// Binary operator levels.
///
/// Implements `Expr`/`ExprTail` and `Term`/`TermTail`, folding operators
/// left to right as they are parsed.
pub mod binary;

/// Unary signs and factors.
///
/// Implements `Unary` and `Factor`.
pub mod unary;

/// Parenthesized groups and function calls.
pub mod group;
