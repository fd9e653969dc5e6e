/// Numeric helpers.
///
/// Small checks on `f64` values shared by the evaluator, such as deciding
/// whether a value is a whole number.
pub mod num;

/// Stderr logging for the command line tool.
///
/// Installs a `tracing-subscriber` formatter so that the `trace!` and
/// `debug!` events emitted by the tokenizer and evaluator can be inspected.
pub mod logging;
