use crate::strip_whitespace;

/// Text printed by the `help` command and when the read loop starts.
pub const HELP_TEXT: &str = "options: help, quit; available operators: + - * / % ( )\n\
                             functions: sqrt(x), lg(x), fact(int), pow(base,power), log(base,value)";

/// What a line typed at the prompt asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// The line held only whitespace.
    Empty,
    /// Print the help text.
    Help,
    /// Leave the read loop.
    Quit,
    /// Evaluate the normalized expression.
    Evaluate(String),
}

/// Normalizes a raw input line and decides what it asks for.
///
/// Whitespace is removed and the line is lowercased, so `  QUIT ` quits and
/// `SQRT(4)` is evaluated as `sqrt(4)`.
///
/// # Example
/// ```
/// use calcdescent::cli::{Command, interpret_line};
///
/// assert_eq!(interpret_line("  "), Command::Empty);
/// assert_eq!(interpret_line("Help"), Command::Help);
/// assert_eq!(interpret_line("2 + Sqrt(4)"), Command::Evaluate("2+sqrt(4)".to_string()));
/// ```
#[must_use]
pub fn interpret_line(line: &str) -> Command {
    let normalized = strip_whitespace(line).to_lowercase();
    match normalized.as_str() {
        "" => Command::Empty,
        "help" => Command::Help,
        "quit" => Command::Quit,
        _ => Command::Evaluate(normalized),
    }
}

/// Formats a result for display.
///
/// Whole numbers print without decimals; everything else uses the standard
/// `f64` formatting.
///
/// # Example
/// ```
/// use calcdescent::cli::format_result;
///
/// assert_eq!(format_result(120.0), "120");
/// assert_eq!(format_result(-3.0), "-3");
/// assert_eq!(format_result(2.5), "2.5");
/// assert_eq!(format_result(f64::NAN), "NaN");
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn format_result(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}
