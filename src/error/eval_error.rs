#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression.
pub enum EvalError {
    /// The tokenizer scanned text that is neither a numeral nor a known
    /// operator or function name.
    UnknownOperator {
        /// The unrecognized text.
        text: String,
    },
    /// An opening parenthesis was not matched by a closing one.
    UnclosedParenthesis,
    /// A number or parenthesized expression was expected but not found.
    NumberExpected,
    /// `pow` or `log` was called without a comma-separated second argument.
    SecondParameterExpected,
    /// A function name was not immediately followed by `(`.
    ParenthesizedEquationExpected,
    /// `fact` was applied to a value with a fractional part.
    IntegerExpected,
    /// Parentheses were nested deeper than the parser allows.
    NestingTooDeep {
        /// The deepest nesting accepted.
        limit: usize,
    },
    /// A complete expression was followed by more input.
    UnexpectedToken {
        /// The first leftover token.
        text: String,
    },
}

impl EvalError {
    /// Returns `true` for failures raised by the tokenizer rather than by the
    /// parser.
    ///
    /// # Example
    /// ```
    /// use calcdescent::error::EvalError;
    ///
    /// let err = EvalError::UnknownOperator { text: "@".to_string() };
    /// assert!(err.is_tokenization_error());
    /// assert!(!EvalError::NumberExpected.is_tokenization_error());
    /// ```
    #[must_use]
    pub const fn is_tokenization_error(&self) -> bool {
        matches!(self, Self::UnknownOperator { .. })
    }

    const fn description(&self) -> &'static str {
        match self {
            Self::UnknownOperator { .. } => "unknown operator",
            Self::UnclosedParenthesis => "unclosed parenthesis",
            Self::NumberExpected => "number expected",
            Self::SecondParameterExpected => "second parameter expected",
            Self::ParenthesizedEquationExpected => "parenthesized equation expected",
            Self::IntegerExpected => "integer expected",
            Self::NestingTooDeep { .. } => "parentheses nested too deeply",
            Self::UnexpectedToken { .. } => "unexpected token",
        }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownOperator { text } => {
                write!(f, "Semantic error: {} \"{text}\".", self.description())
            },

            Self::UnexpectedToken { text } => {
                write!(f, "Syntax error: {} \"{text}\".", self.description())
            },

            Self::NestingTooDeep { limit } => {
                write!(f, "Syntax error: {} (limit {limit}).", self.description())
            },

            _ => write!(f, "Syntax error: {}.", self.description()),
        }
    }
}

impl std::error::Error for EvalError {}
