/// Every operator, punctuation symbol and function name the tokenizer knows.
///
/// The kinds fall into grammar roles (additive, multiplicative, grouping,
/// unary function, binary function) but are kept in one flat enum. Which kinds
/// are legal at a given position is decided by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Remainder,
    /// `(`
    ParenOpen,
    /// `)`
    ParenClose,
    /// `,`
    Comma,
    /// `sqrt`
    Sqrt,
    /// `lg`
    Lg,
    /// `fact`
    Fact,
    /// `pow`
    Pow,
    /// `log`
    Log,
}

/// Operators that may follow a term: `+` and `-`.
pub const ADDITIVE: &[OperatorKind] = &[OperatorKind::Plus, OperatorKind::Minus];
/// Operators that may follow a unary expression: `*`, `/` and `%`.
pub const MULTIPLICATIVE: &[OperatorKind] =
    &[OperatorKind::Multiply, OperatorKind::Divide, OperatorKind::Remainder];
/// Functions taking one parenthesized argument.
pub const UNARY_FUNCTIONS: &[OperatorKind] =
    &[OperatorKind::Sqrt, OperatorKind::Lg, OperatorKind::Fact];
/// Functions taking two comma-separated arguments.
pub const BINARY_FUNCTIONS: &[OperatorKind] = &[OperatorKind::Pow, OperatorKind::Log];

impl OperatorKind {
    /// Looks a symbol up in the fixed operator table.
    ///
    /// Matching is case-sensitive; function names are lowercase.
    ///
    /// # Example
    /// ```
    /// use calcdescent::interpreter::operator::OperatorKind;
    ///
    /// assert_eq!(OperatorKind::from_symbol("sqrt"), Some(OperatorKind::Sqrt));
    /// assert_eq!(OperatorKind::from_symbol("%"), Some(OperatorKind::Remainder));
    /// assert_eq!(OperatorKind::from_symbol("SQRT"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let kind = match symbol {
            "+" => Self::Plus,
            "-" => Self::Minus,
            "*" => Self::Multiply,
            "/" => Self::Divide,
            "%" => Self::Remainder,
            "(" => Self::ParenOpen,
            ")" => Self::ParenClose,
            "," => Self::Comma,
            "sqrt" => Self::Sqrt,
            "lg" => Self::Lg,
            "fact" => Self::Fact,
            "pow" => Self::Pow,
            "log" => Self::Log,
            _ => return None,
        };
        Some(kind)
    }

    /// Returns the source text of this operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Remainder => "%",
            Self::ParenOpen => "(",
            Self::ParenClose => ")",
            Self::Comma => ",",
            Self::Sqrt => "sqrt",
            Self::Lg => "lg",
            Self::Fact => "fact",
            Self::Pow => "pow",
            Self::Log => "log",
        }
    }
}

impl std::fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
