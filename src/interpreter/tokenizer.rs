use tracing::trace;
use logos::{Lexer, Logos};

use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, lexer::Lexeme, operator::OperatorKind},
};

/// A token as seen by the parser.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A numeric literal.
    Number(f64),
    /// An operator, punctuation symbol or function name.
    Operator(OperatorKind),
    /// No input is left.
    End,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::End => f.write_str("end of input"),
        }
    }
}

/// Incremental tokenizer holding exactly one look-ahead token.
///
/// The input must already have its whitespace removed. Tokens are produced on
/// demand: the next run of input is only scanned when the current look-ahead
/// is popped, so an unknown symbol can surface in the middle of parsing.
///
/// Once the input is exhausted the look-ahead stays [`Token::End`] and every
/// `peek_is_*` query returns `false`.
///
/// # Example
/// ```
/// use calcdescent::interpreter::{operator::OperatorKind, tokenizer::Tokenizer};
///
/// let mut tokenizer = Tokenizer::new("2.5*sqrt").unwrap();
/// assert!(tokenizer.peek_is_number());
/// assert_eq!(tokenizer.pop_number().unwrap(), 2.5);
/// assert!(tokenizer.peek_is_operator(&[OperatorKind::Plus, OperatorKind::Multiply]));
/// assert_eq!(tokenizer.pop_operator().unwrap(), OperatorKind::Multiply);
/// assert_eq!(tokenizer.pop_operator().unwrap(), OperatorKind::Sqrt);
/// assert!(tokenizer.is_at_end());
/// ```
pub struct Tokenizer<'src> {
    lexer:          Lexer<'src, Lexeme>,
    lookahead:      Token,
    /// Source text of the look-ahead; empty at the end of input.
    lookahead_text: &'src str,
    /// Parentheses popped and not yet closed.
    open_groups:    usize,
}

impl<'src> Tokenizer<'src> {
    /// Creates a tokenizer and scans the first look-ahead token.
    ///
    /// # Errors
    /// Returns [`EvalError::UnknownOperator`] if the first run of input is not
    /// a numeral or a known symbol.
    pub fn new(source: &'src str) -> EvalResult<Self> {
        let mut tokenizer = Self { lexer:          Lexeme::lexer(source),
                                   lookahead:      Token::End,
                                   lookahead_text: "",
                                   open_groups:    0, };
        tokenizer.advance()?;
        Ok(tokenizer)
    }

    /// Returns the current look-ahead without consuming it.
    #[must_use]
    pub const fn peek(&self) -> Token {
        self.lookahead
    }

    /// Returns the source text of the look-ahead, exactly as written.
    ///
    /// Returns an empty string at the end of input.
    ///
    /// # Example
    /// ```
    /// use calcdescent::interpreter::tokenizer::Tokenizer;
    ///
    /// let tokenizer = Tokenizer::new("2.50+1").unwrap();
    /// assert_eq!(tokenizer.peek_text(), "2.50");
    /// ```
    #[must_use]
    pub const fn peek_text(&self) -> &'src str {
        self.lookahead_text
    }

    /// Returns how many popped `(` have not been matched by a popped `)`.
    #[must_use]
    pub const fn open_groups(&self) -> usize {
        self.open_groups
    }

    /// Returns `true` if the look-ahead is a number.
    #[must_use]
    pub const fn peek_is_number(&self) -> bool {
        matches!(self.lookahead, Token::Number(_))
    }

    /// Returns `true` if the look-ahead is an operator listed in `candidates`.
    #[must_use]
    pub fn peek_is_operator(&self, candidates: &[OperatorKind]) -> bool {
        match self.lookahead {
            Token::Operator(op) => candidates.contains(&op),
            _ => false,
        }
    }

    /// Returns `true` once every token has been consumed.
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        matches!(self.lookahead, Token::End)
    }

    /// Consumes the look-ahead number and scans the next token.
    ///
    /// Callers are expected to check [`Self::peek_is_number`] first.
    ///
    /// # Errors
    /// - [`EvalError::NumberExpected`] if the look-ahead is not a number.
    /// - [`EvalError::UnknownOperator`] if the following token is unknown.
    pub fn pop_number(&mut self) -> EvalResult<f64> {
        let Token::Number(n) = self.lookahead else {
            return Err(EvalError::NumberExpected);
        };
        self.advance()?;
        Ok(n)
    }

    /// Consumes the look-ahead operator and scans the next token.
    ///
    /// Callers are expected to check [`Self::peek_is_operator`] first.
    ///
    /// # Errors
    /// - [`EvalError::UnexpectedToken`] if the look-ahead is not an operator.
    /// - [`EvalError::UnknownOperator`] if the following token is unknown.
    pub fn pop_operator(&mut self) -> EvalResult<OperatorKind> {
        let Token::Operator(op) = self.lookahead else {
            return Err(EvalError::UnexpectedToken { text: self.lookahead.to_string() });
        };
        match op {
            OperatorKind::ParenOpen => self.open_groups += 1,
            OperatorKind::ParenClose => self.open_groups = self.open_groups.saturating_sub(1),
            _ => {},
        }
        self.advance()?;
        Ok(op)
    }

    /// Scans the next run of input into the look-ahead slot.
    fn advance(&mut self) -> EvalResult<()> {
        let Some(lexeme) = self.lexer.next() else {
            self.lookahead = Token::End;
            self.lookahead_text = "";
            return Ok(());
        };

        let text = self.lexer.slice();
        let token = match lexeme {
            Ok(Lexeme::Numeral) => match text.parse::<f64>() {
                Ok(n) => Token::Number(n),
                Err(_) => return Err(unknown(text)),
            },
            Ok(Lexeme::Word) => {
                Token::Operator(OperatorKind::from_symbol(text).ok_or_else(|| unknown(text))?)
            },
            Ok(Lexeme::Plus) => Token::Operator(OperatorKind::Plus),
            Ok(Lexeme::Minus) => Token::Operator(OperatorKind::Minus),
            Ok(Lexeme::Star) => Token::Operator(OperatorKind::Multiply),
            Ok(Lexeme::Slash) => Token::Operator(OperatorKind::Divide),
            Ok(Lexeme::Percent) => Token::Operator(OperatorKind::Remainder),
            Ok(Lexeme::LParen) => Token::Operator(OperatorKind::ParenOpen),
            Ok(Lexeme::RParen) => Token::Operator(OperatorKind::ParenClose),
            Ok(Lexeme::Comma) => Token::Operator(OperatorKind::Comma),
            Err(()) => return Err(unknown(text)),
        };

        trace!("token {token:?} at {:?}", self.lexer.span());
        self.lookahead = token;
        self.lookahead_text = text;
        Ok(())
    }
}

fn unknown(text: &str) -> EvalError {
    EvalError::UnknownOperator { text: text.to_string() }
}
