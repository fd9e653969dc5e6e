use logos::Logos;

/// A raw lexeme: the class of one maximal run of input characters.
///
/// The lexer only splits the input. Turning a run into a number or an
/// operator, and rejecting unknown text, is done by the
/// [`Tokenizer`](crate::interpreter::tokenizer::Tokenizer).
///
/// Boundaries fall between a numeral run and any other character, and on both
/// sides of every single-character symbol, so `2+3`, `(sqrt(4))` and `sqrt2`
/// split the way a reader expects.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Lexeme {
    /// A run of digits and decimal points, such as `42`, `2.5` or `1.2.3`.
    #[regex(r"[0-9.]+")]
    Numeral,
    /// A run of anything that is neither a numeral character nor a symbol,
    /// such as `sqrt` or `@`.
    #[regex(r"[^0-9.+\-*/%(),]+")]
    Word,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
}
