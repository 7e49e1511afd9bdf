use std::fmt;

use logos::Logos;

use crate::{error::ParseError, interpreter::registry::Registries};

/// Raw tokens recognized by the `logos`-based scanner.
///
/// Word tokens are classified into keywords or identifiers by [`tokenize`],
/// and the end-of-input marker is appended there; neither exists at this
/// level.
#[derive(Logos, Debug, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    /// Numeric literal tokens, such as `42`, `3.14` or `.5`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    Number(f64),
    /// Word tokens: builtin names or free variable names.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Word(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Mult,
    /// `/`
    #[token("/")]
    Div,
    /// `^`
    #[token("^")]
    Pow,
    /// `(`
    #[token("(")]
    LBracket,
    /// `)`
    #[token(")")]
    RBracket,
    /// `=`
    #[token("=")]
    Equals,
    /// `,`
    #[token(",")]
    Comma,
}

/// Parses a numeric literal from the current token slice.
fn parse_number(lex: &logos::Lexer<RawToken>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Represents a lexical token in one input line.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Tokens are immutable; the sequence for one line is produced once and owned
/// by the parser for that line's lifetime.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mult,
    /// `/`
    Div,
    /// `^`
    Pow,
    /// `(`
    LBracket,
    /// `)`
    RBracket,
    /// A numeric literal, such as `42` or `3.14`.
    Number(f64),
    /// A free variable name, such as `x`.
    Identifier(String),
    /// A registered builtin name, such as `sin` or `pi`.
    Keyword(String),
    /// `=`
    Equals,
    /// `,`
    Comma,
    /// End-of-input marker appended after the last scanned token.
    EndOfFile,
}

/// Payload-free projection of [`Token`], used as the dense index into the
/// parse-rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mult,
    /// `/`
    Div,
    /// `^`
    Pow,
    /// `(`
    LBracket,
    /// `)`
    RBracket,
    /// Numeric literal.
    Number,
    /// Free variable name.
    Identifier,
    /// Registered builtin name.
    Keyword,
    /// `=`
    Equals,
    /// `,`
    Comma,
    /// End-of-input marker.
    EndOfFile,
}

impl TokenKind {
    /// Number of token types; the length of the parse-rule table.
    pub const COUNT: usize = 13;
}

impl Token {
    /// Gets the payload-free type of `self`.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Mult => TokenKind::Mult,
            Self::Div => TokenKind::Div,
            Self::Pow => TokenKind::Pow,
            Self::LBracket => TokenKind::LBracket,
            Self::RBracket => TokenKind::RBracket,
            Self::Number(_) => TokenKind::Number,
            Self::Identifier(_) => TokenKind::Identifier,
            Self::Keyword(_) => TokenKind::Keyword,
            Self::Equals => TokenKind::Equals,
            Self::Comma => TokenKind::Comma,
            Self::EndOfFile => TokenKind::EndOfFile,
        }
    }
}

/// Renders the source spelling of the token, for error messages.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Mult => write!(f, "*"),
            Self::Div => write!(f, "/"),
            Self::Pow => write!(f, "^"),
            Self::LBracket => write!(f, "("),
            Self::RBracket => write!(f, ")"),
            Self::Number(value) => write!(f, "{value}"),
            Self::Identifier(name) | Self::Keyword(name) => write!(f, "{name}"),
            Self::Equals => write!(f, "="),
            Self::Comma => write!(f, ","),
            Self::EndOfFile => write!(f, "end of input"),
        }
    }
}

/// Converts one raw input line into its token sequence.
///
/// Words are classified against the builtin registries: a registered name
/// becomes a [`Token::Keyword`], anything else a [`Token::Identifier`]. The
/// sequence is terminated with an explicit [`Token::EndOfFile`].
///
/// # Errors
/// Returns [`ParseError::UnrecognizedCharacter`] when the scanner hits input
/// it has no rule for.
///
/// # Example
/// ```
/// use parith::interpreter::{
///     lexer::{tokenize, Token},
///     registry::Registries,
/// };
///
/// let registries = Registries::new();
/// let tokens = tokenize("1 + pi", &registries).unwrap();
///
/// assert_eq!(tokens,
///            vec![Token::Number(1.0),
///                 Token::Plus,
///                 Token::Keyword("pi".to_string()),
///                 Token::EndOfFile]);
/// ```
pub fn tokenize(source: &str, registries: &Registries) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(raw) = lexer.next() {
        let token = match raw {
            Ok(RawToken::Number(value)) => Token::Number(value),
            Ok(RawToken::Word(word)) => {
                if registries.contains(&word) {
                    Token::Keyword(word)
                } else {
                    Token::Identifier(word)
                }
            },
            Ok(RawToken::Plus) => Token::Plus,
            Ok(RawToken::Minus) => Token::Minus,
            Ok(RawToken::Mult) => Token::Mult,
            Ok(RawToken::Div) => Token::Div,
            Ok(RawToken::Pow) => Token::Pow,
            Ok(RawToken::LBracket) => Token::LBracket,
            Ok(RawToken::RBracket) => Token::RBracket,
            Ok(RawToken::Equals) => Token::Equals,
            Ok(RawToken::Comma) => Token::Comma,
            Err(()) => {
                return Err(ParseError::UnrecognizedCharacter { found: lexer.slice().to_string(), });
            },
        };
        tokens.push(token);
    }

    tokens.push(Token::EndOfFile);
    Ok(tokens)
}
