use std::fmt;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        evaluator::core::VariableStore,
        lexer::{Token, TokenKind},
        parser::rules::ParseRule,
        registry::Registries,
    },
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Token returned for positions past the end of the sequence.
static END_OF_FILE: Token = Token::EndOfFile;

/// A cursor over one line's token sequence, plus the context the grammar
/// needs: the builtin registries for keyword lookups and the variable store
/// for assignment writes.
///
/// The parser owns the tokens for the duration of the line and never mutates
/// them; all state changes go through the cursor position and, for
/// assignments, the store.
pub struct Parser<'a> {
    tokens: Vec<Token>,
    pos: usize,
    pub(crate) registries: &'a Registries,
    pub(crate) store: &'a mut VariableStore,
}

impl<'a> Parser<'a> {
    /// Creates a parser over a tokenized line.
    pub fn new(tokens: Vec<Token>, registries: &'a Registries, store: &'a mut VariableStore) -> Self {
        Self { tokens,
               pos: 0,
               registries,
               store }
    }

    /// Returns the current token without consuming it.
    ///
    /// Positions past the end of the sequence read as [`Token::EndOfFile`].
    pub(crate) fn peek(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&END_OF_FILE)
    }

    /// Advances the cursor past the current token.
    pub(crate) fn consume(&mut self) {
        self.pos += 1;
    }

    /// Parses one full input line.
    ///
    /// This is the entry point for line parsing. It runs the engine with the
    /// end-of-input terminator and then requires the cursor to have reached
    /// the end of the sequence.
    ///
    /// # Errors
    /// Any engine error, or [`ParseError::UnexpectedTrailingTokens`] when a
    /// complete expression was parsed but input remains (e.g. `pi(3)` or
    /// `1 2`).
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        let expr = self.parse_expr(TokenKind::EndOfFile, 0)?;
        match self.peek() {
            Token::EndOfFile => Ok(expr),
            token => Err(ParseError::UnexpectedTrailingTokens { token: token.to_string(), }),
        }
    }

    /// The precedence-climbing loop at the heart of the parser.
    ///
    /// The current token's prefix handler produces the initial left
    /// expression. The loop then folds infix handlers into it for as long as
    /// the current token's left binding power strictly exceeds `min_bp`; the
    /// strict comparison is what groups same-precedence left-associative
    /// chains left to right, and a rule whose right binding power is below
    /// its left binding power (`^`, `=`) parses right-associatively.
    ///
    /// The terminator token is never consumed here; callers of bracketed or
    /// argument-list contexts consume it explicitly.
    ///
    /// # Errors
    /// - [`ParseError::UnexpectedEndOfInput`] when the terminator or end of
    ///   input arrives before any expression.
    /// - [`ParseError::NoPrefixHandler`] / [`ParseError::NoInfixHandler`]
    ///   when a token appears in a position its rule has no handler for.
    /// - Any error from an invoked handler.
    pub(crate) fn parse_expr(&mut self, terminator: TokenKind, min_bp: u8) -> ParseResult<Expr> {
        let token = self.peek();
        let kind = token.kind();
        if kind == terminator || kind == TokenKind::EndOfFile {
            return Err(ParseError::UnexpectedEndOfInput);
        }

        let rule = ParseRule::of(kind);
        let nud = rule.nud
                      .ok_or_else(|| ParseError::NoPrefixHandler { token: token.to_string(), })?;
        let mut left = nud(self)?;

        loop {
            let token = self.peek();
            let kind = token.kind();
            if kind == terminator || kind == TokenKind::EndOfFile {
                break;
            }

            let rule = ParseRule::of(kind);
            if rule.lbp <= min_bp {
                break;
            }
            let led = rule.led
                          .ok_or_else(|| ParseError::NoInfixHandler { token: token.to_string(), })?;
            left = led(self, left)?;
        }

        Ok(left)
    }
}

/// Renders a window of tokens around the cursor with a position marker, for
/// debugging parser state.
impl fmt::Display for Parser<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const INTERVAL: usize = 10;
        let start = self.pos.saturating_sub(INTERVAL);
        let end = (self.pos + INTERVAL).min(self.tokens.len());

        for (offset, token) in self.tokens[start..end].iter().enumerate() {
            if offset > 0 {
                writeln!(f)?;
            }
            if start + offset == self.pos {
                write!(f, "pos > {token:?}")?;
            } else {
                write!(f, "      {token:?}")?;
            }
        }
        Ok(())
    }
}
