use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser},
        registry::Arity,
    },
};

/// Type alias for prefix ("nud") handlers.
///
/// A nud is invoked when its token begins an expression, e.g. the `+` in
/// `+1`.
pub type NudFn = fn(&mut Parser<'_>) -> ParseResult<Expr>;

/// Type alias for infix ("led") handlers.
///
/// A led is invoked when its token appears after a complete sub-expression,
/// e.g. the `+` in `1+2`; it receives the accumulated left expression.
pub type LedFn = fn(&mut Parser<'_>, Expr) -> ParseResult<Expr>;

/// Per-token-type parsing rule.
///
/// A rule answers four questions about its token type: how to parse it in
/// prefix position, how to parse it in infix position, and its left and
/// right binding powers. A missing handler for a required position is a
/// parse error, never a silent no-op.
pub struct ParseRule {
    /// Prefix handler, if the token can begin an expression.
    pub nud: Option<NudFn>,
    /// Infix handler, if the token can continue an expression.
    pub led: Option<LedFn>,
    /// Left binding power: an enclosing context must be below this for the
    /// token to extend the expression to its left. Zero terminates any
    /// enclosing loop.
    pub lbp: u8,
    /// Right binding power: the minimum passed down when parsing this
    /// token's right operand. A value below `lbp` makes the operator
    /// right-associative.
    pub rbp: u8,
}

/// The rule table, indexed by [`TokenKind`] discriminant.
///
/// Row order must match the declaration order of [`TokenKind`].
static RULE_TABLE: [ParseRule; TokenKind::COUNT] = [
    ParseRule { nud: Some(nud_unary), led: Some(led_binary), lbp: 10, rbp: 10 }, // Plus
    ParseRule { nud: Some(nud_unary), led: Some(led_binary), lbp: 10, rbp: 10 }, // Minus
    ParseRule { nud: None, led: Some(led_binary), lbp: 20, rbp: 20 },            // Mult
    ParseRule { nud: None, led: Some(led_binary), lbp: 20, rbp: 20 },            // Div
    ParseRule { nud: None, led: Some(led_binary), lbp: 40, rbp: 30 },            // Pow
    ParseRule { nud: Some(nud_group), led: None, lbp: 0, rbp: 0 },               // LBracket
    ParseRule { nud: None, led: None, lbp: 0, rbp: 0 },                          // RBracket
    ParseRule { nud: Some(nud_literal), led: None, lbp: 0, rbp: 0 },             // Number
    ParseRule { nud: Some(nud_identifier), led: None, lbp: 0, rbp: 0 },          // Identifier
    ParseRule { nud: Some(nud_keyword), led: None, lbp: 0, rbp: 0 },             // Keyword
    ParseRule { nud: None, led: Some(led_assign), lbp: 5, rbp: 4 },              // Equals
    ParseRule { nud: None, led: None, lbp: 0, rbp: 0 },                          // Comma
    ParseRule { nud: None, led: None, lbp: 0, rbp: 0 },                          // EndOfFile
];

impl ParseRule {
    /// Looks up the rule for a token type.
    #[must_use]
    pub fn of(kind: TokenKind) -> &'static Self {
        &RULE_TABLE[kind as usize]
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for tokens that are not binary operators.
#[must_use]
const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Mult => Some(BinaryOperator::Mul),
        Token::Div => Some(BinaryOperator::Div),
        Token::Pow => Some(BinaryOperator::Pow),
        _ => None,
    }
}

/// Parses a numeric literal in prefix position.
fn nud_literal(parser: &mut Parser<'_>) -> ParseResult<Expr> {
    let value = match parser.peek() {
        Token::Number(value) => *value,
        token => return Err(ParseError::UnexpectedToken { token: token.to_string() }),
    };
    parser.consume();
    Ok(Expr::Number(value))
}

/// Parses a unary `+` or `-` in prefix position.
///
/// The operand is parsed by invoking only the *prefix* handler of the next
/// token, never a full sub-expression, so `--1` is `(-(-1))` while `-1+2` is
/// `((-1) + 2)`.
fn nud_unary(parser: &mut Parser<'_>) -> ParseResult<Expr> {
    let op = match parser.peek() {
        Token::Plus => UnaryOperator::Plus,
        Token::Minus => UnaryOperator::Negate,
        token => return Err(ParseError::UnexpectedToken { token: token.to_string() }),
    };
    parser.consume();

    let next = parser.peek();
    let nud = ParseRule::of(next.kind()).nud
                                        .ok_or_else(|| ParseError::NoPrefixHandler { token: next.to_string(), })?;
    let operand = nud(parser)?;
    Ok(Expr::Unary { op,
                     operand: Box::new(operand) })
}

/// Parses a parenthesized sub-expression.
///
/// The brackets group only; no node is produced for them.
fn nud_group(parser: &mut Parser<'_>) -> ParseResult<Expr> {
    parser.consume(); // the opening bracket, so the engine cannot loop on it
    let expr = parser.parse_expr(TokenKind::RBracket, 0)?;
    match parser.peek() {
        Token::RBracket => {
            parser.consume();
            Ok(expr)
        },
        _ => Err(ParseError::ExpectedClosingBracket),
    }
}

/// Parses a free identifier into a variable reference.
///
/// No store lookup happens here; the name resolves at evaluation time.
fn nud_identifier(parser: &mut Parser<'_>) -> ParseResult<Expr> {
    let name = match parser.peek() {
        Token::Identifier(name) => name.clone(),
        token => return Err(ParseError::UnexpectedToken { token: token.to_string() }),
    };
    parser.consume();
    Ok(Expr::Variable { name })
}

/// Parses a registered builtin reference or call.
///
/// The name is looked up in the registries. A nullary builtin (`pi`, `e`)
/// produces a bare call and expects no bracket. A fixed arity of `n` parses
/// exactly `n` comma-separated arguments between required brackets. A
/// variadic builtin parses comma-separated arguments until the closing
/// bracket is seen.
fn nud_keyword(parser: &mut Parser<'_>) -> ParseResult<Expr> {
    let name = match parser.peek() {
        Token::Keyword(name) => name.clone(),
        token => return Err(ParseError::UnexpectedToken { token: token.to_string() }),
    };
    parser.consume();

    let info = parser.registries
                     .lookup(&name)
                     .ok_or_else(|| ParseError::UnknownName { name: name.clone() })?;

    let fixed = match info.arity {
        Arity::Exact(0) => {
            return Ok(Expr::Call { id:   info.id,
                                   args: Vec::new(), });
        },
        Arity::Exact(n) => Some(n),
        Arity::Variadic => None,
    };

    match parser.peek() {
        Token::LBracket => parser.consume(),
        _ => return Err(ParseError::ExpectedOpeningBracket { name }),
    }

    let mut args = Vec::with_capacity(fixed.unwrap_or(1));
    match fixed {
        Some(n) => {
            // All arguments but the last are terminated by a comma, which is
            // consumed here; the engine never consumes terminators itself.
            for _ in 0..n - 1 {
                args.push(parser.parse_expr(TokenKind::Comma, 0)?);
                match parser.peek() {
                    Token::Comma => parser.consume(),
                    _ => return Err(ParseError::ExpectedComma { name }),
                }
            }
            args.push(parser.parse_expr(TokenKind::RBracket, 0)?);
            match parser.peek() {
                Token::RBracket => parser.consume(),
                _ => return Err(ParseError::ExpectedClosingBracket),
            }
        },
        None => loop {
            args.push(parser.parse_expr(TokenKind::RBracket, 0)?);
            match parser.peek() {
                Token::Comma => parser.consume(),
                Token::RBracket => {
                    parser.consume();
                    break;
                },
                _ => return Err(ParseError::ExpectedClosingBracket),
            }
        },
    }

    Ok(Expr::Call { id: info.id,
                    args })
}

/// Parses a binary operator in infix position.
///
/// The right operand is parsed with the operator's right binding power as
/// the minimum, which is what gives `^` its right-associativity.
fn led_binary(parser: &mut Parser<'_>, left: Expr) -> ParseResult<Expr> {
    let token = parser.peek();
    let op = token_to_binary_operator(token).ok_or_else(|| ParseError::UnexpectedToken { token: token.to_string(), })?;
    let rbp = ParseRule::of(token.kind()).rbp;
    parser.consume();

    let right = parser.parse_expr(TokenKind::EndOfFile, rbp)?;
    Ok(Expr::Binary { op,
                      left: Box::new(left),
                      right: Box::new(right) })
}

/// Parses an assignment in infix position.
///
/// The left side must be a bare variable reference. The right side is parsed
/// with the rule's right binding power (making chained assignment
/// right-associative), evaluated eagerly, and written into the store. The
/// assignment expression itself reduces to the unevaluated left reference,
/// which now resolves to the freshly written value.
fn led_assign(parser: &mut Parser<'_>, left: Expr) -> ParseResult<Expr> {
    let name = match &left {
        Expr::Variable { name } => name.clone(),
        _ => return Err(ParseError::InvalidAssignmentTarget),
    };
    parser.consume(); // the `=`

    let rbp = ParseRule::of(TokenKind::Equals).rbp;
    let right = parser.parse_expr(TokenKind::EndOfFile, rbp)?;

    let value = right.eval(parser.registries, parser.store)?;
    parser.store.set(&name, value);
    Ok(left)
}
