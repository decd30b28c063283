use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{expect_semicolon, parse_identifier},
        },
    },
};

/// Parses a single statement.
/// A statement may be one of:
/// - a variable declaration: `let x = expression ;`
/// - a print statement: `print ( expression ) ;`
/// - a conditional: `if ( expression ) { ... }`
/// - a loop: `while ( expression ) { ... }`
/// - a reassignment: `x = expression ;`
///
/// The statement kind is decided by the leading token; anything else is an
/// unexpected token. The statement set is closed: there is no
/// bare-expression statement.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed statement node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { line: 0 })?;

    match peeked {
        (Token::Let, _) => parse_let(tokens),
        (Token::Print, _) => parse_print(tokens),
        (Token::If, _) => parse_if(tokens),
        (Token::While, _) => parse_while(tokens),
        (Token::Identifier(_), _) => parse_assignment(tokens),
        (tok, line) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected a statement, found {tok:?}"),
                                              line:  *line, })
        },
    }
}

/// Parses a variable declaration statement.
///
/// A declaration has the form `let <identifier> = <expression> ;`.
///
/// Declarations and plain reassignments produce the same [`Expr::Assign`]
/// node; `let` is surface syntax only and does not open a new scope.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `let`.
///
/// # Returns
/// An [`Expr::Assign`] node.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the identifier is missing,
/// - `=` is missing,
/// - the expression is malformed,
/// - the terminating `;` is missing.
fn parse_let<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = *tokens.next().unwrap();

    let name = parse_identifier(tokens)?;

    match tokens.next() {
        Some((Token::Equals, _)) => {},
        Some((tok, l)) => {
            return Err(ParseError::UnexpectedToken { token: format!("Expected '=', found {tok:?}"),
                                                     line:  *l, });
        },
        None => {
            return Err(ParseError::UnexpectedEndOfInput { line });
        },
    }

    let value = parse_expression(tokens)?;
    expect_semicolon(tokens, line)?;

    Ok(Expr::Assign { name,
                      value: Box::new(value),
                      line })
}

/// Parses a reassignment statement.
///
/// Supported form: `<identifier> = <expression> ;`. At statement position an
/// identifier must be followed by `=`; a bare identifier is not a statement.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
///
/// # Returns
/// An [`Expr::Assign`] node.
///
/// # Errors
/// Returns a `ParseError` if:
/// - `=` does not follow the identifier,
/// - the assigned expression fails to parse,
/// - the terminating `;` is missing.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = tokens.peek().map_or(0, |(_, l)| *l);
    let name = parse_identifier(tokens)?;

    match tokens.next() {
        Some((Token::Equals, _)) => {},
        Some((tok, l)) => {
            return Err(ParseError::UnexpectedToken { token: format!("Expected '=' after identifier, found {tok:?}"),
                                                     line:  *l, });
        },
        None => {
            return Err(ParseError::UnexpectedEndOfInput { line });
        },
    }

    let value = parse_expression(tokens)?;
    expect_semicolon(tokens, line)?;

    Ok(Expr::Assign { name,
                      value: Box::new(value),
                      line })
}

/// Parses a print statement.
///
/// Expected form: `print ( expression ) ;`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `print`.
///
/// # Returns
/// An [`Expr::Print`] node.
///
/// # Errors
/// Returns a `ParseError` if:
/// - `(` does not follow `print`,
/// - the inner expression fails to parse,
/// - the closing `)` or terminating `;` is missing.
fn parse_print<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = *tokens.next().unwrap();

    match tokens.next() {
        Some((Token::LParen, _)) => {},
        Some((tok, l)) => {
            return Err(ParseError::UnexpectedToken { token: format!("Expected '(' after 'print', found {tok:?}"),
                                                     line:  *l, });
        },
        None => {
            return Err(ParseError::UnexpectedEndOfInput { line });
        },
    }

    let expr = parse_expression(tokens)?;

    match tokens.next() {
        Some((Token::RParen, _)) => {},
        _ => return Err(ParseError::ExpectedClosingParen { line }),
    }

    expect_semicolon(tokens, line)?;

    Ok(Expr::Print { expr: Box::new(expr),
                     line })
}

/// Parses a conditional statement.
///
/// Expected form: `if ( expression ) { statement* }`.
/// There is no else-branch in this grammar, and no `;` follows the block.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `if`.
///
/// # Returns
/// An [`Expr::If`] node whose body is a block.
///
/// # Errors
/// Returns a `ParseError` if the condition or body is malformed.
fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = *tokens.next().unwrap();

    let condition = parse_condition(tokens, line)?;
    let body = parse_braced_block(tokens, line)?;

    Ok(Expr::If { condition: Box::new(condition),
                  body: Box::new(body),
                  line })
}

/// Parses a loop statement.
///
/// Expected form: `while ( expression ) { statement* }`.
/// The condition is re-evaluated before every iteration; no `;` follows the
/// block.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `while`.
///
/// # Returns
/// An [`Expr::While`] node whose body is a block.
///
/// # Errors
/// Returns a `ParseError` if the condition or body is malformed.
fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = *tokens.next().unwrap();

    let condition = parse_condition(tokens, line)?;
    let body = parse_braced_block(tokens, line)?;

    Ok(Expr::While { condition: Box::new(condition),
                     body: Box::new(body),
                     line })
}

/// Parses a parenthesized condition: `( expression )`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the expected `(`.
/// - `line`: Line number of the owning `if`/`while` keyword.
///
/// # Returns
/// The condition expression.
fn parse_condition<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::LParen, _)) => {},
        Some((tok, l)) => {
            return Err(ParseError::UnexpectedToken { token: format!("Expected '(' before condition, found {tok:?}"),
                                                     line:  *l, });
        },
        None => {
            return Err(ParseError::UnexpectedEndOfInput { line });
        },
    }

    let condition = parse_expression(tokens)?;

    match tokens.next() {
        Some((Token::RParen, _)) => Ok(condition),
        _ => Err(ParseError::ExpectedClosingParen { line }),
    }
}

/// Parses a brace-delimited body: `{ statement* }`.
///
/// The opening `{` is consumed here; the statement loop up to the matching
/// `}` is delegated to [`parse_block`].
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the expected `{`.
/// - `line`: Line number of the owning `if`/`while` keyword.
///
/// # Returns
/// An [`Expr::Block`] node.
fn parse_braced_block<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let brace_line = match tokens.next() {
        Some((Token::LBrace, l)) => *l,
        Some((tok, l)) => {
            return Err(ParseError::UnexpectedToken { token: format!("Expected '{{' before block, found {tok:?}"),
                                                     line:  *l, });
        },
        None => {
            return Err(ParseError::UnexpectedEndOfInput { line });
        },
    };

    parse_block(tokens, brace_line)
}
