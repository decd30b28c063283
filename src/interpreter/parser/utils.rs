use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Parses a plain identifier and returns its name.
///
/// The next token must be `Token::Identifier`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
///
/// # Returns
/// A `String` containing the identifier.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is not an identifier,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(s), _)) => Ok(s.clone()),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected identifier, found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Consumes the semicolon that terminates a statement.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the expected `;`.
/// - `line`: Line number of the statement, used when the input ends early.
///
/// # Errors
/// Returns `ParseError::ExpectedSemicolon` if the next token is not `;` or
/// the input ends first.
pub(in crate::interpreter::parser) fn expect_semicolon<'a, I>(tokens: &mut Peekable<I>,
                                                              line: usize)
                                                              -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Semicolon, _)) => Ok(()),
        Some((_, found_line)) => Err(ParseError::ExpectedSemicolon { line: *found_line }),
        None => Err(ParseError::ExpectedSemicolon { line }),
    }
}
