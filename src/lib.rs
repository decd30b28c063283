//! # numscript
//!
//! numscript is a small scripting language for numeric programs, written in
//! Rust. It lexes, parses, and evaluates statements built from arithmetic,
//! comparisons, variables, printing, conditionals, and loops.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::core::Context,
        lexer::tokenize,
        parser::statement::parse_statement,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines node types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
/// - Owns each subtree exactly once, so statements are dropped as a whole.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code. It standardizes error reporting and carries detailed
/// information about failures, including error kinds, descriptions, and
/// source locations for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, the variable
/// environment, and error handling to provide a complete runtime for source
/// code evaluation. It exposes the building blocks used by the public entry
/// points below.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, environment.
/// - Provides entry points for tokenizing and parsing user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Executes all statements of a script, printing to standard output.
///
/// This function tokenizes the provided source string, then alternates
/// parsing one statement and evaluating it against a single evaluation
/// context until the input is exhausted. The first failure of any phase
/// stops execution and is returned to the caller.
///
/// # Errors
/// Returns an error if lexing, parsing, or evaluation fails.
///
/// # Examples
/// ```
/// use numscript::run_script;
///
/// // Simple script: the result will be calculated and no error should occur.
/// let source = "let result = 2 + 2;";
/// assert!(run_script(source).is_ok());
///
/// // Example with an intentional error (unknown variable).
/// let source = "let y = x + 1;"; // 'x' is not defined
/// assert!(run_script(source).is_err());
/// ```
pub fn run_script(source: &str) -> Result<(), Box<dyn std::error::Error>> {
    run_script_to(source, std::io::stdout())
}

/// Executes all statements of a script, printing to the given sink.
///
/// Identical to [`run_script`], except that `print` output goes to `out`.
/// Passing `&mut Vec<u8>` captures everything the script prints.
///
/// # Errors
/// Returns an error if lexing, parsing, or evaluation fails.
///
/// # Examples
/// ```
/// use numscript::run_script_to;
///
/// let mut out = Vec::new();
/// run_script_to("print(2 + 3 * 4);", &mut out).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "14.00\n");
/// ```
pub fn run_script_to<W: Write>(source: &str, out: W) -> Result<(), Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;
    let mut context = Context::with_output(out);

    let mut iter = tokens.iter().peekable();

    while iter.peek().is_some() {
        let statement = parse_statement(&mut iter)?;
        context.eval(&statement)?;
    }

    Ok(())
}

/// Executes exactly one statement against an existing context.
///
/// This is the building block for interactive sessions: the caller keeps the
/// context (and with it the variable environment) alive between lines, and
/// each line must contain one complete statement. Leftover tokens after that
/// statement are rejected, so `let x = 1; let y = 2;` on a single line is an
/// error rather than a silently dropped second statement.
///
/// # Errors
/// Returns an error if lexing, parsing, or evaluation fails, or if tokens
/// remain after the first statement.
///
/// # Examples
/// ```
/// use numscript::{interpreter::evaluator::core::Context, run_line};
///
/// let mut context = Context::with_output(Vec::new());
///
/// assert_eq!(run_line(&mut context, "let x = 5;").unwrap(), 5.0);
/// assert_eq!(run_line(&mut context, "x = x + 1;").unwrap(), 6.0);
///
/// assert!(run_line(&mut context, "let y = 1; let z = 2;").is_err());
/// ```
pub fn run_line<W: Write>(context: &mut Context<W>,
                          source: &str)
                          -> Result<f64, Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();

    let statement = parse_statement(&mut iter)?;

    if let Some((tok, line)) = iter.peek() {
        return Err(Box::new(ParseError::UnexpectedTrailingTokens { token: format!("{tok:?}"),
                                                                   line:  *line, }));
    }

    Ok(context.eval(&statement)?)
}
