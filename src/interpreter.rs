/// The environment module stores runtime variable state.
///
/// The environment maps variable names to their current numeric values. It
/// is created once per program run (or interactive session) and mutated by
/// assignments and loop-body re-execution.
///
/// # Responsibilities
/// - Stores (name, value) pairs with at most one entry per name.
/// - Provides linear-scan lookup and update-or-append assignment.
/// - Keeps a single flat scope; blocks do not introduce nested scopes.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic and comparisons, manages variable state, and produces
/// results. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, printing, and control flow.
/// - Reports runtime errors such as division by zero or unknown variables.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as
/// numbers, identifiers, operators, delimiters, and keywords. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source location.
/// - Handles numeric literals, identifiers, keywords, and operators.
/// - Reports lexical errors for characters outside the token alphabet.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of statements
/// and expressions. This enables the evaluator to execute user code.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes one statement at a time.
/// - Validates correct grammar and syntax, reporting errors with location
///   info.
/// - Encodes operator precedence in its recursive call structure.
pub mod parser;
