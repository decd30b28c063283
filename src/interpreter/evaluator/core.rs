use std::io::{self, Stdout, Write};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{binary::eval_binary, unary::eval_unary},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the variable environment and the
/// output sink that `print` writes to. The environment lives for the whole
/// program run (or interactive session), while AST nodes are evaluated once
/// and dropped.
///
/// ## Usage
///
/// `Context` is created once and reused for evaluating statements.
/// `Context::new()` writes to standard output; `Context::with_output`
/// accepts any [`Write`] sink, which lets callers capture what a program
/// prints.
pub struct Context<W = Stdout> {
    /// The variable environment. A single flat scope shared by all blocks.
    pub env: Environment,
    out:     W,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a new evaluation context with an empty environment, printing
    /// to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self { env: Environment::new(),
               out: io::stdout(), }
    }
}

impl<W: Write> Context<W> {
    /// Creates a new evaluation context that prints to the given sink.
    ///
    /// # Example
    /// ```
    /// use numscript::interpreter::evaluator::core::Context;
    ///
    /// let context = Context::with_output(Vec::new());
    /// assert!(context.env.is_empty());
    /// ```
    pub fn with_output(out: W) -> Self {
        Self { env: Environment::new(),
               out }
    }

    /// Consumes the context and returns its output sink.
    ///
    /// Useful in tests to inspect everything a program printed.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Evaluates an AST node and returns the resulting value.
    ///
    /// This is the main entry point for evaluation. The evaluator dispatches
    /// based on node variant: literals, variables, unary and binary
    /// operations, assignments, print statements, conditionals, loops, and
    /// blocks. Every node evaluates to a number; constructs without a
    /// natural value (a skipped conditional, an empty block, a finished
    /// loop) evaluate to `0.0`.
    ///
    /// # Parameters
    /// - `expr`: Node to evaluate.
    ///
    /// # Returns
    /// The computed value.
    ///
    /// # Example
    /// ```
    /// use numscript::{ast::Expr, interpreter::evaluator::core::Context};
    ///
    /// let mut context = Context::with_output(Vec::new());
    /// let expr = Expr::Number { value: 4.0,
    ///                           line:  1, };
    ///
    /// assert_eq!(context.eval(&expr).unwrap(), 4.0);
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Number { value, .. } => Ok(*value),
            Expr::Variable { name, line } => self.eval_variable(name, *line),
            Expr::UnaryOp { op, expr, .. } => {
                let value = self.eval(expr)?;
                Ok(eval_unary(*op, value))
            },
            Expr::BinaryOp { left, op, right, line } => {
                let lval = self.eval(left)?;
                let rval = self.eval(right)?;
                eval_binary(*op, lval, rval, *line)
            },
            Expr::Assign { name, value, .. } => self.eval_assign(name, value),
            Expr::Print { expr, line } => self.eval_print(expr, *line),
            Expr::If { condition, body, .. } => self.eval_if(condition, body),
            Expr::While { condition, body, .. } => self.eval_while(condition, body),
            Expr::Block { statements, .. } => self.eval_block(statements),
        }
    }

    /// Looks up a variable by name.
    ///
    /// If the variable is not defined, an `UnknownVariable` error naming it
    /// is returned; there is no silent default value.
    ///
    /// # Parameters
    /// - `name`: Variable name.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The variable value, if defined.
    ///
    /// # Example
    /// ```
    /// use numscript::interpreter::evaluator::core::Context;
    ///
    /// let mut context = Context::with_output(Vec::new());
    /// context.env.set("x", 10.0);
    ///
    /// assert_eq!(context.eval_variable("x", 1).unwrap(), 10.0);
    /// assert!(context.eval_variable("y", 1).is_err());
    /// ```
    pub fn eval_variable(&self, name: &str, line: usize) -> EvalResult<f64> {
        self.env
            .get(name)
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_owned(),
                                                           line })
    }

    /// Evaluates an assignment.
    ///
    /// The right-hand side is evaluated first, then stored in the
    /// environment, either updating an existing entry or creating a new one.
    /// The stored value is returned, so an assignment has a value like any
    /// other node.
    ///
    /// # Parameters
    /// - `name`: Variable name.
    /// - `value`: Expression producing the value to store.
    ///
    /// # Returns
    /// The stored value.
    pub fn eval_assign(&mut self, name: &str, value: &Expr) -> EvalResult<f64> {
        let value = self.eval(value)?;
        self.env.set(name, value);
        Ok(value)
    }

    /// Evaluates a print statement.
    ///
    /// The inner expression is evaluated and written to the output sink with
    /// two decimal places, followed by a newline. The printed value is
    /// returned.
    ///
    /// # Parameters
    /// - `expr`: Expression whose value is printed.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The printed value.
    ///
    /// # Example
    /// ```
    /// use numscript::{ast::Expr, interpreter::evaluator::core::Context};
    ///
    /// let mut context = Context::with_output(Vec::new());
    /// let expr = Expr::Number { value: 3.5,
    ///                           line:  1, };
    ///
    /// assert_eq!(context.eval_print(&expr, 1).unwrap(), 3.5);
    ///
    /// let out = context.into_output();
    /// assert_eq!(String::from_utf8(out).unwrap(), "3.50\n");
    /// ```
    pub fn eval_print(&mut self, expr: &Expr, line: usize) -> EvalResult<f64> {
        let value = self.eval(expr)?;
        writeln!(self.out, "{value:.2}").map_err(|_| RuntimeError::OutputFailed { line })?;
        Ok(value)
    }

    /// Evaluates a conditional.
    ///
    /// The condition is evaluated first; any non-zero result counts as true
    /// and runs the body once. There is no else-branch in this grammar; a
    /// false condition skips the body and the conditional evaluates to
    /// `0.0`.
    ///
    /// # Parameters
    /// - `condition`: Condition expression.
    /// - `body`: Body block.
    ///
    /// # Returns
    /// The body's value when taken, otherwise `0.0`.
    pub fn eval_if(&mut self, condition: &Expr, body: &Expr) -> EvalResult<f64> {
        let cond = self.eval(condition)?;

        if cond == 0.0 {
            return Ok(0.0);
        }
        self.eval(body)
    }

    /// Evaluates a loop.
    ///
    /// The condition is re-evaluated before every iteration; the body runs
    /// while it stays non-zero. There is no iteration cap: a condition that
    /// never becomes zero loops forever. The loop evaluates to `0.0`.
    ///
    /// # Parameters
    /// - `condition`: Condition expression.
    /// - `body`: Body block.
    ///
    /// # Returns
    /// `0.0` once the condition becomes zero.
    pub fn eval_while(&mut self, condition: &Expr, body: &Expr) -> EvalResult<f64> {
        while self.eval(condition)? != 0.0 {
            self.eval(body)?;
        }
        Ok(0.0)
    }

    /// Evaluates a sequence of statements as a block.
    ///
    /// Statements run in order against the shared environment; blocks do NOT
    /// introduce a nested scope, so a variable assigned inside a loop body
    /// remains visible after the loop. The block's value is the value of its
    /// last statement; an empty block evaluates to `0.0`.
    ///
    /// # Parameters
    /// - `statements`: Statements inside the block.
    ///
    /// # Returns
    /// The value of the last executed statement, or `0.0`.
    ///
    /// # Example
    /// ```
    /// use numscript::{ast::Expr, interpreter::evaluator::core::Context};
    ///
    /// let mut context = Context::with_output(Vec::new());
    ///
    /// // { x = 3; x }
    /// let statements = vec![Expr::Assign { name:  "x".into(),
    ///                                      value: Box::new(Expr::Number { value: 3.0,
    ///                                                                     line:  1, }),
    ///                                      line:  1, }];
    ///
    /// assert_eq!(context.eval_block(&statements).unwrap(), 3.0);
    /// assert_eq!(context.env.get("x"), Some(3.0));
    /// ```
    pub fn eval_block(&mut self, statements: &[Expr]) -> EvalResult<f64> {
        let mut last = 0.0;

        for statement in statements {
            last = self.eval(statement)?;
        }

        Ok(last)
    }
}
