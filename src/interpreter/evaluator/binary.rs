use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

/// Evaluates a binary operation on two numeric values.
///
/// Arithmetic operators (`+`, `-`, `*`, `/`) produce ordinary results;
/// division by zero is checked explicitly and reported as a runtime error.
/// Comparison operators (`<`, `>`) produce numeric truth values: `1.0` when
/// the comparison holds and `0.0` otherwise.
///
/// # Parameters
/// - `op`: The binary operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// An `EvalResult<f64>` containing the computed value.
///
/// # Example
/// ```
/// use numscript::{ast::BinaryOperator, interpreter::evaluator::binary::eval_binary};
///
/// let sum = eval_binary(BinaryOperator::Add, 2.0, 3.0, 1).unwrap();
/// assert_eq!(sum, 5.0);
///
/// let truth = eval_binary(BinaryOperator::Less, 2.0, 3.0, 1).unwrap();
/// assert_eq!(truth, 1.0);
///
/// assert!(eval_binary(BinaryOperator::Div, 1.0, 0.0, 1).is_err());
/// ```
pub fn eval_binary(op: BinaryOperator, left: f64, right: f64, line: usize) -> EvalResult<f64> {
    use BinaryOperator::{Add, Div, Greater, Less, Mul, Sub};

    match op {
        Add => Ok(left + right),
        Sub => Ok(left - right),
        Mul => Ok(left * right),
        Div => {
            if right == 0.0 {
                Err(RuntimeError::DivisionByZero { line })
            } else {
                Ok(left / right)
            }
        },
        Less => Ok(if left < right { 1.0 } else { 0.0 }),
        Greater => Ok(if left > right { 1.0 } else { 0.0 }),
    }
}
