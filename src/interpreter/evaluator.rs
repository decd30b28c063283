/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations: arithmetic and
/// comparisons over numeric values.
pub mod binary;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the runtime context with its
/// environment and output sink, and error propagation.
pub mod core;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation.
pub mod unary;
