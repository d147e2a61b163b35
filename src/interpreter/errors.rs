//! Runtime error types for the mini-language interpreter
//!
//! Unlike parse errors, runtime faults are never surfaced as a process
//! failure: the engine catches them once at its top level and converts them
//! into a single error-level trace step, keeping the partial trace produced
//! so far.

use crate::parser::ast::SourceLocation;
use std::fmt;

/// Faults that can occur while evaluating a program.
///
/// An undefined variable is deliberately *not* in this enum: the engine
/// recovers from it locally with an error step and a NaN value, so it never
/// propagates as a fault.
#[derive(Debug, Clone)]
pub enum RuntimeError {
    /// Call to a function the runtime does not provide
    UndefinedFunction {
        name: String,
        location: SourceLocation,
    },

    /// Built-in called with the wrong number of arguments
    ArgumentCountMismatch {
        function: String,
        expected: usize,
        got: usize,
        location: SourceLocation,
    },
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::UndefinedFunction { name, location } => write!(
                f,
                "undefined function '{}' at line {}",
                name, location.line
            ),
            RuntimeError::ArgumentCountMismatch {
                function,
                expected,
                got,
                location,
            } => write!(
                f,
                "'{}' expects {} argument(s), got {} at line {}",
                function, expected, got, location.line
            ),
        }
    }
}

impl std::error::Error for RuntimeError {}
