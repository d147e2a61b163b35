// Execution trace data model: ordered, append-only step records

use crate::parser::ast::NodeId;
use std::collections::BTreeMap;
use std::fmt;

/// Severity of one execution step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepLevel {
    Info,
    Result,
    Error,
}

impl fmt::Display for StepLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepLevel::Info => write!(f, "info"),
            StepLevel::Result => write!(f, "result"),
            StepLevel::Error => write!(f, "error"),
        }
    }
}

/// One entry of an execution trace.
///
/// `scope` is a copy of the variable bindings at the moment the step was
/// emitted; later mutation of the live scope never changes an already
/// emitted snapshot.  Stored as a `BTreeMap` so snapshot rendering is
/// deterministic.
#[derive(Debug, Clone)]
pub struct ExecutionStep {
    /// Monotonically increasing per run
    pub id: usize,
    pub message: String,
    pub scope: BTreeMap<String, f64>,
    pub level: StepLevel,
    /// Printed text for print-like side effects
    pub output: Option<String>,
    /// Correlated AST/IR node for highlighting
    pub node_id: Option<NodeId>,
}

/// Render a value the way the log display shows it: integral finite values
/// without a fractional part ("50", not "50.0").
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(50.0), "50");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }
}
