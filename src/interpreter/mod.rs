//! Mini-language execution engine
//!
//! This module provides the trace-generating evaluator:
//! - [`engine`]: tree-walking interpreter producing an ordered step log
//! - [`trace`]: the [`trace::ExecutionStep`] record and step severity levels
//! - [`errors`]: runtime fault types
//!
//! # Execution Model
//!
//! The interpreter walks the AST and appends an [`trace::ExecutionStep`] for
//! every observable action, each carrying a copied snapshot of the variable
//! bindings at that point.  One run owns one flat scope; nothing survives to
//! the next run.
//!
//! No fault is fatal: an undefined variable is recovered in place and any
//! other runtime fault is converted into the trace's final error step.

pub mod engine;
pub mod errors;
pub mod trace;
