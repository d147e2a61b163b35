// Tree-walking trace generator for the mini language

use crate::interpreter::errors::RuntimeError;
use crate::interpreter::trace::{format_number, ExecutionStep, StepLevel};
use crate::parser::ast::{AstNode, NodeId, Program};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// Execute a program and return its trace.
///
/// Total function: a runtime fault becomes the final error step of the
/// trace rather than an `Err`, and an undefined variable is recovered
/// locally without aborting the run.
pub fn execute(program: &Program) -> Vec<ExecutionStep> {
    let mut interpreter = Interpreter::new();
    interpreter.run(program);
    interpreter.steps
}

/// The interpreter owns one run's scope and step log.
///
/// Values are `f64` with IEEE-754 semantics throughout: division by zero
/// yields ±∞/NaN, and an undefined variable reads as NaN so the miss stays
/// visible in downstream arithmetic.
struct Interpreter {
    /// Flat variable-binding map, global to this run
    scope: FxHashMap<String, f64>,

    /// Append-only trace
    steps: Vec<ExecutionStep>,

    /// Next step id, monotonic per run
    next_step: usize,
}

impl Interpreter {
    fn new() -> Self {
        Interpreter {
            scope: FxHashMap::default(),
            steps: Vec::new(),
            next_step: 0,
        }
    }

    fn run(&mut self, program: &Program) {
        self.log("Starting Program Execution", StepLevel::Info, None, None);

        for statement in &program.body {
            if let Err(fault) = self.evaluate(statement) {
                // Single top-level catch: keep the partial trace, append one
                // error step, and stop.
                self.log(
                    &format!("Runtime Error: {}", fault),
                    StepLevel::Error,
                    None,
                    None,
                );
                return;
            }
        }

        self.log("Program Execution Finished", StepLevel::Info, None, None);
    }

    fn evaluate(&mut self, node: &AstNode) -> Result<f64, RuntimeError> {
        match node {
            AstNode::VarDecl { id, name, init, .. } => {
                self.log(
                    &format!("Declaring variable '{}'", name),
                    StepLevel::Info,
                    None,
                    Some(*id),
                );
                let value = self.evaluate(init)?;
                self.scope.insert(name.clone(), value);
                self.log(
                    &format!(
                        "Initialized '{}' to {}",
                        name,
                        format_number(value)
                    ),
                    StepLevel::Result,
                    None,
                    Some(*id),
                );
                Ok(value)
            }

            AstNode::BinaryOp {
                id,
                op,
                left,
                right,
                ..
            } => {
                // Eager, left before right.
                let lhs = self.evaluate(left)?;
                let rhs = self.evaluate(right)?;
                self.log(
                    &format!(
                        "Evaluating: {} {} {}",
                        format_number(lhs),
                        op,
                        format_number(rhs)
                    ),
                    StepLevel::Info,
                    None,
                    Some(*id),
                );
                Ok(op.apply(lhs, rhs))
            }

            AstNode::NumberLiteral { value, .. } => Ok(*value),

            AstNode::Variable { id, name, .. } => {
                match self.scope.get(name) {
                    Some(value) => Ok(*value),
                    None => {
                        // Recovered locally: log and keep evaluating.
                        self.log(
                            &format!("Error: Variable '{}' not defined", name),
                            StepLevel::Error,
                            None,
                            Some(*id),
                        );
                        Ok(f64::NAN)
                    }
                }
            }

            AstNode::Call {
                id,
                callee,
                args,
                location,
            } => {
                if callee != "print" {
                    return Err(RuntimeError::UndefinedFunction {
                        name: callee.clone(),
                        location: *location,
                    });
                }
                if args.len() != 1 {
                    return Err(RuntimeError::ArgumentCountMismatch {
                        function: callee.clone(),
                        expected: 1,
                        got: args.len(),
                        location: *location,
                    });
                }

                let value = self.evaluate(&args[0])?;
                let rendered = format_number(value);
                self.log(
                    &format!("Print Output: {}", rendered),
                    StepLevel::Result,
                    Some(rendered),
                    Some(*id),
                );
                Ok(value)
            }
        }
    }

    /// Append one step carrying a copy of the current scope.
    fn log(
        &mut self,
        message: &str,
        level: StepLevel,
        output: Option<String>,
        node_id: Option<NodeId>,
    ) {
        let snapshot: BTreeMap<String, f64> = self
            .scope
            .iter()
            .map(|(name, value)| (name.clone(), *value))
            .collect();

        self.steps.push(ExecutionStep {
            id: self.next_step,
            message: message.to_string(),
            scope: snapshot,
            level,
            output,
            node_id,
        });
        self.next_step += 1;
    }
}
