//! The mini-language front-end: the one processor backed by a real lexer,
//! parser, and interpreter.

use crate::interpreter::engine::execute;
use crate::interpreter::trace::{format_number, ExecutionStep, StepLevel};
use crate::ir::lower::lower;
use crate::ir::IrGraph;
use crate::language::{FrameAction, LanguageProcessor, TraceFrame};
use crate::parser::lexer::{tokenize, Token};
use crate::parser::parser::parse;
use futures::future::BoxFuture;
use futures::FutureExt;

pub struct MiniProcessor;

const DEFAULT_SOURCE: &str = "let a = 10;
let b = 20;
let sum = a + b * 2;
print sum;";

impl LanguageProcessor for MiniProcessor {
    fn name(&self) -> &'static str {
        "Mini"
    }

    fn description(&self) -> &'static str {
        "A minimal language with a real tokenizer, recursive-descent parser, \
         and step-logging interpreter."
    }

    fn default_source(&self) -> &'static str {
        DEFAULT_SOURCE
    }

    fn tokenize(&self, source: &str) -> Vec<Token> {
        tokenize(source)
    }

    fn parse(&self, source: &str) -> IrGraph {
        lower(&parse(&tokenize(source)))
    }

    fn execute(&self, source: &str) -> BoxFuture<'static, Vec<TraceFrame>> {
        // The evaluation itself is synchronous; only the contract is async.
        let steps = execute(&parse(&tokenize(source)));
        let frames = steps.iter().map(step_to_frame).collect::<Vec<_>>();
        futures::future::ready(frames).boxed()
    }
}

fn step_to_frame(step: &ExecutionStep) -> TraceFrame {
    let action = match step.level {
        StepLevel::Error => FrameAction::Error,
        _ if step.output.is_some() => FrameAction::Emit,
        _ if step.message == "Starting Program Execution" => FrameAction::Enter,
        _ if step.message == "Program Execution Finished" => FrameAction::Leave,
        _ => FrameAction::Compute,
    };

    TraceFrame {
        id: format!("step-{}", step.id),
        action,
        message: step.message.clone(),
        node_id: step.node_id,
        scope_snapshot: step
            .scope
            .iter()
            .map(|(name, value)| (name.clone(), format_number(*value)))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_default_source_end_to_end() {
        let processor = MiniProcessor;

        let tokens = processor.tokenize(processor.default_source());
        assert!(tokens.len() > 1);

        let graph = processor.parse(processor.default_source());
        assert!(graph.is_tree());

        let frames = block_on(processor.execute(processor.default_source()));
        let emitted = frames
            .iter()
            .rev()
            .find(|f| f.action == FrameAction::Emit)
            .expect("no emit frame");
        assert_eq!(emitted.message, "Print Output: 50");
    }

    #[test]
    fn test_frame_actions_bracket_the_run() {
        let frames =
            block_on(MiniProcessor.execute("let a = 1;\nprint a;"));

        assert_eq!(frames.first().unwrap().action, FrameAction::Enter);
        assert_eq!(frames.last().unwrap().action, FrameAction::Leave);
    }

    #[test]
    fn test_scope_snapshot_rendering() {
        let frames = block_on(MiniProcessor.execute("let a = 10;"));

        let bound = frames
            .iter()
            .find(|f| f.scope_snapshot.contains_key("a"))
            .unwrap();
        assert_eq!(bound.scope_snapshot.get("a").map(String::as_str), Some("10"));
    }

    #[test]
    fn test_malformed_source_still_produces_frames() {
        // Empty program still traces its start/finish markers.
        let frames = block_on(MiniProcessor.execute("let = ;"));
        assert_eq!(frames.len(), 2);
    }
}
