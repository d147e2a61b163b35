//! Pipeline orchestration
//!
//! Owns the only process-wide state the core has: the selected language key
//! and the held source text, both replaced wholesale on every change.  One
//! [`Pipeline::run`] is one full invocation: tokens, IR graph, layout, and
//! trace are produced fresh and nothing survives to the next run.
//!
//! Because a front-end's `execute` may suspend, a newer run can start before
//! an older one resolves.  Runs carry a monotonically increasing sequence
//! number; [`Pipeline::is_current`] lets a caller discard stale resolutions
//! (last request wins).

use crate::ir::IrGraph;
use crate::language::{registry, LanguageProcessor, TraceFrame};
use crate::layout::{layout, Layout};
use crate::parser::lexer::Token;
use rustc_hash::FxHashMap;

/// Default front-end when the pipeline starts.
pub const DEFAULT_LANGUAGE: &str = "mini";

/// Everything one pipeline invocation produced.
#[derive(Debug)]
pub struct PipelineRun {
    /// Sequence number of this run; compare with [`Pipeline::is_current`]
    pub seq: u64,
    pub tokens: Vec<Token>,
    pub graph: IrGraph,
    pub layout: Layout,
    pub frames: Vec<TraceFrame>,
}

/// Caller-owned orchestration state over the registered front-ends.
pub struct Pipeline {
    processors: FxHashMap<&'static str, Box<dyn LanguageProcessor>>,
    language: &'static str,
    source: String,
    seq: u64,
}

impl Pipeline {
    pub fn new() -> Self {
        let processors = registry();
        let source = processors[DEFAULT_LANGUAGE].default_source().to_string();
        Pipeline {
            processors,
            language: DEFAULT_LANGUAGE,
            source,
            seq: 0,
        }
    }

    pub fn language(&self) -> &'static str {
        self.language
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Registered language keys, sorted for stable display.
    pub fn languages(&self) -> Vec<&'static str> {
        let mut keys: Vec<_> = self.processors.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// Switch the active front-end, resetting the source to that language's
    /// default.  Returns false (and changes nothing) for an unknown key.
    pub fn set_language(&mut self, key: &str) -> bool {
        let Some((&key, processor)) = self.processors.get_key_value(key) else {
            return false;
        };
        self.language = key;
        self.source = processor.default_source().to_string();
        true
    }

    /// Replace the held source text wholesale.
    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = source.into();
    }

    /// Run one full invocation: tokenize, parse, layout, execute.
    pub async fn run(&mut self) -> PipelineRun {
        self.seq += 1;
        let seq = self.seq;

        let processor = &self.processors[self.language];
        let tokens = processor.tokenize(&self.source);
        let graph = processor.parse(&self.source);
        let placed = layout(&graph);
        let frames = processor.execute(&self.source).await;

        PipelineRun {
            seq,
            tokens,
            graph,
            layout: placed,
            frames,
        }
    }

    /// True if `seq` belongs to the most recently started run.  A resolved
    /// run failing this check is stale and should be dropped.
    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.seq
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_starts_with_default_language_and_source() {
        let pipeline = Pipeline::new();

        assert_eq!(pipeline.language(), "mini");
        assert!(pipeline.source().contains("print sum;"));
    }

    #[test]
    fn test_language_switch_resets_source() {
        let mut pipeline = Pipeline::new();
        pipeline.set_source("let edited = 1;");

        assert!(pipeline.set_language("cpp"));
        assert_eq!(pipeline.language(), "cpp");
        assert!(pipeline.source().contains("std::cout"));
    }

    #[test]
    fn test_unknown_language_rejected() {
        let mut pipeline = Pipeline::new();
        let source_before = pipeline.source().to_string();

        assert!(!pipeline.set_language("cobol"));
        assert_eq!(pipeline.language(), "mini");
        assert_eq!(pipeline.source(), source_before);
    }

    #[test]
    fn test_run_produces_all_stages() {
        let mut pipeline = Pipeline::new();
        let run = block_on(pipeline.run());

        assert!(!run.tokens.is_empty());
        assert!(run.graph.is_tree());
        assert_eq!(run.layout.nodes.len(), run.graph.len());
        assert!(!run.frames.is_empty());
    }

    #[test]
    fn test_last_request_wins() {
        let mut pipeline = Pipeline::new();

        let first = block_on(pipeline.run());
        pipeline.set_source("print 1;");
        let second = block_on(pipeline.run());

        assert!(!pipeline.is_current(first.seq));
        assert!(pipeline.is_current(second.seq));
    }
}
