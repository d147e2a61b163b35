//! Pluggable language front-ends
//!
//! [`LanguageProcessor`] is the seam between any number of source languages
//! and the one shared visualization pipeline: every front-end turns source
//! text into tokens, an [`IrGraph`], and an asynchronous trace of
//! [`TraceFrame`]s.  Implementations:
//! - [`mini`]: the crate's own language, backed by the real lexer, parser,
//!   and interpreter.
//! - [`cpp`]: a Clang-flavored sketch using a best-effort structural scan
//!   and a canned trace.
//! - [`java`]: a JVM-flavored sketch, likewise best-effort.
//! - [`js`]: a Babel-flavored JavaScript sketch, likewise best-effort.
//!
//! Sketch front-ends are lossy by design; the one obligation they cannot
//! relax is the IR tree/ownership invariant.  A front-end that cannot
//! process its input returns empty results rather than failing, so the
//! orchestration layer never has to recover from a front-end fault.

pub mod cpp;
pub mod java;
pub mod js;
pub mod mini;

use crate::ir::IrGraph;
use crate::parser::ast::NodeId;
use crate::parser::lexer::Token;
use futures::future::BoxFuture;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::fmt;

/// Action tag on a front-end trace frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameAction {
    /// Entering a program, class, or function
    Enter,
    /// An evaluation or binding step
    Compute,
    /// A print-like side effect
    Emit,
    /// Leaving a scope / finishing the run
    Leave,
    Error,
}

impl fmt::Display for FrameAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameAction::Enter => write!(f, "enter"),
            FrameAction::Compute => write!(f, "compute"),
            FrameAction::Emit => write!(f, "emit"),
            FrameAction::Leave => write!(f, "leave"),
            FrameAction::Error => write!(f, "error"),
        }
    }
}

/// One step of a front-end execution trace.
///
/// The common denominator across front-ends: an identifier, a message, an
/// action tag, and optionally a correlated IR node and a scope snapshot.
#[derive(Debug, Clone)]
pub struct TraceFrame {
    pub id: String,
    pub action: FrameAction,
    pub message: String,
    pub node_id: Option<NodeId>,
    pub scope_snapshot: BTreeMap<String, String>,
}

/// The contract every supported source language implements.
pub trait LanguageProcessor: Send + Sync {
    /// Display name, e.g. "C++ (Clang-Like)"
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Starter source shown when this language is selected
    fn default_source(&self) -> &'static str;

    /// Best-effort tokenization; may be empty if the language cannot be
    /// lexed exactly.
    fn tokenize(&self, source: &str) -> Vec<Token>;

    /// Build the visualization graph.  Must satisfy [`IrGraph::is_tree`];
    /// a front-end that cannot parse degrades to [`IrGraph::empty`].
    fn parse(&self, source: &str) -> IrGraph;

    /// Produce the execution trace.  May suspend; may be canned.
    fn execute(&self, source: &str) -> BoxFuture<'static, Vec<TraceFrame>>;
}

/// The closed set of registered front-ends, keyed by language key.
pub fn registry() -> FxHashMap<&'static str, Box<dyn LanguageProcessor>> {
    let mut processors: FxHashMap<&'static str, Box<dyn LanguageProcessor>> =
        FxHashMap::default();
    processors.insert("mini", Box::new(mini::MiniProcessor));
    processors.insert("cpp", Box::new(cpp::CppProcessor));
    processors.insert("java", Box::new(java::JavaProcessor));
    processors.insert("js", Box::new(js::JsProcessor));
    processors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_keys() {
        let processors = registry();
        let mut keys: Vec<_> = processors.keys().copied().collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["cpp", "java", "js", "mini"]);
    }

    #[test]
    fn test_every_front_end_emits_a_tree_for_its_default_source() {
        for (key, processor) in registry() {
            let graph = processor.parse(processor.default_source());
            assert!(graph.is_tree(), "front-end '{}' broke the IR contract", key);
            assert!(!graph.is_empty(), "front-end '{}' emitted no nodes", key);
        }
    }

    #[test]
    fn test_every_front_end_trace_carries_ids_and_messages() {
        for (key, processor) in registry() {
            let frames = futures::executor::block_on(
                processor.execute(processor.default_source()),
            );
            assert!(!frames.is_empty(), "front-end '{}' emitted no frames", key);
            for frame in &frames {
                assert!(!frame.id.is_empty());
                assert!(!frame.message.is_empty());
            }
        }
    }
}
