//! # Introduction
//!
//! tracelens turns source text into the inspectable data structures a
//! rendering layer needs to animate a compiler: a token stream, an
//! intermediate-representation graph, a deterministic node layout, and a
//! step-by-step execution trace.  Every artifact carries a stable identity
//! so that a character range, a token, a graph node, and a trace step can be
//! correlated on screen.
//!
//! ## Execution pipeline
//!
//! ```text
//! Source → Lexer → Parser → AST → IR Graph → Layout
//!                             └→ Interpreter → Trace
//! ```
//!
//! 1. [`parser`]: tokenises mini-language source and builds an AST.
//! 2. [`interpreter`]: walks the AST, appending an
//!    [`interpreter::trace::ExecutionStep`] with a scope snapshot per action.
//! 3. [`ir`]: the language-agnostic graph model every front-end emits, plus
//!    the mini language's AST → IR lowering.
//! 4. [`layout`]: breadth-first leveling that assigns each graph node a
//!    deterministic position.
//! 5. [`language`]: the [`language::LanguageProcessor`] contract and the
//!    registered front-ends (mini plus C++, Java, and JavaScript sketches).
//! 6. [`pipeline`]: caller-owned orchestration: selected language, held
//!    source, and one full run per source change.
//!
//! ## Resilience
//!
//! The pipeline runs on every keystroke of a source that is usually
//! mid-edit, so no stage is allowed to fail the process: the lexer skips
//! unknown characters, the parser degrades to an empty program, runtime
//! faults become error-level trace steps, and a front-end that cannot
//! process its input returns empty results.

pub mod interpreter;
pub mod ir;
pub mod language;
pub mod layout;
pub mod parser;
pub mod pipeline;
