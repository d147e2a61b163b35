//! JavaScript sketch front-end (Babel-flavored)
//!
//! Best-effort structural scan recognizing `const x = ...;` declarations and
//! `console.log(...)` calls, emitting a Babel-like Program tree.  The
//! execution trace is canned: one frame per log call, deliberately without a
//! correlated node.

use crate::ir::builder::GraphBuilder;
use crate::ir::{IrGraph, IrMetadata, IrType, SemanticRole};
use crate::language::{FrameAction, LanguageProcessor, TraceFrame};
use crate::parser::ast::NodeId;
use crate::parser::lexer::{tokenize, Token};
use futures::future::BoxFuture;
use futures::FutureExt;
use std::collections::BTreeMap;

pub struct JsProcessor;

const DEFAULT_SOURCE: &str = "const a = 10;
const b = 20;
const sum = a + b;
console.log(sum);";

impl LanguageProcessor for JsProcessor {
    fn name(&self) -> &'static str {
        "JavaScript"
    }

    fn description(&self) -> &'static str {
        "Visualizes JavaScript as a Babel-style AST via a structural scan."
    }

    fn default_source(&self) -> &'static str {
        DEFAULT_SOURCE
    }

    /// The shared lexer already covers this surface: `const` is a keyword,
    /// `.`, `(`, `)` are punctuation.
    fn tokenize(&self, source: &str) -> Vec<Token> {
        tokenize(source)
    }

    fn parse(&self, source: &str) -> IrGraph {
        let mut builder = GraphBuilder::new();
        let root = builder.add(
            None,
            "Program",
            IrType::Program,
            "Program",
            SemanticRole::Structure,
            IrMetadata {
                scope: Some("module".to_string()),
                ..IrMetadata::default()
            },
        );
        builder.graph.root = root;

        for line in source.lines().map(str::trim) {
            if line.starts_with("const ") && line.contains('=') {
                const_declaration(&mut builder, root, line);
            } else if line.contains("console.log") {
                log_call(&mut builder, root, line);
            }
        }

        builder.graph
    }

    fn execute(&self, _source: &str) -> BoxFuture<'static, Vec<TraceFrame>> {
        // Canned trace matching the default source: one frame per log call,
        // no correlated node.
        let frames = vec![TraceFrame {
            id: "exec-0".to_string(),
            action: FrameAction::Compute,
            message: "console.log: 30".to_string(),
            node_id: None,
            scope_snapshot: BTreeMap::new(),
        }];
        futures::future::ready(frames).boxed()
    }
}

/// `const <name> = <expr>;`
fn const_declaration(builder: &mut GraphBuilder, root: NodeId, line: &str) {
    let rest = &line["const ".len()..];
    let Some((name_part, expr_part)) = rest.split_once('=') else {
        return;
    };
    let name = name_part.trim();
    let expr = expr_part.trim().trim_end_matches(';').trim();

    let declaration = builder.add(
        Some(root),
        "VariableDeclaration",
        IrType::Variable,
        &format!("const {}", name),
        SemanticRole::Definition,
        IrMetadata {
            data_type: Some("any".to_string()),
            scope: Some("module".to_string()),
            ..IrMetadata::default()
        },
    );
    builder.add(
        Some(declaration),
        "Identifier",
        IrType::Identifier,
        name,
        SemanticRole::Definition,
        IrMetadata::default(),
    );

    if let Some((left, right)) = expr.split_once('+') {
        let operator = builder.add(
            Some(declaration),
            "BinaryExpression",
            IrType::Expression,
            "+",
            SemanticRole::Operator,
            IrMetadata::default(),
        );
        for operand in [left.trim(), right.trim()] {
            builder.add(
                Some(operator),
                "Identifier",
                IrType::Reference,
                operand,
                SemanticRole::Usage,
                IrMetadata::default(),
            );
        }
    } else {
        builder.add(
            Some(declaration),
            "NumericLiteral",
            IrType::Literal,
            expr,
            SemanticRole::Literal,
            IrMetadata {
                value: Some(expr.to_string()),
                ..IrMetadata::default()
            },
        );
    }
}

/// `console.log(<arg>);`
fn log_call(builder: &mut GraphBuilder, root: NodeId, line: &str) {
    let call = builder.add(
        Some(root),
        "CallExpression",
        IrType::Call,
        "console.log",
        SemanticRole::Call,
        IrMetadata::default(),
    );
    builder.add(
        Some(call),
        "MemberExpression",
        IrType::Reference,
        "console.log",
        SemanticRole::Usage,
        IrMetadata::default(),
    );
    if let Some(open) = line.find('(') {
        if let Some(close) = line.rfind(')') {
            if close > open {
                builder.add(
                    Some(call),
                    "Identifier",
                    IrType::Reference,
                    line[open + 1..close].trim(),
                    SemanticRole::Usage,
                    IrMetadata::default(),
                );
            }
        }
    }
}
