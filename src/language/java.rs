//! Java sketch front-end (JVM-flavored)
//!
//! Best-effort structural scan of class/method shapes plus `int x = ...;`
//! declarations and `System.out.println` invocations.  Tokenization is not
//! attempted and the execution trace is canned.

use crate::ir::{IrMetadata, IrGraph, IrType, SemanticRole};
use crate::ir::builder::GraphBuilder;
use crate::language::{FrameAction, LanguageProcessor, TraceFrame};
use crate::parser::ast::NodeId;
use crate::parser::lexer::Token;
use futures::future::BoxFuture;
use futures::FutureExt;
use std::collections::BTreeMap;

pub struct JavaProcessor;

const DEFAULT_SOURCE: &str = "public class Main {
    public static void main(String[] args) {
        int a = 10;
        int b = 20;
        int sum = a + b;
        System.out.println(sum);
    }
}";

impl LanguageProcessor for JavaProcessor {
    fn name(&self) -> &'static str {
        "Java (JVM-Style)"
    }

    fn description(&self) -> &'static str {
        "Visualizes Java as JVM compilation units with class/method scopes."
    }

    fn default_source(&self) -> &'static str {
        DEFAULT_SOURCE
    }

    fn tokenize(&self, _source: &str) -> Vec<Token> {
        // This front-end cannot lex Java exactly; best effort is nothing.
        Vec::new()
    }

    fn parse(&self, source: &str) -> IrGraph {
        let mut builder = GraphBuilder::new();
        let root = builder.add(
            None,
            "CompilationUnit",
            IrType::Program,
            "Main.java",
            SemanticRole::Structure,
            IrMetadata::default(),
        );
        builder.graph.root = root;

        if !source.contains("class Main") {
            return builder.graph;
        }

        let class = builder.add(
            Some(root),
            "ClassDeclaration",
            IrType::Class,
            "Main",
            SemanticRole::Definition,
            IrMetadata {
                modifiers: vec!["public".to_string()],
                ..IrMetadata::default()
            },
        );

        if !source.contains("main") {
            return builder.graph;
        }

        let method = builder.add(
            Some(class),
            "MethodDeclaration",
            IrType::Function,
            "main",
            SemanticRole::Definition,
            IrMetadata {
                modifiers: vec!["public".to_string(), "static".to_string()],
                data_type: Some("void".to_string()),
                ..IrMetadata::default()
            },
        );
        builder.add(
            Some(method),
            "ReturnType",
            IrType::Type,
            "void",
            SemanticRole::Keyword,
            IrMetadata::default(),
        );
        builder.add(
            Some(method),
            "Parameter",
            IrType::Variable,
            "args",
            SemanticRole::Definition,
            IrMetadata {
                data_type: Some("String[]".to_string()),
                ..IrMetadata::default()
            },
        );
        let block = builder.add(
            Some(method),
            "BlockStatement",
            IrType::Block,
            "{}",
            SemanticRole::Structure,
            IrMetadata::default(),
        );

        for line in source.lines().map(str::trim) {
            if line.starts_with("int ") && line.contains('=') {
                java_declaration(&mut builder, block, line);
            } else if line.contains("System.out.println") {
                println_invocation(&mut builder, block, line);
            }
        }

        builder.graph
    }

    fn execute(&self, _source: &str) -> BoxFuture<'static, Vec<TraceFrame>> {
        let frames = vec![
            frame("j1", FrameAction::Enter, "Class Load: Main", Some(1), &[]),
            frame("j2", FrameAction::Enter, "Invoke static main", Some(2), &[]),
            frame("j3", FrameAction::Compute, "int a = 10", Some(6), &[("a", "10")]),
            frame("j4", FrameAction::Compute, "int b = 20", Some(8), &[("a", "10"), ("b", "20")]),
            frame("j5", FrameAction::Emit, "System.out.println", Some(14), &[("sum", "30")]),
        ];
        futures::future::ready(frames).boxed()
    }
}

/// `int <name> = <expr>;`, JVM spelling of the same shape the C++ sketch
/// recognizes.
fn java_declaration(builder: &mut GraphBuilder, block: NodeId, line: &str) {
    let rest = &line["int ".len()..];
    let Some((name_part, expr_part)) = rest.split_once('=') else {
        return;
    };
    let name = name_part.trim();
    let expr = expr_part.trim().trim_end_matches(';').trim();

    let declaration = builder.add(
        Some(block),
        "VariableDeclaration",
        IrType::Variable,
        &format!("int {}", name),
        SemanticRole::Definition,
        IrMetadata {
            data_type: Some("int".to_string()),
            ..IrMetadata::default()
        },
    );

    if let Some((left, right)) = expr.split_once('+') {
        let operator = builder.add(
            Some(declaration),
            "InfixExpression",
            IrType::Expression,
            "+",
            SemanticRole::Operator,
            IrMetadata::default(),
        );
        for operand in [left.trim(), right.trim()] {
            builder.add(
                Some(operator),
                "SimpleName",
                IrType::Reference,
                operand,
                SemanticRole::Usage,
                IrMetadata::default(),
            );
        }
    } else {
        builder.add(
            Some(declaration),
            "NumberLiteral",
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

/// `System.out.println(<arg>);`
fn println_invocation(builder: &mut GraphBuilder, block: NodeId, line: &str) {
    let call = builder.add(
        Some(block),
        "MethodInvocation",
        IrType::Call,
        "println",
        SemanticRole::Call,
        IrMetadata::default(),
    );
    builder.add(
        Some(call),
        "QualifiedName",
        IrType::Reference,
        "System.out",
        SemanticRole::Usage,
        IrMetadata::default(),
    );
    if let Some(open) = line.find('(') {
        if let Some(close) = line.rfind(')') {
            if close > open {
                builder.add(
                    Some(call),
                    "SimpleName",
                    IrType::Reference,
                    line[open + 1..close].trim(),
                    SemanticRole::Usage,
                    IrMetadata::default(),
                );
            }
        }
    }
}

fn frame(
    id: &str,
    action: FrameAction,
    message: &str,
    node_id: Option<NodeId>,
    scope: &[(&str, &str)],
) -> TraceFrame {
    TraceFrame {
        id: id.to_string(),
        action,
        message: message.to_string(),
        node_id,
        scope_snapshot: scope
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect::<BTreeMap<_, _>>(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_source_graph_shape() {
        let graph = JavaProcessor.parse(DEFAULT_SOURCE);

        assert!(graph.is_tree());
        let root = graph.get(graph.root).unwrap();
        assert_eq!(root.node_type, "CompilationUnit");

        let class = graph.get(root.children[0]).unwrap();
        assert_eq!(class.label, "Main");
        assert_eq!(class.metadata.modifiers, vec!["public"]);

        let method = graph.get(class.children[0]).unwrap();
        assert_eq!(method.label, "main");
        // ReturnType, Parameter, BlockStatement
        assert_eq!(method.children.len(), 3);
    }

    #[test]
    fn test_block_contents() {
        let graph = JavaProcessor.parse(DEFAULT_SOURCE);

        let block = graph
            .nodes
            .values()
            .find(|n| n.node_type == "BlockStatement")
            .unwrap();
        // a, b, sum declarations plus one println invocation.
        assert_eq!(block.children.len(), 4);
    }

    #[test]
    fn test_no_class_yields_root_only() {
        let graph = JavaProcessor.parse("int a = 1;");

        assert_eq!(graph.len(), 1);
        assert!(graph.is_tree());
    }

    #[test]
    fn test_tokenize_is_best_effort_empty() {
        assert!(JavaProcessor.tokenize(DEFAULT_SOURCE).is_empty());
    }

    #[test]
    fn test_canned_trace_actions() {
        let frames =
            futures::executor::block_on(JavaProcessor.execute(DEFAULT_SOURCE));

        assert_eq!(frames.len(), 5);
        assert_eq!(frames[0].action, FrameAction::Enter);
        assert_eq!(frames.last().unwrap().action, FrameAction::Emit);
    }
}
