//! C++ sketch front-end (Clang-flavored)
//!
//! Not a C++ parser: a best-effort structural scan that recognizes a few
//! top-level line shapes (`int x = ...;`, `std::cout << ...;`, `return ...;`)
//! and emits a Clang-like TranslationUnit tree.  The execution trace is
//! canned.  Lossy by design; only the IR tree invariant is binding.

use crate::ir::builder::GraphBuilder;
use crate::ir::{IrGraph, IrMetadata, IrType, SemanticRole};
use crate::language::{FrameAction, LanguageProcessor, TraceFrame};
use crate::parser::ast::NodeId;
use crate::parser::lexer::{Token, TokenId, TokenKind};
use futures::future::BoxFuture;
use futures::FutureExt;
use std::collections::BTreeMap;

pub struct CppProcessor;

const DEFAULT_SOURCE: &str = "#include <iostream>

int main() {
  int a = 10;
  int b = 20;
  int sum = a + b;
  std::cout << sum;
  return 0;
}";

impl LanguageProcessor for CppProcessor {
    fn name(&self) -> &'static str {
        "C++ (Clang-Like)"
    }

    fn description(&self) -> &'static str {
        "Visualizes C++ as a Clang TranslationUnit via a structural scan."
    }

    fn default_source(&self) -> &'static str {
        DEFAULT_SOURCE
    }

    /// Display-only tokenization: words, numbers, and single-character
    /// punctuation.  `::`-qualified names lex as one identifier.
    fn tokenize(&self, source: &str) -> Vec<Token> {
        let chars: Vec<char> = source.chars().collect();
        let mut tokens = Vec::new();
        let mut position = 0;
        let mut line = 1;
        let mut column = 1;

        while position < chars.len() {
            let ch = chars[position];
            if ch.is_whitespace() {
                if ch == '\n' {
                    line += 1;
                    column = 1;
                } else {
                    column += 1;
                }
                position += 1;
                continue;
            }

            let start = position;
            let start_column = column;
            let (kind, text) = if ch.is_ascii_alphabetic() || ch == '_' {
                let mut text = String::new();
                while position < chars.len()
                    && (chars[position].is_ascii_alphanumeric()
                        || chars[position] == '_'
                        || chars[position] == ':')
                {
                    text.push(chars[position]);
                    position += 1;
                    column += 1;
                }
                (TokenKind::Identifier, text)
            } else if ch.is_ascii_digit() {
                let mut text = String::new();
                while position < chars.len() && chars[position].is_ascii_digit()
                {
                    text.push(chars[position]);
                    position += 1;
                    column += 1;
                }
                (TokenKind::Number, text)
            } else {
                position += 1;
                column += 1;
                (TokenKind::Punctuation, ch.to_string())
            };

            tokens.push(Token {
                id: TokenId(start),
                kind,
                text,
                line,
                column: start_column,
            });
        }

        tokens.push(Token {
            id: TokenId(position),
            kind: TokenKind::Eof,
            text: String::new(),
            line,
            column,
        });
        tokens
    }

    fn parse(&self, source: &str) -> IrGraph {
        let mut builder = GraphBuilder::new();
        let root = builder.add(
            None,
            "TranslationUnit",
            IrType::Program,
            "TranslationUnit",
            SemanticRole::Structure,
            IrMetadata::default(),
        );
        builder.graph.root = root;

        if !source.contains("main") {
            return builder.graph;
        }

        let main = builder.add(
            Some(root),
            "FunctionDeclaration",
            IrType::Function,
            "main",
            SemanticRole::Definition,
            IrMetadata {
                data_type: Some("int".to_string()),
                ..IrMetadata::default()
            },
        );
        builder.add(
            Some(main),
            "ReturnType",
            IrType::Type,
            "int",
            SemanticRole::Keyword,
            IrMetadata::default(),
        );
        builder.add(
            Some(main),
            "ParameterList",
            IrType::List,
            "(void)",
            SemanticRole::Structure,
            IrMetadata::default(),
        );
        let body = builder.add(
            Some(main),
            "CompoundStatement",
            IrType::Block,
            "{}",
            SemanticRole::Structure,
            IrMetadata {
                scope: Some("function:main".to_string()),
                ..IrMetadata::default()
            },
        );

        for line in source.lines().map(str::trim) {
            if line.starts_with("int ") && line.contains('=') {
                declaration(&mut builder, body, line);
            } else if line.starts_with("std::cout") {
                cout_call(&mut builder, body, line);
            } else if line.starts_with("return") {
                return_statement(&mut builder, body, line);
            }
        }

        builder.graph
    }

    fn execute(&self, _source: &str) -> BoxFuture<'static, Vec<TraceFrame>> {
        // Canned trace matching the default source's graph.
        let frames = vec![
            frame("1", FrameAction::Enter, "Enter main()", Some(1), &[]),
            frame("2", FrameAction::Compute, "Allocating Stack Frame", Some(1), &[]),
            frame("3", FrameAction::Compute, "int a = 10", Some(6), &[("a", "10")]),
            frame("4", FrameAction::Compute, "int b = 20", Some(11), &[("a", "10"), ("b", "20")]),
            frame("5", FrameAction::Compute, "Resolving a + b", Some(19), &[("a", "10"), ("b", "20")]),
            frame("6", FrameAction::Compute, "int sum = 30", Some(16), &[("a", "10"), ("b", "20"), ("sum", "30")]),
            frame("7", FrameAction::Leave, "std::cout << 30", Some(22), &[]),
        ];
        futures::future::ready(frames).boxed()
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

/// `int <name> = <expr>;`
fn declaration(builder: &mut GraphBuilder, body: NodeId, line: &str) {
    let rest = &line["int ".len()..];
    let Some((name_part, expr_part)) = rest.split_once('=') else {
        return;
    };
    let name = name_part.trim();
    let expr = expr_part.trim().trim_end_matches(';').trim();

    let statement = builder.add(
        Some(body),
        "DeclarationStatement",
        IrType::Statement,
        "",
        SemanticRole::Structure,
        IrMetadata::default(),
    );
    let declaration = builder.add(
        Some(statement),
        "VarDecl",
        IrType::Variable,
        &format!("int {} = ...", name),
        SemanticRole::Definition,
        IrMetadata {
            data_type: Some("int".to_string()),
            lvalue: Some(true),
            ..IrMetadata::default()
        },
    );
    builder.add(
        Some(declaration),
        "Type",
        IrType::Type,
        "int",
        SemanticRole::Keyword,
        IrMetadata::default(),
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
            "BinaryOperator",
            IrType::Expression,
            "+",
            SemanticRole::Operator,
            IrMetadata {
                data_type: Some("int".to_string()),
                ..IrMetadata::default()
            },
        );
        for operand in [left.trim(), right.trim()] {
            builder.add(
                Some(operator),
                "DeclRefExpr",
                IrType::Reference,
                operand,
                SemanticRole::Usage,
                IrMetadata {
                    data_type: Some("int".to_string()),
                    lvalue: Some(false),
                    ..IrMetadata::default()
                },
            );
        }
    } else {
        builder.add(
            Some(declaration),
            "IntegerLiteral",
            IrType::Literal,
            expr,
            SemanticRole::Literal,
            IrMetadata {
                data_type: Some("int".to_string()),
                value: Some(expr.to_string()),
                ..IrMetadata::default()
            },
        );
    }
}

/// `std::cout << <expr>;`
fn cout_call(builder: &mut GraphBuilder, body: NodeId, line: &str) {
    let call = builder.add(
        Some(body),
        "CallExpr",
        IrType::Call,
        "operator<<",
        SemanticRole::Call,
        IrMetadata::default(),
    );
    builder.add(
        Some(call),
        "Function",
        IrType::Identifier,
        "std::cout",
        SemanticRole::Usage,
        IrMetadata::default(),
    );
    if let Some(argument) = line.split("<<").nth(1) {
        let argument = argument.trim().trim_end_matches(';').trim();
        builder.add(
            Some(call),
            "DeclRefExpr",
            IrType::Reference,
            argument,
            SemanticRole::Usage,
            IrMetadata {
                data_type: Some("int".to_string()),
                ..IrMetadata::default()
            },
        );
    }
}

/// `return <value>;`
fn return_statement(builder: &mut GraphBuilder, body: NodeId, line: &str) {
    let value = line
        .trim_start_matches("return")
        .trim()
        .trim_end_matches(';')
        .trim();
    let value = if value.is_empty() { "0" } else { value };

    let statement = builder.add(
        Some(body),
        "ReturnStmt",
        IrType::Statement,
        "return",
        SemanticRole::Keyword,
        IrMetadata::default(),
    );
    builder.add(
        Some(statement),
        "IntegerLiteral",
        IrType::Literal,
        value,
        SemanticRole::Literal,
        IrMetadata {
            value: Some(value.to_string()),
            ..IrMetadata::default()
        },
    );
}
