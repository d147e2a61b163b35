//! AST → IR lowering for the mini language
//!
//! IR node ids equal AST node ids, so a trace step that references an AST
//! node highlights the matching graph node without any translation table.

use crate::ir::{IrGraph, IrMetadata, IrNode, IrType, SemanticRole};
use crate::parser::ast::{AstNode, Program};

/// Lower a parsed program into the visualization graph.
pub fn lower(program: &Program) -> IrGraph {
    let mut graph = IrGraph {
        root: program.id,
        ..IrGraph::default()
    };

    graph.insert(IrNode {
        id: program.id,
        node_type: "Program".to_string(),
        ir_type: IrType::Program,
        label: "Program".to_string(),
        children: program.body.iter().map(|node| node.id()).collect(),
        role: SemanticRole::Structure,
        metadata: IrMetadata {
            scope: Some("global".to_string()),
            ..IrMetadata::default()
        },
    });

    for statement in &program.body {
        lower_node(statement, &mut graph);
    }

    graph
}

fn lower_node(node: &AstNode, graph: &mut IrGraph) {
    match node {
        AstNode::VarDecl { id, name, init, .. } => {
            graph.insert(IrNode {
                id: *id,
                node_type: "VariableDeclaration".to_string(),
                ir_type: IrType::Variable,
                label: format!("let {}", name),
                children: vec![init.id()],
                role: SemanticRole::Definition,
                metadata: IrMetadata {
                    data_type: Some("number".to_string()),
                    scope: Some("global".to_string()),
                    lvalue: Some(true),
                    ..IrMetadata::default()
                },
            });
            lower_node(init, graph);
        }

        AstNode::BinaryOp {
            id,
            op,
            left,
            right,
            ..
        } => {
            graph.insert(IrNode {
                id: *id,
                node_type: "BinaryExpression".to_string(),
                ir_type: IrType::Expression,
                label: op.as_str().to_string(),
                children: vec![left.id(), right.id()],
                role: SemanticRole::Operator,
                metadata: IrMetadata {
                    data_type: Some("number".to_string()),
                    ..IrMetadata::default()
                },
            });
            lower_node(left, graph);
            lower_node(right, graph);
        }

        AstNode::NumberLiteral { id, raw, .. } => {
            graph.insert(IrNode {
                id: *id,
                node_type: "Literal".to_string(),
                ir_type: IrType::Literal,
                label: raw.clone(),
                children: Vec::new(),
                role: SemanticRole::Literal,
                metadata: IrMetadata {
                    data_type: Some("number".to_string()),
                    value: Some(raw.clone()),
                    ..IrMetadata::default()
                },
            });
        }

        AstNode::Variable { id, name, .. } => {
            graph.insert(IrNode {
                id: *id,
                node_type: "Identifier".to_string(),
                ir_type: IrType::Reference,
                label: name.clone(),
                children: Vec::new(),
                role: SemanticRole::Usage,
                metadata: IrMetadata::default(),
            });
        }

        AstNode::Call {
            id, callee, args, ..
        } => {
            graph.insert(IrNode {
                id: *id,
                node_type: "CallExpression".to_string(),
                ir_type: IrType::Call,
                label: callee.clone(),
                children: args.iter().map(|arg| arg.id()).collect(),
                role: SemanticRole::Call,
                metadata: IrMetadata::default(),
            });
            for arg in args {
                lower_node(arg, graph);
            }
        }
    }
}
