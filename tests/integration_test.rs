//! End-to-end tests over the whole mini-language pipeline:
//! source → tokens → AST → IR graph → layout, and source → trace.

use tracelens::interpreter::engine::execute;
use tracelens::interpreter::trace::StepLevel;
use tracelens::ir::lower::lower;
use tracelens::layout::{layout, layout_with_gaps};
use tracelens::parser::lexer::{tokenize, TokenKind};
use tracelens::parser::parser::parse;

const SCENARIO: &str = "let a = 10;\nlet b = 20;\nlet sum = a + b * 2;\nprint sum;";

#[test]
fn test_end_to_end_scenario() {
    let tokens = tokenize(SCENARIO);
    assert!(!tokens.is_empty());
    assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);

    let program = parse(&tokens);
    assert_eq!(program.body.len(), 4);

    let steps = execute(&program);
    let final_result = steps
        .iter()
        .rev()
        .find(|s| s.level == StepLevel::Result)
        .expect("no result-level step");
    assert_eq!(final_result.output.as_deref(), Some("50"));
}

#[test]
fn test_tokenize_total_for_arbitrary_text() {
    for source in [
        "",
        "§±€ unicode soup 😀",
        "let let let ;;;",
        "((((((((",
        "1.2.3.4.5",
        "\n\n\n\n",
    ] {
        let tokens = tokenize(source);
        assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
    }
}

#[test]
fn test_token_positions_monotonic() {
    let tokens = tokenize(SCENARIO);
    for pair in tokens.windows(2) {
        assert!(
            (pair[0].line, pair[0].column) <= (pair[1].line, pair[1].column)
        );
    }
}

#[test]
fn test_parse_never_raises_past_its_boundary() {
    for source in [
        "let",
        "let a",
        "let a =",
        "print",
        "(1 + 2",
        ");;;(",
        "= = =",
    ] {
        // Must return a Program value, not panic.
        let program = parse(&tokenize(source));
        assert!(program.body.is_empty());
    }
}

#[test]
fn test_left_associativity_evaluates_to_five() {
    let steps = execute(&parse(&tokenize("print 10 - 3 - 2;")));
    let output = steps
        .iter()
        .find_map(|s| s.output.as_deref())
        .expect("no print output");
    assert_eq!(output, "5");
}

#[test]
fn test_precedence_binds_multiplication_first() {
    let steps = execute(&parse(&tokenize("let sum = 2 + 3 * 4;\nprint sum;")));
    let output = steps.iter().find_map(|s| s.output.as_deref()).unwrap();
    assert_eq!(output, "14");
}

#[test]
fn test_scope_snapshot_is_not_retroactively_mutated() {
    let steps = execute(&parse(&tokenize("let a = 10;\nlet b = 20;")));

    let snapshot_after_a = steps
        .iter()
        .find(|s| s.message == "Initialized 'a' to 10")
        .expect("missing step")
        .scope
        .clone();

    // b was bound after this snapshot was taken; the snapshot must still
    // show only {a: 10}.
    assert_eq!(snapshot_after_a.len(), 1);
    assert_eq!(snapshot_after_a.get("a"), Some(&10.0));
}

#[test]
fn test_unknown_identifier_single_error_step_no_abort() {
    let steps = execute(&parse(&tokenize("print x;")));

    let errors: Vec<_> = steps
        .iter()
        .filter(|s| s.level == StepLevel::Error)
        .collect();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("'x'"));
    assert_eq!(steps.last().unwrap().message, "Program Execution Finished");
}

#[test]
fn test_layout_determinism_bit_identical() {
    let graph = lower(&parse(&tokenize(SCENARIO)));

    let first = layout(&graph);
    let second = layout(&graph);
    assert_eq!(first.nodes, second.nodes);
    assert_eq!(first.edges, second.edges);

    let custom_a = layout_with_gaps(&graph, 100.0, 80.0);
    let custom_b = layout_with_gaps(&graph, 100.0, 80.0);
    assert_eq!(custom_a.nodes, custom_b.nodes);
}

#[test]
fn test_layout_covers_whole_tree() {
    let graph = lower(&parse(&tokenize(SCENARIO)));
    let result = layout(&graph);

    assert_eq!(result.nodes.len(), graph.len());
    // Every non-root node has exactly one incoming edge.
    assert_eq!(result.edges.len(), graph.len() - 1);
}

#[test]
fn test_trace_correlates_to_graph_nodes() {
    let program = parse(&tokenize(SCENARIO));
    let graph = lower(&program);
    let steps = execute(&program);

    for step in steps.iter().filter(|s| s.node_id.is_some()) {
        let node_id = step.node_id.unwrap();
        assert!(
            graph.get(node_id).is_some(),
            "step {} references unknown node {}",
            step.id,
            node_id
        );
    }
}

#[test]
fn test_fresh_state_per_run() {
    let program = parse(&tokenize("let a = 1;"));

    // Two executions of the same program must not share scope or step ids.
    let first = execute(&program);
    let second = execute(&program);
    assert_eq!(first.len(), second.len());
    assert_eq!(first[0].id, 0);
    assert_eq!(second[0].id, 0);
}
