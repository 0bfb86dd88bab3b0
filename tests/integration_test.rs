// Integration tests for trace generation

use algotrace::assembler::TraceError;
use algotrace::parser::ParseError;
use algotrace::registry;
use algotrace::snapshot::{Auxiliary, Outcome, Structure};
use algotrace::{generate_trace, GeneratorConfig, StepKind, Trace, TraceGenerator};

const SAMPLE: &str = "64,34,25,12,22,11,90";

fn trace(id: &str, primary: &str, secondary: Option<&str>) -> Trace {
    generate_trace(id, primary, secondary)
        .unwrap_or_else(|e| panic!("{} failed on {:?}: {}", id, primary, e))
}

fn final_array(trace: &Trace) -> Vec<i64> {
    trace
        .last()
        .and_then(|s| s.structure.as_array())
        .expect("array snapshot")
        .to_vec()
}

fn visited_names(trace: &Trace) -> Vec<String> {
    match trace.outcome() {
        Some(Outcome::Traversed { order }) => order.clone(),
        other => panic!("expected a traversal outcome, got {:?}", other),
    }
}

#[test]
fn test_linear_search_finds_index() {
    let trace = trace("linear-search", SAMPLE, Some("25"));
    assert_eq!(trace.outcome(), Some(&Outcome::Found { index: 2 }));
}

#[test]
fn test_linear_search_blank_target_defaults_to_zero() {
    // The default target is 0, which the sample array does not contain
    let trace = trace("linear-search", SAMPLE, Some(""));
    assert_eq!(trace.outcome(), Some(&Outcome::NotFound));
    assert!(trace.iter().all(|s| match s.kind {
        StepKind::CompareTarget { target, .. } => target == 0,
        _ => true,
    }));
    assert_eq!(trace.count("compare"), 7);

    let trace = generate_trace("linear-search", "5, 0, 3", None).unwrap();
    assert_eq!(trace.outcome(), Some(&Outcome::Found { index: 1 }));
}

#[test]
fn test_bubble_sort_sorts_with_swaps() {
    let trace = trace("bubble-sort", "5,3,1,4,2", None);
    assert_eq!(final_array(&trace), vec![1, 2, 3, 4, 5]);
    assert!(trace.count("swap") >= 1);
    assert_eq!(trace.outcome(), Some(&Outcome::Sorted));
}

#[test]
fn test_bubble_sort_sorted_input_has_no_swaps() {
    let trace = trace("bubble-sort", "1,2,3,4,5", None);
    assert_eq!(trace.count("swap"), 0);
    // one pass of n - 1 comparisons, then early exit
    assert_eq!(trace.count("compare"), 4);
}

#[test]
fn test_binary_search_bounded_compares() {
    let trace = trace("binary-search", "1,3,5,7,9,11", Some("7"));
    assert_eq!(trace.outcome(), Some(&Outcome::Found { index: 3 }));
    assert!(trace.count("compare") <= 3);
    assert!(trace
        .iter()
        .filter(|s| s.kind.is_comparison())
        .all(|s| matches!(s.auxiliary, Some(Auxiliary::Bounds { .. }))));
}

#[test]
fn test_bfs_visits_connected_graph_in_adjacency_order() {
    let trace = trace("bfs", "A: B C; B: D; C: E; D: ; E:", Some("A"));
    assert_eq!(visited_names(&trace), vec!["A", "B", "C", "D", "E"]);
    assert_eq!(trace.count("visit"), 5);
    assert_eq!(trace.count("enqueue"), 5);
}

#[test]
fn test_bfs_dequeue_is_followed_by_visit() {
    let trace = trace("bfs", "A: B C; B: D; C: E; D: ; E:", None);
    let steps = trace.steps();
    for (i, step) in steps.iter().enumerate() {
        if let StepKind::Dequeue { node } = step.kind {
            assert_eq!(steps[i + 1].kind, StepKind::Visit { node });
        }
    }
}

#[test]
fn test_dfs_follows_declared_order() {
    let trace = trace("dfs", "A: B C; B: D; C: E; D: ; E:", None);
    assert_eq!(visited_names(&trace), vec!["A", "B", "D", "C", "E"]);
}

#[test]
fn test_traversal_skips_unreachable_nodes() {
    let trace = trace("bfs", "A: B; B: ; C: A", Some("A"));
    assert_eq!(visited_names(&trace), vec!["A", "B"]);
}

#[test]
fn test_dynamic_programming_answers() {
    let answer = |trace: &Trace| match trace.outcome() {
        Some(Outcome::Answer { value, .. }) => *value,
        other => panic!("expected an answer, got {:?}", other),
    };
    assert_eq!(answer(&trace("fibonacci", "10", None)), Some(55));
    assert_eq!(answer(&trace("knapsack", "2:3, 3:4, 4:5, 5:6", Some("5"))), Some(7));
    assert_eq!(answer(&trace("lcs", "ABCBDAB, BDCABA", None)), Some(4));
    assert_eq!(answer(&trace("coin-change", "1, 2, 5", Some("11"))), Some(3));
    assert_eq!(answer(&trace("coin-change", "2", Some("3"))), None);
}

#[test]
fn test_every_algorithm_terminates_exactly_once() {
    for d in registry::all() {
        let trace = trace(d.id, d.default_input, None);
        assert!(!trace.is_empty(), "{}", d.id);
        let last = trace.len() - 1;
        for (i, step) in trace.iter().enumerate() {
            assert_eq!(step.terminal, i == last, "{} step {}", d.id, i);
            assert_eq!(step.index, i);
        }
    }
}

#[test]
fn test_degenerate_inputs_still_terminate() {
    for (id, primary) in [
        ("merge-sort", ""),
        ("quick-sort", "7"),
        ("heap-sort", "2,2,2"),
        ("binary-search", ""),
        ("dfs", ""),
        ("fibonacci", "0"),
        ("knapsack", ""),
        ("lcs", "A, B"),
    ] {
        let trace = trace(id, primary, None);
        assert!(trace.last().is_some_and(|s| s.terminal), "{}", id);
    }
}

#[test]
fn test_generation_is_deterministic() {
    for d in registry::all() {
        let a = trace(d.id, d.default_input, None);
        let b = trace(d.id, d.default_input, None);
        assert_eq!(a, b, "{} is not deterministic", d.id);
    }
}

#[test]
fn test_unknown_algorithm_is_not_found() {
    let err = generate_trace("bogo-sort", SAMPLE, None).unwrap_err();
    assert!(matches!(err, TraceError::NotFound { ref id } if id == "bogo-sort"));
    assert!(!err.is_user_error());
}

#[test]
fn test_bad_token_is_reported() {
    let err = generate_trace("insertion-sort", "4, 2, 1.5", None).unwrap_err();
    assert_eq!(
        err,
        TraceError::Parse(ParseError::InvalidNumber {
            token: "1.5".to_string(),
            position: 3,
            column: 7,
        })
    );
    assert!(err.to_string().contains("'1.5'"));
}

#[test]
fn test_generator_config_limits_tables() {
    let generator = TraceGenerator::new(GeneratorConfig {
        max_table_extent: 10,
        ..GeneratorConfig::default()
    });
    let err = generator
        .generate("coin-change", "1, 2", Some("11"))
        .unwrap_err();
    assert!(matches!(
        err,
        TraceError::Parse(ParseError::OutOfRange { max: 10, .. })
    ));
    assert!(generator.generate("coin-change", "1, 2", Some("10")).is_ok());
}

#[test]
fn test_trace_serializes_to_json() {
    let trace = trace("binary-search", "1,3,5", Some("5"));
    let json = serde_json::to_value(&trace).expect("serialize trace");
    assert_eq!(json["algorithm"], "binary-search");
    let steps = json["steps"].as_array().expect("steps array");
    assert_eq!(steps.len(), trace.len());
    assert_eq!(steps[0]["kind"], "start");
    assert_eq!(steps[1]["kind"], "compare-target");
    assert_eq!(steps[1]["auxiliary"]["type"], "bounds");
    let last = steps.last().expect("last step");
    assert_eq!(last["kind"], "done");
    assert_eq!(last["terminal"], true);
    assert_eq!(last["outcome"]["type"], "found");
    assert_eq!(last["outcome"]["index"], 2);
}

#[test]
fn test_serialized_steps_keep_their_sequence_number() {
    for (id, primary, secondary) in [
        ("linear-search", "5,6,7", Some("7")),
        ("binary-search", "1,3,5,7", Some("7")),
        ("merge-sort", "4,1,3,2", None),
    ] {
        let trace = trace(id, primary, secondary);
        let text = serde_json::to_string(&trace).expect("serialize trace");
        let json: serde_json::Value = serde_json::from_str(&text).expect("parse trace");
        let steps = json["steps"].as_array().expect("steps array");
        for (position, step) in steps.iter().enumerate() {
            assert_eq!(step["index"], position, "{} step {}", id, position);
        }
    }

    let trace = trace("linear-search", "5,6,7", Some("7"));
    let json = serde_json::to_value(&trace).expect("serialize trace");
    assert_eq!(json["steps"][3]["kind"], "compare-target");
    assert_eq!(json["steps"][3]["position"], 2);
}

#[test]
fn test_table_cell_budget_is_enforced() {
    let long = "A".repeat(128);
    let err = generate_trace("lcs", &long, Some(&long)).unwrap_err();
    assert!(matches!(
        err,
        TraceError::Parse(ParseError::TooManyValues { count: 16641, limit: 1024 })
    ));
    assert!(err.is_user_error());

    // 11 rows by 129 columns
    let items = vec!["1:1"; 10].join(", ");
    let err = generate_trace("knapsack", &items, Some("128")).unwrap_err();
    assert!(matches!(
        err,
        TraceError::Parse(ParseError::TooManyValues { count: 1419, limit: 1024 })
    ));
    assert!(generate_trace("knapsack", "2:3, 3:4, 4:5, 5:6", Some("128")).is_ok());

    let generator = TraceGenerator::new(GeneratorConfig {
        max_table_cells: 30,
        ..GeneratorConfig::default()
    });
    assert!(generator.generate("coin-change", "1, 2", Some("29")).is_ok());
    assert!(matches!(
        generator.generate("coin-change", "1, 2", Some("30")),
        Err(TraceError::Parse(ParseError::TooManyValues { count: 31, limit: 30 }))
    ));
}

#[test]
fn test_table_snapshots_are_independent() {
    let trace = trace("fibonacci", "5", None);
    let first_update = trace
        .iter()
        .find(|s| matches!(s.kind, StepKind::CellUpdate { .. }))
        .expect("cell update");
    let Structure::Table(early) = &first_update.structure else {
        panic!("expected a table");
    };
    let Some(Structure::Table(late)) = trace.last().map(|s| &s.structure) else {
        panic!("expected a table");
    };
    let filled = |t: &algotrace::snapshot::TableView| {
        t.cells.iter().flatten().filter(|c| c.is_some()).count()
    };
    assert!(filled(early) < filled(late));
}
