//! End-to-end tests: load word lists and graphs from files, then solve

use std::io::Write;
use tempfile::NamedTempFile;
use word_ladder::commands::{LadderConfig, run_paths, solve_ladder};
use word_ladder::graph::load_graph;
use word_ladder::output::format_ladder;
use word_ladder::solver::{LadderError, LadderSolver, StrategyType, generate_word_ladder};
use word_ladder::wordlists::load_from_file;

fn word_file(words: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for word in words {
        writeln!(file, "{word}").unwrap();
    }
    file
}

#[test]
fn ladder_from_word_file() {
    let file = word_file(&["Cat", "COT", "cog", "dog", "bat"]);
    let dict = load_from_file(file.path()).unwrap();

    let ladder = generate_word_ladder("cat", "dog", &dict);
    assert_eq!(ladder, vec!["cat", "cot", "cog", "dog"]);
    assert_eq!(format_ladder(&ladder), "cat cot cog dog");
}

#[test]
fn missing_word_yields_empty_ladder() {
    let file = word_file(&["cat", "dog"]);
    let dict = load_from_file(file.path()).unwrap();

    let ladder = generate_word_ladder("cat", "xyz", &dict);
    assert!(ladder.is_empty());
    assert_eq!(format_ladder(&ladder), "No word ladder found.");
}

#[test]
fn both_strategies_solve_mixed_edit_ladder() {
    let file = word_file(&["car", "cat", "chat", "cheat", "cheap", "cart", "care"]);
    let dict = load_from_file(file.path()).unwrap();

    for name in ["scan", "mutation"] {
        let solver = LadderSolver::new(StrategyType::from_name(name, &dict), &dict);
        let report = solve_ladder(
            LadderConfig::new("car".to_string(), "cheat".to_string()),
            &solver,
        );
        assert_eq!(report.words(), &["car", "cat", "chat", "cheat"], "{name}");
    }
}

#[test]
fn trivial_request_reports_distinct_error() {
    let file = word_file(&["hot", "dot"]);
    let dict = load_from_file(file.path()).unwrap();
    let solver = LadderSolver::new(StrategyType::auto(&dict), &dict);

    let trivial = solver.find_ladder("hot", "HOT").unwrap_err();
    let missing = solver.find_ladder("hot", "dog").unwrap_err();

    assert!(matches!(trivial, LadderError::TrivialRequest { .. }));
    assert!(matches!(missing, LadderError::WordNotFound { .. }));
    assert_ne!(trivial.to_string(), missing.to_string());
}

#[test]
fn concurrent_searches_share_dictionary() {
    let file = word_file(&["cat", "cot", "cog", "dog", "hot", "dot"]);
    let dict = load_from_file(file.path()).unwrap();
    let solver = LadderSolver::new(StrategyType::auto(&dict), &dict);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| solver.find_ladder("hot", "cat").map(|l| l.len())))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Ok(3));
        }
    });
}

#[test]
fn dijkstra_from_graph_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "4\n0 1 1\n1 2 2\n0 2 5\n2 3 1").unwrap();

    let graph = load_graph(file.path()).unwrap();
    let report = run_paths(&graph, 0).unwrap();

    let costs: Vec<Option<u64>> = report.routes.iter().map(|r| r.cost).collect();
    assert_eq!(costs, vec![Some(0), Some(1), Some(3), Some(4)]);
    assert_eq!(report.routes[3].path, vec![0, 1, 2, 3]);
}
