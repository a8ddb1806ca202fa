//! Phase 2 tests: graph file loading and CLI end-to-end flows.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

use city_graph::cli::commands::load_graph;
use city_graph::{CityGraph, ErrorKind, GraphError};

// ==================== CLI Helpers ====================

/// Locate the `citygraph` binary built alongside test binaries.
fn citygraph_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    path.pop(); // Remove "deps"
    path.push("citygraph");
    path
}

/// Run the `citygraph` CLI with the given arguments and return the output.
fn run_citygraph(args: &[&str]) -> Output {
    Command::new(citygraph_bin())
        .args(args)
        .output()
        .expect("Failed to run citygraph")
}

/// Helper: assert that the CLI ran successfully (exit code 0).
fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "citygraph failed with status {:?}\nstdout: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );
}

/// Helper: get stdout as a string from an Output.
fn stdout_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Write raw JSON to a temp file.
fn graph_file(contents: &str) -> NamedTempFile {
    let mut tmp = NamedTempFile::new().unwrap();
    tmp.write_all(contents.as_bytes()).unwrap();
    tmp.flush().unwrap();
    tmp
}

/// Mexico City hub with one isolated city.
fn sample_file() -> NamedTempFile {
    let mut graph = CityGraph::new();
    graph.connect("Mexico City", "Puebla", 130.0).unwrap();
    graph.connect("Mexico City", "Toluca", 70.0).unwrap();
    graph.connect("Mexico City", "Monterrey", 900.0).unwrap();
    graph.register_city("Oaxaca").unwrap();
    graph_file(&serde_json::to_string(&graph).unwrap())
}

// ==================== Loading Tests ====================

#[test]
fn test_load_graph_preserves_order() {
    let tmp = sample_file();
    let graph = load_graph(tmp.path()).unwrap();

    assert_eq!(
        graph.cities().collect::<Vec<_>>(),
        vec!["Mexico City", "Puebla", "Toluca", "Monterrey", "Oaxaca"]
    );
    assert_eq!(
        graph.neighbors("Mexico City").unwrap(),
        vec!["Puebla", "Toluca", "Monterrey"]
    );
}

#[test]
fn test_load_graph_missing_file() {
    let err = load_graph(std::path::Path::new("/nonexistent/graph.json")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn test_load_graph_rejects_asymmetric_map() {
    let tmp = graph_file(r#"{"A":{"B":1.0},"B":{"A":2.0}}"#);
    let err = load_graph(tmp.path()).unwrap_err();
    assert!(matches!(err, GraphError::AsymmetricConnection { .. }));
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[test]
fn test_load_graph_keeps_invariant_error_variant() {
    let tmp = graph_file(r#"{"":{}}"#);
    let err = load_graph(tmp.path()).unwrap_err();
    assert!(matches!(err, GraphError::EmptyCityName));
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let tmp = graph_file(r#"{"A":{"B":0.0},"B":{"A":0.0}}"#);
    let err = load_graph(tmp.path()).unwrap_err();
    assert!(matches!(err, GraphError::NonPositiveDistance(_)));
}

#[test]
fn test_load_graph_malformed_json() {
    let tmp = graph_file(r#"{"A": ["B"]}"#);
    let err = load_graph(tmp.path()).unwrap_err();
    assert!(matches!(err, GraphError::Json(_)));
    assert_eq!(err.kind(), ErrorKind::Parse);
}

// ==================== CLI Tests ====================

#[test]
fn test_cli_neighbors() {
    let tmp = sample_file();
    let path = tmp.path().to_str().unwrap();

    let output = run_citygraph(&["neighbors", path, "Mexico City"]);
    assert_success(&output);
    let out = stdout_str(&output);
    assert!(out.contains("Puebla (130 km)"), "unexpected output: {}", out);
    assert!(out.contains("Toluca (70 km)"), "unexpected output: {}", out);
}

#[test]
fn test_cli_suggest_json() {
    let tmp = sample_file();
    let path = tmp.path().to_str().unwrap();

    let output = run_citygraph(&[
        "--format",
        "json",
        "suggest",
        path,
        "Mexico City",
        "--max-distance",
        "100",
    ]);
    assert_success(&output);
    let parsed: serde_json::Value = serde_json::from_str(stdout_str(&output).trim()).unwrap();
    assert_eq!(parsed["alternatives"], serde_json::json!(["Toluca"]));
}

#[test]
fn test_cli_distance_not_connected() {
    let tmp = sample_file();
    let path = tmp.path().to_str().unwrap();

    let output = run_citygraph(&["--format", "json", "distance", path, "Puebla", "Oaxaca"]);
    assert_success(&output);
    let parsed: serde_json::Value = serde_json::from_str(stdout_str(&output).trim()).unwrap();
    assert!(parsed["distance_km"].is_null());
}

#[test]
fn test_cli_unknown_city_exit_code() {
    let tmp = sample_file();
    let path = tmp.path().to_str().unwrap();

    let output = run_citygraph(&["neighbors", path, "Guadalajara"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&output.stderr).contains("City not found in the graph."));
}

#[test]
fn test_cli_check_rejects_invalid_file() {
    let tmp = graph_file(r#"{"A":{"B":1.0},"B":{}}"#);
    let path = tmp.path().to_str().unwrap();

    let output = run_citygraph(&["check", path]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_cli_invalid_argument_exit_code() {
    let tmp = graph_file(r#"{"":{}}"#);
    let path = tmp.path().to_str().unwrap();

    let output = run_citygraph(&["check", path]);
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error: City name cannot be empty."),
        "unexpected stderr: {}",
        stderr
    );

    let tmp = graph_file(r#"{"A":{"A":3.0}}"#);
    let output = run_citygraph(&["check", tmp.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_cli_stats_and_export() {
    let tmp = sample_file();
    let path = tmp.path().to_str().unwrap();

    let output = run_citygraph(&["--format", "json", "stats", path]);
    assert_success(&output);
    let stats: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(stats["cities"], 5);
    assert_eq!(stats["connections"], 3);
    assert_eq!(stats["isolated"], serde_json::json!(["Oaxaca"]));

    let output = run_citygraph(&["export", path]);
    assert_success(&output);
    let exported: CityGraph = serde_json::from_str(stdout_str(&output).trim()).unwrap();
    assert_eq!(exported, load_graph(tmp.path()).unwrap());
}
