//! CLI command implementations.

use std::path::Path;

use crate::graph::CityGraph;
use crate::types::{CityMap, GraphResult};

/// Read and validate a graph file in the `{ city: { neighbor: km } }` shape.
///
/// Malformed JSON surfaces as `GraphError::Json`; a well-formed map that
/// breaks a graph invariant keeps its own variant.
pub fn load_graph(path: &Path) -> GraphResult<CityGraph> {
    let raw = std::fs::read_to_string(path)?;
    let cities: CityMap = serde_json::from_str(&raw)?;
    let graph = CityGraph::from_map(cities)?;
    log::debug!(
        "read {} ({} cities, {} connections)",
        path.display(),
        graph.city_count(),
        graph.connection_count()
    );
    Ok(graph)
}

/// List the direct neighbors of a city.
pub fn cmd_neighbors(path: &Path, city: &str, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let adjacency = graph.adjacency(city)?;

    if json {
        let neighbors: Vec<serde_json::Value> = adjacency
            .iter()
            .map(|(name, km)| serde_json::json!({"city": name, "distance_km": km}))
            .collect();
        println!(
            "{}",
            serde_json::json!({"city": city, "neighbors": neighbors})
        );
    } else if adjacency.is_empty() {
        println!("{} has no connections", city);
    } else {
        println!("Neighbors of {}:", city);
        for (name, km) in adjacency {
            println!("  {} ({} km)", name, km);
        }
    }
    Ok(())
}

/// Print the distance between two cities.
pub fn cmd_distance(path: &Path, city_a: &str, city_b: &str, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let distance = graph.distance_between(city_a, city_b)?;

    if json {
        println!(
            "{}",
            serde_json::json!({"from": city_a, "to": city_b, "distance_km": distance})
        );
    } else {
        match distance {
            Some(km) => println!("{} <-> {}: {} km", city_a, city_b, km),
            None => println!("{} and {} are not connected", city_a, city_b),
        }
    }
    Ok(())
}

/// Suggest neighbors within a distance threshold.
pub fn cmd_suggest(path: &Path, city: &str, max_distance_km: f64, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let suggestions = graph.suggest_alternatives(city, max_distance_km)?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "city": city,
                "max_distance_km": max_distance_km,
                "alternatives": suggestions,
            })
        );
    } else if suggestions.is_empty() {
        println!("No alternatives within {} km of {}", max_distance_km, city);
    } else {
        println!("Alternatives within {} km of {}:", max_distance_km, city);
        for name in suggestions {
            println!("  {}", name);
        }
    }
    Ok(())
}

/// Summary statistics about a graph file.
pub fn cmd_stats(path: &Path, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let isolated: Vec<&str> = graph
        .map()
        .iter()
        .filter(|(_, adj)| adj.is_empty())
        .map(|(name, _)| name.as_str())
        .collect();
    let max_degree = graph.map().values().map(|adj| adj.len()).max().unwrap_or(0);

    if json {
        let stats = serde_json::json!({
            "file": path.display().to_string(),
            "cities": graph.city_count(),
            "connections": graph.connection_count(),
            "max_degree": max_degree,
            "isolated": isolated,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&stats).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Cities: {}", graph.city_count());
        println!("Connections: {}", graph.connection_count());
        println!("Max degree: {}", max_degree);
        println!("Isolated cities: {}", isolated.len());
        for name in isolated {
            println!("  {}", name);
        }
    }
    Ok(())
}

/// Validate a graph file and report whether it is well formed.
pub fn cmd_check(path: &Path, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    if json {
        println!(
            "{}",
            serde_json::json!({
                "ok": true,
                "cities": graph.city_count(),
                "connections": graph.connection_count(),
            })
        );
    } else {
        println!(
            "OK: {} cities, {} connections",
            graph.city_count(),
            graph.connection_count()
        );
    }
    Ok(())
}

/// Re-emit the validated map on stdout.
pub fn cmd_export(path: &Path, pretty: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let out = if pretty {
        serde_json::to_string_pretty(&graph)?
    } else {
        serde_json::to_string(&graph)?
    };
    println!("{}", out);
    Ok(())
}
