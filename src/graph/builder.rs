//! Fluent API for building CityGraph instances.

use crate::types::GraphResult;

use super::CityGraph;

enum Step {
    City(String),
    Connect(String, String, f64),
}

/// Fluent builder for constructing a CityGraph.
///
/// Steps are replayed in order by [`CityGraphBuilder::build`]; the first
/// invalid step aborts the build.
#[derive(Default)]
pub struct CityGraphBuilder {
    steps: Vec<Step>,
}

impl CityGraphBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Register a city.
    pub fn city(&mut self, name: &str) -> &mut Self {
        self.steps.push(Step::City(name.to_string()));
        self
    }

    /// Connect two cities.
    pub fn connect(&mut self, city_a: &str, city_b: &str, distance_km: f64) -> &mut Self {
        self.steps.push(Step::Connect(
            city_a.to_string(),
            city_b.to_string(),
            distance_km,
        ));
        self
    }

    /// Build the final CityGraph.
    pub fn build(&self) -> GraphResult<CityGraph> {
        let mut graph = CityGraph::new();
        for step in &self.steps {
            match step {
                Step::City(name) => graph.register_city(name)?,
                Step::Connect(a, b, km) => graph.connect(a, b, *km)?,
            }
        }
        Ok(graph)
    }
}
