//! Serde shape of a graph: `{ city: { neighbor: distance_km } }`.
//!
//! Serializing writes the adjacency map as-is. Deserializing goes through
//! [`CityGraph::from_map`], so a graph built from external data upholds the
//! same invariants as one built with `connect`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::{CityMap, Distance, GraphError, GraphResult};

use super::CityGraph;

impl CityGraph {
    /// Build a graph from a ready-made city map, validating every entry.
    pub fn from_map(cities: CityMap) -> GraphResult<Self> {
        for (city, adjacency) in &cities {
            if city.is_empty() {
                return Err(GraphError::EmptyCityName);
            }
            for (neighbor, &km) in adjacency {
                if neighbor.is_empty() {
                    return Err(GraphError::InvalidCityNames);
                }
                Distance::new(km)?;
                if neighbor == city {
                    return Err(GraphError::SelfConnection(city.clone()));
                }
                let mirrored = cities.get(neighbor).and_then(|adj| adj.get(city));
                if mirrored != Some(&km) {
                    return Err(GraphError::AsymmetricConnection {
                        city_a: city.clone(),
                        city_b: neighbor.clone(),
                    });
                }
            }
        }
        log::debug!("loaded graph with {} cities", cities.len());
        Ok(Self { cities })
    }

    /// Consume the graph and return its map.
    pub fn into_map(self) -> CityMap {
        self.cities
    }
}

impl Serialize for CityGraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.cities.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CityGraph {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let cities = CityMap::deserialize(deserializer)?;
        CityGraph::from_map(cities).map_err(serde::de::Error::custom)
    }
}
