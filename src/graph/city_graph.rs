//! Core graph structure: cities + symmetric distances in one adjacency map.

use crate::types::{Adjacency, CityMap, Distance, GraphError, GraphResult};

/// An undirected weighted graph of cities.
///
/// Each city maps to its adjacency record (neighbor -> distance in km). Every
/// connection is stored in both directions with the same distance. Cities
/// keep their registration order and neighbors keep the order in which the
/// connection was first made, so `neighbors` and `suggest_alternatives`
/// return results in a stable order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CityGraph {
    pub(super) cities: CityMap,
}

impl CityGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            cities: CityMap::new(),
        }
    }

    /// Register a city with no connections. No-op if it already exists.
    pub fn register_city(&mut self, name: &str) -> GraphResult<()> {
        if name.is_empty() {
            return Err(GraphError::EmptyCityName);
        }
        if !self.cities.contains_key(name) {
            self.cities.insert(name.to_string(), Adjacency::new());
            log::debug!("registered city {:?}", name);
        }
        Ok(())
    }

    /// Connect two cities in both directions, registering them as needed.
    ///
    /// Connecting an already connected pair overwrites the distance on both
    /// sides. All validation runs before the graph is touched.
    pub fn connect(&mut self, city_a: &str, city_b: &str, distance_km: f64) -> GraphResult<()> {
        if city_a.is_empty() || city_b.is_empty() {
            return Err(GraphError::InvalidCityNames);
        }
        let distance = Distance::new(distance_km)?;
        if city_a == city_b {
            return Err(GraphError::SelfConnection(city_a.to_string()));
        }

        self.register_city(city_a)?;
        self.register_city(city_b)?;

        let km = distance.km();
        let previous = self
            .cities
            .get_mut(city_a)
            .and_then(|adj| adj.insert(city_b.to_string(), km));
        if let Some(adj) = self.cities.get_mut(city_b) {
            adj.insert(city_a.to_string(), km);
        }

        match previous {
            Some(old) if old != km => {
                log::debug!("updated {:?} <-> {:?}: {} -> {} km", city_a, city_b, old, km)
            }
            Some(_) => log::trace!("{:?} <-> {:?} already at {} km", city_a, city_b, km),
            None => log::debug!("connected {:?} <-> {:?} at {} km", city_a, city_b, km),
        }
        Ok(())
    }

    /// Names of all cities directly connected to `city`.
    pub fn neighbors(&self, city: &str) -> GraphResult<Vec<&str>> {
        let adjacency = self.adjacency(city)?;
        Ok(adjacency.keys().map(String::as_str).collect())
    }

    /// Distance between two registered cities.
    ///
    /// Returns `Ok(None)` when both exist but are not directly connected.
    pub fn distance_between(&self, city_a: &str, city_b: &str) -> GraphResult<Option<f64>> {
        match (self.cities.get(city_a), self.cities.contains_key(city_b)) {
            (Some(adjacency), true) => Ok(adjacency.get(city_b).copied()),
            _ => Err(GraphError::CitiesNotRegistered {
                city_a: city_a.to_string(),
                city_b: city_b.to_string(),
            }),
        }
    }

    /// Neighbors of `city` whose distance is at most `max_distance_km`.
    ///
    /// An empty result is not an error. A NaN threshold matches nothing.
    pub fn suggest_alternatives(&self, city: &str, max_distance_km: f64) -> GraphResult<Vec<&str>> {
        let adjacency = self.adjacency(city)?;
        Ok(adjacency
            .iter()
            .filter(|&(_, &km)| km <= max_distance_km)
            .map(|(name, _)| name.as_str())
            .collect())
    }

    /// The adjacency record of a registered city.
    pub fn adjacency(&self, city: &str) -> GraphResult<&Adjacency> {
        self.cities
            .get(city)
            .ok_or_else(|| GraphError::CityNotFound(city.to_string()))
    }

    /// Whether `city` is registered.
    pub fn contains_city(&self, city: &str) -> bool {
        self.cities.contains_key(city)
    }

    /// All registered cities in registration order.
    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.cities.keys().map(String::as_str)
    }

    /// Number of registered cities.
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Number of connections, counting each unordered pair once.
    pub fn connection_count(&self) -> usize {
        self.cities.values().map(Adjacency::len).sum::<usize>() / 2
    }

    /// True if no city has been registered.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// The full city -> {neighbor -> distance} map, read-only.
    pub fn map(&self) -> &CityMap {
        &self.cities
    }
}
