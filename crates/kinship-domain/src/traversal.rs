//! Traversal results - distance maps and typed paths

use std::collections::HashMap;

use crate::MemberId;

/// Kind of edge followed when walking the graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// From a member to one of their parents
    Parent,

    /// From a member to one of their children
    Child,

    /// From a member to their partner
    Partner,
}

impl Edge {
    /// Get the edge name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Edge::Parent => "parent",
            Edge::Child => "child",
            Edge::Partner => "partner",
        }
    }
}

/// One hop of a path: the edge taken and the member it lands on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Edge followed
    pub edge: Edge,

    /// Member reached by this hop
    pub member: MemberId,
}

impl Step {
    /// Create a new step
    pub fn new(edge: Edge, member: impl Into<MemberId>) -> Self {
        Self {
            edge,
            member: member.into(),
        }
    }
}

/// Minimum generation distance from a seed member to every reachable member
///
/// Iteration follows discovery order of the breadth-first walk that built
/// the map, so results are deterministic for a given graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistanceMap {
    order: Vec<MemberId>,
    distances: HashMap<MemberId, u32>,
}

impl DistanceMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a distance; the first distance recorded for an id wins
    pub fn insert(&mut self, id: MemberId, distance: u32) -> bool {
        if self.distances.contains_key(&id) {
            return false;
        }
        self.distances.insert(id.clone(), distance);
        self.order.push(id);
        true
    }

    /// Distance to `id`, if reachable
    pub fn get(&self, id: &str) -> Option<u32> {
        self.distances.get(id).copied()
    }

    /// Whether `id` is reachable
    pub fn contains(&self, id: &str) -> bool {
        self.distances.contains_key(id)
    }

    /// Number of reachable members, including the seed
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the map is empty (the seed was not in the graph)
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate `(id, distance)` pairs in discovery order
    pub fn iter(&self) -> impl Iterator<Item = (&MemberId, u32)> + '_ {
        self.order
            .iter()
            .map(move |id| (id, self.distances.get(id).copied().unwrap_or_default()))
    }

    /// Members at exactly `distance`, in discovery order
    pub fn at_distance(&self, distance: u32) -> impl Iterator<Item = &MemberId> + '_ {
        self.iter()
            .filter(move |(_, d)| *d == distance)
            .map(|(id, _)| id)
    }

    /// Greatest distance in the map
    pub fn max_distance(&self) -> u32 {
        self.distances.values().copied().max().unwrap_or(0)
    }
}
