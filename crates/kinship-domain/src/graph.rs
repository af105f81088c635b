//! Family graph - members keyed by id plus traversal primitives
//!
//! The graph is built once and then only read. Every walk is breadth-first
//! and guarded by a visited set, so contradictory data (a member listed as
//! their own ancestor, a partner loop) still terminates.

use std::collections::{HashMap, VecDeque};

use crate::traversal::{DistanceMap, Edge, Step};
use crate::{Member, MemberId};

/// In-memory family graph
///
/// Members keep their insertion order; lookups go through an id index.
#[derive(Debug, Clone, Default)]
pub struct FamilyGraph {
    members: Vec<Member>,
    index: HashMap<MemberId, usize>,
}

impl FamilyGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from members; later duplicates replace earlier ones
    pub fn from_members<I>(members: I) -> Self
    where
        I: IntoIterator<Item = Member>,
    {
        let mut graph = Self::new();
        for member in members {
            graph.insert(member);
        }
        graph
    }

    /// Insert a member, returning the member it replaced (if any)
    pub fn insert(&mut self, member: Member) -> Option<Member> {
        match self.index.get(&member.id) {
            Some(&slot) => Some(std::mem::replace(&mut self.members[slot], member)),
            None => {
                self.index.insert(member.id.clone(), self.members.len());
                self.members.push(member);
                None
            }
        }
    }

    /// Look up a member
    pub fn get(&self, id: &str) -> Option<&Member> {
        self.index.get(id).map(|&slot| &self.members[slot])
    }

    /// Whether a member with this id exists
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the graph has no members
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in insertion order
    pub fn members(&self) -> impl Iterator<Item = &Member> + '_ {
        self.members.iter()
    }

    /// Member ids in insertion order
    pub fn ids(&self) -> impl Iterator<Item = &MemberId> + '_ {
        self.members.iter().map(|m| &m.id)
    }

    /// Direct parents of `id` (empty for unknown ids)
    pub fn parents(&self, id: &str) -> &[MemberId] {
        self.get(id).map(|m| m.parent_ids.as_slice()).unwrap_or(&[])
    }

    /// Direct children of `id` (empty for unknown ids)
    pub fn children(&self, id: &str) -> &[MemberId] {
        self.get(id).map(|m| m.children_ids.as_slice()).unwrap_or(&[])
    }

    /// Partner of `id`
    pub fn partner(&self, id: &str) -> Option<&MemberId> {
        self.get(id).and_then(|m| m.partner_id.as_ref())
    }

    /// Members whose partner is `id`, starting with `id`'s own partner
    ///
    /// Tolerates asymmetric partner data: anyone pointing at `id` is included
    /// even if `id` does not point back.
    pub fn partners_of(&self, id: &str) -> Vec<&MemberId> {
        let mut found: Vec<&MemberId> = Vec::new();
        if let Some(own) = self.partner(id) {
            if self.contains(own.as_str()) {
                found.push(own);
            }
        }
        for member in &self.members {
            if member.is_partner(id) && !found.iter().any(|f| *f == &member.id) {
                found.push(&member.id);
            }
        }
        found
    }

    /// Adjacent members: parents, then children, then the partner
    pub fn neighbors(&self, id: &str) -> Vec<(Edge, &MemberId)> {
        let Some(member) = self.get(id) else {
            return Vec::new();
        };

        let mut out = Vec::with_capacity(member.parent_ids.len() + member.children_ids.len() + 1);
        out.extend(member.parent_ids.iter().map(|p| (Edge::Parent, p)));
        out.extend(member.children_ids.iter().map(|c| (Edge::Child, c)));
        if let Some(partner) = &member.partner_id {
            out.push((Edge::Partner, partner));
        }
        out
    }

    /// Ancestors of `id` with their minimum generation distance
    ///
    /// The seed itself is included at distance 0. Unknown ids yield an
    /// empty map; dangling parent references are skipped.
    pub fn ancestors(&self, id: &str) -> DistanceMap {
        self.walk(id, parent_edges)
    }

    /// Descendants of `id` with their minimum generation distance
    ///
    /// Same contract as [`FamilyGraph::ancestors`], following child edges.
    pub fn descendants(&self, id: &str) -> DistanceMap {
        self.walk(id, child_edges)
    }

    fn walk(&self, seed: &str, next: fn(&Member) -> &[MemberId]) -> DistanceMap {
        let mut map = DistanceMap::new();
        let Some(start) = self.get(seed) else {
            return map;
        };

        map.insert(start.id.clone(), 0);
        let mut queue = VecDeque::from([(start, 0u32)]);

        while let Some((member, distance)) = queue.pop_front() {
            for next_id in next(member) {
                if map.contains(next_id.as_str()) {
                    continue;
                }
                let Some(next_member) = self.get(next_id.as_str()) else {
                    continue;
                };
                map.insert(next_member.id.clone(), distance + 1);
                queue.push_back((next_member, distance + 1));
            }
        }

        map
    }

    /// Shortest path from `from` to `to` over parent, child and partner edges
    ///
    /// Returns the hops after `from`, so a direct parent yields one step.
    /// `None` when either id is unknown, the members are disconnected, or the
    /// shortest path is longer than `max_len` hops.
    pub fn shortest_path(&self, from: &str, to: &str, max_len: usize) -> Option<Vec<Step>> {
        let start = self.get(from)?;
        if !self.contains(to) {
            return None;
        }
        if from == to {
            return Some(Vec::new());
        }

        let mut came_from: HashMap<&str, (&str, Edge)> = HashMap::new();
        let mut depth: HashMap<&str, usize> = HashMap::from([(start.id.as_str(), 0)]);
        let mut queue = VecDeque::from([start.id.as_str()]);

        while let Some(current) = queue.pop_front() {
            let current_depth = depth[current];
            if current_depth >= max_len {
                continue;
            }

            for (edge, next) in self.neighbors(current) {
                let next = next.as_str();
                if depth.contains_key(next) || !self.contains(next) {
                    continue;
                }
                depth.insert(next, current_depth + 1);
                came_from.insert(next, (current, edge));

                if next == to {
                    return Some(rebuild_path(&came_from, from, to));
                }
                queue.push_back(next);
            }
        }

        None
    }

    /// Find the member signed in under `identity`
    pub fn find_by_identity(&self, identity: &str) -> Option<&Member> {
        self.members
            .iter()
            .find(|m| m.identity.as_deref() == Some(identity))
    }
}

fn parent_edges(member: &Member) -> &[MemberId] {
    &member.parent_ids
}

fn child_edges(member: &Member) -> &[MemberId] {
    &member.children_ids
}

fn rebuild_path(came_from: &HashMap<&str, (&str, Edge)>, from: &str, to: &str) -> Vec<Step> {
    let mut steps = Vec::new();
    let mut cursor = to;
    while cursor != from {
        let Some(&(previous, edge)) = came_from.get(cursor) else {
            break;
        };
        steps.push(Step::new(edge, cursor));
        cursor = previous;
    }
    steps.reverse();
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Gender;

    /// grandpa + grandma -> dad (+ mum) -> kid, aunt -> cousin
    fn small_family() -> FamilyGraph {
        FamilyGraph::from_members([
            Member::new("gp", "Grandpa", Gender::Male)
                .with_children(["dad", "aunt"])
                .with_partner("gm"),
            Member::new("gm", "Grandma", Gender::Female)
                .with_children(["dad", "aunt"])
                .with_partner("gp"),
            Member::new("dad", "Dad", Gender::Male)
                .with_parents(["gp", "gm"])
                .with_children(["kid"])
                .with_partner("mum"),
            Member::new("mum", "Mum", Gender::Female)
                .with_children(["kid"])
                .with_partner("dad"),
            Member::new("aunt", "Aunt", Gender::Female)
                .with_parents(["gp", "gm"])
                .with_children(["cousin"]),
            Member::new("kid", "Kid", Gender::Other).with_parents(["dad", "mum"]),
            Member::new("cousin", "Cousin", Gender::Male).with_parents(["aunt"]),
        ])
    }

    #[test]
    fn test_lookup_and_edges() {
        let graph = small_family();
        assert_eq!(graph.len(), 7);
        assert!(graph.contains("kid"));
        assert!(!graph.contains("ghost"));
        assert_eq!(graph.parents("kid").len(), 2);
        assert_eq!(graph.children("gp").len(), 2);
        assert_eq!(graph.partner("dad").map(MemberId::as_str), Some("mum"));
        assert!(graph.parents("ghost").is_empty());
        assert!(graph.partner("ghost").is_none());
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut graph = small_family();
        let replaced = graph.insert(Member::new("kid", "Renamed", Gender::Female));
        assert_eq!(replaced.map(|m| m.name), Some("Kid".to_string()));
        assert_eq!(graph.len(), 7);
        assert_eq!(graph.get("kid").map(|m| m.gender), Some(Gender::Female));
    }

    #[test]
    fn test_ancestors_include_seed() {
        let graph = small_family();
        let ancestors = graph.ancestors("kid");
        assert_eq!(ancestors.get("kid"), Some(0));
        assert_eq!(ancestors.get("dad"), Some(1));
        assert_eq!(ancestors.get("mum"), Some(1));
        assert_eq!(ancestors.get("gp"), Some(2));
        assert_eq!(ancestors.get("gm"), Some(2));
        assert!(!ancestors.contains("aunt"));
    }

    #[test]
    fn test_descendants() {
        let graph = small_family();
        let descendants = graph.descendants("gm");
        assert_eq!(descendants.get("dad"), Some(1));
        assert_eq!(descendants.get("cousin"), Some(2));
        assert_eq!(descendants.get("kid"), Some(2));
        assert!(!descendants.contains("mum"));
    }

    #[test]
    fn test_unknown_seed_is_empty() {
        let graph = small_family();
        assert!(graph.ancestors("ghost").is_empty());
        assert!(graph.descendants("ghost").is_empty());
    }

    #[test]
    fn test_dangling_parent_is_skipped() {
        let graph = FamilyGraph::from_members([
            Member::new("a", "A", Gender::Male).with_parents(["missing"]),
        ]);
        let ancestors = graph.ancestors("a");
        assert_eq!(ancestors.len(), 1);
    }

    #[test]
    fn test_cycle_terminates() {
        let graph = FamilyGraph::from_members([
            Member::new("a", "A", Gender::Male).with_parents(["b"]).with_children(["b"]),
            Member::new("b", "B", Gender::Female).with_parents(["a"]).with_children(["a"]),
        ]);
        let ancestors = graph.ancestors("a");
        assert_eq!(ancestors.get("a"), Some(0));
        assert_eq!(ancestors.get("b"), Some(1));
        assert_eq!(ancestors.len(), 2);
    }

    #[test]
    fn test_shortest_path_cousins() {
        let graph = small_family();
        let path = graph.shortest_path("kid", "cousin", 10).unwrap();
        let edges: Vec<Edge> = path.iter().map(|s| s.edge).collect();
        assert_eq!(edges, vec![Edge::Parent, Edge::Parent, Edge::Child, Edge::Child]);
        assert_eq!(path.last().map(|s| s.member.as_str()), Some("cousin"));
    }

    #[test]
    fn test_shortest_path_through_partner() {
        let graph = small_family();
        let path = graph.shortest_path("mum", "gp", 10).unwrap();
        let edges: Vec<Edge> = path.iter().map(|s| s.edge).collect();
        assert_eq!(edges, vec![Edge::Partner, Edge::Parent]);
    }

    #[test]
    fn test_shortest_path_limits() {
        let graph = small_family();
        assert!(graph.shortest_path("kid", "cousin", 3).is_none());
        assert_eq!(graph.shortest_path("kid", "kid", 0), Some(Vec::new()));
        assert!(graph.shortest_path("kid", "ghost", 10).is_none());
    }

    #[test]
    fn test_partners_of_tolerates_asymmetry() {
        let graph = FamilyGraph::from_members([
            Member::new("a", "A", Gender::Male),
            Member::new("b", "B", Gender::Female).with_partner("a"),
        ]);
        let partners: Vec<&str> = graph.partners_of("a").iter().map(|p| p.as_str()).collect();
        assert_eq!(partners, vec!["b"]);
    }

    #[test]
    fn test_find_by_identity() {
        let graph = FamilyGraph::from_members([
            Member::new("16", "Rohan", Gender::Male).with_identity("rohan_k"),
        ]);
        assert_eq!(graph.find_by_identity("rohan_k").map(|m| m.id.as_str()), Some("16"));
        assert!(graph.find_by_identity("nobody").is_none());
    }
}
