//! Path fallback - describe a shortest path as a possessive chain
//!
//! Used only when direct, blood and in-law classification all fail, which in
//! practice means paths that cross a partner edge somewhere in the middle.

use kinship_domain::{Edge, FamilyGraph, Gender, Step};
use tracing::trace;

use crate::relation::{Link, Relation};

/// Describe the shortest path from `from` to `to`, if one exists within `max_len` hops
pub fn describe(graph: &FamilyGraph, from: &str, to: &str, max_len: usize) -> Option<Relation> {
    let steps = graph.shortest_path(from, to, max_len)?;
    if steps.is_empty() {
        return None;
    }
    trace!(
        from,
        to,
        hops = steps.len(),
        "describing path: {}",
        steps.iter().map(|s| s.edge.as_str()).collect::<Vec<_>>().join(" -> ")
    );
    Some(describe_steps(graph, &steps))
}

/// Turn a path into a possessive chain
///
/// Recognized five-hop shapes collapse into named terms; anything else is
/// rendered hop by hop, each hop gendered by the member it lands on.
pub fn describe_steps(graph: &FamilyGraph, steps: &[Step]) -> Relation {
    let edges: Vec<Edge> = steps.iter().map(|s| s.edge).collect();
    let gender_at = |idx: usize| gender_of(graph, &steps[idx]);

    match edges.as_slice() {
        [Edge::Parent, Edge::Parent, Edge::Child, Edge::Child, Edge::Child] => Relation::chain([
            Link::new(Relation::Cousin(1), gender_at(3)),
            Link::new(Relation::Descendant(1), gender_at(4)),
        ]),
        [Edge::Parent, Edge::Parent, Edge::Child, Edge::Partner, Edge::Parent] => Relation::chain([
            Link::new(Relation::AuntUncle(2), gender_at(3)),
            Link::new(Relation::Ancestor(1), gender_at(4)),
        ]),
        _ => Relation::chain(
            steps
                .iter()
                .map(|step| Link::new(edge_relation(step.edge), gender_of(graph, step))),
        ),
    }
}

fn edge_relation(edge: Edge) -> Relation {
    match edge {
        Edge::Parent => Relation::Ancestor(1),
        Edge::Child => Relation::Descendant(1),
        Edge::Partner => Relation::Partner,
    }
}

fn gender_of(graph: &FamilyGraph, step: &Step) -> Gender {
    graph
        .get(step.member.as_str())
        .map(|m| m.gender)
        .unwrap_or_default()
}
