//! Relationship resolver
//!
//! Resolution runs as a fixed sequence of stages. The first stage that finds
//! something wins:
//!
//! ```text
//! Direct  ->  Blood (common ancestor)  ->  InLaw (through partners)  ->  Path
//! ```
//!
//! The in-law stage recurses back into the resolver. A [`ResolveState`] is
//! threaded through every recursive call and records whose partner edges
//! have already been expanded, so recursion always terminates.

use std::collections::HashSet;

use kinship_domain::{DistanceMap, FamilyGraph, Gender, MemberId};
use tracing::{debug, trace};

use crate::config::{ResolverConfig, TieBreak};
use crate::error::{ResolveError, Result};
use crate::path;
use crate::relation::{Kinship, Link, Relation, NO_RELATION};

/// Resolution stage, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Parent, child or partner edge
    Direct,
    /// Classification from the nearest common ancestor
    Blood,
    /// Relation through a partner edge
    InLaw,
    /// Possessive chain along the shortest path
    Path,
}

impl Stage {
    /// Stage name for logging
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Direct => "direct",
            Stage::Blood => "blood",
            Stage::InLaw => "in-law",
            Stage::Path => "path",
        }
    }
}

/// Per-query state threaded through recursive resolution
#[derive(Debug, Default)]
pub struct ResolveState {
    expanded: HashSet<MemberId>,
}

impl ResolveState {
    /// Mark `id`'s partner edges as expanded; false if they already were
    fn enter(&mut self, id: &str) -> bool {
        if self.expanded.contains(id) {
            return false;
        }
        self.expanded.insert(MemberId::new(id));
        true
    }
}

/// Nearest common ancestor and the distance to it from each side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonAncestor {
    /// The shared ancestor
    pub ancestor: MemberId,
    /// Generations from the source up to the ancestor
    pub from_distance: u32,
    /// Generations from the target up to the ancestor
    pub to_distance: u32,
}

/// Resolves the relationship between two members of a family graph
///
/// Holds only a shared reference to the graph; the graph is never mutated
/// and nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct Resolver<'g> {
    graph: &'g FamilyGraph,
    config: ResolverConfig,
}

impl<'g> Resolver<'g> {
    /// Create a resolver with the default configuration
    pub fn new(graph: &'g FamilyGraph) -> Self {
        Self {
            graph,
            config: ResolverConfig::default(),
        }
    }

    /// Create a resolver with a validated configuration
    pub fn with_config(graph: &'g FamilyGraph, config: ResolverConfig) -> Result<Self> {
        config.validate().map_err(ResolveError::InvalidConfig)?;
        Ok(Self { graph, config })
    }

    /// The active configuration
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Relationship phrase describing `to` from `from`'s point of view
    ///
    /// Never fails: unknown ids produce `"no relation"`. The path fallback
    /// searches without a hop limit unless `max_path_length` is set.
    pub fn resolve(&self, from: &str, to: &str) -> String {
        match self.classify(from, to) {
            Ok(kinship) => kinship.label(),
            Err(e) => {
                debug!(from, to, "resolution failed soft: {}", e);
                NO_RELATION.to_string()
            }
        }
    }

    /// Structural relation from `from` to `to`
    ///
    /// # Errors
    /// Returns [`ResolveError::UnknownMember`] if either id is not in the graph.
    pub fn classify(&self, from: &str, to: &str) -> Result<Kinship> {
        if from == to {
            return Ok(Kinship::SelfRelation);
        }
        if !self.graph.contains(from) {
            return Err(ResolveError::UnknownMember(from.to_string()));
        }
        let target = self
            .graph
            .get(to)
            .ok_or_else(|| ResolveError::UnknownMember(to.to_string()))?;

        let mut state = ResolveState::default();
        let relation = self.relate(from, to, &mut state).or_else(|| self.by_path(from, to));

        match relation {
            Some(relation) => Ok(Kinship::Related {
                relation,
                gender: target.gender,
            }),
            None => {
                debug!(from, to, "no relation found");
                Ok(Kinship::Unrelated)
            }
        }
    }

    /// Nearest common ancestor of two members, honoring the tie-break policy
    pub fn common_ancestor(&self, from: &str, to: &str) -> Option<CommonAncestor> {
        let up_from = self.graph.ancestors(from);
        let up_to = self.graph.ancestors(to);
        self.pick_common_ancestor(&up_from, &up_to)
    }

    /// Run the direct, blood and in-law stages
    fn relate(&self, from: &str, to: &str, state: &mut ResolveState) -> Option<Relation> {
        if let Some(relation) = self.direct(from, to) {
            trace!(from, to, stage = Stage::Direct.as_str(), "resolved");
            return Some(relation);
        }
        if let Some(relation) = self.blood(from, to) {
            trace!(from, to, stage = Stage::Blood.as_str(), "resolved");
            return Some(relation);
        }
        if self.config.in_law_resolution && state.enter(from) {
            if let Some(relation) = self.in_law(from, to, state) {
                trace!(from, to, stage = Stage::InLaw.as_str(), "resolved");
                return Some(relation);
            }
        }
        None
    }

    fn direct(&self, from: &str, to: &str) -> Option<Relation> {
        let member = self.graph.get(from)?;
        if member.has_parent(to) {
            Some(Relation::Ancestor(1))
        } else if member.has_child(to) {
            Some(Relation::Descendant(1))
        } else if member.is_partner(to) {
            Some(Relation::Partner)
        } else {
            None
        }
    }

    fn blood(&self, from: &str, to: &str) -> Option<Relation> {
        let up_from = self.graph.ancestors(from);
        let up_to = self.graph.ancestors(to);
        let common = self.pick_common_ancestor(&up_from, &up_to)?;
        trace!(
            from,
            to,
            ancestor = common.ancestor.as_str(),
            d1 = common.from_distance,
            d2 = common.to_distance,
            "common ancestor"
        );
        Some(self.from_distances(to, &common, &up_from, &up_to))
    }

    fn pick_common_ancestor(&self, up_from: &DistanceMap, up_to: &DistanceMap) -> Option<CommonAncestor> {
        let mut best: Option<CommonAncestor> = None;

        for (id, d1) in up_from.iter() {
            let Some(d2) = up_to.get(id.as_str()) else {
                continue;
            };
            let better = match &best {
                None => true,
                Some(current) => {
                    let total = d1 + d2;
                    let current_total = current.from_distance + current.to_distance;
                    match self.config.tie_break {
                        TieBreak::FirstEncountered => total < current_total,
                        TieBreak::ClosestToTarget => {
                            total < current_total
                                || (total == current_total && d2 < current.to_distance)
                        }
                    }
                }
            };
            if better {
                best = Some(CommonAncestor {
                    ancestor: id.clone(),
                    from_distance: d1,
                    to_distance: d2,
                });
            }
        }

        best
    }

    fn from_distances(
        &self,
        to: &str,
        common: &CommonAncestor,
        up_from: &DistanceMap,
        up_to: &DistanceMap,
    ) -> Relation {
        match (common.from_distance, common.to_distance) {
            (0, d2) => Relation::Descendant(d2),
            (d1, 0) => Relation::Ancestor(d1),
            (1, 1) => Relation::Sibling,
            (d1, 1) => Relation::AuntUncle(d1),
            (1, d2) => Relation::NieceNephew(d2),
            (d1, d2) if d1 == d2 => Relation::Cousin(d1 - 1),
            (d1, d2) if d1 > d2 => {
                // An ancestor of the source sits at cousin level with the target.
                let gap = d1 - d2;
                let via = self.on_path(up_from, gap, &common.ancestor, d2);
                Relation::chain([
                    Link::new(Relation::Ancestor(gap), self.gender(via)),
                    Link::new(Relation::Cousin(d2 - 1), self.gender(Some(to))),
                ])
            }
            (d1, d2) => {
                // The target descends from someone at cousin level with the source.
                let gap = d2 - d1;
                let via = self.on_path(up_to, gap, &common.ancestor, d1);
                Relation::chain([
                    Link::new(Relation::Cousin(d1 - 1), self.gender(via)),
                    Link::new(Relation::Descendant(gap), self.gender(Some(to))),
                ])
            }
        }
    }

    /// First member `gap` generations up that reaches `ancestor` in exactly `remaining`
    fn on_path<'m>(
        &self,
        ancestors: &'m DistanceMap,
        gap: u32,
        ancestor: &MemberId,
        remaining: u32,
    ) -> Option<&'m str> {
        ancestors
            .at_distance(gap)
            .find(|id| self.graph.ancestors(id.as_str()).get(ancestor.as_str()) == Some(remaining))
            .map(MemberId::as_str)
    }

    fn in_law(&self, from: &str, to: &str, state: &mut ResolveState) -> Option<Relation> {
        let target = self.graph.get(to)?;

        // Target is the partner of someone related to the source.
        for spouse in self.graph.partners_of(to) {
            let spouse = spouse.as_str();
            if spouse == from {
                continue;
            }
            let Some(relation) = self.relate(from, spouse, state) else {
                continue;
            };
            let mapped = match relation {
                Relation::Partner => continue,
                Relation::Ancestor(n) => Relation::Ancestor(n),
                Relation::Sibling => Relation::Sibling.in_law(),
                Relation::Descendant(1) => Relation::Descendant(1).in_law(),
                Relation::AuntUncle(n) => Relation::AuntUncle(n),
                other => Relation::chain([
                    Link::new(other, self.gender(Some(spouse))),
                    Link::new(Relation::Partner, target.gender),
                ]),
            };
            return Some(mapped);
        }

        // Target is a relative of the source's own partner.
        let partner = self.graph.partner(from)?.as_str();
        if partner == to || !self.graph.contains(partner) {
            return None;
        }
        match self.relate(partner, to, state)? {
            Relation::Partner => None,
            relation if relation.is_blood() => Some(relation.in_law()),
            // Already partner-mediated on the partner's side: lead with the partner.
            relation => Some(Relation::chain([
                Link::new(Relation::Partner, self.gender(Some(partner))),
                Link::new(relation, target.gender),
            ])),
        }
    }

    fn by_path(&self, from: &str, to: &str) -> Option<Relation> {
        if !self.config.path_fallback {
            return None;
        }
        let max_len = self.config.max_path_length.unwrap_or(usize::MAX);
        let relation = path::describe(self.graph, from, to, max_len)?;
        trace!(from, to, stage = Stage::Path.as_str(), "resolved");
        Some(relation)
    }

    fn gender(&self, id: Option<&str>) -> Gender {
        id.and_then(|id| self.graph.get(id))
            .map(|m| m.gender)
            .unwrap_or_default()
    }
}

/// Relationship phrase describing `to` from `from`'s point of view
///
/// Uses the default configuration. Returns `"self"` when the ids match and
/// `"no relation"` when either id is unknown or nothing connects them.
///
/// # Examples
///
/// ```
/// use kinship_domain::{FamilyGraph, Gender, Member};
///
/// let graph = FamilyGraph::from_members([
///     Member::new("mum", "Mum", Gender::Female).with_children(["kid"]),
///     Member::new("kid", "Kid", Gender::Male).with_parents(["mum"]),
/// ]);
///
/// assert_eq!(kinship_resolver::resolve("kid", "mum", &graph), "mother");
/// assert_eq!(kinship_resolver::resolve("mum", "kid", &graph), "son");
/// ```
pub fn resolve(from: &str, to: &str, graph: &FamilyGraph) -> String {
    Resolver::new(graph).resolve(from, to)
}
