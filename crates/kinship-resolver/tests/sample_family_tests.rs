//! End-to-end resolution over the bundled sample family
//!
//! ```text
//!                      1 Rajesh + 2 Lakshmi
//!          ┌───────────────┼──────────────────┐
//!    3 Venkat + 6 Maya   4 Priya + 7 Krishna  5 Arun + 15 Anita
//!      ┌─────┴────┐        ┌─────┴────┐         12 Ravi, 13 Sanjay, 14 Meera
//!  8 Arjun+18   9 Kiran  10 Anjali+22  11 Deepak
//!   16, 17        19       20, 21
//! ```

use kinship_domain::FamilyGraph;
use kinship_resolver::{resolve, resolve_to_viewer, Kinship, Relation, ResolveError, Resolver, ResolverConfig};
use kinship_store::sample_graph;
use proptest::prelude::*;

fn family() -> FamilyGraph {
    sample_graph().unwrap()
}

fn ids(graph: &FamilyGraph) -> Vec<String> {
    graph.ids().map(|id| id.as_str().to_string()).collect()
}

#[test]
fn test_immediate_family() {
    let graph = family();
    assert_eq!(resolve("8", "9", &graph), "brother");
    assert_eq!(resolve("16", "17", &graph), "sister");
    assert_eq!(resolve("16", "8", &graph), "father");
    assert_eq!(resolve("16", "18", &graph), "mother");
    assert_eq!(resolve("8", "18", &graph), "wife");
    assert_eq!(resolve("10", "20", &graph), "child");
}

#[test]
fn test_lineage() {
    let graph = family();
    assert_eq!(resolve("16", "3", &graph), "grandfather");
    assert_eq!(resolve("16", "2", &graph), "great-grandmother");
    assert_eq!(resolve("1", "16", &graph), "great-grandson");
    assert_eq!(resolve("1", "20", &graph), "great-grandchild");
}

#[test]
fn test_collaterals() {
    let graph = family();
    assert_eq!(resolve("16", "9", &graph), "uncle");
    assert_eq!(resolve("9", "16", &graph), "nephew");
    assert_eq!(resolve("9", "17", &graph), "niece");
    assert_eq!(resolve("11", "20", &graph), "nibling");
    assert_eq!(resolve("5", "16", &graph), "great-nephew");
    assert_eq!(resolve("16", "5", &graph), "great-uncle");
}

#[test]
fn test_cousins() {
    let graph = family();
    assert_eq!(resolve("16", "19", &graph), "cousin");
    assert_eq!(resolve("8", "10", &graph), "cousin");
    assert_eq!(resolve("16", "20", &graph), "2nd cousin");
    assert_eq!(resolve("20", "16", &graph), "2nd cousin");
}

#[test]
fn test_uneven_cousins() {
    let graph = family();
    assert_eq!(resolve("16", "10", &graph), "father's cousin");
    assert_eq!(resolve("12", "16", &graph), "cousin's son");
    assert_eq!(resolve("8", "20", &graph), "cousin's child");
}

#[test]
fn test_in_laws() {
    let graph = family();
    assert_eq!(resolve("18", "3", &graph), "father-in-law");
    assert_eq!(resolve("6", "1", &graph), "father-in-law");
    assert_eq!(resolve("3", "18", &graph), "daughter-in-law");
    assert_eq!(resolve("9", "18", &graph), "sister-in-law");
    assert_eq!(resolve("18", "9", &graph), "brother-in-law");
}

#[test]
fn test_partners_of_relatives() {
    let graph = family();
    assert_eq!(resolve("16", "15", &graph), "great-aunt");
    assert_eq!(resolve("16", "7", &graph), "great-uncle");
    assert_eq!(resolve("16", "22", &graph), "father's cousin's husband");
}

#[test]
fn test_partners_of_partners_relatives() {
    let graph = family();
    assert_eq!(resolve("18", "22", &graph), "husband's cousin's husband");
    assert_eq!(resolve("22", "18", &graph), "wife's cousin's wife");
    assert_eq!(resolve("15", "7", &graph), "husband's brother-in-law");
    assert_eq!(resolve("6", "15", &graph), "husband's sister-in-law");
}

#[test]
fn test_viewer() {
    let graph = family();
    assert_eq!(resolve_to_viewer("9", Some("rohan_k"), &graph), "your uncle");
    assert_eq!(resolve_to_viewer("16", Some("rohan_k"), &graph), "you");
    assert_eq!(resolve_to_viewer("22", Some("zara_r"), &graph), "your father");
    assert_eq!(resolve_to_viewer("21", Some("zara_r"), &graph), "your brother");
    assert_eq!(resolve_to_viewer("9", None, &graph), "");
    assert_eq!(resolve_to_viewer("9", Some("ghost_login"), &graph), "");
}

#[test]
fn test_unknown_ids() {
    let graph = family();
    assert_eq!(resolve("16", "ghost", &graph), "no relation");
    assert_eq!(resolve("ghost", "16", &graph), "no relation");
    assert_eq!(resolve("ghost", "ghost", &graph), "self");

    let resolver = Resolver::new(&graph);
    assert_eq!(
        resolver.classify("16", "ghost"),
        Err(ResolveError::UnknownMember("ghost".to_string()))
    );
}

#[test]
fn test_every_member_is_self() {
    let graph = family();
    for id in ids(&graph) {
        assert_eq!(resolve(&id, &id, &graph), "self");
    }
}

#[test]
fn test_every_pair_is_related() {
    let graph = family();
    let ids = ids(&graph);
    for from in &ids {
        for to in &ids {
            if from == to {
                continue;
            }
            let label = resolve(from, to, &graph);
            assert_ne!(label, "no relation", "{} -> {}", from, to);
            assert!(!label.contains("in-law-in-law"), "{} -> {}: {}", from, to, label);
        }
    }
}

#[test]
fn test_lineage_is_symmetric() {
    let graph = family();
    let resolver = Resolver::new(&graph);
    for from in ids(&graph) {
        for (ancestor, distance) in graph.ancestors(&from).iter() {
            if distance == 0 {
                continue;
            }
            let up = resolver.classify(&from, ancestor.as_str()).unwrap();
            let down = resolver.classify(ancestor.as_str(), &from).unwrap();
            assert_eq!(up.relation(), Some(&Relation::Ancestor(distance)));
            assert_eq!(down.relation(), Some(&Relation::Descendant(distance)));
        }
    }
}

#[test]
fn test_siblings_and_cousins_are_symmetric() {
    let graph = family();
    let resolver = Resolver::new(&graph);
    let ids = ids(&graph);
    for from in &ids {
        for to in &ids {
            let Ok(Kinship::Related { relation, .. }) = resolver.classify(from, to) else {
                continue;
            };
            if matches!(relation, Relation::Sibling | Relation::Cousin(_)) {
                let back = resolver.classify(to, from).unwrap();
                assert_eq!(back.relation(), Some(&relation), "{} <-> {}", from, to);
            }
        }
    }
}

#[test]
fn test_blood_only_config() {
    let graph = family();
    let resolver = Resolver::with_config(&graph, ResolverConfig::blood_only()).unwrap();
    assert_eq!(resolver.resolve("16", "9"), "uncle");
    assert_eq!(resolver.resolve("18", "3"), "no relation");
    assert_eq!(resolver.resolve("8", "18"), "wife");
}

#[test]
fn test_config_from_toml() {
    let graph = family();
    let config = ResolverConfig::from_toml("in_law_resolution = false\n").unwrap();
    let resolver = Resolver::with_config(&graph, config).unwrap();
    assert_eq!(resolver.resolve("18", "3"), "husband's father");

    let through_path = resolver.resolve("16", "22");
    assert_ne!(through_path, "father's cousin's husband");
    assert!(through_path.ends_with("husband"), "{}", through_path);
}

proptest! {
    #[test]
    fn prop_resolution_is_deterministic(from in 1u32..=22, to in 1u32..=22) {
        let graph = family();
        let (from, to) = (from.to_string(), to.to_string());
        let first = resolve(&from, &to, &graph);
        let second = resolve(&from, &to, &graph);
        prop_assert_eq!(&first, &second);
        prop_assert!(!first.is_empty());
    }
}
