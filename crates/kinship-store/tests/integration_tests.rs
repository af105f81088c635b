//! Integration tests for kinship-store
//!
//! These tests load the bundled sample and hand-written files end to end.

use std::fs;

use kinship_domain::{FamilySource, Gender};
use kinship_store::{sample_graph, JsonFileSource, SampleSource, StoreError, SAMPLE_FAMILY_JSON};
use tempfile::TempDir;

#[test]
fn test_sample_shape() {
    let graph = sample_graph().unwrap();
    assert_eq!(graph.len(), 22);

    let rajesh = graph.get("1").unwrap();
    assert_eq!(rajesh.name, "Rajesh Kumar");
    assert_eq!(rajesh.gender, Gender::Male);
    assert_eq!(rajesh.children_ids.len(), 3);
    assert_eq!(graph.partner("1").map(|id| id.as_str()), Some("2"));

    let zara = graph.get("20").unwrap();
    assert_eq!(zara.gender, Gender::Other);
}

#[test]
fn test_sample_has_no_dangling_references() {
    let graph = sample_graph().unwrap();
    for member in graph.members() {
        for id in member.parent_ids.iter().chain(member.children_ids.iter()) {
            assert!(graph.contains(id.as_str()), "{} -> {}", member.id, id);
        }
        if let Some(partner) = &member.partner_id {
            assert!(graph.contains(partner.as_str()));
        }
    }
}

#[test]
fn test_sample_parent_child_links_agree() {
    let graph = sample_graph().unwrap();
    for member in graph.members() {
        for child in &member.children_ids {
            let child = graph.get(child.as_str()).unwrap();
            assert!(child.has_parent(member.id.as_str()));
        }
    }
}

#[test]
fn test_sample_identities() {
    let graph = sample_graph().unwrap();
    let rohan = graph.find_by_identity("rohan_k").unwrap();
    assert_eq!(rohan.id.as_str(), "16");
    assert_eq!(graph.find_by_identity("vikram_r").unwrap().id.as_str(), "21");
    assert!(graph.find_by_identity("nobody").is_none());
}

#[test]
fn test_file_round_trip_matches_sample() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("family.json");
    fs::write(&path, SAMPLE_FAMILY_JSON).unwrap();

    let from_file = JsonFileSource::new(&path).load().unwrap();
    let bundled = SampleSource.load().unwrap();
    assert_eq!(from_file.len(), bundled.len());
    for member in bundled.members() {
        assert_eq!(from_file.get(member.id.as_str()), Some(member));
    }
}

#[test]
fn test_file_with_dangling_reference_loads() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(
        &path,
        r#"{
            "members": {
                "a": { "id": "a", "name": "A", "gender": "female", "childrenIds": ["gone"] },
                "b": { "id": "b", "name": "B", "gender": "male", "parentIds": ["a"] }
            }
        }"#,
    )
    .unwrap();

    let graph = JsonFileSource::new(&path).load().unwrap();
    assert_eq!(graph.len(), 2);
    assert_eq!(graph.children("a").len(), 1);
}

#[test]
fn test_file_with_bad_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "[1, 2, 3]").unwrap();

    let result = JsonFileSource::new(&path).load();
    assert!(matches!(result, Err(StoreError::Json(_))));
}
