//! Viewer wrapper - phrase a member's relationship to the signed-in viewer

use kinship_domain::FamilyGraph;
use tracing::debug;

use crate::resolver::Resolver;

/// Label used when the viewer looks at their own card
pub const YOU: &str = "you";

/// Relationship of `member_id` to the member signed in as `viewer_identity`
///
/// Returns an empty string when there is no viewer or no member carries that
/// identity, `"you"` for the viewer's own card, and `"your <relation>"`
/// otherwise.
pub fn resolve_to_viewer(member_id: &str, viewer_identity: Option<&str>, graph: &FamilyGraph) -> String {
    describe_for_viewer(&Resolver::new(graph), member_id, viewer_identity, graph)
}

/// Same as [`resolve_to_viewer`] with a caller-supplied resolver
pub fn describe_for_viewer(
    resolver: &Resolver<'_>,
    member_id: &str,
    viewer_identity: Option<&str>,
    graph: &FamilyGraph,
) -> String {
    let Some(identity) = viewer_identity else {
        return String::new();
    };
    let Some(viewer) = graph.find_by_identity(identity) else {
        debug!(identity, "no member signed in under this identity");
        return String::new();
    };
    if viewer.id.as_str() == member_id {
        return YOU.to_string();
    }
    format!("your {}", resolver.resolve(viewer.id.as_str(), member_id))
}
