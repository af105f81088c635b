//! Kinship Domain Layer
//!
//! This crate contains the family graph model that the relationship resolver
//! reasons over. It has ZERO external dependencies and defines the members,
//! the three edge relations and the traversal primitives every other layer
//! depends upon.
//!
//! ## Key Concepts
//!
//! - **Member**: one person, with parent, child and partner edges
//! - **Family Graph**: members keyed by id, read-only once built
//! - **Distance Map**: minimum generation distance to every ancestor or descendant
//! - **Path**: the typed hops (parent, child, partner) between two members
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - The graph is passed explicitly to every traversal, never held globally
//! - Loading lives behind the [`traits::FamilySource`] boundary

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod gender;
pub mod graph;
pub mod member;
pub mod traits;
pub mod traversal;

// Re-exports for convenience
pub use gender::Gender;
pub use graph::FamilyGraph;
pub use member::{Member, MemberId};
pub use traits::FamilySource;
pub use traversal::{DistanceMap, Edge, Step};
