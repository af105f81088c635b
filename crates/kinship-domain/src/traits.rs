//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the graph model and the
//! infrastructure that feeds it. Implementations live in other crates.

use crate::FamilyGraph;

/// Trait for loading a family graph from static input data
///
/// Implemented by the infrastructure layer (kinship-store)
pub trait FamilySource {
    /// Error type for load operations
    type Error;

    /// Build the graph snapshot
    fn load(&self) -> Result<FamilyGraph, Self::Error>;
}
