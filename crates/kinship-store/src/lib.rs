//! Kinship Storage Layer
//!
//! Implements the [`FamilySource`](kinship_domain::FamilySource) trait for the
//! JSON family dataset format.
//!
//! # Architecture
//!
//! - `FamilyDocument` mirrors the dataset JSON (camelCase fields, a `members`
//!   map keyed by id, years as numbers or strings)
//! - Sources (`JsonFileSource`, `SampleSource`) turn a document into a
//!   read-only `FamilyGraph`
//! - Dangling references are reported at `warn` level, never rejected
//!
//! # Examples
//!
//! ```
//! use kinship_domain::FamilySource;
//! use kinship_store::SampleSource;
//!
//! let graph = SampleSource.load().unwrap();
//! assert!(graph.contains("16"));
//! ```

#![warn(missing_docs)]

mod document;
mod error;
mod source;

pub use document::{FamilyDocument, MemberRecord, YearField};
pub use error::{Result, StoreError};
pub use source::{sample_graph, JsonFileSource, SampleSource, SAMPLE_FAMILY_JSON};
