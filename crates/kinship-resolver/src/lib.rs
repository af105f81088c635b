//! Kinship Resolver
//!
//! Computes the natural-language relationship one family member would use to
//! describe another ("grandmother", "2nd cousin", "mother-in-law",
//! "cousin's son").
//!
//! # Overview
//!
//! Resolution tries four stages in order and stops at the first match:
//!
//! ```text
//! (from, to, graph)
//!     ├──> Direct   parent / child / partner edge
//!     ├──> Blood    nearest common ancestor, classified by (d1, d2)
//!     ├──> InLaw    relation to the target's partner, or from one's own partner
//!     └──> Path     shortest typed path rendered as a possessive chain
//! ```
//!
//! Anything left over is `"no relation"`. Unknown ids fail soft to the same
//! sentinel through [`resolve`]; [`Resolver::classify`] reports them as
//! [`ResolveError::UnknownMember`].
//!
//! # Example Usage
//!
//! ```
//! use kinship_domain::{FamilyGraph, Gender, Member};
//! use kinship_resolver::{resolve, resolve_to_viewer};
//!
//! let graph = FamilyGraph::from_members([
//!     Member::new("gp", "Grandpa", Gender::Male).with_children(["dad"]),
//!     Member::new("dad", "Dad", Gender::Male)
//!         .with_parents(["gp"])
//!         .with_children(["kid"]),
//!     Member::new("kid", "Kid", Gender::Female)
//!         .with_parents(["dad"])
//!         .with_identity("kid_login"),
//! ]);
//!
//! assert_eq!(resolve("gp", "kid", &graph), "granddaughter");
//! assert_eq!(resolve_to_viewer("gp", Some("kid_login"), &graph), "your grandfather");
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod path;
mod relation;
mod resolver;
mod terms;
mod viewer;

pub use config::{ResolverConfig, TieBreak};
pub use error::{ResolveError, Result};
pub use path::{describe as describe_path, describe_steps};
pub use relation::{Kinship, Link, Relation, NO_RELATION, SELF_LABEL};
pub use resolver::{resolve, CommonAncestor, Resolver, Stage};
pub use terms::{cousin, generational, ordinal_suffix, possessive, Term};
pub use viewer::{describe_for_viewer, resolve_to_viewer, YOU};
