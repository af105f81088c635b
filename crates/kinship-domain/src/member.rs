//! Member module - a single person in the family graph

use std::borrow::Borrow;
use std::fmt;

use crate::Gender;

/// Unique identifier for a member
///
/// Identifiers are opaque string keys taken verbatim from the source data
/// (the bundled dataset uses `"1"`, `"2"`, ...). `MemberId` borrows as `str`,
/// so graph lookups accept plain string slices.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MemberId(String);

impl MemberId {
    /// Create a new MemberId
    ///
    /// # Examples
    ///
    /// ```
    /// use kinship_domain::MemberId;
    ///
    /// let id = MemberId::new("8");
    /// assert_eq!(id.as_str(), "8");
    /// ```
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for MemberId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MemberId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for MemberId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A member of the family graph
///
/// Edges are stored on both ends: a parent lists the child in `children_ids`
/// and the child lists the parent in `parent_ids`. The graph assumes this
/// symmetry but never enforces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// Unique identifier
    pub id: MemberId,

    /// Display name (presentation only)
    pub name: String,

    /// Gender used to pick relationship terms
    pub gender: Gender,

    /// Parents, usually zero to two
    pub parent_ids: Vec<MemberId>,

    /// Children in source order
    pub children_ids: Vec<MemberId>,

    /// Partner, expected to point back at this member
    pub partner_id: Option<MemberId>,

    /// Year of birth (presentation only)
    pub birth_year: Option<i32>,

    /// Year of death (presentation only)
    pub death_year: Option<i32>,

    /// External login identity, if this member can sign in
    pub identity: Option<String>,
}

impl Member {
    /// Create a member with no edges
    pub fn new(id: impl Into<MemberId>, name: impl Into<String>, gender: Gender) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            gender,
            parent_ids: Vec::new(),
            children_ids: Vec::new(),
            partner_id: None,
            birth_year: None,
            death_year: None,
            identity: None,
        }
    }

    /// Set the parent list
    pub fn with_parents<I, S>(mut self, parents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<MemberId>,
    {
        self.parent_ids = parents.into_iter().map(Into::into).collect();
        self
    }

    /// Set the children list
    pub fn with_children<I, S>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<MemberId>,
    {
        self.children_ids = children.into_iter().map(Into::into).collect();
        self
    }

    /// Set the partner
    pub fn with_partner(mut self, partner: impl Into<MemberId>) -> Self {
        self.partner_id = Some(partner.into());
        self
    }

    /// Set the external identity
    pub fn with_identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = Some(identity.into());
        self
    }

    /// Set birth and death years
    pub fn with_years(mut self, birth_year: Option<i32>, death_year: Option<i32>) -> Self {
        self.birth_year = birth_year;
        self.death_year = death_year;
        self
    }

    /// Whether `other` is listed as one of this member's parents
    pub fn has_parent(&self, other: &str) -> bool {
        self.parent_ids.iter().any(|p| p.as_str() == other)
    }

    /// Whether `other` is listed as one of this member's children
    pub fn has_child(&self, other: &str) -> bool {
        self.children_ids.iter().any(|c| c.as_str() == other)
    }

    /// Whether `other` is this member's partner
    pub fn is_partner(&self, other: &str) -> bool {
        self.partner_id.as_ref().is_some_and(|p| p.as_str() == other)
    }
}
