//! Family dataset document - the JSON shape the dataset is authored in
//!
//! ```json
//! {
//!   "rootId": "1",
//!   "members": {
//!     "1": { "id": "1", "name": "Rajesh Kumar", "gender": "male",
//!            "birthYear": "1910", "parentIds": [], "childrenIds": ["3"],
//!            "partnerId": "2" }
//!   }
//! }
//! ```
//!
//! Presentation-only fields (`imageUrl`, `biography`, `marriageYear`, ...)
//! are accepted and ignored.

use std::collections::BTreeMap;

use kinship_domain::{FamilyGraph, Gender, Member, MemberId};
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::{Result, StoreError};

/// A whole family dataset
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyDocument {
    /// Member the tree is drawn from (presentation hint)
    #[serde(default)]
    pub root_id: Option<String>,

    /// Members keyed by id
    pub members: BTreeMap<String, MemberRecord>,
}

/// One member as stored in the dataset
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRecord {
    /// Member id; must match the map key
    pub id: String,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// "male", "female" or "other"
    #[serde(default)]
    pub gender: Option<String>,

    /// Parent ids
    #[serde(default)]
    pub parent_ids: Vec<String>,

    /// Child ids
    #[serde(default)]
    pub children_ids: Vec<String>,

    /// Partner id
    #[serde(default)]
    pub partner_id: Option<String>,

    /// Birth year, as a number or a string
    #[serde(default)]
    pub birth_year: Option<YearField>,

    /// Death year, as a number or a string
    #[serde(default)]
    pub death_year: Option<YearField>,

    /// Login identity
    #[serde(default, alias = "identity")]
    pub username: Option<String>,
}

/// Year written either as `1910` or `"1910"`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum YearField {
    /// Numeric year
    Number(i32),
    /// Year as text; blank means absent
    Text(String),
}

impl YearField {
    /// Parse to a year, `None` for blank text
    pub fn parse(&self) -> Result<Option<i32>> {
        match self {
            YearField::Number(year) => Ok(Some(*year)),
            YearField::Text(text) if text.trim().is_empty() => Ok(None),
            YearField::Text(text) => text
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| StoreError::InvalidData(format!("Invalid year: {}", text))),
        }
    }
}

impl FamilyDocument {
    /// Parse a document from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Member the tree is drawn from, if the document names one
    pub fn root_id(&self) -> Option<&str> {
        self.root_id.as_deref().filter(|id| !id.is_empty())
    }

    /// Build the graph snapshot
    ///
    /// Members are inserted in id order. Dangling references are logged and
    /// kept; the resolver skips them.
    pub fn into_graph(self) -> Result<FamilyGraph> {
        let mut graph = FamilyGraph::new();

        for (key, record) in self.members {
            if key != record.id {
                return Err(StoreError::KeyMismatch { key, id: record.id });
            }
            graph.insert(record.into_member()?);
        }

        let dangling = report_dangling(&graph);
        info!(
            members = graph.len(),
            dangling,
            "loaded family graph"
        );
        Ok(graph)
    }
}

impl MemberRecord {
    /// Convert to a domain member
    pub fn into_member(self) -> Result<Member> {
        let gender = match self.gender.as_deref() {
            None | Some("") => Gender::Other,
            Some(text) => Gender::parse(text)
                .ok_or_else(|| StoreError::InvalidData(format!("Invalid gender for member {}: {}", self.id, text)))?,
        };
        let birth_year = parse_year(self.birth_year.as_ref())?;
        let death_year = parse_year(self.death_year.as_ref())?;

        let mut member = Member::new(self.id, self.name, gender)
            .with_parents(self.parent_ids)
            .with_children(self.children_ids)
            .with_years(birth_year, death_year);
        member.partner_id = self.partner_id.filter(|p| !p.is_empty()).map(MemberId::from);
        member.identity = self.username.filter(|u| !u.is_empty());
        Ok(member)
    }
}

fn parse_year(field: Option<&YearField>) -> Result<Option<i32>> {
    match field {
        Some(field) => field.parse(),
        None => Ok(None),
    }
}

fn report_dangling(graph: &FamilyGraph) -> usize {
    let mut count = 0;
    for member in graph.members() {
        let refs = member
            .parent_ids
            .iter()
            .chain(member.children_ids.iter())
            .chain(member.partner_id.iter());
        for id in refs {
            if !graph.contains(id.as_str()) {
                warn!(member = member.id.as_str(), missing = id.as_str(), "dangling member reference");
                count += 1;
            }
        }
    }
    count
}
