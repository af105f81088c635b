//! Relation taxonomy - the closed set of structural relations and their rendering

use std::fmt;

use kinship_domain::Gender;

use crate::terms::{self, Term};

/// Label returned when both ids are the same member
pub const SELF_LABEL: &str = "self";

/// Label returned when no relation can be found
pub const NO_RELATION: &str = "no relation";

/// Structural relation from one member to another
///
/// Generation counts are distances in the family graph: `Ancestor(1)` is a
/// parent, `AuntUncle(2)` an uncle, `AuntUncle(3)` a great-uncle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Relation {
    /// Direct ancestor `n` generations up
    Ancestor(u32),

    /// Direct descendant `n` generations down
    Descendant(u32),

    /// Shares a parent
    Sibling,

    /// Partner / spouse
    Partner,

    /// Sibling of an ancestor; the count is the source's distance to the shared ancestor
    AuntUncle(u32),

    /// Descendant of a sibling; the count is the target's distance to the shared ancestor
    NieceNephew(u32),

    /// Cousin of the given degree (1 = first cousin)
    Cousin(u32),

    /// Relation reached through the source's partner or the target's partner
    InLaw(Box<Relation>),

    /// Possessive chain such as "cousin's son"
    Chain(Vec<Link>),
}

/// One element of a possessive chain, with the gender of the member it names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Relation for this hop
    pub relation: Relation,

    /// Gender of the member this hop lands on
    pub gender: Gender,
}

impl Link {
    /// Create a new link
    pub fn new(relation: Relation, gender: Gender) -> Self {
        Self { relation, gender }
    }
}

impl Relation {
    /// Build a chain, flattening nested chains
    pub fn chain<I>(links: I) -> Self
    where
        I: IntoIterator<Item = Link>,
    {
        let mut flat = Vec::new();
        for link in links {
            match link.relation {
                Relation::Chain(inner) => flat.extend(inner),
                relation => flat.push(Link::new(relation, link.gender)),
            }
        }
        Relation::Chain(flat)
    }

    /// Wrap in the in-law suffix
    pub fn in_law(self) -> Self {
        Relation::InLaw(Box::new(self))
    }

    /// Whether this is a single named blood relation (not partner, in-law or chain)
    pub fn is_blood(&self) -> bool {
        matches!(
            self,
            Relation::Ancestor(_)
                | Relation::Descendant(_)
                | Relation::Sibling
                | Relation::AuntUncle(_)
                | Relation::NieceNephew(_)
                | Relation::Cousin(_)
        )
    }

    /// Render the relation for a target of `gender`
    ///
    /// Chains carry their own genders per link and ignore `gender`.
    pub fn term(&self, gender: Gender) -> String {
        match self {
            Relation::Ancestor(n) => terms::generational(Term::Parent.gendered(gender), *n),
            Relation::Descendant(n) => terms::generational(Term::Child.gendered(gender), *n),
            Relation::Sibling => Term::Sibling.gendered(gender).to_string(),
            Relation::Partner => Term::Spouse.gendered(gender).to_string(),
            Relation::AuntUncle(n) => format!(
                "{}{}",
                terms::greats(n.saturating_sub(2)),
                Term::AuntUncle.gendered(gender)
            ),
            Relation::NieceNephew(n) => format!(
                "{}{}",
                terms::greats(n.saturating_sub(2)),
                Term::NieceNephew.gendered(gender)
            ),
            Relation::Cousin(degree) => terms::cousin(*degree),
            Relation::InLaw(inner) => format!("{}-in-law", inner.term(gender)),
            Relation::Chain(links) => render_chain(links),
        }
    }
}

fn render_chain(links: &[Link]) -> String {
    let last = links.len().saturating_sub(1);
    links
        .iter()
        .enumerate()
        .map(|(idx, link)| {
            let term = link.relation.term(link.gender);
            if idx < last {
                terms::possessive(&term)
            } else {
                term
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Outcome of classifying one member relative to another
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kinship {
    /// Both ids name the same member
    SelfRelation,

    /// A relation was found; `gender` is the target's gender
    Related {
        /// Structural relation from source to target
        relation: Relation,
        /// Gender of the target member
        gender: Gender,
    },

    /// No connecting relation
    Unrelated,
}

impl Kinship {
    /// Lowercase phrase with no leading article
    pub fn label(&self) -> String {
        match self {
            Kinship::SelfRelation => SELF_LABEL.to_string(),
            Kinship::Related { relation, gender } => relation.term(*gender),
            Kinship::Unrelated => NO_RELATION.to_string(),
        }
    }

    /// The structural relation, if any
    pub fn relation(&self) -> Option<&Relation> {
        match self {
            Kinship::Related { relation, .. } => Some(relation),
            _ => None,
        }
    }
}

impl fmt::Display for Kinship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
