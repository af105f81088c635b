//! Gendered term table and the prefix/suffix rules applied to it

use kinship_domain::Gender;

/// Base kinship term before generational prefixes or the in-law suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Term {
    /// father / mother / parent
    Parent,
    /// son / daughter / child
    Child,
    /// brother / sister / sibling
    Sibling,
    /// husband / wife / spouse
    Spouse,
    /// uncle / aunt / pibling
    AuntUncle,
    /// nephew / niece / nibling
    NieceNephew,
    /// cousin (gender-invariant)
    Cousin,
}

impl Term {
    /// Word for this term as used to describe someone of `gender`
    pub fn gendered(self, gender: Gender) -> &'static str {
        match (self, gender) {
            (Term::Parent, Gender::Male) => "father",
            (Term::Parent, Gender::Female) => "mother",
            (Term::Parent, Gender::Other) => "parent",
            (Term::Child, Gender::Male) => "son",
            (Term::Child, Gender::Female) => "daughter",
            (Term::Child, Gender::Other) => "child",
            (Term::Sibling, Gender::Male) => "brother",
            (Term::Sibling, Gender::Female) => "sister",
            (Term::Sibling, Gender::Other) => "sibling",
            (Term::Spouse, Gender::Male) => "husband",
            (Term::Spouse, Gender::Female) => "wife",
            (Term::Spouse, Gender::Other) => "spouse",
            (Term::AuntUncle, Gender::Male) => "uncle",
            (Term::AuntUncle, Gender::Female) => "aunt",
            (Term::AuntUncle, Gender::Other) => "pibling",
            (Term::NieceNephew, Gender::Male) => "nephew",
            (Term::NieceNephew, Gender::Female) => "niece",
            (Term::NieceNephew, Gender::Other) => "nibling",
            (Term::Cousin, _) => "cousin",
        }
    }
}

/// `"great-"` repeated `count` times
pub fn greats(count: u32) -> String {
    "great-".repeat(count as usize)
}

/// Lineage prefixing: 1 = term, 2 = grand-term, n = (n-2) x great- + grand-term
pub fn generational(term: &str, generations: u32) -> String {
    match generations {
        0 | 1 => term.to_string(),
        n => format!("{}grand{}", greats(n - 2), term),
    }
}

/// Ordinal suffix for a cousin degree: st, nd and rd for 1 to 3, th otherwise
pub fn ordinal_suffix(n: u32) -> &'static str {
    match n {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Cousin term for a degree: 1 = cousin, 2 = 2nd cousin, ...
pub fn cousin(degree: u32) -> String {
    if degree <= 1 {
        return Term::Cousin.gendered(Gender::Other).to_string();
    }
    format!("{}{} cousin", degree, ordinal_suffix(degree))
}

/// Possessive form: "father" -> "father's", "parents" -> "parents'"
pub fn possessive(term: &str) -> String {
    if term.ends_with('s') {
        format!("{}'", term)
    } else {
        format!("{}'s", term)
    }
}
