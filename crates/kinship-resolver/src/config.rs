//! Configuration for the Resolver

use serde::{Deserialize, Serialize};

/// How to choose among common ancestors with the same total distance
///
/// Only matters for pedigree-collapsed graphs (double cousins, cousin
/// marriages); in a tree every minimum is unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// First candidate in the source member's ancestor discovery order
    #[default]
    FirstEncountered,
    /// Candidate closest to the target member
    ClosestToTarget,
}

/// Configuration for the Resolver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Tie-break among minimum-distance common ancestors
    pub tie_break: TieBreak,

    /// Infer relations through partners when no blood relation exists
    pub in_law_resolution: bool,

    /// Describe remaining relations as a possessive chain along the shortest path
    pub path_fallback: bool,

    /// Longest path (in hops) the fallback search will consider; `None` is unbounded
    pub max_path_length: Option<usize>,
}

impl Default for ResolverConfig {
    /// Default configuration: every stage enabled
    fn default() -> Self {
        Self {
            tie_break: TieBreak::FirstEncountered,
            in_law_resolution: true,
            path_fallback: true,
            max_path_length: None,
        }
    }
}

impl ResolverConfig {
    /// Blood-only preset: no partner mediation, no path fallback
    pub fn blood_only() -> Self {
        Self {
            in_law_resolution: false,
            path_fallback: false,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.path_fallback && self.max_path_length == Some(0) {
            return Err("max_path_length must be greater than 0 when path_fallback is enabled".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
