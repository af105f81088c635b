//! Loaded dataset plus the settings every command resolves with.

use crate::config::Config;
use crate::error::{CliError, Result};
use kinship_domain::{FamilyGraph, FamilySource, Member};
use kinship_resolver::{Resolver, ResolverConfig};
use kinship_store::{JsonFileSource, SampleSource};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where the session's graph was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetOrigin {
    /// Bundled sample family
    Sample,
    /// JSON file on disk
    File(PathBuf),
}

impl DatasetOrigin {
    /// Human-readable description.
    pub fn describe(&self) -> String {
        match self {
            DatasetOrigin::Sample => "bundled sample".to_string(),
            DatasetOrigin::File(path) => path.display().to_string(),
        }
    }
}

/// A loaded family graph with resolver settings and the default viewer.
#[derive(Debug)]
pub struct Session {
    graph: FamilyGraph,
    origin: DatasetOrigin,
    resolver: ResolverConfig,
    viewer: Option<String>,
}

impl Session {
    /// Open the dataset: `override_path`, then the active profile's dataset, then the sample.
    pub fn open(override_path: Option<&Path>, config: &Config) -> Result<Self> {
        let profile = config.get_active_profile()?;
        let origin = match override_path.or(profile.dataset.as_deref()) {
            Some(path) => DatasetOrigin::File(path.to_path_buf()),
            None => DatasetOrigin::Sample,
        };
        debug!(dataset = %origin.describe(), profile = %config.active_profile, "opening session");

        let graph = match &origin {
            DatasetOrigin::Sample => SampleSource.load()?,
            DatasetOrigin::File(path) => JsonFileSource::new(path).load()?,
        };

        Self::from_graph(graph, origin, config.resolver.clone(), profile.viewer.clone())
    }

    /// Build a session around an already loaded graph.
    pub fn from_graph(
        graph: FamilyGraph,
        origin: DatasetOrigin,
        resolver: ResolverConfig,
        viewer: Option<String>,
    ) -> Result<Self> {
        resolver.validate().map_err(CliError::Config)?;
        Ok(Self {
            graph,
            origin,
            resolver,
            viewer,
        })
    }

    /// The loaded graph.
    pub fn graph(&self) -> &FamilyGraph {
        &self.graph
    }

    /// Where the graph came from.
    pub fn origin(&self) -> &DatasetOrigin {
        &self.origin
    }

    /// Default viewer identity.
    pub fn viewer(&self) -> Option<&str> {
        self.viewer.as_deref()
    }

    /// Resolver over the session's graph.
    pub fn resolver(&self) -> Result<Resolver<'_>> {
        Ok(Resolver::with_config(&self.graph, self.resolver.clone())?)
    }

    /// Find a member by id, falling back to login identity.
    pub fn member(&self, key: &str) -> Result<&Member> {
        self.graph
            .get(key)
            .or_else(|| self.graph.find_by_identity(key))
            .ok_or_else(|| CliError::UnknownMember(key.to_string()))
    }
}
