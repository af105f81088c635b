//! Family sources - where a graph snapshot is loaded from

use std::fs;
use std::path::{Path, PathBuf};

use kinship_domain::{FamilyGraph, FamilySource};
use tracing::debug;

use crate::document::FamilyDocument;
use crate::error::{Result, StoreError};

/// Bundled sample dataset: four generations of the Kumar and Reddy families
pub const SAMPLE_FAMILY_JSON: &str = include_str!("../data/sample_family.json");

/// Loads a dataset from a JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Create a source for the given file
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path this source reads from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the document without building the graph
    pub fn document(&self) -> Result<FamilyDocument> {
        debug!(path = %self.path.display(), "reading family dataset");
        let contents = fs::read_to_string(&self.path)?;
        FamilyDocument::from_json_str(&contents)
    }
}

impl FamilySource for JsonFileSource {
    type Error = StoreError;

    fn load(&self) -> Result<FamilyGraph> {
        self.document()?.into_graph()
    }
}

/// The bundled sample dataset
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleSource;

impl SampleSource {
    /// Parse the bundled document
    pub fn document(&self) -> Result<FamilyDocument> {
        FamilyDocument::from_json_str(SAMPLE_FAMILY_JSON)
    }
}

impl FamilySource for SampleSource {
    type Error = StoreError;

    fn load(&self) -> Result<FamilyGraph> {
        self.document()?.into_graph()
    }
}

/// Load the bundled sample family
pub fn sample_graph() -> Result<FamilyGraph> {
    SampleSource.load()
}
