//! Sources of logic forests.

pub mod fixtures;

use crate::error::ForestError;
use crate::node::Forest;
use std::path::PathBuf;

/// Supplies the forest a view is built from.
pub trait ForestProvider {
    fn logic_forest(&self) -> Result<Forest, ForestError>;
}

/// The built-in live-operations fixture.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticForestProvider;

impl ForestProvider for StaticForestProvider {
    fn logic_forest(&self) -> Result<Forest, ForestError> {
        Forest::new(fixtures::live_ops_trees())
    }
}

/// Reads a JSON array of root nodes from disk on every call.
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    pub path: PathBuf,
}

impl JsonFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ForestProvider for JsonFileProvider {
    fn logic_forest(&self) -> Result<Forest, ForestError> {
        Forest::from_file(&self.path)
    }
}
