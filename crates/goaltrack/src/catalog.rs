//! The in-memory goal dataset.
//!
//! A [`Catalog`] is built once at startup and never written afterwards. It
//! is either the built-in seed or a JSON array read from a seed file.

use std::path::Path;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::goal::{builtin_goals, Goal};

/// Read-only collection of goals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    goals: Vec<Goal>,
}

impl Catalog {
    /// Create a catalog over the given goals, kept in the given order.
    #[must_use]
    pub fn new(goals: Vec<Goal>) -> Self {
        Self { goals }
    }

    /// The catalog every process starts with when nothing else is configured.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(builtin_goals())
    }

    /// Load a catalog from a JSON seed file holding an array of goals.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be read or isn't a JSON goal array.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading goal seed file {}", path.display());
        let raw = std::fs::read_to_string(path).map_err(|source| Error::SeedLoad {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&raw)?;
        info!(
            "Loaded {} goals from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Parse a catalog from a JSON array of goals.
    ///
    /// # Errors
    ///
    /// Returns an error if the input isn't a JSON goal array.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let goals: Vec<Goal> = serde_json::from_str(raw)?;
        Ok(Self::new(goals))
    }

    /// Load from `path` if given, otherwise use the built-in seed.
    ///
    /// # Errors
    ///
    /// Returns an error if a seed file is given but can't be loaded.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_json_file(path),
            None => Ok(Self::builtin()),
        }
    }

    /// All goals, in dataset order.
    #[must_use]
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Number of goals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.goals.len()
    }

    /// Check if the catalog holds no goals.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    /// First goal whose id equals `id`.
    #[must_use]
    pub fn find_by_id(&self, id: i64) -> Option<&Goal> {
        self.goals.iter().find(|goal| goal.id == id)
    }

    /// First goal whose title equals `title` exactly.
    #[must_use]
    pub fn find_by_title(&self, title: &str) -> Option<&Goal> {
        self.goals.iter().find(|goal| goal.title == title)
    }
}
