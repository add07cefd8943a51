use crate::identity_formulation::domain::Catalog;
use crate::shared::Result;
use std::path::Path;

/// CatalogReader port for loading the hardware database
///
/// Implementations parse the persisted catalog and return it only after
/// load-time validation has passed, so callers never see a partially valid
/// catalog.
pub trait CatalogReader {
    /// Reads, parses and validates the catalog stored at `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist, is a symlink or exceeds the size limit
    /// - The content is not valid YAML or lacks a required collection
    /// - The catalog fails validation (duplicate ids, unusable labels, etc.)
    fn read_catalog(&self, path: &Path) -> Result<Catalog>;
}
