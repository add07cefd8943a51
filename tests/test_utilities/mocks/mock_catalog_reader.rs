use identity_formulator::identity_formulation::domain::CatalogDocument;
use identity_formulator::prelude::*;
use std::path::Path;

/// Mock CatalogReader serving an in-memory YAML document
pub struct MockCatalogReader {
    pub content: String,
    pub should_fail: bool,
}

impl MockCatalogReader {
    pub fn new(content: String) -> Self {
        Self {
            content,
            should_fail: false,
        }
    }

    /// Reader over the shared fixture catalog
    pub fn fixture() -> Self {
        let content = std::fs::read_to_string(super::super::fixture_database_path()).unwrap();
        Self::new(content)
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl CatalogReader for MockCatalogReader {
    fn read_catalog(&self, _path: &Path) -> Result<Catalog> {
        if self.should_fail {
            anyhow::bail!("Mock catalog read failure");
        }
        let document: CatalogDocument = serde_yaml_ng::from_str(&self.content)?;
        Catalog::from_document(document)
    }
}
