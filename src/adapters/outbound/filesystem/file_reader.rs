use crate::identity_formulation::domain::{Catalog, CatalogDocument};
use crate::ports::outbound::CatalogReader;
use crate::shared::error::FormulationError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for loading the YAML hardware database
///
/// This adapter implements the CatalogReader port. Files are read only after
/// symlink, file type and size checks pass.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Validate file is a regular file
    /// - Check file size limits
    fn safe_read_file(&self, path: &Path, file_type: &str) -> Result<String> {
        let file_size = validate_regular_file(path, file_type)?;
        validate_file_size(file_size, path, MAX_FILE_SIZE)?;

        fs::read_to_string(path).map_err(|e| {
            FormulationError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogReader for FileSystemReader {
    fn read_catalog(&self, path: &Path) -> Result<Catalog> {
        if !path.exists() {
            return Err(FormulationError::CatalogUnavailable {
                path: path.to_path_buf(),
                details: "File does not exist".to_string(),
            }
            .into());
        }

        let content = self.safe_read_file(path, "hardware database")?;

        let document: CatalogDocument =
            serde_yaml_ng::from_str(&content).map_err(|e| FormulationError::CatalogUnavailable {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        Catalog::from_document(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity_formulation::domain::catalog::test_fixtures::SAMPLE_CATALOG_YAML;
    use tempfile::TempDir;

    #[test]
    fn test_read_catalog_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("hardware_database.yml");
        fs::write(&path, SAMPLE_CATALOG_YAML).unwrap();

        let catalog = FileSystemReader::new().read_catalog(&path).unwrap();
        assert_eq!(catalog.cpus().len(), 3);
        assert!(catalog.preset("workstation_laptop").is_some());
    }

    #[test]
    fn test_read_catalog_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.yml");

        let err = FileSystemReader::new().read_catalog(&path).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Hardware database unavailable"));
        assert!(message.contains("File does not exist"));
    }

    #[test]
    fn test_read_catalog_malformed_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("hardware_database.yml");
        fs::write(&path, "cpus: [unclosed").unwrap();

        let err = FileSystemReader::new().read_catalog(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FormulationError>(),
            Some(FormulationError::CatalogUnavailable { .. })
        ));
    }

    #[test]
    fn test_read_catalog_missing_collection() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("hardware_database.yml");
        fs::write(&path, SAMPLE_CATALOG_YAML.replacen("displays:", "screens:", 1)).unwrap();

        let err = FileSystemReader::new().read_catalog(&path).unwrap_err();
        assert!(err.to_string().contains("displays"));
    }

    #[test]
    fn test_read_catalog_validation_failure() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("hardware_database.yml");
        let yaml = SAMPLE_CATALOG_YAML.replacen("id: gpu_intel", "id: gpu_1", 1);
        fs::write(&path, yaml).unwrap();

        let err = FileSystemReader::new().read_catalog(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FormulationError>(),
            Some(FormulationError::CatalogValidation { .. })
        ));
    }

    #[test]
    fn test_read_catalog_rejects_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = FileSystemReader::new().read_catalog(temp_dir.path());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not a regular file"));
    }

    #[cfg(unix)]
    #[test]
    fn test_read_catalog_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.yml");
        let link = temp_dir.path().join("link.yml");
        fs::write(&target, SAMPLE_CATALOG_YAML).unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = FileSystemReader::new().read_catalog(&link).unwrap_err();
        assert!(err.to_string().contains("Security violation"));
    }
}
