/// Shared helpers for integration tests
pub mod mocks;

use std::path::PathBuf;

pub fn fixture_database_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/hardware_database.yml")
}
