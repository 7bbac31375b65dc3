//! File-backed artifact store
//!
//! Each request persists up to four artifacts addressed by an opaque result
//! id: the check bundle and its text rendering, and after simulation the
//! simulation bundle and its text rendering. There is no expiry policy;
//! callers must not assume cleanup.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use uuid::Uuid;

use crate::error::{Result, RosCheckError};
use crate::schema::ResultBundle;

/// Store rooted at a data directory (created on construction)
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Mint a fresh opaque result id
    pub fn new_result_id() -> String {
        Uuid::new_v4().to_string()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn check_json_path(&self, id: &str) -> PathBuf {
        self.root.join(format!("{id}_check.json"))
    }

    fn check_text_path(&self, id: &str) -> PathBuf {
        self.root.join(format!("{id}_report.txt"))
    }

    fn sim_json_path(&self, id: &str) -> PathBuf {
        self.root.join(format!("{id}_sim.json"))
    }

    fn sim_text_path(&self, id: &str) -> PathBuf {
        self.root.join(format!("{id}_sim_report.txt"))
    }

    /// Persist the check bundle and its text rendering
    pub fn save_check(&self, id: &str, bundle: &ResultBundle, text: &str) -> Result<()> {
        fs::write(self.check_json_path(id), serde_json::to_string_pretty(bundle)?)?;
        fs::write(self.check_text_path(id), text)?;
        debug!(id, "check result persisted");
        Ok(())
    }

    /// Persist the simulation bundle and its text rendering
    pub fn save_simulation(&self, id: &str, bundle: &ResultBundle, text: &str) -> Result<()> {
        fs::write(self.sim_json_path(id), serde_json::to_string_pretty(bundle)?)?;
        fs::write(self.sim_text_path(id), text)?;
        debug!(id, "simulation result persisted");
        Ok(())
    }

    /// Load a stored check bundle
    pub fn load_check(&self, id: &str) -> Result<ResultBundle> {
        Self::load_bundle(&self.check_json_path(id), id)
    }

    /// Load a stored simulation bundle
    pub fn load_simulation(&self, id: &str) -> Result<ResultBundle> {
        Self::load_bundle(&self.sim_json_path(id), id)
    }

    /// Load a stored text rendering (check, or simulation when `simulation`)
    pub fn load_text(&self, id: &str, simulation: bool) -> Result<String> {
        let path = if simulation {
            self.sim_text_path(id)
        } else {
            self.check_text_path(id)
        };
        if !path.exists() {
            return Err(RosCheckError::ResultNotFound { id: id.to_string() });
        }
        Ok(fs::read_to_string(path)?)
    }

    fn load_bundle(path: &Path, id: &str) -> Result<ResultBundle> {
        if !path.exists() {
            return Err(RosCheckError::ResultNotFound { id: id.to_string() });
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::build_bundle;
    use crate::schema::CheckReport;
    use tempfile::TempDir;

    #[test]
    fn test_check_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = ArtifactStore::new(dir.path()).unwrap();
        let id = ArtifactStore::new_result_id();

        let mut check = CheckReport::default();
        check.errors.push("Syntax error: x".to_string());
        let bundle = build_bundle(&check, None);

        store.save_check(&id, &bundle, "text rendering").unwrap();
        let loaded = store.load_check(&id).unwrap();
        assert_eq!(loaded.check_report, check);
        assert!(loaded.simulation_report.is_none());
        assert_eq!(store.load_text(&id, false).unwrap(), "text rendering");
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = ArtifactStore::new(dir.path()).unwrap();

        let err = store.load_check("nope").unwrap_err();
        assert!(matches!(err, RosCheckError::ResultNotFound { .. }));

        let err = store.load_simulation("nope").unwrap_err();
        assert!(matches!(err, RosCheckError::ResultNotFound { .. }));
    }

    #[test]
    fn test_result_ids_are_unique() {
        assert_ne!(ArtifactStore::new_result_id(), ArtifactStore::new_result_id());
    }

    #[test]
    fn test_simulation_artifacts_are_separate_files() {
        let dir = TempDir::new().unwrap();
        let store = ArtifactStore::new(dir.path()).unwrap();
        let id = "fixed-id";

        let bundle = build_bundle(&CheckReport::default(), None);
        store.save_check(id, &bundle, "check text").unwrap();
        store.save_simulation(id, &bundle, "sim text").unwrap();

        assert_eq!(store.load_text(id, false).unwrap(), "check text");
        assert_eq!(store.load_text(id, true).unwrap(), "sim text");
    }
}
