//! Upload staging
//!
//! A check target is either a plain source file, used in place, or a zip
//! archive extracted into a per-request temporary directory. Discovery of
//! the dialect file inside an archive walks directory entries in
//! lexicographic order, so the chosen file is deterministic across
//! platforms.

use std::fs;
use std::fs::File;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::debug;
use zip::ZipArchive;

use crate::dialect::Dialect;
use crate::error::{Result, RosCheckError};

/// A staged check target
///
/// Holds the backing temp dir (if any) so extracted archives live exactly as
/// long as the request.
#[derive(Debug)]
pub struct StagedInput {
    pub source_path: PathBuf,
    _temp_dir: Option<TempDir>,
}

/// Stage an uploaded file for checking
///
/// Missing paths and archives with no supported-dialect file both surface as
/// a missing-upload condition.
pub fn stage_input(path: &Path) -> Result<StagedInput> {
    if !path.exists() {
        return Err(RosCheckError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let is_zip = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"));

    if !is_zip {
        return Ok(StagedInput {
            source_path: path.to_path_buf(),
            _temp_dir: None,
        });
    }

    let temp_dir = TempDir::new()?;
    extract_archive(path, temp_dir.path())?;

    let source_path =
        find_dialect_file(temp_dir.path())?.ok_or_else(|| RosCheckError::FileNotFound {
            path: format!("no supported source file in {}", path.display()),
        })?;

    debug!(archive = %path.display(), file = %source_path.display(), "staged archive upload");

    Ok(StagedInput {
        source_path,
        _temp_dir: Some(temp_dir),
    })
}

fn extract_archive(archive_path: &Path, dest: &Path) -> Result<()> {
    let file = File::open(archive_path)?;
    let mut archive = ZipArchive::new(file).map_err(|e| RosCheckError::Archive {
        message: format!("{}: {}", archive_path.display(), e),
    })?;
    archive.extract(dest).map_err(|e| RosCheckError::Archive {
        message: format!("{}: {}", archive_path.display(), e),
    })?;
    Ok(())
}

/// First supported-dialect file under `dir`, lexicographic traversal order
pub fn find_dialect_file(dir: &Path) -> Result<Option<PathBuf>> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .collect();
    entries.sort();

    // Files at this level first, then subdirectories
    for path in entries.iter().filter(|p| p.is_file()) {
        if Dialect::from_path(path).is_ok() {
            return Ok(Some(path.clone()));
        }
    }
    for path in entries.iter().filter(|p| p.is_dir()) {
        if let Some(found) = find_dialect_file(path)? {
            return Ok(Some(found));
        }
    }

    Ok(None)
}
