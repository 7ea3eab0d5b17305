pub mod de;

use crate::error::{LegisError, Result};
use crate::types::records::RecordBundle;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

pub fn load_bundle(path: &Path) -> Result<RecordBundle> {
    if !path.exists() {
        return Err(LegisError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let bundle = parse_bundle(&content)
        .map_err(|e| LegisError::InvalidRecords(path.display().to_string(), e.to_string()))?;
    debug!(
        path = %path.display(),
        events = bundle.events.len(),
        bills = bundle.bills.len(),
        "bundle loaded"
    );
    Ok(bundle)
}

pub fn parse_bundle(content: &str) -> std::result::Result<RecordBundle, serde_json::Error> {
    serde_json::from_str(content)
}

/// Every `*.json` file under `root`, sorted by path.
pub fn discover_bundles(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(LegisError::PathNotFound(root.display().to_string()));
    }
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    Ok(files)
}
