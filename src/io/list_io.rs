use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Error type for list store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not determine a data directory for this platform")]
    NoDataDir,
    #[error("could not create store directory {path}: {source}")]
    CreateDirError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not delete {path}: {source}")]
    DeleteError {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Resolve the store directory: an explicit override, or the platform data
/// dir under `lists/`. Created on demand.
pub fn resolve_store_dir(override_dir: Option<&Path>) -> Result<PathBuf, StoreError> {
    let dir = match override_dir {
        Some(d) => d.to_path_buf(),
        None => dirs::data_dir().ok_or(StoreError::NoDataDir)?.join("lists"),
    };
    fs::create_dir_all(&dir).map_err(|e| StoreError::CreateDirError {
        path: dir.clone(),
        source: e,
    })?;
    Ok(dir)
}

/// Path of the file backing a named list: `<name>Safe.txt` in the store dir.
pub fn list_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}Safe.txt"))
}

/// Load a named list, one item per line, preserving order.
///
/// A missing or unreadable file is the empty-list case, not an error: a list
/// that has never had an item added has no file.
pub fn load_list(dir: &Path, name: &str) -> Vec<String> {
    let path = list_path(dir, name);
    match fs::read_to_string(&path) {
        Ok(content) => content.lines().map(|l| l.to_string()).collect(),
        Err(e) => {
            log::debug!("load {}: {} (treating as empty)", path.display(), e);
            Vec::new()
        }
    }
}

/// Rewrite a named list's file from scratch, one item per line.
///
/// Full rewrite, not append: after this returns Ok, the file's contents
/// exactly equal `items`.
pub fn save_list(dir: &Path, name: &str, items: &[String]) -> Result<(), StoreError> {
    let path = list_path(dir, name);
    let mut content = String::new();
    for item in items {
        content.push_str(item);
        content.push('\n');
    }
    fs::write(&path, content).map_err(|e| StoreError::WriteError { path, source: e })
}

/// Delete a named list's file. A file that does not exist is not an error.
pub fn delete_list(dir: &Path, name: &str) -> Result<(), StoreError> {
    let path = list_path(dir, name);
    match fs::remove_file(&path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(StoreError::DeleteError { path, source: e }),
    }
}

/// Enumerate the names of all lists stored in the directory, sorted.
pub fn list_names(dir: &Path) -> Vec<String> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::debug!("read store dir {}: {}", dir.display(), e);
            return Vec::new();
        }
    };
    let mut names: Vec<String> = entries
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .filter_map(|e| {
            e.file_name()
                .to_str()
                .and_then(|n| n.strip_suffix("Safe.txt"))
                .map(|n| n.to_string())
        })
        .collect();
    names.sort();
    names
}
