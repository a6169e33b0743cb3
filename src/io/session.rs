use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Persisted session state (written to .session.json on exit)
///
/// Read-and-clear: the record is consumed exactly once, on the next launch,
/// and the file is removed whether or not the contents were usable.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SessionRecord {
    /// Whether a nested list screen was active at exit
    #[serde(default)]
    pub nested_active: bool,
    /// Name of the list that was active
    #[serde(default)]
    pub list_name: Option<String>,
    /// Uncommitted input line text
    #[serde(default)]
    pub pending_input: Option<String>,
}

fn session_path(dir: &Path) -> std::path::PathBuf {
    dir.join(".session.json")
}

/// Write the session record to .session.json in the store directory
pub fn write_session(dir: &Path, record: &SessionRecord) -> Result<(), std::io::Error> {
    let content = serde_json::to_string_pretty(record)?;
    fs::write(session_path(dir), content)
}

/// Read and clear the session record. Returns None if no record exists or
/// it cannot be parsed; the file is removed in every case.
pub fn take_session(dir: &Path) -> Option<SessionRecord> {
    let path = session_path(dir);
    let content = fs::read_to_string(&path).ok();
    if let Err(e) = fs::remove_file(&path)
        && e.kind() != std::io::ErrorKind::NotFound
    {
        log::warn!("clear session {}: {}", path.display(), e);
    }
    serde_json::from_str(&content?).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_and_take_round_trip() {
        let dir = TempDir::new().unwrap();
        let record = SessionRecord {
            nested_active: true,
            list_name: Some("milk".into()),
            pending_input: Some("whole".into()),
        };
        write_session(dir.path(), &record).unwrap();
        assert_eq!(take_session(dir.path()), Some(record));
    }

    #[test]
    fn take_clears_the_record() {
        let dir = TempDir::new().unwrap();
        write_session(dir.path(), &SessionRecord::default()).unwrap();
        assert!(take_session(dir.path()).is_some());
        assert!(take_session(dir.path()).is_none());
        assert!(!dir.path().join(".session.json").exists());
    }

    #[test]
    fn take_missing_record_is_none() {
        let dir = TempDir::new().unwrap();
        assert!(take_session(dir.path()).is_none());
    }

    #[test]
    fn take_malformed_record_is_none_and_cleared() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".session.json"), "not json {{{").unwrap();
        assert!(take_session(dir.path()).is_none());
        assert!(!dir.path().join(".session.json").exists());
    }

    #[test]
    fn serde_defaults_on_minimal_object() {
        let record: SessionRecord = serde_json::from_str("{}").unwrap();
        assert!(!record.nested_active);
        assert!(record.list_name.is_none());
        assert!(record.pending_input.is_none());
    }
}
