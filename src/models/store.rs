//! JSON files for progress and the logged-in session.

use std::fs;
use std::path::Path;

use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::progress::Progress;
use crate::error::{Error, Result};

const PROGRESS_FILE: &str = "progress.json";
const SESSION_FILE: &str = "session.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub user: Option<User>,
}

pub fn load_progress(dir: &Path) -> Result<Progress> {
    load_or_default(&dir.join(PROGRESS_FILE))
}

pub fn save_progress(dir: &Path, progress: &Progress) -> Result<()> {
    save_json(&dir.join(PROGRESS_FILE), progress, "progress")
}

pub fn load_session(dir: &Path) -> Result<Session> {
    load_or_default(&dir.join(SESSION_FILE))
}

pub fn save_session(dir: &Path, session: &Session) -> Result<()> {
    save_json(&dir.join(SESSION_FILE), session, "session")
}

pub fn clear_session(dir: &Path) -> Result<()> {
    let path = dir.join(SESSION_FILE);
    match fs::remove_file(&path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::io(path, e)),
    }
}

pub fn require_user(dir: &Path) -> Result<User> {
    load_session(dir)?.user.ok_or(Error::NotLoggedIn)
}

fn load_or_default<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        debug!("{} not found, starting fresh", path.display());
        return Ok(T::default());
    }

    let contents = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    serde_json::from_str(&contents).map_err(|e| Error::parse(path, e))
}

fn save_json<T: Serialize>(path: &Path, value: &T, what: &'static str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let contents =
        serde_json::to_string_pretty(value).map_err(|source| Error::Serialize { what, source })?;
    fs::write(path, contents).map_err(|e| Error::io(path, e))?;
    debug!("wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn user() -> User {
        User {
            id: 7,
            name: "Jamie".into(),
            email: "jamie@example.com".into(),
        }
    }

    #[test]
    fn test_progress_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        let mut progress = Progress::default();
        progress.select(today, "13").unwrap();
        progress.complete_selected(today).unwrap();
        save_progress(dir.path(), &progress).unwrap();

        let loaded = load_progress(dir.path()).unwrap();
        assert_eq!(loaded, progress);
        assert_eq!(loaded.total_points(), 20);
    }

    #[test]
    fn test_missing_progress_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_progress(dir.path()).unwrap(), Progress::default());
    }

    #[test]
    fn test_corrupt_progress_is_not_reset() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(PROGRESS_FILE), "[]").unwrap();
        assert!(matches!(load_progress(dir.path()), Err(Error::Parse { .. })));
    }

    #[test]
    fn test_session_lifecycle() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(require_user(dir.path()), Err(Error::NotLoggedIn)));

        let session = Session { user: Some(user()) };
        save_session(dir.path(), &session).unwrap();
        assert_eq!(require_user(dir.path()).unwrap(), user());

        clear_session(dir.path()).unwrap();
        assert!(matches!(require_user(dir.path()), Err(Error::NotLoggedIn)));
        // clearing twice is fine
        clear_session(dir.path()).unwrap();
    }
}
