//! Persisted auth session: the bearer token and the identity it belongs to,
//! stored as session.json in the app data directory. This is the only piece
//! of server state the client keeps across runs.

use crate::types::User;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl Session {
    pub fn load(data_dir: &Path) -> Option<Self> {
        let path = data_dir.join("session.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(session) => {
                    debug!(path = %path.display(), "Session loaded");
                    Some(session)
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse session file, discarding");
                    let _ = std::fs::remove_file(&path);
                    None
                }
            },
            Err(_) => {
                debug!("No session file found");
                None
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("session.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save session");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize session"),
        }
    }

    pub fn clear(data_dir: &Path) {
        let path = data_dir.join("session.json");
        if path.exists() {
            if let Err(e) = std::fs::remove_file(&path) {
                warn!(error = %e, "Failed to remove session file");
            } else {
                debug!("Session cleared");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("bms-session-test-{name}"));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn round_trips_through_disk() {
        let dir = scratch_dir("roundtrip");
        let session = Session {
            token: "abc.def.ghi".into(),
            user: User {
                id: 7,
                email: "jo@example.com".into(),
                roles: vec!["ROLE_CUSTOMER".into()],
            },
        };
        session.save(&dir);
        let loaded = Session::load(&dir).unwrap();
        assert_eq!(loaded.token, session.token);
        assert_eq!(loaded.user.email, "jo@example.com");
        assert!(!loaded.user.is_admin());

        Session::clear(&dir);
        assert!(Session::load(&dir).is_none());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn corrupt_file_is_discarded() {
        let dir = scratch_dir("corrupt");
        std::fs::write(dir.join("session.json"), "{not json").unwrap();
        assert!(Session::load(&dir).is_none());
        assert!(!dir.join("session.json").exists());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
