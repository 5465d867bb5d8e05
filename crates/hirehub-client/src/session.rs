//! Credential store.
//!
//! Single source of truth for the signed-in session. The dispatcher reads
//! tokens here, the refresh coordinator replaces the access token, and
//! logout clears everything. Reads never touch the network.

use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};

use tracing::warn;

use hirehub_models::Session;

use crate::error::ClientResult;

enum Persistence {
    None,
    File(PathBuf),
}

/// Thread-safe holder for the current session.
///
/// Injectable rather than ambient: construct one per session and hand it to
/// the client, so tests can run sessions side by side.
pub struct SessionStore {
    inner: RwLock<Session>,
    persistence: Persistence,
}

impl SessionStore {
    /// In-memory store; the session dies with the process.
    pub fn in_memory() -> Self {
        Self {
            inner: RwLock::new(Session::default()),
            persistence: Persistence::None,
        }
    }

    /// File-backed store: a flat JSON document with the same keys browser
    /// storage held. Loads the session at `path` if one exists and rewrites
    /// the file on every mutation.
    pub fn load(path: impl Into<PathBuf>) -> ClientResult<Self> {
        let path = path.into();
        let session = match std::fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Session::default(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            inner: RwLock::new(session),
            persistence: Persistence::File(path),
        })
    }

    /// Replace the whole session (login).
    pub fn set_session(&self, session: Session) {
        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = session;
        self.persist(&guard);
    }

    /// Replace only the access token; refresh token and identity are
    /// untouched. Called by the refresh coordinator.
    pub fn set_access_token(&self, token: impl Into<String>) {
        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        guard.access_token = Some(token.into());
        self.persist(&guard);
    }

    pub fn access_token(&self) -> Option<String> {
        self.read().access_token.clone()
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.read().refresh_token.clone()
    }

    /// Snapshot of the whole session.
    pub fn session(&self) -> Session {
        self.read().clone()
    }

    /// Clear all fields (logout). Clearing an empty store is a no-op.
    pub fn clear(&self) {
        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if guard.is_empty() {
            return;
        }
        *guard = Session::default();
        self.persist(&guard);
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Session> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Best-effort write-back; a full disk must not fail a token rotation.
    fn persist(&self, session: &Session) {
        let Persistence::File(path) = &self.persistence else {
            return;
        };
        let result = serde_json::to_vec_pretty(session)
            .map_err(std::io::Error::other)
            .and_then(|bytes| std::fs::write(path, bytes));
        if let Err(e) = result {
            warn!(path = %path.display(), error = %e, "failed to persist session");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hirehub_models::UserRole;

    fn full_session() -> Session {
        Session {
            access_token: Some("T1".into()),
            refresh_token: Some("R1".into()),
            email: Some("a@b.com".into()),
            role: Some(UserRole::Seeker),
        }
    }

    #[test]
    fn test_set_access_token_leaves_rest_untouched() {
        let store = SessionStore::in_memory();
        store.set_session(full_session());

        store.set_access_token("T2");

        let session = store.session();
        assert_eq!(session.access_token.as_deref(), Some("T2"));
        assert_eq!(session.refresh_token.as_deref(), Some("R1"));
        assert_eq!(session.email.as_deref(), Some("a@b.com"));
        assert_eq!(session.role, Some(UserRole::Seeker));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = SessionStore::in_memory();
        store.set_session(full_session());

        store.clear();
        assert!(store.access_token().is_none());

        // Second clear on an empty store must not error.
        store.clear();
        assert!(store.session().is_empty());
    }

    #[test]
    fn test_persisted_session_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = SessionStore::load(&path).unwrap();
        assert!(store.session().is_empty());
        store.set_session(full_session());
        store.set_access_token("T2");

        let reloaded = SessionStore::load(&path).unwrap();
        let session = reloaded.session();
        assert_eq!(session.access_token.as_deref(), Some("T2"));
        assert_eq!(session.refresh_token.as_deref(), Some("R1"));
        assert_eq!(session.role, Some(UserRole::Seeker));
    }

    #[test]
    fn test_persisted_clear_empties_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = SessionStore::load(&path).unwrap();
        store.set_session(full_session());
        store.clear();

        let reloaded = SessionStore::load(&path).unwrap();
        assert!(reloaded.session().is_empty());
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, b"not json").unwrap();

        assert!(SessionStore::load(&path).is_err());
    }
}
