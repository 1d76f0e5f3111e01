//! Explicit session object.
//!
//! Components that need authentication are handed a `Session` instead of
//! reading a global. Persistence goes through [`SessionStorage`], so the
//! backing store can be swapped without touching callers.

use globepay_types::{AuthSession, SessionStorage, StorageError, User};

const TOKEN_KEY: &str = "token";
const REFRESH_TOKEN_KEY: &str = "refresh_token";
const USER_KEY: &str = "user";

pub struct Session<S: SessionStorage> {
    storage: S,
}

impl<S: SessionStorage> Session<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Persists a freshly issued session, replacing any previous one.
    pub fn store(&self, session: &AuthSession) -> Result<(), StorageError> {
        let user = serde_json::to_string(&session.user)
            .map_err(|e| StorageError::Corrupt(e.to_string()))?;
        self.storage.set(TOKEN_KEY, &session.token)?;
        self.storage.set(USER_KEY, &user)?;
        match &session.refresh_token {
            Some(refresh) => self.storage.set(REFRESH_TOKEN_KEY, refresh)?,
            None => self.storage.remove(REFRESH_TOKEN_KEY)?,
        }
        tracing::debug!(user = %session.user.email, "session stored");
        Ok(())
    }

    /// Loads the stored session. A missing token or user means logged out;
    /// an unreadable user record is treated the same way.
    pub fn load(&self) -> Result<Option<AuthSession>, StorageError> {
        let Some(token) = self.storage.get(TOKEN_KEY)? else {
            return Ok(None);
        };
        let Some(raw_user) = self.storage.get(USER_KEY)? else {
            return Ok(None);
        };
        let user: User = match serde_json::from_str(&raw_user) {
            Ok(user) => user,
            Err(err) => {
                tracing::warn!(error = %err, "stored user is unreadable, treating as logged out");
                return Ok(None);
            }
        };
        Ok(Some(AuthSession {
            token,
            refresh_token: self.storage.get(REFRESH_TOKEN_KEY)?,
            user,
        }))
    }

    pub fn token(&self) -> Result<Option<String>, StorageError> {
        self.storage.get(TOKEN_KEY)
    }

    pub fn is_authenticated(&self) -> bool {
        match self.load() {
            Ok(session) => session.is_some(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to read session");
                false
            }
        }
    }

    /// Logs out locally.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove(TOKEN_KEY)?;
        self.storage.remove(REFRESH_TOKEN_KEY)?;
        self.storage.remove(USER_KEY)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn user() -> User {
        serde_json::from_str(
            r#"{"id":"u1","email":"ada@example.com","first_name":"Ada","last_name":"Obi"}"#,
        )
        .unwrap()
    }

    fn auth(token: &str, refresh: Option<&str>) -> AuthSession {
        AuthSession {
            token: token.into(),
            refresh_token: refresh.map(String::from),
            user: user(),
        }
    }

    #[test]
    fn test_store_and_load() {
        let session = Session::new(MemoryStorage::new());
        assert!(!session.is_authenticated());

        session.store(&auth("tok", Some("ref"))).unwrap();
        let loaded = session.load().unwrap().unwrap();
        assert_eq!(loaded.token, "tok");
        assert_eq!(loaded.refresh_token.as_deref(), Some("ref"));
        assert_eq!(loaded.user.email, "ada@example.com");
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_store_without_refresh_drops_old_refresh() {
        let session = Session::new(MemoryStorage::new());
        session.store(&auth("a", Some("old"))).unwrap();
        session.store(&auth("b", None)).unwrap();
        let loaded = session.load().unwrap().unwrap();
        assert_eq!(loaded.token, "b");
        assert!(loaded.refresh_token.is_none());
    }

    #[test]
    fn test_clear_logs_out() {
        let session = Session::new(MemoryStorage::new());
        session.store(&auth("tok", None)).unwrap();
        session.clear().unwrap();
        assert!(session.load().unwrap().is_none());
        assert!(session.token().unwrap().is_none());
    }

    #[test]
    fn test_corrupt_user_is_logged_out() {
        let storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "tok").unwrap();
        storage.set(USER_KEY, "{not json").unwrap();
        let session = Session::new(storage);
        assert!(session.load().unwrap().is_none());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_token_without_user_is_logged_out() {
        let storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "tok").unwrap();
        let session = Session::new(storage);
        assert!(session.load().unwrap().is_none());
    }

    #[test]
    fn test_logout_and_login_survive_corrupt_session_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, r#"{"token": "tok", "user": "#).unwrap();
        let session = Session::new(crate::storage::FileStorage::new(&path));

        session.clear().unwrap();
        assert!(session.load().unwrap().is_none());

        session.store(&auth("new", Some("ref"))).unwrap();
        assert_eq!(session.load().unwrap().unwrap().token, "new");
    }
}
