//! Client-side session record and its storage
//!
//! A [`Session`] is created on login, mirrored into session storage under
//! [`SESSION_KEY`] as camelCase JSON, and removed on logout or as soon as a
//! check finds it expired.

use crate::error::{Error, Result};
use crate::token::{decode_claims, AccessClaims, AuthTokens, IdClaims};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Session storage key for the serialized session
pub const SESSION_KEY: &str = "userData";

/// Name shown when the identity provider returned no `name` claim
pub const FALLBACK_DISPLAY_NAME: &str = "User";

/// Authenticated session held by the client
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub id_token: String,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Unix timestamp (seconds) after which the session is no longer valid
    #[serde(default)]
    pub expiry: Option<i64>,
}

impl Session {
    /// Assemble a session from the tokens of a successful login
    pub fn from_tokens(tokens: AuthTokens) -> Result<Self> {
        let access: AccessClaims = decode_claims(&tokens.access_token)?;
        let id: IdClaims = decode_claims(&tokens.id_token)?;

        let user_id = access
            .username
            .ok_or(Error::MissingClaim { claim: "username" })?;
        let expiry = access.exp.ok_or(Error::MissingClaim { claim: "exp" })?;

        Ok(Self {
            access_token: tokens.access_token,
            id_token: tokens.id_token,
            refresh_token: tokens.refresh_token,
            user_id,
            name: id.name,
            expiry: Some(expiry),
        })
    }

    /// Access token and user id are both present
    pub fn is_logged_in(&self) -> bool {
        !self.access_token.is_empty() && !self.user_id.is_empty()
    }

    /// Logged in and not yet expired at `now` (seconds)
    pub fn is_valid(&self, now: i64) -> bool {
        self.is_logged_in() && self.expiry.is_some_and(|expiry| expiry > now)
    }

    /// Seconds left before expiry, if the session expires in the future
    pub fn remaining_secs(&self, now: i64) -> Option<i64> {
        self.expiry
            .map(|expiry| expiry.saturating_sub(now))
            .filter(|remaining| *remaining > 0)
    }

    /// Name for greetings
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(FALLBACK_DISPLAY_NAME)
    }
}

/// String key/value storage the session is persisted into
pub trait SessionStorage {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: SessionStorage + ?Sized> SessionStorage for Rc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// In-memory storage, used off the browser and in tests
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Reads and writes the session entry of a [`SessionStorage`]
#[derive(Debug, Clone)]
pub struct SessionStore<S> {
    storage: S,
    key: &'static str,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Store keyed by [`SESSION_KEY`]
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            key: SESSION_KEY,
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Current session, or `None` when absent or unreadable
    pub fn read(&self) -> Option<Session> {
        let raw = match self.storage.get(self.key) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!("Failed to read session: {e}");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!("Discarding unparsable session entry: {e}");
                None
            }
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.read().is_some_and(|session| session.is_logged_in())
    }

    pub fn is_valid(&self, now: i64) -> bool {
        self.read().is_some_and(|session| session.is_valid(now))
    }

    pub fn save(&self, session: &Session) -> Result<()> {
        let serialized = serde_json::to_string(session)?;
        self.storage.set(self.key, &serialized)
    }

    pub fn clear(&self) -> Result<()> {
        self.storage.remove(self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};

    fn jwt(payload: &str) -> String {
        format!("h.{}.s", URL_SAFE_NO_PAD.encode(payload))
    }

    fn session(expiry: Option<i64>) -> Session {
        Session {
            access_token: "access".to_string(),
            id_token: "id".to_string(),
            refresh_token: "refresh".to_string(),
            user_id: "alice".to_string(),
            name: Some("Alice".to_string()),
            expiry,
        }
    }

    #[test]
    fn test_from_tokens_reads_claims() {
        let tokens = AuthTokens {
            access_token: jwt(r#"{"username":"alice","exp":2000}"#),
            id_token: jwt(r#"{"name":"Alice Smith","email":"a@b.co"}"#),
            refresh_token: "opaque-refresh".to_string(),
        };
        let session = Session::from_tokens(tokens.clone()).unwrap();
        assert_eq!(session.user_id, "alice");
        assert_eq!(session.expiry, Some(2000));
        assert_eq!(session.name.as_deref(), Some("Alice Smith"));
        assert_eq!(session.access_token, tokens.access_token);
        assert_eq!(session.id_token, tokens.id_token);
        assert_eq!(session.refresh_token, "opaque-refresh");
    }

    #[test]
    fn test_from_tokens_requires_username_and_exp() {
        let tokens = AuthTokens {
            access_token: jwt(r#"{"exp":2000}"#),
            id_token: jwt("{}"),
            refresh_token: String::new(),
        };
        assert!(matches!(
            Session::from_tokens(tokens),
            Err(Error::MissingClaim { claim: "username" })
        ));

        let tokens = AuthTokens {
            access_token: jwt(r#"{"username":"alice"}"#),
            id_token: jwt("{}"),
            refresh_token: String::new(),
        };
        assert!(matches!(
            Session::from_tokens(tokens),
            Err(Error::MissingClaim { claim: "exp" })
        ));
    }

    #[test]
    fn test_validity_rules() {
        assert!(session(Some(101)).is_valid(100));
        assert!(!session(Some(100)).is_valid(100));
        assert!(!session(Some(99)).is_valid(100));
        assert!(!session(None).is_valid(100));

        let mut anonymous = session(Some(500));
        anonymous.user_id.clear();
        assert!(!anonymous.is_logged_in());
        assert!(!anonymous.is_valid(100));
    }

    #[test]
    fn test_display_name_falls_back() {
        let mut s = session(None);
        assert_eq!(s.display_name(), "Alice");
        s.name = None;
        assert_eq!(s.display_name(), "User");
        s.name = Some(String::new());
        assert_eq!(s.display_name(), "User");
    }

    #[test]
    fn test_store_round_trip_uses_camel_case_key() {
        let store = SessionStore::new(MemoryStorage::new());
        store.save(&session(Some(10))).unwrap();

        let raw = store.storage().get(SESSION_KEY).unwrap().unwrap();
        assert!(raw.contains("\"accessToken\":\"access\""));
        assert!(raw.contains("\"userId\":\"alice\""));
        assert_eq!(store.read(), Some(session(Some(10))));

        store.clear().unwrap();
        assert_eq!(store.read(), None);
        assert!(store.storage().is_empty());
    }

    #[test]
    fn test_store_reads_partial_and_garbage_entries() {
        let store = SessionStore::new(MemoryStorage::new());
        store
            .storage()
            .set(SESSION_KEY, r#"{"accessToken":"t","userId":"u"}"#)
            .unwrap();
        assert!(store.is_logged_in());
        assert!(!store.is_valid(0));

        store.storage().set(SESSION_KEY, "{not json").unwrap();
        assert_eq!(store.read(), None);
        assert!(!store.is_logged_in());
    }

    #[test]
    fn test_remaining_secs() {
        assert_eq!(session(Some(160)).remaining_secs(100), Some(60));
        assert_eq!(session(Some(100)).remaining_secs(100), None);
        assert_eq!(session(None).remaining_secs(100), None);
    }

    #[test]
    fn test_remaining_secs_with_extreme_stored_expiry() {
        assert_eq!(session(Some(i64::MIN)).remaining_secs(1_700_000_000), None);
        assert_eq!(session(Some(i64::MAX)).remaining_secs(-1), Some(i64::MAX));
        assert!(!session(Some(i64::MIN)).is_valid(1_700_000_000));
    }
}
