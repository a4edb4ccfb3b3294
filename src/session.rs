use crate::models::User;
use tracing::{debug, info, warn};
use yew::UseStateHandle;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

/// Shared through a `ContextProvider` at the app root.
pub type SessionContext = UseStateHandle<Session>;

/// Key-value backing for the session.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`. Every call looks the storage up again; when it is
/// unavailable reads come back empty and writes are dropped.
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }
}

impl SessionStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    warn!(key, "local storage rejected write");
                }
            }
            None => warn!(key, "local storage unavailable, value not persisted"),
        }
    }

    fn remove(&self, key: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.remove_item(key).is_err() {
                    warn!(key, "local storage rejected removal");
                }
            }
            None => warn!(key, "local storage unavailable, value not removed"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    token: Option<String>,
    user: Option<User>,
}

impl Session {
    /// Reads whatever a previous page load left behind.
    pub fn restore(store: &impl SessionStore) -> Self {
        let token = stored_token(store);
        let user = store
            .get(USER_KEY)
            .and_then(|raw| match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!(error = %e, "ignoring unreadable cached profile");
                    None
                }
            });
        debug!(signed_in = token.is_some(), "session restored");
        Session { token, user }
    }

    /// Replaces any existing session.
    pub fn sign_in(store: &impl SessionStore, token: String, user: User) -> Self {
        store.set(TOKEN_KEY, &token);
        persist_user(store, &user);
        info!(user_id = %user.id, "signed in");
        Session {
            token: Some(token),
            user: Some(user),
        }
    }

    pub fn sign_out(store: &impl SessionStore) -> Self {
        store.remove(TOKEN_KEY);
        store.remove(USER_KEY);
        info!("signed out");
        Session::default()
    }

    /// Swaps in a freshly fetched profile, keeping the token.
    pub fn with_user(&self, store: &impl SessionStore, user: User) -> Self {
        persist_user(store, &user);
        Session {
            token: self.token.clone(),
            user: Some(user),
        }
    }

    /// Applies a profile fetched with `sent_with`. Returns `None` when that
    /// token is no longer the signed-in one, leaving storage untouched.
    pub fn refreshed(
        &self,
        store: &impl SessionStore,
        sent_with: &str,
        user: User,
    ) -> Option<Self> {
        if stored_token(store).as_deref() != Some(sent_with) || self.token() != Some(sent_with) {
            debug!("dropping profile fetched for a previous session");
            return None;
        }
        Some(self.with_user(store, user))
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.id.as_str())
    }
}

fn stored_token(store: &impl SessionStore) -> Option<String> {
    store.get(TOKEN_KEY).filter(|t| !t.is_empty())
}

fn persist_user(store: &impl SessionStore, user: &User) {
    match serde_json::to_string(user) {
        Ok(raw) => store.set(USER_KEY, &raw),
        Err(e) => warn!(error = %e, "could not serialize profile"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::{gate, Route};
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore(RefCell<HashMap<String, String>>);

    impl SessionStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
        }

        fn remove(&self, key: &str) {
            self.0.borrow_mut().remove(key);
        }
    }

    fn user(id: &str, balance: f64) -> User {
        User {
            id: id.to_string(),
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            balance,
        }
    }

    #[test]
    fn fresh_store_has_no_session() {
        let store = MemoryStore::default();
        let session = Session::restore(&store);
        assert!(!session.is_authenticated());
        assert_eq!(session.user(), None);
        assert_eq!(gate(Route::Dashboard, session.is_authenticated()), Route::Login);
    }

    #[test]
    fn sign_in_persists_token_and_unlocks_dashboard() {
        let store = MemoryStore::default();
        let session = Session::sign_in(&store, "abc123".to_string(), user("u1", 10.0));

        let stored = store.get(TOKEN_KEY).unwrap();
        assert!(!stored.is_empty());
        assert_eq!(session.token(), Some("abc123"));
        assert_eq!(gate(Route::Dashboard, session.is_authenticated()), Route::Dashboard);

        let restored = Session::restore(&store);
        assert_eq!(restored, session);
        assert_eq!(restored.user_id(), Some("u1"));
    }

    #[test]
    fn sign_in_overwrites_previous_session() {
        let store = MemoryStore::default();
        Session::sign_in(&store, "old".to_string(), user("u1", 1.0));
        Session::sign_in(&store, "new".to_string(), user("u2", 2.0));

        let restored = Session::restore(&store);
        assert_eq!(restored.token(), Some("new"));
        assert_eq!(restored.user_id(), Some("u2"));
    }

    #[test]
    fn sign_out_clears_both_keys_and_locks_dashboard() {
        let store = MemoryStore::default();
        Session::sign_in(&store, "abc123".to_string(), user("u1", 10.0));

        let session = Session::sign_out(&store);
        assert_eq!(store.get(TOKEN_KEY), None);
        assert_eq!(store.get(USER_KEY), None);
        assert!(!session.is_authenticated());
        assert_eq!(gate(Route::Dashboard, session.is_authenticated()), Route::Login);
        assert_eq!(Session::restore(&store), Session::default());
    }

    #[test]
    fn with_user_refreshes_cached_profile() {
        let store = MemoryStore::default();
        let session = Session::sign_in(&store, "abc123".to_string(), user("u1", 10.0));
        let updated = session.with_user(&store, user("u1", 60.0));

        assert_eq!(updated.token(), Some("abc123"));
        assert_eq!(updated.user().map(|u| u.balance), Some(60.0));
        assert_eq!(Session::restore(&store).user().map(|u| u.balance), Some(60.0));
    }

    #[test]
    fn late_profile_after_logout_is_dropped() {
        let store = MemoryStore::default();
        let session = Session::sign_in(&store, "tok-a".to_string(), user("a", 1.0));
        Session::sign_out(&store);

        assert_eq!(session.refreshed(&store, "tok-a", user("a", 5.0)), None);
        assert_eq!(store.get(USER_KEY), None);
    }

    #[test]
    fn late_profile_after_relogin_keeps_new_user() {
        let store = MemoryStore::default();
        let session_a = Session::sign_in(&store, "tok-a".to_string(), user("a", 1.0));
        Session::sign_out(&store);
        Session::sign_in(&store, "tok-b".to_string(), user("b", 2.0));

        assert_eq!(session_a.refreshed(&store, "tok-a", user("a", 5.0)), None);
        let restored = Session::restore(&store);
        assert_eq!(restored.token(), Some("tok-b"));
        assert_eq!(restored.user_id(), Some("b"));
    }

    #[test]
    fn current_profile_refresh_is_applied() {
        let store = MemoryStore::default();
        let session = Session::sign_in(&store, "tok-a".to_string(), user("a", 1.0));

        let updated = session.refreshed(&store, "tok-a", user("a", 7.5)).unwrap();
        assert_eq!(updated.user().map(|u| u.balance), Some(7.5));
        assert_eq!(Session::restore(&store).user().map(|u| u.balance), Some(7.5));
    }

    #[test]
    fn empty_token_counts_as_signed_out() {
        let store = MemoryStore::default();
        store.set(TOKEN_KEY, "");
        assert!(!Session::restore(&store).is_authenticated());
    }

    #[test]
    fn corrupt_cached_profile_is_ignored() {
        let store = MemoryStore::default();
        store.set(TOKEN_KEY, "abc123");
        store.set(USER_KEY, "{not json");
        let session = Session::restore(&store);
        assert!(session.is_authenticated());
        assert_eq!(session.user(), None);
    }
}
