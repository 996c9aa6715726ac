use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::session::KeyValueStorage;

/// In-memory KeyValueStorage for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Actor;
    use crate::session::{Session, SessionKeys, SessionStore};

    fn actor() -> Actor {
        Actor {
            id: "u1".to_string(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            email: "a@b.com".to_string(),
        }
    }

    #[test]
    fn test_login_persists_both_fields() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone(), SessionKeys::USER);

        store.login(&actor(), "t1");

        assert_eq!(storage.get("token").as_deref(), Some("t1"));
        let raw = storage.get("user").unwrap();
        assert_eq!(serde_json::from_str::<Actor>(&raw).unwrap(), actor());
        assert_eq!(
            store.current(),
            Session::Authenticated {
                actor: actor(),
                token: "t1".to_string()
            }
        );
    }

    #[test]
    fn test_logout_clears_both_fields() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone(), SessionKeys::USER);

        store.login(&actor(), "t1");
        store.logout();

        assert_eq!(storage.get("user"), None);
        assert_eq!(storage.get("token"), None);
        assert_eq!(store.current(), Session::Anonymous);
    }

    #[test]
    fn test_token_without_actor_is_anonymous() {
        let storage = MemoryStorage::new();
        storage.set("token", "t1");

        let store = SessionStore::new(storage, SessionKeys::USER);
        assert_eq!(store.current(), Session::Anonymous);
    }

    #[test]
    fn test_actor_without_token_is_anonymous() {
        let storage = MemoryStorage::new();
        storage.set("user", &serde_json::to_string(&actor()).unwrap());

        let store = SessionStore::new(storage, SessionKeys::USER);
        assert_eq!(store.current(), Session::Anonymous);
    }

    #[test]
    fn test_corrupt_actor_record_is_anonymous() {
        let storage = MemoryStorage::new();
        storage.set("user", "{not json");
        storage.set("token", "t1");

        let store = SessionStore::new(storage, SessionKeys::USER);
        assert_eq!(store.current(), Session::Anonymous);
    }

    #[test]
    fn test_user_and_admin_sessions_are_independent() {
        let storage = MemoryStorage::new();
        let users = SessionStore::new(storage.clone(), SessionKeys::USER);
        let admins = SessionStore::new(storage.clone(), SessionKeys::ADMIN);

        users.login(&actor(), "t1");
        let admin = Actor {
            id: "a1".to_string(),
            first_name: "Root".to_string(),
            last_name: "Admin".to_string(),
            email: "root@example.com".to_string(),
        };
        admins.login(&admin, "t2");

        assert_eq!(storage.get("adminToken").as_deref(), Some("t2"));

        users.logout();
        assert_eq!(users.current(), Session::Anonymous);
        assert_eq!(
            admins.current(),
            Session::Authenticated {
                actor: admin,
                token: "t2".to_string()
            }
        );
    }

    #[test]
    fn test_login_overwrites_previous_session() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage, SessionKeys::USER);

        store.login(&actor(), "t1");
        let other = Actor {
            id: "u2".to_string(),
            first_name: "C".to_string(),
            last_name: "D".to_string(),
            email: "c@d.com".to_string(),
        };
        store.login(&other, "t2");

        assert_eq!(
            store.current(),
            Session::Authenticated {
                actor: other,
                token: "t2".to_string()
            }
        );
    }
}
