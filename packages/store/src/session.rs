//! # Session model and persistence
//!
//! The heart of client-side authentication state. A [`Session`] is a tagged
//! value — either [`Session::Anonymous`] or [`Session::Authenticated`] with
//! an [`Actor`] *and* a bearer token. The invalid half-states (actor without
//! token, token without actor) are unrepresentable in memory and are mapped
//! to `Anonymous` whenever they show up in persisted storage.
//!
//! ## [`KeyValueStorage`] trait
//!
//! A synchronous string key/value interface over whatever the platform
//! offers. Implementations live in sibling modules:
//!
//! | Impl | Platform | Module |
//! |------|----------|--------|
//! | [`crate::MemoryStorage`] | tests, native fallback | [`crate::memory`](crate::MemoryStorage) |
//! | `LocalStorage` | web (`localStorage`) | `crate::local` (wasm + `web` feature) |
//!
//! ## [`SessionStore`]
//!
//! Binds a storage backend to a [`SessionKeys`] pair. Two independent stores
//! exist at runtime — one on [`SessionKeys::USER`], one on
//! [`SessionKeys::ADMIN`] — so an end-user session and an admin session can
//! coexist without touching each other's keys.

use crate::models::Actor;

/// Authentication state for one actor kind.
#[derive(Clone, Debug, PartialEq)]
pub enum Session {
    Anonymous,
    Authenticated { actor: Actor, token: String },
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    /// The bearer token, if any.
    pub fn token(&self) -> Option<&str> {
        match self {
            Session::Authenticated { token, .. } => Some(token),
            Session::Anonymous => None,
        }
    }

    /// The signed-in actor, if any.
    pub fn actor(&self) -> Option<&Actor> {
        match self {
            Session::Authenticated { actor, .. } => Some(actor),
            Session::Anonymous => None,
        }
    }
}

/// Storage key pair for one actor kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionKeys {
    pub actor: &'static str,
    pub token: &'static str,
}

impl SessionKeys {
    /// End-user session keys.
    pub const USER: SessionKeys = SessionKeys {
        actor: "user",
        token: "token",
    };

    /// Admin session keys.
    pub const ADMIN: SessionKeys = SessionKeys {
        actor: "admin",
        token: "adminToken",
    };
}

/// Synchronous string key/value storage.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// A session persisted under a fixed key pair in a storage backend.
pub struct SessionStore<S: KeyValueStorage> {
    storage: S,
    keys: SessionKeys,
}

impl<S: KeyValueStorage> SessionStore<S> {
    pub fn new(storage: S, keys: SessionKeys) -> Self {
        Self { storage, keys }
    }

    /// Read the current session from storage.
    ///
    /// Both fields must be present and the actor record must parse; anything
    /// less is an absent session. A corrupt actor record never surfaces as an
    /// error — the caller just sees `Anonymous`.
    pub fn current(&self) -> Session {
        let Some(token) = self.storage.get(self.keys.token) else {
            return Session::Anonymous;
        };
        let Some(raw_actor) = self.storage.get(self.keys.actor) else {
            return Session::Anonymous;
        };
        match serde_json::from_str::<Actor>(&raw_actor) {
            Ok(actor) => Session::Authenticated { actor, token },
            Err(_) => Session::Anonymous,
        }
    }

    /// Overwrite the session with the given pair and persist both fields.
    pub fn login(&self, actor: &Actor, token: &str) -> Session {
        if let Ok(raw) = serde_json::to_string(actor) {
            self.storage.set(self.keys.actor, &raw);
        }
        self.storage.set(self.keys.token, token);
        Session::Authenticated {
            actor: actor.clone(),
            token: token.to_string(),
        }
    }

    /// Clear both persisted fields.
    pub fn logout(&self) {
        self.storage.remove(self.keys.actor);
        self.storage.remove(self.keys.token);
    }
}
