//! # Account models
//!
//! [`Actor`] is the identity record the backend returns on signup/login and
//! the one the client persists alongside its bearer token. End-users and
//! admins share the same shape; which one a given record is comes from the
//! session it lives in, never from the record itself.
//!
//! Field names follow the backend's JSON (camelCase, Mongo-style `_id`), so
//! the struct can be stored verbatim as the persisted session actor.

use serde::{Deserialize, Serialize};

/// An authenticated identity (end-user or admin).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    /// Backend record id.
    #[serde(rename = "_id", default)]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Actor {
    /// Display name for greetings and checkout prefill.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
