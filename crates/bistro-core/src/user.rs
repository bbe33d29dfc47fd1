//! # User Types
//!
//! Users are created on first sign-in and never auto-deleted. The role
//! field gates every admin-only operation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authorization tier attached to a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular customer
    Subscriber,
    /// Administrator (reporting, role elevation)
    Admin,
}

impl Default for Role {
    fn default() -> Self {
        Role::Subscriber
    }
}

/// A registered user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    #[serde(rename = "_id")]
    pub id: String,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Email (unique across the collection)
    pub email: String,

    /// Role; regular users are subscribers
    #[serde(default)]
    pub role: Role,
}

impl User {
    /// Create a new subscriber with a generated identifier
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            email: email.into(),
            role: Role::Subscriber,
        }
    }

    /// Check whether this user holds the admin role
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
