//! # User Directory
//!
//! Lookup and registration over the users collection. Registration is
//! first-sign-in: a duplicate email answers success without writing.
//! Role elevation never deletes or inserts, only flips the role field.

use crate::collection::{InsertResult, UpdateResult};
use crate::store::Store;
use bistro_core::{Role, User};
use std::sync::Arc;
use tracing::info;

/// Outcome of a registration attempt
pub enum RegisterOutcome {
    Created(InsertResult),
    AlreadyExists,
}

/// User lookup and registration component
#[derive(Clone)]
pub struct UserDirectory {
    store: Arc<Store>,
}

impl UserDirectory {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Register a user if the email is not already present
    pub async fn register(&self, user: User) -> RegisterOutcome {
        let email = user.email.clone();
        if self.find_by_email(&email).await.is_some() {
            return RegisterOutcome::AlreadyExists;
        }

        let result = self.store.users.insert(user.id.clone(), user).await;
        info!("Registered user: {}", email);
        RegisterOutcome::Created(result)
    }

    /// Look up a user by email (unique)
    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        self.store.users.find_one(|u| u.email == email).await
    }

    /// Check whether the user behind `email` holds the admin role.
    /// An unknown email is simply not an admin.
    pub async fn is_admin(&self, email: &str) -> bool {
        self.find_by_email(email)
            .await
            .map(|u| u.is_admin())
            .unwrap_or(false)
    }

    /// Elevate the user under `id` to admin. A missing id matches
    /// nothing and is reported as zero-effect, not an error.
    pub async fn promote_to_admin(&self, id: &str) -> UpdateResult {
        self.store.users.update(id, |u| u.role = Role::Admin).await
    }
}
