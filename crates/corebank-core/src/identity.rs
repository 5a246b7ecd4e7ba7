//! Identity resolution
//!
//! Maps a validated token subject (the username) to the full user record.
//! Reads straight through to the user store on every call; subjects are
//! not cached, so a deleted user loses access on the next request.

use std::sync::Arc;

use corebank_store::UserStore;
use corebank_types::User;

use crate::error::CoreResult;

/// Resolves token subjects to user records
pub struct IdentityResolver {
    users: Arc<dyn UserStore>,
}

impl IdentityResolver {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Resolve a subject to its user record, `None` when no user carries
    /// that username
    pub async fn resolve(&self, subject: &str) -> CoreResult<Option<User>> {
        Ok(self.users.find_by_username(subject).await?)
    }
}
