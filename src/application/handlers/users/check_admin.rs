//! CheckAdminHandler - Query handler for the caller's admin status.

use std::sync::Arc;

use crate::domain::foundation::{AuthenticatedUser, Email};
use crate::domain::ordering::OrderingError;
use crate::ports::UserRepository;

/// Query whether `email` is an admin, asked by `caller`.
#[derive(Debug, Clone)]
pub struct CheckAdminQuery {
    pub caller: AuthenticatedUser,
    pub email: Email,
}

/// Handler answering admin-status checks.
///
/// Callers may only ask about themselves; asking about anyone else answers
/// `false` without a store read.
pub struct CheckAdminHandler {
    users: Arc<dyn UserRepository>,
}

impl CheckAdminHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, query: CheckAdminQuery) -> Result<bool, OrderingError> {
        if !query.caller.is(&query.email) {
            tracing::debug!(caller = %query.caller.email, "Admin check for another identity");
            return Ok(false);
        }

        let user = self.users.find_by_email(&query.email).await?;
        Ok(user.map(|u| u.is_admin()).unwrap_or(false))
    }
}
