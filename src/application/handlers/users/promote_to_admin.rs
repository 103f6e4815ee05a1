//! PromoteToAdminHandler - Command handler for granting the admin role.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::ordering::OrderingError;
use crate::ports::UserRepository;

/// Command to promote a user. The caller must already be an admin.
#[derive(Debug, Clone)]
pub struct PromoteToAdminCommand {
    pub user_id: UserId,
}

pub struct PromoteToAdminHandler {
    users: Arc<dyn UserRepository>,
}

impl PromoteToAdminHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, cmd: PromoteToAdminCommand) -> Result<(), OrderingError> {
        if !self.users.promote_to_admin(&cmd.user_id).await? {
            return Err(OrderingError::not_found("User", cmd.user_id));
        }
        tracing::info!(user_id = %cmd.user_id, "User promoted to admin");
        Ok(())
    }
}
