//! RegisterUserHandler - Command handler for first-contact user creation.

use std::sync::Arc;

use crate::domain::foundation::Email;
use crate::domain::ordering::{OrderingError, User};
use crate::ports::UserRepository;

/// Command to register a user on first sign-in.
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub name: Option<String>,
    pub email: Email,
}

/// Outcome of registration. An existing email is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterUserResult {
    Created(User),
    AlreadyExists,
}

/// Handler for registering users.
pub struct RegisterUserHandler {
    users: Arc<dyn UserRepository>,
}

impl RegisterUserHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(
        &self,
        cmd: RegisterUserCommand,
    ) -> Result<RegisterUserResult, OrderingError> {
        let user = User::new(cmd.name, cmd.email);

        if self.users.insert_if_absent(&user).await? {
            tracing::info!(user_id = %user.id, "User registered");
            Ok(RegisterUserResult::Created(user))
        } else {
            Ok(RegisterUserResult::AlreadyExists)
        }
    }
}
