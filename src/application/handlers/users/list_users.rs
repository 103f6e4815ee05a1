//! ListUsersHandler - Query handler for the admin user list.

use std::sync::Arc;

use crate::domain::ordering::{OrderingError, User};
use crate::ports::UserRepository;

#[derive(Debug, Clone)]
pub struct ListUsersQuery;

pub struct ListUsersHandler {
    users: Arc<dyn UserRepository>,
}

impl ListUsersHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, _query: ListUsersQuery) -> Result<Vec<User>, OrderingError> {
        Ok(self.users.list().await?)
    }
}
