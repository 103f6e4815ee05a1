//! User record.

use serde::{Deserialize, Serialize};

use crate::domain::access::Role;
use crate::domain::foundation::{Email, UserId};

/// A stored user. At most one record exists per email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: Option<String>,
    pub email: Email,
    pub role: Role,
}

impl User {
    /// Creates a guest user on first contact.
    pub fn new(name: Option<String>, email: Email) -> Self {
        Self {
            id: UserId::new(),
            name: name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()),
            email,
            role: Role::Guest,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Grants the admin role. Promoting an admin is a no-op.
    pub fn promote(&mut self) {
        self.role = Role::Admin;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_is_guest() {
        let user = User::new(Some("Ann".into()), Email::new("a@x.com").unwrap());
        assert_eq!(user.role, Role::Guest);
        assert!(!user.is_admin());
        assert_eq!(user.name.as_deref(), Some("Ann"));
    }

    #[test]
    fn blank_name_is_dropped() {
        let user = User::new(Some("   ".into()), Email::new("a@x.com").unwrap());
        assert!(user.name.is_none());
    }

    #[test]
    fn promote_grants_admin() {
        let mut user = User::new(None, Email::new("a@x.com").unwrap());
        user.promote();
        assert!(user.is_admin());
        user.promote();
        assert!(user.is_admin());
    }
}
