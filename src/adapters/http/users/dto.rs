//! DTOs for user endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::access::Role;
use crate::domain::foundation::Email;
use crate::domain::ordering::User;

/// Body of `POST /users`.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    pub email: Email,
}

/// Returned when the email is already registered.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminStatusResponse {
    pub admin: bool,
}

/// A user as listed to admins.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email.into(),
            role: user.role.is_admin().then_some(user.role),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guest_role_is_omitted() {
        let user = User::new(Some("Ann".into()), Email::new("a@x.com").unwrap());
        let json = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert!(json.get("role").is_none());
        assert_eq!(json["email"], "a@x.com");
    }

    #[test]
    fn admin_role_is_listed() {
        let mut user = User::new(None, Email::new("a@x.com").unwrap());
        user.promote();
        let json = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert_eq!(json["role"], "admin");
    }
}
