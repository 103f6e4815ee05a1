//! User repository port.
//!
//! Maps identity claims to stored user records. The authorization gate
//! only ever calls `find_by_email`; the rest serve the user endpoints.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Email, UserId};
use crate::domain::ordering::User;

/// Repository port for user records.
///
/// Implementations must ensure at most one record per email.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find the record for an identity claim.
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, DomainError>;

    /// Insert the user unless a record with the same email exists.
    ///
    /// Returns `true` if inserted, `false` if the email was already taken.
    /// The check and the insert are a single atomic step.
    async fn insert_if_absent(&self, user: &User) -> Result<bool, DomainError>;

    /// List every user.
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    /// Grant the admin role.
    ///
    /// Returns `false` if no user has this id.
    async fn promote_to_admin(&self, id: &UserId) -> Result<bool, DomainError>;
}
