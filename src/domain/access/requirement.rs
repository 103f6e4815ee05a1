//! Access requirements evaluated by the authorization gate.
//!
//! A requirement is checked after the credential has been verified. The
//! gate supplies the stored role only for requirements that ask for one,
//! so `Authenticated` and `Subject` never touch the identity store.

use super::Role;
use crate::domain::foundation::{AuthError, AuthenticatedUser, Email};

/// What an operation demands of an authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessRequirement {
    /// Any valid credential.
    Authenticated,

    /// The stored record for the credential's identity must have the admin role.
    Admin,

    /// The credential's identity must equal the requested subject.
    Subject(Email),
}

impl AccessRequirement {
    /// Returns true if evaluating this requirement needs the stored role.
    pub fn needs_role(&self) -> bool {
        matches!(self, AccessRequirement::Admin)
    }

    /// Decides whether `user` satisfies this requirement.
    ///
    /// `stored_role` is `None` when no record exists for the identity; an
    /// absent record never satisfies `Admin`.
    pub fn evaluate(
        &self,
        user: &AuthenticatedUser,
        stored_role: Option<Role>,
    ) -> Result<(), AuthError> {
        match self {
            AccessRequirement::Authenticated => Ok(()),
            AccessRequirement::Admin => match stored_role {
                Some(role) if role.is_admin() => Ok(()),
                _ => Err(AuthError::InsufficientRole),
            },
            AccessRequirement::Subject(subject) => {
                if user.is(subject) {
                    Ok(())
                } else {
                    Err(AuthError::IdentityMismatch)
                }
            }
        }
    }
}
