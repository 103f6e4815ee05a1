//! AuthorizationGate - Credential verification and access control.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::access::AccessRequirement;
use crate::domain::foundation::{AuthError, AuthenticatedUser, DomainError};
use crate::ports::{TokenCodec, UserRepository};

/// Why the gate did not allow a request.
#[derive(Debug, Clone, Error)]
pub enum GateError {
    /// The caller is unauthenticated or not permitted.
    #[error("access denied: {0}")]
    Denied(#[from] AuthError),

    /// The role lookup itself failed. Never treated as allowed.
    #[error("role lookup failed: {0}")]
    Store(DomainError),
}

/// Verifies bearer credentials and evaluates access requirements.
pub struct AuthorizationGate {
    codec: Arc<dyn TokenCodec>,
    users: Arc<dyn UserRepository>,
}

impl AuthorizationGate {
    pub fn new(codec: Arc<dyn TokenCodec>, users: Arc<dyn UserRepository>) -> Self {
        Self { codec, users }
    }

    /// Stage one: extract and verify the bearer credential.
    ///
    /// `authorization` is the raw `Authorization` header value, if any.
    pub fn authenticate(&self, authorization: Option<&str>) -> Result<AuthenticatedUser, GateError> {
        let token = authorization
            .and_then(|h| h.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Self::deny(AuthError::MissingCredential, None))?;

        self.codec
            .verify(token)
            .map_err(|e| Self::deny(e, None))
    }

    /// Stage two: check `requirement` for an authenticated caller.
    pub async fn authorize(
        &self,
        user: &AuthenticatedUser,
        requirement: &AccessRequirement,
    ) -> Result<(), GateError> {
        let stored_role = if requirement.needs_role() {
            let record = self.users.find_by_email(&user.email).await.map_err(|e| {
                tracing::error!(email = %user.email, error = %e, "Role lookup failed");
                GateError::Store(e)
            })?;
            record.map(|u| u.role)
        } else {
            None
        };

        requirement
            .evaluate(user, stored_role)
            .map_err(|e| Self::deny(e, Some(user)))
    }

    /// Runs both stages.
    pub async fn check(
        &self,
        authorization: Option<&str>,
        requirement: &AccessRequirement,
    ) -> Result<AuthenticatedUser, GateError> {
        let user = self.authenticate(authorization)?;
        self.authorize(&user, requirement).await?;
        Ok(user)
    }

    fn deny(reason: AuthError, user: Option<&AuthenticatedUser>) -> GateError {
        match user {
            Some(user) => tracing::warn!(
                email = %user.email,
                reason = reason.reason(),
                "Access denied"
            ),
            None => tracing::debug!(reason = reason.reason(), "Access denied"),
        }
        GateError::Denied(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::JwtTokenCodec;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::foundation::Email;
    use crate::domain::ordering::User;
    use secrecy::SecretString;

    fn email(s: &str) -> Email {
        Email::new(s).unwrap()
    }

    struct Fixture {
        gate: AuthorizationGate,
        codec: Arc<JwtTokenCodec>,
        store: Arc<InMemoryStore>,
    }

    async fn fixture() -> Fixture {
        let codec = Arc::new(JwtTokenCodec::new(
            SecretString::new("gate-test-secret".to_string()),
            3600,
        ));
        let store = Arc::new(InMemoryStore::new());

        let mut admin = User::new(Some("Admin".into()), email("admin@x.com"));
        admin.promote();
        store.seed_user(admin).await;
        store.seed_user(User::new(None, email("a@x.com"))).await;

        Fixture {
            gate: AuthorizationGate::new(codec.clone(), store.clone()),
            codec,
            store,
        }
    }

    fn bearer(codec: &JwtTokenCodec, who: &str) -> String {
        format!("Bearer {}", codec.issue(&email(who)).unwrap().token)
    }

    fn denied(result: Result<AuthenticatedUser, GateError>) -> AuthError {
        match result {
            Err(GateError::Denied(reason)) => reason,
            other => panic!("expected denial, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn missing_header_is_missing_credential() {
        let f = fixture().await;
        let result = f.gate.check(None, &AccessRequirement::Authenticated).await;
        assert_eq!(denied(result), AuthError::MissingCredential);
    }

    #[tokio::test]
    async fn non_bearer_header_is_missing_credential() {
        let f = fixture().await;
        for header in ["Basic abc", "Bearer", "Bearer   ", "token"] {
            let result = f
                .gate
                .check(Some(header), &AccessRequirement::Authenticated)
                .await;
            assert_eq!(denied(result), AuthError::MissingCredential, "{}", header);
        }
    }

    #[tokio::test]
    async fn bad_token_is_invalid() {
        let f = fixture().await;
        let result = f
            .gate
            .check(Some("Bearer nope"), &AccessRequirement::Authenticated)
            .await;
        let reason = denied(result);
        assert!(reason.is_unauthenticated());
        assert_eq!(reason, AuthError::InvalidToken);
    }

    #[tokio::test]
    async fn valid_token_passes_authenticated() {
        let f = fixture().await;
        let header = bearer(&f.codec, "a@x.com");
        let user = f
            .gate
            .check(Some(&header), &AccessRequirement::Authenticated)
            .await
            .unwrap();
        assert_eq!(user.email, email("a@x.com"));
    }

    #[tokio::test]
    async fn non_admin_is_forbidden_from_admin_routes() {
        let f = fixture().await;
        let header = bearer(&f.codec, "a@x.com");
        let result = f.gate.check(Some(&header), &AccessRequirement::Admin).await;
        assert_eq!(denied(result), AuthError::InsufficientRole);
    }

    #[tokio::test]
    async fn unknown_user_is_forbidden_from_admin_routes() {
        let f = fixture().await;
        let header = bearer(&f.codec, "ghost@x.com");
        let result = f.gate.check(Some(&header), &AccessRequirement::Admin).await;
        assert_eq!(denied(result), AuthError::InsufficientRole);
    }

    #[tokio::test]
    async fn admin_is_allowed() {
        let f = fixture().await;
        let header = bearer(&f.codec, "admin@x.com");
        assert!(f
            .gate
            .check(Some(&header), &AccessRequirement::Admin)
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn subject_mismatch_is_forbidden() {
        let f = fixture().await;
        let header = bearer(&f.codec, "a@x.com");
        let requirement = AccessRequirement::Subject(email("b@x.com"));
        let result = f.gate.check(Some(&header), &requirement).await;
        assert_eq!(denied(result), AuthError::IdentityMismatch);
    }

    #[tokio::test]
    async fn subject_check_skips_store() {
        let f = fixture().await;
        f.store.fail_user_reads(true);
        let header = bearer(&f.codec, "a@x.com");
        let requirement = AccessRequirement::Subject(email("a@x.com"));
        assert!(f.gate.check(Some(&header), &requirement).await.is_ok());
    }

    #[tokio::test]
    async fn store_failure_during_role_lookup_is_not_allowed() {
        let f = fixture().await;
        f.store.fail_user_reads(true);
        let header = bearer(&f.codec, "admin@x.com");
        let result = f.gate.check(Some(&header), &AccessRequirement::Admin).await;
        assert!(matches!(result, Err(GateError::Store(_))));
    }
}
