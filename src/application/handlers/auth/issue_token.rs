//! IssueTokenHandler - Command handler for minting bearer credentials.

use std::sync::Arc;

use crate::domain::foundation::{AuthError, Email};
use crate::ports::TokenCodec;

/// Command to issue a credential for an identity claim.
#[derive(Debug, Clone)]
pub struct IssueTokenCommand {
    pub email: Email,
}

/// Result of issuing a credential.
#[derive(Debug, Clone)]
pub struct IssueTokenResult {
    pub token: String,
    pub expires_in: u64,
}

/// Handler for issuing credentials. No store access.
pub struct IssueTokenHandler {
    codec: Arc<dyn TokenCodec>,
}

impl IssueTokenHandler {
    pub fn new(codec: Arc<dyn TokenCodec>) -> Self {
        Self { codec }
    }

    pub fn handle(&self, cmd: IssueTokenCommand) -> Result<IssueTokenResult, AuthError> {
        let issued = self.codec.issue(&cmd.email).map_err(|e| {
            tracing::error!(error = %e, "Credential signing failed");
            e
        })?;

        tracing::debug!(email = %cmd.email, "Credential issued");

        Ok(IssueTokenResult {
            token: issued.token,
            expires_in: issued.expires_in,
        })
    }
}
