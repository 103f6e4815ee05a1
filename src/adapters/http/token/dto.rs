//! DTOs for credential issuance.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Email;

/// Body of `POST /jwt`. Other profile fields are accepted and ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueTokenRequest {
    pub email: Email,
}

#[derive(Debug, Clone, Serialize)]
pub struct IssueTokenResponse {
    pub token: String,
}
