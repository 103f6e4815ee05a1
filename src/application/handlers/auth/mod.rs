//! Credential handlers.

mod issue_token;

pub use issue_token::{IssueTokenCommand, IssueTokenHandler, IssueTokenResult};
