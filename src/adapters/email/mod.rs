//! Email adapters.
//!
//! Implementations of the `PaymentNotifier` port:
//!
//! - `mailgun_notifier` - Mailgun HTTP API
//! - `logging_notifier` - Log-only, used when no mail transport is configured
//! - `recording_notifier` - In-process recorder, a test double

mod logging_notifier;
mod mailgun_notifier;
mod recording_notifier;

pub use logging_notifier::LoggingNotifier;
pub use mailgun_notifier::{MailgunConfig, MailgunNotifier};
pub use recording_notifier::RecordingNotifier;
