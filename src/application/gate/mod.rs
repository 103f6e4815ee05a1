//! Authorization gate.
//!
//! Two-stage guard run before any protected operation:
//!
//! ```text
//! header ──► credential present? ──no──► Denied(missing-credential)      401
//!                  │yes
//!                  ▼
//!            verify(token) ──err──► Denied(invalid-or-expired)            401
//!                  │ok
//!                  ▼
//!            requirement ──Admin──► role lookup ──not admin──► Denied(insufficient-role)  403
//!                  │      └─Subject─► email == subject? ──no──► Denied(identity-mismatch)  403
//!                  ▼
//!               Allowed
//! ```
//!
//! Only the role lookup touches a store. Every denial returns before the
//! protected operation runs.

mod authorization_gate;

pub use authorization_gate::{AuthorizationGate, GateError};
