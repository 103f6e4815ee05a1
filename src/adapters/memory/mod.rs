//! In-memory store adapter.
//!
//! Backs every store port with process memory. Used by the test suites and
//! for running the server without a database.

mod store;

pub use store::InMemoryStore;
