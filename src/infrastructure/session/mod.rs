//! Session resolution implementations.

pub mod signed_session;

pub use signed_session::SignedSessionProvider;
