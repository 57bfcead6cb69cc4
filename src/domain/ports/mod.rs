//! Capability trait definitions for the domain layer.
//!
//! This module defines the interfaces through which the portal reaches its
//! external collaborators. Concrete implementations live in
//! `crate::infrastructure`; mock implementations are auto-generated via
//! `mockall` for testing.
//!
//! # Available Ports
//!
//! - [`SessionProvider`] - Resolves session tokens to user identities
//! - [`CounterStore`] - Persistent string key-value storage for click counters
//! - [`AnalyticsTransport`] - Fire-and-forget event delivery to analytics

pub mod analytics_transport;
pub mod counter_store;
pub mod session_provider;

pub use analytics_transport::{AnalyticsTransport, TransportError, TransportResult};
pub use counter_store::{CounterStore, StoreError, StoreResult};
pub use session_provider::SessionProvider;

#[cfg(test)]
pub use analytics_transport::MockAnalyticsTransport;
#[cfg(test)]
pub use counter_store::MockCounterStore;
#[cfg(test)]
pub use session_provider::MockSessionProvider;
