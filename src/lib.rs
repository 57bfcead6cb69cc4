//! # Compliance Portal
//!
//! An access-gated compliance dashboard with best-effort click telemetry,
//! built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and capability ports
//! - **Application Layer** ([`application`]) - Page resolution and telemetry services
//! - **Infrastructure Layer** ([`infrastructure`]) - Session, storage, and analytics collaborators
//! - **API Layer** ([`api`]) - Telemetry ingestion, health check, middleware
//! - **Web Layer** ([`web`]) - Server-rendered dashboard and sign-in pages
//!
//! ## Features
//!
//! - Session-gated dashboard with explicit render-or-redirect resolution
//! - Per-task click counters in pluggable key-value storage
//! - Fire-and-forget event delivery to an analytics endpoint
//! - Rate limiting and observability
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export SESSION_SIGNING_SECRET="change-me"
//! export ANALYTICS_URL="https://analytics.example.com/api/analytics"  # Optional
//!
//! # Start the service
//! cargo run
//!
//! # Mint a session token
//! cargo run --bin admin -- session issue --user user-42
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{PageService, TelemetryError, TelemetryService};
    pub use crate::domain::entities::{DashboardPage, PageOutcome, SessionIdentity};
    pub use crate::domain::telemetry_event::{EventMeta, MetaValue, TelemetryEvent};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
