//! Domain layer containing business entities and logic.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`ports`] - Capability trait definitions for external collaborators
//! - [`telemetry_event`] - Click telemetry event model
//! - [`telemetry_worker`] - Asynchronous analytics delivery worker
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Ports define contracts implemented by the infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])
//!
//! # Telemetry Flow
//!
//! 1. The recorder ([`crate::application::services::TelemetryService`]) bumps
//!    the per-task counter and sends a [`telemetry_event::TelemetryEvent`] to
//!    a bounded channel
//! 2. [`telemetry_worker::run_telemetry_worker`] transmits each event via
//!    [`ports::AnalyticsTransport`], discarding failures

pub mod entities;
pub mod ports;
pub mod telemetry_event;
pub mod telemetry_worker;
