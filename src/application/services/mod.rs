//! Business logic services for the application layer.

pub mod page_service;
pub mod telemetry_service;

pub use page_service::PageService;
pub use telemetry_service::{TelemetryError, TelemetryService, counter_key};
