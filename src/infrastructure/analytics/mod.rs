//! Analytics transport implementations.

pub mod http_transport;
pub mod null_transport;

pub use http_transport::HttpAnalyticsTransport;
pub use null_transport::NullAnalyticsTransport;
