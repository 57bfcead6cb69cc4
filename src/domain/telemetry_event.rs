//! Telemetry event model for asynchronous click tracking.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Optional metadata attached to a telemetry event.
///
/// Values are restricted to strings and numbers; anything richer belongs in
/// the analytics backend, not on the wire.
pub type EventMeta = BTreeMap<String, MetaValue>;

/// A single metadata value, serialized without a discriminator field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    Text(String),
    Number(f64),
}

/// A click event in transit to the analytics endpoint.
///
/// Created by the telemetry recorder at call time and passed to the background
/// worker via a channel, decoupling HTTP request handling from outbound
/// analytics delivery. Serializes to the wire shape
/// `{"type":"click","task":...,"meta"?,"timestamp":...}` with `meta` omitted
/// when not provided and the timestamp in RFC 3339 form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TelemetryEvent {
    #[serde(rename = "type")]
    pub event_type: &'static str,
    pub task: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<EventMeta>,
    pub timestamp: DateTime<Utc>,
}

impl TelemetryEvent {
    /// Creates a click event stamped with the current time.
    pub fn click(task: impl Into<String>, meta: Option<EventMeta>) -> Self {
        Self {
            event_type: "click",
            task: task.into(),
            meta,
            timestamp: Utc::now(),
        }
    }
}
