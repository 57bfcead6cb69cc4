//! DTOs for the telemetry click ingestion endpoint.

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::telemetry_event::EventMeta;

/// Compiled regex for task name validation.
static TASK_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9][a-z0-9_.-]*$").unwrap());

/// A single UI click to record.
///
/// `task` names the interaction being counted (e.g. `signup`,
/// `export.report`); `meta` is an optional string/number mapping forwarded to
/// analytics unchanged.
#[derive(Debug, Deserialize, Validate)]
pub struct ClickRequest {
    /// Task name (lowercase alphanumerics plus `_`, `.`, `-`).
    #[validate(length(min = 1, max = 128))]
    #[validate(regex(path = "*TASK_NAME_REGEX"))]
    pub task: String,

    /// Optional metadata attached to the transmitted event.
    pub meta: Option<EventMeta>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(task: &str) -> ClickRequest {
        ClickRequest {
            task: task.to_string(),
            meta: None,
        }
    }

    #[test]
    fn test_plain_task_names_validate() {
        assert!(request("signup").validate().is_ok());
        assert!(request("export.report").validate().is_ok());
        assert!(request("step-2_done").validate().is_ok());
    }

    #[test]
    fn test_empty_task_is_rejected() {
        assert!(request("").validate().is_err());
    }

    #[test]
    fn test_unusual_characters_are_rejected() {
        assert!(request("Sign Up").validate().is_err());
        assert!(request("../escape").validate().is_err());
        assert!(request("UPPER").validate().is_err());
    }

    #[test]
    fn test_overlong_task_is_rejected() {
        assert!(request(&"a".repeat(129)).validate().is_err());
    }

    #[test]
    fn test_meta_deserializes_from_json() {
        let request: ClickRequest =
            serde_json::from_str(r#"{"task":"signup","meta":{"plan":"pro","step":2}}"#).unwrap();

        assert_eq!(request.task, "signup");
        assert_eq!(request.meta.unwrap().len(), 2);
    }
}
