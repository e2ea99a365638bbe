//! Background task (Celery inspector) DTOs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Task as reported by the worker inspector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackgroundTask {
    /// Task id, used to revoke it.
    pub id: String,
    /// Task function name.
    #[serde(default)]
    pub name: String,
    /// Positional arguments, usually a list or a repr string.
    #[serde(default)]
    pub args: Value,
}

impl BackgroundTask {
    /// Arguments rendered for a table cell.
    #[must_use]
    pub fn args_label(&self) -> String {
        match &self.args {
            Value::Null => String::new(),
            Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }
}

/// Reserved (prefetched) task wrapper.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReservedTask {
    /// Wrapped task; some brokers omit it.
    #[serde(default)]
    pub request: Option<BackgroundTask>,
}

/// Scheduled (countdown/eta) task wrapper.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduledTask {
    /// Planned execution time.
    #[serde(default)]
    pub eta: Option<String>,
    /// Wrapped task.
    pub request: BackgroundTask,
}

/// Response of `GET /panel/api/celery`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CeleryResponse {
    /// Tasks currently executing.
    #[serde(default)]
    pub active: Vec<BackgroundTask>,
    /// Tasks prefetched by a worker.
    #[serde(default)]
    pub reserved: Vec<ReservedTask>,
    /// Tasks waiting for their eta.
    #[serde(default)]
    pub scheduled: Vec<ScheduledTask>,
}

impl CeleryResponse {
    /// True when no task is listed in any bucket.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.active.is_empty() && self.reserved.is_empty() && self.scheduled.is_empty()
    }
}

/// Body of `POST /panel/api/celery`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CancelTaskRequest {
    /// Task id to revoke.
    pub process_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn buckets_default_to_empty() {
        let response: CeleryResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.is_empty());
    }

    #[test]
    fn args_label_handles_lists_and_strings() {
        let listed = BackgroundTask {
            id: "1".into(),
            name: "download".into(),
            args: json!([1, "x"]),
        };
        let repr = BackgroundTask {
            id: "2".into(),
            name: "subtitles".into(),
            args: json!("(1,)"),
        };
        assert_eq!(listed.args_label(), r#"[1,"x"]"#);
        assert_eq!(repr.args_label(), "(1,)");
    }

    #[test]
    fn cancel_request_uses_process_id_key() {
        let body = serde_json::to_value(CancelTaskRequest {
            process_id: "abc".into(),
        })
        .unwrap();
        assert_eq!(body, json!({"processId": "abc"}));
    }
}
