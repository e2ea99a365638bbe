//! Background task board state.
//!
//! # Design
//! - Flatten the three inspector buckets into labelled row groups once per fetch.
//! - Reserved entries without a wrapped task are skipped.
//! - The placeholder is derived from fetch status, error text, and row count.

use vigilio_api_models::{BackgroundTask, CeleryResponse};

/// Shown when a fetch returned no task in any bucket.
pub const NO_TASKS_MESSAGE: &str = "There are no ongoing processes";

/// Table row for one task.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskRow {
    /// Task id used for cancellation.
    pub id: String,
    /// Task name.
    pub name: String,
    /// Rendered arguments.
    pub args: String,
    /// Status or planned time.
    pub eta: String,
}

impl TaskRow {
    fn from_task(task: &BackgroundTask, eta: impl Into<String>) -> Self {
        Self {
            id: task.id.clone(),
            name: task.name.clone(),
            args: task.args_label(),
            eta: eta.into(),
        }
    }
}

/// Titled group of rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskGroup {
    /// Section heading.
    pub title: &'static str,
    /// Rows in inspector order.
    pub rows: Vec<TaskRow>,
}

/// Placeholder shown above the groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskPlaceholder {
    /// No placeholder.
    None,
    /// Waiting for the inspector.
    Loading,
    /// Nothing is running.
    Empty,
}

/// State behind the background task screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskBoard {
    /// Non-empty groups in display order.
    pub groups: Vec<TaskGroup>,
    /// Whether the last fetch has completed.
    pub fetched: bool,
    /// Error banner text.
    pub error: String,
}

impl TaskBoard {
    /// Clear rows before a reload.
    pub fn begin_reload(&mut self) {
        self.groups.clear();
        self.fetched = false;
    }

    /// Apply an inspector response.
    pub fn apply_response(&mut self, response: &CeleryResponse) {
        let active: Vec<TaskRow> = response
            .active
            .iter()
            .map(|task| TaskRow::from_task(task, "Running"))
            .collect();
        let scheduled: Vec<TaskRow> = response
            .scheduled
            .iter()
            .map(|entry| {
                TaskRow::from_task(&entry.request, entry.eta.clone().unwrap_or_default())
            })
            .collect();
        let reserved: Vec<TaskRow> = response
            .reserved
            .iter()
            .filter_map(|entry| entry.request.as_ref())
            .map(|task| TaskRow::from_task(task, "Running..."))
            .collect();
        self.groups = [("Active", active), ("Scheduled", scheduled), ("Reserved", reserved)]
            .into_iter()
            .filter(|(_, rows)| !rows.is_empty())
            .map(|(title, rows)| TaskGroup { title, rows })
            .collect();
        self.fetched = true;
    }

    /// Apply a failed fetch.
    pub fn apply_failure(&mut self, message: String) {
        self.error = message;
        self.fetched = true;
    }

    /// Placeholder decision.
    #[must_use]
    pub fn placeholder(&self) -> TaskPlaceholder {
        if !self.groups.is_empty() {
            TaskPlaceholder::None
        } else if !self.fetched {
            TaskPlaceholder::Loading
        } else if self.error.is_empty() {
            TaskPlaceholder::Empty
        } else {
            TaskPlaceholder::None
        }
    }
}

/// Info banner shown after a task is revoked.
#[must_use]
pub fn cancelled_message(id: &str) -> String {
    format!("{id} process id has been cancelled.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response() -> CeleryResponse {
        serde_json::from_value(json!({
            "active": [{"id": "a1", "name": "download", "args": [3]}],
            "reserved": [{"request": {"id": "r1", "name": "subs", "args": "(3,)"}}, {}],
            "scheduled": [{"eta": "2024-05-01T10:00:00", "request": {"id": "s1", "name": "clean", "args": []}}]
        }))
        .unwrap()
    }

    #[test]
    fn groups_follow_bucket_order_and_labels() {
        let mut board = TaskBoard::default();
        board.apply_response(&response());
        let titles: Vec<_> = board.groups.iter().map(|group| group.title).collect();
        assert_eq!(titles, ["Active", "Scheduled", "Reserved"]);
        assert_eq!(board.groups[0].rows[0].eta, "Running");
        assert_eq!(board.groups[1].rows[0].eta, "2024-05-01T10:00:00");
        assert_eq!(board.groups[2].rows.len(), 1);
        assert_eq!(board.groups[2].rows[0].eta, "Running...");
        assert_eq!(board.placeholder(), TaskPlaceholder::None);
    }

    #[test]
    fn placeholder_tracks_fetch_and_errors() {
        let mut board = TaskBoard::default();
        assert_eq!(board.placeholder(), TaskPlaceholder::Loading);
        board.apply_response(&CeleryResponse::default());
        assert_eq!(board.placeholder(), TaskPlaceholder::Empty);
        board.apply_failure("broker down".into());
        assert_eq!(board.placeholder(), TaskPlaceholder::None);
    }

    #[test]
    fn reload_clears_rows() {
        let mut board = TaskBoard::default();
        board.apply_response(&response());
        board.begin_reload();
        assert!(board.groups.is_empty());
        assert_eq!(board.placeholder(), TaskPlaceholder::Loading);
        assert_eq!(cancelled_message("a1"), "a1 process id has been cancelled.");
    }
}
