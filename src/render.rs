//! List Text Helpers
//!
//! Pure formatting and input-normalization rules for the task list view.

use crate::api::ApiError;
use crate::models::Todo;

/// Shown in place of the list when the server has no tasks.
pub const EMPTY_PLACEHOLDER: &str = "You have no tasks yet! Add one above.";

/// Alert shown when a submission never reaches the server.
pub const SUBMIT_NETWORK_ALERT: &str = "A network error occurred while submitting the task.";

/// One line item per record: `[DONE] <task>` or `[TODO] <task>`.
pub fn todo_line(todo: &Todo) -> String {
    let state = if todo.is_complete { "DONE" } else { "TODO" };
    format!("[{}] {}", state, todo.task)
}

/// Inline text shown in the list area when the fetch fails.
pub fn list_error_line(error: &ApiError) -> String {
    format!("Error: {}. Check console.", error)
}

/// Trimmed task text, or None when nothing submittable remains.
pub fn normalize_task_input(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Alert text for a rejected submission, with the server's message when it
/// sent one.
pub fn create_failure_alert(server_message: Option<&str>) -> String {
    format!(
        "Failed to create task: {}",
        server_message.unwrap_or("Server error")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(task: &str, is_complete: bool) -> Todo {
        Todo {
            task: task.to_string(),
            is_complete,
        }
    }

    #[test]
    fn test_todo_line_formats_by_completion_flag() {
        assert_eq!(todo_line(&make_todo("Buy milk", false)), "[TODO] Buy milk");
        assert_eq!(todo_line(&make_todo("Pay rent", true)), "[DONE] Pay rent");
    }

    #[test]
    fn test_todo_lines_preserve_input_order() {
        let todos = vec![make_todo("Buy milk", false), make_todo("Pay rent", true)];
        let lines: Vec<String> = todos.iter().map(todo_line).collect();
        assert_eq!(lines, vec!["[TODO] Buy milk", "[DONE] Pay rent"]);
    }

    #[test]
    fn test_list_error_line_names_the_status() {
        let line = list_error_line(&ApiError::Status {
            status: 500,
            message: None,
        });
        assert!(line.contains("500"));
        assert_eq!(line, "Error: HTTP error! Status: 500. Check console.");
    }

    #[test]
    fn test_whitespace_only_input_is_not_submittable() {
        assert_eq!(normalize_task_input(""), None);
        assert_eq!(normalize_task_input("   "), None);
        assert_eq!(normalize_task_input("\t\n  "), None);
    }

    #[test]
    fn test_input_is_trimmed_before_submission() {
        assert_eq!(
            normalize_task_input("  Buy milk \n"),
            Some("Buy milk".to_string())
        );
    }

    #[test]
    fn test_create_failure_alert_uses_server_message() {
        assert_eq!(
            create_failure_alert(Some("X")),
            "Failed to create task: X"
        );
    }

    #[test]
    fn test_create_failure_alert_falls_back_to_generic() {
        assert_eq!(
            create_failure_alert(None),
            "Failed to create task: Server error"
        );
    }
}
