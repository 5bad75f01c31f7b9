//! Frontend Models
//!
//! Data structures matching the task API's records.

use serde::{Deserialize, Serialize};

/// Task record as returned by the API. Extra server-side fields (ids and the
/// like) are ignored: the view keeps no per-item identity and always replaces
/// the rendered list wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub task: String,
    pub is_complete: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_ignores_server_side_fields() {
        let parsed: Todo =
            serde_json::from_str(r#"{"id":"abc-123","task":"Buy milk","is_complete":false}"#)
                .unwrap();
        assert_eq!(
            parsed,
            Todo {
                task: "Buy milk".to_string(),
                is_complete: false,
            }
        );
    }

    #[test]
    fn test_deserialize_list() {
        let parsed: Vec<Todo> = serde_json::from_str(
            r#"[{"task":"Buy milk","is_complete":false},{"task":"Pay rent","is_complete":true}]"#,
        )
        .unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].task, "Buy milk");
        assert!(parsed[1].is_complete);
    }
}
