use serde::{Deserialize, Serialize};

mod presence;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

/// Body of `POST /tasks`. Anything else the caller sends, `id` and
/// `completed` included, is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskCreate {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Body of `PUT /tasks/{id}`.
///
/// Only keys present in the request are applied. `description: null` clears
/// the description; `title` and `completed` cannot be null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TaskUpdate {
    #[serde(default, deserialize_with = "presence::non_null")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "presence::nullable")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "presence::non_null")]
    pub completed: Option<bool>,
}

impl TaskUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }

    /// Merges the supplied fields onto `task`. The id is never touched.
    pub fn apply(self, mut task: Task) -> Task {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = description;
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
        task
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Task {
        Task {
            id: 7,
            title: "Write report".to_string(),
            description: Some("quarterly".to_string()),
            completed: false,
        }
    }

    #[test]
    fn test_create_ignores_completed_and_id() {
        let json = r#"{"id": 42, "title": "A", "completed": true}"#;
        let create: TaskCreate = serde_json::from_str(json).unwrap();
        assert_eq!(create.title, "A");
        assert_eq!(create.description, None);
    }

    #[test]
    fn test_create_requires_title() {
        let result = serde_json::from_str::<TaskCreate>(r#"{"description": "B"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_update_absent_fields_stay_unset() {
        let update: TaskUpdate = serde_json::from_str("{}").unwrap();
        assert!(update.is_empty());
        assert_eq!(update.apply(sample()), sample());
    }

    #[test]
    fn test_update_null_description_clears() {
        let update: TaskUpdate = serde_json::from_str(r#"{"description": null}"#).unwrap();
        assert_eq!(update.description, Some(None));

        let task = update.apply(sample());
        assert_eq!(task.description, None);
        assert_eq!(task.title, "Write report");
    }

    #[test]
    fn test_update_null_title_is_rejected() {
        let result = serde_json::from_str::<TaskUpdate>(r#"{"title": null}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_update_null_completed_is_rejected() {
        let result = serde_json::from_str::<TaskUpdate>(r#"{"completed": null}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_update_completed_only() {
        let update: TaskUpdate = serde_json::from_str(r#"{"completed": true}"#).unwrap();
        let task = update.apply(sample());

        assert!(task.completed);
        assert_eq!(task.title, "Write report");
        assert_eq!(task.description.as_deref(), Some("quarterly"));
        assert_eq!(task.id, 7);
    }

    #[test]
    fn test_task_serializes_missing_description_as_null() {
        let task = Task {
            description: None,
            ..sample()
        };
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 7,
                "title": "Write report",
                "description": null,
                "completed": false
            })
        );
    }
}
