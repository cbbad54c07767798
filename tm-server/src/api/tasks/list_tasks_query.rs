use serde::Deserialize;

/// Optional filters for task listing
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTasksQuery {
    pub task_status: Option<String>,
}

impl ListTasksQuery {
    /// The effective status filter. An empty `?taskStatus=` means
    /// unfiltered, same as omitting the parameter.
    pub fn status_filter(&self) -> Option<&str> {
        self.task_status.as_deref().filter(|s| !s.is_empty())
    }
}
