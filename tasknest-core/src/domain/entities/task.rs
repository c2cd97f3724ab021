//! Task entity
//!
//! A single todo item. Every field except the id is optional or defaulted so
//! that partially filled records survive a save/load cycle unchanged.

use crate::shared::types::{Priority, TaskId, Timestamp};
use crate::shared::utils::generate_id;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Todo item as stored in task and user files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default = "generate_id")]
    id: TaskId,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    created_at: Option<Timestamp>,
    #[serde(default)]
    due_date: Option<Timestamp>,
    #[serde(default)]
    priority: Priority,
    #[serde(default)]
    tags: Vec<String>,
}

impl Task {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        status: impl Into<String>,
        created_at: Timestamp,
        due_date: Timestamp,
        priority: Priority,
        tags: Vec<String>,
    ) -> Self {
        Self {
            id: generate_id(),
            title: Some(title.into()),
            description: Some(description.into()),
            status: Some(status.into()),
            created_at: Some(created_at),
            due_date: Some(due_date),
            priority,
            tags,
        }
    }

    /// Task with only a title set
    pub fn titled(title: impl Into<String>) -> Self {
        let mut task = Self::default();
        task.set_title(title);
        task
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn created_at(&self) -> Option<Timestamp> {
        self.created_at
    }

    pub fn due_date(&self) -> Option<Timestamp> {
        self.due_date
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    pub fn set_created_at(&mut self, created_at: Timestamp) {
        self.created_at = Some(created_at);
    }

    pub fn set_due_date(&mut self, due_date: Timestamp) {
        self.due_date = Some(due_date);
    }

    pub fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    pub fn set_tags(&mut self, tags: Vec<String>) {
        self.tags = tags;
    }

    pub fn has_status(&self, status: &str) -> bool {
        self.status.as_deref() == Some(status)
    }
}

impl Default for Task {
    fn default() -> Self {
        Self {
            id: generate_id(),
            title: None,
            description: None,
            status: None,
            created_at: None,
            due_date: None,
            priority: 0,
            tags: Vec::new(),
        }
    }
}

fn display_opt<T: fmt::Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "null".to_string())
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Task{{id={}, title='{}', description='{}', status='{}', createdAt={}, dueDate={}, priority={}, tags={:?}}}",
            self.id,
            display_opt(&self.title),
            display_opt(&self.description),
            display_opt(&self.status),
            display_opt(&self.created_at),
            display_opt(&self.due_date),
            self.priority,
            self.tags,
        )
    }
}
