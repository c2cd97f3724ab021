//! User entity
//!
//! The `password` field only ever holds an encoded credential produced by
//! [`CredentialHasher`]. Plaintext passwords are hashed before a `User` is built.

use super::Task;
use crate::core::crypto::CredentialHasher;
use crate::shared::types::{EncodedCredential, UserId};
use crate::shared::utils::generate_id;
use crate::shared::TaskNestResult;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// Account record with its queue of tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    username: String,
    password: EncodedCredential,
    #[serde(default)]
    tasks: VecDeque<Task>,
}

impl User {
    /// Build a user from an already-encoded credential
    pub fn new(username: impl Into<String>, credential: EncodedCredential) -> Self {
        Self {
            id: generate_id(),
            username: username.into(),
            password: credential,
            tasks: VecDeque::new(),
        }
    }

    /// Hash `password` and build the user around the resulting credential
    pub fn register(username: impl Into<String>, password: &str, hasher: &CredentialHasher) -> TaskNestResult<Self> {
        let credential = hasher.hash_password(password)?;
        Ok(Self::new(username, credential))
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Encoded credential
    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn tasks(&self) -> &VecDeque<Task> {
        &self.tasks
    }

    pub fn tasks_mut(&mut self) -> &mut VecDeque<Task> {
        &mut self.tasks
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    /// Replace the stored credential
    pub fn set_password(&mut self, credential: EncodedCredential) {
        self.password = credential;
    }

    pub fn set_tasks(&mut self, tasks: VecDeque<Task>) {
        self.tasks = tasks;
    }

    /// Enqueue a task at the back
    pub fn add_task(&mut self, task: Task) {
        self.tasks.push_back(task);
    }

    pub fn verify_password(&self, password: &str, hasher: &CredentialHasher) -> bool {
        hasher.verify_password(password, &self.password)
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})[", self.username, self.id)?;
        for (i, task) in self.tasks.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", task)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new("username", "c2FsdGVkLWhhc2g=".to_string());

        assert_eq!(user.username(), "username");
        assert_eq!(user.password(), "c2FsdGVkLWhhc2g=");
        assert!(user.tasks().is_empty());
    }

    #[test]
    fn test_register_hashes_password() {
        let hasher = CredentialHasher::new_default();
        let user = User::register("alice", "mySecurePassword123", &hasher).unwrap();

        assert_ne!(user.password(), "mySecurePassword123");
        assert!(user.verify_password("mySecurePassword123", &hasher));
        assert!(!user.verify_password("wrongPassword", &hasher));
    }

    #[test]
    fn test_tasks_are_fifo() {
        let mut user = User::new("bob", String::new());
        user.add_task(Task::titled("first"));
        user.add_task(Task::titled("second"));

        let titles: Vec<_> = user.tasks().iter().filter_map(|t| t.title()).collect();
        assert_eq!(titles, vec!["first", "second"]);
        assert_eq!(user.tasks_mut().pop_front().unwrap().title(), Some("first"));
    }

    #[test]
    fn test_json_shape() {
        let mut user = User::new("carol", "Y3JlZA==".to_string());
        user.add_task(Task::titled("t"));

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["username"], "carol");
        assert_eq!(value["password"], "Y3JlZA==");
        assert!(value["tasks"].is_array());
        assert_eq!(value["id"], user.id().to_string());

        let back: User = serde_json::from_value(value).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn test_display() {
        let mut user = User::new("dave", String::new());
        user.add_task(Task::titled("only"));
        let rendered = user.to_string();

        assert!(rendered.starts_with(&format!("dave ({})[", user.id())));
        assert!(rendered.contains("title='only'"));
        assert!(rendered.ends_with(']'));
    }
}
