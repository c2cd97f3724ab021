use chrono::NaiveDateTime;
use uuid::Uuid;

// Basic types for todo records
pub type UserId = Uuid;
pub type TaskId = Uuid;
pub type Priority = i32;
pub type Timestamp = NaiveDateTime;

/// Base64 text form of a salted password credential, as stored in user records
pub type EncodedCredential = String;

// Result type alias
pub type TaskNestResult<T> = Result<T, crate::shared::error::TaskNestError>;
