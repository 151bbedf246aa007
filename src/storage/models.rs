//! Data models stored in the post table.

use serde::{Deserialize, Serialize};
use strum_macros::{Display as DisplayMacro, EnumIter as EnumIterMacro};

/// A post mirrored from the source platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    /// Post id assigned by the source platform
    pub id: String,
    /// Message body forwarded to the channel
    pub text: String,
    /// Whether the message was delivered to the channel
    pub is_posted: bool,
}

impl PostRecord {
    /// Creates a record that has not been delivered yet.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            is_posted: false,
        }
    }
}

/// What [`RecordStore::ensure_table`](crate::RecordStore::ensure_table) did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, DisplayMacro, EnumIterMacro)]
#[strum(serialize_all = "snake_case")]
pub enum TableStatus {
    /// The table did not exist and was created.
    Created,
    /// The table existed and was dropped and created empty.
    Recreated,
    /// The table existed and was left untouched.
    AlreadyPresent,
}

impl TableStatus {
    /// Whether the table is empty as a result of the call.
    pub fn is_fresh(self) -> bool {
        matches!(self, TableStatus::Created | TableStatus::Recreated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_new_record_is_pending() {
        let record = PostRecord::new("1", "hello");
        assert_eq!(record.id, "1");
        assert_eq!(record.text, "hello");
        assert!(!record.is_posted);
    }

    #[test]
    fn test_record_json_shape() {
        let json = serde_json::to_string(&PostRecord::new("42", "hi")).unwrap();
        assert_eq!(json, r#"{"id":"42","text":"hi","is_posted":false}"#);
    }

    #[test]
    fn test_table_status_display() {
        assert_eq!(TableStatus::Created.to_string(), "created");
        assert_eq!(TableStatus::Recreated.to_string(), "recreated");
        assert_eq!(TableStatus::AlreadyPresent.to_string(), "already_present");
    }

    #[test]
    fn test_only_already_present_keeps_rows() {
        for status in TableStatus::iter() {
            assert_eq!(status.is_fresh(), status != TableStatus::AlreadyPresent);
        }
    }
}
