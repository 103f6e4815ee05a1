//! Write acknowledgements shared by several endpoints.
//!
//! Clients of this API expect these shapes on every insert, update and
//! delete, so they stay uniform across resources.

use serde::Serialize;

/// Result of inserting one record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResult {
    pub acknowledged: bool,
    pub inserted_id: String,
}

impl InsertResult {
    pub fn new(id: impl ToString) -> Self {
        Self {
            acknowledged: true,
            inserted_id: id.to_string(),
        }
    }
}

/// Result of updating records.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
}

impl UpdateResult {
    pub fn new(count: u64) -> Self {
        Self {
            acknowledged: true,
            matched_count: count,
            modified_count: count,
        }
    }
}

/// Result of deleting records.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl DeleteResult {
    pub fn new(deleted_count: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_result_uses_wire_names() {
        let json = serde_json::to_value(InsertResult::new("abc")).unwrap();
        assert_eq!(json, serde_json::json!({"acknowledged": true, "insertedId": "abc"}));
    }

    #[test]
    fn delete_result_uses_wire_names() {
        let json = serde_json::to_value(DeleteResult::new(2)).unwrap();
        assert_eq!(json, serde_json::json!({"acknowledged": true, "deletedCount": 2}));
    }
}
