//! Saved-output domain model.

use serde::{Deserialize, Serialize};

/// One output the visitor saved for later.
///
/// Opaque beyond its ID at this layer; the list is owned by the saved-items
/// service and always replaced wholesale from the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedMessage {
    /// Message identifier, the handle for save/remove operations.
    pub id: String,
    /// Generated text content.
    #[serde(default)]
    pub answer: String,
    /// Server-side creation time (unix seconds).
    #[serde(default)]
    pub created_at: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_with_missing_optionals() {
        let message: SavedMessage = serde_json::from_str(r#"{"id": "m-1"}"#).unwrap();
        assert_eq!(message.id, "m-1");
        assert!(message.answer.is_empty());
        assert!(message.created_at.is_none());
    }
}
