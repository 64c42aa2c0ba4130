use serde::{Deserialize, Serialize};

/// An inventory item placed on the grid.
///
/// Owned by the external persistence layer; the editor holds a transient
/// copy while editing. The wire format is snake_case JSON matching the
/// backend. `id == 0` marks an item that has not been persisted yet.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Item {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    /// Position spec: "A1", "A1-A3", or "A1,B2".
    pub grid_position: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Item {
    /// Whether this item has been persisted before.
    pub fn is_saved(&self) -> bool {
        self.id != 0
    }
}

/// A category an item can belong to.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Category {
    #[serde(default)]
    pub id: u32,
    pub name: String,
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn test_item_wire_format_is_snake_case() {
        let item = Item {
            id: 3,
            name: "Ladder".to_string(),
            description: String::new(),
            category: "tools".to_string(),
            grid_position: "A1-A3".to_string(),
            created_at: Some("2026-01-05T09:00:00Z".to_string()),
            updated_at: None,
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["grid_position"], "A1-A3");
        assert_eq!(json["created_at"], "2026-01-05T09:00:00Z");
        // Absent timestamps are omitted, not serialized as null.
        assert!(json.get("updated_at").is_none());
    }

    #[test]
    fn test_item_deserializes_with_missing_optional_fields() {
        let item: Item = serde_json::from_str(
            r#"{"name":"Drill","category":"tools","grid_position":"B2"}"#,
        )
        .unwrap();

        assert_eq!(item.id, 0);
        assert!(!item.is_saved());
        assert!(item.description.is_empty());
        assert!(item.created_at.is_none());
    }
}
