//! Form data and synchronous validation for the item editor.

use crate::error::{GridError, Result};
use crate::position::specs_conflict;
use crate::types::Item;

/// The editable fields of the item form.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct ItemForm {
    pub name: String,
    pub description: String,
    pub category: String,
    /// Position spec, kept in sync with the grid selection.
    pub grid_position: String,
}

impl ItemForm {
    /// Initialize the form from the item being edited.
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            category: item.category.clone(),
            grid_position: item.grid_position.clone(),
        }
    }

    /// An empty form for a new item, with the first category preselected.
    pub fn empty(default_category: Option<&str>) -> Self {
        Self {
            category: default_category.unwrap_or_default().to_string(),
            ..Self::default()
        }
    }
}

/// Validate the form against the existing items, in display order:
/// name, category, position, then placement conflicts. The item being
/// edited (by id) is excluded from the conflict comparison.
pub fn validate(form: &ItemForm, existing: &[Item], editing_id: Option<u32>) -> Result<()> {
    if form.name.trim().is_empty() {
        return Err(GridError::Validation("Item name is required.".to_string()));
    }
    if form.category.is_empty() {
        return Err(GridError::Validation("Category is required.".to_string()));
    }
    if form.grid_position.trim().is_empty() {
        return Err(GridError::Validation(
            "Grid position is required.".to_string(),
        ));
    }

    let conflicting = existing.iter().find(|other| {
        editing_id != Some(other.id) && specs_conflict(&other.grid_position, &form.grid_position)
    });
    if let Some(other) = conflicting {
        return Err(GridError::Validation(format!(
            "That position is already used by \"{}\".",
            other.name
        )));
    }

    Ok(())
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

    fn item(id: u32, name: &str, position: &str) -> Item {
        Item {
            id,
            name: name.to_string(),
            description: String::new(),
            category: "tools".to_string(),
            grid_position: position.to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    fn filled_form(position: &str) -> ItemForm {
        ItemForm {
            name: "Drill".to_string(),
            description: String::new(),
            category: "tools".to_string(),
            grid_position: position.to_string(),
        }
    }

    #[test]
    fn test_name_checked_first() {
        let form = ItemForm::default();
        let err = validate(&form, &[], None).unwrap_err();
        assert_eq!(err.to_string(), "Item name is required.");
    }

    #[test]
    fn test_conflict_names_the_other_item() {
        let existing = vec![item(7, "Ladder", "A1-A3")];
        let err = validate(&filled_form("A2"), &existing, None).unwrap_err();
        assert!(err.to_string().contains("Ladder"));
    }

    #[test]
    fn test_editing_item_excluded_from_conflict() {
        let existing = vec![item(7, "Ladder", "A1-A3")];
        assert!(validate(&filled_form("A2"), &existing, Some(7)).is_ok());
    }
}
