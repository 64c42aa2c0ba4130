//! Edit session tests: form initialization, validation order, the save
//! flow, and failure/retry behavior.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use std::cell::Cell;

use gridkeep::editor::EditSession;
use gridkeep::{Category, Item, ItemEditor};

fn item(id: u32, name: &str, position: &str) -> Item {
    Item {
        id,
        name: name.to_string(),
        description: String::new(),
        category: "tools".to_string(),
        grid_position: position.to_string(),
        created_at: Some("2026-01-05T09:00:00Z".to_string()),
        updated_at: None,
    }
}

fn categories() -> Vec<Category> {
    vec![
        Category {
            id: 1,
            name: "tools".to_string(),
        },
        Category {
            id: 2,
            name: "seasonal".to_string(),
        },
    ]
}

// ================================================================
// Session initialization
// ================================================================

#[test]
fn test_new_item_preselects_first_category() {
    let session = EditSession::new(None, Vec::new(), &categories());
    assert!(session.is_new());
    assert_eq!(session.form().category, "tools");
    assert!(session.form().name.is_empty());
    assert!(session.selected_positions().is_empty());
}

#[test]
fn test_existing_item_populates_form_and_selection() {
    let session = EditSession::new(Some(item(3, "Ladder", "A1-A3")), Vec::new(), &categories());
    assert!(!session.is_new());
    assert_eq!(session.form().name, "Ladder");
    assert_eq!(session.selected_positions(), ["A1", "A2", "A3"]);
}

// ================================================================
// Position field <-> selection sync
// ================================================================

#[test]
fn test_position_text_decodes_into_selection() {
    let mut session = EditSession::new(None, Vec::new(), &categories());
    session.set_position_text("B2-B4");
    assert_eq!(session.selected_positions(), ["B2", "B3", "B4"]);
    assert_eq!(session.form().grid_position, "B2-B4");
}

#[test]
fn test_grid_selection_encodes_into_position_field() {
    let mut session = EditSession::new(None, Vec::new(), &categories());
    session.select_positions(vec!["A1".to_string(), "A2".to_string(), "A3".to_string()]);
    assert_eq!(session.form().grid_position, "A1-A3");

    session.select_positions(vec!["A1".to_string(), "C4".to_string()]);
    assert_eq!(session.form().grid_position, "A1,C4");
}

// ================================================================
// Validation before save
// ================================================================

#[test]
fn test_empty_name_rejected_before_any_external_call() {
    let editor = ItemEditor::new_test(None, Vec::new(), &categories());
    editor.session_mut().set_position_text("A1");

    let called = Cell::new(false);
    let saved = editor.save_with(|_| {
        called.set(true);
        Ok(())
    });

    assert!(!saved);
    assert!(!called.get(), "persistence must not be reached");
    assert_eq!(editor.session().error(), Some("Item name is required."));
    assert!(!editor.session().is_saving());
}

#[test]
fn test_empty_position_rejected() {
    let editor = ItemEditor::new_test(None, Vec::new(), &categories());
    editor.session_mut().set_name("Drill");

    assert!(!editor.save_with(|_| Ok(())));
    assert_eq!(editor.session().error(), Some("Grid position is required."));
}

#[test]
fn test_conflicting_position_names_the_occupant() {
    let existing = vec![item(7, "Ladder", "A1-A3")];
    let editor = ItemEditor::new_test(None, existing, &categories());
    {
        let mut session = editor.session_mut();
        session.set_name("Drill");
        session.set_position_text("A2");
    }

    assert!(!editor.save_with(|_| Ok(())));
    let error = editor.session().error().unwrap().to_string();
    assert!(error.contains("Ladder"), "error was: {error}");
}

#[test]
fn test_conflict_excludes_item_being_edited() {
    let existing = vec![item(7, "Ladder", "A1-A3")];
    let editor = ItemEditor::new_test(Some(item(7, "Ladder", "A1-A3")), existing, &categories());
    editor.session_mut().set_position_text("A2-A3");

    assert!(editor.save_with(|_| Ok(())));
}

// ================================================================
// Save flow
// ================================================================

#[test]
fn test_successful_save_produces_trimmed_payload() {
    let editor = ItemEditor::new_test(None, Vec::new(), &categories());
    {
        let mut session = editor.session_mut();
        session.set_name("  Drill  ");
        session.set_description(" cordless ");
        session.set_position_text("A1");
    }

    let saved = editor.save_with(|payload| {
        assert_eq!(payload.id, 0);
        assert_eq!(payload.name, "Drill");
        assert_eq!(payload.description, "cordless");
        assert_eq!(payload.grid_position, "A1");
        Ok(())
    });

    assert!(saved);
    assert!(editor.session().error().is_none());
    assert!(!editor.session().is_saving());
}

#[test]
fn test_save_keeps_id_and_created_at_when_editing() {
    let editor = ItemEditor::new_test(Some(item(7, "Ladder", "A1-A3")), Vec::new(), &categories());

    let saved = editor.save_with(|payload| {
        assert_eq!(payload.id, 7);
        assert_eq!(
            payload.created_at.as_deref(),
            Some("2026-01-05T09:00:00Z")
        );
        Ok(())
    });
    assert!(saved);
}

#[test]
fn test_failed_save_surfaces_message_and_keeps_form() {
    let editor = ItemEditor::new_test(None, Vec::new(), &categories());
    {
        let mut session = editor.session_mut();
        session.set_name("Drill");
        session.set_position_text("A1");
    }

    assert!(!editor.save_with(|_| Err("backend unreachable".to_string())));
    assert_eq!(editor.session().error(), Some("backend unreachable"));
    assert!(!editor.session().is_saving());
    // Form state survives for retry.
    assert_eq!(editor.session().form().name, "Drill");

    // A retry with a working backend succeeds and clears the error.
    assert!(editor.save_with(|_| Ok(())));
    assert!(editor.session().error().is_none());
}

#[test]
fn test_blank_failure_message_falls_back_to_generic() {
    let editor = ItemEditor::new_test(None, Vec::new(), &categories());
    {
        let mut session = editor.session_mut();
        session.set_name("Drill");
        session.set_position_text("A1");
    }

    assert!(!editor.save_with(|_| Err("   ".to_string())));
    assert_eq!(editor.session().error(), Some("Failed to save item."));
}

#[test]
fn test_inputs_ignored_while_saving() {
    let mut session = EditSession::new(None, Vec::new(), &categories());
    session.set_name("Drill");
    session.set_position_text("A1");

    let payload = session.begin_save().unwrap();
    assert_eq!(payload.name, "Drill");
    assert!(session.is_saving());

    session.set_name("Hammer");
    session.set_position_text("B1");
    assert_eq!(session.form().name, "Drill");
    assert_eq!(session.form().grid_position, "A1");

    // A second save while one is in flight is refused.
    assert!(session.begin_save().is_err());

    session.save_succeeded();
    assert!(!session.is_saving());
    session.set_name("Hammer");
    assert_eq!(session.form().name, "Hammer");
}
