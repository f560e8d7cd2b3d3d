use serde_json::json;

use pageforge::input::CANVAS_DROP_TARGET;
use pageforge::{Delta, DragEndEvent, Editor, LayerDirection, Position};

fn drop_on_canvas(dragged_id: &str, dx: i32, dy: i32) -> DragEndEvent {
    DragEndEvent {
        dragged_id: dragged_id.to_owned(),
        over_target: Some(CANVAS_DROP_TARGET.to_owned()),
        delta: Delta::new(dx, dy),
    }
}

/// Editor with one heading dropped at (50,50); returns its id.
fn create_test_editor() -> (Editor, String) {
    let mut editor = Editor::new();
    editor
        .handle_drag_end(&drop_on_canvas("new-heading", 50, 50))
        .unwrap();
    let id = editor.state().document.elements()[0].id.clone();
    (editor, id)
}

#[test]
fn dropping_a_palette_element_creates_and_selects_it() {
    let (editor, id) = create_test_editor();
    let state = editor.state();

    assert_eq!(state.document.len(), 1);
    assert_eq!(state.selection.len(), 1);
    assert!(state.selection.contains(&id));
    assert_eq!(state.document.find(&id).unwrap().position, Position::new(50, 50));
    assert!(editor.can_undo());
}

#[test]
fn dragging_snaps_to_the_grid() {
    // Heading at (50,50), grid 10, snap enabled: delta (7,-3) lands on
    // (60,50) because 57 rounds up and 47 rounds up.
    let (mut editor, id) = create_test_editor();
    editor.handle_drag_end(&drop_on_canvas(&id, 7, -3)).unwrap();
    assert_eq!(
        editor.state().document.find(&id).unwrap().position,
        Position::new(60, 50)
    );
}

#[test]
fn dragging_without_snap_applies_the_raw_delta() {
    let (mut editor, id) = create_test_editor();
    editor.toggle_snap();
    editor.handle_drag_end(&drop_on_canvas(&id, 7, -3)).unwrap();
    assert_eq!(
        editor.state().document.find(&id).unwrap().position,
        Position::new(57, 47)
    );
}

#[test]
fn dropping_a_section_selects_all_new_elements() {
    let mut editor = Editor::new();
    editor
        .handle_drag_end(&drop_on_canvas("section-hero", 100, 200))
        .unwrap();

    let state = editor.state();
    assert_eq!(state.document.len(), 3);
    assert_eq!(state.selection.len(), 3);
    for element in state.document.elements() {
        assert!(state.selection.contains(&element.id));
    }
}

#[test]
fn unknown_palette_names_leave_the_state_untouched() {
    let mut editor = Editor::new();
    assert!(editor
        .handle_drag_end(&drop_on_canvas("section-footer", 0, 0))
        .is_err());
    assert!(editor.state().document.is_empty());
    assert!(!editor.can_undo());
}

#[test]
fn drops_outside_the_canvas_are_ignored() {
    let mut editor = Editor::new();
    let mut event = drop_on_canvas("new-button", 10, 10);
    event.over_target = None;
    editor.handle_drag_end(&event).unwrap();
    assert!(editor.state().document.is_empty());
    assert!(!editor.can_undo());
}

#[test]
fn locked_elements_do_not_move_and_do_not_commit() {
    let (mut editor, id) = create_test_editor();
    editor.toggle_lock_selected();
    let entries_before = editor.state().history.len();

    editor.handle_drag_end(&drop_on_canvas(&id, 30, 30)).unwrap();
    assert_eq!(
        editor.state().document.find(&id).unwrap().position,
        Position::new(50, 50)
    );
    assert_eq!(editor.state().history.len(), entries_before);
}

#[test]
fn mixed_selection_moves_only_unlocked_members() {
    let (mut editor, heading_id) = create_test_editor();
    editor
        .handle_drag_end(&drop_on_canvas("new-button", 100, 100))
        .unwrap();
    let button_id = editor
        .state()
        .document
        .elements()
        .iter()
        .find(|el| el.id != heading_id)
        .unwrap()
        .id
        .clone();

    // Lock the heading while it is selected, then multi-select the button so
    // the selection holds one locked and one unlocked element.
    editor.select_element(&heading_id, false);
    editor.toggle_lock_selected();
    editor.select_element(&button_id, true);
    assert_eq!(editor.state().selection.len(), 2);

    editor.handle_drag_end(&drop_on_canvas(&button_id, 20, 20)).unwrap();

    assert_eq!(
        editor.state().document.find(&heading_id).unwrap().position,
        Position::new(50, 50)
    );
    assert_eq!(
        editor.state().document.find(&button_id).unwrap().position,
        Position::new(120, 120)
    );
}

#[test]
fn deleting_selected_elements_prunes_the_selection() {
    let (mut editor, id) = create_test_editor();
    editor.delete_selected();

    let state = editor.state();
    assert!(state.document.is_empty());
    assert!(state.selection.is_empty());
    assert!(!state.document.contains(&id));
}

#[test]
fn deleting_one_element_prunes_it_in_the_same_transition() {
    let mut editor = Editor::new();
    editor
        .handle_drag_end(&drop_on_canvas("section-contact", 0, 0))
        .unwrap();
    let id = editor.state().document.elements()[0].id.clone();

    editor.delete_element(&id);
    let state = editor.state();
    assert!(!state.selection.contains(&id));
    assert_eq!(state.document.len(), 1);
}

#[test]
fn undo_and_redo_restore_document_and_selection() {
    let (mut editor, id) = create_test_editor();
    editor
        .handle_drag_end(&drop_on_canvas("new-button", 100, 100))
        .unwrap();
    assert_eq!(editor.state().document.len(), 2);

    editor.undo();
    assert_eq!(editor.state().document.len(), 1);
    assert!(editor.state().selection.contains(&id));
    assert!(editor.can_redo());

    editor.redo();
    assert_eq!(editor.state().document.len(), 2);
    assert!(!editor.can_redo());

    // Undoing everything lands on the seeded empty document.
    editor.undo();
    editor.undo();
    assert!(editor.state().document.is_empty());
    assert!(!editor.can_undo());
}

#[test]
fn committing_after_undo_discards_the_redo_branch() {
    let (mut editor, _) = create_test_editor();
    editor.undo();
    assert!(editor.can_redo());

    editor
        .handle_drag_end(&drop_on_canvas("new-text", 10, 10))
        .unwrap();
    assert!(!editor.can_redo());
    assert_eq!(editor.state().document.len(), 1);
}

#[test]
fn property_edits_commit_even_for_missing_ids() {
    let (mut editor, id) = create_test_editor();
    let entries = editor.state().history.len();

    editor.update_property(&id, "text", json!("Hello"));
    assert_eq!(
        editor.state().document.find(&id).unwrap().property("text"),
        Some(&json!("Hello"))
    );
    assert_eq!(editor.state().history.len(), entries + 1);

    // A stale edit racing with deletion is a benign no-op but still its own
    // distinct state.
    editor.update_property("element-missing", "text", json!("nope"));
    assert_eq!(editor.state().history.len(), entries + 2);
}

#[test]
fn every_property_edit_is_its_own_undo_step() {
    let (mut editor, id) = create_test_editor();
    for i in 0..5 {
        editor.update_property(&id, "fontSize", json!(format!("{}px", 20 + i)));
    }
    for _ in 0..5 {
        editor.undo();
    }
    assert_eq!(
        editor.state().document.find(&id).unwrap().property("fontSize"),
        Some(&json!("24px"))
    );
}

#[test]
fn selection_changes_do_not_create_history_entries() {
    let (mut editor, id) = create_test_editor();
    let entries = editor.state().history.len();

    editor.clear_selection();
    editor.select_element(&id, false);
    editor.select_element(&id, true); // toggle off
    assert_eq!(editor.state().history.len(), entries);
}

#[test]
fn locked_elements_cannot_be_newly_selected() {
    let (mut editor, id) = create_test_editor();
    editor.toggle_lock_selected();

    // Already selected: the click keeps the selection.
    editor.select_element(&id, false);
    assert!(editor.state().selection.contains(&id));

    editor.clear_selection();
    editor.select_element(&id, false);
    assert!(editor.state().selection.is_empty());
}

#[test]
fn preview_mode_suppresses_mutation_and_clears_selection() {
    let (mut editor, id) = create_test_editor();
    let entries = editor.state().history.len();

    editor.toggle_preview();
    assert!(editor.state().selection.is_empty());

    editor.handle_drag_end(&drop_on_canvas("new-button", 10, 10)).unwrap();
    editor.select_element(&id, false);
    editor.update_property(&id, "text", json!("nope"));
    editor.delete_selected();
    editor.reorder_layer(&id, LayerDirection::Top);

    let state = editor.state();
    assert_eq!(state.document.len(), 1);
    assert!(state.selection.is_empty());
    assert_eq!(state.history.len(), entries);
    assert_eq!(state.document.find(&id).unwrap().property("text"), Some(&json!("Heading Text")));
}

#[test]
fn view_toggles_never_commit_history() {
    let mut editor = Editor::new();
    editor.toggle_grid();
    editor.toggle_snap();
    editor.toggle_preview();
    editor.toggle_preview();
    assert!(!editor.can_undo());
    assert_eq!(editor.state().history.len(), 1);
}

#[test]
fn layer_commands_commit_and_missing_ids_are_benign() {
    let (mut editor, id) = create_test_editor();
    let entries = editor.state().history.len();

    editor.reorder_layer(&id, LayerDirection::Top);
    assert_eq!(editor.state().history.len(), entries + 1);
    assert_eq!(editor.state().document.find(&id).unwrap().z_index, 2);

    editor.reorder_layer("element-missing", LayerDirection::Up);
    assert_eq!(editor.state().history.len(), entries + 1);
}

#[test]
fn grid_size_must_be_positive() {
    let mut editor = Editor::new();
    assert!(editor.set_grid_size(0).is_err());
    assert!(editor.set_grid_size(-5).is_err());
    assert!(editor.set_grid_size(20).is_ok());
    assert_eq!(editor.state().grid_size, 20);
}
