//! Editor Scenario Tests
//!
//! End-to-end flows through the editor boundary:
//! - Palette placement and free-form moves
//! - Property edits reaching generated markup
//! - Duplicate, delete and selection
//! - Preset instantiation
//! - Command scripts

use std::collections::HashSet;

use builder_core::{
    Command, Editor, EditorConfig, ElementId, ElementKind, ElementRef, Outcome, PropertyValue,
};

fn position_of(editor: &Editor, id: ElementId) -> (f32, f32) {
    let position = editor.model().get(id).expect("element exists").position();
    (position.x, position.y)
}

fn assert_at(editor: &Editor, id: ElementId, x: f32, y: f32) {
    let (px, py) = position_of(editor, id);
    assert!(
        (px - x).abs() < f32::EPSILON && (py - y).abs() < f32::EPSILON,
        "expected ({x}, {y}), got ({px}, {py})"
    );
}

// ============================================================================
// Palette Placement
// ============================================================================

#[test]
fn test_heading_drop_is_offset_from_cursor() {
    let mut editor = Editor::default();

    let id = editor
        .instantiate_from_palette(ElementKind::Heading, 120.0, 80.0)
        .expect("drop inside canvas");

    assert_at(&editor, id, 70.0, 55.0);
    let element = editor.model().get(id).expect("exists");
    assert_eq!(
        element.properties().get("text"),
        Some(&PropertyValue::from("My Heading"))
    );
}

#[test]
fn test_drop_near_origin_clamps_to_zero() {
    let mut editor = Editor::default();

    let id = editor
        .instantiate_from_palette(ElementKind::Button, 10.0, 5.0)
        .expect("drop inside canvas");

    assert_at(&editor, id, 0.0, 0.0);
}

#[test]
fn test_drop_outside_canvas_is_discarded() {
    let mut editor = Editor::default();

    assert!(editor
        .instantiate_from_palette(ElementKind::Image, 5000.0, 100.0)
        .is_none());
    assert!(editor
        .instantiate_from_palette(ElementKind::Image, 100.0, -1.0)
        .is_none());
    assert!(editor.elements().is_empty());
}

#[test]
fn test_armed_drag_then_cancel_places_nothing() {
    let mut editor = Editor::default();

    editor.arm_palette(ElementKind::Card);
    editor.cancel_palette();

    assert!(editor.drop_on_canvas(300.0, 300.0).is_none());
    assert!(editor.elements().is_empty());
}

// ============================================================================
// Free-form Move
// ============================================================================

#[test]
fn test_move_keeps_grab_offset() {
    let mut editor = Editor::default();
    let id = editor
        .instantiate_from_palette(ElementKind::Paragraph, 250.0, 225.0)
        .expect("placed");
    assert_at(&editor, id, 200.0, 200.0);

    // Grab 10px right and 5px below the element origin
    assert!(editor.begin_move(id, 210.0, 205.0));
    assert_eq!(editor.selected().map(|e| e.id()), Some(id));

    editor.continue_move(310.0, 255.0);
    assert_at(&editor, id, 300.0, 250.0);

    assert!(editor.end_move());
    assert!(!editor.interaction().is_dragging());
    assert_at(&editor, id, 300.0, 250.0);
}

#[test]
fn test_move_past_edges_is_clamped() {
    let mut editor = Editor::default();
    let id = editor
        .instantiate_from_palette(ElementKind::Card, 150.0, 125.0)
        .expect("placed");

    editor.begin_move(id, 100.0, 100.0);

    // Pointer left the canvas to the top-left
    editor.continue_move(-400.0, -400.0);
    assert_at(&editor, id, 0.0, 0.0);

    // Pointer left the canvas to the bottom-right
    editor.continue_move(9000.0, 9000.0);
    assert_at(&editor, id, 1024.0 - 100.0, 700.0 - 50.0);

    // Pointer-up outside the canvas still ends the session
    assert!(editor.end_move());
    assert!(editor.continue_move(200.0, 200.0).is_none());
    assert_at(&editor, id, 924.0, 650.0);
}

#[test]
fn test_deleting_dragged_element_ends_session() {
    let mut editor = Editor::default();
    let id = editor
        .instantiate_from_palette(ElementKind::Link, 200.0, 200.0)
        .expect("placed");

    editor.begin_move(id, 150.0, 175.0);
    assert!(editor.delete(id));

    assert!(!editor.interaction().is_dragging());
    assert!(editor.continue_move(10.0, 10.0).is_none());
}

// ============================================================================
// Property Edits
// ============================================================================

#[test]
fn test_paragraph_color_reaches_markup() {
    let mut editor = Editor::default();
    let id = editor
        .instantiate_from_palette(ElementKind::Paragraph, 100.0, 100.0)
        .expect("placed");

    assert!(editor.set_property(id, "color", "#ff0000"));

    assert!(editor.generate_markup().contains("color: #ff0000"));
}

#[test]
fn test_unknown_property_key_is_rejected() {
    let mut editor = Editor::default();
    let id = editor
        .instantiate_from_palette(ElementKind::Paragraph, 100.0, 100.0)
        .expect("placed");
    let before = editor.generate_markup();

    assert!(!editor.set_property(id, "href", "https://example.com"));

    assert_eq!(editor.generate_markup(), before);
}

#[test]
fn test_canvas_background_reaches_both_outputs() {
    let mut editor = Editor::default();

    editor.set_canvas_background("#fef3c7");
    let code = editor.generate();

    assert!(code.markup.contains("background-color: #fef3c7;"));
    assert!(code.stylesheet.contains("background-color: #fef3c7;"));
}

#[test]
fn test_custom_document_title() {
    let config = EditorConfig {
        document_title: "Camp Page".to_string(),
        ..EditorConfig::default()
    };
    let editor = Editor::new(config);

    assert!(editor.generate_markup().contains("<title>Camp Page</title>"));
}

// ============================================================================
// Duplicate / Delete / Select
// ============================================================================

#[test]
fn test_duplicate_offsets_copy() {
    let mut editor = Editor::default();
    let original = editor
        .instantiate_from_palette(ElementKind::Button, 100.0, 75.0)
        .expect("placed");
    assert_at(&editor, original, 50.0, 50.0);
    editor.select(Some(original));

    let copy = editor.duplicate(original).expect("duplicated");

    assert_ne!(copy, original);
    assert_at(&editor, copy, 70.0, 70.0);
    assert_at(&editor, original, 50.0, 50.0);
    let kinds: Vec<_> = editor.elements().iter().map(|e| e.kind()).collect();
    assert_eq!(kinds, vec![ElementKind::Button, ElementKind::Button]);
    assert_eq!(editor.selected().map(|e| e.id()), Some(original));
}

#[test]
fn test_duplicate_copies_edited_properties() {
    let mut editor = Editor::default();
    let original = editor
        .instantiate_from_palette(ElementKind::Heading, 100.0, 100.0)
        .expect("placed");
    editor.set_property(original, "text", "Welcome");

    let copy = editor.duplicate(original).expect("duplicated");

    assert_eq!(
        editor.model().get(copy).expect("copy").properties(),
        editor.model().get(original).expect("original").properties()
    );
}

#[test]
fn test_delete_selected_only_element() {
    let mut editor = Editor::default();
    let id = editor
        .instantiate_from_palette(ElementKind::Footer, 300.0, 300.0)
        .expect("placed");
    editor.select(Some(id));

    assert!(editor.delete(id));

    assert!(editor.elements().is_empty());
    assert!(editor.selected().is_none());
}

#[test]
fn test_operations_on_deleted_element_are_noops() {
    let mut editor = Editor::default();
    let id = editor
        .instantiate_from_palette(ElementKind::Footer, 300.0, 300.0)
        .expect("placed");
    editor.delete(id);

    assert!(!editor.delete(id));
    assert!(!editor.set_position(id, 1.0, 1.0));
    assert!(!editor.set_property(id, "text", "gone"));
    assert!(!editor.select(Some(id)));
    assert!(editor.duplicate(id).is_none());
    assert!(!editor.begin_move(id, 0.0, 0.0));
}

// ============================================================================
// Presets
// ============================================================================

#[test]
fn test_grid_preset_replaces_canvas() {
    let mut editor = Editor::default();
    let mut seen: HashSet<ElementId> = HashSet::new();
    for _ in 0..3 {
        let id = editor
            .instantiate_from_palette(ElementKind::Heading, 200.0, 200.0)
            .expect("placed");
        seen.insert(id);
    }
    editor.select(seen.iter().next().copied());

    assert!(editor.instantiate_from_preset("Grid Layout"));

    assert_eq!(editor.elements().len(), 4);
    assert!(editor.selected().is_none());
    for element in editor.elements() {
        assert!(seen.insert(element.id()), "id reused: {}", element.id());
    }
}

#[test]
fn test_applying_a_preset_twice_gives_fresh_ids() {
    let mut editor = Editor::default();

    editor.instantiate_from_preset("Split Screen Layout");
    let first: HashSet<_> = editor.elements().iter().map(|e| e.id()).collect();
    editor.instantiate_from_preset("Split Screen Layout");
    let second: HashSet<_> = editor.elements().iter().map(|e| e.id()).collect();

    assert_eq!(first.len(), 4);
    assert!(first.is_disjoint(&second));
}

#[test]
fn test_preset_markup_contains_every_template() {
    let mut editor = Editor::default();

    editor.instantiate_from_preset("Single Page Layout");
    let markup = editor.generate_markup();

    assert!(markup.contains("<nav "));
    assert!(markup.contains("Welcome to My Website"));
    assert!(markup.contains("<p "));
}

// ============================================================================
// Command Scripts
// ============================================================================

#[test]
fn test_script_replay() {
    let script = r##"[
        {"op": "instantiate_from_palette", "kind": "heading", "x": 120, "y": 80},
        {"op": "set_property", "id": "$last", "key": "text", "value": "Camp Schedule"},
        {"op": "duplicate", "id": "$last"},
        {"op": "set_position", "id": "$last", "x": 400, "y": 300},
        {"op": "set_canvas_background", "color": "#e0f2fe"},
        {"op": "select"}
    ]"##;
    let mut editor = Editor::default();

    let outcomes: Vec<Outcome> = Command::parse_script(script)
        .expect("valid script")
        .into_iter()
        .map(|command| editor.execute(command))
        .collect();

    assert!(outcomes.iter().all(|o| o.is_effective()), "{outcomes:?}");
    assert_eq!(editor.elements().len(), 2);
    let copy = editor.last_created().expect("copy exists");
    assert_at(&editor, copy, 400.0, 300.0);
    assert_eq!(editor.generate_markup().matches("Camp Schedule").count(), 2);
}

#[test]
fn test_last_alias_without_elements_is_ignored() {
    let mut editor = Editor::default();

    let outcome = editor.execute(Command::Duplicate {
        id: ElementRef::Last,
    });

    assert_eq!(outcome, Outcome::Ignored);
}

#[test]
fn test_script_drag_gesture() {
    let script = r#"[
        {"op": "arm_palette", "kind": "card"},
        {"op": "drop_on_canvas", "x": 150, "y": 125},
        {"op": "begin_move", "id": "$last", "x": 110, "y": 110},
        {"op": "continue_move", "x": 210, "y": 160},
        {"op": "end_move"}
    ]"#;
    let mut editor = Editor::default();

    for command in Command::parse_script(script).expect("valid script") {
        editor.execute(command);
    }

    let id = editor.last_created().expect("card placed");
    assert_at(&editor, id, 200.0, 150.0);
}
