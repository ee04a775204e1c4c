//! Integration tests - key presses against a live document
//!
//! Tests the complete workflow: Document → attach → keys / mutations → selection

use waymark::a11y::{Category, Command, Direction, KeyboardShortcut};
use waymark::dom::{Document, NodeId};
use waymark::{Config, Navigator};

fn key(code: &str) -> KeyboardShortcut {
    KeyboardShortcut::new(code)
}

fn append(doc: &mut Document, parent: NodeId, tag: &str) -> NodeId {
    let id = doc.tree.create_element(tag);
    doc.tree.append_child(parent, id).unwrap();
    id
}

fn highlighted(doc: &Document, navigator: &Navigator) -> Vec<NodeId> {
    let class_name = &navigator.config().highlight.class_name;
    doc.tree()
        .descendants(doc.tree().root())
        .filter(|&id| doc.tree().element(id).is_some_and(|e| e.classes.contains(class_name)))
        .collect()
}

// ============================================================================
// TRAVERSAL
// ============================================================================

#[test]
fn test_header_link_header_landmark_cycle() {
    let mut doc = Document::new();
    let body = doc.body();
    let h1 = append(&mut doc, body, "h1");
    let _a = append(&mut doc, body, "a");
    let h2 = append(&mut doc, body, "h2");
    let _main = append(&mut doc, body, "main");

    let mut navigator = Navigator::from_config(&Config::default()).unwrap();
    navigator.attach(&mut doc).unwrap();
    assert_eq!(navigator.collection().len(), 4);

    let mut visited = Vec::new();
    for _ in 0..6 {
        navigator.handle_key(&mut doc, &key("KeyH"));
        visited.push(navigator.cursor());
    }
    assert_eq!(visited, vec![Some(0), Some(2), None, Some(0), Some(2), None]);
    assert!(highlighted(&doc, &navigator).is_empty());

    navigator.handle_key(&mut doc, &key("ArrowUp"));
    navigator.handle_key(&mut doc, &key("KeyH"));
    assert_eq!(highlighted(&doc, &navigator), vec![h2]);
    navigator.handle_key(&mut doc, &key("KeyH"));
    assert_eq!(highlighted(&doc, &navigator), vec![h1]);
    navigator.handle_key(&mut doc, &key("KeyH"));
    assert_eq!(navigator.cursor(), None);
    assert!(highlighted(&doc, &navigator).is_empty());
}

#[test]
fn test_switching_category_mid_traversal() {
    let mut doc = Document::new();
    let body = doc.body();
    append(&mut doc, body, "h1");
    let a1 = append(&mut doc, body, "a");
    append(&mut doc, body, "h2");
    let a2 = append(&mut doc, body, "a");

    let mut navigator = Navigator::from_config(&Config::default()).unwrap();
    navigator.attach(&mut doc).unwrap();

    navigator.handle_key(&mut doc, &key("KeyH"));
    navigator.handle_key(&mut doc, &key("KeyH"));
    // From the second heading the next link is the last element
    navigator.handle_key(&mut doc, &key("KeyL"));
    assert_eq!(doc.active_element(), Some(a2));
    // At the end: wraps to the first link
    navigator.handle_key(&mut doc, &key("KeyL"));
    assert_eq!(doc.active_element(), Some(a1));
    assert_eq!(highlighted(&doc, &navigator), vec![a1]);
}

#[test]
fn test_empty_page_keys_are_harmless() {
    let mut doc = Document::new();
    let mut navigator = Navigator::from_config(&Config::default()).unwrap();
    navigator.attach(&mut doc).unwrap();

    for code in ["KeyH", "KeyL", "KeyM", "ArrowUp", "KeyH", "KeyT"] {
        navigator.handle_key(&mut doc, &key(code));
    }
    assert_eq!(navigator.cursor(), None);
    assert_eq!(doc.active_element(), None);
}

#[test]
fn test_selection_scrolls_to_center() {
    let mut doc = Document::new();
    doc.set_inner_height(600.0);
    let body = doc.body();
    let section = append(&mut doc, body, "section");
    let h2 = append(&mut doc, section, "h2");
    doc.tree.set_offset(section, 1200.0, None).unwrap();
    doc.tree.set_offset(h2, 150.0, Some(section)).unwrap();

    let mut navigator = Navigator::from_config(&Config::default()).unwrap();
    navigator.attach(&mut doc).unwrap();
    navigator.handle_key(&mut doc, &key("KeyH"));
    assert_eq!(doc.scroll_position(), (0.0, 1050.0));

    navigator.handle_key(&mut doc, &key("KeyT"));
    assert_eq!(doc.scroll_position(), (0.0, 0.0));
}

// ============================================================================
// LIVE MUTATIONS
// ============================================================================

#[test]
fn test_late_content_becomes_navigable() {
    let mut doc = Document::new();
    let body = doc.body();
    let h1 = append(&mut doc, body, "h1");
    let mut navigator = Navigator::from_config(&Config::default()).unwrap();
    navigator.attach(&mut doc).unwrap();

    // A script renders an article after load
    let article = doc.tree.create_element("article");
    let h2 = doc.tree.create_element("h2");
    let link = doc.tree.create_element("a");
    doc.tree.append_child(article, h2).unwrap();
    doc.tree.append_child(article, link).unwrap();
    doc.tree.append_child(body, article).unwrap();

    assert_eq!(navigator.on_mutations(&mut doc), 2);
    assert_eq!(navigator.collection(), &[h1, h2, link]);

    navigator.handle_key(&mut doc, &key("KeyH"));
    navigator.handle_key(&mut doc, &key("KeyH"));
    assert_eq!(doc.active_element(), Some(h2));
}

#[test]
fn test_repeated_batches_do_not_rebuild_again() {
    let mut doc = Document::new();
    let body = doc.body();
    let mut navigator = Navigator::from_config(&Config::default()).unwrap();
    navigator.attach(&mut doc).unwrap();

    append(&mut doc, body, "h1");
    assert_eq!(navigator.on_mutations(&mut doc), 1);
    for _ in 0..5 {
        append(&mut doc, body, "div");
        assert_eq!(navigator.on_mutations(&mut doc), 0);
    }
    assert_eq!(navigator.collection().len(), 1);
}

#[test]
fn test_readded_original_element_is_not_new() {
    let mut doc = Document::new();
    let body = doc.body();
    let h1 = append(&mut doc, body, "h1");
    let mut navigator = Navigator::from_config(&Config::default()).unwrap();
    navigator.attach(&mut doc).unwrap();

    doc.tree.remove_child(body, h1).unwrap();
    doc.tree.append_child(body, h1).unwrap();
    assert_eq!(navigator.on_mutations(&mut doc), 0);
}

#[test]
fn test_cursor_survives_shrinking_collection() {
    let mut doc = Document::new();
    let body = doc.body();
    let list = append(&mut doc, body, "div");
    for _ in 0..5 {
        append(&mut doc, list, "a");
    }
    let mut navigator = Navigator::from_config(&Config::default()).unwrap();
    navigator.attach(&mut doc).unwrap();

    navigator.handle_key(&mut doc, &key("ArrowUp"));
    navigator.handle_key(&mut doc, &key("KeyL"));
    assert_eq!(navigator.cursor(), Some(4));

    // The list is replaced by a single heading
    doc.tree.clear_children(body).unwrap();
    let h1 = append(&mut doc, body, "h1");
    assert_eq!(navigator.on_mutations(&mut doc), 1);
    assert_eq!(navigator.collection(), &[h1]);

    navigator.handle_key(&mut doc, &key("KeyL"));
    assert_eq!(navigator.cursor(), None);
    navigator.handle_key(&mut doc, &key("KeyH"));
    assert_eq!(navigator.cursor(), Some(0));
    assert_eq!(doc.active_element(), Some(h1));
}

// ============================================================================
// CONFIGURATION
// ============================================================================

#[test]
fn test_custom_selectors_and_bindings() {
    let config = Config::from_json(
        r#"{
            "selectors": { "header": "h1,[aria-level]", "link": "a,button", "landmark": "aside" },
            "highlight": { "class_name": "kb-focus" },
            "bindings": [
                { "key": "KeyN", "command": "navigate-link" },
                { "key": "Shift+KeyN", "command": "direction-backward" }
            ]
        }"#,
    )
    .unwrap();
    let mut navigator = Navigator::from_config(&config).unwrap();

    let mut doc = Document::new();
    let body = doc.body();
    let a = append(&mut doc, body, "a");
    let aside = append(&mut doc, body, "aside");
    let button = append(&mut doc, body, "button");
    navigator.attach(&mut doc).unwrap();
    assert_eq!(navigator.collection(), &[a, aside, button]);
    assert!(doc.style_rules()[0].starts_with(".kb-focus{"));

    let outcome = navigator.handle_key(&mut doc, &key("KeyN"));
    assert_eq!(outcome.command, Some(Command::NavigateCategory(Category::Link)));
    assert_eq!(doc.active_element(), Some(a));
    navigator.handle_key(&mut doc, &key("KeyN"));
    assert_eq!(doc.active_element(), Some(button));

    navigator.handle_key(&mut doc, &KeyboardShortcut::new("KeyN").shift());
    assert_eq!(navigator.direction(), Direction::Backward);
    navigator.handle_key(&mut doc, &key("KeyN"));
    assert_eq!(doc.active_element(), Some(a));
    assert!(doc.tree().element(a).unwrap().classes.contains("kb-focus"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = Config::from_json(r#"{ "selectors": { "header": "h1 > span" } }"#).unwrap();
    assert!(Navigator::from_config(&config).is_err());
}
