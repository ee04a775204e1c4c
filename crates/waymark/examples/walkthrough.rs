//! Example: keyboard walk through a small page
//!
//! Run with `RUST_LOG=waymark=debug` to see the navigator's decisions.

use tracing_subscriber::EnvFilter;
use waymark::a11y::KeyboardShortcut;
use waymark::dom::{Document, NodeId};
use waymark::{Config, Navigator};

fn append(doc: &mut Document, parent: NodeId, tag: &str) -> anyhow::Result<NodeId> {
    let id = doc.tree.create_element(tag);
    doc.tree.append_child(parent, id)?;
    Ok(id)
}

fn report(label: &str, doc: &Document, navigator: &Navigator) {
    match navigator.selection(doc) {
        Some(selection) => println!(
            "{label:>10} -> #{} <{}> {}{}",
            selection.index,
            doc.tree().tag_name(selection.node).unwrap_or("?"),
            selection.category,
            selection.landmark.map(|role| format!(" ({role})")).unwrap_or_default(),
        ),
        None => println!("{label:>10} -> nothing selected"),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let mut doc = Document::new();
    let body = doc.body();
    let nav = append(&mut doc, body, "nav")?;
    doc.tree.set_attribute(nav, "role", "navigation")?;
    append(&mut doc, nav, "a")?;
    let main = append(&mut doc, body, "main")?;
    append(&mut doc, main, "h1")?;
    append(&mut doc, main, "a")?;
    append(&mut doc, main, "h2")?;

    let config = Config::from_json(r#"{ "center_on_select": false }"#)?;
    let mut navigator = Navigator::from_config(&config)?;
    navigator.attach(&mut doc)?;
    println!("waymark v{}: {} elements", waymark::VERSION, navigator.collection().len());

    for code in ["KeyH", "KeyH", "KeyH", "KeyL", "KeyM", "ArrowUp", "KeyM", "KeyT"] {
        navigator.handle_key(&mut doc, &KeyboardShortcut::new(code));
        report(code, &doc, &navigator);
    }

    // Content rendered after load joins the rotation
    let footer = append(&mut doc, body, "footer")?;
    doc.tree.set_attribute(footer, "role", "contentinfo")?;
    append(&mut doc, footer, "h3")?;
    let fired = navigator.on_mutations(&mut doc);
    println!("{fired} new elements, {} tracked", navigator.collection().len());

    navigator.handle_key(&mut doc, &KeyboardShortcut::new("ArrowUp"));
    navigator.handle_key(&mut doc, &KeyboardShortcut::new("KeyH"));
    report("KeyH", &doc, &navigator);
    Ok(())
}
