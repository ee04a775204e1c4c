//! Document - High-level document API
//!
//! Wraps the tree with the page-level state the navigator touches:
//! focus, viewport scroll and injected style rules.

use crate::{DomResult, DomTree, MutationRecord, NodeId};

/// HTML Document
#[derive(Debug)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    html_element: NodeId,
    head_element: NodeId,
    body_element: NodeId,
    /// Currently focused element
    focused: Option<NodeId>,
    /// Viewport scroll offset (x, y)
    scroll: (f64, f64),
    /// Viewport height in CSS pixels
    inner_height: f64,
}

impl Document {
    /// Create a document with `<html>`, `<head>` and `<body>`
    pub fn new() -> Self {
        let mut tree = DomTree::new();

        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        // Freshly created nodes under the root cannot fail to attach
        let _ = tree.append_child(tree.root(), html);
        let _ = tree.append_child(html, head);
        let _ = tree.append_child(html, body);
        tree.take_records();

        Self {
            tree,
            html_element: html,
            head_element: head,
            body_element: body,
            focused: None,
            scroll: (0.0, 0.0),
            inner_height: 768.0,
        }
    }

    /// Create an empty document (no structure)
    pub fn empty() -> Self {
        Self {
            tree: DomTree::new(),
            html_element: NodeId::NONE,
            head_element: NodeId::NONE,
            body_element: NodeId::NONE,
            focused: None,
            scroll: (0.0, 0.0),
            inner_height: 768.0,
        }
    }

    /// Get <html> element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get <head> element
    pub fn head(&self) -> NodeId {
        self.head_element
    }

    /// Get <body> element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    /// Drain mutation records queued since the last call
    pub fn take_records(&mut self) -> Vec<MutationRecord> {
        self.tree.take_records()
    }

    /// Focus an element. Only connected elements can take focus.
    pub fn focus(&mut self, id: NodeId) -> bool {
        if self.tree.element(id).is_none() || !self.tree.is_connected(id) {
            return false;
        }
        self.focused = Some(id);
        true
    }

    /// Remove focus from the focused element
    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// The focused element, if it is still in the document
    pub fn active_element(&self) -> Option<NodeId> {
        self.focused.filter(|&id| self.tree.is_connected(id))
    }

    pub fn inner_height(&self) -> f64 {
        self.inner_height
    }

    pub fn set_inner_height(&mut self, height: f64) {
        self.inner_height = height.max(0.0);
    }

    /// Scroll the viewport; negative offsets clamp to the document origin
    pub fn scroll_to(&mut self, x: f64, y: f64) {
        self.scroll = (x.max(0.0), y.max(0.0));
    }

    pub fn scroll_position(&self) -> (f64, f64) {
        self.scroll
    }

    /// Append a `<style>` element holding `rule` to `<head>`
    pub fn inject_style(&mut self, rule: &str) -> DomResult<NodeId> {
        let parent = if self.head_element.is_valid() {
            self.head_element
        } else {
            self.tree.root()
        };
        let style = self.tree.create_element("style");
        let text = self.tree.create_text(rule);
        self.tree.append_child(style, text)?;
        self.tree.append_child(parent, style)?;
        tracing::debug!(rule, "injected style");
        Ok(style)
    }

    /// Text of every `<style>` element in document order
    pub fn style_rules(&self) -> Vec<String> {
        self.tree
            .descendants(self.tree.root())
            .filter(|&id| self.tree.tag_name(id) == Some("style"))
            .map(|id| self.tree.text_content(id))
            .collect()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
