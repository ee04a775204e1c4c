//! Focus/Highlight Controller
//!
//! Applies the navigation engine's decisions to a live document.

use waymark_a11y::{Category, HighlightIndicator};
use waymark_dom::{Document, DomResult, NodeId};

use crate::{CompiledConfig, classify_node};

/// Inject the highlight rule into `<head>`
pub fn inject_highlight_style(document: &mut Document, indicator: &HighlightIndicator) -> DomResult<NodeId> {
    document.inject_style(&indicator.css_rule())
}

/// Document-backed [`NavigationHost`](crate::NavigationHost)
pub struct DocumentHighlighter<'a> {
    document: &'a mut Document,
    config: &'a CompiledConfig,
}

impl<'a> DocumentHighlighter<'a> {
    pub fn new(document: &'a mut Document, config: &'a CompiledConfig) -> Self {
        Self { document, config }
    }

    /// Scroll so the element's top sits mid-viewport
    fn center(&mut self, element: NodeId) {
        let top = self.document.tree().document_offset_top(element) - self.document.inner_height() / 2.0;
        self.document.scroll_to(0.0, top);
    }
}

impl crate::NavigationHost<NodeId> for DocumentHighlighter<'_> {
    fn category_of(&self, element: &NodeId) -> Category {
        classify_node(self.document.tree(), *element, self.config)
    }

    fn clear(&mut self, element: &NodeId) {
        let class_name = &self.config.highlight.class_name;
        if let Some(elem) = self.document.tree_mut().element_mut(*element) {
            elem.classes.remove(class_name);
        }
    }

    fn select(&mut self, element: &NodeId) {
        let class_name = &self.config.highlight.class_name;
        let Some(elem) = self.document.tree_mut().element_mut(*element) else {
            return;
        };
        elem.classes.add(class_name);
        if !self.document.focus(*element) {
            tracing::debug!(?element, "selected element could not take focus");
        }
        if self.config.center_on_select {
            self.center(*element);
        }
    }

    fn scroll_to_origin(&mut self) {
        self.document.scroll_to(0.0, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NavigationHost;

    fn page() -> (Document, NodeId) {
        let mut doc = Document::new();
        doc.set_inner_height(400.0);
        let h1 = doc.tree.create_element("h1");
        doc.tree.append_child(doc.body(), h1).unwrap();
        doc.tree.set_offset(h1, 900.0, Some(doc.body())).unwrap();
        doc.tree.set_offset(doc.body(), 100.0, None).unwrap();
        (doc, h1)
    }

    #[test]
    fn test_select_marks_focuses_and_centers() {
        let (mut doc, h1) = page();
        let config = CompiledConfig::default();
        let mut host = DocumentHighlighter::new(&mut doc, &config);
        host.select(&h1);

        let class_name = &config.highlight.class_name;
        assert!(doc.tree().element(h1).unwrap().classes.contains(class_name));
        assert_eq!(doc.active_element(), Some(h1));
        assert_eq!(doc.scroll_position(), (0.0, 800.0));
    }

    #[test]
    fn test_centering_can_be_disabled() {
        let (mut doc, h1) = page();
        let mut config = CompiledConfig::default();
        config.center_on_select = false;
        DocumentHighlighter::new(&mut doc, &config).select(&h1);
        assert_eq!(doc.scroll_position(), (0.0, 0.0));
    }

    #[test]
    fn test_clear_removes_class() {
        let (mut doc, h1) = page();
        let config = CompiledConfig::default();
        let mut host = DocumentHighlighter::new(&mut doc, &config);
        host.select(&h1);
        host.clear(&h1);
        host.scroll_to_origin();
        assert!(doc.tree().element(h1).unwrap().classes.is_empty());
        assert_eq!(doc.scroll_position(), (0.0, 0.0));
    }

    #[test]
    fn test_detached_element_tolerated() {
        let (mut doc, h1) = page();
        doc.tree.remove_child(doc.body(), h1).unwrap();
        let config = CompiledConfig::default();
        let mut host = DocumentHighlighter::new(&mut doc, &config);
        host.select(&h1);
        host.clear(&NodeId::NONE);
        assert_eq!(doc.active_element(), None);
    }

    #[test]
    fn test_inject_style() {
        let mut doc = Document::new();
        inject_highlight_style(&mut doc, &HighlightIndicator::default()).unwrap();
        assert_eq!(doc.style_rules(), vec![HighlightIndicator::default().css_rule()]);
    }
}
