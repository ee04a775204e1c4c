//! Element classification
//!
//! Headings are checked first, then links. Anything else that made it into
//! the collection is a landmark, whichever selector matched it.

use waymark_a11y::Category;
use waymark_dom::{DomTree, NodeId};

use crate::CompiledConfig;

/// Category of an element with the given tag name
pub fn classify(tag_name: &str, config: &CompiledConfig) -> Category {
    if config.header.has_type(tag_name) {
        Category::Header
    } else if config.link.has_type(tag_name) {
        Category::Link
    } else {
        Category::Landmark
    }
}

/// Category of a tree node. Non-elements fall through to `Landmark`.
pub fn classify_node(tree: &DomTree, id: NodeId, config: &CompiledConfig) -> Category {
    match tree.tag_name(id) {
        Some(tag) => classify(tag, config),
        None => Category::Landmark,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    #[test]
    fn test_default_categories() {
        let config = CompiledConfig::default();
        assert_eq!(classify("h1", &config), Category::Header);
        assert_eq!(classify("H4", &config), Category::Header);
        assert_eq!(classify("a", &config), Category::Link);
        assert_eq!(classify("main", &config), Category::Landmark);
        assert_eq!(classify("nav", &config), Category::Landmark);
    }

    #[test]
    fn test_header_wins_over_link() {
        let mut config = Config::default();
        config.selectors.link = "a,h2".to_string();
        config.selectors.landmark = "h2,main".to_string();
        let config = config.compile().unwrap();
        assert_eq!(classify("h2", &config), Category::Header);
    }

    #[test]
    fn test_landmark_is_fallback() {
        let mut config = Config::default();
        config.selectors.landmark = "main".to_string();
        let config = config.compile().unwrap();
        // Not named by any selector, still lands in Landmark
        assert_eq!(classify("div", &config), Category::Landmark);
    }

    #[test]
    fn test_role_attribute_classified_by_tag() {
        let config = CompiledConfig::default();
        let mut tree = DomTree::new();
        let heading_nav = tree.create_element("h3");
        tree.set_attribute(heading_nav, "role", "navigation").unwrap();
        let div_nav = tree.create_element("div");
        tree.set_attribute(div_nav, "role", "navigation").unwrap();

        assert_eq!(classify_node(&tree, heading_nav, &config), Category::Header);
        assert_eq!(classify_node(&tree, div_nav, &config), Category::Landmark);
    }

    #[test]
    fn test_text_node_falls_back() {
        let config = CompiledConfig::default();
        let mut tree = DomTree::new();
        let text = tree.create_text("hi");
        assert_eq!(classify_node(&tree, text, &config), Category::Landmark);
    }
}
