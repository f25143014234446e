//! Serializable view tree
//!
//! Sections render into [`Node`] values that the frontend turns into markup.
//! A node carries two kinds of classes: a static `layout` string for
//! structure (grid, spacing, breakpoints) that never depends on the theme,
//! and a composed [`StyleDescriptor`] for everything the theme controls.

use page_theme::StyleDescriptor;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::motion::{Entrance, IdleMotion};

// =============================================================================
// Tags and Icons
// =============================================================================

/// Element kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    /// Page root
    Page,
    /// Navigation bar
    Nav,
    /// Top-level content section
    Section,
    /// Page footer
    Footer,
    /// Generic container
    Div,
    /// Page headline
    H1,
    /// Section eyebrow
    H2,
    /// Card heading
    H3,
    /// Footer column heading
    H4,
    /// Paragraph
    P,
    /// Inline text
    Span,
    /// Link
    A,
    /// Button
    Button,
    /// Image
    Img,
    /// Icon glyph
    Icon,
    /// Unordered list
    Ul,
    /// List item
    Li,
    /// Line break
    Br,
}

/// Icon glyphs used on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    /// Hamburger menu
    Menu,
    /// Close / negative mark
    X,
    /// Theme picker button
    Layers,
    /// Theme picker heading
    Palette,
    /// Check mark
    CheckCircle,
    /// Growth badge
    TrendingUp,
    /// Scroll hint
    ChevronDown,
    /// Method bullet
    Sparkles,
    /// Email
    Mail,
    /// Phone
    Phone,
    /// Address
    MapPin,
}

/// Binding between a node and its reveal gate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevealBinding {
    /// Element key reported to the viewport
    pub key: String,
    /// Whether the gate has latched
    pub visible: bool,
}

// =============================================================================
// Node
// =============================================================================

/// One element of the rendered page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    /// Element kind
    pub tag: Tag,
    /// Anchor id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Extra attributes (`href`, `src`, `alt`)
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<&'static str, String>,
    /// Theme-independent structural classes
    #[serde(skip_serializing_if = "is_blank")]
    pub layout: &'static str,
    /// Theme-derived style
    #[serde(skip_serializing_if = "StyleDescriptor::is_empty")]
    pub style: StyleDescriptor,
    /// Text content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Icon glyph, for [`Tag::Icon`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    /// Entrance animation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entrance: Option<Entrance>,
    /// Reveal gate controlling the entrance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reveal: Option<RevealBinding>,
    /// Looping motion while shown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idle: Option<IdleMotion>,
    /// Child nodes
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    /// Create an empty node
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            id: None,
            attrs: BTreeMap::new(),
            layout: "",
            style: StyleDescriptor::default(),
            text: None,
            icon: None,
            entrance: None,
            reveal: None,
            idle: None,
            children: Vec::new(),
        }
    }

    /// Text node
    pub fn text(tag: Tag, text: impl Into<String>) -> Self {
        Self::new(tag).with_text(text)
    }

    /// Icon node
    pub fn icon(icon: Icon) -> Self {
        let mut node = Self::new(Tag::Icon);
        node.icon = Some(icon);
        node
    }

    /// Link node
    pub fn link(href: impl Into<String>, text: impl Into<String>) -> Self {
        Self::text(Tag::A, text).with_attr("href", href)
    }

    /// Image node
    pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self::new(Tag::Img)
            .with_attr("src", src)
            .with_attr("alt", alt)
    }

    /// Set the anchor id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set an attribute
    pub fn with_attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.insert(name, value.into());
        self
    }

    /// Set the structural classes
    pub fn with_layout(mut self, layout: &'static str) -> Self {
        self.layout = layout;
        self
    }

    /// Set the theme-derived style
    pub fn with_style(mut self, style: StyleDescriptor) -> Self {
        self.style = style;
        self
    }

    /// Set the text content
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Attach an entrance animation
    pub fn with_entrance(mut self, entrance: Entrance) -> Self {
        self.entrance = Some(entrance);
        self
    }

    /// Bind the entrance to a reveal gate
    pub fn with_reveal(mut self, key: impl Into<String>, visible: bool) -> Self {
        self.reveal = Some(RevealBinding {
            key: key.into(),
            visible,
        });
        self
    }

    /// Loop `motion` while the node is shown
    pub fn with_idle(mut self, motion: IdleMotion) -> Self {
        self.idle = Some(motion);
        self
    }

    /// Append a child
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Attribute value
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Depth-first iterator over this node and its descendants
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// First node, depth-first, matching `predicate`
    pub fn find(&self, predicate: impl Fn(&Node) -> bool) -> Option<&Node> {
        self.descendants().find(|node| predicate(node))
    }

    /// Node with the given anchor id
    pub fn find_by_id(&self, id: &str) -> Option<&Node> {
        self.find(|node| node.id.as_deref() == Some(id))
    }

    /// Keys of every reveal gate bound in this subtree
    pub fn reveal_keys(&self) -> Vec<&str> {
        self.descendants()
            .filter_map(|node| node.reveal.as_ref().map(|binding| binding.key.as_str()))
            .collect()
    }

    /// Concatenated text of this subtree
    pub fn text_content(&self) -> String {
        self.descendants()
            .filter_map(|node| node.text.as_deref())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn is_blank(layout: &&'static str) -> bool {
    layout.is_empty()
}

/// Depth-first pre-order traversal
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use page_theme::{ColorToken, Fragment};

    fn tree() -> Node {
        Node::new(Tag::Section)
            .with_id("services")
            .with_child(Node::text(Tag::H2, "サービス").with_reveal("services.header", false))
            .with_child(
                Node::new(Tag::Div)
                    .with_child(Node::link("#contact", "無料相談"))
                    .with_child(Node::icon(Icon::Mail)),
            )
    }

    #[test]
    fn test_descendants_are_pre_order() {
        let tags: Vec<Tag> = tree().descendants().map(|node| node.tag).collect();
        assert_eq!(tags, vec![Tag::Section, Tag::H2, Tag::Div, Tag::A, Tag::Icon]);
    }

    #[test]
    fn test_find_helpers() {
        let tree = tree();
        assert!(tree.find_by_id("services").is_some());
        assert!(tree.find_by_id("missing").is_none());

        let link = tree.find(|node| node.tag == Tag::A).unwrap();
        assert_eq!(link.attr("href"), Some("#contact"));
    }

    #[test]
    fn test_reveal_keys_and_text() {
        let tree = tree();
        assert_eq!(tree.reveal_keys(), vec!["services.header"]);
        assert_eq!(tree.text_content(), "サービス 無料相談");
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let node = Node::text(Tag::P, "hello")
            .with_style(page_theme::compose([Some(Fragment::new().text(ColorToken::BLACK))]));
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["tag"], "p");
        assert_eq!(json["text"], "hello");
        assert_eq!(json["style"], serde_json::json!(["text-black"]));
        assert!(json.get("children").is_none());
        assert!(json.get("layout").is_none());
    }
}
