//! Logical render tree produced by the header renderers
//!
//! A `NavNode` tree describes the shape of the header markup without tying
//! it to a view runtime. The Leptos components and the static HTML writer
//! both walk the same tree.

use crate::visibility::VisibilityState;
use serde::{Deserialize, Serialize};

/// One node of the header render tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum NavNode {
    Link(Link),
    Dropdown(Dropdown),
    Group(Group),
    List(List),
    Image(Image),
    Toggle(Toggle),
    Text { text: String },
}

impl NavNode {
    pub fn text(text: impl Into<String>) -> Self {
        NavNode::Text { text: text.into() }
    }

    /// Depth-first iterator over this node and all of its descendants
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    /// Direct children, in render order
    pub fn children(&self) -> Vec<&NavNode> {
        match self {
            NavNode::Dropdown(d) => d.panel.children.iter().collect(),
            NavNode::Group(g) => g.children.iter().collect(),
            NavNode::List(l) => l.items.iter().map(|i| &i.content).collect(),
            NavNode::Toggle(t) => {
                let mut out: Vec<&NavNode> = t.trigger.iter().collect();
                if t.state.is_shown() {
                    out.extend(t.content.iter());
                }
                out
            }
            NavNode::Link(l) => l.children.iter().collect(),
            NavNode::Image(_) | NavNode::Text { .. } => Vec::new(),
        }
    }

    /// Every link reachable from this node
    pub fn links(&self) -> Vec<&Link> {
        self.walk()
            .filter_map(|n| match n {
                NavNode::Link(link) => Some(link),
                _ => None,
            })
            .collect()
    }

    /// Every dropdown reachable from this node
    pub fn dropdowns(&self) -> Vec<&Dropdown> {
        self.walk()
            .filter_map(|n| match n {
                NavNode::Dropdown(d) => Some(d),
                _ => None,
            })
            .collect()
    }

    /// Find the first group carrying `class` among its classes
    pub fn find_group(&self, class: &str) -> Option<&Group> {
        self.walk().find_map(|n| match n {
            NavNode::Group(g) if has_class(g.class.as_deref(), class) => Some(g),
            _ => None,
        })
    }
}

impl From<Link> for NavNode {
    fn from(link: Link) -> Self {
        NavNode::Link(link)
    }
}

impl From<Dropdown> for NavNode {
    fn from(dropdown: Dropdown) -> Self {
        NavNode::Dropdown(dropdown)
    }
}

impl From<Group> for NavNode {
    fn from(group: Group) -> Self {
        NavNode::Group(group)
    }
}

impl From<Image> for NavNode {
    fn from(image: Image) -> Self {
        NavNode::Image(image)
    }
}

/// Depth-first walk over a render tree
pub struct Walk<'a> {
    stack: Vec<&'a NavNode>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a NavNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().into_iter().rev());
        Some(node)
    }
}

fn has_class(classes: Option<&str>, wanted: &str) -> bool {
    classes.is_some_and(|c| c.split_whitespace().any(|c| c == wanted))
}

/// Plain anchor
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Link {
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    /// Stable identity among siblings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Nodes rendered inside the anchor after the label
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavNode>,
}

impl Link {
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
            class: None,
            key: None,
            children: Vec::new(),
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_child(mut self, child: impl Into<NavNode>) -> Self {
        self.children.push(child.into());
        self
    }
}

/// How a dropdown panel is opened by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenOn {
    /// Pointer enter/leave over the dropdown
    #[default]
    Hover,
    /// Click (or Enter) on the trigger
    Click,
}

/// Expandable menu: trigger paired with a content panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dropdown {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    pub trigger: Trigger,
    #[serde(default)]
    pub panel: Panel,
    #[serde(default)]
    pub open_on: OpenOn,
}

/// Label part of a dropdown
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Trigger {
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    /// Render the caret indicator after the label
    #[serde(default)]
    pub caret: bool,
    /// Expose the trigger as a focusable button (role + tabindex)
    #[serde(default)]
    pub as_button: bool,
}

/// Body of a dropdown
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Panel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default)]
    pub children: Vec<NavNode>,
}

/// Element tag used by a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    #[default]
    Div,
    Header,
    Nav,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::Header => "header",
            Tag::Nav => "nav",
        }
    }
}

/// Wrapper element with a class and children
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Group {
    #[serde(default)]
    pub tag: Tag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default)]
    pub children: Vec<NavNode>,
}

impl Group {
    pub fn new(tag: Tag, class: impl Into<String>, children: Vec<NavNode>) -> Self {
        Self {
            tag,
            class: Some(class.into()),
            children,
        }
    }

    pub fn div(class: impl Into<String>, children: Vec<NavNode>) -> Self {
        Self::new(Tag::Div, class, children)
    }
}

/// Unordered list; each item becomes an `<li>`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct List {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default)]
    pub items: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    pub content: NavNode,
}

impl ListItem {
    pub fn new(content: NavNode) -> Self {
        Self {
            class: None,
            content,
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Image {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(default)]
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

/// Region whose extra content is shown only while its state is shown
///
/// The trigger nodes are always rendered; `content` only when
/// `state.is_shown()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toggle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default)]
    pub trigger: Vec<NavNode>,
    #[serde(default)]
    pub content: Vec<NavNode>,
    #[serde(default)]
    pub state: VisibilityState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prebuilt_tree_from_json() {
        let json = r#"[
            {"node": "link", "href": "/a", "label": "A"},
            {"node": "text", "text": "plain"}
        ]"#;
        let nodes: Vec<NavNode> = serde_json::from_str(json).unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0], NavNode::Link(Link::new("/a", "A")));
        assert_eq!(nodes[1], NavNode::text("plain"));
    }

    #[test]
    fn test_walk_is_depth_first_in_order() {
        let tree = NavNode::Group(Group::div(
            "outer",
            vec![
                Link::new("/1", "one").into(),
                NavNode::Group(Group::div("inner", vec![Link::new("/2", "two").into()])),
                Link::new("/3", "three").into(),
            ],
        ));

        let hrefs: Vec<&str> = tree.links().iter().map(|l| l.href.as_str()).collect();
        assert_eq!(hrefs, vec!["/1", "/2", "/3"]);
        assert!(tree.find_group("inner").is_some());
        assert!(tree.find_group("missing").is_none());
    }

    #[test]
    fn test_hidden_toggle_content_not_walked() {
        let toggle = Toggle {
            class: None,
            trigger: vec![NavNode::text("trigger")],
            content: vec![Link::new("#", "hidden").into()],
            state: VisibilityState::Hidden,
        };
        let node = NavNode::Toggle(toggle.clone());
        assert!(node.links().is_empty());

        let shown = NavNode::Toggle(Toggle {
            state: VisibilityState::Hovered,
            ..toggle
        });
        assert_eq!(shown.links().len(), 1);
    }

    #[test]
    fn test_has_class_matches_whole_words() {
        assert!(has_class(Some("col-auto right-ct"), "right-ct"));
        assert!(!has_class(Some("col-auto right-ct"), "right"));
        assert!(!has_class(None, "right-ct"));
    }
}
