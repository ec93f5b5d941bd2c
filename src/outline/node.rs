//! Document tree types.

use serde::{Deserialize, Serialize};

/// One node of a parsed outline.
///
/// Sections own their headlines and body lines; headlines and body lines
/// may also appear at the top level when no section has been opened yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DocumentNode {
    /// A magazine section with its stories
    Section {
        /// Section title as written in the outline
        title: String,
        /// Headline and body nodes, in document order
        children: Vec<DocumentNode>,
    },
    /// A story headline
    Headline {
        /// Headline text
        text: String,
    },
    /// One physical line of body text
    Body {
        /// Body text
        text: String,
    },
}

impl DocumentNode {
    /// Create an empty section.
    pub fn section(title: impl Into<String>) -> Self {
        DocumentNode::Section {
            title: title.into(),
            children: Vec::new(),
        }
    }

    /// Create a headline node.
    pub fn headline(text: impl Into<String>) -> Self {
        DocumentNode::Headline { text: text.into() }
    }

    /// Create a body node.
    pub fn body(text: impl Into<String>) -> Self {
        DocumentNode::Body { text: text.into() }
    }

    /// Check if this node is a section.
    pub fn is_section(&self) -> bool {
        matches!(self, DocumentNode::Section { .. })
    }

    /// The node's own text (section title, headline or body line).
    pub fn text(&self) -> &str {
        match self {
            DocumentNode::Section { title, .. } => title,
            DocumentNode::Headline { text } | DocumentNode::Body { text } => text,
        }
    }

    /// Child nodes; empty for headlines and body lines.
    pub fn children(&self) -> &[DocumentNode] {
        match self {
            DocumentNode::Section { children, .. } => children,
            _ => &[],
        }
    }
}

/// A parsed outline: the ordered top-level nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outline {
    /// Top-level nodes in document order
    pub nodes: Vec<DocumentNode>,
}

impl Outline {
    /// Create an empty outline.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Append a node, routing headlines and body lines into the open section.
    ///
    /// A section stays open until the next section is pushed.
    pub fn push(&mut self, node: DocumentNode) {
        if node.is_section() {
            self.nodes.push(node);
            return;
        }

        match self.nodes.last_mut() {
            Some(DocumentNode::Section { children, .. }) => children.push(node),
            _ => self.nodes.push(node),
        }
    }

    /// Check if the outline has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over the sections.
    pub fn sections(&self) -> impl Iterator<Item = &DocumentNode> {
        self.nodes.iter().filter(|n| n.is_section())
    }

    /// Total number of nodes, including section children.
    pub fn node_count(&self) -> usize {
        self.flatten().count()
    }

    /// Depth-first iteration as `(depth, node)`; top-level nodes have depth 0.
    pub fn flatten(&self) -> impl Iterator<Item = (usize, &DocumentNode)> {
        self.nodes.iter().flat_map(|node| {
            std::iter::once((0, node)).chain(node.children().iter().map(|child| (1, child)))
        })
    }
}
