use std::borrow::Cow;

use super::{Node, NodeKind, ParseResult, TypeHint};

/// Read-only accessors over a [`ParseResult`].
///
/// Out-of-range indices yield neutral values (no kind, no children, empty
/// text) instead of panicking.
#[derive(Debug, Clone, Copy)]
pub struct Navigator<'a> {
    input: &'a [u8],
    nodes: &'a [Node],
    roots: &'a [usize],
}

impl<'a> Navigator<'a> {
    pub fn new(result: &'a ParseResult<'_>) -> Self {
        Self {
            input: result.input,
            nodes: &result.nodes,
            roots: &result.roots,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn input(&self) -> &'a [u8] {
        self.input
    }

    pub fn roots(&self) -> &'a [usize] {
        self.roots
    }

    pub fn node(&self, index: usize) -> Option<&'a Node> {
        self.nodes.get(index)
    }

    pub fn kind_of(&self, index: usize) -> Option<NodeKind> {
        self.node(index).map(|node| node.kind)
    }

    pub fn parent_of(&self, index: usize) -> Option<usize> {
        self.node(index).and_then(|node| node.parent)
    }

    pub fn children_of(&self, index: usize) -> &'a [usize] {
        self.node(index).map_or(&[][..], |node| node.children.as_slice())
    }

    pub fn type_hint_of(&self, index: usize) -> TypeHint {
        self.node(index).map_or(TypeHint::None, |node| node.type_hint)
    }

    pub fn bytes_of(&self, index: usize) -> &'a [u8] {
        match self.node(index) {
            Some(node) if !node.span.is_empty() => self
                .input
                .get(node.span.start..node.span.end())
                .unwrap_or(&[]),
            _ => &[],
        }
    }

    /// Decodes the node's span, borrowing when the bytes are valid UTF-8.
    pub fn text_of(&self, index: usize) -> Cow<'a, str> {
        let bytes = self.bytes_of(index);
        if bytes.is_empty() {
            return Cow::Borrowed("");
        }
        String::from_utf8_lossy(bytes)
    }
}
