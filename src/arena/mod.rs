pub mod navigator;

use smallvec::SmallVec;

use crate::constants::{
    HINT_BOOLEAN, HINT_DATETIME, HINT_FLOAT, HINT_NULL, HINT_NUMBER, HINT_STRING,
};

pub use navigator::Navigator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Object,
    Field,
    Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeHint {
    #[default]
    None,
    Number,
    Float,
    Boolean,
    DateTime,
    String,
    Null,
}

impl TypeHint {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            HINT_NUMBER => Some(TypeHint::Number),
            HINT_FLOAT => Some(TypeHint::Float),
            HINT_BOOLEAN => Some(TypeHint::Boolean),
            HINT_DATETIME => Some(TypeHint::DateTime),
            HINT_STRING => Some(TypeHint::String),
            HINT_NULL => Some(TypeHint::Null),
            _ => None,
        }
    }

    pub fn code(self) -> Option<u8> {
        match self {
            TypeHint::None => None,
            TypeHint::Number => Some(HINT_NUMBER),
            TypeHint::Float => Some(HINT_FLOAT),
            TypeHint::Boolean => Some(HINT_BOOLEAN),
            TypeHint::DateTime => Some(HINT_DATETIME),
            TypeHint::String => Some(HINT_STRING),
            TypeHint::Null => Some(HINT_NULL),
        }
    }
}

/// A `(start, len)` window into the parsed buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub len: usize,
}

impl Span {
    pub const EMPTY: Span = Span { start: 0, len: 0 };

    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    pub fn end(&self) -> usize {
        self.start.saturating_add(self.len)
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    /// Offset of the marker that produced the node. Implicit nodes carry the
    /// offset of the marker that forced them into existence.
    pub token_offset: usize,
    pub span: Span,
    pub parent: Option<usize>,
    pub children: SmallVec<[usize; 4]>,
    pub type_hint: TypeHint,
    pub implicit: bool,
}

impl Node {
    pub(crate) fn new(kind: NodeKind, token_offset: usize, span: Span, parent: Option<usize>) -> Self {
        Self {
            kind,
            token_offset,
            span,
            parent,
            children: SmallVec::new(),
            type_hint: TypeHint::None,
            implicit: false,
        }
    }

    pub(crate) fn implicit(kind: NodeKind, token_offset: usize, parent: Option<usize>) -> Self {
        let mut node = Self::new(kind, token_offset, Span::EMPTY, parent);
        node.implicit = true;
        node
    }
}

/// The node arena produced by one build, borrowing the buffer it indexes into.
///
/// Node indices are stable for the lifetime of the result; nothing is ever
/// removed or reordered once the builder hands it out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult<'a> {
    pub input: &'a [u8],
    pub nodes: Vec<Node>,
    pub roots: Vec<usize>,
}

impl<'a> ParseResult<'a> {
    pub fn empty(input: &'a [u8]) -> Self {
        Self {
            input,
            nodes: Vec::new(),
            roots: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn navigator(&self) -> Navigator<'_> {
        Navigator::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    #[case(b'n', TypeHint::Number)]
    #[case(b'f', TypeHint::Float)]
    #[case(b'b', TypeHint::Boolean)]
    #[case(b'd', TypeHint::DateTime)]
    #[case(b's', TypeHint::String)]
    #[case(b'z', TypeHint::Null)]
    fn test_type_hint_codes(#[case] code: u8, #[case] hint: TypeHint) {
        assert_eq!(TypeHint::from_code(code), Some(hint));
        assert_eq!(hint.code(), Some(code));
    }

    #[rstest::rstest]
    fn test_unknown_hint_code() {
        assert_eq!(TypeHint::from_code(b'x'), None);
        assert_eq!(TypeHint::from_code(b'N'), None);
        assert_eq!(TypeHint::None.code(), None);
    }

    #[rstest::rstest]
    fn test_span_end_saturates() {
        assert_eq!(Span::new(4, 3).end(), 7);
        assert_eq!(Span::new(usize::MAX, 2).end(), usize::MAX);
        assert!(Span::EMPTY.is_empty());
    }
}
