//! Traversal of a parsed document.
//!
//! [`walk`] drives a [`Visitor`] through the tree in document order: each
//! object root, its fields, and each field's values. Fields with several
//! values are reported as arrays, fields with none as absent. Concrete
//! outputs (JSON text, `serde_json::Value`) are just different visitors.

pub mod json;
pub mod value;

use std::borrow::Cow;

use smallvec::SmallVec;

use crate::arena::{Navigator, NodeKind, TypeHint};
use crate::num::number::is_finite_json_number;

pub trait Visitor<'a> {
    fn begin_document(&mut self, _root_count: usize) {}

    fn end_document(&mut self, _root_count: usize) {}

    fn begin_object(&mut self, nav: &Navigator<'a>, index: usize);

    fn end_object(&mut self, nav: &Navigator<'a>, index: usize);

    fn begin_field(&mut self, nav: &Navigator<'a>, index: usize);

    fn end_field(&mut self, nav: &Navigator<'a>, index: usize);

    fn begin_array(&mut self, len: usize);

    fn end_array(&mut self);

    /// A field that carries no value at all.
    fn absent(&mut self);

    fn value(&mut self, nav: &Navigator<'a>, index: usize);
}

/// Walks every object root in order. Children of unexpected kinds are skipped.
pub fn walk<'a, V: Visitor<'a>>(nav: &Navigator<'a>, visitor: &mut V) {
    let roots: SmallVec<[usize; 4]> = nav
        .roots()
        .iter()
        .copied()
        .filter(|&root| nav.kind_of(root) == Some(NodeKind::Object))
        .collect();

    visitor.begin_document(roots.len());
    for &root in &roots {
        walk_object(nav, root, visitor);
    }
    visitor.end_document(roots.len());
}

fn walk_object<'a, V: Visitor<'a>>(nav: &Navigator<'a>, index: usize, visitor: &mut V) {
    visitor.begin_object(nav, index);
    for &field in nav.children_of(index) {
        if nav.kind_of(field) == Some(NodeKind::Field) {
            walk_field(nav, field, visitor);
        }
    }
    visitor.end_object(nav, index);
}

fn walk_field<'a, V: Visitor<'a>>(nav: &Navigator<'a>, index: usize, visitor: &mut V) {
    let values: SmallVec<[usize; 4]> = nav
        .children_of(index)
        .iter()
        .copied()
        .filter(|&child| nav.kind_of(child) == Some(NodeKind::Value))
        .collect();

    visitor.begin_field(nav, index);
    match values.as_slice() {
        [] => visitor.absent(),
        [single] => visitor.value(nav, *single),
        many => {
            visitor.begin_array(many.len());
            for &value in many {
                visitor.value(nav, value);
            }
            visitor.end_array();
        }
    }
    visitor.end_field(nav, index);
}

/// How a value renders once its type hint is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scalar<'a> {
    Null,
    Bool(bool),
    /// Text already checked against the JSON number grammar and `f64` range.
    Number(Cow<'a, str>),
    String(Cow<'a, str>),
}

/// Applies a type hint to raw value text. Text that does not fit the hint
/// becomes `Null`; this never fails.
pub fn scalar<'a>(text: Cow<'a, str>, hint: TypeHint) -> Scalar<'a> {
    match hint {
        TypeHint::Number | TypeHint::Float => {
            if is_finite_json_number(&text) {
                Scalar::Number(text)
            } else {
                Scalar::Null
            }
        }
        TypeHint::Boolean => {
            if text.eq_ignore_ascii_case("true") {
                Scalar::Bool(true)
            } else if text.eq_ignore_ascii_case("false") {
                Scalar::Bool(false)
            } else {
                Scalar::Null
            }
        }
        TypeHint::Null => Scalar::Null,
        TypeHint::DateTime | TypeHint::String | TypeHint::None => Scalar::String(text),
    }
}

impl<'a> Scalar<'a> {
    pub fn of(nav: &Navigator<'a>, index: usize) -> Self {
        scalar(nav.text_of(index), nav.type_hint_of(index))
    }
}
