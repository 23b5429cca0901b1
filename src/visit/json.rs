use smallvec::SmallVec;

use super::{walk, Scalar, Visitor};
use crate::arena::{Navigator, ParseResult};
use crate::text::string::write_json_string_into;

/// Renders the document as compact JSON text.
///
/// `None` when there is no object root, a single object for one root, and an
/// array of objects otherwise.
pub fn to_json(result: &ParseResult<'_>) -> Option<String> {
    let nav = result.navigator();
    if nav.roots().is_empty() {
        return None;
    }
    let mut visitor = JsonVisitor::with_capacity(result.input.len() + result.input.len() / 2);
    walk(&nav, &mut visitor);
    if visitor.out.is_empty() {
        return None;
    }
    Some(visitor.out)
}

struct JsonVisitor {
    out: String,
    // One entry per open container: whether the next item needs a comma.
    pending_comma: SmallVec<[bool; 4]>,
}

impl JsonVisitor {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
            pending_comma: SmallVec::new(),
        }
    }

    fn separator(&mut self) {
        if let Some(pending) = self.pending_comma.last_mut() {
            if *pending {
                self.out.push(',');
            }
            *pending = true;
        }
    }

    fn open(&mut self, bracket: char) {
        self.out.push(bracket);
        self.pending_comma.push(false);
    }

    fn close(&mut self, bracket: char) {
        self.pending_comma.pop();
        self.out.push(bracket);
    }
}

impl<'a> Visitor<'a> for JsonVisitor {
    fn begin_document(&mut self, root_count: usize) {
        if root_count > 1 {
            self.open('[');
        }
    }

    fn end_document(&mut self, root_count: usize) {
        if root_count > 1 {
            self.close(']');
        }
    }

    fn begin_object(&mut self, _nav: &Navigator<'a>, _index: usize) {
        self.separator();
        self.open('{');
    }

    fn end_object(&mut self, _nav: &Navigator<'a>, _index: usize) {
        self.close('}');
    }

    fn begin_field(&mut self, nav: &Navigator<'a>, index: usize) {
        self.separator();
        write_json_string_into(&mut self.out, &nav.text_of(index));
        self.out.push(':');
        // The field's value follows the colon without a comma.
        self.pending_comma.push(false);
    }

    fn end_field(&mut self, _nav: &Navigator<'a>, _index: usize) {
        self.pending_comma.pop();
    }

    fn begin_array(&mut self, _len: usize) {
        self.separator();
        self.open('[');
    }

    fn end_array(&mut self) {
        self.close(']');
    }

    fn absent(&mut self) {
        self.separator();
        self.out.push_str("null");
    }

    fn value(&mut self, nav: &Navigator<'a>, index: usize) {
        self.separator();
        match Scalar::of(nav, index) {
            Scalar::Null => self.out.push_str("null"),
            Scalar::Bool(true) => self.out.push_str("true"),
            Scalar::Bool(false) => self.out.push_str("false"),
            Scalar::Number(text) => self.out.push_str(&text),
            Scalar::String(text) => write_json_string_into(&mut self.out, &text),
        }
    }
}
