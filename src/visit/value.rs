use std::mem;

use serde_json::{Map, Number, Value};

use super::{walk, Scalar, Visitor};
use crate::arena::{Navigator, ParseResult};

/// Builds a `serde_json::Value` with the same shape [`super::json::to_json`]
/// renders. A repeated field name keeps its last value.
pub fn to_value(result: &ParseResult<'_>) -> Option<Value> {
    let nav = result.navigator();
    let mut visitor = ValueVisitor::default();
    walk(&nav, &mut visitor);
    let mut records = visitor.records;
    match records.len() {
        0 => None,
        1 => records.pop(),
        _ => Some(Value::Array(records)),
    }
}

#[derive(Default)]
struct ValueVisitor {
    records: Vec<Value>,
    object: Map<String, Value>,
    key: String,
    slot: Option<Value>,
    array: Option<Vec<Value>>,
}

impl<'a> Visitor<'a> for ValueVisitor {
    fn begin_object(&mut self, _nav: &Navigator<'a>, _index: usize) {
        self.object = Map::new();
    }

    fn end_object(&mut self, _nav: &Navigator<'a>, _index: usize) {
        let object = mem::take(&mut self.object);
        self.records.push(Value::Object(object));
    }

    fn begin_field(&mut self, nav: &Navigator<'a>, index: usize) {
        self.key = nav.text_of(index).into_owned();
    }

    fn end_field(&mut self, _nav: &Navigator<'a>, _index: usize) {
        let value = self.slot.take().unwrap_or(Value::Null);
        self.object.insert(mem::take(&mut self.key), value);
    }

    fn begin_array(&mut self, len: usize) {
        self.array = Some(Vec::with_capacity(len));
    }

    fn end_array(&mut self) {
        self.slot = self.array.take().map(Value::Array);
    }

    fn absent(&mut self) {
        self.slot = Some(Value::Null);
    }

    fn value(&mut self, nav: &Navigator<'a>, index: usize) {
        let value = scalar_value(Scalar::of(nav, index));
        match self.array.as_mut() {
            Some(items) => items.push(value),
            None => self.slot = Some(value),
        }
    }
}

fn scalar_value(scalar: Scalar<'_>) -> Value {
    match scalar {
        Scalar::Null => Value::Null,
        Scalar::Bool(flag) => Value::Bool(flag),
        Scalar::Number(text) => text.parse::<Number>().map_or(Value::Null, Value::Number),
        Scalar::String(text) => Value::String(text.into_owned()),
    }
}
