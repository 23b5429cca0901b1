use tracing::warn;

use crate::constants::{
    contains_marker, FIELD_MARKER, HINT_BOOLEAN, HINT_FLOAT, HINT_NULL, HINT_NUMBER,
    OBJECT_MARKER, TYPE_HINT_MARKER, VALUE_MARKER,
};
use crate::num::number::{write_float_into, write_integer_into};
use crate::{EncodeOptions, FloatHint};

/// Output buffer for one encode call. Nothing leaves it unless the whole
/// call succeeds.
pub(crate) struct Writer<'o> {
    buffer: String,
    options: &'o EncodeOptions,
}

impl<'o> Writer<'o> {
    pub fn new(options: &'o EncodeOptions) -> Self {
        Self {
            buffer: String::with_capacity(256),
            options,
        }
    }

    pub fn finish(self) -> String {
        self.buffer
    }

    pub fn write_object(&mut self) {
        self.buffer.push_str(OBJECT_MARKER);
        let name = self.options.object_name();
        self.warn_on_marker("<object name>", name);
        self.buffer.push_str(name);
    }

    pub fn write_field(&mut self, name: &str) {
        self.warn_on_marker(name, name);
        self.buffer.push_str(FIELD_MARKER);
        self.buffer.push_str(name);
    }

    pub fn write_str_value(&mut self, field: &str, value: &str) {
        self.warn_on_marker(field, value);
        self.buffer.push_str(VALUE_MARKER);
        self.buffer.push_str(value);
    }

    pub fn write_bool_value(&mut self, value: bool) {
        self.buffer.push_str(VALUE_MARKER);
        self.buffer.push_str(if value { "true" } else { "false" });
        self.write_hint(HINT_BOOLEAN);
    }

    pub fn write_null_value(&mut self) {
        self.buffer.push_str(VALUE_MARKER);
        self.write_hint(HINT_NULL);
    }

    pub fn write_integer_value<I: itoa::Integer>(&mut self, value: I) {
        self.buffer.push_str(VALUE_MARKER);
        write_integer_into(&mut self.buffer, value);
        self.write_hint(HINT_NUMBER);
    }

    /// Non-finite floats have no LSF number form and are written as null.
    pub fn write_float_value<F: ryu::Float + Into<f64> + Copy>(&mut self, value: F) {
        self.buffer.push_str(VALUE_MARKER);
        if !write_float_into(&mut self.buffer, value) {
            self.write_hint(HINT_NULL);
            return;
        }
        let hint = match self.options.float_hint {
            FloatHint::Number => HINT_NUMBER,
            FloatHint::Float => HINT_FLOAT,
        };
        self.write_hint(hint);
    }

    fn write_hint(&mut self, code: u8) {
        self.buffer.push_str(TYPE_HINT_MARKER);
        self.buffer.push(char::from(code));
    }

    fn warn_on_marker(&self, field: &str, text: &str) {
        if contains_marker(text) {
            warn!(field, "text contains an LSF marker and will not decode as written");
        }
    }
}
