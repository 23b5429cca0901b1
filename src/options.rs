use smol_str::SmolStr;

use crate::constants::DEFAULT_MAX_INPUT_SIZE;

/// Type hint emitted for numbers that are not integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FloatHint {
    /// `$t~n` for every numeric kind.
    #[default]
    Number,
    /// `$t~f` for non-integral numbers, `$t~n` for integers.
    Float,
}

#[derive(Debug, Clone, Default)]
pub struct EncodeOptions {
    pub object_name: Option<SmolStr>,
    pub float_hint: FloatHint,
}

impl EncodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_object_name(mut self, name: impl Into<SmolStr>) -> Self {
        self.object_name = Some(name.into());
        self
    }

    pub fn with_float_hint(mut self, float_hint: FloatHint) -> Self {
        self.float_hint = float_hint;
        self
    }

    pub(crate) fn object_name(&self) -> &str {
        self.object_name.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone)]
pub struct DecodeOptions {
    /// Inputs longer than this many bytes are rejected before scanning.
    pub max_input_size: usize,
    /// Reject unknown type hint characters instead of treating them as strings.
    pub validate_type_hints: bool,
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_input_size(mut self, max_input_size: usize) -> Self {
        self.max_input_size = max_input_size;
        self
    }

    pub fn with_validate_type_hints(mut self, validate_type_hints: bool) -> Self {
        self.validate_type_hints = validate_type_hints;
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_input_size: DEFAULT_MAX_INPUT_SIZE,
            validate_type_hints: true,
        }
    }
}
