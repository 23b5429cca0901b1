pub const MARKER_LEN: usize = 3;

pub const MARKER_LEAD: u8 = b'$';

pub const MARKER_TAIL: u8 = b'~';

pub const OBJECT_MARKER: &str = "$o~";
pub const FIELD_MARKER: &str = "$f~";
pub const VALUE_MARKER: &str = "$v~";
pub const TYPE_HINT_MARKER: &str = "$t~";

pub const DEFAULT_MAX_INPUT_SIZE: usize = 10 * 1024 * 1024;

pub const HINT_NUMBER: u8 = b'n';
pub const HINT_FLOAT: u8 = b'f';
pub const HINT_BOOLEAN: u8 = b'b';
pub const HINT_DATETIME: u8 = b'd';
pub const HINT_STRING: u8 = b's';
pub const HINT_NULL: u8 = b'z';

/// Returns true when `input` contains any of the four marker sequences.
#[inline]
pub fn contains_marker(input: &str) -> bool {
    let bytes = input.as_bytes();
    memchr::memchr_iter(MARKER_LEAD, bytes).any(|idx| {
        matches!(
            bytes.get(idx + 1..idx + MARKER_LEN),
            Some([b'o' | b'f' | b'v' | b't', MARKER_TAIL])
        )
    })
}
