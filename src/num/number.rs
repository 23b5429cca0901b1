use itoa::{Buffer as ItoaBuffer, Integer};
use ryu::{Buffer as RyuBuffer, Float};

pub fn write_integer_into<I: Integer>(out: &mut String, value: I) {
    out.push_str(ItoaBuffer::new().format(value));
}

/// Shortest round-trippable decimal for a finite float; `false` when the
/// value is NaN or infinite and nothing was written.
pub fn write_float_into<F: Float + Into<f64> + Copy>(out: &mut String, value: F) -> bool {
    let wide: f64 = value.into();
    if !wide.is_finite() {
        return false;
    }
    out.push_str(RyuBuffer::new().format_finite(value));
    true
}

/// Strict JSON number grammar: `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?`.
pub fn is_json_number(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut idx = 0;
    if bytes.first() == Some(&b'-') {
        idx += 1;
    }
    match bytes.get(idx) {
        Some(b'0') => idx += 1,
        Some(b'1'..=b'9') => idx = skip_digits(bytes, idx + 1),
        _ => return false,
    }
    if bytes.get(idx) == Some(&b'.') {
        let start = idx + 1;
        idx = skip_digits(bytes, start);
        if idx == start {
            return false;
        }
    }
    if matches!(bytes.get(idx), Some(b'e' | b'E')) {
        idx += 1;
        if matches!(bytes.get(idx), Some(b'+' | b'-')) {
            idx += 1;
        }
        let start = idx;
        idx = skip_digits(bytes, start);
        if idx == start {
            return false;
        }
    }
    idx == bytes.len()
}

/// A JSON number whose magnitude fits in an `f64`; `1e400` does not.
pub fn is_finite_json_number(text: &str) -> bool {
    is_json_number(text) && text.parse::<f64>().is_ok_and(f64::is_finite)
}

fn skip_digits(bytes: &[u8], mut idx: usize) -> usize {
    while bytes.get(idx).is_some_and(u8::is_ascii_digit) {
        idx += 1;
    }
    idx
}
