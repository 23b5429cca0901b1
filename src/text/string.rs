const HEX: &[u8; 16] = b"0123456789abcdef";

/// Appends `value` as a quoted JSON string.
pub fn write_json_string_into(out: &mut String, value: &str) {
    out.reserve(value.len() + 2);
    out.push('"');
    let bytes = value.as_bytes();
    let mut start = 0;
    for (idx, &byte) in bytes.iter().enumerate() {
        let escaped = match byte {
            b'"' => "\\\"",
            b'\\' => "\\\\",
            b'\n' => "\\n",
            b'\r' => "\\r",
            b'\t' => "\\t",
            0x00..=0x1f => "",
            _ => continue,
        };
        if start < idx {
            out.push_str(&value[start..idx]);
        }
        if escaped.is_empty() {
            push_unicode_escape(out, byte);
        } else {
            out.push_str(escaped);
        }
        start = idx + 1;
    }
    if start < value.len() {
        out.push_str(&value[start..]);
    }
    out.push('"');
}

fn push_unicode_escape(out: &mut String, byte: u8) {
    out.push_str("\\u00");
    out.push(char::from(HEX[usize::from(byte >> 4)]));
    out.push(char::from(HEX[usize::from(byte & 0x0f)]));
}
