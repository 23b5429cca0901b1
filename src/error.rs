use thiserror::Error as ThisError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InputTooLarge,
    InvalidTypeHint,
    NestedObject,
    UnsupportedType,
    InvalidRecord,
    Serialize,
    Deserialize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorStage {
    Encode,
    Decode,
}

/// Byte offset of a decode failure, with 1-based line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub fn from_offset(input: &[u8], offset: usize) -> Self {
        let offset = offset.min(input.len());
        let head = &input[..offset];
        let line = memchr::memchr_iter(b'\n', head).count() + 1;
        let line_start = memchr::memrchr(b'\n', head).map_or(0, |idx| idx + 1);
        Self {
            offset,
            line,
            column: offset - line_start + 1,
        }
    }
}

#[derive(Debug, Clone, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub stage: ErrorStage,
    pub message: String,
    pub location: Option<Location>,
}

impl Error {
    pub fn input_too_large(size: usize, limit: usize) -> Self {
        Self {
            kind: ErrorKind::InputTooLarge,
            stage: ErrorStage::Decode,
            message: format!("input of {size} bytes exceeds the maximum allowed size of {limit} bytes"),
            location: None,
        }
    }

    pub fn invalid_type_hint(hint: u8, location: Location) -> Self {
        Self {
            kind: ErrorKind::InvalidTypeHint,
            stage: ErrorStage::Decode,
            message: format!(
                "invalid type hint '{}' at offset {} (line {}, column {}); expected one of n, f, b, d, s, z",
                char::from(hint).escape_default(),
                location.offset,
                location.line,
                location.column
            ),
            location: Some(location),
        }
    }

    pub fn nested_object(field: &str) -> Self {
        Self {
            kind: ErrorKind::NestedObject,
            stage: ErrorStage::Encode,
            message: format!("nested objects are not supported in LSF 3.0: field '{field}'"),
            location: None,
        }
    }

    pub fn unsupported_type(field: &str, type_name: &str) -> Self {
        Self {
            kind: ErrorKind::UnsupportedType,
            stage: ErrorStage::Encode,
            message: format!("unsupported type '{type_name}' for field '{field}'"),
            location: None,
        }
    }

    pub fn invalid_record(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::InvalidRecord,
            stage: ErrorStage::Encode,
            message: message.into(),
            location: None,
        }
    }

    pub fn serialize(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Serialize,
            stage: ErrorStage::Encode,
            message: message.into(),
            location: None,
        }
    }

    pub fn deserialize(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Deserialize,
            stage: ErrorStage::Decode,
            message: message.into(),
            location: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    fn test_location_counts_lines_and_columns() {
        let input = b"$o~\n$f~a\n$v~1$t~q";
        let location = Location::from_offset(input, 14);
        assert_eq!(location.offset, 14);
        assert_eq!(location.line, 3);
        assert_eq!(location.column, 6);
    }

    #[rstest::rstest]
    fn test_location_clamps_past_end() {
        let location = Location::from_offset(b"abc", 99);
        assert_eq!(location.offset, 3);
        assert_eq!(location.line, 1);
        assert_eq!(location.column, 4);
    }

    #[rstest::rstest]
    fn test_messages_name_the_context() {
        let err = Error::input_too_large(11, 10);
        assert!(err.to_string().contains("10 bytes"));
        assert_eq!(err.stage, ErrorStage::Decode);

        let err = Error::nested_object("profile");
        assert!(err.to_string().contains("'profile'"));
        assert_eq!(err.kind, ErrorKind::NestedObject);

        let err = Error::unsupported_type("blob", "bytes");
        assert!(err.to_string().contains("'blob'"));
        assert!(err.to_string().contains("'bytes'"));
    }
}
