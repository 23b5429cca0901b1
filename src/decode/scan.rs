use memchr::memchr_iter;

use crate::constants::{MARKER_LEAD, MARKER_LEN, MARKER_TAIL};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Object,
    Field,
    Value,
    TypeHint,
}

impl TokenKind {
    #[inline]
    fn from_marker_byte(byte: u8) -> Option<Self> {
        match byte {
            b'o' => Some(TokenKind::Object),
            b'f' => Some(TokenKind::Field),
            b'v' => Some(TokenKind::Value),
            b't' => Some(TokenKind::TypeHint),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub offset: usize,
}

impl Token {
    /// First byte after the marker.
    #[inline]
    pub fn data_start(&self) -> usize {
        self.offset + MARKER_LEN
    }
}

/// Finds every marker in `input`, in order.
///
/// Markers are matched wherever they occur; there is no escaping. A matched
/// marker consumes its three bytes, so scanning resumes after it.
pub fn scan_tokens(input: &[u8]) -> Vec<Token> {
    let mut tokens = Vec::new();
    if input.len() < MARKER_LEN {
        return tokens;
    }
    let last_start = input.len() - MARKER_LEN;
    let mut resume = 0;
    for idx in memchr_iter(MARKER_LEAD, input) {
        if idx > last_start {
            break;
        }
        if idx < resume || input[idx + 2] != MARKER_TAIL {
            continue;
        }
        if let Some(kind) = TokenKind::from_marker_byte(input[idx + 1]) {
            tokens.push(Token { kind, offset: idx });
            resume = idx + MARKER_LEN;
        }
    }
    tokens
}
