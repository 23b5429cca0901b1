//! LSF 3.0, a marker-delimited record format that stays parseable when the
//! producer cannot be trusted to balance quotes or brackets.
//!
//! A document is a stream of four three-byte markers with raw data between
//! them: `$o~` starts an object (optionally named), `$f~` a field, `$v~` a
//! value, and `$t~` a one-byte type hint for the value before it. Repeating
//! `$v~` under one field makes a list; several `$o~` make several records.
//!
//! ```
//! let json = lsf::parse_to_json(b"$o~$f~name$v~Ada$f~age$v~37$t~n$f~tags$v~a$v~b")?;
//! assert_eq!(json.as_deref(), Some(r#"{"name":"Ada","age":37,"tags":["a","b"]}"#));
//! # Ok::<(), lsf::Error>(())
//! ```

pub mod arena;
pub mod constants;
pub mod decode;
pub mod encode;
pub mod error;
pub mod num;
pub mod options;
pub mod text;
pub mod visit;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

pub use crate::arena::{Navigator, Node, NodeKind, ParseResult, Span, TypeHint};
pub use crate::decode::scan::{scan_tokens, Token, TokenKind};
pub use crate::error::{Error, ErrorKind, ErrorStage, Location};
pub use crate::options::{DecodeOptions, EncodeOptions, FloatHint};
pub use crate::visit::{walk, Visitor};

pub type Result<T> = std::result::Result<T, Error>;

/// Scan and build the node tree. The result borrows `input`.
pub fn parse_to_dom(input: &[u8]) -> Result<ParseResult<'_>> {
    parse_to_dom_with_options(input, &DecodeOptions::default())
}

pub fn parse_to_dom_with_options<'a>(
    input: &'a [u8],
    options: &DecodeOptions,
) -> Result<ParseResult<'a>> {
    decode::parse_to_dom(input, options)
}

/// Render LSF as compact JSON text; `Ok(None)` when nothing was parsed.
pub fn parse_to_json(input: &[u8]) -> Result<Option<String>> {
    parse_to_json_with_options(input, &DecodeOptions::default())
}

pub fn parse_to_json_with_options(input: &[u8], options: &DecodeOptions) -> Result<Option<String>> {
    decode::parse_to_json(input, options)
}

pub fn parse_to_value(input: &[u8]) -> Result<Option<Value>> {
    parse_to_value_with_options(input, &DecodeOptions::default())
}

pub fn parse_to_value_with_options(input: &[u8], options: &DecodeOptions) -> Result<Option<Value>> {
    decode::parse_to_value(input, options)
}

pub fn from_str<T: DeserializeOwned>(input: &str) -> Result<T> {
    from_str_with_options(input, &DecodeOptions::default())
}

pub fn from_str_with_options<T: DeserializeOwned>(input: &str, options: &DecodeOptions) -> Result<T> {
    decode::from_slice(input.as_bytes(), options)
}

pub fn from_slice<T: DeserializeOwned>(input: &[u8]) -> Result<T> {
    from_slice_with_options(input, &DecodeOptions::default())
}

pub fn from_slice_with_options<T: DeserializeOwned>(
    input: &[u8],
    options: &DecodeOptions,
) -> Result<T> {
    decode::from_slice(input, options)
}

pub fn to_string<T: ?Sized + Serialize>(value: &T) -> Result<String> {
    to_string_with_options(value, &EncodeOptions::default())
}

pub fn to_string_with_options<T: ?Sized + Serialize>(
    value: &T,
    options: &EncodeOptions,
) -> Result<String> {
    encode::to_string(value, options)
}

pub fn to_vec<T: ?Sized + Serialize>(value: &T) -> Result<Vec<u8>> {
    to_vec_with_options(value, &EncodeOptions::default())
}

pub fn to_vec_with_options<T: ?Sized + Serialize>(
    value: &T,
    options: &EncodeOptions,
) -> Result<Vec<u8>> {
    encode::to_vec(value, options)
}

#[cfg(not(feature = "parallel"))]
pub fn encode_records<T: Serialize>(records: &[T], options: &EncodeOptions) -> Result<String> {
    encode::encode_records(records, options)
}

#[cfg(feature = "parallel")]
pub fn encode_records<T: Serialize + Sync>(records: &[T], options: &EncodeOptions) -> Result<String> {
    encode::encode_records(records, options)
}
