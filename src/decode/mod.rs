pub mod builder;
pub mod scan;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::arena::ParseResult;
use crate::visit::{json, value};
use crate::{DecodeOptions, Error, Result};

pub fn parse_to_dom<'a>(input: &'a [u8], options: &DecodeOptions) -> Result<ParseResult<'a>> {
    if input.len() > options.max_input_size {
        return Err(Error::input_too_large(input.len(), options.max_input_size));
    }
    let tokens = scan::scan_tokens(input);
    builder::build(&tokens, input, options)
}

pub fn parse_to_json(input: &[u8], options: &DecodeOptions) -> Result<Option<String>> {
    let dom = parse_to_dom(input, options)?;
    Ok(json::to_json(&dom))
}

pub fn parse_to_value(input: &[u8], options: &DecodeOptions) -> Result<Option<Value>> {
    let dom = parse_to_dom(input, options)?;
    Ok(value::to_value(&dom))
}

pub fn from_slice<T: DeserializeOwned>(input: &[u8], options: &DecodeOptions) -> Result<T> {
    let value = parse_to_value(input, options)?.unwrap_or(Value::Null);
    serde_json::from_value(value)
        .map_err(|err| Error::deserialize(format!("deserialize failed: {err}")))
}
