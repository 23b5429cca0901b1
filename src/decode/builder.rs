use tracing::{debug, trace};

use crate::arena::{Node, NodeKind, ParseResult, Span, TypeHint};
use crate::decode::scan::{Token, TokenKind};
use crate::error::Location;
use crate::{DecodeOptions, Error, Result};

/// Builds the node arena for `tokens`, which must come from scanning `input`.
///
/// Any token order is accepted: a field with no open object gets an implicit
/// anonymous object, and a value with no open field gets an implicit anonymous
/// field. Type hints without a pending value, or without a hint byte, are
/// dropped. The only failure is an unknown hint byte while
/// `validate_type_hints` is set.
pub fn build<'a>(tokens: &[Token], input: &'a [u8], options: &DecodeOptions) -> Result<ParseResult<'a>> {
    if tokens.is_empty() {
        return Ok(ParseResult::empty(input));
    }
    let mut builder = Builder::new(input, options, tokens.len());
    for (idx, token) in tokens.iter().enumerate() {
        let data_end = tokens.get(idx + 1).map_or(input.len(), |next| next.offset);
        let data_start = token.data_start().min(data_end);
        let span = Span::new(data_start, data_end - data_start);
        builder.push_token(token, span)?;
    }
    let result = builder.finish();
    debug!(
        tokens = tokens.len(),
        nodes = result.nodes.len(),
        roots = result.roots.len(),
        "built lsf dom"
    );
    Ok(result)
}

struct Builder<'a> {
    input: &'a [u8],
    validate_type_hints: bool,
    nodes: Vec<Node>,
    roots: Vec<usize>,
    current_object: Option<usize>,
    current_field: Option<usize>,
    last_value: Option<usize>,
}

impl<'a> Builder<'a> {
    fn new(input: &'a [u8], options: &DecodeOptions, token_count: usize) -> Self {
        Self {
            input,
            validate_type_hints: options.validate_type_hints,
            nodes: Vec::with_capacity(token_count + token_count / 2),
            roots: Vec::new(),
            current_object: None,
            current_field: None,
            last_value: None,
        }
    }

    fn finish(self) -> ParseResult<'a> {
        ParseResult {
            input: self.input,
            nodes: self.nodes,
            roots: self.roots,
        }
    }

    fn push_token(&mut self, token: &Token, span: Span) -> Result<()> {
        match token.kind {
            TokenKind::Object => {
                let object = self.add_node(Node::new(NodeKind::Object, token.offset, span, None));
                self.current_object = Some(object);
                self.current_field = None;
                self.last_value = None;
            }
            TokenKind::Field => {
                let object = self.ensure_object(token.offset);
                let field = self.add_node(Node::new(NodeKind::Field, token.offset, span, Some(object)));
                self.current_field = Some(field);
                self.last_value = None;
            }
            TokenKind::Value => {
                let field = self.ensure_field(token.offset);
                let value = self.add_node(Node::new(NodeKind::Value, token.offset, span, Some(field)));
                self.last_value = Some(value);
            }
            TokenKind::TypeHint => {
                let target = self.last_value.take();
                match target {
                    Some(value) if !span.is_empty() => {
                        self.apply_type_hint(value, span.start)?;
                    }
                    Some(_) => debug!(offset = token.offset, "type hint has no hint byte; ignored"),
                    None => debug!(offset = token.offset, "type hint without a value; ignored"),
                }
            }
        }
        Ok(())
    }

    fn add_node(&mut self, node: Node) -> usize {
        let index = self.nodes.len();
        match node.parent {
            Some(parent) => self.nodes[parent].children.push(index),
            None => self.roots.push(index),
        }
        self.nodes.push(node);
        index
    }

    fn ensure_object(&mut self, offset: usize) -> usize {
        if let Some(object) = self.current_object {
            return object;
        }
        trace!(offset, "synthesizing implicit object");
        let object = self.add_node(Node::implicit(NodeKind::Object, offset, None));
        self.current_object = Some(object);
        object
    }

    fn ensure_field(&mut self, offset: usize) -> usize {
        if let Some(field) = self.current_field {
            return field;
        }
        let object = self.ensure_object(offset);
        trace!(offset, "synthesizing implicit field");
        let field = self.add_node(Node::implicit(NodeKind::Field, offset, Some(object)));
        self.current_field = Some(field);
        field
    }

    fn apply_type_hint(&mut self, value: usize, hint_offset: usize) -> Result<()> {
        let code = self.input[hint_offset];
        let hint = match TypeHint::from_code(code) {
            Some(hint) => hint,
            None if self.validate_type_hints => {
                return Err(Error::invalid_type_hint(
                    code,
                    Location::from_offset(self.input, hint_offset),
                ));
            }
            None => {
                debug!(offset = hint_offset, code, "unknown type hint; treating value as string");
                TypeHint::String
            }
        };
        self.nodes[value].type_hint = hint;
        Ok(())
    }
}
