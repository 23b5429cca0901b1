//! Serde front end for the encoder.
//!
//! The serializer tracks where it is in the flat LSF shape: the document, a
//! record, a field, or an element of a field's list. Anything that would need
//! a deeper level is rejected with the name of the field it appeared in.

use std::fmt;

use serde::ser::{self, Impossible, Serialize};
use serde_json::Value;

use super::writer::Writer;
use crate::{Error, Result};

impl ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::serialize(msg.to_string())
    }
}

#[derive(Debug, Clone, Copy)]
enum Level<'k> {
    Document,
    Record,
    Field(&'k str),
    Element(&'k str),
}

pub(crate) struct LsfSerializer<'a, 'o, 'k> {
    writer: &'a mut Writer<'o>,
    level: Level<'k>,
}

impl<'a, 'o> LsfSerializer<'a, 'o, 'static> {
    pub fn document(writer: &'a mut Writer<'o>) -> Self {
        Self {
            writer,
            level: Level::Document,
        }
    }

    pub fn record(writer: &'a mut Writer<'o>) -> Self {
        Self {
            writer,
            level: Level::Record,
        }
    }
}

impl<'a, 'o, 'k> LsfSerializer<'a, 'o, 'k> {
    fn field(&self, found: &str) -> Result<&'k str> {
        match self.level {
            Level::Field(name) | Level::Element(name) => Ok(name),
            Level::Document => Err(Error::invalid_record(format!(
                "expected a record or a sequence of records, found {found}"
            ))),
            Level::Record => Err(Error::invalid_record(format!(
                "expected a record, found {found}"
            ))),
        }
    }

    fn nested(&self) -> Error {
        match self.field("map") {
            Ok(name) => Error::nested_object(name),
            Err(err) => err,
        }
    }

    fn unsupported(&self, type_name: &str) -> Error {
        match self.field(type_name) {
            Ok(name) => Error::unsupported_type(name, type_name),
            Err(err) => err,
        }
    }
}

impl<'a, 'o, 'k> ser::Serializer for LsfSerializer<'a, 'o, 'k> {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = SeqSerializer<'a, 'o, 'k>;
    type SerializeTuple = SeqSerializer<'a, 'o, 'k>;
    type SerializeTupleStruct = SeqSerializer<'a, 'o, 'k>;
    type SerializeTupleVariant = Impossible<(), Error>;
    type SerializeMap = RecordSerializer<'a, 'o>;
    type SerializeStruct = RecordSerializer<'a, 'o>;
    type SerializeStructVariant = Impossible<(), Error>;

    fn serialize_bool(self, v: bool) -> Result<()> {
        self.field("bool")?;
        self.writer.write_bool_value(v);
        Ok(())
    }

    fn serialize_i8(self, v: i8) -> Result<()> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<()> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<()> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<()> {
        self.field("integer")?;
        self.writer.write_integer_value(v);
        Ok(())
    }

    fn serialize_i128(self, v: i128) -> Result<()> {
        if let Ok(small) = i64::try_from(v) {
            return self.serialize_i64(small);
        }
        if let Ok(small) = u64::try_from(v) {
            return self.serialize_u64(small);
        }
        Err(self.unsupported("128-bit integer"))
    }

    fn serialize_u8(self, v: u8) -> Result<()> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<()> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<()> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<()> {
        self.field("integer")?;
        self.writer.write_integer_value(v);
        Ok(())
    }

    fn serialize_u128(self, v: u128) -> Result<()> {
        match u64::try_from(v) {
            Ok(small) => self.serialize_u64(small),
            Err(_) => Err(self.unsupported("128-bit integer")),
        }
    }

    fn serialize_f32(self, v: f32) -> Result<()> {
        self.field("float")?;
        self.writer.write_float_value(v);
        Ok(())
    }

    fn serialize_f64(self, v: f64) -> Result<()> {
        self.field("float")?;
        self.writer.write_float_value(v);
        Ok(())
    }

    fn serialize_char(self, v: char) -> Result<()> {
        let mut buf = [0u8; 4];
        self.serialize_str(v.encode_utf8(&mut buf))
    }

    fn serialize_str(self, v: &str) -> Result<()> {
        let name = self.field("string")?;
        self.writer.write_str_value(name, v);
        Ok(())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<()> {
        let name = self.field("bytes")?;
        Err(Error::unsupported_type(name, "bytes"))
    }

    fn serialize_none(self) -> Result<()> {
        self.field("null")?;
        self.writer.write_null_value();
        Ok(())
    }

    fn serialize_some<T>(self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<()> {
        self.serialize_none()
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<()> {
        self.serialize_none()
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<()> {
        self.serialize_str(variant)
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        Err(self.unsupported("enum variant"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        match self.level {
            Level::Document => Ok(SeqSerializer {
                writer: self.writer,
                element: Level::Record,
            }),
            Level::Field(name) => Ok(SeqSerializer {
                writer: self.writer,
                element: Level::Element(name),
            }),
            Level::Element(name) => Err(Error::unsupported_type(name, "nested sequence")),
            Level::Record => Err(Error::invalid_record("expected a record, found a sequence")),
        }
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(self.unsupported("enum variant"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        match self.level {
            Level::Document | Level::Record => {
                self.writer.write_object();
                Ok(RecordSerializer {
                    writer: self.writer,
                    key: None,
                })
            }
            Level::Field(_) | Level::Element(_) => Err(self.nested()),
        }
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<Self::SerializeStruct> {
        self.serialize_map(Some(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(self.unsupported("enum variant"))
    }
}

pub(crate) struct SeqSerializer<'a, 'o, 'k> {
    writer: &'a mut Writer<'o>,
    element: Level<'k>,
}

impl<'a, 'o, 'k> SeqSerializer<'a, 'o, 'k> {
    fn element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        value.serialize(LsfSerializer {
            writer: &mut *self.writer,
            level: self.element,
        })
    }
}

impl<'a, 'o, 'k> ser::SerializeSeq for SeqSerializer<'a, 'o, 'k> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

impl<'a, 'o, 'k> ser::SerializeTuple for SeqSerializer<'a, 'o, 'k> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

impl<'a, 'o, 'k> ser::SerializeTupleStruct for SeqSerializer<'a, 'o, 'k> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

pub(crate) struct RecordSerializer<'a, 'o> {
    writer: &'a mut Writer<'o>,
    key: Option<String>,
}

impl<'a, 'o> RecordSerializer<'a, 'o> {
    fn field<T: ?Sized + Serialize>(&mut self, name: &str, value: &T) -> Result<()> {
        self.writer.write_field(name);
        value.serialize(LsfSerializer {
            writer: &mut *self.writer,
            level: Level::Field(name),
        })
    }
}

fn field_name<T: ?Sized + Serialize>(key: &T) -> Result<String> {
    match serde_json::to_value(key) {
        Ok(Value::String(name)) => Ok(name),
        Ok(Value::Number(number)) => Ok(number.to_string()),
        Ok(Value::Bool(flag)) => Ok(flag.to_string()),
        Ok(other) => Err(Error::invalid_record(format!(
            "field names must be strings, found {}",
            value_kind(&other)
        ))),
        Err(err) => Err(Error::serialize(format!("field name: {err}"))),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "map",
    }
}

impl<'a, 'o> ser::SerializeMap for RecordSerializer<'a, 'o> {
    type Ok = ();
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.key = Some(field_name(key)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .key
            .take()
            .ok_or_else(|| Error::serialize("map value serialized before its key"))?;
        self.field(&key, value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

impl<'a, 'o> ser::SerializeStruct for RecordSerializer<'a, 'o> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.field(key, value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}
