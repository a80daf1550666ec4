//! Serde bencode serialization.

use serde_::ser::Serializer as _;

use crate::serde::common::*;

mod map_serializer;
mod struct_serializer;

pub use map_serializer::MapSerializer;
pub use struct_serializer::StructSerializer;

/// Serialize an instance of `T` to bencode
pub fn to_bytes<T>(value: &T) -> Result<Vec<u8>>
where
    T: ?Sized + Serialize,
{
    marshal(&to_value(value)?)
}

/// Serialize an instance of `T` to bencode, appending it to `writer`
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: Write,
    T: ?Sized + Serialize,
{
    Encoder::new(writer).encode(&to_value(value)?)
}

/// Classify an instance of `T` into an owned [`Value`] without encoding it yet
pub fn to_value<T>(value: &T) -> Result<Value<'static>>
where
    T: ?Sized + Serialize,
{
    value.serialize(Serializer)
}

/// A serde serializer that maps the serde data model onto the four bencode shapes.
///
/// Integers of every width become integers, strings and byte buffers become byte strings,
/// sequences and tuples become lists, maps and structs become dictionaries. `Some(value)` is
/// serialized as `value` and newtype structs as their content. Everything else (`bool`,
/// floats, `char`, `None`, `()`, unit structs and all enums) fails with
/// [`Error::UnsupportedType`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Serializer;

impl serde_::ser::Serializer for Serializer {
    type Error = Error;
    type Ok = Value<'static>;
    type SerializeMap = MapSerializer;
    type SerializeSeq = SeqSerializer;
    type SerializeStruct = StructSerializer;
    type SerializeStructVariant = Impossible<Value<'static>, Error>;
    type SerializeTuple = SeqSerializer;
    type SerializeTupleStruct = SeqSerializer;
    type SerializeTupleVariant = Impossible<Value<'static>, Error>;

    fn serialize_bool(self, _v: bool) -> Result<Value<'static>> {
        Err(Error::unsupported_type("bool"))
    }

    fn serialize_i8(self, v: i8) -> Result<Value<'static>> {
        Ok(Value::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Value<'static>> {
        Ok(Value::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Value<'static>> {
        Ok(Value::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Value<'static>> {
        Ok(Value::from(v))
    }

    fn serialize_i128(self, v: i128) -> Result<Value<'static>> {
        Ok(Value::from(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Value<'static>> {
        Ok(Value::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value<'static>> {
        Ok(Value::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Value<'static>> {
        Ok(Value::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Value<'static>> {
        Ok(Value::from(v))
    }

    fn serialize_u128(self, v: u128) -> Result<Value<'static>> {
        Ok(Value::from(v))
    }

    fn serialize_f32(self, _v: f32) -> Result<Value<'static>> {
        Err(Error::unsupported_type("f32"))
    }

    fn serialize_f64(self, _v: f64) -> Result<Value<'static>> {
        Err(Error::unsupported_type("f64"))
    }

    fn serialize_char(self, _v: char) -> Result<Value<'static>> {
        Err(Error::unsupported_type("char"))
    }

    fn serialize_str(self, v: &str) -> Result<Value<'static>> {
        self.serialize_bytes(v.as_bytes())
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value<'static>> {
        Ok(Value::Bytes(Cow::Owned(v.to_vec())))
    }

    fn serialize_none(self) -> Result<Value<'static>> {
        Err(Error::unsupported_type("Option::None"))
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value<'static>>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value<'static>> {
        Err(Error::unsupported_type("()"))
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value<'static>> {
        Err(Error::unsupported_type("unit struct"))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<Value<'static>> {
        Err(Error::unsupported_type("enum unit variant"))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value<'static>>
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
    ) -> Result<Value<'static>>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::unsupported_type("enum newtype variant"))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq> {
        Ok(SeqSerializer::with_capacity(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        Ok(SeqSerializer::with_capacity(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Ok(SeqSerializer::with_capacity(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::unsupported_type("enum tuple variant"))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(MapSerializer::with_capacity(len.unwrap_or(0)))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<Self::SerializeStruct> {
        Ok(StructSerializer::with_capacity(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::unsupported_type("enum struct variant"))
    }
}

/// Bencode sub-serializer for sequences and tuples.
pub struct SeqSerializer {
    items: Vec<Value<'static>>,
}

impl SeqSerializer {
    fn with_capacity(len: usize) -> Self {
        SeqSerializer {
            items: Vec::with_capacity(len),
        }
    }
}

impl SerializeSeq for SeqSerializer {
    type Error = Error;
    type Ok = Value<'static>;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.items.push(value.serialize(Serializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value<'static>> {
        Ok(Value::List(self.items))
    }
}

impl SerializeTuple for SeqSerializer {
    type Error = Error;
    type Ok = Value<'static>;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value<'static>> {
        SerializeSeq::end(self)
    }
}

impl SerializeTupleStruct for SeqSerializer {
    type Error = Error;
    type Ok = Value<'static>;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value<'static>> {
        SerializeSeq::end(self)
    }
}

impl serde_::ser::Error for Error {
    fn custom<T>(msg: T) -> Self
    where
        T: Display,
    {
        Error::Custom(msg.to_string())
    }
}
