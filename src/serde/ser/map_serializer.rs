use crate::serde::common::*;

/// Bencode sub-serializer for maps.
///
/// Keys must serialize to byte strings. Pairs are collected as they come; ordering and the
/// duplicate check happen when the resulting dictionary is encoded.
pub struct MapSerializer {
    pairs: Vec<(Cow<'static, [u8]>, Value<'static>)>,
    key: Option<Cow<'static, [u8]>>,
}

impl MapSerializer {
    pub(crate) fn with_capacity(len: usize) -> MapSerializer {
        MapSerializer {
            pairs: Vec::with_capacity(len),
            key: None,
        }
    }
}

impl SerializeMap for MapSerializer {
    type Error = Error;
    type Ok = Value<'static>;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        if self.key.is_some() {
            return Err(<Error as serde_::ser::Error>::custom(
                "map key serialized twice without a value",
            ));
        }

        match key.serialize(Serializer)? {
            Value::Bytes(bytes) => {
                self.key = Some(bytes);
                Ok(())
            },
            _ => Err(Error::unsupported_type("non-byte-string map key")),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match self.key.take() {
            Some(key) => {
                self.pairs.push((key, value.serialize(Serializer)?));
                Ok(())
            },
            None => Err(<Error as serde_::ser::Error>::custom(
                "map value serialized without a key",
            )),
        }
    }

    fn end(self) -> Result<Value<'static>> {
        if self.key.is_some() {
            return Err(<Error as serde_::ser::Error>::custom(
                "map ended with a dangling key",
            ));
        }
        Ok(Value::Dict(self.pairs))
    }
}
