use crate::serde::common::*;

/// Bencode sub-serializer for structs.
pub struct StructSerializer {
    pairs: Vec<(Cow<'static, [u8]>, Value<'static>)>,
}

impl StructSerializer {
    pub(crate) fn with_capacity(len: usize) -> StructSerializer {
        StructSerializer {
            pairs: Vec::with_capacity(len),
        }
    }
}

impl SerializeStruct for StructSerializer {
    type Error = Error;
    type Ok = Value<'static>;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let value = value.serialize(Serializer)?;
        self.pairs.push((Cow::Borrowed(key.as_bytes()), value));

        Ok(())
    }

    fn end(self) -> Result<Value<'static>> {
        Ok(Value::Dict(self.pairs))
    }
}
