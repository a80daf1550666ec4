/// Standard library
pub(crate) use std::{borrow::Cow, fmt::Display, io::Write};

/// Dependencies
pub(crate) use serde_::ser::{
    Impossible, Serialize, SerializeMap, SerializeSeq, SerializeStruct, SerializeTuple,
    SerializeTupleStruct,
};

/// Structs and enums
pub(crate) use crate::{
    encoding::{Encoder, Error, marshal},
    serde::{Result, ser::Serializer},
    value::Value,
};
