//! `Value`s hold arbitrary borrowed or owned data of any bencode shape. They are the dynamic
//! counterpart to implementing [`ToBencode`] for a concrete type: build the tree at runtime,
//! mixing integers, strings, lists and dicts freely, and encode it in one go.
//!
//! `Value` implements `ToBencode`. If the `serde` feature is enabled, it also implements
//! `Serialize`.

use std::{borrow::Cow, time::Duration};

#[cfg(feature = "serde")]
use serde_::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::encoding::{Error, Integer, Production, ToBencode};

/// An owned or borrowed bencode value.
///
/// Dictionaries are kept as plain pairs in whatever order they were built. The encoder sorts
/// them and rejects duplicate keys, so two dicts with the same pairs always encode identically.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Value<'a> {
    /// An owned or borrowed byte string
    Bytes(Cow<'a, [u8]>),
    /// A dictionary mapping byte strings to values
    Dict(Vec<(Cow<'a, [u8]>, Value<'a>)>),
    /// An integer of any size
    Integer(Integer),
    /// A list of values
    List(Vec<Value<'a>>),
}

impl<'a> Value<'a> {
    /// Convert this Value into an owned Value with static lifetime
    pub fn into_owned(self) -> Value<'static> {
        match self {
            Value::Bytes(bytes) => Value::Bytes(Cow::Owned(bytes.into_owned())),
            Value::Dict(dict) => Value::Dict(
                dict.into_iter()
                    .map(|(key, value)| (Cow::Owned(key.into_owned()), value.into_owned()))
                    .collect(),
            ),
            Value::Integer(integer) => Value::Integer(integer),
            Value::List(list) => Value::List(list.into_iter().map(Value::into_owned).collect()),
        }
    }

    /// An empty dictionary
    pub fn dict() -> Self {
        Value::Dict(Vec::new())
    }

    /// Add a pair to a dictionary value. Does nothing useful on other shapes; the pair is
    /// returned back as an error in that case.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Result<(), (K, V)>
    where
        K: Into<Cow<'a, [u8]>>,
        V: Into<Value<'a>>,
    {
        match self {
            Value::Dict(pairs) => {
                pairs.push((key.into(), value.into()));
                Ok(())
            },
            _ => Err((key, value)),
        }
    }
}

impl<'a> ToBencode for Value<'a> {
    fn classify(&self) -> Result<Production<'_>, Error> {
        Ok(match self {
            Value::Bytes(bytes) => Production::bytes(bytes),
            Value::Dict(dict) => Production::dict(dict.iter().map(|(key, value)| (key, value))),
            Value::Integer(integer) => Production::Integer(integer.clone()),
            Value::List(list) => Production::list(list),
        })
    }
}

macro_rules! impl_from_integer {
    ($($type:ty)*) => {$(
        impl From<$type> for Value<'_> {
            fn from(value: $type) -> Self {
                Value::Integer(Integer::from(value))
            }
        }
    )*}
}

impl_from_integer!(u8 u16 u32 u64 u128 usize i8 i16 i32 i64 i128 isize);

impl From<Integer> for Value<'_> {
    fn from(integer: Integer) -> Self {
        Value::Integer(integer)
    }
}

impl From<Duration> for Value<'_> {
    fn from(duration: Duration) -> Self {
        Value::Integer(Integer::from(duration))
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(text: &'a str) -> Self {
        Value::Bytes(Cow::Borrowed(text.as_bytes()))
    }
}

impl From<String> for Value<'_> {
    fn from(text: String) -> Self {
        Value::Bytes(Cow::Owned(text.into_bytes()))
    }
}

impl<'a> From<&'a [u8]> for Value<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Value::Bytes(Cow::Borrowed(bytes))
    }
}

impl From<Vec<u8>> for Value<'_> {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Bytes(Cow::Owned(bytes))
    }
}

impl<'a> From<Vec<Value<'a>>> for Value<'a> {
    fn from(list: Vec<Value<'a>>) -> Self {
        Value::List(list)
    }
}

impl<'a> FromIterator<Value<'a>> for Value<'a> {
    fn from_iter<I: IntoIterator<Item = Value<'a>>>(iter: I) -> Self {
        Value::List(iter.into_iter().collect())
    }
}

impl<'a, K> FromIterator<(K, Value<'a>)> for Value<'a>
where
    K: Into<Cow<'a, [u8]>>,
{
    fn from_iter<I: IntoIterator<Item = (K, Value<'a>)>>(iter: I) -> Self {
        Value::Dict(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }
}

#[cfg(feature = "serde")]
impl Serialize for Value<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde_::ser::Error as _;
        use serde_bytes::Bytes;

        match self {
            Value::Bytes(string) => serializer.serialize_bytes(string),
            Value::Integer(int) => {
                let text = int.as_str();
                if let Ok(int) = text.parse::<i64>() {
                    serializer.serialize_i64(int)
                } else if let Ok(int) = text.parse::<u64>() {
                    serializer.serialize_u64(int)
                } else if let Ok(int) = text.parse::<i128>() {
                    serializer.serialize_i128(int)
                } else if let Ok(int) = text.parse::<u128>() {
                    serializer.serialize_u128(int)
                } else {
                    Err(S::Error::custom(format_args!(
                        "integer {} does not fit in 128 bits",
                        text
                    )))
                }
            },
            Value::List(list) => {
                let mut seed = serializer.serialize_seq(Some(list.len()))?;
                for value in list {
                    seed.serialize_element(value)?;
                }
                seed.end()
            },
            Value::Dict(dict) => {
                let mut seed = serializer.serialize_map(Some(dict.len()))?;
                for (k, v) in dict {
                    seed.serialize_entry(Bytes::new(k), v)?;
                }
                seed.end()
            },
        }
    }
}
