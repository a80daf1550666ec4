//! Serde bencode serialization.
//!
//! Any `Serialize` type is first classified into a [`Value`](crate::value::Value) and then
//! written by the regular [`Encoder`](crate::encoding::Encoder), so struct fields and map
//! entries come out sorted no matter in which order they were serialized.
//!
//! The Serde data model contains a number of types which have no native bencode
//! representation. Serializing these types fails with
//! [`Error::UnsupportedType`](crate::encoding::Error::UnsupportedType):
//! - `()` and unit structs
//! - `Option::None` (`Some(value)` is serialized as `value`)
//! - `bool`
//! - `char`
//! - `f32` and `f64`
//! - enums
//! - maps with keys that aren't strings or bytes
//!
//! ```
//! # use bencanon::serde::to_bytes;
//! # use serde_derive::Serialize;
//! #[derive(Serialize)]
//! # #[serde(crate = "serde_")]
//! struct Ping<'a> {
//!     y: &'a str,
//!     q: &'a str,
//!     t: &'a str,
//! }
//!
//! let ping = Ping { y: "q", q: "ping", t: "aa" };
//! assert_eq!(to_bytes(&ping).unwrap(), b"d1:q4:ping1:t2:aa1:y1:qe");
//! ```

mod common;

pub mod ser;

pub use ser::{Serializer, to_bytes, to_value, to_writer};

/// Result type of the serde front end
pub type Result<T, E = crate::encoding::Error> = std::result::Result<T, E>;
