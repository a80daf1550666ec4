//! An encoder for bencode. Guarantees that the output is valid, canonical bencode
//!
//! # Encoding a structure
//!
//! Most standard types already implement [`ToBencode`]: all integer types, `str` and
//! `String`, `Duration` (as whole seconds), sequences (`Vec`, slices, arrays, tuples, ...)
//! and maps whose keys are byte strings (`BTreeMap`, `HashMap`). Byte buffers have to be
//! wrapped in [`AsString`], otherwise a `Vec<u8>` is a list of integers.
//!
//! ```
//! # use bencanon::encoding::{marshal, AsString, Error};
//! # use std::collections::HashMap;
//! #
//! # fn main() -> Result<(), Error> {
//! let mut dict = HashMap::new();
//! dict.insert("two", AsString(b"bb".to_vec()));
//! dict.insert("one", AsString(b"aa".to_vec()));
//!
//! // Keys always come out sorted, whatever order the map iterates in
//! assert_eq!(marshal(&dict)?, b"d3:one2:aa3:two2:bbe");
//! # Ok(())
//! # }
//! ```
//!
//! For your own types, implement [`ToBencode::classify`] and name the production that
//! represents the value. Children are only borrowed; the encoder classifies them itself:
//!
//! ```
//! # use bencanon::encoding::{Error, Production, ToBencode};
//! #
//! struct Message {
//!     foo: i32,
//!     bar: String,
//! }
//!
//! impl ToBencode for Message {
//!     fn classify(&self) -> Result<Production<'_>, Error> {
//!         Ok(Production::build_dict()
//!             .pair(b"foo", &self.foo)
//!             .pair(b"bar", &self.bar)
//!             .finish())
//!     }
//! }
//! #
//! # fn main() -> Result<(), Error> {
//! let message = Message {
//!     foo: 1,
//!     bar: "quux".to_string(),
//! };
//!
//! assert_eq!(message.to_bencode()?, b"d3:bar4:quux3:fooi1ee");
//! # Ok(())
//! # }
//! ```
//!
//! # Streaming
//!
//! An [`Encoder`] owns a sink implementing `std::io::Write` and appends one object per call
//! to [`Encoder::encode`]:
//!
//! ```
//! # use bencanon::encoding::{Encoder, Error};
//! #
//! # fn main() -> Result<(), Error> {
//! let mut encoder = Encoder::new(Vec::new());
//! encoder.encode("test")?;
//! encoder.encode(&123)?;
//!
//! assert_eq!(encoder.into_inner(), b"4:testi123e");
//! # Ok(())
//! # }
//! ```
//!
//! # Nesting depth limits
//!
//! Atoms (integers and byte strings) have depth 0, and lists and dicts have a depth equal to
//! the depth of their deepest member plus one. The encoder refuses anything nested deeper than
//! [`DEFAULT_MAX_DEPTH`] with [`Error::NestingTooDeep`] instead of running out of stack. Use
//! [`Encoder::with_max_depth`] to change the limit.
//!
//! # Error handling
//!
//! The first error aborts the whole call. [`marshal`] then returns no bytes at all, while an
//! [`Encoder`] leaves whatever was already written in its sink.

mod encoder;
mod error;
mod integer;
mod to_bencode;
mod token;

pub use self::{
    encoder::{DEFAULT_MAX_DEPTH, Encoder, marshal},
    error::{Error, ErrorKind},
    integer::{Integer, PrintableInteger},
    to_bencode::{AsString, DictPairs, Production, ToBencode},
};
