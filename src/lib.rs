//! Encodes values of any shape into canonical bencode.
//!
//! Every value is classified as one of the four bencode productions (integer, byte string,
//! list, dictionary) and written in the single canonical form the format allows: integers
//! without leading zeros, exact length prefixes, lists in input order and dictionaries with
//! their keys sorted byte by byte. Two values with the same content therefore always produce
//! the same bytes, whatever order a hash map happened to iterate in.
//!
//! ```
//! use std::collections::HashMap;
//!
//! use bencanon::{marshal, Encoder};
//!
//! let mut dict = HashMap::new();
//! dict.insert("two", "bb");
//! dict.insert("one", "aa");
//! assert_eq!(marshal(&dict).unwrap(), b"d3:one2:aa3:two2:bbe");
//!
//! let mut encoder = Encoder::new(Vec::new());
//! encoder.encode(&vec!["one", "two"]).unwrap();
//! encoder.encode(&-42).unwrap();
//! assert_eq!(encoder.into_inner(), b"l3:one3:twoei-42e");
//! ```
//!
//! See [`encoding`] for implementing the encoding of your own types, [`value`] for building
//! values at runtime and, with the `serde` feature, [`serde`](crate::serde) for encoding
//! anything that implements `Serialize`.
#![cfg_attr(not(test), warn(missing_docs))]

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

pub mod encoding;
pub mod value;

#[cfg(feature = "serde")]
pub mod serde;

pub use crate::{
    encoding::{Encoder, Error, ToBencode, marshal},
    value::Value,
};
