use std::{
    borrow::{Cow, ToOwned},
    collections::{BTreeMap, HashMap, LinkedList, VecDeque},
    fmt,
    rc::Rc,
    sync::Arc,
    time::Duration,
};

use crate::encoding::{Error, Integer};

/// One of the four bencode productions, as chosen for a single value.
///
/// Children of lists and dictionaries are only borrowed here; the encoder classifies them
/// when it reaches them, so a failing child is reported only once its siblings before it
/// have been written.
pub enum Production<'a> {
    /// A decimal integer
    Integer(Integer),
    /// A length-prefixed byte string
    Bytes(Cow<'a, [u8]>),
    /// A list whose order is kept as is
    List(Vec<&'a dyn ToBencode>),
    /// A dictionary in any order; the encoder sorts the keys before writing
    Dict(Vec<(Cow<'a, [u8]>, &'a dyn ToBencode)>),
}

impl<'a> Production<'a> {
    /// Classify a borrowed byte string
    pub fn bytes(bytes: &'a [u8]) -> Self {
        Production::Bytes(Cow::Borrowed(bytes))
    }

    /// Classify a sequence of encodable items
    pub fn list<I, E>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a E>,
        E: ToBencode + 'a,
    {
        Production::List(items.into_iter().map(|item| item as &dyn ToBencode).collect())
    }

    /// Classify a sequence of key/value pairs. The pairs don't have to be sorted.
    pub fn dict<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a K, &'a V)>,
        K: AsRef<[u8]> + ?Sized + 'a,
        V: ToBencode + 'a,
    {
        Production::Dict(
            pairs
                .into_iter()
                .map(|(key, value)| (Cow::Borrowed(key.as_ref()), value as &dyn ToBencode))
                .collect(),
        )
    }

    /// Start a dictionary from individually typed fields, e.g. for a struct
    ///
    /// ```
    /// # use bencanon::encoding::{Error, Production, ToBencode};
    /// struct Peer {
    ///     port: u16,
    ///     ip: String,
    /// }
    ///
    /// impl ToBencode for Peer {
    ///     fn classify(&self) -> Result<Production<'_>, Error> {
    ///         Ok(Production::build_dict()
    ///             .pair(b"port", &self.port)
    ///             .pair(b"ip", &self.ip)
    ///             .finish())
    ///     }
    /// }
    ///
    /// let peer = Peer { port: 6881, ip: "10.0.0.1".to_owned() };
    /// assert_eq!(peer.to_bencode()?, b"d2:ip8:10.0.0.14:porti6881ee");
    /// # Ok::<(), Error>(())
    /// ```
    pub fn build_dict() -> DictPairs<'a> {
        DictPairs { pairs: Vec::new() }
    }

    /// The name of this production, used in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            Production::Integer(_) => "Integer",
            Production::Bytes(_) => "Bytes",
            Production::List(_) => "List",
            Production::Dict(_) => "Dict",
        }
    }
}

impl fmt::Debug for Production<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Production::Integer(integer) => f.debug_tuple("Integer").field(integer).finish(),
            Production::Bytes(bytes) => f
                .debug_tuple("Bytes")
                .field(&String::from_utf8_lossy(bytes))
                .finish(),
            Production::List(items) => write!(f, "List(<{} items>)", items.len()),
            Production::Dict(pairs) => f
                .debug_list()
                .entries(pairs.iter().map(|(key, _)| String::from_utf8_lossy(key)))
                .finish(),
        }
    }
}

/// Collects the pairs of a dictionary production. See [`Production::build_dict`].
pub struct DictPairs<'a> {
    pairs: Vec<(Cow<'a, [u8]>, &'a dyn ToBencode)>,
}

impl<'a> DictPairs<'a> {
    /// Add a key/value pair. Keys may be added in any order.
    #[must_use]
    pub fn pair<E: ToBencode>(mut self, key: &'a [u8], value: &'a E) -> Self {
        self.pairs.push((Cow::Borrowed(key), value as &dyn ToBencode));
        self
    }

    /// Add a pair whose key is computed rather than borrowed
    #[must_use]
    pub fn owned_pair<E: ToBencode>(mut self, key: Vec<u8>, value: &'a E) -> Self {
        self.pairs.push((Cow::Owned(key), value as &dyn ToBencode));
        self
    }

    /// Finish the dictionary
    pub fn finish(self) -> Production<'a> {
        Production::Dict(self.pairs)
    }
}

/// An object that can be encoded into a single bencode object
pub trait ToBencode {
    /// Decide which bencode production represents this value.
    ///
    /// Shapes without a bencode representation return [`Error::UnsupportedType`].
    fn classify(&self) -> Result<Production<'_>, Error>;

    /// Encode this object to a byte string
    fn to_bencode(&self) -> Result<Vec<u8>, Error> {
        crate::encoding::marshal(self)
    }
}

/// Wrapper to allow `Vec<u8>` encoding as bencode string element.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct AsString<I>(pub I);

// Forwarding impls
impl<E: ToBencode + ?Sized> ToBencode for &E {
    fn classify(&self) -> Result<Production<'_>, Error> {
        E::classify(self)
    }
}

impl<E: ToBencode + ?Sized> ToBencode for &mut E {
    fn classify(&self) -> Result<Production<'_>, Error> {
        E::classify(self)
    }
}

impl<E: ToBencode + ?Sized> ToBencode for Box<E> {
    fn classify(&self) -> Result<Production<'_>, Error> {
        E::classify(self)
    }
}

impl<E: ToBencode + ?Sized> ToBencode for Rc<E> {
    fn classify(&self) -> Result<Production<'_>, Error> {
        E::classify(self)
    }
}

impl<E: ToBencode + ?Sized> ToBencode for Arc<E> {
    fn classify(&self) -> Result<Production<'_>, Error> {
        E::classify(self)
    }
}

impl<E> ToBencode for Cow<'_, E>
where
    E: ToBencode + ToOwned + ?Sized,
{
    fn classify(&self) -> Result<Production<'_>, Error> {
        E::classify(self)
    }
}

/// `Some` is encoded as its content. There is no bencode value for `None`.
impl<E: ToBencode> ToBencode for Option<E> {
    fn classify(&self) -> Result<Production<'_>, Error> {
        match self {
            Some(value) => value.classify(),
            None => Err(Error::unsupported_type("Option::None")),
        }
    }
}

// Base type impls
impl ToBencode for str {
    fn classify(&self) -> Result<Production<'_>, Error> {
        Ok(Production::bytes(self.as_bytes()))
    }
}

impl ToBencode for String {
    fn classify(&self) -> Result<Production<'_>, Error> {
        Ok(Production::bytes(self.as_bytes()))
    }
}

impl ToBencode for Integer {
    fn classify(&self) -> Result<Production<'_>, Error> {
        Ok(Production::Integer(self.clone()))
    }
}

impl ToBencode for Duration {
    fn classify(&self) -> Result<Production<'_>, Error> {
        Ok(Production::Integer(Integer::from(*self)))
    }
}

macro_rules! impl_encodable_integer {
    ($($type:ty)*) => {$(
        impl ToBencode for $type {
            fn classify(&self) -> Result<Production<'_>, Error> {
                Ok(Production::Integer(Integer::from(*self)))
            }
        }
    )*}
}

impl_encodable_integer!(u8 u16 u32 u64 u128 usize i8 i16 i32 i64 i128 isize);

macro_rules! impl_unsupported {
    ($($type:ty => $name:literal)*) => {$(
        impl ToBencode for $type {
            fn classify(&self) -> Result<Production<'_>, Error> {
                Err(Error::unsupported_type($name))
            }
        }
    )*}
}

impl_unsupported!(bool => "bool" f32 => "f32" f64 => "f64" char => "char" () => "()");

macro_rules! impl_encodable_iterable {
    ($($type:ident)*) => {$(
        impl <ContentT> ToBencode for $type<ContentT>
        where
            ContentT: ToBencode
        {
            fn classify(&self) -> Result<Production<'_>, Error> {
                Ok(Production::list(self))
            }
        }
    )*}
}

impl_encodable_iterable!(Vec VecDeque LinkedList);

impl<ContentT: ToBencode> ToBencode for [ContentT] {
    fn classify(&self) -> Result<Production<'_>, Error> {
        Ok(Production::list(self))
    }
}

impl<ContentT: ToBencode, const N: usize> ToBencode for [ContentT; N] {
    fn classify(&self) -> Result<Production<'_>, Error> {
        Ok(Production::list(self))
    }
}

// Tuples are the statically typed form of a heterogeneous list
macro_rules! impl_encodable_tuple {
    ($(($($name:ident . $index:tt),+))*) => {$(
        impl<$($name: ToBencode),+> ToBencode for ($($name,)+) {
            fn classify(&self) -> Result<Production<'_>, Error> {
                Ok(Production::List(vec![$(&self.$index as &dyn ToBencode),+]))
            }
        }
    )*}
}

impl_encodable_tuple! {
    (A.0)
    (A.0, B.1)
    (A.0, B.1, C.2)
    (A.0, B.1, C.2, D.3)
    (A.0, B.1, C.2, D.3, E.4)
    (A.0, B.1, C.2, D.3, E.4, F.5)
    (A.0, B.1, C.2, D.3, E.4, F.5, G.6)
    (A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7)
}

impl<K: AsRef<[u8]>, V: ToBencode> ToBencode for BTreeMap<K, V> {
    fn classify(&self) -> Result<Production<'_>, Error> {
        Ok(Production::dict(self))
    }
}

impl<K, V, S> ToBencode for HashMap<K, V, S>
where
    K: AsRef<[u8]>,
    V: ToBencode,
{
    fn classify(&self) -> Result<Production<'_>, Error> {
        Ok(Production::dict(self))
    }
}

impl<I> ToBencode for AsString<I>
where
    I: AsRef<[u8]>,
{
    fn classify(&self) -> Result<Production<'_>, Error> {
        Ok(Production::bytes(self.0.as_ref()))
    }
}

impl<I> AsRef<[u8]> for AsString<I>
where
    I: AsRef<[u8]>,
{
    fn as_ref(&self) -> &'_ [u8] {
        self.0.as_ref()
    }
}

impl<'a, I> From<&'a [u8]> for AsString<I>
where
    I: From<&'a [u8]>,
{
    fn from(content: &'a [u8]) -> Self {
        AsString(I::from(content))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    struct Foo {
        bar: u32,
        baz: Vec<String>,
        qux: AsString<Vec<u8>>,
    }

    impl ToBencode for Foo {
        fn classify(&self) -> Result<Production<'_>, Error> {
            Ok(Production::build_dict()
                .pair(b"qux", &self.qux)
                .pair(b"bar", &self.bar)
                .pair(b"baz", &self.baz)
                .finish())
        }
    }

    #[test]
    fn simple_encodable_works() {
        let foo = Foo {
            bar: 5,
            baz: vec!["foo".to_owned(), "bar".to_owned()],
            qux: AsString(b"qux".to_vec()),
        };
        assert_eq!(
            &foo.to_bencode().unwrap()[..],
            &b"d3:bari5e3:bazl3:foo3:bare3:qux3:quxe"[..]
        );
    }

    #[test]
    fn integers_classify_as_integers() {
        assert_eq!(
            format!("{:?}", 45u64.classify().unwrap()),
            r#"Integer(Integer("45"))"#
        );
        assert_eq!(Duration::from_secs(1800).classify().unwrap().name(), "Integer");
    }

    #[test]
    fn text_and_bytes_classify_identically() {
        let text = "example".classify().unwrap();
        let bytes = AsString(b"example".to_vec());
        let bytes = bytes.classify().unwrap();

        match (text, bytes) {
            (Production::Bytes(text), Production::Bytes(bytes)) => assert_eq!(text, bytes),
            other => panic!("expected two byte strings, got {:?}", other),
        }
    }

    #[test]
    fn unsupported_scalars_are_rejected() {
        assert!(matches!(true.classify(), Err(Error::UnsupportedType("bool"))));
        assert!(matches!(ToBencode::classify(&1.5f64), Err(Error::UnsupportedType("f64"))));
        assert!(matches!(().classify(), Err(Error::UnsupportedType("()"))));
        assert!(matches!(
            None::<i32>.classify(),
            Err(Error::UnsupportedType("Option::None"))
        ));
    }

    #[test]
    fn tuples_are_heterogeneous_lists() {
        let tuple = (1, "two", vec![3u8]);
        match tuple.classify().unwrap() {
            Production::List(items) => assert_eq!(items.len(), 3),
            other => panic!("expected a list, got {:?}", other),
        }
        assert_eq!(tuple.to_bencode().unwrap(), b"li1e3:twoli3eee");
    }
}
