use crate::encoding::Integer;

/// A raw bencode token as it is written to the output
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum Token<'a> {
    /// The beginning of a list
    List,
    /// The beginning of a dictionary
    Dict,
    /// A byte string; may not be UTF-8
    String(&'a [u8]),
    /// A canonical decimal number
    Num(&'a Integer),
    /// The end of a list or dictionary
    End,
}
