use std::io::Write;

use tracing::{debug, trace};

use crate::encoding::{Error, Production, ToBencode, token::Token};

/// Nesting depth allowed unless [`Encoder::with_max_depth`] says otherwise.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Writes canonical bencode into a sink.
///
/// Every call to [`Encoder::encode`] appends exactly one complete top-level object to the
/// sink, so a single encoder can stream many values to the same destination. Calls are
/// independent of each other: nothing about one value influences how the next is written.
///
/// If an error occurs, the bytes that were already handed to the sink stay there. Buffer the
/// output (or use [`marshal`]) if a partially written object must never become visible.
///
/// [`marshal`]: crate::encoding::marshal
#[derive(Debug)]
pub struct Encoder<W> {
    sink: W,
    max_depth: usize,
}

impl<W: Write> Encoder<W> {
    /// Create a new encoder writing to `sink`
    pub fn new(sink: W) -> Self {
        Encoder {
            sink,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the max depth of the encoded objects. Atoms have depth 0, a list or dict holding
    /// only atoms has depth 1.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Emit an arbitrary encodable object
    pub fn encode<E: ToBencode + ?Sized>(&mut self, value: &E) -> Result<(), Error> {
        let result = value
            .classify()
            .and_then(|production| self.emit_production(production, 0));

        match &result {
            Ok(()) => trace!("encoded one bencode object"),
            Err(error) => debug!(%error, "bencode encoding aborted"),
        }

        result
    }

    /// Borrow the sink
    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    /// Mutably borrow the sink. Writing to it directly can interleave with encoded objects.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    /// Return the sink
    pub fn into_inner(self) -> W {
        self.sink
    }

    /// Emit a single token to the sink
    fn emit_token(&mut self, token: Token) -> Result<(), Error> {
        match token {
            Token::List => self.sink.write_all(b"l")?,
            Token::Dict => self.sink.write_all(b"d")?,
            Token::String(s) => {
                write!(self.sink, "{}:", s.len())?;
                self.sink.write_all(s)?;
            },
            Token::Num(num) => {
                self.sink.write_all(b"i")?;
                self.sink.write_all(num.as_bytes())?;
                self.sink.write_all(b"e")?;
            },
            Token::End => self.sink.write_all(b"e")?,
        }

        Ok(())
    }

    fn emit_value(&mut self, value: &dyn ToBencode, depth: usize) -> Result<(), Error> {
        let production = value.classify()?;
        self.emit_production(production, depth)
    }

    fn emit_production(&mut self, production: Production, depth: usize) -> Result<(), Error> {
        match production {
            Production::Integer(integer) => self.emit_token(Token::Num(&integer)),
            Production::Bytes(bytes) => self.emit_token(Token::String(&bytes)),
            Production::List(items) => {
                let depth = self.descend(depth)?;

                self.emit_token(Token::List)?;
                for item in items {
                    self.emit_value(item, depth)?;
                }
                self.emit_token(Token::End)
            },
            Production::Dict(mut pairs) => {
                let depth = self.descend(depth)?;

                // Ties can't be ordered canonically, so they are refused before anything of
                // this dict reaches the sink
                pairs.sort_by(|(a, _), (b, _)| a.cmp(b));
                if let Some(pair) = pairs.windows(2).find(|pair| pair[0].0 == pair[1].0) {
                    return Err(Error::DuplicateKey(pair[0].0.to_vec()));
                }

                self.emit_token(Token::Dict)?;
                for (key, value) in pairs {
                    self.emit_token(Token::String(&key))?;
                    self.emit_value(value, depth)?;
                }
                self.emit_token(Token::End)
            },
        }
    }

    fn descend(&self, depth: usize) -> Result<usize, Error> {
        if depth >= self.max_depth {
            return Err(Error::NestingTooDeep {
                max_depth: self.max_depth,
            });
        }
        Ok(depth + 1)
    }
}

/// Encode `value` into a fresh buffer.
///
/// On error nothing is returned, not even the part that was encoded before the failure.
pub fn marshal<E: ToBencode + ?Sized>(value: &E) -> Result<Vec<u8>, Error> {
    let mut encoder = Encoder::new(Vec::new());
    encoder.encode(value)?;
    Ok(encoder.into_inner())
}
