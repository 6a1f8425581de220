//! This module contains the NBT decoder. The whole input is held in memory and
//! read with a cursor; the tag bytes in the stream alone decide what is read
//! next.
//!
//! ```
//! use bednbt::{de::from_bytes, Value};
//!
//! let v = from_bytes(&[3, 1, 0, 0, 0]).unwrap();
//! assert_eq!(v, Value::Int(1));
//! ```
//!
//! Every read is bounds checked against the end of the window being decoded,
//! so truncated input gives an error rather than a partial value. Other checks
//! made while decoding:
//! * tag bytes must be in `0..=12`,
//! * strings must be valid UTF-8,
//! * compounds can not repeat a key,
//! * array and list lengths can not be negative,
//! * nesting is limited to [`MAX_DEPTH`] lists and compounds.
//!
//! Decoding stops at the end of the value. Any bytes after it are left
//! untouched, use [`Decoder::remaining`] to check for them.
mod input;

use crate::error::{Error, Result};
use crate::{ByteArray, Compound, IntArray, List, LongArray, Tag, Value};

use input::Slice;

/// Maximum nesting of lists and compounds, to avoid overflowing the stack on
/// hostile input.
pub const MAX_DEPTH: usize = 512;

/// Most list elements reserved up front. Larger lists grow as they are read.
const MAX_LIST_PREALLOC: usize = 1024;

/// Capacity to reserve for a list claiming `len` elements. Every element
/// payload is at least one byte.
pub(crate) fn list_capacity(len: usize, remaining: usize) -> usize {
    len.min(remaining).min(MAX_LIST_PREALLOC)
}

/// Decode a value, including its leading tag byte, from the start of the
/// input.
pub fn from_bytes(input: &[u8]) -> Result<Value> {
    Decoder::new(input).decode()
}

/// Decode a value from the `[start, end)` window of the input. Reads never go
/// past `end`.
pub fn from_bytes_range(input: &[u8], start: usize, end: usize) -> Result<Value> {
    Decoder::with_range(input, start, end)?.decode()
}

/// Decode the payload of a value whose tag is already known, eg because it was
/// read from somewhere else.
pub fn from_payload_bytes(input: &[u8], tag: Tag) -> Result<Value> {
    Decoder::new(input).decode_payload(tag)
}

/// Stateful cursor based decoder.
pub struct Decoder<'de> {
    input: Slice<'de>,
    depth: usize,
}

impl<'de> Decoder<'de> {
    pub fn new(input: &'de [u8]) -> Self {
        Self {
            input: Slice::whole(input),
            depth: 0,
        }
    }

    /// Create a decoder over `input[start..end]`. Offsets in errors stay
    /// relative to the whole input.
    pub fn with_range(input: &'de [u8], start: usize, end: usize) -> Result<Self> {
        Ok(Self {
            input: Slice::new(input, start, end)?,
            depth: 0,
        })
    }

    /// Offset of the next byte to be read.
    pub fn position(&self) -> usize {
        self.input.position()
    }

    /// Number of bytes left before the end of the window.
    pub fn remaining(&self) -> usize {
        self.input.remaining()
    }

    /// Read a tag byte and then the payload for that tag.
    pub fn decode(&mut self) -> Result<Value> {
        let tag = self.input.consume_tag()?;
        self.decode_payload(tag)
    }

    /// Read the payload of the given tag.
    pub fn decode_payload(&mut self, tag: Tag) -> Result<Value> {
        Ok(match tag {
            Tag::End => Value::End,
            Tag::Byte => Value::Byte(self.input.consume_i8()?),
            Tag::Short => Value::Short(self.input.consume_i16()?),
            Tag::Int => Value::Int(self.input.consume_i32()?),
            Tag::Long => Value::Long(self.input.consume_i64()?),
            Tag::Float => Value::Float(self.input.consume_f32()?),
            Tag::Double => Value::Double(self.input.consume_f64()?),
            Tag::ByteArray => {
                let len = self.input.consume_len()?;
                Value::ByteArray(ByteArray::new(self.input.consume_bytes(len)?.to_vec()))
            }
            Tag::String => Value::String(self.input.consume_str()?.to_owned()),
            Tag::List => Value::List(self.nested(Self::list_payload)?),
            Tag::Compound => Value::Compound(self.nested(Self::compound_payload)?),
            Tag::IntArray => {
                let len = self.input.consume_len()?;
                let mut data = Vec::with_capacity(len.min(self.remaining() / 4));
                for _ in 0..len {
                    data.push(self.input.consume_i32()?);
                }
                Value::IntArray(IntArray::new(data))
            }
            Tag::LongArray => {
                let len = self.input.consume_len()?;
                let mut data = Vec::with_capacity(len.min(self.remaining() / 8));
                for _ in 0..len {
                    data.push(self.input.consume_i64()?);
                }
                Value::LongArray(LongArray::new(data))
            }
        })
    }

    /// Read the payload of a compound: entries up to and including the End
    /// tag. This is how the body of a level file is stored.
    pub fn decode_compound(&mut self) -> Result<Compound> {
        self.nested(Self::compound_payload)
    }

    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= MAX_DEPTH {
            return Err(Error::range(format!(
                "nbt nested deeper than {} at offset {}",
                MAX_DEPTH,
                self.position()
            )));
        }

        self.depth += 1;
        let res = f(self);
        self.depth -= 1;
        res
    }

    fn list_payload(&mut self) -> Result<List> {
        let element = self.input.consume_tag()?;
        let len = self.input.consume_len()?;

        // A list of End is how empty lists are written, whatever the length
        // claims there are no payloads to read.
        if element == Tag::End {
            return Ok(List::empty());
        }

        let mut values = Vec::with_capacity(list_capacity(len, self.remaining()));
        for _ in 0..len {
            values.push(self.decode_payload(element)?);
        }

        List::new(values)
    }

    fn compound_payload(&mut self) -> Result<Compound> {
        let mut compound = Compound::new();

        loop {
            let tag = self.input.consume_tag()?;
            if tag == Tag::End {
                break;
            }

            let offset = self.position();
            let key = self.input.consume_str()?;
            if compound.contains_key(key) {
                return Err(Error::duplicate_key(key).context(&format!("offset {}", offset)));
            }

            let value = self.decode_payload(tag)?;
            compound.insert(key, value)?;
        }

        Ok(compound)
    }
}
