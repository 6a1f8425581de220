//! bednbt reads and writes the little-endian NBT flavour used by
//! *Minecraft: Bedrock Edition* for its `level.dat` world metadata files.
//!
//! * For the in-memory tree see [`Value`], [`List`] and [`Compound`].
//! * For encoding see [`ser`], for decoding see [`de`].
//! * For the `level.dat` header and the default world layout see [`level`].
//! * For NBT array types see [`ByteArray`], [`IntArray`], and [`LongArray`].
//!
//! Unlike the Java Edition format every number is stored little-endian, and
//! strings are plain UTF-8 prefixed by a 16 bit length.
//!
//! # Validation
//!
//! Values are validated when they are constructed. The checked constructors on
//! [`Value`] take a wide integer and fail with a range error if it does not fit
//! the variant, lists refuse mixed element types, and compounds refuse
//! duplicate keys. The decoder performs the same checks on untrusted input.
//!
//! # Quick example
//!
//! ```
//! use bednbt::{compound, level, Value};
//!
//! # fn main() -> bednbt::error::Result<()> {
//! let data = compound! {
//!     "LevelName" => "World",
//!     "GameType" => 1,
//!     "RandomSeed" => 42_i64,
//! }?;
//!
//! let bytes = level::write_level_file(&data)?;
//! assert_eq!(&bytes[..4], &[0x0A, 0, 0, 0]);
//!
//! let back = level::read_level_file(&bytes)?;
//! assert_eq!(back["GameType"], Value::Int(1));
//! # Ok(())
//! # }
//! ```

pub mod de;
pub mod error;
pub mod level;
pub mod ser;

mod arrays;
mod macros;
mod value;

pub use arrays::*;
pub use de::{from_bytes, from_bytes_range, from_payload_bytes};
pub use ser::{to_bytes, to_payload_bytes, to_writer, to_writer_payload};
pub use value::*;

#[cfg(test)]
mod test;

/// An NBT tag. This does not carry the value or the name of the data.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[repr(u8)]
pub enum Tag {
    /// Represents the end of a Compound object, or the element type of an
    /// empty list.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// Represents as array of unsigned bytes.
    ByteArray = 7,
    /// Represents a UTF-8 string.
    String = 8,
    /// Represents a list of other objects, all of the same type.
    List = 9,
    /// Represents a struct-like structure.
    Compound = 10,
    /// Represents as array of Int (i32).
    IntArray = 11,
    /// Represents as array of Long (i64).
    LongArray = 12,
}

// The tags will very rarely change, so writing the table out by hand is not a
// burden and keeps the dispatch a plain match.
impl TryFrom<u8> for Tag {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        use Tag::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12 => LongArray,
            13..=u8::MAX => return Err(()),
        })
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        match tag {
            Tag::End => 0,
            Tag::Byte => 1,
            Tag::Short => 2,
            Tag::Int => 3,
            Tag::Long => 4,
            Tag::Float => 5,
            Tag::Double => 6,
            Tag::ByteArray => 7,
            Tag::String => 8,
            Tag::List => 9,
            Tag::Compound => 10,
            Tag::IntArray => 11,
            Tag::LongArray => 12,
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}
