mod compound;
mod list;

use crate::error::{Error, Result};
use crate::{ByteArray, IntArray, LongArray, Tag};

pub use self::compound::Compound;
pub use self::list::List;

/// Value is a complete NBT value. It owns its data. Compounds and Lists are
/// recursively decoded. The name of the root compound is not part of the
/// value, the level file format always leaves it empty.
///
/// Scalar variants can be built directly, or through the checked
/// constructors such as [`Value::byte`] which accept any integer and fail
/// with a range error if it does not fit.
///
/// ```
/// # use bednbt::Value;
/// # use bednbt::error::Result;
/// # fn main() -> Result<()> {
/// assert_eq!(Value::byte(127)?, Value::Byte(127));
/// assert!(Value::byte(200).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Only appears when a lone End tag is decoded. It can not be held by a
    /// list or compound.
    End,
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(ByteArray),
    String(String),
    List(List),
    Compound(Compound),
    IntArray(IntArray),
    LongArray(LongArray),
}

/// A primitive number that can be stored as a Float or Double.
pub trait Numeric: Copy {
    fn to_f64(self) -> f64;

    fn to_f32(self) -> f32;
}

macro_rules! numeric {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn to_f32(self) -> f32 {
                    self as f32
                }
            }
        )*
    };
}
numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Longest string, in UTF-8 bytes, that fits behind the 16 bit length prefix.
pub const MAX_STRING_LEN: usize = u16::MAX as usize;

pub(crate) fn checked<T, I>(v: I, name: &str) -> Result<T>
where
    I: Into<i128>,
    T: TryFrom<i128>,
{
    let v = v.into();
    T::try_from(v).map_err(|_| Error::range(format!("{} out of range for {}", v, name)))
}

pub(crate) fn check_str_len(s: &str) -> Result<()> {
    if s.len() > MAX_STRING_LEN {
        Err(Error::range(format!(
            "string of {} bytes is too long, the limit is {}",
            s.len(),
            MAX_STRING_LEN
        )))
    } else {
        Ok(())
    }
}

impl Value {
    /// The tag type of this value, as written before it in a compound.
    pub fn tag(&self) -> Tag {
        match self {
            Value::End => Tag::End,
            Value::Byte(_) => Tag::Byte,
            Value::Short(_) => Tag::Short,
            Value::Int(_) => Tag::Int,
            Value::Long(_) => Tag::Long,
            Value::Float(_) => Tag::Float,
            Value::Double(_) => Tag::Double,
            Value::ByteArray(_) => Tag::ByteArray,
            Value::String(_) => Tag::String,
            Value::List(_) => Tag::List,
            Value::Compound(_) => Tag::Compound,
            Value::IntArray(_) => Tag::IntArray,
            Value::LongArray(_) => Tag::LongArray,
        }
    }

    pub fn byte(v: impl Into<i128>) -> Result<Value> {
        Ok(Value::Byte(checked(v, "Byte")?))
    }

    pub fn short(v: impl Into<i128>) -> Result<Value> {
        Ok(Value::Short(checked(v, "Short")?))
    }

    pub fn int(v: impl Into<i128>) -> Result<Value> {
        Ok(Value::Int(checked(v, "Int")?))
    }

    pub fn long(v: impl Into<i128>) -> Result<Value> {
        Ok(Value::Long(checked(v, "Long")?))
    }

    /// Any number is accepted, it is converted to `f32`.
    pub fn float(v: impl Numeric) -> Value {
        Value::Float(v.to_f32())
    }

    /// Any number is accepted. Integers wider than 53 bits may be rounded.
    pub fn double(v: impl Numeric) -> Value {
        Value::Double(v.to_f64())
    }

    /// Fails if the UTF-8 encoding of `s` is longer than [`MAX_STRING_LEN`].
    pub fn string(s: impl Into<String>) -> Result<Value> {
        let s = s.into();
        check_str_len(&s)?;
        Ok(Value::String(s))
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Byte(v) => Some(v as i64),
            Value::Short(v) => Some(v as i64),
            Value::Int(v) => Some(v as i64),
            Value::Long(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Byte(v) => Some(v as f64),
            Value::Short(v) => Some(v as f64),
            Value::Int(v) => Some(v as f64),
            Value::Long(v) => Some(v as f64),
            Value::Float(v) => Some(v as f64),
            Value::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Value::Compound(v) => Some(v),
            _ => None,
        }
    }
}

// ------------- From<T> impls -------------

macro_rules! from {
    ($type:ty, $variant:ident $(, $($part:tt)+)?) => {
        impl From<$type> for Value {
            fn from(val: $type) -> Self {
                Self::$variant(val$($($part)+)?)
            }
        }
    };
}
from!(i8, Byte);
from!(i16, Short);
from!(i32, Int);
from!(i64, Long);
from!(f32, Float);
from!(f64, Double);
from!(String, String);
from!(&str, String, .to_owned());
from!(ByteArray, ByteArray);
from!(IntArray, IntArray);
from!(LongArray, LongArray);
from!(List, List);
from!(Compound, Compound);

impl From<bool> for Value {
    fn from(val: bool) -> Self {
        Self::Byte(i8::from(val))
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_str().map_or(false, |s| s == other)
    }
}

impl<'a> PartialEq<&'a str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_str().map_or(false, |s| s == *other)
    }
}
