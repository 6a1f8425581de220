//! This module contains the NBT encoder. Use [`to_bytes`] to get the full tag
//! form of a value (its tag byte followed by its payload), or
//! [`to_payload_bytes`] for just the payload, which is how list elements and
//! compound values appear inside their parent.
//!
//! ```
//! use bednbt::{ser::to_bytes, Value};
//!
//! let bs = to_bytes(&Value::Short(1)).unwrap();
//! assert_eq!(bs, [2, 1, 0]);
//! ```
//!
//! Encoding fails if a string is longer than 65535 bytes or an array or list
//! has more than `i32::MAX` elements. The output is built depth first, so a
//! writer may have received a partial value when an error is returned. The
//! `to_bytes` functions only return complete buffers.
mod write_nbt;

use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};

use crate::error::Result;
use crate::{Compound, List, Tag, Value};

pub(crate) use write_nbt::WriteNbt;

/// Encode a value, including its leading tag byte.
pub fn to_bytes(value: &Value) -> Result<Vec<u8>> {
    let mut out = vec![];
    to_writer(&mut out, value)?;
    Ok(out)
}

/// Encode just the payload of a value, without its tag byte.
pub fn to_payload_bytes(value: &Value) -> Result<Vec<u8>> {
    let mut out = vec![];
    to_writer_payload(&mut out, value)?;
    Ok(out)
}

/// Write a value to the given writer, including its leading tag byte.
pub fn to_writer<W: Write>(mut writer: W, value: &Value) -> Result<()> {
    writer.write_tag(value.tag())?;
    write_payload(&mut writer, value)
}

/// Write just the payload of a value to the given writer.
pub fn to_writer_payload<W: Write>(mut writer: W, value: &Value) -> Result<()> {
    write_payload(&mut writer, value)
}

fn write_payload<W: Write>(w: &mut W, value: &Value) -> Result<()> {
    match value {
        Value::End => {}
        Value::Byte(v) => w.write_i8(*v)?,
        Value::Short(v) => w.write_i16::<LittleEndian>(*v)?,
        Value::Int(v) => w.write_i32::<LittleEndian>(*v)?,
        Value::Long(v) => w.write_i64::<LittleEndian>(*v)?,
        Value::Float(v) => w.write_f32::<LittleEndian>(*v)?,
        Value::Double(v) => w.write_f64::<LittleEndian>(*v)?,
        Value::ByteArray(bs) => {
            w.write_len(bs.len())?;
            w.write_all(bs)?;
        }
        Value::String(s) => w.write_size_prefixed_str(s)?,
        Value::List(list) => write_list(w, list)?,
        Value::Compound(compound) => write_compound(w, compound)?,
        Value::IntArray(is) => {
            w.write_len(is.len())?;
            for i in is.iter() {
                w.write_i32::<LittleEndian>(*i)?;
            }
        }
        Value::LongArray(ls) => {
            w.write_len(ls.len())?;
            for l in ls.iter() {
                w.write_i64::<LittleEndian>(*l)?;
            }
        }
    }

    Ok(())
}

fn write_list<W: Write>(w: &mut W, list: &List) -> Result<()> {
    // The element tag is written once, elements are bare payloads.
    w.write_tag(list.element_tag())?;
    w.write_len(list.len())?;
    for element in list.iter() {
        write_payload(w, element)?;
    }
    Ok(())
}

pub(crate) fn write_compound<W: Write>(w: &mut W, compound: &Compound) -> Result<()> {
    for (key, value) in compound.iter() {
        w.write_tag(value.tag())?;
        w.write_size_prefixed_str(key)?;
        write_payload(w, value)?;
    }
    w.write_tag(Tag::End)
}
