use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};

use crate::error::{Error, Result};
use crate::value::check_str_len;
use crate::Tag;

pub(crate) trait WriteNbt: Write {
    fn write_tag(&mut self, tag: Tag) -> Result<()> {
        self.write_u8(tag as u8)?;
        Ok(())
    }

    fn write_size_prefixed_str(&mut self, s: &str) -> Result<()> {
        check_str_len(s)?;
        self.write_u16::<LittleEndian>(s.len() as u16)?;
        self.write_all(s.as_bytes())?;
        Ok(())
    }

    /// Lengths of arrays and lists are signed 32 bit.
    fn write_len(&mut self, len: usize) -> Result<()> {
        self.write_i32::<LittleEndian>(
            len.try_into()
                .map_err(|_| Error::range(format!("len {} too large", len)))?,
        )?;

        Ok(())
    }
}

impl<T> WriteNbt for T where T: Write {}
