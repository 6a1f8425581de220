use byteorder::{ByteOrder, LittleEndian};

use crate::{
    error::{Error, Result},
    Tag,
};

/// Cursor over the `[pos, end)` window of an immutable buffer.
pub(crate) struct Slice<'de> {
    data: &'de [u8],
    pos: usize,
    end: usize,
}

impl<'de> Slice<'de> {
    pub(crate) fn new(data: &'de [u8], start: usize, end: usize) -> Result<Self> {
        if start > end || end > data.len() {
            return Err(Error::range(format!(
                "decode window {}..{} is not within a buffer of {} bytes",
                start,
                end,
                data.len()
            )));
        }

        Ok(Self {
            data,
            pos: start,
            end,
        })
    }

    pub(crate) fn whole(data: &'de [u8]) -> Self {
        Self {
            data,
            pos: 0,
            end: data.len(),
        }
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn remaining(&self) -> usize {
        self.end - self.pos
    }

    fn consume(&mut self, n: usize) -> Result<&'de [u8]> {
        if n <= self.remaining() {
            let ret = &self.data[self.pos..self.pos + n];
            self.pos += n;
            Ok(ret)
        } else {
            Err(Error::truncated(self.pos, n))
        }
    }

    pub(crate) fn consume_byte(&mut self) -> Result<u8> {
        Ok(self.consume(1)?[0])
    }

    pub(crate) fn consume_tag(&mut self) -> Result<Tag> {
        let offset = self.pos;
        let tag = self.consume_byte()?;
        Tag::try_from(tag).map_err(|_| Error::unknown_tag(tag, offset))
    }

    pub(crate) fn consume_bytes(&mut self, n: usize) -> Result<&'de [u8]> {
        self.consume(n)
    }

    pub(crate) fn consume_i8(&mut self) -> Result<i8> {
        Ok(self.consume_byte()? as i8)
    }

    pub(crate) fn consume_i16(&mut self) -> Result<i16> {
        Ok(LittleEndian::read_i16(self.consume(2)?))
    }

    pub(crate) fn consume_u16(&mut self) -> Result<u16> {
        Ok(LittleEndian::read_u16(self.consume(2)?))
    }

    pub(crate) fn consume_i32(&mut self) -> Result<i32> {
        Ok(LittleEndian::read_i32(self.consume(4)?))
    }

    pub(crate) fn consume_i64(&mut self) -> Result<i64> {
        Ok(LittleEndian::read_i64(self.consume(8)?))
    }

    pub(crate) fn consume_f32(&mut self) -> Result<f32> {
        Ok(LittleEndian::read_f32(self.consume(4)?))
    }

    pub(crate) fn consume_f64(&mut self) -> Result<f64> {
        Ok(LittleEndian::read_f64(self.consume(8)?))
    }

    /// Array and list lengths are signed, negative ones are rejected.
    pub(crate) fn consume_len(&mut self) -> Result<usize> {
        let offset = self.pos;
        let len = self.consume_i32()?;
        usize::try_from(len)
            .map_err(|_| Error::range(format!("negative length {} at offset {}", len, offset)))
    }

    pub(crate) fn consume_str(&mut self) -> Result<&'de str> {
        let len = self.consume_u16()? as usize;
        let offset = self.pos;
        let bs = self.consume(len)?;
        std::str::from_utf8(bs).map_err(|_| Error::nonunicode_string(bs, offset))
    }
}
