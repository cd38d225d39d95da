use std::fmt;

use crate::{
    error::{FontParseError, FontResult},
    tag::Tag,
};

/// Big-endian cursor reader over an in-memory table buffer.
pub(crate) struct SfntParser<'a> {
    pub buffer: &'a [u8],
    pub cursor: usize,
}

impl fmt::Debug for SfntParser<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SfntParser")
            .field("cursor", &self.cursor)
            .field("buffer", &format!("[ {} bytes ]", self.buffer.len()))
            .finish()
    }
}

impl<'a> SfntParser<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { buffer, cursor: 0 }
    }

    fn next(&mut self) -> FontResult<u8> {
        self.buffer
            .get(self.cursor)
            .map(|b| {
                self.cursor += 1;
                *b
            })
            .ok_or_else(FontParseError::short_read)
    }

    pub fn read_u16(&mut self) -> FontResult<u16> {
        let b1 = self.next()?;
        let b2 = self.next()?;

        Ok(u16::from_be_bytes([b1, b2]))
    }

    pub fn read_u32(&mut self) -> FontResult<u32> {
        let b1 = self.next()?;
        let b2 = self.next()?;
        let b3 = self.next()?;
        let b4 = self.next()?;

        Ok(u32::from_be_bytes([b1, b2, b3, b4]))
    }

    pub fn read_tag(&mut self) -> FontResult<Tag> {
        let b1 = self.next()?;
        let b2 = self.next()?;
        let b3 = self.next()?;
        let b4 = self.next()?;

        Ok(Tag::new([b1, b2, b3, b4]))
    }

    /// Reads `length` bytes at an absolute offset without moving the cursor.
    pub fn read_bytes_at(&self, offset: usize, length: usize) -> FontResult<&'a [u8]> {
        offset
            .checked_add(length)
            .and_then(|end| self.buffer.get(offset..end))
            .ok_or_else(FontParseError::short_read)
    }
}
