use std::fmt::{self, Write};

/// A 4-byte big-endian table or container identifier.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Tag(pub [u8; 4]);

impl Tag {
    pub const fn new(tag: [u8; 4]) -> Self {
        Self(tag)
    }

    /// Leading tag of a TrueType collection ('ttcf').
    pub const TTCF: Tag = Tag::new(*b"ttcf");

    /// SFNT version 1.0.
    pub const SFNT_V1: Tag = Tag::new(0x00010000u32.to_be_bytes());

    /// Legacy Apple 'true' signature, still found in older TrueType files.
    pub const TRUE: Tag = Tag::new(*b"true");

    /// The naming table.
    pub const NAME: Tag = Tag::new(*b"name");
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.0[0] as char)?;
        f.write_char(self.0[1] as char)?;
        f.write_char(self.0[2] as char)?;
        f.write_char(self.0[3] as char)?;

        Ok(())
    }
}
