use std::{fs::File, io};

/// A finite byte sequence supporting positional reads.
///
/// Every read names its own offset, so a single open handle can serve
/// concurrent extractions. Implementations must not go through a shared
/// mutable cursor.
pub trait FontSource {
    /// Total length of the source in bytes.
    fn size(&self) -> io::Result<u64>;

    /// Fills `buf` with the bytes starting at `offset`, failing with
    /// [`io::ErrorKind::UnexpectedEof`] if the source is too short.
    fn read_block(&self, offset: u64, buf: &mut [u8]) -> io::Result<()>;
}

impl FontSource for [u8] {
    fn size(&self) -> io::Result<u64> {
        Ok(self.len() as u64)
    }

    fn read_block(&self, offset: u64, buf: &mut [u8]) -> io::Result<()> {
        let start = usize::try_from(offset)
            .ok()
            .filter(|&start| start <= self.len())
            .ok_or_else(eof)?;
        let end = start
            .checked_add(buf.len())
            .filter(|&end| end <= self.len())
            .ok_or_else(eof)?;

        buf.copy_from_slice(&self[start..end]);

        Ok(())
    }
}

impl FontSource for File {
    fn size(&self) -> io::Result<u64> {
        Ok(self.metadata()?.len())
    }

    #[cfg(unix)]
    fn read_block(&self, offset: u64, buf: &mut [u8]) -> io::Result<()> {
        use std::os::unix::fs::FileExt;

        self.read_exact_at(buf, offset)
    }

    #[cfg(windows)]
    fn read_block(&self, offset: u64, buf: &mut [u8]) -> io::Result<()> {
        use std::os::windows::fs::FileExt;

        let mut filled = 0;
        while filled < buf.len() {
            let read = self.seek_read(&mut buf[filled..], offset + filled as u64)?;
            if read == 0 {
                return Err(eof());
            }
            filled += read;
        }

        Ok(())
    }
}

fn eof() -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, "read past end of font source")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn slice_reads_are_positional() {
        let bytes = [0u8, 1, 2, 3, 4, 5, 6, 7];

        let mut buf = [0u8; 4];
        bytes.read_block(2, &mut buf).unwrap();
        assert_eq!(buf, [2, 3, 4, 5]);

        bytes.read_block(0, &mut buf).unwrap();
        assert_eq!(buf, [0, 1, 2, 3]);

        assert_eq!(bytes.size().unwrap(), 8);
    }

    #[test]
    fn slice_read_past_end_is_eof() {
        let bytes = [0u8; 4];

        let mut buf = [0u8; 4];
        let err = bytes.read_block(1, &mut buf).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);

        let err = bytes.read_block(u64::MAX, &mut buf).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
