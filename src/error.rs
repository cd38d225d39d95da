use std::{fmt, io};

use crate::tag::Tag;

#[derive(Debug)]
pub enum FontParseError {
    /// The first four bytes are not a recognized SFNT or TTC signature.
    NotAFontFile {
        tag: [u8; 4],
    },
    /// Requested collection index is past the end of a TTC directory.
    BadFontIndex {
        index: u32,
        count: u32,
    },
    /// A table directory entry extends past the end of the file, or a
    /// structurally required field does. `tag` is `None` when the source
    /// simply ended before a field, with no table to blame.
    MalformedTable {
        tag: Option<Tag>,
    },
    /// The underlying source could not be read, as distinct from
    /// structural corruption.
    Io(io::Error),
}

impl FontParseError {
    /// The source ended before a structurally required field.
    pub(crate) fn short_read() -> Self {
        Self::MalformedTable { tag: None }
    }
}

impl From<io::Error> for FontParseError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::UnexpectedEof => Self::short_read(),
            _ => Self::Io(err),
        }
    }
}

impl fmt::Display for FontParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAFontFile { tag } => {
                write!(f, "not a valid true type font file (leading tag {tag:02x?})")
            }
            Self::BadFontIndex { index, count } => {
                write!(f, "bad font index {index} for a collection of {count} fonts")
            }
            Self::MalformedTable { tag: Some(tag) } => {
                write!(f, "bad table, tag={tag:?}: extends past the end of the file")
            }
            Self::MalformedTable { tag: None } => {
                write!(f, "font data ends before a required field")
            }
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for FontParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

pub type FontResult<T> = Result<T, FontParseError>;
