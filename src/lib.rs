//! Fast TrueType/OpenType font-name extraction.
//!
//! Reads the binary `name` table of a `.ttf`/`.otf`/`.ttc` file directly to
//! recover the family and full font names, without instantiating the font
//! through a rasterizer.
//!
//! The crate also ships the thin layer most callers want around the parser:
//! a suffix-to-extractor registry, a bounded name cache and a directory
//! scanner that builds a name-to-path index.
//!
//! ```no_run
//! use fontnames::extract_file_names;
//!
//! let names = extract_file_names(std::path::Path::new("/usr/share/fonts/DejaVuSans.ttf"))?;
//! println!("{:?} / {:?}", names.family_name, names.full_name);
//! # Ok::<(), fontnames::FontParseError>(())
//! ```

pub mod cache;
mod encoding;
pub mod error;
pub mod extract;
mod parse;
pub mod registry;
pub mod scan;
pub mod source;
pub mod tag;

pub use cache::FontNameCache;
pub use error::{FontParseError, FontResult};
pub use extract::{
    container_kind, extract_file_names, extract_font_names, ContainerKind, ExtractedNames,
};
pub use registry::{font_suffix, ExtractorRegistry, NameExtractor};
pub use scan::{scan_font_dirs, FontIndex};
pub use source::FontSource;
pub use tag::Tag;
