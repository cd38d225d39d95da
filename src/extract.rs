//! Font-name extraction straight from the binary `name` table.
//!
//! The extractor reads a handful of small, bounded blocks out of an SFNT or
//! TTC container: the leading signature, the table directory and the `name`
//! table itself. It never touches glyph data, so it is cheap enough to run
//! over a whole font directory while building an index.

use std::{fs::File, path::Path};

use crate::{
    encoding::decode_name_string,
    error::{FontParseError, FontResult},
    parse::SfntParser,
    source::FontSource,
    tag::Tag,
};

pub const MS_PLATFORM_ID: u16 = 3;

/// MS locale id for US English is the "default".
pub const ENGLISH_LOCALE_ID: u16 = 0x0409; // 1033 decimal

pub const FAMILY_NAME_ID: u16 = 1;

pub const FULL_NAME_ID: u16 = 4;

const TTC_HEADER_SIZE: u64 = 12;

const DIRECTORY_HEADER_SIZE: u64 = 12;

const DIRECTORY_ENTRY_SIZE: usize = 16;

const NAME_RECORD_SIZE: usize = 12;

/// What kind of container the leading signature announced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// A single SFNT font (version 1 or the legacy 'true' signature).
    SingleFont,
    /// A TrueType collection bundling several fonts behind one directory
    /// of header offsets.
    Collection,
}

/// Family and full font name recovered from the `name` table.
///
/// Either field may be absent even on structural success: a font may lack a
/// `name` table entirely, or carry no platform-3 records for that name id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedNames {
    pub family_name: Option<String>,
    pub full_name: Option<String>,
}

/// Sniffs the container kind from the first four bytes of the source.
pub fn container_kind<S>(source: &S) -> FontResult<ContainerKind>
where
    S: FontSource + ?Sized,
{
    let tag = Tag::new(read_u32_at(source, 0)?.to_be_bytes());

    match tag {
        Tag::TTCF => Ok(ContainerKind::Collection),
        Tag::SFNT_V1 | Tag::TRUE => Ok(ContainerKind::SingleFont),
        other => Err(FontParseError::NotAFontFile { tag: other.0 }),
    }
}

/// Extracts the family and full name of the font stored in `source`.
///
/// For a TTC, `collection_index` selects the subfont (zero-based); it is
/// ignored for single-font files. The call fails on structural corruption
/// and never returns partially decoded names in that case, but an individual
/// name string that cannot be decoded only leaves its field absent.
pub fn extract_font_names<S>(source: &S, collection_index: u32) -> FontResult<ExtractedNames>
where
    S: FontSource + ?Sized,
{
    let file_size = source.size()?;
    let (_, header_offset) = read_container_header(source, collection_index)?;

    // After the version/scaler-type field is the number of tables in the
    // table directory. The directory begins 12 bytes after the header and
    // each entry is 16 bytes long.
    let num_tables = read_u16_at(source, header_offset + 4)?;
    let directory = read_block(
        source,
        header_offset + DIRECTORY_HEADER_SIZE,
        usize::from(num_tables) * DIRECTORY_ENTRY_SIZE,
    )?;

    let mut parser = SfntParser::new(&directory);
    let mut name_entry: Option<DirectoryEntry> = None;
    for _ in 0..num_tables {
        let tag = parser.read_tag()?;
        parser.read_u32()?; // checksum
        let offset = parser.read_u32()?;
        let length = parser.read_u32()?;

        if u64::from(offset) + u64::from(length) > file_size {
            return Err(FontParseError::MalformedTable { tag: Some(tag) });
        }

        if tag == Tag::NAME && name_entry.is_none() {
            name_entry = Some(DirectoryEntry { offset, length });
        }
    }

    // Some valid fonts have no naming table at all; that is "no name could
    // be determined", not an error.
    let entry = match name_entry {
        Some(entry) if entry.length > 0 => entry,
        _ => return Ok(ExtractedNames::default()),
    };

    let table = read_block(source, u64::from(entry.offset), entry.length as usize)?;
    read_names_from_table(&table)
}

/// Extracts names from a font file on disk, selecting the first font of a
/// collection. This is the shape expected by the extractor registry.
pub fn extract_file_names(path: &Path) -> FontResult<ExtractedNames> {
    let file = File::open(path)?;

    extract_font_names(&file, 0)
}

struct DirectoryEntry {
    offset: u32,
    length: u32,
}

fn read_container_header<S>(source: &S, collection_index: u32) -> FontResult<(ContainerKind, u64)>
where
    S: FontSource + ?Sized,
{
    let tag = Tag::new(read_u32_at(source, 0)?.to_be_bytes());

    match tag {
        Tag::TTCF => {
            // 4 bytes of TTC version id sit between the signature and the
            // directory count; they are not needed
            let directory_count = read_u32_at(source, 8)?;
            if collection_index >= directory_count {
                return Err(FontParseError::BadFontIndex {
                    index: collection_index,
                    count: directory_count,
                });
            }

            let header_offset =
                read_u32_at(source, TTC_HEADER_SIZE + 4 * u64::from(collection_index))?;

            Ok((ContainerKind::Collection, u64::from(header_offset)))
        }
        Tag::SFNT_V1 | Tag::TRUE => Ok((ContainerKind::SingleFont, 0)),
        other => Err(FontParseError::NotAFontFile { tag: other.0 }),
    }
}

fn read_names_from_table(table: &[u8]) -> FontResult<ExtractedNames> {
    let mut parser = SfntParser::new(table);

    parser.read_u16()?; // format - not needed
    let num_records = parser.read_u16()?;
    let string_offset = usize::from(parser.read_u16()?);

    let mut names = ExtractedNames::default();

    for _ in 0..num_records {
        let record_start = parser.cursor;

        let platform_id = parser.read_u16()?;
        if platform_id != MS_PLATFORM_ID {
            // records are a fixed 12 bytes; skip without following the
            // record into the string heap
            parser.cursor = record_start + NAME_RECORD_SIZE;
            continue;
        }

        let encoding_id = parser.read_u16()?;
        let language_id = parser.read_u16()?;
        let name_id = parser.read_u16()?;
        let length = usize::from(parser.read_u16()?);
        let offset = usize::from(parser.read_u16()?) + string_offset;

        let slot = match name_id {
            FAMILY_NAME_ID => &mut names.family_name,
            FULL_NAME_ID => &mut names.full_name,
            _ => continue,
        };

        // English-locale records always win; otherwise the first record
        // seen for this name id sticks
        if slot.is_none() || language_id == ENGLISH_LOCALE_ID {
            let raw = parser.read_bytes_at(offset, length)?;
            *slot = Some(decode_name_string(raw, encoding_id));
        }
    }

    Ok(names)
}

fn read_block<S>(source: &S, offset: u64, length: usize) -> FontResult<Vec<u8>>
where
    S: FontSource + ?Sized,
{
    let mut buf = vec![0; length];
    source.read_block(offset, &mut buf)?;

    Ok(buf)
}

fn read_u16_at<S>(source: &S, offset: u64) -> FontResult<u16>
where
    S: FontSource + ?Sized,
{
    let mut buf = [0; 2];
    source.read_block(offset, &mut buf)?;

    Ok(u16::from_be_bytes(buf))
}

fn read_u32_at<S>(source: &S, offset: u64) -> FontResult<u32>
where
    S: FontSource + ?Sized,
{
    let mut buf = [0; 4];
    source.read_block(offset, &mut buf)?;

    Ok(u32::from_be_bytes(buf))
}

/// Synthetic font builders shared by the tests in this crate.
#[cfg(test)]
pub(crate) mod build {
    use crate::tag::Tag;

    pub type RawNameRecord<'a> = (u16, u16, u16, u16, &'a [u8]);

    /// Builds a `name` table: format 0 header, the given records and a
    /// string heap.
    pub fn name_table(records: &[RawNameRecord]) -> Vec<u8> {
        let mut table = Vec::new();
        table.extend_from_slice(&0u16.to_be_bytes());
        table.extend_from_slice(&(records.len() as u16).to_be_bytes());

        let string_offset = 6 + 12 * records.len() as u16;
        table.extend_from_slice(&string_offset.to_be_bytes());

        let mut heap = Vec::new();
        for &(platform_id, encoding_id, language_id, name_id, bytes) in records {
            for field in [
                platform_id,
                encoding_id,
                language_id,
                name_id,
                bytes.len() as u16,
                heap.len() as u16,
            ] {
                table.extend_from_slice(&field.to_be_bytes());
            }
            heap.extend_from_slice(bytes);
        }
        table.extend_from_slice(&heap);

        table
    }

    /// Builds a single SFNT whose table directory offsets are absolute file
    /// offsets assuming the font block starts at `base`. Standalone fonts
    /// use `base = 0`; TTC subfonts pass their position within the file.
    pub fn sfnt_at(tables: &[(Tag, Vec<u8>)], base: usize) -> Vec<u8> {
        let mut font = Vec::new();
        font.extend_from_slice(&Tag::SFNT_V1.0);
        font.extend_from_slice(&(tables.len() as u16).to_be_bytes());
        font.extend_from_slice(&[0; 6]); // searchRange, entrySelector, rangeShift

        let mut offset = base + 12 + 16 * tables.len();
        let mut body = Vec::new();
        for (tag, data) in tables {
            font.extend_from_slice(&tag.0);
            font.extend_from_slice(&0u32.to_be_bytes()); // checksum
            font.extend_from_slice(&(offset as u32).to_be_bytes());
            font.extend_from_slice(&(data.len() as u32).to_be_bytes());
            offset += data.len();
            body.extend_from_slice(data);
        }
        font.extend_from_slice(&body);

        font
    }

    /// A standalone SFNT holding just the given name records.
    pub fn single_font(records: &[RawNameRecord]) -> Vec<u8> {
        sfnt_at(&[(Tag::NAME, name_table(records))], 0)
    }

    /// A TTC bundling one subfont per record list.
    pub fn collection(subfonts: &[Vec<(Tag, Vec<u8>)>]) -> Vec<u8> {
        let mut file = Vec::new();
        file.extend_from_slice(&Tag::TTCF.0);
        file.extend_from_slice(&0x00010000u32.to_be_bytes()); // TTC version
        file.extend_from_slice(&(subfonts.len() as u32).to_be_bytes());

        let mut offset = 12 + 4 * subfonts.len();
        let mut blocks = Vec::new();
        for tables in subfonts {
            let block = sfnt_at(tables, offset);
            file.extend_from_slice(&(offset as u32).to_be_bytes());
            offset += block.len();
            blocks.push(block);
        }
        for block in blocks {
            file.extend_from_slice(&block);
        }

        file
    }

    pub fn utf16be(s: &str) -> Vec<u8> {
        s.encode_utf16().flat_map(u16::to_be_bytes).collect()
    }
}
