use encoding_rs::{Encoding, BIG5, EUC_KR, GBK, SHIFT_JIS, UTF_16BE, WINDOWS_1252};

/// Decodes the raw bytes of a platform-3 name record according to its
/// encoding id. Decoding never fails: unmappable sequences come back as
/// replacement characters, and a zero-length record decodes to the empty
/// string, which still counts as a stored value for the record-selection
/// policy.
///
/// Encodings 2-6 are old DBCS code pages, apparently mostly from Solaris-era
/// fonts. Some of those fonts encode ascii names as double-byte characters,
/// i.e. with a leading zero byte for what properly should be a single-byte
/// char, so the zero bytes are stripped out before the code page sees the
/// buffer.
pub(crate) fn decode_name_string(raw: &[u8], encoding_id: u16) -> String {
    let compacted;
    let bytes: &[u8] = if (2..=6).contains(&encoding_id) {
        compacted = raw.iter().copied().filter(|&b| b != 0).collect::<Vec<u8>>();
        &compacted
    } else {
        raw
    };

    let encoding: &'static Encoding = match encoding_id {
        1 => UTF_16BE, // most common case first
        0 => UTF_16BE, // symbol uses this
        2 => SHIFT_JIS,
        3 => GBK,
        4 => BIG5,
        5 => EUC_KR,
        // No Johab decoder is available; fall back to a single-byte decode
        // the way any unsupported code page would.
        6 => WINDOWS_1252,
        _ => UTF_16BE,
    };

    let (text, _, _) = encoding.decode(bytes);

    text.into_owned()
}
