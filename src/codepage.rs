//! Codepage decoding for narrow property strings.
//!
//! Narrow (`VT_LPSTR`) strings carry no encoding of their own; the section's
//! codepage property selects the byte-to-character table. This module maps
//! Windows codepage identifiers onto `encoding_rs` encodings and decodes
//! string payloads, falling back to a Latin-1 byte mapping when the codepage
//! is unknown so text stays recoverable from streams with bogus codepage
//! values.

use crate::consts::CP_UTF16;
use crate::error::{Error, Result};
use encoding_rs::Encoding;

/// Map a Windows codepage identifier to an `encoding_rs` encoding.
///
/// Covers the codepages that appear in Office property streams. The match
/// compiles to a jump table and the returned references are static.
pub fn encoding_for(codepage: u32) -> Result<&'static Encoding> {
    let encoding = match codepage {
        // Windows codepages
        874 => encoding_rs::WINDOWS_874,   // Thai
        1250 => encoding_rs::WINDOWS_1250, // Central European
        1251 => encoding_rs::WINDOWS_1251, // Cyrillic
        1252 => encoding_rs::WINDOWS_1252, // Western European (most common)
        1253 => encoding_rs::WINDOWS_1253, // Greek
        1254 => encoding_rs::WINDOWS_1254, // Turkish
        1255 => encoding_rs::WINDOWS_1255, // Hebrew
        1256 => encoding_rs::WINDOWS_1256, // Arabic
        1257 => encoding_rs::WINDOWS_1257, // Baltic
        1258 => encoding_rs::WINDOWS_1258, // Vietnamese

        // East Asian codepages
        932 => encoding_rs::SHIFT_JIS, // Japanese Shift-JIS
        936 => encoding_rs::GBK,       // Simplified Chinese (GB2312/GBK)
        949 => encoding_rs::EUC_KR,    // Korean
        950 => encoding_rs::BIG5,      // Traditional Chinese (Big5)
        20932 => encoding_rs::EUC_JP,  // Japanese EUC-JP
        54936 => encoding_rs::GB18030, // Chinese GB18030

        // ISO 8859 series
        28592 => encoding_rs::ISO_8859_2,  // Latin 2 (Central European)
        28593 => encoding_rs::ISO_8859_3,  // Latin 3 (South European)
        28594 => encoding_rs::ISO_8859_4,  // Latin 4 (North European)
        28595 => encoding_rs::ISO_8859_5,  // Cyrillic
        28596 => encoding_rs::ISO_8859_6,  // Arabic
        28597 => encoding_rs::ISO_8859_7,  // Greek
        28598 => encoding_rs::ISO_8859_8,  // Hebrew
        28605 => encoding_rs::ISO_8859_15, // Latin 9 (Western European with Euro)

        // Macintosh
        10000 => encoding_rs::MACINTOSH, // Macintosh Roman

        // Unicode
        1200 => encoding_rs::UTF_16LE,
        1201 => encoding_rs::UTF_16BE,
        65001 => encoding_rs::UTF_8,

        other => return Err(Error::UnknownCodepage(other)),
    };
    Ok(encoding)
}

/// Decode a narrow string payload under the given codepage.
///
/// The payload is trimmed at the first null byte (null unit for codepage
/// 1200, which reinterprets the bytes as UTF-16LE). Unknown codepages do not
/// fail: the bytes are mapped 1:1 as Latin-1, which loses nothing that can
/// still be re-decoded from the raw property bytes.
pub fn decode_string(bytes: &[u8], codepage: u32) -> String {
    if codepage == CP_UTF16 {
        return decode_utf16le(bytes);
    }
    let bytes = trim_at_nul(bytes);
    match encoding_for(codepage) {
        // encoding_rs guarantees valid UTF-8 output
        Ok(encoding) => encoding.decode(bytes).0.into_owned(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

/// Decode UTF-16LE bytes, stopping at the first null code unit.
///
/// Invalid sequences are replaced with U+FFFD rather than failing; string
/// payloads are already length-delimited, so lossy decoding cannot read out
/// of bounds.
pub fn decode_utf16le(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        return String::new();
    }

    // ignore a trailing odd byte rather than inventing a code unit
    let even_len = bytes.len() & !1;
    let units: Vec<u16> = bytes[..even_len]
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .take_while(|&unit| unit != 0)
        .collect();

    String::from_utf16_lossy(&units)
}

/// View of `bytes` up to (not including) the first null byte.
#[inline]
fn trim_at_nul(bytes: &[u8]) -> &[u8] {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    &bytes[..end]
}
