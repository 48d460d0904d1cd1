//! Section decoding: property table, properties, dictionary.
//!
//! A section is a self-contained region of the stream: a declared size, a
//! property count, a flat `(id, offset)` table, and the property values the
//! table points at. Offsets are relative to the section start and the value
//! bytes may appear in any order, so decoding collects the table first and
//! re-seeks per entry.
//!
//! Two reserved ids get special treatment: id 1 carries the codepage that
//! governs every narrow string in the section (including dictionary names),
//! and id 0 carries the dictionary mapping custom property ids to names.
//! Since table order does not guarantee the codepage entry comes first, the
//! decode runs in two passes: an extraction pass that resolves only the
//! codepage, then a full pass over the table under the resolved codepage.

use crate::binary::ByteReader;
use crate::codepage::decode_utf16le;
use crate::consts::{CP_UTF16, DEFAULT_CODEPAGE, PID_CODEPAGE, PID_DICTIONARY};
use crate::error::{Error, Result};
use crate::variant::{Clsid, Variant};

/// One property table entry: id plus value offset relative to the section
/// start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEntry {
    pub id: u32,
    pub offset: u32,
}

/// The flat array of `(id, offset)` pairs heading a section.
#[derive(Debug, Clone)]
pub struct PropertyTable {
    pub entries: Vec<TableEntry>,
}

impl PropertyTable {
    /// Read the table at the cursor position.
    ///
    /// The declared count is validated against the remaining buffer (eight
    /// bytes per entry) before any storage is allocated for it.
    pub fn parse(r: &mut ByteReader<'_>) -> Result<PropertyTable> {
        let count = r.read_u32()?;
        let n = r.check_count(count, 8)?;
        let mut entries = Vec::with_capacity(n);
        for _ in 0..n {
            let id = r.read_u32()?;
            let offset = r.read_u32()?;
            entries.push(TableEntry { id, offset });
        }
        Ok(PropertyTable { entries })
    }
}

/// A decoded property, in property table order.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub id: u32,
    pub value: Variant,
}

/// One dictionary entry mapping a custom property id to its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub id: u32,
    pub name: String,
}

/// A decoded section: its format id, resolved codepage, properties in table
/// order, and the dictionary when a property with id 0 was present.
#[derive(Debug, Clone)]
pub struct Section {
    fmtid: Clsid,
    codepage: u32,
    properties: Vec<Property>,
    dictionary: Option<Vec<DictionaryEntry>>,
}

/// One `(name-or-id, value)` pair yielded by [`Section::entries`].
#[derive(Debug, Clone, Copy)]
pub struct SectionEntry<'a> {
    pub id: u32,
    /// Dictionary name for custom ids, `None` otherwise
    pub name: Option<&'a str>,
    pub value: &'a Variant,
}

impl Section {
    /// Decode the section starting at `start` within `data`.
    ///
    /// Any corrupt property aborts the whole section; there are no
    /// partial-section results.
    pub(crate) fn parse(data: &[u8], fmtid: Clsid, start: u32) -> Result<Section> {
        let mut r = ByteReader::new(data);
        r.seek(u64::from(start))?;

        // declared size is a sanity bound only, the consumed length may be
        // less
        let declared_size = r.read_u32()?;
        if u64::from(declared_size) > data.len() as u64 - u64::from(start) {
            return Err(Error::InvalidLength {
                declared: declared_size,
                available: data.len() - start as usize,
            });
        }

        let table = PropertyTable::parse(&mut r)?;

        // extraction pass: resolve the codepage before touching any value
        // that depends on it
        let mut codepage = DEFAULT_CODEPAGE;
        for entry in &table.entries {
            if entry.id == PID_CODEPAGE {
                let mut vr = ByteReader::new(data);
                vr.seek(u64::from(start) + u64::from(entry.offset))?;
                if let Some(cp) = codepage_value(&Variant::parse(&mut vr, DEFAULT_CODEPAGE)?) {
                    codepage = cp;
                }
                break;
            }
        }

        // full pass, in table order
        let mut properties = Vec::with_capacity(table.entries.len());
        let mut dictionary = None;
        for entry in &table.entries {
            let mut vr = ByteReader::new(data);
            vr.seek(u64::from(start) + u64::from(entry.offset))?;
            if entry.id == PID_DICTIONARY {
                dictionary = Some(parse_dictionary(&mut vr, codepage)?);
            } else {
                properties.push(Property {
                    id: entry.id,
                    value: Variant::parse(&mut vr, codepage)?,
                });
            }
        }

        Ok(Section {
            fmtid,
            codepage,
            properties,
            dictionary,
        })
    }

    /// Format identifier declared for this section in the stream header.
    #[inline]
    pub fn fmtid(&self) -> &Clsid {
        &self.fmtid
    }

    /// Resolved codepage, 1252 when the section carries none.
    #[inline]
    pub fn codepage(&self) -> u32 {
        self.codepage
    }

    /// Properties in property table order.
    #[inline]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Dictionary entries, present iff the section had a property with id 0.
    pub fn dictionary(&self) -> Option<&[DictionaryEntry]> {
        self.dictionary.as_deref()
    }

    /// Look up a property value by id.
    pub fn property(&self, id: u32) -> Option<&Variant> {
        self.properties
            .iter()
            .find(|p| p.id == id)
            .map(|p| &p.value)
    }

    /// Resolve a custom property id to its dictionary name.
    pub fn name_of(&self, id: u32) -> Option<&str> {
        self.dictionary
            .as_deref()?
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.name.as_str())
    }

    /// Iterate `(name-or-id, value)` pairs in property table order, with
    /// custom ids resolved through the dictionary when one is present.
    pub fn entries(&self) -> impl Iterator<Item = SectionEntry<'_>> {
        self.properties.iter().map(|p| SectionEntry {
            id: p.id,
            name: self.name_of(p.id),
            value: &p.value,
        })
    }
}

/// Codepage property values appear as I2/UI2/I4/UI4 in the wild; negative
/// 16-bit values keep their bit pattern (65001 is stored as -1535).
fn codepage_value(value: &Variant) -> Option<u32> {
    match value {
        Variant::I2(v) => Some(u32::from(*v as u16)),
        Variant::UI2(v) => Some(u32::from(*v)),
        Variant::I4(v) => Some(*v as u32),
        Variant::UI4(v) => Some(*v),
        _ => None,
    }
}

/// Decode the id-0 dictionary: an entry count, then `(id, length, name)`
/// triples. Unlike ordinary properties the dictionary carries no type tag.
///
/// Under codepage 1200 the length counts UTF-16 code units and each name is
/// padded to a four-byte boundary, which is consumed and discarded; under
/// every other codepage the length is an exact byte count with no padding.
fn parse_dictionary(r: &mut ByteReader<'_>, codepage: u32) -> Result<Vec<DictionaryEntry>> {
    let count = r.read_u32()?;
    let n = r.check_count(count, 8)?;
    let mut entries = Vec::with_capacity(n);
    for _ in 0..n {
        let id = r.read_u32()?;
        let length = r.read_u32()?;
        let name = if codepage == CP_UTF16 {
            let units = r.check_count(length, 2)?;
            let bytes = r.read_bytes(units * 2)?;
            let padding = (units * 2) % 4;
            if padding != 0 {
                r.read_bytes(4 - padding)?;
            }
            decode_utf16le(bytes)
        } else {
            let n = r.check_len(length)?;
            r.read_string(n, codepage)?
        };
        entries.push(DictionaryEntry { id, name });
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn typed(tag: u16, payload: &[u8]) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&tag.to_le_bytes());
        data.extend_from_slice(&[0, 0]);
        data.extend_from_slice(payload);
        data
    }

    fn lpstr(text: &[u8]) -> Vec<u8> {
        let mut payload = (text.len() as u32).to_le_bytes().to_vec();
        payload.extend_from_slice(text);
        typed(VT_LPSTR, &payload)
    }

    fn i2(value: i16) -> Vec<u8> {
        typed(VT_I2, &value.to_le_bytes())
    }

    /// Assemble a standalone section from `(id, value bytes)` pairs, values
    /// laid out contiguously after the table.
    fn build_section(entries: &[(u32, Vec<u8>)]) -> Vec<u8> {
        let header_len = 8 + entries.len() * 8;
        let mut table = Vec::new();
        let mut values = Vec::new();
        for (id, bytes) in entries {
            table.push((*id, (header_len + values.len()) as u32));
            values.extend_from_slice(bytes);
        }
        let mut data = Vec::new();
        data.extend_from_slice(&((header_len + values.len()) as u32).to_le_bytes());
        data.extend_from_slice(&(entries.len() as u32).to_le_bytes());
        for (id, offset) in table {
            data.extend_from_slice(&id.to_le_bytes());
            data.extend_from_slice(&offset.to_le_bytes());
        }
        data.extend_from_slice(&values);
        data
    }

    fn fmtid() -> Clsid {
        Clsid(FMTID_SUMMARY_INFORMATION)
    }

    #[test]
    fn test_basic_section() {
        let data = build_section(&[(PID_CODEPAGE, i2(1252)), (PID_TITLE, lpstr(b"Hello\0"))]);
        let section = Section::parse(&data, fmtid(), 0).unwrap();
        assert_eq!(section.codepage(), 1252);
        assert_eq!(
            section.property(PID_TITLE),
            Some(&Variant::Lpstr("Hello".to_string()))
        );
        // properties come back in table order
        let ids: Vec<u32> = section.properties().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![PID_CODEPAGE, PID_TITLE]);
    }

    #[test]
    fn test_codepage_resolved_before_strings() {
        // 0xC0 is 'À' under 1252 but 'А' (Cyrillic) under 1251; the codepage
        // entry comes last in the table and must still win
        let data = build_section(&[(PID_TITLE, lpstr(b"\xC0\0")), (PID_CODEPAGE, i2(1251))]);
        let section = Section::parse(&data, fmtid(), 0).unwrap();
        assert_eq!(section.codepage(), 1251);
        assert_eq!(
            section.property(PID_TITLE),
            Some(&Variant::Lpstr("А".to_string()))
        );
    }

    #[test]
    fn test_default_codepage() {
        let data = build_section(&[(PID_TITLE, lpstr(b"plain\0"))]);
        let section = Section::parse(&data, fmtid(), 0).unwrap();
        assert_eq!(section.codepage(), 1252);
    }

    #[test]
    fn test_negative_codepage_keeps_bit_pattern() {
        // 65001 stored as a negative VT_I2
        let data = build_section(&[(PID_CODEPAGE, i2(-1535))]);
        let section = Section::parse(&data, fmtid(), 0).unwrap();
        assert_eq!(section.codepage(), 65001);
    }

    #[test]
    fn test_dictionary_narrow() {
        let mut dict = 2u32.to_le_bytes().to_vec();
        for (id, name) in [(100u32, &b"Client\0"[..]), (101, &b"Division\0"[..])] {
            dict.extend_from_slice(&id.to_le_bytes());
            dict.extend_from_slice(&(name.len() as u32).to_le_bytes());
            dict.extend_from_slice(name);
        }
        let data = build_section(&[
            (PID_DICTIONARY, dict),
            (100, lpstr(b"sample client\0")),
            (101, lpstr(b"sample division\0")),
        ]);
        let section = Section::parse(&data, fmtid(), 0).unwrap();
        let dictionary = section.dictionary().unwrap();
        assert_eq!(dictionary.len(), 2);
        assert_eq!(section.name_of(100), Some("Client"));
        assert_eq!(section.name_of(101), Some("Division"));
        // the dictionary itself is not a property
        assert_eq!(section.properties().len(), 2);
    }

    #[test]
    fn test_dictionary_utf16_padding() {
        // three code units per name (terminator included), so each name is
        // six bytes plus two bytes of alignment padding
        let mut dict = 2u32.to_le_bytes().to_vec();
        for (id, name) in [(100u32, &b"A\0b\0\0\0"[..]), (101, &b"C\0d\0\0\0"[..])] {
            dict.extend_from_slice(&id.to_le_bytes());
            dict.extend_from_slice(&3u32.to_le_bytes());
            dict.extend_from_slice(name);
            dict.extend_from_slice(&[0, 0]);
        }
        let data = build_section(&[(PID_CODEPAGE, i2(1200)), (PID_DICTIONARY, dict)]);
        let section = Section::parse(&data, fmtid(), 0).unwrap();
        assert_eq!(section.name_of(100), Some("Ab"));
        assert_eq!(section.name_of(101), Some("Cd"));
    }

    #[test]
    fn test_offset_past_buffer_end() {
        let mut data = build_section(&[(PID_TITLE, lpstr(b"x\0"))]);
        // point the table entry far past the end
        let offset_pos = 8 + 4;
        data[offset_pos..offset_pos + 4].copy_from_slice(&0xFFFF_0000u32.to_le_bytes());
        assert!(matches!(
            Section::parse(&data, fmtid(), 0),
            Err(Error::Truncated { .. })
        ));
    }

    #[test]
    fn test_table_count_exceeding_buffer() {
        let mut data = Vec::new();
        data.extend_from_slice(&16u32.to_le_bytes());
        data.extend_from_slice(&0x00FF_FFFFu32.to_le_bytes());
        data.extend_from_slice(&[0u8; 8]);
        assert!(matches!(
            Section::parse(&data, fmtid(), 0),
            Err(Error::InvalidLength { declared: 0x00FF_FFFF, .. })
        ));
    }

    #[test]
    fn test_declared_size_exceeding_buffer() {
        let mut data = build_section(&[(PID_TITLE, lpstr(b"x\0"))]);
        data[0..4].copy_from_slice(&0xFFFF_FFFFu32.to_le_bytes());
        assert!(matches!(
            Section::parse(&data, fmtid(), 0),
            Err(Error::InvalidLength { .. })
        ));
    }

    #[test]
    fn test_corrupt_property_aborts_section() {
        // second property declares a string far longer than the buffer
        let mut bogus = 0x7FFF_FFFFu32.to_le_bytes().to_vec();
        bogus = typed(VT_LPSTR, &bogus);
        let data = build_section(&[(PID_TITLE, lpstr(b"fine\0")), (PID_SUBJECT, bogus)]);
        assert!(Section::parse(&data, fmtid(), 0).is_err());
    }

    #[test]
    fn test_entries_resolve_dictionary_names() {
        let mut dict = 1u32.to_le_bytes().to_vec();
        dict.extend_from_slice(&100u32.to_le_bytes());
        dict.extend_from_slice(&6u32.to_le_bytes());
        dict.extend_from_slice(b"Owner\0");
        let data = build_section(&[
            (PID_DICTIONARY, dict),
            (PID_CODEPAGE, i2(1252)),
            (100, lpstr(b"me\0")),
        ]);
        let section = Section::parse(&data, fmtid(), 0).unwrap();
        let entries: Vec<(u32, Option<&str>)> =
            section.entries().map(|e| (e.id, e.name)).collect();
        assert_eq!(entries, vec![(PID_CODEPAGE, None), (100, Some("Owner"))]);
    }
}
