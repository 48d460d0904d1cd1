//! Top-level property set stream decoding.
//!
//! A stream starts with a fixed header (byte-order mark, format version,
//! system identifier, class id, section count), followed by one or two
//! `(FMTID, offset)` pairs locating the sections. The class id of the first
//! section decides which well-known stream this is; everything else stays
//! reachable through generic id lookup.

use crate::binary::ByteReader;
use crate::consts::{
    BYTE_ORDER_MARK, FMTID_DOC_SUMMARY_INFORMATION, FMTID_SUMMARY_INFORMATION,
};
use crate::error::{Error, Result};
use crate::section::Section;
use crate::summary::{DocumentSummaryInformation, SummaryInformation};
use crate::variant::{Clsid, Variant};
use smallvec::SmallVec;
use zerocopy::{FromBytes, LE, U16, U32};
use zerocopy_derive::FromBytes as DeriveFromBytes;

/// Raw stream header structure (28 bytes)
///
/// This represents the on-disk layout of the fixed header that precedes the
/// section locator table.
#[derive(Debug, Clone, DeriveFromBytes)]
#[repr(C)]
struct RawStreamHeader {
    /// Byte-order mark, always 0xFFFE
    byte_order: U16<LE>,
    /// Format version (0 or 1)
    version: U16<LE>,
    /// Originating system identifier (OS kind and version)
    system_id: U32<LE>,
    /// Stream class id (16 bytes)
    clsid: [u8; 16],
    /// Number of sections (1 or 2)
    section_count: U32<LE>,
}

/// Which well-known stream the leading section class id identifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertySetKind {
    SummaryInformation,
    DocumentSummaryInformation,
    Unknown,
}

/// A fully decoded property set stream.
///
/// Immutable after [`PropertySet::parse`]; a single ownership tree with no
/// back-references, so independent decodes can run concurrently without
/// locking.
#[derive(Debug, Clone)]
pub struct PropertySet {
    byte_order: u16,
    version: u16,
    system_id: u32,
    clsid: Clsid,
    sections: SmallVec<[Section; 2]>,
}

impl PropertySet {
    /// Decode a complete property set stream.
    ///
    /// `data` must be the exact byte range of the stream as supplied by the
    /// container layer. No internal length field is trusted beyond what the
    /// buffer itself can back.
    pub fn parse(data: &[u8]) -> Result<PropertySet> {
        let mut r = ByteReader::new(data);
        let header_bytes = r.read_bytes(size_of::<RawStreamHeader>())?;
        let header = RawStreamHeader::read_from_bytes(header_bytes)
            .map_err(|_| Error::NotPropertySetStream)?;

        if header.byte_order.get() != BYTE_ORDER_MARK {
            return Err(Error::NotPropertySetStream);
        }

        let section_count = header.section_count.get();
        if !(1..=2).contains(&section_count) {
            return Err(Error::InvalidSectionCount(section_count));
        }

        // section locators: FMTID plus offset from the stream start
        let mut locators = SmallVec::<[(Clsid, u32); 2]>::new();
        for _ in 0..section_count {
            let fmtid = Clsid(r.read_guid()?);
            let offset = r.read_u32()?;
            locators.push((fmtid, offset));
        }

        let mut sections = SmallVec::new();
        for (fmtid, offset) in locators {
            sections.push(Section::parse(data, fmtid, offset)?);
        }

        Ok(PropertySet {
            byte_order: header.byte_order.get(),
            version: header.version.get(),
            system_id: header.system_id.get(),
            clsid: Clsid(header.clsid),
            sections,
        })
    }

    #[inline]
    pub fn byte_order(&self) -> u16 {
        self.byte_order
    }

    #[inline]
    pub fn version(&self) -> u16 {
        self.version
    }

    /// Originating system identifier from the stream header.
    #[inline]
    pub fn system_id(&self) -> u32 {
        self.system_id
    }

    /// Stream class id from the header (often all zero in practice).
    #[inline]
    pub fn clsid(&self) -> &Clsid {
        &self.clsid
    }

    /// Decoded sections, one or two, in header locator order.
    #[inline]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// The leading section, which decides the stream kind.
    pub fn first_section(&self) -> &Section {
        // parse admits no empty section list
        &self.sections[0]
    }

    /// Classify the stream by the first section's format id.
    pub fn kind(&self) -> PropertySetKind {
        let fmtid = self.first_section().fmtid().as_bytes();
        if *fmtid == FMTID_SUMMARY_INFORMATION {
            PropertySetKind::SummaryInformation
        } else if *fmtid == FMTID_DOC_SUMMARY_INFORMATION {
            PropertySetKind::DocumentSummaryInformation
        } else {
            PropertySetKind::Unknown
        }
    }

    /// Typed view over a SummaryInformation stream.
    pub fn summary_information(&self) -> Option<SummaryInformation<'_>> {
        match self.kind() {
            PropertySetKind::SummaryInformation => {
                Some(SummaryInformation::new(self.first_section()))
            }
            _ => None,
        }
    }

    /// Typed view over a DocumentSummaryInformation stream, including its
    /// optional user-defined second section.
    pub fn document_summary_information(&self) -> Option<DocumentSummaryInformation<'_>> {
        match self.kind() {
            PropertySetKind::DocumentSummaryInformation => Some(DocumentSummaryInformation::new(
                self.first_section(),
                self.sections.get(1),
            )),
            _ => None,
        }
    }

    /// Look up a property in the leading section by id.
    pub fn property(&self, id: u32) -> Option<&Variant> {
        self.first_section().property(id)
    }
}
