//! Typed accessor views for the two well-known property set streams.
//!
//! Both views borrow the generic [`Section`] representation; there is no
//! separate decoded form per stream kind. Getters return `None` when the
//! property is absent, of an unexpected type, or an empty string.

use crate::consts::*;
use crate::section::Section;
use crate::variant::Variant;
use chrono::{DateTime, Utc};

/// View over a SummaryInformation stream's single section.
#[derive(Debug, Clone, Copy)]
pub struct SummaryInformation<'a> {
    section: &'a Section,
}

impl<'a> SummaryInformation<'a> {
    pub(crate) fn new(section: &'a Section) -> Self {
        Self { section }
    }

    /// The underlying section, for raw id lookup.
    #[inline]
    pub fn section(&self) -> &'a Section {
        self.section
    }

    /// Resolved codepage, 1252 when absent.
    pub fn codepage(&self) -> u32 {
        self.section.codepage()
    }

    pub fn title(&self) -> Option<&'a str> {
        self.string(PID_TITLE)
    }

    pub fn subject(&self) -> Option<&'a str> {
        self.string(PID_SUBJECT)
    }

    pub fn author(&self) -> Option<&'a str> {
        self.string(PID_AUTHOR)
    }

    pub fn keywords(&self) -> Option<&'a str> {
        self.string(PID_KEYWORDS)
    }

    pub fn comments(&self) -> Option<&'a str> {
        self.string(PID_COMMENTS)
    }

    pub fn template(&self) -> Option<&'a str> {
        self.string(PID_TEMPLATE)
    }

    pub fn last_author(&self) -> Option<&'a str> {
        self.string(PID_LAST_AUTHOR)
    }

    pub fn revision_number(&self) -> Option<&'a str> {
        self.string(PID_REV_NUMBER)
    }

    pub fn application_name(&self) -> Option<&'a str> {
        self.string(PID_APP_NAME)
    }

    /// Total editing time as a raw FILETIME tick count (a duration, not a
    /// point in time).
    pub fn edit_time(&self) -> Option<u64> {
        self.section.property(PID_EDIT_TIME)?.as_filetime()
    }

    pub fn last_printed(&self) -> Option<DateTime<Utc>> {
        self.section.property(PID_LAST_PRINTED)?.as_datetime()
    }

    pub fn create_time(&self) -> Option<DateTime<Utc>> {
        self.section.property(PID_CREATE_DTM)?.as_datetime()
    }

    pub fn last_save_time(&self) -> Option<DateTime<Utc>> {
        self.section.property(PID_LAST_SAVE_DTM)?.as_datetime()
    }

    pub fn page_count(&self) -> Option<i32> {
        self.section.property(PID_PAGE_COUNT)?.as_i32()
    }

    pub fn word_count(&self) -> Option<i32> {
        self.section.property(PID_WORD_COUNT)?.as_i32()
    }

    pub fn char_count(&self) -> Option<i32> {
        self.section.property(PID_CHAR_COUNT)?.as_i32()
    }

    pub fn security(&self) -> Option<i32> {
        self.section.property(PID_SECURITY)?.as_i32()
    }

    /// Raw thumbnail clipboard data, format tag included.
    pub fn thumbnail(&self) -> Option<&'a [u8]> {
        match self.section.property(PID_THUMBNAIL)? {
            Variant::ClipboardData(bytes) | Variant::Blob(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Extractor-facing name for a well-known SummaryInformation id.
    pub fn property_name(id: u32) -> Option<&'static str> {
        let name = match id {
            PID_CODEPAGE => "CODEPAGE",
            PID_TITLE => "TITLE",
            PID_SUBJECT => "SUBJECT",
            PID_AUTHOR => "AUTHOR",
            PID_KEYWORDS => "KEYWORDS",
            PID_COMMENTS => "COMMENTS",
            PID_TEMPLATE => "TEMPLATE",
            PID_LAST_AUTHOR => "LASTAUTHOR",
            PID_REV_NUMBER => "REVNUMBER",
            PID_EDIT_TIME => "EDITTIME",
            PID_LAST_PRINTED => "LASTPRINTED",
            PID_CREATE_DTM => "CREATEDTM",
            PID_LAST_SAVE_DTM => "LASTSAVEDTM",
            PID_PAGE_COUNT => "PAGECOUNT",
            PID_WORD_COUNT => "WORDCOUNT",
            PID_CHAR_COUNT => "CHARCOUNT",
            PID_THUMBNAIL => "THUMBNAIL",
            PID_APP_NAME => "APPNAME",
            PID_SECURITY => "SECURITY",
            _ => return None,
        };
        Some(name)
    }

    fn string(&self, id: u32) -> Option<&'a str> {
        self.section
            .property(id)?
            .as_str()
            .filter(|s| !s.is_empty())
    }
}

/// View over a DocumentSummaryInformation stream: the well-known first
/// section plus the optional user-defined second section.
#[derive(Debug, Clone, Copy)]
pub struct DocumentSummaryInformation<'a> {
    section: &'a Section,
    custom: Option<&'a Section>,
}

impl<'a> DocumentSummaryInformation<'a> {
    pub(crate) fn new(section: &'a Section, custom: Option<&'a Section>) -> Self {
        Self { section, custom }
    }

    /// The well-known first section, for raw id lookup.
    #[inline]
    pub fn section(&self) -> &'a Section {
        self.section
    }

    /// The user-defined second section, when the stream has one.
    #[inline]
    pub fn custom_section(&self) -> Option<&'a Section> {
        self.custom
    }

    pub fn codepage(&self) -> u32 {
        self.section.codepage()
    }

    pub fn category(&self) -> Option<&'a str> {
        self.string(PID_CATEGORY)
    }

    pub fn presentation_format(&self) -> Option<&'a str> {
        self.string(PID_PRESENTATION_FORMAT)
    }

    pub fn manager(&self) -> Option<&'a str> {
        self.string(PID_MANAGER)
    }

    pub fn company(&self) -> Option<&'a str> {
        self.string(PID_COMPANY)
    }

    pub fn byte_count(&self) -> Option<i32> {
        self.int(PID_BYTE_COUNT)
    }

    pub fn line_count(&self) -> Option<i32> {
        self.int(PID_LINE_COUNT)
    }

    pub fn paragraph_count(&self) -> Option<i32> {
        self.int(PID_PAR_COUNT)
    }

    pub fn slide_count(&self) -> Option<i32> {
        self.int(PID_SLIDE_COUNT)
    }

    pub fn note_count(&self) -> Option<i32> {
        self.int(PID_NOTE_COUNT)
    }

    pub fn hidden_slide_count(&self) -> Option<i32> {
        self.int(PID_HIDDEN_COUNT)
    }

    pub fn multimedia_clip_count(&self) -> Option<i32> {
        self.int(PID_MMCLIP_COUNT)
    }

    pub fn scale_crop(&self) -> Option<bool> {
        self.section.property(PID_SCALE)?.as_bool()
    }

    pub fn links_dirty(&self) -> Option<bool> {
        self.section.property(PID_LINKS_DIRTY)?.as_bool()
    }

    /// Document part names (`VT_VECTOR | VT_LPSTR`), in stored order.
    pub fn doc_parts(&self) -> Option<Vec<&'a str>> {
        match self.section.property(PID_DOC_PARTS)? {
            Variant::Vector(elements) => elements.iter().map(Variant::as_str).collect(),
            _ => None,
        }
    }

    /// The raw heading-pair vector, alternating heading strings and part
    /// counts.
    pub fn heading_pairs(&self) -> Option<&'a Variant> {
        self.section.property(PID_HEADING_PAIR)
    }

    /// Iterate the user-defined section's `(name, value)` pairs in table
    /// order, names resolved through its dictionary.
    pub fn custom_properties(&self) -> impl Iterator<Item = (&'a str, &'a Variant)> {
        self.custom
            .into_iter()
            .flat_map(|section| section.entries())
            .filter(|entry| entry.id > PID_CODEPAGE)
            .filter_map(|entry| Some((entry.name?, entry.value)))
    }

    /// Look up one custom property by its dictionary name.
    pub fn custom_property(&self, name: &str) -> Option<&'a Variant> {
        self.custom_properties()
            .find(|(n, _)| *n == name)
            .map(|(_, value)| value)
    }

    /// Extractor-facing name for a well-known DocumentSummaryInformation id.
    pub fn property_name(id: u32) -> Option<&'static str> {
        let name = match id {
            PID_CODEPAGE => "CODEPAGE",
            PID_CATEGORY => "CATEGORY",
            PID_PRESENTATION_FORMAT => "PRESFORMAT",
            PID_BYTE_COUNT => "BYTECOUNT",
            PID_LINE_COUNT => "LINECOUNT",
            PID_PAR_COUNT => "PARCOUNT",
            PID_SLIDE_COUNT => "SLIDECOUNT",
            PID_NOTE_COUNT => "NOTECOUNT",
            PID_HIDDEN_COUNT => "HIDDENCOUNT",
            PID_MMCLIP_COUNT => "MMCLIPCOUNT",
            PID_SCALE => "SCALE",
            PID_HEADING_PAIR => "HEADINGPAIR",
            PID_DOC_PARTS => "DOCPARTS",
            PID_MANAGER => "MANAGER",
            PID_COMPANY => "COMPANY",
            PID_LINKS_DIRTY => "LINKSDIRTY",
            _ => return None,
        };
        Some(name)
    }

    fn string(&self, id: u32) -> Option<&'a str> {
        self.section
            .property(id)?
            .as_str()
            .filter(|s| !s.is_empty())
    }

    fn int(&self, id: u32) -> Option<i32> {
        self.section.property(id)?.as_i32()
    }
}
