//! Constants for the property set stream format.

/// Byte-order mark heading every property set stream (always little-endian)
pub const BYTE_ORDER_MARK: u16 = 0xFFFE;

/// Codepage assumed when a section carries no codepage property
pub const DEFAULT_CODEPAGE: u32 = 1252;

/// Codepage value signalling UTF-16LE text
pub const CP_UTF16: u32 = 1200;

// Variant type tags
pub const VT_EMPTY: u16 = 0;
pub const VT_NULL: u16 = 1;
pub const VT_I2: u16 = 2;
pub const VT_I4: u16 = 3;
pub const VT_R4: u16 = 4;
pub const VT_R8: u16 = 5;
pub const VT_CY: u16 = 6;
pub const VT_DATE: u16 = 7;
pub const VT_BSTR: u16 = 8;
pub const VT_ERROR: u16 = 10;
pub const VT_BOOL: u16 = 11;
pub const VT_VARIANT: u16 = 12;
pub const VT_I1: u16 = 16;
pub const VT_UI1: u16 = 17;
pub const VT_UI2: u16 = 18;
pub const VT_UI4: u16 = 19;
pub const VT_I8: u16 = 20;
pub const VT_UI8: u16 = 21;
pub const VT_INT: u16 = 22;
pub const VT_UINT: u16 = 23;
pub const VT_LPSTR: u16 = 30;
pub const VT_LPWSTR: u16 = 31;
pub const VT_FILETIME: u16 = 64;
pub const VT_BLOB: u16 = 65;
pub const VT_BLOB_OBJECT: u16 = 70;
pub const VT_CF: u16 = 71;
pub const VT_CLSID: u16 = 72;
pub const VT_VECTOR: u16 = 0x1000;
pub const VT_ARRAY: u16 = 0x2000;

// Property ids reserved in every section
/// Dictionary mapping custom property ids to names
pub const PID_DICTIONARY: u32 = 0;
/// Codepage governing narrow string decoding for the section
pub const PID_CODEPAGE: u32 = 1;

// SummaryInformation property ids
pub const PID_TITLE: u32 = 2;
pub const PID_SUBJECT: u32 = 3;
pub const PID_AUTHOR: u32 = 4;
pub const PID_KEYWORDS: u32 = 5;
pub const PID_COMMENTS: u32 = 6;
pub const PID_TEMPLATE: u32 = 7;
pub const PID_LAST_AUTHOR: u32 = 8;
pub const PID_REV_NUMBER: u32 = 9;
pub const PID_EDIT_TIME: u32 = 10;
pub const PID_LAST_PRINTED: u32 = 11;
pub const PID_CREATE_DTM: u32 = 12;
pub const PID_LAST_SAVE_DTM: u32 = 13;
pub const PID_PAGE_COUNT: u32 = 14;
pub const PID_WORD_COUNT: u32 = 15;
pub const PID_CHAR_COUNT: u32 = 16;
pub const PID_THUMBNAIL: u32 = 17;
pub const PID_APP_NAME: u32 = 18;
pub const PID_SECURITY: u32 = 19;

// DocumentSummaryInformation property ids
pub const PID_CATEGORY: u32 = 2;
pub const PID_PRESENTATION_FORMAT: u32 = 3;
pub const PID_BYTE_COUNT: u32 = 4;
pub const PID_LINE_COUNT: u32 = 5;
pub const PID_PAR_COUNT: u32 = 6;
pub const PID_SLIDE_COUNT: u32 = 7;
pub const PID_NOTE_COUNT: u32 = 8;
pub const PID_HIDDEN_COUNT: u32 = 9;
pub const PID_MMCLIP_COUNT: u32 = 10;
pub const PID_SCALE: u32 = 11;
pub const PID_HEADING_PAIR: u32 = 12;
pub const PID_DOC_PARTS: u32 = 13;
pub const PID_MANAGER: u32 = 14;
pub const PID_COMPANY: u32 = 15;
pub const PID_LINKS_DIRTY: u32 = 16;

/// FMTID of the SummaryInformation section,
/// {F29F85E0-4FF9-1068-AB91-08002B27B3D9} in on-disk byte order
pub const FMTID_SUMMARY_INFORMATION: [u8; 16] = [
    0xE0, 0x85, 0x9F, 0xF2, // Data1
    0xF9, 0x4F, // Data2
    0x68, 0x10, // Data3
    0xAB, 0x91, 0x08, 0x00, 0x2B, 0x27, 0xB3, 0xD9, // Data4
];

/// FMTID of the DocumentSummaryInformation first section,
/// {D5CDD502-2E9C-101B-9397-08002B2CF9AE} in on-disk byte order
pub const FMTID_DOC_SUMMARY_INFORMATION: [u8; 16] = [
    0x02, 0xD5, 0xCD, 0xD5, // Data1
    0x9C, 0x2E, // Data2
    0x1B, 0x10, // Data3
    0x93, 0x97, 0x08, 0x00, 0x2B, 0x2C, 0xF9, 0xAE, // Data4
];

/// FMTID of the user-defined (custom properties) second section,
/// {D5CDD505-2E9C-101B-9397-08002B2CF9AE} in on-disk byte order
pub const FMTID_USER_DEFINED_PROPERTIES: [u8; 16] = [
    0x05, 0xD5, 0xCD, 0xD5, // Data1
    0x9C, 0x2E, // Data2
    0x1B, 0x10, // Data3
    0x93, 0x97, 0x08, 0x00, 0x2B, 0x2C, 0xF9, 0xAE, // Data4
];
