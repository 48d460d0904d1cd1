//! Typed property values and their binary layouts.
//!
//! A property value on the wire is a 16-bit type tag (plus two padding
//! bytes) followed by a tag-specific payload. [`Variant`] is the decoded
//! form; [`Variant::parse`] owns every layout, including the vector
//! variants, so the section decoder never touches value bytes itself.

use crate::binary::ByteReader;
use crate::codepage::decode_utf16le;
use crate::consts::*;
use crate::error::{Error, Result};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use std::fmt;

/// Seconds between the FILETIME epoch (1601-01-01) and the Unix epoch
const FILETIME_UNIX_OFFSET_SECS: i64 = 11_644_473_600;

/// A 16-byte GUID kept in on-disk byte order.
///
/// The first three fields are stored little-endian on disk; [`fmt::Display`]
/// renders the conventional braced form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clsid(pub [u8; 16]);

impl Clsid {
    #[inline]
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }
}

impl fmt::Display for Clsid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.0;
        write!(
            f,
            "{{{:02X}{:02X}{:02X}{:02X}-{:02X}{:02X}-{:02X}{:02X}-{:02X}{:02X}-{:02X}{:02X}{:02X}{:02X}{:02X}{:02X}}}",
            b[3], b[2], b[1], b[0], // Data1, little-endian on disk
            b[5], b[4], // Data2
            b[7], b[6], // Data3
            b[8], b[9], // Data4[0-1]
            b[10], b[11], b[12], b[13], b[14], b[15], // Data4[2-7]
        )
    }
}

/// A decoded property value.
///
/// Variant names follow the wire type tags (`VT_I2` becomes `I2` and so
/// on). The tag stored here is always consistent with the payload: a vector
/// holds exactly the elements its declared count promised, or decoding
/// failed.
#[derive(Debug, Clone, PartialEq)]
pub enum Variant {
    Empty,
    Null,
    I1(i8),
    UI1(u8),
    I2(i16),
    UI2(u16),
    I4(i32),
    UI4(u32),
    I8(i64),
    UI8(u64),
    R4(f32),
    R8(f64),
    Bool(bool),
    /// 32-bit status code (`VT_ERROR`)
    ErrorCode(u32),
    /// Fixed-point currency, scaled by 10000 (`VT_CY`)
    Currency(i64),
    /// Automation date, fractional days since 1899-12-30 (`VT_DATE`)
    Date(f64),
    /// 100-nanosecond ticks since 1601-01-01 (`VT_FILETIME`)
    Filetime(u64),
    /// Codepage string (`VT_LPSTR` / `VT_BSTR`)
    Lpstr(String),
    /// UTF-16 string (`VT_LPWSTR`)
    Lpwstr(String),
    Clsid(Clsid),
    Blob(Bytes),
    /// Clipboard data (`VT_CF`), format tag still in the payload
    ClipboardData(Bytes),
    Vector(Vec<Variant>),
}

impl Variant {
    /// Decode one typed value at the cursor position.
    ///
    /// `codepage` governs narrow string decoding; codepage 1200 makes
    /// `VT_LPSTR` payloads UTF-16 regardless of the narrow tag.
    pub fn parse(r: &mut ByteReader<'_>, codepage: u32) -> Result<Variant> {
        let tag = r.read_u16()?;
        let _padding = r.read_u16()?;
        if tag & VT_VECTOR != 0 {
            Self::parse_vector(r, tag & !VT_VECTOR, codepage)
        } else {
            Self::parse_scalar(r, tag, codepage)
        }
    }

    fn parse_scalar(r: &mut ByteReader<'_>, tag: u16, codepage: u32) -> Result<Variant> {
        let value = match tag {
            VT_EMPTY => Variant::Empty,
            VT_NULL => Variant::Null,
            VT_I1 => Variant::I1(r.read_u8()? as i8),
            VT_UI1 => Variant::UI1(r.read_u8()?),
            VT_I2 => Variant::I2(r.read_i16()?),
            VT_UI2 => Variant::UI2(r.read_u16()?),
            VT_I4 | VT_INT => Variant::I4(r.read_i32()?),
            VT_UI4 | VT_UINT => Variant::UI4(r.read_u32()?),
            VT_I8 => Variant::I8(r.read_i64()?),
            VT_UI8 => Variant::UI8(r.read_u64()?),
            VT_R4 => Variant::R4(r.read_f32()?),
            VT_R8 => Variant::R8(r.read_f64()?),
            VT_BOOL => Variant::Bool(r.read_u16()? != 0),
            VT_ERROR => Variant::ErrorCode(r.read_u32()?),
            VT_CY => Variant::Currency(r.read_i64()?),
            VT_DATE => Variant::Date(r.read_f64()?),
            VT_FILETIME => Variant::Filetime(r.read_u64()?),
            VT_LPSTR | VT_BSTR => {
                let len = r.read_u32()?;
                let n = r.check_len(len)?;
                Variant::Lpstr(r.read_string(n, codepage)?)
            }
            VT_LPWSTR => {
                let chars = r.read_u32()?;
                let units = r.check_count(chars, 2)?;
                let bytes = r.read_bytes(units * 2)?;
                Variant::Lpwstr(decode_utf16le(bytes))
            }
            VT_CLSID => Variant::Clsid(Clsid(r.read_guid()?)),
            VT_BLOB | VT_BLOB_OBJECT => {
                let len = r.read_u32()?;
                let bytes = r.read_bytes(r.check_len(len)?)?;
                Variant::Blob(Bytes::copy_from_slice(bytes))
            }
            VT_CF => {
                let len = r.read_u32()?;
                let bytes = r.read_bytes(r.check_len(len)?)?;
                Variant::ClipboardData(Bytes::copy_from_slice(bytes))
            }
            other => return Err(Error::UnsupportedVariant(other)),
        };
        Ok(value)
    }

    /// Decode `VT_VECTOR | elem_tag`: a 32-bit element count followed by
    /// that many packed element payloads (vector-of-variant elements carry
    /// their own tags).
    fn parse_vector(r: &mut ByteReader<'_>, elem_tag: u16, codepage: u32) -> Result<Variant> {
        let count = r.read_u32()?;
        let min_size = vector_elem_min_size(elem_tag)
            .ok_or(Error::UnsupportedVariant(elem_tag | VT_VECTOR))?;
        // the count is validated against the cheapest possible element
        // before any storage is allocated for it
        let n = r.check_count(count, min_size)?;
        let mut elements = Vec::with_capacity(n);
        for _ in 0..n {
            let element = if elem_tag == VT_VARIANT {
                Variant::parse(r, codepage)?
            } else {
                Self::parse_scalar(r, elem_tag, codepage)?
            };
            elements.push(element);
        }
        Ok(Variant::Vector(elements))
    }

    /// Borrow the text of a string-typed value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Variant::Lpstr(s) | Variant::Lpwstr(s) => Some(s),
            _ => None,
        }
    }

    /// Coerce an integer-typed value that fits into `i32`.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Variant::I1(v) => Some(i32::from(*v)),
            Variant::UI1(v) => Some(i32::from(*v)),
            Variant::I2(v) => Some(i32::from(*v)),
            Variant::UI2(v) => Some(i32::from(*v)),
            Variant::I4(v) => Some(*v),
            _ => None,
        }
    }

    /// Coerce a non-negative integer-typed value into `u32`.
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Variant::UI1(v) => Some(u32::from(*v)),
            Variant::UI2(v) => Some(u32::from(*v)),
            Variant::UI4(v) => Some(*v),
            Variant::I2(v) if *v >= 0 => Some(*v as u32),
            Variant::I4(v) if *v >= 0 => Some(*v as u32),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Variant::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Raw FILETIME tick count of a date-typed value.
    pub fn as_filetime(&self) -> Option<u64> {
        match self {
            Variant::Filetime(ticks) => Some(*ticks),
            _ => None,
        }
    }

    /// FILETIME converted to a UTC timestamp.
    ///
    /// Returns `None` for non-date values and for tick counts chrono cannot
    /// represent.
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        let ticks = self.as_filetime()?;
        let secs = (ticks / 10_000_000) as i64 - FILETIME_UNIX_OFFSET_SECS;
        let nanos = (ticks % 10_000_000) as u32 * 100;
        DateTime::from_timestamp(secs, nanos)
    }
}

/// Smallest possible on-wire size of one vector element, used to reject
/// corrupt element counts before allocation. `None` means the element type
/// cannot appear in a vector.
fn vector_elem_min_size(elem_tag: u16) -> Option<usize> {
    let size = match elem_tag {
        VT_I1 | VT_UI1 => 1,
        VT_I2 | VT_UI2 | VT_BOOL => 2,
        // length-prefixed elements occupy at least their length field
        VT_I4 | VT_UI4 | VT_INT | VT_UINT | VT_R4 | VT_ERROR | VT_LPSTR | VT_BSTR | VT_LPWSTR
        | VT_BLOB | VT_CF => 4,
        VT_I8 | VT_UI8 | VT_R8 | VT_CY | VT_DATE | VT_FILETIME => 8,
        VT_CLSID => 16,
        // a variant element is at least a tag plus padding
        VT_VARIANT => 4,
        _ => return None,
    };
    Some(size)
}
