//! Oleps - A Rust library for parsing OLE property set streams
//!
//! This library decodes the metadata streams embedded in OLE2 compound
//! files (`\x05SummaryInformation` and `\x05DocumentSummaryInformation`,
//! per the MS-OLEPS specification) into an immutable, typed representation.
//!
//! # Features
//!
//! - **Full variant coverage**: scalars, strings, CLSIDs, blobs, and
//!   vectors, including vector-of-variant
//! - **Codepage aware**: narrow strings decode under the section's
//!   codepage, with a Latin-1 fallback for unknown codepages
//! - **Custom properties**: the id-0 dictionary resolves user-defined
//!   property ids to names
//! - **Hardened against corrupt input**: every length, count, and offset
//!   read from the stream is validated before use; malformed streams
//!   produce typed errors, never panics or out-of-bounds reads
//!
//! The container layer is out of scope: callers hand in the exact bytes of
//! a property set stream (from an OLE2 directory entry, or anywhere else)
//! and get back a [`PropertySet`] value tree.
//!
//! # Example
//!
//! ```
//! use oleps::{PropertySet, consts};
//!
//! // Assemble a minimal SummaryInformation stream: a codepage property
//! // and a title. Real streams come out of a compound-file container.
//! let mut data = Vec::new();
//! data.extend_from_slice(&0xFFFEu16.to_le_bytes()); // byte-order mark
//! data.extend_from_slice(&0u16.to_le_bytes()); // version
//! data.extend_from_slice(&2u32.to_le_bytes()); // system id
//! data.extend_from_slice(&[0u8; 16]); // class id
//! data.extend_from_slice(&1u32.to_le_bytes()); // one section
//! data.extend_from_slice(&consts::FMTID_SUMMARY_INFORMATION);
//! data.extend_from_slice(&48u32.to_le_bytes()); // section offset
//! // section header and property table
//! data.extend_from_slice(&44u32.to_le_bytes()); // section size
//! data.extend_from_slice(&2u32.to_le_bytes()); // property count
//! data.extend_from_slice(&consts::PID_CODEPAGE.to_le_bytes());
//! data.extend_from_slice(&24u32.to_le_bytes());
//! data.extend_from_slice(&consts::PID_TITLE.to_le_bytes());
//! data.extend_from_slice(&30u32.to_le_bytes());
//! // the two values
//! data.extend_from_slice(&(consts::VT_I2 as u32).to_le_bytes());
//! data.extend_from_slice(&1252i16.to_le_bytes());
//! data.extend_from_slice(&(consts::VT_LPSTR as u32).to_le_bytes());
//! data.extend_from_slice(&6u32.to_le_bytes());
//! data.extend_from_slice(b"Hello\0");
//!
//! let ps = PropertySet::parse(&data)?;
//! let info = ps.summary_information().unwrap();
//! assert_eq!(info.title(), Some("Hello"));
//! assert_eq!(info.codepage(), 1252);
//! # Ok::<(), oleps::Error>(())
//! ```
//!
//! # Example - Generic property access
//!
//! ```no_run
//! use oleps::PropertySet;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let stream_bytes: Vec<u8> = vec![];
//! let ps = PropertySet::parse(&stream_bytes)?;
//! for entry in ps.first_section().entries() {
//!     match entry.name {
//!         Some(name) => println!("{name} = {:?}", entry.value),
//!         None => println!("#{} = {:?}", entry.id, entry.value),
//!     }
//! }
//! # Ok(())
//! # }
//! ```

/// Bounds-checked little-endian cursor over the stream
pub mod binary;

/// Codepage to encoding mapping and string decoding
pub mod codepage;

/// Type tags, property ids, and format identifiers
pub mod consts;

/// Error types for property set decoding
pub mod error;

/// Top-level stream decoding and kind dispatch
pub mod propset;

/// Section decoding: property table, properties, dictionary
pub mod section;

/// Typed views for the two well-known stream kinds
pub mod summary;

/// Typed property values and their binary layouts
pub mod variant;

// Re-export public types for convenient access
pub use error::{Error, Result};
pub use propset::{PropertySet, PropertySetKind};
pub use section::{DictionaryEntry, Property, PropertyTable, Section, SectionEntry, TableEntry};
pub use summary::{DocumentSummaryInformation, SummaryInformation};
pub use variant::{Clsid, Variant};
