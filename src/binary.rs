//! Bounds-checked little-endian cursor over a property set stream.
//!
//! All stream access goes through [`ByteReader`]: every read validates the
//! requested span against the remaining buffer before touching memory, and
//! length or count fields taken from the stream itself must pass
//! [`ByteReader::check_len`] / [`ByteReader::check_count`] before any
//! allocation sized from them.

use crate::codepage::decode_string;
use crate::error::{Error, Result};
use zerocopy::{F32, F64, FromBytes, I16, I32, LE, U16, U32, U64};

/// Read cursor over an in-memory byte buffer.
///
/// The buffer itself is immutable; only the read offset advances. A failed
/// read leaves the offset where it was.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Create a cursor positioned at the start of `data`.
    #[inline]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current read offset from the start of the buffer.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left between the read offset and the end of the buffer.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Move the read offset to an absolute position.
    ///
    /// Offsets come from the stream (section offsets, property table
    /// entries), so a target past the end of the buffer is a decode error,
    /// not a panic.
    pub fn seek(&mut self, pos: u64) -> Result<()> {
        if pos > self.data.len() as u64 {
            return Err(Error::Truncated {
                needed: pos as usize,
                available: self.data.len(),
            });
        }
        self.pos = pos as usize;
        Ok(())
    }

    /// Consume `n` bytes, returning the span read.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        if n > self.remaining() {
            return Err(Error::Truncated {
                needed: n,
                available: self.remaining(),
            });
        }
        let bytes = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    #[inline]
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_bytes(1)?[0])
    }

    #[inline]
    pub fn read_u16(&mut self) -> Result<u16> {
        let bytes = self.read_bytes(2)?;
        U16::<LE>::read_from_bytes(bytes)
            .map(|v| v.get())
            .map_err(|_| Error::Truncated {
                needed: 2,
                available: bytes.len(),
            })
    }

    #[inline]
    pub fn read_i16(&mut self) -> Result<i16> {
        let bytes = self.read_bytes(2)?;
        I16::<LE>::read_from_bytes(bytes)
            .map(|v| v.get())
            .map_err(|_| Error::Truncated {
                needed: 2,
                available: bytes.len(),
            })
    }

    #[inline]
    pub fn read_u32(&mut self) -> Result<u32> {
        let bytes = self.read_bytes(4)?;
        U32::<LE>::read_from_bytes(bytes)
            .map(|v| v.get())
            .map_err(|_| Error::Truncated {
                needed: 4,
                available: bytes.len(),
            })
    }

    #[inline]
    pub fn read_i32(&mut self) -> Result<i32> {
        let bytes = self.read_bytes(4)?;
        I32::<LE>::read_from_bytes(bytes)
            .map(|v| v.get())
            .map_err(|_| Error::Truncated {
                needed: 4,
                available: bytes.len(),
            })
    }

    #[inline]
    pub fn read_u64(&mut self) -> Result<u64> {
        let bytes = self.read_bytes(8)?;
        U64::<LE>::read_from_bytes(bytes)
            .map(|v| v.get())
            .map_err(|_| Error::Truncated {
                needed: 8,
                available: bytes.len(),
            })
    }

    #[inline]
    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(self.read_u64()? as i64)
    }

    #[inline]
    pub fn read_f32(&mut self) -> Result<f32> {
        let bytes = self.read_bytes(4)?;
        F32::<LE>::read_from_bytes(bytes)
            .map(|v| v.get())
            .map_err(|_| Error::Truncated {
                needed: 4,
                available: bytes.len(),
            })
    }

    #[inline]
    pub fn read_f64(&mut self) -> Result<f64> {
        let bytes = self.read_bytes(8)?;
        F64::<LE>::read_from_bytes(bytes)
            .map(|v| v.get())
            .map_err(|_| Error::Truncated {
                needed: 8,
                available: bytes.len(),
            })
    }

    /// Read a raw 16-byte GUID in on-disk byte order.
    pub fn read_guid(&mut self) -> Result<[u8; 16]> {
        let bytes = self.read_bytes(16)?;
        <[u8; 16]>::try_from(bytes).map_err(|_| Error::Truncated {
            needed: 16,
            available: bytes.len(),
        })
    }

    /// Read `n` bytes and decode them as a narrow string under `codepage`.
    ///
    /// `n` is a byte count; the caller validates it first when it came from
    /// the stream.
    pub fn read_string(&mut self, n: usize, codepage: u32) -> Result<String> {
        Ok(decode_string(self.read_bytes(n)?, codepage))
    }

    /// Validate a byte length field read from the stream.
    ///
    /// Returns the length as `usize` only if that many bytes actually
    /// remain, so callers never allocate from an unclamped field.
    pub fn check_len(&self, declared: u32) -> Result<usize> {
        let n = declared as usize;
        if n > self.remaining() {
            return Err(Error::InvalidLength {
                declared,
                available: self.remaining(),
            });
        }
        Ok(n)
    }

    /// Validate an element count field against a minimum element size.
    ///
    /// A corrupt count is rejected here, before `Vec::with_capacity` ever
    /// sees it.
    pub fn check_count(&self, count: u32, min_elem_size: usize) -> Result<usize> {
        let n = count as usize;
        if min_elem_size > 0 && n > self.remaining() / min_elem_size {
            return Err(Error::InvalidLength {
                declared: count,
                available: self.remaining(),
            });
        }
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_scalars() {
        let data = [0x34, 0x12, 0x78, 0x56, 0x00, 0x00, 0x00, 0x80];
        let mut r = ByteReader::new(&data);
        assert_eq!(r.read_u16().unwrap(), 0x1234);
        assert_eq!(r.read_u16().unwrap(), 0x5678);
        assert_eq!(r.read_i32().unwrap(), i32::MIN);
        assert_eq!(r.remaining(), 0);
    }

    #[test]
    fn test_read_past_end() {
        let data = [0x01, 0x02, 0x03];
        let mut r = ByteReader::new(&data);
        assert_eq!(r.read_u16().unwrap(), 0x0201);
        assert!(matches!(
            r.read_u32(),
            Err(Error::Truncated {
                needed: 4,
                available: 1
            })
        ));
        // a failed read does not advance the cursor
        assert_eq!(r.position(), 2);
        assert_eq!(r.read_u8().unwrap(), 0x03);
    }

    #[test]
    fn test_seek_bounds() {
        let data = [0u8; 8];
        let mut r = ByteReader::new(&data);
        assert!(r.seek(8).is_ok());
        assert_eq!(r.remaining(), 0);
        assert!(r.seek(9).is_err());
        assert!(r.seek(u64::MAX).is_err());
    }

    #[test]
    fn test_check_len() {
        let data = [0u8; 10];
        let mut r = ByteReader::new(&data);
        r.seek(4).unwrap();
        assert_eq!(r.check_len(6).unwrap(), 6);
        assert!(matches!(
            r.check_len(7),
            Err(Error::InvalidLength {
                declared: 7,
                available: 6
            })
        ));
    }

    #[test]
    fn test_check_count() {
        let data = [0u8; 64];
        let r = ByteReader::new(&data);
        assert_eq!(r.check_count(8, 8).unwrap(), 8);
        assert!(r.check_count(9, 8).is_err());
        // an absurd count is rejected even though count * size overflows
        assert!(r.check_count(u32::MAX, 8).is_err());
    }

    #[test]
    fn test_read_string() {
        let data = b"abc\0defgh";
        let mut r = ByteReader::new(data);
        assert_eq!(r.read_string(4, 1252).unwrap(), "abc");
        assert_eq!(r.position(), 4);
        assert!(r.read_string(6, 1252).is_err());
    }

    #[test]
    fn test_read_guid() {
        let mut data = [0u8; 16];
        data[0] = 0xE0;
        data[15] = 0xD9;
        let mut r = ByteReader::new(&data);
        let guid = r.read_guid().unwrap();
        assert_eq!(guid[0], 0xE0);
        assert_eq!(guid[15], 0xD9);
        assert!(ByteReader::new(&data[..15]).read_guid().is_err());
    }
}
