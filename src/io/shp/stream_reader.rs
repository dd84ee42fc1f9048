//! Primitive field reads for the shapefile binary layout.

use std::io::Read;

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};

use crate::error::Result;

// ── Field primitives ──────────────────────────────────────────────────────
//
// Free functions over any `Read`, used directly where no byte budget is
// in play (the fixed headers) and through `ShpStreamReader` where one is.
// A short read surfaces as `ErrorKind::UnexpectedEof` from byteorder and
// is fatal; the format offers no way to recover a partial record.

/// Read a big-endian 16-bit integer.
pub(crate) fn read_i16_be<R: Read>(reader: &mut R) -> Result<i16> {
    Ok(reader.read_i16::<BigEndian>()?)
}

/// Read a big-endian 32-bit integer.
pub(crate) fn read_i32_be<R: Read>(reader: &mut R) -> Result<i32> {
    Ok(reader.read_i32::<BigEndian>()?)
}

/// Read a little-endian 32-bit integer.
pub(crate) fn read_i32_le<R: Read>(reader: &mut R) -> Result<i32> {
    Ok(reader.read_i32::<LittleEndian>()?)
}

/// Read a little-endian 64-bit float.
pub(crate) fn read_f64_le<R: Read>(reader: &mut R) -> Result<f64> {
    Ok(reader.read_f64::<LittleEndian>()?)
}

/// Read a 32-bit length field stored as two big-endian 16-bit halves,
/// low half first.
///
/// The shapefile length fields predate the format's own endianness
/// conventions: `[0x00, 0x01, 0x00, 0x02]` is the value `(2 << 16) | 1`,
/// not the `65538` a single big-endian read would produce.
pub(crate) fn read_i32_split_be<R: Read>(reader: &mut R) -> Result<i32> {
    let low = read_i16_be(reader)?;
    let high = read_i16_be(reader)?;
    Ok(((high as i32) << 16) | (low as i32 & 0xFFFF))
}

// ── Budgeted cursor ───────────────────────────────────────────────────────

/// Byte-stream cursor that owns a remaining-length budget.
///
/// Record iteration must stop exactly when the byte count the file header
/// declared runs out. Rather than threading a counter through every read
/// call, the cursor holds the budget itself and each read method
/// decrements it by the field width, making exhaustion queryable at any
/// point via [`remaining`](Self::remaining).
pub struct ShpStreamReader<R> {
    inner: R,
    remaining: i64,
}

impl<R: Read> ShpStreamReader<R> {
    /// Wrap `inner` with `budget` bytes left to consume.
    pub fn new(inner: R, budget: i64) -> Self {
        Self {
            inner,
            remaining: budget,
        }
    }

    /// Bytes left in the budget.
    pub fn remaining(&self) -> i64 {
        self.remaining
    }

    /// Read exactly `buf.len()` bytes, counting them against the budget.
    pub fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        self.inner.read_exact(buf)?;
        self.remaining -= buf.len() as i64;
        Ok(())
    }

    /// Read a big-endian 16-bit integer, consuming 2 budget bytes.
    pub fn read_i16_be(&mut self) -> Result<i16> {
        let value = read_i16_be(&mut self.inner)?;
        self.remaining -= 2;
        Ok(value)
    }

    /// Read a big-endian 32-bit integer, consuming 4 budget bytes.
    pub fn read_i32_be(&mut self) -> Result<i32> {
        let value = read_i32_be(&mut self.inner)?;
        self.remaining -= 4;
        Ok(value)
    }

    /// Read a little-endian 32-bit integer, consuming 4 budget bytes.
    pub fn read_i32_le(&mut self) -> Result<i32> {
        let value = read_i32_le(&mut self.inner)?;
        self.remaining -= 4;
        Ok(value)
    }

    /// Read a little-endian 64-bit float, consuming 8 budget bytes.
    pub fn read_f64_le(&mut self) -> Result<f64> {
        let value = read_f64_le(&mut self.inner)?;
        self.remaining -= 8;
        Ok(value)
    }

    /// Read a split big-endian 32-bit length field, consuming 4 budget
    /// bytes. See [`read_i32_split_be`].
    pub fn read_i32_split_be(&mut self) -> Result<i32> {
        let value = read_i32_split_be(&mut self.inner)?;
        self.remaining -= 4;
        Ok(value)
    }
}
