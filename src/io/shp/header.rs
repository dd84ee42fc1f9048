//! Shapefile header codec.
//!
//! The `.shp` and `.shx` files open with an identical fixed 100-byte
//! header: magic word, five reserved words, file length, version, shape
//! type, bounding rectangle, and the Z and M ranges. The integer prefix
//! is big-endian (length as a split field, see
//! [`stream_reader`](super::stream_reader)), everything from the version
//! word on is little-endian.

use std::io::Read;

use crate::error::{Result, ShpError};
use crate::types::{BoundingRect, ShapeType, ValueRange};

use super::stream_reader::{read_f64_le, read_i32_be, read_i32_le, read_i32_split_be};

/// Magic word opening both files of a shapefile pair.
pub const HEADER_MAGIC: i32 = 0x0000_270a;

/// On-disk size of the fixed header, in bytes.
pub const HEADER_SIZE: i64 = 100;

/// Parsed file header, common to the `.shp` and `.shx` layouts.
#[derive(Debug, Clone, PartialEq)]
pub struct ShpFileHeader {
    /// Total file length in bytes, header included.
    ///
    /// Stored on disk as a count of 16-bit words; doubled on read.
    pub file_length: i64,
    /// Format version word.
    pub version: i32,
    /// Shape type declared for every record in the file.
    pub shape_type: ShapeType,
    /// Minimum bounding rectangle of all geometry in the file.
    pub bounds: BoundingRect,
    /// Z dimension range.
    pub z_range: ValueRange,
    /// M dimension range.
    pub m_range: ValueRange,
}

impl ShpFileHeader {
    /// Decode a header from the start of `reader`.
    ///
    /// # Errors
    ///
    /// `ShpError::Io` if any field read falls short, otherwise
    /// `BadMagic`, `BadShapeType` or `HeaderTooShort` when the decoded
    /// fields fail validation, checked in that order after all fields
    /// have been read.
    pub fn decode<R: Read>(reader: &mut R) -> Result<Self> {
        let magic = read_i32_be(reader)?;
        for _ in 0..5 {
            read_i32_be(reader)?; // reserved
        }
        let file_length = read_i32_split_be(reader)? as i64 * 2;
        let version = read_i32_le(reader)?;
        let type_code = read_i32_le(reader)?;
        let min_x = read_f64_le(reader)?;
        let max_x = read_f64_le(reader)?;
        let min_y = read_f64_le(reader)?;
        let max_y = read_f64_le(reader)?;
        let z_range = ValueRange::new(read_f64_le(reader)?, read_f64_le(reader)?);
        let m_range = ValueRange::new(read_f64_le(reader)?, read_f64_le(reader)?);

        if magic != HEADER_MAGIC {
            return Err(ShpError::BadMagic(magic));
        }
        let shape_type =
            ShapeType::from_code(type_code).ok_or(ShpError::BadShapeType(type_code))?;
        if file_length < HEADER_SIZE {
            return Err(ShpError::HeaderTooShort(file_length));
        }

        Ok(Self {
            file_length,
            version,
            shape_type,
            bounds: BoundingRect::new(min_x, min_y, max_x, max_y),
            z_range,
            m_range,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Build the 100 header bytes for the given fields, laying each one
    /// out with the endianness the decoder expects.
    fn encode_header(
        file_length_words: i32,
        version: i32,
        type_code: i32,
        bounds: [f64; 4],
        z_range: [f64; 2],
        m_range: [f64; 2],
    ) -> Vec<u8> {
        encode_header_with_magic(
            HEADER_MAGIC,
            file_length_words,
            version,
            type_code,
            bounds,
            z_range,
            m_range,
        )
    }

    fn encode_header_with_magic(
        magic: i32,
        file_length_words: i32,
        version: i32,
        type_code: i32,
        bounds: [f64; 4],
        z_range: [f64; 2],
        m_range: [f64; 2],
    ) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(HEADER_SIZE as usize);
        bytes.extend_from_slice(&magic.to_be_bytes());
        for _ in 0..5 {
            bytes.extend_from_slice(&0i32.to_be_bytes());
        }
        // Split field: low half first.
        bytes.extend_from_slice(&((file_length_words & 0xFFFF) as i16).to_be_bytes());
        bytes.extend_from_slice(&((file_length_words >> 16) as i16).to_be_bytes());
        bytes.extend_from_slice(&version.to_le_bytes());
        bytes.extend_from_slice(&type_code.to_le_bytes());
        // On-disk order: min-X, max-X, min-Y, max-Y.
        bytes.extend_from_slice(&bounds[0].to_le_bytes());
        bytes.extend_from_slice(&bounds[2].to_le_bytes());
        bytes.extend_from_slice(&bounds[1].to_le_bytes());
        bytes.extend_from_slice(&bounds[3].to_le_bytes());
        for value in z_range.into_iter().chain(m_range) {
            bytes.extend_from_slice(&value.to_le_bytes());
        }
        bytes
    }

    #[test]
    fn test_decode_valid_header() {
        let bytes = encode_header(
            120,
            1000,
            1,
            [-10.5, -4.0, 20.25, 8.75],
            [0.0, 100.0],
            [-1.0, 1.0],
        );
        assert_eq!(bytes.len(), HEADER_SIZE as usize);

        let header = ShpFileHeader::decode(&mut Cursor::new(bytes)).unwrap();
        assert_eq!(header.file_length, 240); // words doubled to bytes
        assert_eq!(header.version, 1000);
        assert_eq!(header.shape_type, ShapeType::Point);
        assert_eq!(header.bounds, BoundingRect::new(-10.5, -4.0, 20.25, 8.75));
        assert_eq!(header.z_range, ValueRange::new(0.0, 100.0));
        assert_eq!(header.m_range, ValueRange::new(-1.0, 1.0));
    }

    #[test]
    fn test_bad_magic_rejected() {
        let bytes = encode_header_with_magic(
            0x1234_5678,
            120,
            1000,
            1,
            [0.0; 4],
            [0.0; 2],
            [0.0; 2],
        );
        let err = ShpFileHeader::decode(&mut Cursor::new(bytes)).unwrap_err();
        assert!(matches!(err, ShpError::BadMagic(0x1234_5678)));
    }

    #[test]
    fn test_bad_shape_type_rejected() {
        // Tag 2 sits inside the numeric range but is not an enumerated kind.
        let bytes = encode_header(120, 1000, 2, [0.0; 4], [0.0; 2], [0.0; 2]);
        let err = ShpFileHeader::decode(&mut Cursor::new(bytes)).unwrap_err();
        assert!(matches!(err, ShpError::BadShapeType(2)));
    }

    #[test]
    fn test_magic_checked_before_shape_type() {
        let bytes =
            encode_header_with_magic(0, 120, 1000, 2, [0.0; 4], [0.0; 2], [0.0; 2]);
        let err = ShpFileHeader::decode(&mut Cursor::new(bytes)).unwrap_err();
        assert!(matches!(err, ShpError::BadMagic(0)));
    }

    #[test]
    fn test_too_short_rejected() {
        // 40 words = 80 bytes, less than the 100-byte header.
        let bytes = encode_header(40, 1000, 0, [0.0; 4], [0.0; 2], [0.0; 2]);
        let err = ShpFileHeader::decode(&mut Cursor::new(bytes)).unwrap_err();
        assert!(matches!(err, ShpError::HeaderTooShort(80)));
    }

    #[test]
    fn test_truncated_header_is_io_error() {
        let bytes = encode_header(120, 1000, 1, [0.0; 4], [0.0; 2], [0.0; 2]);
        let err = ShpFileHeader::decode(&mut Cursor::new(&bytes[..60])).unwrap_err();
        assert!(matches!(err, ShpError::Io(_)));
    }
}
