//! Error types for shapefile reading.

use thiserror::Error;

use crate::types::ShapeType;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ShpError>;

/// Errors produced while reading a shapefile pair.
///
/// Every variant is terminal for the current parse: the format's record
/// framing leaves no safe resynchronization point after a failure.
#[derive(Debug, Error)]
pub enum ShpError {
    /// Underlying I/O failure, including short reads.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The header magic word did not match the shapefile file code.
    #[error("header magic number {0:#010x} is invalid")]
    BadMagic(i32),

    /// The file header declares a shape type outside the enumerated set.
    #[error("header shape type {0} is invalid")]
    BadShapeType(i32),

    /// The declared file length is smaller than the fixed header itself.
    #[error("file length {0} in header cannot be less than the header size")]
    HeaderTooShort(i64),

    /// A record declares a shape type outside the enumerated set.
    #[error("shape type {code} in record {record} is not valid")]
    InvalidShapeType {
        /// 1-based record number.
        record: i32,
        /// The raw type code found on disk.
        code: i32,
    },

    /// A record declares a recognized shape type this reader does not
    /// decode. The true length of an undecoded body cannot be inferred,
    /// so the record cannot be skipped.
    #[error(
        "shape type {} ({}) in record {} is not supported",
        .shape_type.code(),
        .shape_type,
        .record
    )]
    UnsupportedShapeType {
        /// 1-based record number.
        record: i32,
        /// The recognized but undecoded kind.
        shape_type: ShapeType,
    },

    /// A record declares more content than the file has left.
    #[error("record {record} content length {length} exceeds the remaining file length")]
    RecordTruncated {
        /// 1-based record number.
        record: i32,
        /// Declared content length in bytes.
        length: i64,
    },
}
