//! Geometry body decoding.

use std::io::Read;

use crate::error::{Result, ShpError};
use crate::types::{Point, Shape, ShapeType};

use super::stream_reader::ShpStreamReader;

/// Decode one geometry body of kind `shape_type` from `stream`.
///
/// The caller has already consumed the record's type tag and verified it
/// is an enumerated kind; `record` is carried along only for error
/// reporting. Supporting a further kind is a local change: one match arm
/// here plus a payload variant on [`Shape`].
pub(crate) fn decode_shape<R: Read>(
    stream: &mut ShpStreamReader<R>,
    shape_type: ShapeType,
    record: i32,
) -> Result<Shape> {
    match shape_type {
        ShapeType::Null => Ok(Shape::Null),
        ShapeType::Point => {
            let x = stream.read_f64_le()?;
            let y = stream.read_f64_le()?;
            Ok(Shape::Point(Point::new(x, y)))
        }
        // Valid tags without a decoder. No bytes are consumed: the body
        // layout is unknown, and the declared record length cannot be
        // trusted enough to skip it.
        _ => Err(ShpError::UnsupportedShapeType { record, shape_type }),
    }
}
