//! Record framing and the sequential record scanner.

use std::io::Read;

use crate::error::{Result, ShpError};
use crate::types::{Shape, ShapeType};

use super::geometry;
use super::header::{ShpFileHeader, HEADER_SIZE};
use super::stream_reader::ShpStreamReader;

/// Framing header preceding every record body in the `.shp` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShpRecordHeader {
    /// 1-based record number.
    pub number: i32,
    /// Record content length in bytes (doubled from the on-disk word
    /// count). The content starts with the record's own type tag.
    pub length: i64,
}

impl ShpRecordHeader {
    fn decode<R: Read>(stream: &mut ShpStreamReader<R>) -> Result<Self> {
        let number = stream.read_i32_be()?;
        let length = stream.read_i32_split_be()? as i64 * 2;
        Ok(Self { number, length })
    }
}

/// Scanner lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Constructed, no record read yet.
    Ready,
    /// Mid-iteration.
    Reading,
    /// The budget ran out or the consumer asked to stop.
    Done,
    /// A read or decode failure ended the scan.
    Failed,
}

/// Sequential scanner over the records of a `.shp` file.
///
/// Walks the records in on-disk order against the byte budget derived
/// from the file header, decoding each geometry body and handing it to a
/// consumer closure. The consumer returns `true` to continue and `false`
/// to stop after the current record; the borrowed [`Shape`] is only valid
/// for the duration of the call, so a consumer that wants to keep it must
/// clone it out.
///
/// Any failure is terminal for the file. An undecodable record leaves the
/// stream position inside a body of unknown layout, so there is no
/// skip-and-continue.
pub struct ShpRecordScanner<R> {
    stream: ShpStreamReader<R>,
    state: ScanState,
}

impl<R: Read> ShpRecordScanner<R> {
    /// Create a scanner over `reader`, which must be positioned just past
    /// the 100-byte file header that `header` was decoded from.
    pub fn new(reader: R, header: &ShpFileHeader) -> Self {
        Self {
            stream: ShpStreamReader::new(reader, header.file_length - HEADER_SIZE),
            state: ScanState::Ready,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Bytes left in the record budget.
    pub fn remaining(&self) -> i64 {
        self.stream.remaining()
    }

    /// Decode every remaining record, delivering each to `consumer`.
    ///
    /// Records decoded before a failure have already been delivered; the
    /// scan itself never yields partial results.
    pub fn run<F>(&mut self, mut consumer: F) -> Result<()>
    where
        F: FnMut(&Shape) -> bool,
    {
        self.state = ScanState::Reading;
        match self.scan(&mut consumer) {
            Ok(()) => {
                self.state = ScanState::Done;
                Ok(())
            }
            Err(e) => {
                self.state = ScanState::Failed;
                Err(e)
            }
        }
    }

    fn scan<F>(&mut self, consumer: &mut F) -> Result<()>
    where
        F: FnMut(&Shape) -> bool,
    {
        let mut stop = false;
        while !stop && self.stream.remaining() > 0 {
            let record_header = ShpRecordHeader::decode(&mut self.stream)?;
            if record_header.length > self.stream.remaining() {
                return Err(ShpError::RecordTruncated {
                    record: record_header.number,
                    length: record_header.length,
                });
            }
            let shape = self.decode_record(&record_header)?;
            stop = !consumer(&shape);
        }
        Ok(())
    }

    fn decode_record(&mut self, record_header: &ShpRecordHeader) -> Result<Shape> {
        let code = self.stream.read_i32_le()?;
        let shape_type = ShapeType::from_code(code).ok_or(ShpError::InvalidShapeType {
            record: record_header.number,
            code,
        })?;
        geometry::decode_shape(&mut self.stream, shape_type, record_header.number)
    }
}
