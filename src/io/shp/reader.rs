//! Shapefile reading session.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::Result;
use crate::types::Shape;

use super::header::ShpFileHeader;
use super::reader_configuration::ShpReaderConfiguration;
use super::record::ShpRecordScanner;

/// Shapefile reading session.
///
/// Owns the configuration, the geometry header of the last successful
/// parse, and the message of the last failure. A session has no internal
/// synchronization; sharing one across threads requires external
/// serialization.
pub struct ShapefileReader {
    configuration: ShpReaderConfiguration,
    header: Option<ShpFileHeader>,
    last_error: Option<String>,
}

impl ShapefileReader {
    /// Create an empty session with the default configuration.
    pub fn new() -> Self {
        Self {
            configuration: ShpReaderConfiguration::default(),
            header: None,
            last_error: None,
        }
    }

    /// Replace the configuration.
    pub fn with_configuration(mut self, configuration: ShpReaderConfiguration) -> Self {
        self.configuration = configuration;
        self
    }

    /// Header of the most recently parsed geometry file.
    pub fn header(&self) -> Option<&ShpFileHeader> {
        self.header.as_ref()
    }

    /// Message of the most recent failure.
    ///
    /// Overwritten by each failing call; only meaningful immediately
    /// after a call returned an error.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Parse the shapefile pair at `path`, delivering each decoded shape
    /// to `consumer`.
    ///
    /// `path` may name the `.shp` file itself or the bare base name; its
    /// extension (if any) is swapped to locate the companion files. The
    /// `.shx` header is validated first (unless configured off), then the
    /// `.shp` records are decoded in on-disk order. `consumer` returns
    /// `true` to continue or `false` to stop after the current shape; the
    /// borrowed shape must be cloned out to outlive the call.
    ///
    /// # Errors
    ///
    /// Any I/O, header or record failure is terminal for the call. Shapes
    /// delivered before the failure stay delivered; nothing is replayed.
    /// The rendered failure message is retained for
    /// [`last_error`](Self::last_error).
    pub fn parse<P, F>(&mut self, path: P, consumer: F) -> Result<()>
    where
        P: AsRef<Path>,
        F: FnMut(&Shape) -> bool,
    {
        let result = self.parse_files(path.as_ref(), consumer);
        if let Err(ref e) = result {
            self.last_error = Some(e.to_string());
        }
        result
    }

    /// Parse the pair at `path` and collect every shape into a vector.
    pub fn read_shapes<P: AsRef<Path>>(&mut self, path: P) -> Result<Vec<Shape>> {
        let mut shapes = Vec::new();
        self.parse(path, |shape| {
            shapes.push(shape.clone());
            true
        })?;
        Ok(shapes)
    }

    fn parse_files<F>(&mut self, path: &Path, consumer: F) -> Result<()>
    where
        F: FnMut(&Shape) -> bool,
    {
        self.header = None;

        if self.configuration.require_index {
            self.validate_shx(&path.with_extension("shx"))?;
        }

        // Handles are scoped locals: closed on every exit path.
        let file = File::open(path.with_extension("shp"))?;
        let mut reader = BufReader::new(file);
        let header = ShpFileHeader::decode(&mut reader)?;

        let mut scanner = ShpRecordScanner::new(reader, &header);
        self.header = Some(header);
        scanner.run(consumer)
    }

    /// The index header is structurally identical to the geometry header
    /// and must parse cleanly; the record-offset table behind it is never
    /// read.
    fn validate_shx(&self, path: &Path) -> Result<()> {
        let file = File::open(path)?;
        ShpFileHeader::decode(&mut BufReader::new(file))?;
        Ok(())
    }
}

impl Default for ShapefileReader {
    fn default() -> Self {
        Self::new()
    }
}
