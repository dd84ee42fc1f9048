//! # shp-tools-rs
//!
//! A pure Rust library for reading ESRI Shapefile geometry files.
//!
//! A shapefile stores vector features as a pair of binary files: the
//! geometry file (`.shp`) holding length-prefixed records, and the index
//! file (`.shx`) holding per-record offsets. This crate validates both
//! headers and streams the geometry records to a consumer closure, one
//! decoded [`Shape`] at a time.
//!
//! ## Example
//!
//! ```no_run
//! use shp_tools_rs::ShapefileReader;
//!
//! let mut reader = ShapefileReader::new();
//! let result = reader.parse("data/cities.shp", |shape| {
//!     println!("{}", shape.to_wkt());
//!     true
//! });
//! if result.is_err() {
//!     eprintln!("read failed: {}", reader.last_error().unwrap_or("unknown"));
//! }
//! ```
//!
//! Decoding currently covers the Null and Point record kinds. Every other
//! shape type defined by the format is recognized and reported as
//! unsupported rather than misparsed; see [`io::shp`] for the framing
//! details.

pub mod error;
pub mod io;
pub mod types;

pub use error::{Result, ShpError};
pub use io::shp::{
    ScanState, ShapefileReader, ShpFileHeader, ShpReaderConfiguration, ShpRecordHeader,
    ShpRecordScanner,
};
pub use types::{BoundingRect, Point, Shape, ShapeType, ValueRange};
