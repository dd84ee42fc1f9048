//! I/O module for reading ESRI Shapefile geometry files

pub mod shp;

pub use shp::{ShapefileReader, ShpReaderConfiguration};
