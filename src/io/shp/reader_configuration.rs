//! Configuration for reading shapefiles.

/// Configuration options for [`ShapefileReader`](super::ShapefileReader).
#[derive(Debug, Clone)]
pub struct ShpReaderConfiguration {
    /// Require the companion `.shx` index file to be present and carry a
    /// valid header before the geometry file is touched.
    /// Default: `true`.
    ///
    /// The index body is never read either way; only its header is
    /// validated. Disabling this allows reading a `.shp` file whose index
    /// has been lost.
    pub require_index: bool,
}

impl Default for ShpReaderConfiguration {
    fn default() -> Self {
        Self {
            require_index: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = ShpReaderConfiguration::default();
        assert!(cfg.require_index);
    }
}
