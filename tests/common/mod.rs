//! Shared fixture builders for the integration tests.
//!
//! Everything here writes the on-disk layout by hand, with the same field
//! conventions the decoder expects (big-endian framing, split length
//! fields counted in 16-bit words, little-endian geometry payloads).

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub const MAGIC: i32 = 0x0000_270a;

/// Lay out a 32-bit value as two big-endian 16-bit halves, low half first.
pub fn split_be(value: i32) -> [u8; 4] {
    let low = ((value & 0xFFFF) as i16).to_be_bytes();
    let high = ((value >> 16) as i16).to_be_bytes();
    [low[0], low[1], high[0], high[1]]
}

/// Build the 100 header bytes for a file of `content_len` record bytes.
pub fn header_bytes(content_len: usize, type_code: i32) -> Vec<u8> {
    header_bytes_with_magic(MAGIC, content_len, type_code)
}

pub fn header_bytes_with_magic(magic: i32, content_len: usize, type_code: i32) -> Vec<u8> {
    let file_length_words = ((100 + content_len) / 2) as i32;
    let mut bytes = Vec::with_capacity(100);
    bytes.extend_from_slice(&magic.to_be_bytes());
    for _ in 0..5 {
        bytes.extend_from_slice(&0i32.to_be_bytes());
    }
    bytes.extend_from_slice(&split_be(file_length_words));
    bytes.extend_from_slice(&1000i32.to_le_bytes());
    bytes.extend_from_slice(&type_code.to_le_bytes());
    for _ in 0..8 {
        bytes.extend_from_slice(&0f64.to_le_bytes());
    }
    bytes
}

/// One record with an explicit type tag and body.
pub fn record_with_tag(number: i32, type_code: i32, body: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&number.to_be_bytes());
    let content_words = ((4 + body.len()) / 2) as i32;
    bytes.extend_from_slice(&split_be(content_words));
    bytes.extend_from_slice(&type_code.to_le_bytes());
    bytes.extend_from_slice(body);
    bytes
}

pub fn null_record(number: i32) -> Vec<u8> {
    record_with_tag(number, 0, &[])
}

pub fn point_record(number: i32, x: f64, y: f64) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(&x.to_le_bytes());
    body.extend_from_slice(&y.to_le_bytes());
    record_with_tag(number, 1, &body)
}

/// Write a `.shp`/`.shx` pair under `dir` and return the `.shp` path.
///
/// The index file gets a header-only body; the reader never looks past
/// its header.
pub fn write_pair(dir: &Path, base: &str, type_code: i32, records: &[Vec<u8>]) -> PathBuf {
    let content: Vec<u8> = records.iter().flatten().copied().collect();

    let mut shp = header_bytes(content.len(), type_code);
    shp.extend_from_slice(&content);
    let shp_path = dir.join(format!("{base}.shp"));
    fs::write(&shp_path, shp).unwrap();

    let shx = header_bytes(0, type_code);
    fs::write(dir.join(format!("{base}.shx")), shx).unwrap();

    shp_path
}
