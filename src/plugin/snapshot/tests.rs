use std::collections::HashSet;
use std::path::Path;

use chrono::{Local, TimeZone};
use ndarray::{ArrayD, IxDyn};
use tempfile::TempDir;

use crate::plugin::raster::types::{PixelBuffer, Properties, PropertyValue};
use crate::plugin::snapshot::types::{snapshot_stem, SnapshotConfig, SnapshotPaths};
use crate::plugin::snapshot::writer::SnapshotWriter;
use crate::plugin::snapshot::{read_record, BincodeSnapshotWriter};

#[test]
fn test_stem_carries_timestamp_fields() {
    let now = Local.with_ymd_and_hms(2026, 8, 27, 13, 5, 9).unwrap();
    let stem = snapshot_stem(now);

    assert!(stem.starts_with("singleDataset_2026_Aug_27_13_05_09_"));
}

#[test]
fn test_stems_are_distinct_within_one_second() {
    let now = Local.with_ymd_and_hms(2026, 8, 27, 13, 5, 9).unwrap();
    let stems: HashSet<_> = (0..100).map(|_| snapshot_stem(now)).collect();
    assert_eq!(stems.len(), 100);
}

#[test]
fn test_paths_share_stem_and_differ_in_suffix() {
    let paths = SnapshotPaths::for_stem(Path::new("/tmp/debug"), "singleDataset_x_");

    assert_eq!(
        paths.properties,
        Path::new("/tmp/debug/singleDataset_x_props.p")
    );
    assert_eq!(
        paths.pixels,
        Path::new("/tmp/debug/singleDataset_x_pix_blocks.p")
    );
    assert_eq!(paths.mask, Path::new("/tmp/debug/singleDataset_x_mask.p"));
}

#[test]
fn test_written_records_decode_back() {
    let dir = TempDir::new().unwrap();
    let writer = BincodeSnapshotWriter::new(SnapshotConfig::new(dir.path()));

    let mut properties = Properties::new();
    properties.insert(
        "pixelType".to_string(),
        PropertyValue::Text("u1".to_string()),
    );
    let pixels = PixelBuffer::U16(ArrayD::from_elem(IxDyn(&[2, 3, 3]), 7u16));
    let mask = PixelBuffer::U8(ArrayD::ones(IxDyn(&[2, 3, 3])));

    let paths = writer.write_snapshot(&properties, &pixels, &mask).unwrap();

    assert!(paths.properties.exists());
    assert!(paths.pixels.exists());
    assert!(paths.mask.exists());

    let decoded_props: Properties = read_record(&paths.properties).unwrap();
    let decoded_pixels: PixelBuffer = read_record(&paths.pixels).unwrap();
    let decoded_mask: PixelBuffer = read_record(&paths.mask).unwrap();

    assert_eq!(decoded_props, properties);
    assert_eq!(decoded_pixels, pixels);
    assert_eq!(decoded_mask, mask);
}

#[test]
fn test_write_to_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");
    let writer = BincodeSnapshotWriter::new(SnapshotConfig::new(&missing));

    let pixels = PixelBuffer::F32(ArrayD::ones(IxDyn(&[1, 2, 2])));
    let mask = PixelBuffer::U8(ArrayD::ones(IxDyn(&[1, 2, 2])));
    let result = writer.write_snapshot(&Properties::new(), &pixels, &mask);

    assert!(result.is_err());
}
