//! Decoding IDX files from disk.

mod common;

use ferrite_mnist::{read_idx_pair, DecodeError};

#[test]
fn two_item_pair_decodes_labels_and_grids() {
    let dir = tempfile::tempdir().unwrap();
    let images = dir.path().join("images");
    let labels = dir.path().join("labels");
    std::fs::write(&images, common::image_bytes(2, 2, &[vec![0, 64, 128, 255], vec![1, 2, 3, 4]])).unwrap();
    std::fs::write(&labels, common::label_bytes(&[8, 0])).unwrap();

    let decoded = read_idx_pair(&images, &labels).unwrap();

    assert_eq!(decoded.len(), 2);
    assert_eq!((decoded[0].rows, decoded[0].cols), (2, 2));
    assert_eq!(decoded[0].label, 8);
    assert_eq!(decoded[0].pixel(0, 1), 64);
    assert_eq!(decoded[0].pixel(1, 1), 255);
    assert_eq!(decoded[1].label, 0);
    assert_eq!(decoded[1].pixels(), &[1, 2, 3, 4]);
}

#[test]
fn files_are_left_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let images = dir.path().join("images");
    let labels = dir.path().join("labels");
    let image_bytes = common::image_bytes(2, 2, &[vec![9, 9, 9, 9]]);
    std::fs::write(&images, &image_bytes).unwrap();
    std::fs::write(&labels, common::label_bytes(&[5])).unwrap();

    read_idx_pair(&images, &labels).unwrap();

    assert_eq!(std::fs::read(&images).unwrap(), image_bytes);
}

#[test]
fn item_count_disagreement_is_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let images = dir.path().join("images");
    let labels = dir.path().join("labels");
    std::fs::write(&images, common::image_bytes(2, 2, &[vec![0; 4], vec![0; 4]])).unwrap();
    std::fs::write(&labels, common::label_bytes(&[1, 2, 3])).unwrap();

    let err = read_idx_pair(&images, &labels).unwrap_err();

    assert!(matches!(err, DecodeError::CountMismatch { images: 2, labels: 3 }));
    assert!(err.is_format_error());
}

#[test]
fn image_truncated_mid_item_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let images = dir.path().join("images");
    let labels = dir.path().join("labels");
    let mut bytes = common::image_bytes(2, 2, &[vec![0; 4], vec![0; 4]]);
    bytes.truncate(bytes.len() - 2);
    std::fs::write(&images, bytes).unwrap();
    std::fs::write(&labels, common::label_bytes(&[1, 2])).unwrap();

    let err = read_idx_pair(&images, &labels).unwrap_err();

    assert!(matches!(err, DecodeError::Truncated { file: "image", .. }));
    assert!(!err.is_format_error());
}
