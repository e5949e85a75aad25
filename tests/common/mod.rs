//! IDX fixture writers shared by the integration tests.

#![allow(dead_code)]

use std::path::Path;

use ferrite_mnist::DataPaths;

pub fn image_bytes(rows: u32, cols: u32, images: &[Vec<u8>]) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&0x0000_0803u32.to_be_bytes());
    bytes.extend_from_slice(&(images.len() as u32).to_be_bytes());
    bytes.extend_from_slice(&rows.to_be_bytes());
    bytes.extend_from_slice(&cols.to_be_bytes());
    for image in images {
        bytes.extend_from_slice(image);
    }
    bytes
}

pub fn label_bytes(labels: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&0x0000_0801u32.to_be_bytes());
    bytes.extend_from_slice(&(labels.len() as u32).to_be_bytes());
    bytes.extend_from_slice(labels);
    bytes
}

/// Writes a 2×2 train split and test split under `dir` with the standard
/// MNIST file names.
pub fn write_dataset(
    dir: &Path,
    train: &[(u8, Vec<u8>)],
    test: &[(u8, Vec<u8>)],
) -> DataPaths {
    let paths = DataPaths::in_dir(dir);
    write_split(&paths.train_images, &paths.train_labels, train);
    write_split(&paths.test_images, &paths.test_labels, test);
    paths
}

fn write_split(images: &Path, labels: &Path, items: &[(u8, Vec<u8>)]) {
    let pixels: Vec<Vec<u8>> = items.iter().map(|(_, p)| p.clone()).collect();
    let label_values: Vec<u8> = items.iter().map(|(l, _)| *l).collect();
    std::fs::write(images, image_bytes(2, 2, &pixels)).unwrap();
    std::fs::write(labels, label_bytes(&label_values)).unwrap();
}
