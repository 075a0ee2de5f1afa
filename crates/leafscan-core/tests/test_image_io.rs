use image::{Rgb, RgbImage};
use ndarray::Array2;

use leafscan_core::io::image_io::{fit_dimensions, load_rgb, mask_to_image, save_mask};

#[test]
fn test_fit_dimensions() {
    assert_eq!(fit_dimensions(1024, 768, 512), (512, 384));
    assert_eq!(fit_dimensions(100, 50, 512), (512, 256));
    assert_eq!(fit_dimensions(512, 512, 512), (512, 512));
    assert_eq!(fit_dimensions(1, 1000, 512), (1, 512));
}

#[test]
fn test_mask_to_image() {
    let mut mask = Array2::from_elem((2, 3), false);
    mask[[1, 2]] = true;
    let img = mask_to_image(&mask);
    assert_eq!(img.dimensions(), (3, 2));
    assert_eq!(img.get_pixel(2, 1).0, [255]);
    assert_eq!(img.get_pixel(0, 0).0, [0]);
}

#[test]
fn test_save_mask_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mask.png");

    let mut mask = Array2::from_elem((4, 5), false);
    mask[[0, 0]] = true;
    mask[[3, 4]] = true;
    save_mask(&mask, &path).unwrap();

    let loaded = image::open(&path).unwrap().to_luma8();
    assert_eq!(loaded.dimensions(), (5, 4));
    assert_eq!(loaded.get_pixel(0, 0).0, [255]);
    assert_eq!(loaded.get_pixel(4, 3).0, [255]);
    assert_eq!(loaded.get_pixel(1, 1).0, [0]);
}

#[test]
fn test_load_rgb_with_and_without_rescale() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.png");
    RgbImage::from_pixel(64, 32, Rgb([10, 200, 10]))
        .save(&path)
        .unwrap();

    let original = load_rgb(&path, None).unwrap();
    assert_eq!(original.dimensions(), (64, 32));

    let scaled = load_rgb(&path, Some(16)).unwrap();
    assert_eq!(scaled.dimensions(), (16, 8));
}

#[test]
fn test_load_rgb_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_rgb(&dir.path().join("missing.png"), None).is_err());
}
