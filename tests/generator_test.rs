//! End-to-end variant generation tests
//!
//! Each test synthesizes a source image in a temp directory and runs
//! the full generate pipeline against it.

use std::fs;
use std::path::Path;

use image::{ImageFormat, RgbaImage};
use tempfile::TempDir;

use respimg::config::{GeneratorConfig, DEFAULT_MAX_WIDTH, SIZES};
use respimg::error::GeneratorError;
use respimg::generator::generate;

/// Write a PNG test image with the given dimensions
fn write_test_png(path: &Path, width: u32, height: u32) {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        if (x + y) % 2 == 0 {
            image::Rgba([255, 0, 0, 255])
        } else {
            image::Rgba([0, 0, 255, 255])
        }
    });

    image::DynamicImage::ImageRgba8(img)
        .save_with_format(path, ImageFormat::Png)
        .unwrap();
}

fn config_in(dir: &TempDir, file_name: &str) -> GeneratorConfig {
    GeneratorConfig::with_source(dir.path().join(file_name))
}

fn webp_files_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|n| n.ends_with(".webp"))
        .collect();
    names.sort();
    names
}

#[test]
fn test_generates_all_variants_for_large_source() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir, "profile.png");
    write_test_png(&config.source, 1024, 768);

    let generated = generate(&config).unwrap();
    assert_eq!(generated.len(), SIZES.len() + 1);

    // Labeled sizes at their fixed widths, in table order
    for (spec, variant) in SIZES.iter().zip(&generated) {
        assert_eq!(variant.label, spec.label);
        assert_eq!(variant.width, spec.width);

        let data = fs::read(&variant.path).unwrap();
        assert_eq!(image::guess_format(&data).unwrap(), ImageFormat::WebP);

        let img = image::load_from_memory(&data).unwrap();
        assert_eq!((img.width(), img.height()), (spec.width, spec.width));
    }

    // Default capped at 512 for a 1024-wide source
    let default = generated.last().unwrap();
    assert_eq!(default.label, "default");
    assert_eq!(default.width, DEFAULT_MAX_WIDTH);

    let img = image::open(&default.path).unwrap();
    assert_eq!((img.width(), img.height()), (512, 512));
}

#[test]
fn test_output_file_names_derive_from_source_stem() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir, "avatar.png");
    write_test_png(&config.source, 600, 600);

    generate(&config).unwrap();

    assert_eq!(
        webp_files_in(dir.path()),
        vec![
            "avatar-desktop.webp",
            "avatar-mobile.webp",
            "avatar-tablet.webp",
            "avatar.webp",
        ]
    );
}

#[test]
fn test_small_source_keeps_native_default_size() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir, "profile.png");
    write_test_png(&config.source, 256, 256);

    let generated = generate(&config).unwrap();

    // Labeled outputs stay at their fixed widths, including upscales
    let widths: Vec<u32> = generated.iter().map(|v| v.width).collect();
    assert_eq!(widths, vec![128, 224, 448, 256]);

    let default = generated.last().unwrap();
    let img = image::open(&default.path).unwrap();
    assert_eq!((img.width(), img.height()), (256, 256));
}

#[test]
fn test_rerun_reproduces_dimensions_and_format() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir, "profile.png");
    write_test_png(&config.source, 800, 600);

    let first = generate(&config).unwrap();
    let second = generate(&config).unwrap();

    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.label, b.label);
        assert_eq!(a.width, b.width);
        assert_eq!(a.path, b.path);

        let data = fs::read(&b.path).unwrap();
        assert_eq!(image::guess_format(&data).unwrap(), ImageFormat::WebP);
    }
}

#[test]
fn test_explicit_output_dir() {
    let source_dir = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();

    let config = GeneratorConfig {
        source: source_dir.path().join("profile.png"),
        output_dir: Some(out_dir.path().to_path_buf()),
    };
    write_test_png(&config.source, 400, 400);

    generate(&config).unwrap();

    assert_eq!(webp_files_in(source_dir.path()), Vec::<String>::new());
    assert_eq!(webp_files_in(out_dir.path()).len(), SIZES.len() + 1);
}

#[test]
fn test_missing_source_produces_no_output() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir, "profile.png");

    let err = generate(&config).unwrap_err();
    assert!(matches!(err, GeneratorError::MissingSource { .. }));
    assert!(webp_files_in(dir.path()).is_empty());
}

#[test]
fn test_corrupt_source_fails_before_writing() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir, "profile.png");
    fs::write(&config.source, b"not an image at all").unwrap();

    let err = generate(&config).unwrap_err();
    assert!(matches!(err, GeneratorError::Image(_)));
    assert!(webp_files_in(dir.path()).is_empty());
}

#[test]
fn test_overwrites_existing_variants() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir, "profile.png");
    write_test_png(&config.source, 512, 512);

    // Stale file at a variant path from some earlier run
    fs::write(dir.path().join("profile-mobile.webp"), b"stale").unwrap();

    let generated = generate(&config).unwrap();
    let mobile = &generated[0];
    assert_eq!(mobile.label, "mobile");

    let img = image::open(&mobile.path).unwrap();
    assert_eq!((img.width(), img.height()), (128, 128));
}
