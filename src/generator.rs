//! Variant generation run
//!
//! One linear pass: precondition check, source metadata report, a
//! resize + encode + write per table entry, the capped default variant,
//! then a summary of everything written. The first failure aborts the
//! remaining sequence; writes are not transactional, so earlier files
//! stay on disk.

use std::fs;
use std::path::PathBuf;

use image::DynamicImage;

use crate::config::{GeneratorConfig, DEFAULT_MAX_WIDTH, SIZES};
use crate::error::GeneratorError;
use crate::variants::{cover_resize, decode_image, detect_format, EncoderQuality, WebPEncoder};

/// One written derivative
#[derive(Debug, Clone)]
pub struct GeneratedVariant {
    /// Size label, or "default" for the unlabeled variant
    pub label: String,
    /// Path the file was written to
    pub path: PathBuf,
    /// Pixel width and height (outputs are square)
    pub width: u32,
    /// Encoded size on disk
    pub bytes: u64,
}

/// Generate every variant for the configured source
///
/// Writes `SIZES.len() + 1` files into the output directory, printing
/// one progress line per file and a final summary. Returns the written
/// variants in generation order, default last.
pub fn generate(config: &GeneratorConfig) -> Result<Vec<GeneratedVariant>, GeneratorError> {
    if !config.source.exists() {
        return Err(GeneratorError::MissingSource {
            path: config.source.clone(),
        });
    }

    println!("Optimizing {} ...\n", config.source.display());

    // 1. Source metadata and on-disk size
    let data = fs::read(&config.source)?;
    let img = decode_image(&data)?;
    let format = detect_format(&data);

    println!("Original: {}x{} ({})", img.width(), img.height(), format);
    println!("Size: {:.2} KB\n", data.len() as f64 / 1024.0);

    tracing::debug!(
        width = img.width(),
        height = img.height(),
        format,
        bytes = data.len(),
        "decoded source image"
    );

    // 2. Fixed sizes, in table order
    let mut generated = Vec::with_capacity(SIZES.len() + 1);
    for spec in SIZES {
        let path = config.labeled_path(spec.label);
        generated.push(write_variant(&img, spec.label, spec.width, path)?);
    }

    // 3. Default variant, capped at DEFAULT_MAX_WIDTH
    let width = default_width(img.width());
    generated.push(write_variant(&img, "default", width, config.default_path())?);

    print_summary(&generated);

    Ok(generated)
}

/// Width of the unlabeled default variant
fn default_width(source_width: u32) -> u32 {
    source_width.min(DEFAULT_MAX_WIDTH)
}

/// Resize, encode, and write one variant, then stat and report it
fn write_variant(
    img: &DynamicImage,
    label: &str,
    width: u32,
    path: PathBuf,
) -> Result<GeneratedVariant, GeneratorError> {
    let resized = cover_resize(img, width, width)?;
    let encoded = WebPEncoder::encode(&resized, EncoderQuality::default())?;
    fs::write(&path, &encoded)?;

    let bytes = fs::metadata(&path)?.len();
    println!("{}: {}x{} → {:.2} KB", label, width, width, bytes as f64 / 1024.0);

    tracing::debug!(label, width, path = %path.display(), bytes, "variant written");

    Ok(GeneratedVariant {
        label: label.to_string(),
        path,
        width,
        bytes,
    })
}

/// Final summary: every generated file name with its nominal size label,
/// the unlabeled default listed first
fn print_summary(generated: &[GeneratedVariant]) {
    println!("\nImage optimization complete!\n");
    println!("Generated files:");

    for variant in generated.iter().filter(|v| v.label == "default") {
        print_summary_line(variant);
    }
    for variant in generated.iter().filter(|v| v.label != "default") {
        print_summary_line(variant);
    }
}

fn print_summary_line(variant: &GeneratedVariant) {
    let file_name = variant
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if variant.label == "default" {
        println!("  - {} (default)", file_name);
    } else {
        println!("  - {} ({}px)", file_name, variant.width);
    }
}
