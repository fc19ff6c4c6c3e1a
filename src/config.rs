// Configuration module

use std::path::{Path, PathBuf};

/// One named target size
///
/// Outputs are square, so `width` applies to both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantSpec {
    pub label: &'static str,
    pub width: u32,
}

/// Fixed responsive size table, in processing and reporting order.
///
/// Each entry is independent; adding or removing one requires no change
/// to the processing logic.
pub const SIZES: &[VariantSpec] = &[
    VariantSpec {
        label: "mobile",
        width: 128,
    },
    VariantSpec {
        label: "tablet",
        width: 224,
    },
    VariantSpec {
        label: "desktop",
        width: 448,
    },
];

/// Quality for lossy WebP encoding (1-100)
pub const WEBP_QUALITY: u8 = 85;

/// Upper bound on the unlabeled default variant's width
pub const DEFAULT_MAX_WIDTH: u32 = 512;

/// Conventional source image location
pub const DEFAULT_SOURCE: &str = "public/profile.png";

/// Resolved invocation parameters for one generator run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Source image path
    pub source: PathBuf,
    /// Output directory; `None` means the source's parent directory
    pub output_dir: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            output_dir: None,
        }
    }
}

impl GeneratorConfig {
    /// Create a config for the given source with the default output directory
    pub fn with_source(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output_dir: None,
        }
    }

    /// Directory derivatives are written into
    pub fn resolved_output_dir(&self) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.clone(),
            None => self
                .source
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(".")),
        }
    }

    /// Base name shared by all derivatives (the source file stem)
    pub fn base_name(&self) -> String {
        self.source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string())
    }

    /// Output path for a labeled variant: `<stem>-<label>.webp`
    pub fn labeled_path(&self, label: &str) -> PathBuf {
        self.resolved_output_dir()
            .join(format!("{}-{}.webp", self.base_name(), label))
    }

    /// Output path for the unlabeled default variant: `<stem>.webp`
    pub fn default_path(&self) -> PathBuf {
        self.resolved_output_dir()
            .join(format!("{}.webp", self.base_name()))
    }
}
