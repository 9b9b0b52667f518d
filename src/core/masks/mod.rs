//! Segmentation masks from an exported annotation document
//!
//! Each exported asset becomes a palettised PNG in the mask directory. The
//! pixel values are label indexes: 0 for background and `i + 1` for the
//! project's `i`-th tag. The PNG palette carries the tag colors so the masks
//! are also viewable as images.
//!
//! Only polygon regions can be rasterized. Any other region type, or a
//! polygon with two or fewer points, aborts generation with a [`MaskError`].
//!
//! # Example
//!
//! ```rust,no_run
//! use asset_export::core::masks::generate_masks;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let written = generate_masks(
//!     "Bird-Survey-TFPascalVoc-export/file.json",
//!     "Bird-Survey-TFPascalVoc-export/masks",
//! )?;
//! println!("Wrote {written} masks");
//! # Ok(())
//! # }
//! ```

pub mod palette;
pub mod render;

pub use palette::{MaskPalette, BACKGROUND_INDEX};
pub use render::render_mask;

use crate::domain::{AssetMetadata, ExportError, MaskError, Result, Tag};
use image::GrayImage;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// The parts of an exported `file.json` that masks are built from
#[derive(Debug, Clone, Deserialize)]
pub struct AnnotationExport {
    #[serde(default)]
    pub tags: Option<Vec<Tag>>,

    #[serde(default)]
    pub assets: BTreeMap<String, AssetMetadata>,
}

impl AnnotationExport {
    /// Parses an exported document
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads an exported document from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            ExportError::Io(format!(
                "Failed to read annotation file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json_str(&contents)
    }

    /// Palette for the document's tags
    pub fn palette(&self) -> Result<MaskPalette> {
        MaskPalette::from_tags(self.tags.as_deref().unwrap_or_default())
    }
}

/// Writes one mask per asset into a directory
#[derive(Debug)]
pub struct MaskGenerator {
    palette: MaskPalette,
    mask_dir: PathBuf,
}

impl MaskGenerator {
    /// Creates `mask_dir` if needed
    pub fn new(palette: MaskPalette, mask_dir: impl Into<PathBuf>) -> Result<Self> {
        let mask_dir = mask_dir.into();
        fs::create_dir_all(&mask_dir).map_err(|e| MaskError::WriteFailed {
            path: mask_dir.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { palette, mask_dir })
    }

    /// Renders and writes the mask of one asset, returning its path
    pub fn generate(&self, metadata: &AssetMetadata) -> Result<PathBuf> {
        let mask = render_mask(metadata, &self.palette)?;
        let path = self.mask_dir.join(mask_file_name(&metadata.asset.name)?);
        write_indexed_png(&path, &mask, &self.palette)?;

        tracing::debug!(
            asset = %metadata.asset.name,
            regions = metadata.regions.len(),
            path = %path.display(),
            "Wrote mask"
        );
        Ok(path)
    }
}

/// Mask file name for an asset: its base name with a `.png` extension
///
/// Directory components of the asset name are dropped so every mask lands
/// directly in the mask directory.
pub fn mask_file_name(asset_name: &str) -> Result<PathBuf> {
    let base = Path::new(asset_name)
        .file_name()
        .ok_or_else(|| MaskError::WriteFailed {
            path: asset_name.to_string(),
            message: "asset name has no file name".to_string(),
        })?;
    Ok(Path::new(base).with_extension("png"))
}

/// Writes `mask` as an 8-bit indexed PNG with the palette's colors
pub fn write_indexed_png(path: &Path, mask: &GrayImage, palette: &MaskPalette) -> Result<()> {
    let write_failed = |message: String| MaskError::WriteFailed {
        path: path.display().to_string(),
        message,
    };

    let file = File::create(path).map_err(|e| write_failed(e.to_string()))?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), mask.width(), mask.height());
    encoder.set_color(png::ColorType::Indexed);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_palette(palette.to_plte());

    let mut writer = encoder
        .write_header()
        .map_err(|e| write_failed(e.to_string()))?;
    writer
        .write_image_data(mask.as_raw())
        .map_err(|e| write_failed(e.to_string()))?;
    writer.finish().map_err(|e| write_failed(e.to_string()))?;
    Ok(())
}

/// Generates a mask for every asset in an exported annotation file
///
/// Returns the number of masks written. The first failing asset aborts the
/// run; masks already written stay on disk.
pub fn generate_masks(
    annotation_file: impl AsRef<Path>,
    mask_dir: impl AsRef<Path>,
) -> Result<usize> {
    let annotations = AnnotationExport::from_file(annotation_file.as_ref())?;
    let generator = MaskGenerator::new(annotations.palette()?, mask_dir.as_ref())?;

    tracing::info!(
        assets = annotations.assets.len(),
        mask_dir = %mask_dir.as_ref().display(),
        "Generating masks"
    );

    for metadata in annotations.assets.values() {
        generator.generate(metadata)?;
    }

    tracing::info!(masks = annotations.assets.len(), "Mask generation complete");
    Ok(annotations.assets.len())
}
