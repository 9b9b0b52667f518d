//! Masks command implementation
//!
//! This module implements the `masks` command, which turns an exported
//! annotation document into one palettised PNG mask per asset.

use crate::cli::EXIT_SUCCESS;
use crate::core::masks::{AnnotationExport, MaskGenerator};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

/// Arguments for the masks command
#[derive(Args, Debug)]
pub struct MasksArgs {
    /// Exported annotation document (the export's file.json)
    #[arg(value_name = "ANNOTATION_FILE")]
    pub annotation_file: PathBuf,

    /// Directory to write the masks into, created if missing
    #[arg(value_name = "MASK_DIR")]
    pub mask_dir: PathBuf,
}

impl MasksArgs {
    /// Execute the masks command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(
            annotation_file = %self.annotation_file.display(),
            mask_dir = %self.mask_dir.display(),
            "Starting masks command"
        );

        let annotations = AnnotationExport::from_file(&self.annotation_file)?;
        let generator = MaskGenerator::new(annotations.palette()?, &self.mask_dir)?;

        let progress_bar = ProgressBar::new(annotations.assets.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} masks {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(style);

        for metadata in annotations.assets.values() {
            progress_bar.set_message(metadata.asset.name.clone());
            if let Err(e) = generator.generate(metadata) {
                progress_bar.abandon_with_message("failed");
                return Err(e.into());
            }
            progress_bar.inc(1);
        }
        progress_bar.finish_and_clear();

        println!(
            "✅ Generated {} mask(s) in {}",
            annotations.assets.len(),
            self.mask_dir.display()
        );
        Ok(EXIT_SUCCESS)
    }
}
