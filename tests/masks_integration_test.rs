//! Mask generation from a freshly exported project
//!
//! The project is exported to a temporary directory and the masks are built
//! from the resulting `file.json`.

use asset_export::adapters::metadata::StorageMetadataLoader;
use asset_export::adapters::storage::{LocalFileSystemStorage, StorageProvider};
use asset_export::core::export::{
    AssetStateFilter, ExportProvider, ExportResources, TfPascalVocExportOptions,
    TfPascalVocJsonExportProvider,
};
use asset_export::core::masks::{generate_masks, BACKGROUND_INDEX};
use asset_export::domain::{ExportError, MaskError, Project};
use std::fs::{self, File};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

const PROJECT: &str = r##"{
    "id": "p-1",
    "name": "Harbor",
    "version": "2.2.0",
    "tags": [
        { "name": "boat", "color": "#0000ff" },
        { "name": "buoy", "color": "#ff8000" }
    ],
    "assets": {
        "a1": {
            "id": "a1", "type": 1, "state": 2, "name": "dock.jpg", "path": "file:dock.jpg",
            "size": { "width": 16, "height": 16 }
        }
    }
}"##;

const POLYGON_METADATA: &str = r##"{
    "asset": {
        "id": "a1", "type": 1, "state": 2, "name": "dock.jpg", "path": "file:dock.jpg",
        "size": { "width": 16, "height": 16 }
    },
    "regions": [{
        "id": "r1",
        "type": "POLYGON",
        "tags": ["buoy"],
        "points": [{ "x": 8, "y": 2 }, { "x": 14, "y": 8 }, { "x": 8, "y": 14 }, { "x": 2, "y": 8 }]
    }],
    "version": "2.2.0"
}"##;

const EXPORT_FILE: &str = "Harbor-TFPascalVoc-export/file.json";

async fn export(dir: &Path, metadata: &str) {
    fs::write(dir.join("project.vott"), PROJECT).unwrap();
    fs::write(dir.join("a1-asset.json"), metadata).unwrap();

    let project = Arc::new(Project::from_file(dir.join("project.vott")).await.unwrap());
    let storage: Arc<dyn StorageProvider + Send + Sync> =
        Arc::new(LocalFileSystemStorage::new(dir));
    let loader = Arc::new(StorageMetadataLoader::new(storage.clone(), "2.2.0"));
    TfPascalVocJsonExportProvider::new(
        ExportResources::new(project, storage, loader),
        Some(TfPascalVocExportOptions::new(AssetStateFilter::Tagged)),
    )
    .unwrap()
    .export()
    .await
    .unwrap();
}

#[tokio::test]
async fn test_masks_from_exported_project() {
    let dir = TempDir::new().unwrap();
    export(dir.path(), POLYGON_METADATA).await;
    let mask_dir = dir.path().join("masks");

    let written = generate_masks(dir.path().join(EXPORT_FILE), &mask_dir).unwrap();
    assert_eq!(written, 1);

    let mut decoder = png::Decoder::new(File::open(mask_dir.join("dock.png")).unwrap());
    decoder.set_transformations(png::Transformations::IDENTITY);
    let mut reader = decoder.read_info().unwrap();
    assert_eq!(
        reader.info().palette.as_deref(),
        Some(&[0, 0, 0, 0, 0, 255, 255, 128, 0][..])
    );
    let mut pixels = vec![0; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut pixels).unwrap();
    assert_eq!((frame.width, frame.height), (16, 16));

    // buoy is the second tag
    assert_eq!(pixels[8 * 16 + 8], 2);
    assert_eq!(pixels[0], BACKGROUND_INDEX);
    assert_eq!(pixels[15 * 16 + 15], BACKGROUND_INDEX);
}

#[tokio::test]
async fn test_degenerate_polygon_aborts_mask_generation() {
    let dir = TempDir::new().unwrap();
    let two_points = POLYGON_METADATA.replace(
        r#"[{ "x": 8, "y": 2 }, { "x": 14, "y": 8 }, { "x": 8, "y": 14 }, { "x": 2, "y": 8 }]"#,
        r#"[{ "x": 8, "y": 2 }, { "x": 14, "y": 8 }]"#,
    );
    export(dir.path(), &two_points).await;

    let result = generate_masks(dir.path().join(EXPORT_FILE), dir.path().join("masks"));

    assert!(matches!(
        result,
        Err(ExportError::Mask(MaskError::TooFewPoints { count: 2, .. }))
    ));
}
