//! Rasterizing annotated regions into a label mask

use crate::core::masks::palette::{MaskPalette, BACKGROUND_INDEX};
use crate::domain::{AssetMetadata, MaskError, Region, RegionType, Result};
use image::{GrayImage, Luma};
use imageproc::drawing::draw_polygon_mut;
use imageproc::point::Point;

/// Render the label mask of one asset
///
/// The mask has the asset's pixel size (fractional sizes are truncated).
/// Every pixel is the palette index of the region covering it, or
/// [`BACKGROUND_INDEX`]. Later regions paint over earlier ones.
///
/// # Errors
///
/// Returns a `MaskError` if the asset has no size, or if a region is not a
/// polygon, has fewer than three points, or is labeled with a missing or
/// unknown tag.
pub fn render_mask(metadata: &AssetMetadata, palette: &MaskPalette) -> Result<GrayImage> {
    let asset = &metadata.asset;
    let size = asset.size.ok_or_else(|| MaskError::MissingSize {
        asset: asset.name.clone(),
    })?;

    let mut mask = GrayImage::from_pixel(
        size.width as u32,
        size.height as u32,
        Luma([BACKGROUND_INDEX]),
    );

    for region in &metadata.regions {
        let label = region_label(&asset.name, region, palette)?;
        let polygon = region_polygon(&asset.name, region)?;
        draw_polygon_mut(&mut mask, &polygon, Luma([label]));
    }

    Ok(mask)
}

fn region_label(asset: &str, region: &Region, palette: &MaskPalette) -> Result<u8> {
    let tag = region.tags.first().ok_or_else(|| MaskError::MissingTag {
        asset: asset.to_string(),
        region_id: region.id.clone(),
    })?;

    let label = palette.label(tag).ok_or_else(|| MaskError::UnknownTag {
        asset: asset.to_string(),
        tag: tag.clone(),
    })?;
    Ok(label)
}

/// Vertices of a polygon region in pixel coordinates
///
/// A trailing vertex that repeats the first one is dropped; the polygon is
/// closed implicitly.
fn region_polygon(asset: &str, region: &Region) -> Result<Vec<Point<i32>>> {
    if region.region_type != RegionType::Polygon {
        return Err(MaskError::UnsupportedRegionType {
            asset: asset.to_string(),
            region_id: region.id.clone(),
            region_type: region.region_type,
        }
        .into());
    }

    let mut vertices: Vec<Point<i32>> = region
        .points
        .iter()
        .map(|p| Point::new(p.x.round() as i32, p.y.round() as i32))
        .collect();
    while vertices.len() > 1 && vertices.first() == vertices.last() {
        vertices.pop();
    }

    if vertices.len() <= 2 {
        return Err(MaskError::TooFewPoints {
            asset: asset.to_string(),
            region_id: region.id.clone(),
            count: vertices.len(),
        }
        .into());
    }
    Ok(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        Asset, AssetId, AssetState, ExportError, Point as RegionPoint, Size, Tag,
    };

    fn palette() -> MaskPalette {
        MaskPalette::from_tags(&[
            Tag {
                name: "mailbox".to_string(),
                color: "#ff0000".to_string(),
            },
            Tag {
                name: "pencil".to_string(),
                color: "#00ff00".to_string(),
            },
        ])
        .unwrap()
    }

    fn region(region_type: RegionType, tag: &str, points: &[(f64, f64)]) -> Region {
        Region {
            id: "r1".to_string(),
            region_type,
            tags: vec![tag.to_string()],
            points: points
                .iter()
                .map(|&(x, y)| RegionPoint { x, y })
                .collect(),
            bounding_box: None,
        }
    }

    fn metadata(regions: Vec<Region>) -> AssetMetadata {
        let mut asset = Asset::new(AssetId::new("a1").unwrap(), "a1.jpg", AssetState::Tagged);
        asset.size = Some(Size {
            width: 20.0,
            height: 10.0,
        });
        let mut metadata = AssetMetadata::empty(asset, "2.2.0");
        metadata.regions = regions;
        metadata
    }

    const SQUARE: &[(f64, f64)] = &[(2.0, 2.0), (8.0, 2.0), (8.0, 8.0), (2.0, 8.0)];

    #[test]
    fn test_empty_asset_is_background() {
        let mask = render_mask(&metadata(Vec::new()), &palette()).unwrap();

        assert_eq!(mask.dimensions(), (20, 10));
        assert!(mask.pixels().all(|p| p.0[0] == BACKGROUND_INDEX));
    }

    #[test]
    fn test_polygon_filled_with_tag_label() {
        let mask = render_mask(
            &metadata(vec![region(RegionType::Polygon, "pencil", SQUARE)]),
            &palette(),
        )
        .unwrap();

        assert_eq!(mask.get_pixel(5, 5).0[0], 2);
        assert_eq!(mask.get_pixel(2, 2).0[0], 2);
        assert_eq!(mask.get_pixel(15, 5).0[0], BACKGROUND_INDEX);
        assert_eq!(mask.get_pixel(0, 0).0[0], BACKGROUND_INDEX);
    }

    #[test]
    fn test_later_region_paints_over_earlier() {
        let mask = render_mask(
            &metadata(vec![
                region(RegionType::Polygon, "mailbox", SQUARE),
                region(RegionType::Polygon, "pencil", &[(4.0, 4.0), (7.0, 4.0), (7.0, 7.0)]),
            ]),
            &palette(),
        )
        .unwrap();

        assert_eq!(mask.get_pixel(3, 7).0[0], 1);
        assert_eq!(mask.get_pixel(6, 5).0[0], 2);
    }

    #[test]
    fn test_closing_vertex_ignored() {
        let closed = &[(2.0, 2.0), (8.0, 2.0), (8.0, 8.0), (2.0, 2.0)];
        let mask = render_mask(
            &metadata(vec![region(RegionType::Polygon, "mailbox", closed)]),
            &palette(),
        )
        .unwrap();
        assert_eq!(mask.get_pixel(7, 3).0[0], 1);
    }

    #[test]
    fn test_fractional_size_truncated() {
        let mut metadata = metadata(Vec::new());
        metadata.asset.size = Some(Size {
            width: 20.9,
            height: 10.2,
        });
        let mask = render_mask(&metadata, &palette()).unwrap();
        assert_eq!(mask.dimensions(), (20, 10));
    }

    #[test]
    fn test_rectangle_rejected() {
        let result = render_mask(
            &metadata(vec![region(RegionType::Rectangle, "pencil", SQUARE)]),
            &palette(),
        );
        assert!(matches!(
            result,
            Err(ExportError::Mask(MaskError::UnsupportedRegionType {
                region_type: RegionType::Rectangle,
                ..
            }))
        ));
    }

    #[test]
    fn test_two_point_polygon_rejected() {
        let result = render_mask(
            &metadata(vec![region(
                RegionType::Polygon,
                "pencil",
                &[(1.0, 1.0), (5.0, 5.0)],
            )]),
            &palette(),
        );
        assert!(matches!(
            result,
            Err(ExportError::Mask(MaskError::TooFewPoints { count: 2, .. }))
        ));
    }

    #[test]
    fn test_unknown_tag_rejected() {
        let result = render_mask(
            &metadata(vec![region(RegionType::Polygon, "stapler", SQUARE)]),
            &palette(),
        );
        assert!(matches!(
            result,
            Err(ExportError::Mask(MaskError::UnknownTag { .. }))
        ));
    }

    #[test]
    fn test_untagged_region_rejected() {
        let mut untagged = region(RegionType::Polygon, "pencil", SQUARE);
        untagged.tags.clear();
        let result = render_mask(&metadata(vec![untagged]), &palette());
        assert!(matches!(
            result,
            Err(ExportError::Mask(MaskError::MissingTag { .. }))
        ));
    }

    #[test]
    fn test_missing_size_rejected() {
        let mut metadata = metadata(Vec::new());
        metadata.asset.size = None;
        let result = render_mask(&metadata, &palette());
        assert!(matches!(
            result,
            Err(ExportError::Mask(MaskError::MissingSize { .. }))
        ));
    }
}
