//! Asset metadata models
//!
//! An [`AssetMetadata`] record is what the metadata loader returns for one
//! asset: the asset itself plus its annotated regions.

use crate::domain::project::Asset;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Shape of an annotated region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RegionType {
    Rectangle,
    Square,
    Polygon,
    Polyline,
    Point,
}

/// Point in asset pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Axis-aligned bounding box in asset pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Annotated region of an asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub id: String,

    #[serde(rename = "type")]
    pub region_type: RegionType,

    /// Names of the tags applied to this region
    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub points: Vec<Point>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
}

/// Full metadata record for one asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetMetadata {
    pub asset: Asset,

    #[serde(default)]
    pub regions: Vec<Region>,

    /// Version of the application that produced the record
    #[serde(default)]
    pub version: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AssetMetadata {
    /// Record for an asset that has never been annotated
    pub fn empty(asset: Asset, version: impl Into<String>) -> Self {
        Self {
            asset,
            regions: Vec::new(),
            version: version.into(),
            extra: Map::new(),
        }
    }
}
