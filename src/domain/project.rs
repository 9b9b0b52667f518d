//! Project and asset models
//!
//! A project is the unit of export: a name plus a mapping from asset id to
//! asset. Fields the exporter does not interpret are kept in `extra` so that
//! they round-trip into the export document unchanged.

use crate::domain::errors::ExportError;
use crate::domain::ids::AssetId;
use crate::domain::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;

/// Lifecycle state of an asset
///
/// Serialized as the integers used by the tagging application
/// (`0` not visited, `1` visited, `2` tagged).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum AssetState {
    /// Never opened in the editor
    #[default]
    NotVisited,
    /// Opened but carries no tagged region
    Visited,
    /// Has at least one tagged region
    Tagged,
}

impl From<AssetState> for u8 {
    fn from(state: AssetState) -> Self {
        match state {
            AssetState::NotVisited => 0,
            AssetState::Visited => 1,
            AssetState::Tagged => 2,
        }
    }
}

impl TryFrom<u8> for AssetState {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(AssetState::NotVisited),
            1 => Ok(AssetState::Visited),
            2 => Ok(AssetState::Tagged),
            other => Err(format!("Invalid asset state: {other}")),
        }
    }
}

/// Kind of media an asset points to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum AssetType {
    #[default]
    Unknown,
    Image,
    Video,
    VideoFrame,
    TfRecord,
}

impl From<AssetType> for u8 {
    fn from(asset_type: AssetType) -> Self {
        match asset_type {
            AssetType::Unknown => 0,
            AssetType::Image => 1,
            AssetType::Video => 2,
            AssetType::VideoFrame => 3,
            AssetType::TfRecord => 4,
        }
    }
}

impl TryFrom<u8> for AssetType {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(AssetType::Unknown),
            1 => Ok(AssetType::Image),
            2 => Ok(AssetType::Video),
            3 => Ok(AssetType::VideoFrame),
            4 => Ok(AssetType::TfRecord),
            other => Err(format!("Invalid asset type: {other}")),
        }
    }
}

/// Pixel dimensions of an asset
///
/// Kept as floating point: the tagging application stores the size its media
/// loader reports, which is not always integral.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// A single asset tracked by a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: AssetId,

    #[serde(rename = "type", default)]
    pub asset_type: AssetType,

    #[serde(default)]
    pub state: AssetState,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Frame offset in seconds, for video frames
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,

    /// Owning video, for video frames
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Box<Asset>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Asset {
    /// Creates an image asset with the given id, name and state
    pub fn new(id: AssetId, name: impl Into<String>, state: AssetState) -> Self {
        let name = name.into();
        Self {
            id,
            asset_type: AssetType::Image,
            state,
            path: name.clone(),
            name,
            size: None,
            format: None,
            timestamp: None,
            parent: None,
            extra: Map::new(),
        }
    }
}

/// Tag definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub color: String,
}

/// Tagging project
///
/// Read-only for the duration of an export. Only `name` and `assets` are
/// typed; every other field stays in `extra` exactly as read (including
/// explicit `null`s) and is exposed through accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,

    #[serde(default)]
    pub assets: BTreeMap<AssetId, Asset>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Project {
    /// Creates an empty project
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            assets: BTreeMap::new(),
            extra: Map::new(),
        }
    }

    /// Sets an untyped project field
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.str_field("id")
    }

    pub fn version(&self) -> Option<&str> {
        self.str_field("version")
    }

    pub fn description(&self) -> Option<&str> {
        self.str_field("description")
    }

    /// Tag definitions, in project order
    ///
    /// A missing or `null` `tags` field yields no tags.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Serialization` if `tags` is not a list of
    /// `{name, color}` objects.
    pub fn tags(&self) -> Result<Vec<Tag>> {
        match self.extra.get("tags") {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(tags) => Ok(Vec::<Tag>::deserialize(tags)?),
        }
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str)
    }

    /// Adds an asset keyed by its id, replacing any asset with the same id
    pub fn with_asset(mut self, asset: Asset) -> Self {
        self.assets.insert(asset.id.clone(), asset);
        self
    }

    /// Parses a project from its JSON representation
    pub fn from_json_str(json: &str) -> Result<Self> {
        let project: Project = serde_json::from_str(json)?;
        if project.name.trim().is_empty() {
            return Err(ExportError::InvalidArgument(
                "Project name cannot be empty".to_string(),
            ));
        }
        Ok(project)
    }

    /// Reads a project file
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Io` if the file cannot be read and
    /// `ExportError::Serialization` if it is not a valid project.
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
            ExportError::Io(format!(
                "Failed to read project file {}: {}",
                path.display(),
                e
            ))
        })?;

        let project = Self::from_json_str(&contents)?;
        tracing::debug!(
            project = %project.name,
            assets = project.assets.len(),
            path = %path.display(),
            "Loaded project"
        );
        Ok(project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> AssetId {
        AssetId::new(s).unwrap()
    }

    #[test]
    fn test_asset_state_wire_values() {
        assert_eq!(serde_json::to_string(&AssetState::NotVisited).unwrap(), "0");
        assert_eq!(serde_json::to_string(&AssetState::Visited).unwrap(), "1");
        assert_eq!(serde_json::to_string(&AssetState::Tagged).unwrap(), "2");
        assert_eq!(
            serde_json::from_str::<AssetState>("2").unwrap(),
            AssetState::Tagged
        );
        assert!(serde_json::from_str::<AssetState>("7").is_err());
    }

    #[test]
    fn test_asset_type_wire_values() {
        assert_eq!(u8::from(AssetType::TfRecord), 4);
        assert_eq!(AssetType::try_from(3).unwrap(), AssetType::VideoFrame);
        assert!(AssetType::try_from(9).is_err());
    }

    #[test]
    fn test_project_parse_keeps_unknown_fields() {
        let json = r##"{
            "id": "p1",
            "name": "My Project",
            "version": "2.1.0",
            "tags": [{"name": "cat", "color": "#ff0000"}],
            "sourceConnection": {"name": "src", "providerType": "localFileSystemProxy"},
            "autoSave": true,
            "assets": {
                "a1": {"id": "a1", "type": 1, "state": 2, "name": "a.jpg", "path": "file:a.jpg",
                       "size": {"width": 640, "height": 480}, "format": "jpg"}
            }
        }"##;

        let project = Project::from_json_str(json).unwrap();
        assert_eq!(project.name, "My Project");
        assert_eq!(project.id(), Some("p1"));
        assert_eq!(project.version(), Some("2.1.0"));
        assert_eq!(project.tags().unwrap()[0].name, "cat");
        assert_eq!(project.extra["autoSave"], Value::Bool(true));
        assert_eq!(project.extra["sourceConnection"]["name"], "src");

        let asset = &project.assets[&id("a1")];
        assert_eq!(asset.state, AssetState::Tagged);
        assert_eq!(asset.asset_type, AssetType::Image);
        assert_eq!(asset.size, Some(Size { width: 640.0, height: 480.0 }));
    }

    #[test]
    fn test_project_serialization_is_lossless() {
        let json = r#"{"name":"P","lastVisitedAssetId":"a1","videoSettings":{"frameExtractionRate":15}}"#;
        let project = Project::from_json_str(json).unwrap();
        let value = serde_json::to_value(&project).unwrap();
        assert_eq!(value["lastVisitedAssetId"], "a1");
        assert_eq!(value["videoSettings"]["frameExtractionRate"], 15);
        assert!(value.get("id").is_none());
        assert!(value.get("tags").is_none());
    }

    #[test]
    fn test_project_explicit_nulls_round_trip() {
        let json = r#"{"name":"P","description":null,"version":null,"tags":null,"lastVisitedAssetId":null,"assets":{}}"#;
        let project = Project::from_json_str(json).unwrap();

        let value = serde_json::to_value(&project).unwrap();
        let input: Value = serde_json::from_str(json).unwrap();
        assert_eq!(value, input);
        assert_eq!(project.description(), None);
        assert!(project.tags().unwrap().is_empty());
    }

    #[test]
    fn test_project_blank_asset_id_rejected() {
        let result = Project::from_json_str(r#"{"name":"P","assets":{"":{"id":""}}}"#);
        assert!(matches!(result, Err(ExportError::Serialization(_))));
    }

    #[test]
    fn test_fractional_size_accepted() {
        let json = r#"{"name":"P","assets":{"a":{"id":"a","size":{"width":640.5,"height":480}}}}"#;
        let project = Project::from_json_str(json).unwrap();
        assert_eq!(
            project.assets[&id("a")].size,
            Some(Size { width: 640.5, height: 480.0 })
        );
    }

    #[test]
    fn test_malformed_tags_rejected() {
        let project = Project::new("P").with_field("tags", Value::from("cat"));
        assert!(project.tags().is_err());
    }

    #[test]
    fn test_project_blank_name_rejected() {
        let result = Project::from_json_str(r#"{"name": "  "}"#);
        assert!(matches!(result, Err(ExportError::InvalidArgument(_))));
    }

    #[test]
    fn test_with_asset_replaces_same_id() {
        let project = Project::new("P")
            .with_asset(Asset::new(id("a"), "first.jpg", AssetState::Visited))
            .with_asset(Asset::new(id("a"), "second.jpg", AssetState::Tagged));
        assert_eq!(project.assets.len(), 1);
        assert_eq!(project.assets[&id("a")].name, "second.jpg");
    }

    #[tokio::test]
    async fn test_from_file_missing() {
        let result = Project::from_file("/nonexistent/project.vott").await;
        assert!(matches!(result, Err(ExportError::Io(_))));
    }
}
