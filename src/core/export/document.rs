//! Export document assembly and serialization

use crate::domain::{AssetId, AssetMetadata, ExportError, Project, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::collections::BTreeMap;

const INDENT: &[u8] = b"    ";

/// Transient document written by one export run
///
/// Every project field is carried over unchanged except `assets`, which maps
/// asset id to the loaded metadata record.
#[derive(Debug)]
pub struct ExportDocument<'a> {
    project: &'a Project,
    assets: BTreeMap<AssetId, AssetMetadata>,
}

impl<'a> ExportDocument<'a> {
    /// Build a document from a project and the metadata loaded for it
    ///
    /// Records are keyed by `metadata.asset.id`; a later record with the same
    /// id replaces an earlier one.
    pub fn new(project: &'a Project, metadata: impl IntoIterator<Item = AssetMetadata>) -> Self {
        let assets = metadata
            .into_iter()
            .map(|record| (record.asset.id.clone(), record))
            .collect();
        Self { project, assets }
    }

    /// Loaded metadata by asset id
    pub fn assets(&self) -> &BTreeMap<AssetId, AssetMetadata> {
        &self.assets
    }

    /// Document as a JSON value
    pub fn to_value(&self) -> Result<Value> {
        let mut value = serde_json::to_value(self.project)?;
        let object = value.as_object_mut().ok_or_else(|| {
            ExportError::Serialization("Project did not serialize to a JSON object".to_string())
        })?;
        object.insert("assets".to_string(), serde_json::to_value(&self.assets)?);
        Ok(value)
    }

    /// Document as JSON text indented with four spaces
    pub fn to_json_pretty(&self) -> Result<String> {
        let value = self.to_value()?;
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        value.serialize(&mut serializer)?;
        String::from_utf8(buf).map_err(|e| ExportError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Asset, AssetState};

    fn asset(id: &str, state: AssetState) -> Asset {
        Asset::new(AssetId::new(id).unwrap(), format!("{id}.jpg"), state)
    }

    #[test]
    fn test_assets_replaced_by_metadata() {
        let project = Project::new("P")
            .with_asset(asset("a", AssetState::Tagged))
            .with_asset(asset("b", AssetState::NotVisited));
        let metadata = vec![AssetMetadata::empty(asset("a", AssetState::Tagged), "1.0")];

        let value = ExportDocument::new(&project, metadata).to_value().unwrap();

        let assets = value["assets"].as_object().unwrap();
        assert_eq!(assets.len(), 1);
        assert_eq!(assets["a"]["asset"]["id"], "a");
        assert_eq!(assets["a"]["regions"], serde_json::json!([]));
        assert_eq!(value["name"], "P");
    }

    #[test]
    fn test_duplicate_ids_last_write_wins() {
        let project = Project::new("P");
        let first = AssetMetadata::empty(asset("a", AssetState::Visited), "1.0");
        let second = AssetMetadata::empty(asset("a", AssetState::Tagged), "2.0");

        let document = ExportDocument::new(&project, vec![first, second]);
        assert_eq!(document.assets().len(), 1);
        assert_eq!(document.assets().values().next().unwrap().version, "2.0");
    }

    #[test]
    fn test_pretty_output_uses_four_space_indent() {
        let project = Project::new("P");
        let json = ExportDocument::new(&project, Vec::new())
            .to_json_pretty()
            .unwrap();

        assert!(json.starts_with("{\n    \""));
        assert!(json.contains("\n    \"name\": \"P\""));
        assert!(json.contains("\"assets\": {}"));
        assert!(!json.contains("\n  \""));
    }
}
