//! Export artifact naming

/// Name of the file written inside the export container
pub const EXPORT_FILE_NAME: &str = "file.json";

/// Destination container for a project export
///
/// Only the first space of the project name is replaced with a hyphen;
/// later spaces are kept as-is.
pub fn container_name(project_name: &str, format_tag: &str) -> String {
    format!("{}-{}-export", project_name.replacen(' ', "-", 1), format_tag)
}

/// Storage path of the export file inside `container`
pub fn export_file_path(container: &str) -> String {
    format!("{container}/{EXPORT_FILE_NAME}")
}
