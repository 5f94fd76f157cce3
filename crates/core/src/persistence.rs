//! Layer persistence (load/save)
//!
//! A layer's own overrides are stored as a flat pretty-printed JSON
//! object: `{"editor.fontSize": 12}`. Only the layer itself is written;
//! the parent chain belongs to whoever assembled the stack.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::layer::SettingsLayer;
use crate::value::SettingValue;

/// Per-application settings file path: `<config dir>/<app>/settings.json`.
pub fn config_path(app: &str) -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(app).join("settings.json"))
}

/// Load a layer from disk.
///
/// Returns an empty layer if the file doesn't exist or can't be parsed.
/// This is intentional - a broken settings file must not prevent startup.
pub fn load_layer(path: &Path) -> SettingsLayer {
    let Ok(contents) = fs::read_to_string(path) else {
        return SettingsLayer::new();
    };
    match serde_json::from_str::<BTreeMap<String, SettingValue>>(&contents) {
        Ok(values) => SettingsLayer::from_values(values),
        Err(e) => {
            log::warn!("ignoring unreadable settings file {}: {}", path.display(), e);
            SettingsLayer::new()
        }
    }
}

/// Save a layer's own overrides to disk (atomic write).
///
/// Creates the parent directory if needed. Uses write-to-temp-then-rename
/// to prevent corruption on crash.
pub fn save_layer(path: &Path, layer: &SettingsLayer) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(layer.own_values())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    let temp = path.with_extension("json.tmp");
    fs::write(&temp, json)?;
    fs::rename(&temp, path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn layer_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");

        let mut layer = SettingsLayer::new();
        layer.insert("editor.fontSize", 14.0);
        layer.insert("editor.vimMode", true);
        layer.insert("ui.theme", "dark");

        save_layer(&path, &layer).unwrap();

        let loaded = load_layer(&path);
        assert_eq!(loaded.own_values(), layer.own_values());
    }

    #[test]
    fn layer_file_is_plain_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");

        let mut layer = SettingsLayer::new();
        layer.insert("editor.fontSize", 14.0);
        save_layer(&path, &layer).unwrap();

        let json = fs::read_to_string(&path).unwrap();
        assert!(json.contains("\"editor.fontSize\": 14.0"));
        // No enum tags anywhere
        assert!(!json.contains("Number"));
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let loaded = load_layer(&dir.path().join("nope.json"));
        assert!(loaded.is_empty());
    }

    #[test]
    fn garbage_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{not json").unwrap();

        let loaded = load_layer(&path);
        assert!(loaded.is_empty());
    }

    #[test]
    fn save_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");

        let mut layer = SettingsLayer::new();
        layer.insert("ui.theme", "auto");
        save_layer(&path, &layer).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
    }
}
