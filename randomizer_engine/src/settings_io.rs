//! Settings blob persistence (JSON on disk).

use randomizer_shared::{Settings, SettingsError};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Read the settings blob. `Ok(None)` when the file does not exist — first
/// runs keep built-in defaults and that is not an error.
pub fn load(path: &Path) -> Result<Option<Settings>, SettingsError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(SettingsError::Load {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        }
    };
    let settings = serde_json::from_str(&content).map_err(|e| SettingsError::Load {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(Some(settings))
}

/// Write the full settings blob, overwriting any existing file.
pub fn save(path: &Path, settings: &Settings) -> Result<(), SettingsError> {
    let save_err = |e: &dyn std::fmt::Display| SettingsError::Save {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };
    let json = serde_json::to_string_pretty(settings).map_err(|e| save_err(&e))?;
    let mut file = File::create(path).map_err(|e| save_err(&e))?;
    file.write_all(json.as_bytes()).map_err(|e| save_err(&e))?;
    Ok(())
}

/// Remove the settings blob. A missing file is fine.
pub fn delete(path: &Path) -> Result<(), SettingsError> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(SettingsError::Save {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }),
    }
}
