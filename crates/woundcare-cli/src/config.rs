use std::path::{Path, PathBuf};

use woundcare_core::config::{CURRENT_CONFIG_VERSION, WoundcareConfig};

pub fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("woundcare"))
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

pub fn default_data_dir() -> eyre::Result<PathBuf> {
    let base = dirs::data_dir().ok_or_else(|| eyre::eyre!("no data directory found"))?;
    Ok(base.join("woundcare"))
}

/// Load, migrate and validate the config at `path`.
pub fn load_config_from(path: &Path) -> eyre::Result<WoundcareConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so migrations run before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0);
    let on_disk_version = u32::try_from(on_disk_version)
        .map_err(|_| eyre::eyre!("config_version {on_disk_version} is out of range"))?;

    let migrated = migrate(json, on_disk_version)?;
    let config: WoundcareConfig = serde_json::from_value(migrated)?;
    config
        .validate()
        .map_err(|e| eyre::eyre!("{}: {e}", path.display()))?;
    Ok(config)
}

/// Like [`load_config_from`], but a missing file yields the defaults.
pub fn load_or_default(path: &Path) -> eyre::Result<WoundcareConfig> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "no config file, using defaults");
        return Ok(WoundcareConfig::default());
    }
    load_config_from(path)
}

/// Run sequential migrations from `from_version` up to
/// [`CURRENT_CONFIG_VERSION`]. Each step is a pure transform on raw JSON.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_CONFIG_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports \
             ({CURRENT_CONFIG_VERSION}). Please update woundcare."
        ));
    }

    // v0 → v1: same shape; files written before versioning only gain the
    // version stamp.
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (stamped version)");
    }

    Ok(json)
}

/// Validate and atomically write `config` to `path`, stamped with the
/// current version.
pub fn save_config_to(path: &Path, config: &WoundcareConfig) -> eyre::Result<()> {
    config.validate()?;

    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent", path.display()))?;
    std::fs::create_dir_all(dir)?;

    let mut stamped = config.clone();
    stamped.config_version = CURRENT_CONFIG_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
