use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

/// Overrides the config file location.
pub const CONFIG_ENV: &str = "VITACARE_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VitacareConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Latency of the stub registration service.
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,
    /// `tracing` filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    /// Emit logs as JSON lines. Added in v1.
    #[serde(default)]
    pub json_logs: bool,
}

fn default_submit_delay_ms() -> u64 {
    1000
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for VitacareConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            submit_delay_ms: default_submit_delay_ms(),
            log_filter: default_log_filter(),
            json_logs: false,
        }
    }
}

impl VitacareConfig {
    pub fn submit_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.submit_delay_ms)
    }
}

pub fn config_path() -> eyre::Result<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("com.vitacare.cli").join("config.json"))
}

/// Load the config from its default location, falling back to defaults
/// when no file exists yet.
pub fn load_config() -> eyre::Result<VitacareConfig> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(path: &Path) -> eyre::Result<VitacareConfig> {
    if !path.exists() {
        return Ok(VitacareConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> eyre::Result<VitacareConfig> {
    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    Ok(serde_json::from_value(migrated)?)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update vitacare."
        ));
    }

    // v0 → v1: add json_logs
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("json_logs")
            .or_insert(serde_json::Value::Bool(false));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added json_logs)");
    }

    Ok(json)
}

pub fn save_config(config: &VitacareConfig) -> eyre::Result<PathBuf> {
    let path = config_path()?;
    save_config_to(&path, config)?;
    Ok(path)
}

pub fn save_config_to(path: &Path, config: &VitacareConfig) -> eyre::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
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
