//! Server config loader (strict parsing + environment overrides).

pub mod schema;

use std::fs;
use std::path::PathBuf;

use schedweb_core::error::{Result, SchedWebError};

pub use schema::ServerConfig;

/// Optional YAML config file.
pub const CONFIG_ENV: &str = "SCHEDWEB_CONFIG";
/// Listening port override.
pub const PORT_ENV: &str = "PORT";
/// Static root override.
pub const STATIC_ROOT_ENV: &str = "STATIC_ROOT";

pub fn load_from_file(path: &str) -> Result<ServerConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| SchedWebError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg: ServerConfig = serde_yaml::from_str(s)
        .map_err(|e| SchedWebError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load from the process environment.
pub fn load() -> Result<ServerConfig> {
    load_with(|key| std::env::var(key).ok())
}

/// Load using `lookup` for environment values.
///
/// `CONFIG_ENV` selects a YAML file (defaults otherwise), then `PORT_ENV` and
/// `STATIC_ROOT_ENV` override it. Empty values count as unset.
pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Result<ServerConfig> {
    let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let mut cfg = match var(CONFIG_ENV) {
        Some(path) => load_from_file(&path)?,
        None => ServerConfig::default(),
    };

    if let Some(port) = var(PORT_ENV) {
        cfg.port = port.trim().parse().map_err(|e| {
            SchedWebError::BadRequest(format!("{PORT_ENV} must be a port number ({port:?}): {e}"))
        })?;
    }
    if let Some(root) = var(STATIC_ROOT_ENV) {
        cfg.static_root = PathBuf::from(root);
    }

    cfg.validate()?;
    Ok(cfg)
}
