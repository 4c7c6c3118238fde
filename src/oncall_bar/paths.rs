//! Locating the plugin's config and credentials files.
//!
//! SwiftBar exports two variables to every plugin run:
//! - `SWIFTBAR_PLUGIN_PATH`: the plugin executable. The config sits next to it.
//! - `SWIFTBAR_PLUGIN_CACHE_PATH`: a per-plugin cache directory. The
//!   credentials sit there, outside the (often synced) plugin folder.
//!
//! Outside SwiftBar the running executable stands in for the plugin path and
//! the cache directory falls back to SwiftBar's default layout under the user
//! cache dir. Explicit paths from the command line win over both.

use crate::config::CONFIG_FILENAME;
use crate::credentials::CREDENTIALS_FILENAME;
use crate::error::{OncallError, Result};
use directories::BaseDirs;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const PLUGIN_PATH_ENV: &str = "SWIFTBAR_PLUGIN_PATH";
pub const PLUGIN_CACHE_PATH_ENV: &str = "SWIFTBAR_PLUGIN_CACHE_PATH";

const SWIFTBAR_BUNDLE_ID: &str = "com.ameba.SwiftBar";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginPaths {
    pub config: PathBuf,
    pub credentials: PathBuf,
}

impl PluginPaths {
    /// Resolve both paths from the process environment.
    pub fn resolve(
        config_override: Option<PathBuf>,
        credentials_override: Option<PathBuf>,
    ) -> Result<Self> {
        let plugin_path = match std::env::var_os(PLUGIN_PATH_ENV) {
            Some(path) => PathBuf::from(path),
            None => std::env::current_exe()?,
        };
        let cache_env = std::env::var_os(PLUGIN_CACHE_PATH_ENV);
        let user_cache = BaseDirs::new().map(|dirs| dirs.cache_dir().to_path_buf());

        resolve_with(
            &plugin_path,
            cache_env,
            user_cache.as_deref(),
            config_override,
            credentials_override,
        )
    }
}

fn resolve_with(
    plugin_path: &Path,
    cache_env: Option<OsString>,
    user_cache: Option<&Path>,
    config_override: Option<PathBuf>,
    credentials_override: Option<PathBuf>,
) -> Result<PluginPaths> {
    let config = match config_override {
        Some(path) => path,
        None => plugin_dir(plugin_path)?.join(CONFIG_FILENAME),
    };

    let credentials = match credentials_override {
        Some(path) => path,
        None => cache_dir(plugin_path, cache_env, user_cache)?.join(CREDENTIALS_FILENAME),
    };

    Ok(PluginPaths {
        config,
        credentials,
    })
}

fn plugin_dir(plugin_path: &Path) -> Result<PathBuf> {
    plugin_path
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| {
            OncallError::Paths(format!(
                "plugin path {} has no parent directory",
                plugin_path.display()
            ))
        })
}

fn cache_dir(
    plugin_path: &Path,
    cache_env: Option<OsString>,
    user_cache: Option<&Path>,
) -> Result<PathBuf> {
    if let Some(dir) = cache_env.filter(|dir| !dir.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    let user_cache = user_cache
        .ok_or_else(|| OncallError::Paths("could not determine the user cache directory".into()))?;
    let plugin_name = plugin_path.file_name().ok_or_else(|| {
        OncallError::Paths(format!(
            "plugin path {} has no file name",
            plugin_path.display()
        ))
    })?;

    Ok(user_cache
        .join(SWIFTBAR_BUNDLE_ID)
        .join("Plugins")
        .join(plugin_name))
}
