//! # Configuration
//!
//! The plugin is configured by a small INI file, `.config.ini`, kept next to
//! the plugin executable so it travels with the SwiftBar plugin folder.
//!
//! ```ini
//! [display]
//! user_display = displayName
//! title = OnCall
//! days_forward = 30
//!
//! [teams]
//! Platform = team-abc123
//! Payments = team-def456
//!
//! [api]
//! base_url = https://api.victorops.com
//! ```
//!
//! ## Sections
//!
//! | Section | Key | Default | Description |
//! |---------|-----|---------|-------------|
//! | `display` | `user_display` | `username` | User field shown for each on-call person |
//! | `display` | `title` | `OnCall` | Text shown in the menu bar |
//! | `display` | `days_forward` | `30` | How many days of schedule to fetch (0-365) |
//! | `teams` | *name* | | Team name mapped to its VictorOps team slug |
//! | `api` | `base_url` | `https://api.victorops.com` | VictorOps API root |
//!
//! Only `[teams]` is required, and it must list at least one team. Teams render
//! in the order they are declared. Unknown sections and keys are ignored.

use crate::client::http::DEFAULT_BASE_URL;
use crate::error::{OncallError, Result};
use ini::{Ini, ParseOption};
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub const CONFIG_FILENAME: &str = ".config.ini";

pub const DISPLAY_SECTION: &str = "display";
pub const TEAMS_SECTION: &str = "teams";
pub const API_SECTION: &str = "api";

pub const DEFAULT_USER_DISPLAY: &str = "username";
pub const DEFAULT_TITLE: &str = "OnCall";
pub const DEFAULT_DAYS_FORWARD: u32 = 30;
pub const MAX_DAYS_FORWARD: u32 = 365;

/// A configured team: the name shown in the menu and the VictorOps slug used
/// to query it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRef {
    pub name: String,
    pub id: String,
}

impl TeamRef {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginConfig {
    /// User field to render (`username`, `displayName`, `firstName`, ...)
    pub user_display: String,
    /// Menu-bar title line
    pub title: String,
    /// Schedule horizon passed to the API as `daysForward`
    pub days_forward: u32,
    pub base_url: String,
    pub teams: Vec<TeamRef>,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            user_display: DEFAULT_USER_DISPLAY.to_string(),
            title: DEFAULT_TITLE.to_string(),
            days_forward: DEFAULT_DAYS_FORWARD,
            base_url: DEFAULT_BASE_URL.to_string(),
            teams: Vec::new(),
        }
    }
}

impl PluginConfig {
    /// Load and validate the config file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(OncallError::ConfigNotFound(path.to_path_buf()))
            }
            Err(e) => return Err(OncallError::Io(e)),
        };
        Self::from_ini_str(&content)
    }

    pub fn from_ini_str(content: &str) -> Result<Self> {
        // Values are taken as written: no quote stripping, no escape sequences
        let options = ParseOption {
            enabled_quote: false,
            enabled_escape: false,
            ..Default::default()
        };
        let ini = Ini::load_from_str_opt(content, options)
            .map_err(|e| OncallError::Config(format!("malformed INI: {}", e)))?;
        Self::from_ini(&ini)
    }

    fn from_ini(ini: &Ini) -> Result<Self> {
        let mut config = Self::default();

        if let Some(display) = ini.section(Some(DISPLAY_SECTION)) {
            if let Some(field) = display.get("user_display") {
                config.user_display = parse_user_display(field)?;
            }
            if let Some(title) = display.get("title") {
                let title = title.trim();
                if title.is_empty() {
                    return Err(OncallError::Config("display.title cannot be empty".into()));
                }
                config.title = title.to_string();
            }
            if let Some(days) = display.get("days_forward") {
                config.days_forward = parse_days_forward(days)?;
            }
        }

        if let Some(api) = ini.section(Some(API_SECTION)) {
            if let Some(url) = api.get("base_url") {
                config.base_url = parse_base_url(url)?;
            }
        }

        let teams = ini.section(Some(TEAMS_SECTION)).ok_or_else(|| {
            OncallError::Config(format!("missing [{}] section", TEAMS_SECTION))
        })?;

        let mut seen = HashSet::new();
        for (name, id) in teams.iter() {
            let name = name.trim();
            let id = id.trim();
            if id.is_empty() {
                return Err(OncallError::Config(format!(
                    "team {:?} has an empty identifier",
                    name
                )));
            }
            if !seen.insert(name.to_string()) {
                return Err(OncallError::Config(format!(
                    "team {:?} is listed more than once",
                    name
                )));
            }
            config.teams.push(TeamRef::new(name, id));
        }

        if config.teams.is_empty() {
            return Err(OncallError::Config(format!(
                "[{}] section lists no teams",
                TEAMS_SECTION
            )));
        }

        Ok(config)
    }
}

fn parse_user_display(value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return Err(OncallError::Config(format!(
            "display.user_display must be a single field name, got {:?}",
            value
        )));
    }
    Ok(value.to_string())
}

fn parse_days_forward(value: &str) -> Result<u32> {
    match value.trim().parse::<u32>() {
        Ok(days) if days <= MAX_DAYS_FORWARD => Ok(days),
        _ => Err(OncallError::Config(format!(
            "display.days_forward must be a number between 0 and {}, got {:?}",
            MAX_DAYS_FORWARD, value
        ))),
    }
}

fn parse_base_url(value: &str) -> Result<String> {
    let value = value.trim();
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(OncallError::Config(format!(
            "api.base_url must be an http(s) URL, got {:?}",
            value
        )));
    }
    Ok(value.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = "\
[display]
user_display = displayName
title = Who is up
days_forward = 14

[teams]
Platform = team-abc123
Payments = team-def456

[api]
base_url = http://localhost:8080/
";

    #[test]
    fn test_full_config() {
        let config = PluginConfig::from_ini_str(FULL).unwrap();
        assert_eq!(config.user_display, "displayName");
        assert_eq!(config.title, "Who is up");
        assert_eq!(config.days_forward, 14);
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(
            config.teams,
            vec![
                TeamRef::new("Platform", "team-abc123"),
                TeamRef::new("Payments", "team-def456"),
            ]
        );
    }

    #[test]
    fn test_defaults_when_only_teams_given() {
        let config = PluginConfig::from_ini_str("[teams]\nOps = ops-1\n").unwrap();
        assert_eq!(config.user_display, DEFAULT_USER_DISPLAY);
        assert_eq!(config.title, DEFAULT_TITLE);
        assert_eq!(config.days_forward, DEFAULT_DAYS_FORWARD);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.teams.len(), 1);
    }

    #[test]
    fn test_team_order_is_declaration_order() {
        let config =
            PluginConfig::from_ini_str("[teams]\nZulu = z\nAlpha = a\nMike = m\n").unwrap();
        let names: Vec<&str> = config.teams.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Zulu", "Alpha", "Mike"]);
    }

    #[test]
    fn test_missing_teams_section() {
        let err = PluginConfig::from_ini_str("[display]\nuser_display = username\n").unwrap_err();
        assert!(matches!(err, OncallError::Config(msg) if msg.contains("[teams]")));
    }

    #[test]
    fn test_empty_teams_section() {
        let err = PluginConfig::from_ini_str("[teams]\n").unwrap_err();
        assert!(matches!(err, OncallError::Config(_)));
    }

    #[test]
    fn test_empty_team_id() {
        let err = PluginConfig::from_ini_str("[teams]\nOps =\n").unwrap_err();
        assert!(matches!(err, OncallError::Config(msg) if msg.contains("Ops")));
    }

    #[test]
    fn test_duplicate_team() {
        let err = PluginConfig::from_ini_str("[teams]\nOps = a\nOps = b\n").unwrap_err();
        assert!(matches!(err, OncallError::Config(msg) if msg.contains("more than once")));
    }

    #[test]
    fn test_invalid_user_display() {
        let err = PluginConfig::from_ini_str("[display]\nuser_display = display name\n[teams]\nOps = a\n")
            .unwrap_err();
        assert!(matches!(err, OncallError::Config(msg) if msg.contains("user_display")));
    }

    #[test]
    fn test_invalid_days_forward() {
        for bad in ["-1", "lots", "366"] {
            let ini = format!("[display]\ndays_forward = {}\n[teams]\nOps = a\n", bad);
            let err = PluginConfig::from_ini_str(&ini).unwrap_err();
            assert!(
                matches!(err, OncallError::Config(ref msg) if msg.contains("days_forward")),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_invalid_base_url() {
        let err = PluginConfig::from_ini_str("[api]\nbase_url = ftp://example.com\n[teams]\nOps = a\n")
            .unwrap_err();
        assert!(matches!(err, OncallError::Config(msg) if msg.contains("base_url")));
    }

    #[test]
    fn test_values_are_read_verbatim() {
        let quoted = PluginConfig::from_ini_str(
            r#"[display]
title = "On Call"

[teams]
Ops = team\one
"#,
        )
        .unwrap();
        assert_eq!(quoted.title, r#""On Call""#);
        assert_eq!(quoted.teams[0], TeamRef::new("Ops", r"team\one"));

        let backslashes =
            PluginConfig::from_ini_str("[display]\ntitle = C:\\temp\\new\n[teams]\nOps = a\n")
                .unwrap();
        assert_eq!(backslashes.title, r"C:\temp\new");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        let err = PluginConfig::load(&path).unwrap_err();
        assert!(matches!(err, OncallError::ConfigNotFound(p) if p == path));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, FULL).unwrap();

        let config = PluginConfig::load(&path).unwrap();
        assert_eq!(config.teams.len(), 2);
    }
}
