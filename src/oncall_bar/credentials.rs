//! VictorOps API credentials.
//!
//! The credentials live in `.victorops` inside the plugin's cache directory,
//! one `KEY:value` pair per line:
//!
//! ```text
//! API_KEY:<your_api_key>
//! API_ID:<your_api_id>
//! ```
//!
//! Keys are case-insensitive. Blank lines and lines starting with `#` are
//! skipped. Anything else that is not one of the two known keys makes the file
//! malformed.

use crate::error::{OncallError, Result};
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub const CREDENTIALS_FILENAME: &str = ".victorops";

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub api_id: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"***")
            .field("api_id", &self.api_id)
            .finish()
    }
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_id: api_id.into(),
        }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(OncallError::CredentialsNotFound(path.to_path_buf()))
            }
            Err(e) => return Err(OncallError::Io(e)),
        };
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let mut api_key = None;
        let mut api_id = None;

        for (lineno, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (key, value) = line.split_once(':').ok_or_else(|| {
                OncallError::Credentials(format!("line {} is not KEY:value", lineno + 1))
            })?;
            let value = value.trim().to_string();

            match key.trim().to_ascii_lowercase().as_str() {
                "api_key" => api_key = Some(value),
                "api_id" => api_id = Some(value),
                other => {
                    return Err(OncallError::Credentials(format!(
                        "unknown key {:?} on line {}",
                        other,
                        lineno + 1
                    )))
                }
            }
        }

        Ok(Self {
            api_key: require(api_key, "API_KEY")?,
            api_id: require(api_id, "API_ID")?,
        })
    }
}

fn require(value: Option<String>, key: &str) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        Some(_) => Err(OncallError::Credentials(format!("{} is empty", key))),
        None => Err(OncallError::Credentials(format!("{} is missing", key))),
    }
}
