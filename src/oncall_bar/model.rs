//! Serde types for the VictorOps team schedule payload
//! (`GET /api-public/v2/team/{team}/oncall/schedule`).
//!
//! Only the fields the menu needs are modelled; everything else in the
//! response is ignored. Timestamps are kept as the raw strings the API sends.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A VictorOps user as embedded in schedule payloads.
///
/// `username` is always present. Any other field the API includes
/// (`displayName`, `firstName`, `email`, ...) is kept in `fields` so the
/// configured display field can be looked up by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl User {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), Value::String(value.into()));
        self
    }

    /// A non-empty string field by its API name.
    pub fn field(&self, name: &str) -> Option<&str> {
        if name == "username" {
            return Some(self.username.as_str()).filter(|s| !s.is_empty());
        }
        self.fields
            .get(name)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// The value to show for this user, falling back to the username when the
    /// requested field is missing or empty.
    pub fn display(&self, field: &str) -> &str {
        self.field(field).unwrap_or(&self.username)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Team {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamSchedule {
    #[serde(default, deserialize_with = "null_as_default")]
    pub team: Team,
    #[serde(default, deserialize_with = "null_as_default")]
    pub schedules: Vec<PolicySchedule>,
}

/// The rotations and overrides attached to one escalation policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicySchedule {
    #[serde(default, deserialize_with = "null_as_default")]
    pub policy: Policy,
    #[serde(default, deserialize_with = "null_as_default")]
    pub schedule: Vec<Rotation>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub overrides: Vec<Override>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rotation {
    /// Who holds this rotation right now, if anyone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_call_user: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub shift_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rolls: Vec<Roll>,
}

/// One hand-off in a rotation. `on_call_user` is `None` for an unstaffed gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roll {
    #[serde(default, deserialize_with = "null_as_default")]
    pub start: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub end: String,
    #[serde(default)]
    pub on_call_user: Option<User>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Override {
    #[serde(default)]
    pub orig_on_call_user: Option<User>,
    #[serde(default)]
    pub override_on_call_user: Option<User>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub start: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub end: String,
}

// `#[serde(default)]` only covers absent keys; the API also sends explicit nulls.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
