//! # Client Layer
//!
//! The [`OnCallClient`] trait is the one seam between the plugin and the
//! VictorOps API. Commands only ever talk to the trait, so the roster logic can
//! be exercised without a network.
//!
//! ## Implementations
//!
//! - [`http::HttpClient`]: Production client, blocking `reqwest` with the
//!   `X-VO-Api-Id` / `X-VO-Api-Key` header auth.
//! - [`memory::InMemoryClient`]: Canned responses for testing; also records
//!   which teams were requested.

use crate::error::Result;
use crate::model::TeamSchedule;

pub mod http;
pub mod memory;

/// Read-only access to a team's on-call schedule.
pub trait OnCallClient {
    /// Fetch the schedule for `team_id`, covering `days_forward` days from now.
    fn team_schedule(&self, team_id: &str, days_forward: u32) -> Result<TeamSchedule>;
}
