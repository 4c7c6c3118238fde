//! Command results.
//!
//! Commands turn API payloads into display-ready data. They never print:
//! everything they produce is a plain value the CLI layer renders.

pub mod roster;

/// A user as it should appear in the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserLabel {
    /// Value of the configured display field (username if absent)
    pub display: String,
    pub username: String,
}

/// Someone holding a rotation right now.
///
/// The window is the first roll of that rotation the same user holds, so it
/// is `None` when the rolls never name them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnCallEntry {
    pub user: UserLabel,
    pub rotation: Option<String>,
    pub shift: String,
    pub start: Option<String>,
    pub end: Option<String>,
}

/// One user working one shift inside a window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftAssignment {
    pub user: UserLabel,
    pub shift: String,
}

/// Every assignment sharing the same start and end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftWindow {
    pub start: String,
    pub end: String,
    pub assignments: Vec<ShiftAssignment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideEntry {
    pub replacement: UserLabel,
    pub original: UserLabel,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyRoster {
    pub name: String,
    pub shifts: Vec<ShiftWindow>,
    pub overrides: Vec<OverrideEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamRoster {
    /// Team name as the API reports it; may differ from the configured label
    pub team_name: String,
    /// Users on call right now, first-seen order, no duplicates
    pub on_call: Vec<OnCallEntry>,
    pub policies: Vec<PolicyRoster>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamOutcome {
    Loaded(TeamRoster),
    /// The team could not be fetched; carries the reason
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamReport {
    pub name: String,
    pub outcome: TeamOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterReport {
    pub title: String,
    pub teams: Vec<TeamReport>,
}

impl RosterReport {
    pub fn has_failures(&self) -> bool {
        self.failed_count() > 0
    }

    pub fn failed_count(&self) -> usize {
        self.teams
            .iter()
            .filter(|t| matches!(t.outcome, TeamOutcome::Failed(_)))
            .count()
    }
}
