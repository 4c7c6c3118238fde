use super::{
    OnCallEntry, OverrideEntry, PolicyRoster, RosterReport, ShiftAssignment, ShiftWindow,
    TeamOutcome, TeamReport, TeamRoster, UserLabel,
};
use crate::client::OnCallClient;
use crate::config::PluginConfig;
use crate::model::{PolicySchedule, Rotation, TeamSchedule, User};
use chrono::DateTime;
use std::collections::HashSet;
use tracing::{info, warn};

const API_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";
const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Fetch and project the roster of every configured team, in config order.
///
/// Teams are independent: a failed fetch becomes [`TeamOutcome::Failed`] for
/// that team and the remaining teams are still requested.
pub fn run<C: OnCallClient>(client: &C, config: &PluginConfig) -> RosterReport {
    let teams = config
        .teams
        .iter()
        .map(|team| {
            let outcome = match client.team_schedule(&team.id, config.days_forward) {
                Ok(schedule) => {
                    let roster = project(&schedule, &config.user_display);
                    info!(
                        team = %team.name,
                        on_call = roster.on_call.len(),
                        "loaded roster"
                    );
                    TeamOutcome::Loaded(roster)
                }
                Err(e) => {
                    warn!(team = %team.name, id = %team.id, error = %e, "could not load roster");
                    TeamOutcome::Failed(e.to_string())
                }
            };
            TeamReport {
                name: team.name.clone(),
                outcome,
            }
        })
        .collect();

    RosterReport {
        title: config.title.clone(),
        teams,
    }
}

fn project(schedule: &TeamSchedule, field: &str) -> TeamRoster {
    let mut seen = HashSet::new();
    let on_call = schedule
        .schedules
        .iter()
        .flat_map(|policy| policy.schedule.iter())
        .filter_map(|rotation| current_entry(rotation, field))
        .filter(|entry| seen.insert(entry.user.username.clone()))
        .collect();

    let policies = schedule
        .schedules
        .iter()
        .map(|policy| project_policy(policy, field))
        .collect();

    TeamRoster {
        team_name: schedule.team.name.trim().to_string(),
        on_call,
        policies,
    }
}

fn current_entry(rotation: &Rotation, field: &str) -> Option<OnCallEntry> {
    let user = rotation.on_call_user.as_ref()?;
    let roll = rotation.rolls.iter().find(|roll| {
        roll.on_call_user
            .as_ref()
            .is_some_and(|u| u.username == user.username)
    });

    Some(OnCallEntry {
        user: label(user, field),
        rotation: rotation
            .rotation_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string),
        shift: rotation.shift_name.clone(),
        start: roll.map(|r| format_timestamp(&r.start)),
        end: roll.map(|r| format_timestamp(&r.end)),
    })
}

fn project_policy(policy: &PolicySchedule, field: &str) -> PolicyRoster {
    let mut shifts: Vec<ShiftWindow> = Vec::new();

    for rotation in &policy.schedule {
        for roll in &rotation.rolls {
            // Unstaffed gap
            let Some(user) = &roll.on_call_user else {
                continue;
            };
            let start = format_timestamp(&roll.start);
            let end = format_timestamp(&roll.end);
            let assignment = ShiftAssignment {
                user: label(user, field),
                shift: rotation.shift_name.clone(),
            };

            match shifts.iter_mut().find(|w| w.start == start && w.end == end) {
                Some(window) => window.assignments.push(assignment),
                None => shifts.push(ShiftWindow {
                    start,
                    end,
                    assignments: vec![assignment],
                }),
            }
        }
    }

    let overrides = policy
        .overrides
        .iter()
        .filter_map(|o| {
            Some(OverrideEntry {
                replacement: label(o.override_on_call_user.as_ref()?, field),
                original: label(o.orig_on_call_user.as_ref()?, field),
                start: format_timestamp(&o.start),
                end: format_timestamp(&o.end),
            })
        })
        .collect();

    PolicyRoster {
        name: policy.policy.name.clone(),
        shifts,
        overrides,
    }
}

fn label(user: &User, field: &str) -> UserLabel {
    UserLabel {
        display: user.display(field).to_string(),
        username: user.username.clone(),
    }
}

/// Reformat an API timestamp as `YYYY-MM-DD HH:MM`, keeping its own offset.
/// Anything unparseable is passed through as-is.
fn format_timestamp(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, API_TIME_FORMAT))
        .map(|dt| dt.format(DISPLAY_TIME_FORMAT).to_string())
        .unwrap_or_else(|_| raw.to_string())
}
