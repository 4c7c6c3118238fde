//! # Rendering Module
//!
//! Turns a [`RosterReport`] into SwiftBar's plain-text menu format:
//!
//! ```text
//! OnCall                                   <- menu-bar title
//! ---
//! Platform: Alice Smith | params           <- one line per team
//! --Now: **Alice Smith** (alice) for shift Day in Weekly, ... | params
//! --*Policy: Primary* | params             <- submenu (shown on hover)
//! --**2024-05-01 09:00** - **2024-05-08 09:00** | params
//! --**Alice Smith** (alice) for shift Day | params
//! ---
//! Refresh | refresh=true
//! ```
//!
//! Entry lines are rendered with `md=True`, so text taken from the API or the
//! config is escaped before it is wrapped in our own `**`/`*` markup. Every
//! line is also kept from starting with `-`, which SwiftBar would read as
//! submenu nesting or a separator.
//!
//! Rendering is a pure function of the report: the same report always gives
//! the same bytes.

use super::styles::LineStyle;
use super::templates::{FATAL_TEMPLATE, MENU_TEMPLATE};
use minijinja::Environment;
use oncall_bar::commands::{
    OnCallEntry, PolicyRoster, RosterReport, ShiftAssignment, TeamOutcome, TeamReport,
    TeamRoster, UserLabel,
};
use oncall_bar::config::DEFAULT_TITLE;
use oncall_bar::error::{OncallError, Result};
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Maximum display width of a top-level team line, before its parameters.
pub const LINE_WIDTH: usize = 80;
pub const ERROR_MARKER: &str = "⚠";
const NOBODY_ON_CALL: &str = "nobody on call";
const MARKDOWN_SPECIALS: &[char] = &['\\', '*', '_', '`', '~', '[', ']'];

#[derive(Serialize)]
struct MenuLine {
    text: String,
    params: &'static str,
}

impl MenuLine {
    fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: guard_leading_dash(text.into()),
            params: style.params(),
        }
    }
}

#[derive(Serialize)]
struct TeamMenu {
    line: MenuLine,
    submenu: Vec<MenuLine>,
}

#[derive(Serialize)]
struct MenuData {
    title: String,
    teams: Vec<TeamMenu>,
}

#[derive(Serialize)]
struct FatalData {
    title: String,
    message: String,
    params: &'static str,
}

/// Renders the full menu.
pub fn render_roster(report: &RosterReport) -> Result<String> {
    let data = MenuData {
        title: guard_leading_dash(sanitize(&report.title)),
        teams: report.teams.iter().map(team_menu).collect(),
    };
    render_template("menu", MENU_TEMPLATE, &data)
}

/// Renders the single line shown when nothing could be loaded at all.
pub fn render_fatal(error: &OncallError) -> String {
    let data = FatalData {
        title: DEFAULT_TITLE.to_string(),
        message: sanitize(&error.to_string()),
        params: LineStyle::Alert.params(),
    };
    render_template("fatal", FATAL_TEMPLATE, &data)
        .unwrap_or_else(|_| format!("{}: {} | {}", data.title, data.message, data.params))
}

fn render_template<S: Serialize>(name: &str, source: &str, data: &S) -> Result<String> {
    let mut env = Environment::new();
    env.add_template(name, source)?;
    let output = env.get_template(name)?.render(data)?;
    Ok(output)
}

fn team_menu(team: &TeamReport) -> TeamMenu {
    match &team.outcome {
        TeamOutcome::Loaded(roster) => {
            let mut submenu = Vec::new();
            if !roster.team_name.is_empty() && roster.team_name != team.name {
                submenu.push(MenuLine::new(
                    format!("**Team: {}**", md(&roster.team_name)),
                    LineStyle::Entry,
                ));
            }
            submenu.extend(roster.on_call.iter().map(current_line));
            submenu.extend(roster.policies.iter().flat_map(policy_lines));

            TeamMenu {
                line: MenuLine::new(
                    truncate_to_width(
                        &format!("{}: {}", md(&team.name), on_call_summary(roster)),
                        LINE_WIDTH,
                    ),
                    LineStyle::Entry,
                ),
                submenu,
            }
        }
        TeamOutcome::Failed(reason) => TeamMenu {
            line: MenuLine::new(
                truncate_to_width(
                    &format!("{}: {} unavailable", sanitize(&team.name), ERROR_MARKER),
                    LINE_WIDTH,
                ),
                LineStyle::Alert,
            ),
            submenu: vec![MenuLine::new(sanitize(reason), LineStyle::Alert)],
        },
    }
}

fn on_call_summary(roster: &TeamRoster) -> String {
    if roster.on_call.is_empty() {
        return NOBODY_ON_CALL.to_string();
    }
    roster
        .on_call
        .iter()
        .map(|entry| md(&entry.user.display))
        .collect::<Vec<_>>()
        .join(", ")
}

fn current_line(entry: &OnCallEntry) -> MenuLine {
    let mut text = format!("Now: {}", user_label(&entry.user));
    if !entry.shift.is_empty() {
        text.push_str(&format!(" for shift {}", md(&entry.shift)));
    }
    if let Some(rotation) = &entry.rotation {
        text.push_str(&format!(" in {}", md(rotation)));
    }
    if let (Some(start), Some(end)) = (&entry.start, &entry.end) {
        text.push_str(&format!(", {} - {}", md(start), md(end)));
    }
    MenuLine::new(text, LineStyle::Entry)
}

fn policy_lines(policy: &PolicyRoster) -> Vec<MenuLine> {
    let mut lines = vec![MenuLine::new(
        format!("*Policy: {}*", md(&policy.name)),
        LineStyle::Entry,
    )];

    for window in &policy.shifts {
        lines.push(MenuLine::new(
            format!("**{}** - **{}**", md(&window.start), md(&window.end)),
            LineStyle::Entry,
        ));
        lines.extend(window.assignments.iter().map(assignment_line));
    }

    if !policy.overrides.is_empty() {
        lines.push(MenuLine::new("Overrides:", LineStyle::Entry));
        for o in &policy.overrides {
            lines.push(MenuLine::new(
                format!(
                    "**{}** for **{}**: Start {}, End {}",
                    md(&o.replacement.display),
                    md(&o.original.display),
                    md(&o.start),
                    md(&o.end)
                ),
                LineStyle::Entry,
            ));
        }
    }

    lines
}

fn assignment_line(assignment: &ShiftAssignment) -> MenuLine {
    let label = user_label(&assignment.user);
    let text = if assignment.shift.is_empty() {
        label
    } else {
        format!("{} for shift {}", label, md(&assignment.shift))
    };
    MenuLine::new(text, LineStyle::Entry)
}

/// Bold display value, with the username alongside when they differ.
fn user_label(user: &UserLabel) -> String {
    if user.display == user.username {
        format!("**{}**", md(&user.display))
    } else {
        format!("**{}** ({})", md(&user.display), md(&user.username))
    }
}

/// Keeps API-provided text on one line and out of the parameter section.
fn sanitize(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '|' => '¦',
            '\n' | '\r' => ' ',
            c => c,
        })
        .collect()
}

/// [`sanitize`], then backslash-escape markdown so the text renders literally.
fn md(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in sanitize(s).chars() {
        if MARKDOWN_SPECIALS.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn guard_leading_dash(text: String) -> String {
    if text.starts_with('-') {
        format!("‐{}", &text[1..])
    } else {
        text
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for (i, c) in s.char_indices() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            // Exactly fits: no ellipsis needed
            if s[i..].width() + current_width <= max_width {
                result.push_str(&s[i..]);
                return result;
            }
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
