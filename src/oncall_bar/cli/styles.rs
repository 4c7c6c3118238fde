//! SwiftBar line parameters.
//!
//! Everything after `|` on an output line is parsed by SwiftBar as
//! `key=value` parameters. Lines pick a parameter set by role rather than
//! spelling parameters out inline.

/// Adaptive near-black/near-white so entries read on light and dark menus,
/// with markdown enabled for the `**bold**` / `*italic*` markup.
const ENTRY_PARAMS: &str = "color=#000001,#FFFFFE md=True";
const ALERT_PARAMS: &str = "color=red";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Entry,
    Alert,
}

impl LineStyle {
    pub fn params(self) -> &'static str {
        match self {
            LineStyle::Entry => ENTRY_PARAMS,
            LineStyle::Alert => ALERT_PARAMS,
        }
    }
}
