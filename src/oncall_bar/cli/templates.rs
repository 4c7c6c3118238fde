//! # CLI Templates
//!
//! Menu output is rendered from minijinja templates kept as stand-alone files
//! in `templates/`, embedded here at compile time.
//!
//! Whitespace matters: SwiftBar treats every line as a menu item, so the
//! templates spell out each line break explicitly and keep control tags on the
//! same line as the output they guard. Layout decisions (truncation, labels,
//! which parameter set a line gets) are made in `render.rs`; the templates only
//! assemble lines.

pub const MENU_TEMPLATE: &str = include_str!("templates/menu.tmp");
pub const FATAL_TEMPLATE: &str = include_str!("templates/fatal.tmp");
