//! # CLI Layer
//!
//! The CLI is the **only** place that:
//! - Parses arguments
//! - Sets up logging (to stderr, stdout belongs to SwiftBar)
//! - Resolves where the plugin files live
//! - Prints the menu and decides the exit status
//!
//! ## Structure
//!
//! - `setup.rs`: clap definitions
//! - `commands.rs`: `run()`, context wiring and the roster handler
//! - `render.rs`: report → SwiftBar text, via `templates/`
//! - `styles.rs`: SwiftBar line parameters
//! - `logging.rs`: tracing subscriber

mod commands;
mod logging;
mod render;
mod setup;
mod styles;
mod templates;

pub use commands::run;
pub use render::render_fatal;
