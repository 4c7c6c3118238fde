//! # oncall-bar Architecture
//!
//! oncall-bar is a SwiftBar plugin: the host runs the binary on a timer, reads
//! whatever it prints to stdout, and turns it into a menu-bar dropdown. Each
//! invocation loads two static files, asks VictorOps who is on call for every
//! configured team, prints the menu and exits. Nothing survives between runs.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses flags, sets up logging, resolves plugin paths     │
//! │  - Renders the SwiftBar menu through templates              │
//! │  - The ONLY place that knows about stdout/exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade holding the client and the loaded config     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/)                                  │
//! │  - Walks the configured teams, isolates per-team failures   │
//! │  - Projects API payloads into display-ready rosters         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client Layer (client/)                                     │
//! │  - Abstract OnCallClient trait                              │
//! │  - HttpClient (production), InMemoryClient (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Model
//!
//! A missing or malformed config or credentials file is fatal: no team can be
//! resolved without them, so the CLI prints a single error line and exits
//! non-zero. Anything that goes wrong while fetching one team is recorded in
//! that team's report instead, and the rest of the menu still renders.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`client`]: VictorOps client trait and implementations
//! - [`commands`]: Roster building
//! - [`config`]: The `.config.ini` plugin configuration
//! - [`credentials`]: The `.victorops` credentials file
//! - [`model`]: Serde types for the VictorOps schedule payload
//! - [`paths`]: Where SwiftBar keeps the plugin and its cache
//! - [`error`]: Error types

pub mod api;
pub mod client;
pub mod commands;
pub mod config;
pub mod credentials;
pub mod error;
pub mod model;
pub mod paths;
