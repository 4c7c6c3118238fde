//! # API Facade
//!
//! [`OnCallApi`] is the single entry point UIs use. It owns the client and the
//! loaded config and dispatches to the command layer; it does no I/O and no
//! formatting of its own.
//!
//! ## Generic Over OnCallClient
//!
//! - Production: `OnCallApi<HttpClient>`
//! - Testing: `OnCallApi<InMemoryClient>`

use crate::client::OnCallClient;
use crate::commands::{self, RosterReport};
use crate::config::PluginConfig;

pub struct OnCallApi<C: OnCallClient> {
    client: C,
    config: PluginConfig,
}

impl<C: OnCallClient> OnCallApi<C> {
    pub fn new(client: C, config: PluginConfig) -> Self {
        Self { client, config }
    }

    /// Current roster and upcoming schedule for every configured team.
    pub fn roster(&self) -> RosterReport {
        commands::roster::run(&self.client, &self.config)
    }

    pub fn client(&self) -> &C {
        &self.client
    }
}
