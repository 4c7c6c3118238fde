use super::logging;
use super::render::render_roster;
use super::setup::Cli;
use clap::Parser;
use oncall_bar::api::OnCallApi;
use oncall_bar::client::http::HttpClient;
use oncall_bar::config::PluginConfig;
use oncall_bar::credentials::Credentials;
use oncall_bar::error::Result;
use oncall_bar::paths::PluginPaths;
use tracing::{debug, error, info};

struct AppContext {
    api: OnCallApi<HttpClient>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let ctx = init_context(&cli).inspect_err(|e| error!(error = %e, "cannot render roster"))?;
    handle_roster(&ctx)
}

/// Config first, then credentials: both are fatal, and nothing touches the
/// network until both have loaded.
fn init_context(cli: &Cli) -> Result<AppContext> {
    let paths = PluginPaths::resolve(cli.config.clone(), cli.credentials.clone())?;
    debug!(
        config = %paths.config.display(),
        credentials = %paths.credentials.display(),
        "resolved plugin files"
    );

    let config = PluginConfig::load(&paths.config)?;
    let credentials = Credentials::load(&paths.credentials)?;
    let client = HttpClient::new(&config.base_url, credentials)?;

    Ok(AppContext {
        api: OnCallApi::new(client, config),
    })
}

fn handle_roster(ctx: &AppContext) -> Result<()> {
    let report = ctx.api.roster();
    if report.has_failures() {
        info!(
            failed = report.failed_count(),
            total = report.teams.len(),
            "some teams could not be loaded"
        );
    }

    println!("{}", render_roster(&report)?);
    Ok(())
}
