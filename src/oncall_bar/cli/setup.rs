use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "oncall-bar", bin_name = "oncall-bar", version)]
#[command(about = "SwiftBar plugin showing who is on call in VictorOps", long_about = None)]
pub struct Cli {
    /// Config file (default: .config.ini next to the plugin)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Credentials file (default: .victorops in the plugin cache directory)
    #[arg(long, value_name = "PATH")]
    pub credentials: Option<PathBuf>,

    /// Log to stderr; repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
