//! # oncall-bar binary
//!
//! SwiftBar runs this file on a timer and turns its stdout into a menu. The CLI
//! lives in `cli/`; this file only invokes `cli::run()` and maps a fatal error
//! to the single-line failure menu plus a non-zero exit status.
//!
//! SwiftBar reads the refresh interval from the file name, so install the
//! binary (or a wrapper script, see `demos/`) as e.g. `oncall.5m.sh` in the
//! plugin folder, with `.config.ini` beside it.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        println!("{}", cli::render_fatal(&e));
        std::process::exit(1);
    }
}
