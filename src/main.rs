use std::env;
use std::process::ExitCode;

use passform::{cli, exits, tui};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .init();

    exits::reset_terminal();
    exits::install_handlers();

    let args: Vec<String> = env::args().collect();
    log::debug!("passform {} starting", env!("CARGO_PKG_VERSION"));

    match args.len() {
        1 => tui::run(),
        _ => cli::run(args),
    }
}
