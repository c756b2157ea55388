use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

pub use cli::*;
pub use domain::models::*;
pub use services::output::{print_json, print_out};
pub use services::printer::{PrintError, Printer};
pub use services::script::Script;

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    match commands::handle_commands(&cli) {
        Ok(()) => {}
        Err(err) if is_closed_output(&err) => {
            log::debug!("stdout closed early, stopping");
        }
        Err(err) => {
            eprintln!("error: {:#}", err);
            std::process::exit(1);
        }
    }
}

fn init_logging(cli: &Cli) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(cli.log_level())
        .target(env_logger::Target::Stderr);
    if let Ok(filters) = std::env::var(LOG_ENV) {
        builder.parse_filters(&filters);
    }
    builder.init();
}

fn is_closed_output(err: &anyhow::Error) -> bool {
    matches!(err.downcast_ref::<PrintError>(), Some(PrintError::Closed))
}
