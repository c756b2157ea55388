use clap::{ArgAction, Parser, Subcommand};

pub const LOG_ENV: &str = "HELLO_PRINTER_LOG";

#[derive(Parser, Debug)]
#[command(
    name = "hello-printer",
    version,
    about = "Print the greeting sequence through a stateless printer"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        short,
        long,
        global = true,
        action = ArgAction::Count,
        help = "Raise log verbosity on stderr (repeatable)"
    )]
    pub verbose: u8,
    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Silence all log output"
    )]
    pub quiet: bool,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the full greeting sequence (default)
    Run,
    /// Print the fixed greeting
    Hello,
    /// Print a single line as given
    Print { text: String },
    /// Print two strings joined without a separator
    PrintMultiple { first: String, second: String },
    /// List the steps of the greeting sequence without running it
    Steps,
}

impl Cli {
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Run)
    }

    pub fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            return log::LevelFilter::Off;
        }
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
