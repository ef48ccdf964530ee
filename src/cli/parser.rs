use clap::{Parser, Subcommand};

/// Command-line interface definition for chatroll
/// CLI application to capture meeting attendance from chat text
#[derive(Parser)]
#[command(
    name = "chatroll",
    version = env!("CARGO_PKG_VERSION"),
    about = "Collect attendance records (name + email) from meeting chat transcripts and export them as CSV",
    long_about = None
)]
pub struct Cli {
    /// Override the export output directory (useful for tests or one-off runs)
    #[arg(global = true, long = "out-dir")]
    pub out_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a chat transcript file and export the attendance roster as CSV
    Scan {
        /// Transcript file; one fragment per line, indentation marks nesting
        file: String,

        /// Session name used in the export filename
        #[arg(long = "session-name", help = "Session name for the export filename")]
        session_name: Option<String>,

        /// Print the captured roster as a table
        #[arg(long = "list", help = "Print the captured roster as a table")]
        list: bool,

        /// Parse and report only; write no file
        #[arg(long = "dry-run", help = "Parse and report without writing the CSV")]
        dry_run: bool,
    },

    /// Serve the message command surface as a JSON line protocol on stdin/stdout
    Pipe,

    /// Manage the configuration file (view or create)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check that the configuration file parses")]
        check: bool,

        #[arg(long = "init", help = "Write a default configuration file")]
        init: bool,

        #[arg(long = "path", help = "Print the configuration file location")]
        path: bool,
    },
}
