use clap::{Subcommand, ValueEnum};
use engine_processing::transform::log_row::LineEnding;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SettingsFormat {
    Xml,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the row logging step over a CSV file and forward its rows
    Run {
        #[arg(long, help = "CSV input file with a header row")]
        input: String,

        #[arg(long, help = "Step settings file; defaults apply when omitted")]
        settings: Option<String>,

        #[arg(
            long,
            value_enum,
            help = "Settings file format; guessed from the file extension when omitted"
        )]
        format: Option<SettingsFormat>,

        #[arg(long, default_value_t = 1, help = "Number of parallel step copies")]
        copies: usize,

        #[arg(
            long,
            help = "If specified, writes forwarded rows to this file instead of stdout"
        )]
        output: Option<String>,

        #[arg(long, default_value = "native", help = "Line ending of detailed messages: lf, crlf or native")]
        line_ending: LineEnding,

        #[arg(long, default_value = "Log row", help = "Step name attached to log lines")]
        step_name: String,
    },
    /// Inspect step settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },
    /// List the names accepted by each setting
    Options,
}

#[derive(Subcommand)]
pub enum SettingsCommand {
    /// Validate a settings file and print it
    Show {
        #[arg(long, help = "Settings file path")]
        settings: String,

        #[arg(long, value_enum, help = "Format of the settings file")]
        format: Option<SettingsFormat>,

        #[arg(long, value_enum, default_value = "json", help = "Format to print")]
        to: SettingsFormat,
    },
}
