use crate::{
    commands::{Commands, SettingsCommand},
    error::CliError,
};
use clap::Parser;
use engine_config::settings::editor::SettingsEditor;
use engine_processing::{
    sink::TracingSink,
    transform::log_row::{LogRowStep, MessageFormat},
};
use std::{fs::File, io, sync::Arc};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod rows;
mod run;
mod settings_file;

#[derive(Parser)]
#[command(
    name = "logrow",
    version = "0.1.0",
    about = "Log rows as they flow through a pipeline step"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    // Logs go to stderr so forwarded rows can be piped from stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            input,
            settings,
            format,
            copies,
            output,
            line_ending,
            step_name,
        } => {
            let settings = settings_file::load(settings.as_deref(), format).await?;
            let step = LogRowStep::new(step_name, settings, Arc::new(TracingSink))
                .with_format(MessageFormat::new(line_ending));

            info!("Reading rows from {input}");
            let input = File::open(&input)?;
            let written = match output {
                Some(path) => run::run_csv(&step, copies, input, File::create(path)?).await?,
                None => run::run_csv(&step, copies, input, io::stdout().lock()).await?,
            };
            info!(rows = written, "Forwarded rows");
        }
        Commands::Settings { command } => match command {
            SettingsCommand::Show {
                settings,
                format,
                to,
            } => {
                let loaded = settings_file::load(Some(&settings), format).await?;
                println!("{}", settings_file::render(&loaded, to)?);
            }
        },
        Commands::Options => {
            println!(
                "errorLogCase: {}",
                SettingsEditor::error_log_case_options().join(", ")
            );
            println!(
                "nonErrorLogDetail: {}",
                SettingsEditor::non_error_log_detail_options().join(", ")
            );
        }
    }

    Ok(())
}
