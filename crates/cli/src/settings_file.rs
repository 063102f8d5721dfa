use crate::{commands::SettingsFormat, error::CliError};
use engine_config::settings::{json, xml};
use model::settings::LogRowSettings;
use std::path::Path;
use tracing::info;

/// Settings from `path`, or the defaults when no file is given.
pub async fn load(
    path: Option<&str>,
    format: Option<SettingsFormat>,
) -> Result<LogRowSettings, CliError> {
    let Some(path) = path else {
        info!("No settings file given, using defaults");
        return Ok(LogRowSettings::default());
    };

    let source = tokio::fs::read_to_string(path).await?;
    let settings = parse(&source, format.unwrap_or_else(|| guess_format(path)))?;
    info!(
        path,
        error_log_case = %settings.error_log_case,
        non_error_log_detail = %settings.non_error_log_detail,
        "Loaded step settings"
    );
    Ok(settings)
}

pub fn parse(source: &str, format: SettingsFormat) -> Result<LogRowSettings, CliError> {
    let settings = match format {
        SettingsFormat::Xml => xml::from_xml(source)?,
        SettingsFormat::Json => json::from_json(source)?,
    };
    Ok(settings)
}

pub fn render(settings: &LogRowSettings, format: SettingsFormat) -> Result<String, CliError> {
    let rendered = match format {
        SettingsFormat::Xml => xml::to_xml(settings),
        SettingsFormat::Json => json::to_json(settings)?,
    };
    Ok(rendered)
}

fn guess_format(path: &str) -> SettingsFormat {
    let is_xml = Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xml") || ext.eq_ignore_ascii_case("ktr"));
    if is_xml {
        SettingsFormat::Xml
    } else {
        SettingsFormat::Json
    }
}
