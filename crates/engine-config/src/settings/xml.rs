//! XML step fragment: one element per setting, as stored inside a step node
//! of a pipeline definition.
//!
//! ```xml
//! <errorLogCase>ROW_UNDER_RUN</errorLogCase>
//! <nonErrorLogDetail>FIRST_DETAILED</nonErrorLogDetail>
//! ```

use super::{ERROR_LOG_CASE_KEY, NON_ERROR_LOG_DETAIL_KEY, load_settings};
use crate::error::ConfigError;
use model::settings::LogRowSettings;
use quick_xml::{Reader, escape::escape, events::Event};
use std::collections::HashMap;

const INDENT: &str = "      ";

pub fn to_xml(settings: &LogRowSettings) -> String {
    let mut xml = String::new();
    add_tag_value(&mut xml, ERROR_LOG_CASE_KEY, settings.error_log_case.name());
    add_tag_value(&mut xml, NON_ERROR_LOG_DETAIL_KEY, settings.non_error_log_detail.name());
    xml
}

/// Read settings from a fragment or from a whole step node. Setting elements
/// are matched at any depth and the first occurrence wins. Text and CDATA
/// content is taken verbatim, without trimming, so padded names are rejected.
pub fn from_xml(source: &str) -> Result<LogRowSettings, ConfigError> {
    let values = tag_values(source, &[ERROR_LOG_CASE_KEY, NON_ERROR_LOG_DETAIL_KEY])?;
    load_settings(&values)
}

fn add_tag_value(xml: &mut String, tag: &str, value: &str) {
    xml.push_str(INDENT);
    xml.push_str(&format!("<{tag}>{}</{tag}>", escape(value)));
    xml.push('\n');
}

fn tag_values(source: &str, tags: &[&str]) -> Result<HashMap<String, String>, ConfigError> {
    let mut reader = Reader::from_str(source);

    let mut values = HashMap::new();
    // setting element being read, with the text collected so far
    let mut current: Option<(String, String)> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                current = tags
                    .contains(&name.as_str())
                    .then(|| (name, String::new()));
            }
            Ok(Event::Text(text)) => {
                if let Some((_, buf)) = current.as_mut() {
                    let text = text
                        .unescape()
                        .map_err(|e| ConfigError::Xml(e.to_string()))?;
                    buf.push_str(&text);
                }
            }
            Ok(Event::CData(cdata)) => {
                if let Some((_, buf)) = current.as_mut() {
                    let text = String::from_utf8(cdata.into_inner().into_owned())
                        .map_err(|e| ConfigError::Xml(e.to_string()))?;
                    buf.push_str(&text);
                }
            }
            Ok(Event::End(_)) => {
                if let Some((tag, text)) = current.take() {
                    values.entry(tag).or_insert(text);
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(ConfigError::Xml(format!(
                    "error at position {}: {e}",
                    reader.buffer_position()
                )));
            }
        }
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::settings::{ErrorLogCase, NonErrorLogDetail};

    #[test]
    fn test_to_xml() {
        let settings = LogRowSettings::new(ErrorLogCase::First, NonErrorLogDetail::AllDetailed);
        assert_eq!(
            to_xml(&settings),
            "      <errorLogCase>FIRST</errorLogCase>\n      <nonErrorLogDetail>ALL_DETAILED</nonErrorLogDetail>\n"
        );
    }

    #[test]
    fn test_from_step_node() {
        let xml = r#"
            <step>
              <name>Log errors</name>
              <type>LogRowStep</type>
              <errorLogCase>ROW_UNDER_RUN</errorLogCase>
              <nonErrorLogDetail>FIRST_BASIC</nonErrorLogDetail>
            </step>"#;
        let settings = from_xml(xml).unwrap();
        assert_eq!(settings.error_log_case, ErrorLogCase::RowUnderRun);
        assert_eq!(settings.non_error_log_detail, NonErrorLogDetail::FirstBasic);
    }

    #[test]
    fn test_missing_and_empty_tags_keep_defaults() {
        let settings = from_xml("<step><errorLogCase/><nonErrorLogDetail></nonErrorLogDetail></step>").unwrap();
        assert_eq!(settings, LogRowSettings::default());
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let err = from_xml("<errorLogCase>NEVER</errorLogCase>").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref value, .. } if value == "NEVER"));
    }

    #[test]
    fn test_malformed_xml() {
        let err = from_xml("<errorLogCase>ALL</nonErrorLogDetail>").unwrap_err();
        assert!(matches!(err, ConfigError::Xml(_)));
    }

    #[test]
    fn test_cdata_value() {
        let settings = from_xml(
            "<step><errorLogCase><![CDATA[FIRST]]></errorLogCase><nonErrorLogDetail>ALL_BASIC</nonErrorLogDetail></step>",
        )
        .unwrap();
        assert_eq!(settings.error_log_case, ErrorLogCase::First);
        assert_eq!(settings.non_error_log_detail, NonErrorLogDetail::AllBasic);
    }

    #[test]
    fn test_invalid_cdata_value_is_rejected() {
        let err = from_xml(
            "<step><errorLogCase><![CDATA[FIRST]]></errorLogCase><nonErrorLogDetail><![CDATA[BOGUS]]></nonErrorLogDetail></step>",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref value, .. } if value == "BOGUS"));
    }

    #[test]
    fn test_padded_values_are_not_trimmed() {
        let err = from_xml("<errorLogCase> FIRST </errorLogCase>").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref value, .. } if value == " FIRST "));

        let err = from_xml("<nonErrorLogDetail>  </nonErrorLogDetail>").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref value, .. } if value == "  "));
    }

    #[test]
    fn test_round_trip() {
        let settings = LogRowSettings::new(ErrorLogCase::RowUnderRun, NonErrorLogDetail::FirstDetailed);
        assert_eq!(from_xml(&to_xml(&settings)).unwrap(), settings);
    }
}
