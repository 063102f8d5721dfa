use super::xml::{from_xml, to_xml};
use crate::error::ConfigError;
use model::{core::identifiers::StepId, settings::LogRowSettings};
use std::collections::HashMap;
use tracing::debug;

/// Attribute under which the XML step fragment is stored.
pub const STEP_XML_ATTRIBUTE: &str = "step-xml";

/// Attribute storage of a pipeline repository.
pub trait StepRepository {
    fn step_attribute(&self, step: &StepId, name: &str) -> Result<Option<String>, ConfigError>;

    fn save_step_attribute(
        &mut self,
        step: &StepId,
        name: &str,
        value: &str,
    ) -> Result<(), ConfigError>;
}

/// Store the settings of `step` as its XML fragment.
pub fn save_rep<R>(repo: &mut R, step: &StepId, settings: &LogRowSettings) -> Result<(), ConfigError>
where
    R: StepRepository + ?Sized,
{
    repo.save_step_attribute(step, STEP_XML_ATTRIBUTE, &to_xml(settings))
}

/// Read the settings of `step`. A step with no stored fragment gets the
/// defaults.
pub fn read_rep<R>(repo: &R, step: &StepId) -> Result<LogRowSettings, ConfigError>
where
    R: StepRepository + ?Sized,
{
    match repo.step_attribute(step, STEP_XML_ATTRIBUTE)? {
        Some(xml) if !xml.trim().is_empty() => from_xml(&xml),
        _ => {
            debug!(step = %step, "No stored settings, using defaults");
            Ok(LogRowSettings::default())
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryRepository {
    attributes: HashMap<(StepId, String), String>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StepRepository for MemoryRepository {
    fn step_attribute(&self, step: &StepId, name: &str) -> Result<Option<String>, ConfigError> {
        Ok(self.attributes.get(&(step.clone(), name.to_string())).cloned())
    }

    fn save_step_attribute(
        &mut self,
        step: &StepId,
        name: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        self.attributes
            .insert((step.clone(), name.to_string()), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::settings::{ErrorLogCase, NonErrorLogDetail};

    #[test]
    fn test_save_and_read() {
        let mut repo = MemoryRepository::new();
        let step = StepId::from("step-1");
        let settings = LogRowSettings::new(ErrorLogCase::First, NonErrorLogDetail::AllBasic);

        save_rep(&mut repo, &step, &settings).unwrap();

        let stored = repo.step_attribute(&step, STEP_XML_ATTRIBUTE).unwrap().unwrap();
        assert!(stored.contains("<errorLogCase>FIRST</errorLogCase>"));
        assert_eq!(read_rep(&repo, &step).unwrap(), settings);
    }

    #[test]
    fn test_unknown_step_reads_defaults() {
        let repo = MemoryRepository::new();
        let settings = read_rep(&repo, &StepId::from("missing")).unwrap();
        assert_eq!(settings, LogRowSettings::default());
    }

    #[test]
    fn test_empty_attribute_reads_defaults() {
        let mut repo = MemoryRepository::new();
        let step = StepId::from("step-2");
        repo.save_step_attribute(&step, STEP_XML_ATTRIBUTE, "").unwrap();
        assert_eq!(read_rep(&repo, &step).unwrap(), LogRowSettings::default());
    }

    #[test]
    fn test_invalid_stored_value_fails() {
        let mut repo = MemoryRepository::new();
        let step = StepId::from("step-3");
        repo.save_step_attribute(
            &step,
            STEP_XML_ATTRIBUTE,
            "<nonErrorLogDetail>LOUD</nonErrorLogDetail>",
        )
        .unwrap();
        assert!(matches!(
            read_rep(&repo, &step),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
