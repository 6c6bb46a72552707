use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

/// Raw option values as stored in the options file. Values are kept as the user wrote
/// them and only parsed once flags and file have been merged.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OptionsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription: Option<String>,
}

impl OptionsConfig {
    /// Values in `overrides` take precedence over the ones in `self`.
    pub fn merge(&self, overrides: &OptionsConfig) -> OptionsConfig {
        OptionsConfig {
            dataset: overrides.dataset.clone().or_else(|| self.dataset.clone()),
            subscription: overrides
                .subscription
                .clone()
                .or_else(|| self.subscription.clone()),
        }
    }
}

pub fn read_options_config(path: impl AsRef<Path>) -> Result<OptionsConfig> {
    debug!("Reading options file at `{}`", path.as_ref().display());
    if path.as_ref().exists() {
        let file = File::open(&path).with_context(|| {
            format!("Could not open options file `{}`", path.as_ref().display())
        })?;
        let config_reader = BufReader::new(file);
        serde_json::from_reader(config_reader)
            .with_context(|| format!("Could not parse options file `{}`", path.as_ref().display()))
    } else {
        Ok(Default::default())
    }
}

pub fn write_options_config(path: impl AsRef<Path>, config: &OptionsConfig) -> Result<()> {
    debug!("Writing options file at `{}`", path.as_ref().display());
    let file = File::create(&path).with_context(|| {
        format!("Could not create options file `{}`", path.as_ref().display())
    })?;
    let config_writer = BufWriter::new(file);
    serde_json::to_writer_pretty(config_writer, &config).with_context(|| {
        format!(
            "Could not serialise options to `{}`",
            path.as_ref().display()
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_merge_prefers_overrides() {
        let file = OptionsConfig {
            dataset: Some("file.dataset".into()),
            subscription: Some("projects/file/subscriptions/sub".into()),
        };
        let flags = OptionsConfig {
            dataset: Some("flag.dataset".into()),
            subscription: None,
        };
        assert_eq!(
            file.merge(&flags),
            OptionsConfig {
                dataset: Some("flag.dataset".into()),
                subscription: Some("projects/file/subscriptions/sub".into()),
            }
        );
    }

    #[test]
    fn test_missing_fields_default_to_none() {
        let config: OptionsConfig = serde_json::from_str(r#"{"dataset": "p.d"}"#).unwrap();
        assert_eq!(config.dataset.as_deref(), Some("p.d"));
        assert_eq!(config.subscription, None);
    }

    #[test]
    fn test_missing_file_is_empty_config() {
        let path = std::env::temp_dir().join("dataflow-options-does-not-exist.json");
        assert_eq!(read_options_config(path).unwrap(), OptionsConfig::default());
    }
}
