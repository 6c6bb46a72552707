use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use crate::error::{Error, Result};

// "{project_id}.{dataset_id}" or "{project_id}:{dataset_id}"
static DATASET_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<PROJECT>[^.:]+)[.:](?P<DATASET>[^.:]+)$")
        .expect("dataset pattern is a valid regex")
});

/// A BigQuery dataset, identified by the project it lives in and its id within that project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase", try_from = "RawDatasetReference")]
pub struct DatasetReference {
    project_id: String,
    dataset_id: String,
}

impl DatasetReference {
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn dataset_id(&self) -> &str {
        &self.dataset_id
    }

    pub fn to_string_with(&self, separator: Separator) -> String {
        format!(
            "{}{}{}",
            self.project_id,
            separator.as_char(),
            self.dataset_id
        )
    }
}

impl FromStr for DatasetReference {
    type Err = Error;

    fn from_str(string: &str) -> Result<Self> {
        let captures =
            DATASET_PATTERN
                .captures(string)
                .ok_or_else(|| Error::BadDatasetReference {
                    input: string.into(),
                })?;
        Ok(DatasetReference {
            project_id: captures["PROJECT"].to_owned(),
            dataset_id: captures["DATASET"].to_owned(),
        })
    }
}

impl Display for DatasetReference {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        write!(
            formatter,
            "{}{}{}",
            self.project_id,
            Separator::Dot.as_char(),
            self.dataset_id
        )
    }
}

/// Parses `project_id.dataset_id` or `project_id:dataset_id`.
pub fn parse_dataset_reference(input: &str) -> Result<DatasetReference> {
    input.parse()
}

/// Character placed between the project and dataset ids.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Separator {
    Dot,
    Colon,
}

impl Separator {
    pub fn as_char(self) -> char {
        match self {
            Separator::Dot => '.',
            Separator::Colon => ':',
        }
    }
}

// Deserialised values go through the parser again, so fields containing a separator are
// rejected exactly like the string form would be.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDatasetReference {
    project_id: String,
    dataset_id: String,
}

impl TryFrom<RawDatasetReference> for DatasetReference {
    type Error = Error;

    fn try_from(raw: RawDatasetReference) -> Result<Self> {
        let joined = format!("{}{}{}", raw.project_id, Separator::Dot.as_char(), raw.dataset_id);
        joined.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_dot_separated() {
        let reference = parse_dataset_reference("myproj.mydata").unwrap();
        assert_eq!(reference.project_id(), "myproj");
        assert_eq!(reference.dataset_id(), "mydata");
    }

    #[test]
    fn test_parse_colon_separated() {
        let reference = parse_dataset_reference("myproj:mydata").unwrap();
        assert_eq!(reference.project_id(), "myproj");
        assert_eq!(reference.dataset_id(), "mydata");
    }

    #[test]
    fn test_separators_are_equivalent() {
        assert_eq!(
            "my-project:events_2023".parse::<DatasetReference>().unwrap(),
            "my-project.events_2023".parse::<DatasetReference>().unwrap()
        );
    }

    #[test]
    fn test_reject_malformed() {
        for input in [
            "", "myproj", "a.b.c", "a:b:c", "a.b:c", "a:b.c", ".b", "a.", ":b", "a:", ".", ":",
            "..",
        ] {
            let error = parse_dataset_reference(input).unwrap_err();
            assert!(error.is_invalid_argument());
            assert_eq!(error.input(), input);
        }
    }

    #[test]
    fn test_error_message_echoes_input() {
        let error = parse_dataset_reference("a.b.c").unwrap_err();
        assert_eq!(
            error.to_string(),
            "input does not match BigQuery dataset pattern, expected 'project_id.dataset_id' or \
             'project_id:dataset_id', got: a.b.c"
        );
    }

    #[test]
    fn test_no_normalisation() {
        let reference = parse_dataset_reference(" My Project.Data Set ").unwrap();
        assert_eq!(reference.project_id(), " My Project");
        assert_eq!(reference.dataset_id(), "Data Set ");

        assert!(parse_dataset_reference("a.b\n").is_ok());
        assert!(parse_dataset_reference("a.b\nc.d").is_err());
    }

    #[test]
    fn test_round_trip_with_original_separator() {
        for (input, separator) in [
            ("proj.data", Separator::Dot),
            ("proj:data", Separator::Colon),
            ("p-1:d_2", Separator::Colon),
        ] {
            let reference = parse_dataset_reference(input).unwrap();
            assert_eq!(reference.to_string_with(separator), input);
        }
    }

    #[test]
    fn test_parse_from_many_threads() {
        let handles: Vec<_> = (0..8)
            .map(|index| {
                std::thread::spawn(move || {
                    parse_dataset_reference(&format!("project-{index}:dataset_{index}")).unwrap()
                })
            })
            .collect();
        for (index, handle) in handles.into_iter().enumerate() {
            let reference = handle.join().unwrap();
            assert_eq!(reference.project_id(), format!("project-{index}"));
            assert_eq!(reference.dataset_id(), format!("dataset_{index}"));
        }
    }

    #[test]
    fn test_display_uses_dot() {
        let reference = parse_dataset_reference("proj:data").unwrap();
        assert_eq!(reference.to_string(), "proj.data");
    }

    #[test]
    fn test_serialize_as_bigquery_reference() {
        let reference = parse_dataset_reference("proj:data").unwrap();
        let json = serde_json::to_value(&reference).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"projectId": "proj", "datasetId": "data"})
        );
        let deserialized: DatasetReference = serde_json::from_value(json).unwrap();
        assert_eq!(deserialized, reference);
    }

    #[test]
    fn test_deserialize_rejects_separator_in_field() {
        let result = serde_json::from_value::<DatasetReference>(
            serde_json::json!({"projectId": "a.b", "datasetId": "c"}),
        );
        let message = result.unwrap_err().to_string();
        assert!(message.contains("got: a.b.c"), "{}", message);
    }
}
