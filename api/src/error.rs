use crate::resources::subscription::MalformedPath;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(
        "input does not match BigQuery dataset pattern, expected 'project_id.dataset_id' or 'project_id:dataset_id', got: {}",
        input
    )]
    BadDatasetReference { input: String },

    #[error("error parsing '{}' into {}: {}", input, target, source)]
    BadSubscriptionPath {
        input: String,
        target: &'static str,
        #[source]
        source: MalformedPath,
    },
}

impl Error {
    /// Every error raised while parsing an option value is a malformed argument. Hosting
    /// option systems use this to decide whether to abort startup with the message.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::BadDatasetReference { .. } | Error::BadSubscriptionPath { .. }
        )
    }

    /// The raw option value that was rejected.
    pub fn input(&self) -> &str {
        match self {
            Error::BadDatasetReference { input } | Error::BadSubscriptionPath { input, .. } => {
                input
            }
        }
    }
}
