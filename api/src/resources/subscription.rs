use log::debug;
use serde::{Deserialize, Serialize};
use std::{
    any::type_name,
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use crate::error::{Error, Result};

const PROJECTS_COLLECTION: &str = "projects";
const SUBSCRIPTIONS_COLLECTION: &str = "subscriptions";

/// Failure reported by a [`PathGrammar`] for a string that is not a subscription path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", message)]
pub struct MalformedPath {
    pub message: String,
}

impl MalformedPath {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    fn for_path(path: &str) -> Self {
        Self::new(format!("Malformed subscription path {path}"))
    }
}

/// A fully qualified Pub/Sub subscription, `projects/{project}/subscriptions/{subscription}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct SubscriptionPath {
    project: String,
    subscription: String,
}

impl SubscriptionPath {
    /// Builds a path from its components. Components must be non-empty and must not contain
    /// `/`, otherwise the path would not parse back into the same value.
    pub fn from_parts(
        project: impl Into<String>,
        subscription: impl Into<String>,
    ) -> std::result::Result<Self, MalformedPath> {
        let project = project.into();
        let subscription = subscription.into();
        if !is_valid_segment(&project) || !is_valid_segment(&subscription) {
            return Err(MalformedPath::new(format!(
                "Invalid subscription path components: project '{project}', subscription '{subscription}'"
            )));
        }
        Ok(Self {
            project,
            subscription,
        })
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn subscription(&self) -> &str {
        &self.subscription
    }

    /// The canonical `projects/{project}/subscriptions/{subscription}` form.
    pub fn path(&self) -> String {
        self.to_string()
    }

    /// The legacy `/subscriptions/{project}/{subscription}` form.
    pub fn full_path(&self) -> String {
        format!(
            "/{SUBSCRIPTIONS_COLLECTION}/{}/{}",
            self.project, self.subscription
        )
    }
}

impl FromStr for SubscriptionPath {
    type Err = Error;

    fn from_str(string: &str) -> Result<Self> {
        parse_subscription_path_with(&PubsubPathGrammar, string)
    }
}

impl Display for SubscriptionPath {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        write!(
            formatter,
            "{PROJECTS_COLLECTION}/{}/{SUBSCRIPTIONS_COLLECTION}/{}",
            self.project, self.subscription
        )
    }
}

impl TryFrom<String> for SubscriptionPath {
    type Error = Error;

    fn try_from(string: String) -> Result<Self> {
        string.parse()
    }
}

impl From<SubscriptionPath> for String {
    fn from(path: SubscriptionPath) -> Self {
        path.to_string()
    }
}

/// Recognises subscription path strings.
pub trait PathGrammar {
    fn parse_subscription_path(
        &self,
        path: &str,
    ) -> std::result::Result<SubscriptionPath, MalformedPath>;
}

impl<F> PathGrammar for F
where
    F: Fn(&str) -> std::result::Result<SubscriptionPath, MalformedPath>,
{
    fn parse_subscription_path(
        &self,
        path: &str,
    ) -> std::result::Result<SubscriptionPath, MalformedPath> {
        self(path)
    }
}

/// The Pub/Sub resource name grammar: `projects/{project}/subscriptions/{subscription}`.
#[derive(Copy, Clone, Debug, Default)]
pub struct PubsubPathGrammar;

impl PathGrammar for PubsubPathGrammar {
    fn parse_subscription_path(
        &self,
        path: &str,
    ) -> std::result::Result<SubscriptionPath, MalformedPath> {
        let mut splits = path.split('/');
        match (
            splits.next(),
            splits.next(),
            splits.next(),
            splits.next(),
            splits.next(),
        ) {
            (
                Some(PROJECTS_COLLECTION),
                Some(project),
                Some(SUBSCRIPTIONS_COLLECTION),
                Some(subscription),
                None,
            ) if !project.is_empty() && !subscription.is_empty() => {
                SubscriptionPath::from_parts(project, subscription)
            }
            _ => Err(MalformedPath::for_path(path)),
        }
    }
}

/// Parses `input` with `grammar`, reporting failures as an invalid argument which keeps the
/// grammar's own explanation.
pub fn parse_subscription_path_with(
    grammar: &impl PathGrammar,
    input: &str,
) -> Result<SubscriptionPath> {
    grammar.parse_subscription_path(input).map_err(|source| {
        debug!("Subscription path grammar rejected `{input}`: {source}");
        Error::BadSubscriptionPath {
            input: input.into(),
            target: type_name::<SubscriptionPath>(),
            source,
        }
    })
}

fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty() && !segment.contains('/')
}
