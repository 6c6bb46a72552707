use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    resources::{dataset::DatasetReference, subscription::SubscriptionPath},
};

/// The validated option values a pipeline needs at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PipelineOptions {
    pub dataset: DatasetReference,
    pub subscription: SubscriptionPath,
}

impl PipelineOptions {
    /// Parse raw option strings. The dataset is validated first, so when both values are
    /// malformed the dataset error is the one reported.
    pub fn parse(dataset: &str, subscription: &str) -> Result<Self> {
        let dataset = dataset.parse::<DatasetReference>()?;
        let subscription = subscription.parse::<SubscriptionPath>()?;
        debug!("Parsed pipeline options: dataset `{dataset}`, subscription `{subscription}`");
        Ok(PipelineOptions {
            dataset,
            subscription,
        })
    }
}
