#![deny(clippy::all)]
mod error;
pub mod options;
pub mod resources;

pub use crate::{
    error::{Error, Result},
    options::PipelineOptions,
    resources::{
        dataset::{parse_dataset_reference, DatasetReference, Separator},
        subscription::{
            parse_subscription_path_with, MalformedPath, PathGrammar, PubsubPathGrammar,
            SubscriptionPath,
        },
    },
};
