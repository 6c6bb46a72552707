use anyhow::{Context, Result};
use dataflow_options::{DatasetReference, SubscriptionPath};
use log::debug;
use structopt::StructOpt;

use crate::printer::Printer;

#[derive(Debug, StructOpt)]
pub enum ParseArgs {
    #[structopt(name = "dataset")]
    /// Parse a BigQuery dataset reference, `project_id.dataset_id` or `project_id:dataset_id`
    Dataset {
        /// The raw option value
        input: String,
    },

    #[structopt(name = "subscription")]
    /// Parse a Pub/Sub subscription path, `projects/<project>/subscriptions/<name>`
    Subscription {
        /// The raw option value
        input: String,
    },
}

pub fn run(args: &ParseArgs, printer: &Printer) -> Result<()> {
    match args {
        ParseArgs::Dataset { input } => {
            let dataset = input
                .parse::<DatasetReference>()
                .context("Invalid dataset option")?;
            debug!(
                "Dataset `{}` is in project `{}`",
                dataset.dataset_id(),
                dataset.project_id()
            );
            printer.print_resources(&[dataset])
        }
        ParseArgs::Subscription { input } => {
            let subscription = input
                .parse::<SubscriptionPath>()
                .context("Invalid subscription option")?;
            debug!("Subscription full path is `{}`", subscription.full_path());
            printer.print_resources(&[subscription])
        }
    }
}
