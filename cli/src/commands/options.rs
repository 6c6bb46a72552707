use anyhow::{anyhow, Context, Result};
use dataflow_options::PipelineOptions;
use log::info;
use std::path::Path;
use structopt::StructOpt;

use crate::{
    config::{self, OptionsConfig},
    printer::Printer,
};

#[derive(Debug, StructOpt)]
pub enum OptionsArgs {
    #[structopt(name = "show")]
    /// Resolve and validate the pipeline options, then display them
    Show,

    #[structopt(name = "write")]
    /// Resolve and validate the pipeline options, then store them in the options file
    Write,
}

pub fn run(
    args: &OptionsArgs,
    options_config: &OptionsConfig,
    options_path: impl AsRef<Path>,
    printer: &Printer,
) -> Result<()> {
    let options = resolve(options_config)?;
    match args {
        OptionsArgs::Show => printer.print_resources(&[options]),
        OptionsArgs::Write => {
            config::write_options_config(&options_path, options_config)?;
            info!(
                "Options for dataset `{}` written to `{}`.",
                options.dataset,
                options_path.as_ref().display()
            );
            Ok(())
        }
    }
}

/// Parse the merged raw values into typed pipeline options.
pub fn resolve(options_config: &OptionsConfig) -> Result<PipelineOptions> {
    let dataset = options_config.dataset.as_deref().ok_or_else(|| {
        anyhow!("No dataset configured. Pass `--dataset` or set `dataset` in the options file.")
    })?;
    let subscription = options_config.subscription.as_deref().ok_or_else(|| {
        anyhow!(
            "No subscription configured. Pass `--subscription` or set `subscription` in the \
             options file."
        )
    })?;
    PipelineOptions::parse(dataset, subscription).context("Invalid pipeline options")
}
