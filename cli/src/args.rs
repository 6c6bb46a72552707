use crate::{
    commands::{options::OptionsArgs, parse::ParseArgs},
    config::OptionsConfig,
    printer::OutputFormat,
};
use anyhow::{anyhow, Error, Result};
use std::{path::PathBuf, str::FromStr};
use structopt::StructOpt;

/// dfo validates the option values handed to the dataflow sample pipeline.
#[derive(Debug, StructOpt)]
#[structopt(
    global_settings = &[
        structopt::clap::AppSettings::ColoredHelp,
        structopt::clap::AppSettings::InferSubcommands,
    ]
)]
pub struct Args {
    #[structopt(long = "options-file", parse(from_os_str))]
    /// Path to the options file. Typically defaults to ~/.config/dataflow-options/options.json
    /// on Linux.
    pub options_file: Option<PathBuf>,

    #[structopt(short = "v", long = "verbose")]
    /// Enable more verbose logging.
    pub verbose: bool,

    #[structopt(short = "o", long = "output", default_value = "table")]
    /// Output format. One of: table, json.
    pub output: OutputFormat,

    #[structopt(long = "dataset")]
    /// BigQuery dataset as `project_id.dataset_id` or `project_id:dataset_id`. Overrides the
    /// one from the options file, if any.
    pub dataset: Option<String>,

    #[structopt(long = "subscription")]
    /// Pub/Sub subscription as `projects/<project>/subscriptions/<name>`. Overrides the one
    /// from the options file, if any.
    pub subscription: Option<String>,

    #[structopt(subcommand)]
    pub command: Command,
}

impl Args {
    /// Option values given directly on the command line.
    pub fn option_overrides(&self) -> OptionsConfig {
        OptionsConfig {
            dataset: self.dataset.clone(),
            subscription: self.subscription.clone(),
        }
    }
}

#[derive(Debug, StructOpt)]
pub enum Command {
    #[structopt(name = "completion")]
    /// Output shell completion code for the specified shell (bash or zsh)
    Completion { shell: Shell },

    #[structopt(name = "options")]
    /// Show or store the pipeline options resolved from flags and the options file
    Options {
        #[structopt(subcommand)]
        options_args: OptionsArgs,
    },

    #[structopt(name = "parse")]
    /// Parse a single option value and display its components
    Parse {
        #[structopt(subcommand)]
        parse_args: ParseArgs,
    },
}

#[derive(Debug)]
pub enum Shell {
    Bash,
    Zsh,
}

impl FromStr for Shell {
    type Err = Error;

    fn from_str(string: &str) -> Result<Self> {
        match string {
            "bash" => Ok(Shell::Bash),
            "zsh" => Ok(Shell::Zsh),
            _ => Err(anyhow!("unknown shell: '{}'", string)),
        }
    }
}
