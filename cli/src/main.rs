#![deny(clippy::all)]

mod args;
mod commands;
mod config;
mod printer;
mod utils;

use anyhow::{Context, Result};
use log::{error, warn};
use std::{fs, io, path::PathBuf, process};
use structopt::{clap::Shell as ClapShell, StructOpt};

use crate::{
    args::{Args, Command, Shell},
    commands::{options, parse},
    printer::Printer,
    utils::io::init_env_logger,
};

fn run(args: Args) -> Result<()> {
    let printer = Printer::new(args.output);

    match &args.command {
        Command::Completion { shell } => {
            let mut app = Args::clap();
            let clap_shell = match shell {
                Shell::Zsh => ClapShell::Zsh,
                Shell::Bash => ClapShell::Bash,
            };
            app.gen_completions_to("dfo", clap_shell, &mut io::stdout());
            Ok(())
        }
        Command::Parse { parse_args } => parse::run(parse_args, &printer),
        Command::Options { options_args } => {
            let options_path = find_options_file(&args)?;
            let options_config = config::read_options_config(&options_path)?
                .merge(&args.option_overrides());
            options::run(options_args, &options_config, options_path, &printer)
        }
    }
}

fn find_options_file(args: &Args) -> Result<PathBuf> {
    let options_path = if let Some(options_path) = args.options_file.clone() {
        if !options_path.exists() {
            warn!(
                "Options file `{}` doesn't exist.",
                options_path.display()
            );
        }
        options_path
    } else {
        let mut options_path =
            dirs::config_dir().context("Could not get path to the user's config directory")?;
        options_path.push("dataflow-options");
        fs::create_dir_all(&options_path).with_context(|| {
            format!(
                "Could not create config directory {}",
                options_path.display()
            )
        })?;
        options_path.push("options.json");
        options_path
    };
    Ok(options_path)
}

fn main() {
    let args = Args::from_args();
    init_env_logger(args.verbose);

    if let Err(error) = run(args) {
        error!("An error occurred:");
        for cause in error.chain() {
            error!(" |- {cause}");
        }

        #[cfg(feature = "backtrace")]
        {
            error!("{}", error.backtrace());
        }

        process::exit(1);
    }
}
