#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::Parser;
use fitcalc::batch::{self, ErrorPolicy};
use fitcalc::{cli, types::Package, utils};

#[macro_use]
extern crate fitcalc;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    let packages = match &cli.packages {
        Some(path) => utils::load_packages(path)?,
        None => Package::samples(),
    };

    let policy = if cli.fail_fast {
        ErrorPolicy::FailFast
    } else {
        ErrorPolicy::Continue
    };
    dlog!(
        "mode=summarize packages={} format={:?} policy={:?}",
        packages.len(),
        cli.format,
        policy
    );

    let report = batch::process(&packages, policy)?;

    match cli.format {
        cli::OutputFormat::Text => {
            for summary in &report.summaries {
                println!("{}", summary.render());
            }
        }
        cli::OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report.summaries)?);
        }
    }

    if !report.rejected.is_empty() {
        anyhow::bail!(
            "{} of {} packages rejected",
            report.rejected.len(),
            report.total()
        );
    }

    Ok(())
}
