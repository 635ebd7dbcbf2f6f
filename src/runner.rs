use std::process::ExitCode;

use anyhow::Context;

use crate::cli::Cli;
use ct_harvest::config::Config;
use ct_harvest::fetch::HttpFetcher;
use ct_harvest::keyword::{CandidateSelector, ConsoleSelector, FixedSelector};
use ct_harvest::pipeline::{Outcome, Pipeline};

pub async fn run_from_cli(cli: Cli) -> ExitCode {
    let config = match build_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("[!] error occurred: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = ct_harvest::logging::init(&config.log_file, cli.debug, cli.verbose) {
        tracing::warn!("could not open log file {}: {}", config.log_file.display(), e);
    }

    match run(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[!] error occurred: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(p) = cli.policy {
        config.policy = p;
    }
    if let Some(o) = &cli.output {
        config.output_file = o.clone();
    }
    if let Some(l) = &cli.log_file {
        config.log_file = l.clone();
    }
    if let Some(t) = cli.timeout {
        config.timeout_secs = t;
    }
    if let Some(b) = &cli.encyclopedia_base {
        config.encyclopedia_base = b.clone();
    }
    if let Some(b) = &cli.aggregator_base {
        config.aggregator_base = b.clone();
    }
    config.validate()?;
    Ok(config)
}

async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    let target = match cli.target {
        Some(t) => t,
        None => ct_harvest::utils::prompt_line("Target organization name (Chinese)")
            .context("failed to read target name")?,
    };
    let target = target.trim().to_string();
    if target.is_empty() {
        anyhow::bail!("target name is empty");
    }

    let fetcher = HttpFetcher::with_timeout(config.timeout_secs).context("failed to build HTTP client")?;
    let mut selector: Box<dyn CandidateSelector> = match cli.select {
        Some(n) => Box::new(FixedSelector(n)),
        None => Box::new(ConsoleSelector),
    };

    println!("[>] Target: {}", target);
    let mut pipeline = Pipeline::new(&config, &fetcher, selector.as_mut());
    match pipeline.run(&target).await? {
        Outcome::NoEnglishName => {}
        Outcome::Harvested(h) => {
            println!("[+] {} unique names written to {}", h.names.len(), h.output.display());
        }
    }
    Ok(())
}
