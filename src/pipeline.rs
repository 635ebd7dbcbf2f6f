//! Target name → English name → keyword → certificate names → output file.
//!
//! Stages run strictly one after another; the first failure ends the run.

use std::collections::HashSet;
use std::fmt;
use std::io::Write;
use std::path::PathBuf;

use crate::config::Config;
use crate::discover::{crtsh, encyclopedia};
use crate::error::HarvestError;
use crate::fetch::HttpFetch;
use crate::keyword::{resolve_keyword, CandidateSelector, KeywordPolicy};
use crate::output;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    Fetched,
    Extracted,
    Resolved,
    Searched,
    Parsed,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::Start => "start",
            Stage::Fetched => "fetched",
            Stage::Extracted => "extracted",
            Stage::Resolved => "resolved",
            Stage::Searched => "searched",
            Stage::Parsed => "parsed",
            Stage::Done => "done",
        };
        f.write_str(s)
    }
}

#[derive(Debug)]
pub struct Harvest {
    pub english_name: String,
    pub keyword: String,
    pub names: HashSet<String>,
    pub output: PathBuf,
}

#[derive(Debug)]
pub enum Outcome {
    /// The encyclopedia page carried no English-language element; nothing was searched.
    NoEnglishName,
    Harvested(Harvest),
}

pub struct Pipeline<'a> {
    encyclopedia_base: String,
    aggregator_base: String,
    output_file: PathBuf,
    policy: KeywordPolicy,
    fetcher: &'a dyn HttpFetch,
    selector: &'a mut dyn CandidateSelector,
    console: Box<dyn Write + 'a>,
}

impl<'a> Pipeline<'a> {
    pub fn new(config: &Config, fetcher: &'a dyn HttpFetch, selector: &'a mut dyn CandidateSelector) -> Self {
        Self {
            encyclopedia_base: config.encyclopedia_base.clone(),
            aggregator_base: config.aggregator_base.clone(),
            output_file: config.output_file.clone(),
            policy: config.policy,
            fetcher,
            selector,
            console: Box::new(std::io::stdout()),
        }
    }

    /// Send progress messages and the name list to `out` instead of stdout.
    pub fn with_console<W: Write + 'a>(mut self, out: W) -> Self {
        self.console = Box::new(out);
        self
    }

    /// Discard progress messages and the name list.
    pub fn quiet(self) -> Self {
        self.with_console(std::io::sink())
    }

    fn say(&mut self, args: fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.console, "{}", args) {
            tracing::warn!("failed to write console message: {}", e);
        }
    }

    pub async fn run(&mut self, target_name: &str) -> Result<Outcome, HarvestError> {
        let mut stage = Stage::Start;
        tracing::info!(target = %target_name, policy = ?self.policy, "starting harvest");

        let page_url = encyclopedia::page_url(&self.encyclopedia_base, target_name);
        let page = self.fetcher.get_text(&page_url).await.map_err(HarvestError::Page)?;
        advance(&mut stage, Stage::Fetched);

        let english_name = encyclopedia::extract_english_name(&page);
        drop(page);
        advance(&mut stage, Stage::Extracted);

        let Some(english_name) = english_name else {
            tracing::info!("no English name on {}", page_url);
            self.say(format_args!("[-] No English name found."));
            return Ok(Outcome::NoEnglishName);
        };

        let Some(keyword) = resolve_keyword(&english_name, self.policy, &mut *self.selector) else {
            self.say(format_args!("[-] No English name found."));
            return Ok(Outcome::NoEnglishName);
        };
        advance(&mut stage, Stage::Resolved);
        self.say(format_args!("[*] English name: {}", english_name));
        self.say(format_args!("[*] Search keyword: {}", keyword));

        let search_url = crtsh::search_url(&self.aggregator_base, &keyword);
        let raw = self.fetcher.get_text(&search_url).await.map_err(HarvestError::Search)?;
        advance(&mut stage, Stage::Searched);

        let names = crtsh::build_name_set(&raw)?;
        advance(&mut stage, Stage::Parsed);
        if names.is_empty() {
            self.say(format_args!("[-] No data found for keyword {}", keyword));
        }

        if let Err(e) = output::write_name_list(&self.output_file, &names) {
            let path = self.output_file.display().to_string();
            tracing::error!("failed to write {}: {}", path, e);
            return Err(HarvestError::Output { path, source: e });
        }
        if let Err(e) = output::display_names(&mut self.console, &names) {
            tracing::warn!("failed to print name list: {}", e);
        }
        advance(&mut stage, Stage::Done);
        tracing::info!(count = names.len(), output = %self.output_file.display(), "harvest complete");

        Ok(Outcome::Harvested(Harvest {
            english_name,
            keyword,
            names,
            output: self.output_file.clone(),
        }))
    }
}

fn advance(stage: &mut Stage, next: Stage) {
    tracing::debug!(from = %stage, to = %next, "pipeline transition");
    *stage = next;
}
