//! The update pipeline: three stylesheet fetches, commit metadata, theme write.
//!
//! Stages run strictly in order. A failed stylesheet fetch stops the run
//! before anything is written; missing commit metadata only degrades the
//! version string.

mod steps;

use std::path::PathBuf;

use log::error;

use crate::{
    config::UpdateConfig,
    error::Result,
    fetch::{Fetch, HttpFetcher},
    theme::IconTheme,
    version::CommitInfo,
};
use steps::{run_stage, stage_colors, stage_commit, stage_glyphs, stage_mappings, stage_write};

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub output: PathBuf,
    pub theme: IconTheme,
    pub commit: Option<CommitInfo>,
}

/// Run the pipeline, returning the first fatal error.
pub fn try_update(fetcher: &impl Fetch, config: &UpdateConfig) -> Result<Outcome> {
    let glyphs = run_stage("font mappings", || stage_glyphs(fetcher, config))?;
    let mappings = run_stage("icon mappings", || stage_mappings(fetcher, config))?;
    let colors = run_stage("color variables", || stage_colors(fetcher, config))?;
    let commit = stage_commit(fetcher, config);
    let theme = run_stage("write theme", || {
        stage_write(config, &glyphs, &mappings, &colors, commit.as_ref())
    })?;

    if let Some(info) = &commit {
        println!("Updated to {}@{} ({})", config.repo, info.short_sha(), info.short_date());
    }

    Ok(Outcome { output: config.output.clone(), theme, commit })
}

/// Run the pipeline with `fetcher`, logging a failure instead of returning it.
pub fn update_with(fetcher: &impl Fetch, config: &UpdateConfig) -> Option<Outcome> {
    match try_update(fetcher, config) {
        Ok(outcome) => Some(outcome),
        Err(e) => {
            error!("{e}");
            None
        }
    }
}

/// Fetch everything over HTTP and write the theme. Failures are logged.
pub fn update(config: &UpdateConfig) -> Option<Outcome> {
    match HttpFetcher::new() {
        Ok(fetcher) => update_with(&fetcher, config),
        Err(e) => {
            error!("{e}");
            None
        }
    }
}
