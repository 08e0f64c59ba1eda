//! CLI definitions.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use log::info;
use seti_theme_core::{
    UpdateConfig,
    config::{
        COLOR_VARIABLES_PATH, FONT_MAPPINGS_PATH, ICON_MAPPINGS_PATH, OUTPUT_PATH, SETI_BRANCH,
        SETI_REPO,
    },
    update,
};

#[derive(Parser, Debug)]
#[command(name = "update-icon-theme", version)]
#[command(about = "Regenerate the Seti icon theme JSON from the seti-ui stylesheets")]
pub struct Cli {
    /// Theme JSON to (over)write
    #[arg(short, long, default_value = OUTPUT_PATH)]
    pub output: PathBuf,
    /// Upstream GitHub repository (owner/name)
    #[arg(long, default_value = SETI_REPO)]
    pub repo: String,
    /// Branch the stylesheets are read from
    #[arg(long, default_value = SETI_BRANCH)]
    pub branch: String,
    /// Font mapping stylesheet, also used for the version stamp
    #[arg(long, default_value = FONT_MAPPINGS_PATH)]
    pub font_mappings: String,
    /// Icon mapping stylesheet
    #[arg(long, default_value = ICON_MAPPINGS_PATH)]
    pub icon_mappings: String,
    /// Color variables stylesheet
    #[arg(long, default_value = COLOR_VARIABLES_PATH)]
    pub color_variables: String,
}

impl Cli {
    pub fn config(&self) -> Result<UpdateConfig> {
        match self.repo.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {}
            _ => bail!("Invalid repository '{}'. Expected owner/name.", self.repo),
        }

        Ok(UpdateConfig {
            repo: self.repo.clone(),
            branch: self.branch.clone(),
            font_mappings_path: self.font_mappings.clone(),
            icon_mappings_path: self.icon_mappings.clone(),
            color_variables_path: self.color_variables.clone(),
            output: self.output.clone(),
        })
    }

    /// Run the update. Pipeline failures are logged, never returned.
    pub fn run(self) -> Result<()> {
        let config = self.config()?;
        if let Some(outcome) = update(&config) {
            info!(
                "Wrote {} icon definitions to {}",
                outcome.theme.icon_definitions.len(),
                outcome.output.display()
            );
        }
        Ok(())
    }
}
