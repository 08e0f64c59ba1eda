//! Pipeline stages. Each takes the previous stages' records and returns a new one.

use std::time::Instant;

use log::debug;

use crate::{
    config::UpdateConfig,
    error::Result,
    extract::{ColorTable, GlyphTable, IconMappings},
    fetch::Fetch,
    io::write_theme,
    theme::{IconTheme, assemble},
    version::{CommitInfo, latest_commit, version_url},
};

pub(super) fn run_stage<T>(name: &str, f: impl FnOnce() -> Result<T>) -> Result<T> {
    let start = Instant::now();
    let value = f()?;
    debug!("{name} ({:.2}s)", start.elapsed().as_secs_f64());
    Ok(value)
}

pub(super) fn stage_glyphs(fetcher: &impl Fetch, config: &UpdateConfig) -> Result<GlyphTable> {
    let url = config.font_mappings_url();
    println!("Reading from {url}");
    Ok(GlyphTable::parse(&fetcher.fetch(&url)?))
}

pub(super) fn stage_mappings(fetcher: &impl Fetch, config: &UpdateConfig) -> Result<IconMappings> {
    Ok(IconMappings::parse(&fetcher.fetch(&config.icon_mappings_url())?))
}

pub(super) fn stage_colors(fetcher: &impl Fetch, config: &UpdateConfig) -> Result<ColorTable> {
    Ok(ColorTable::parse(&fetcher.fetch(&config.color_variables_url())?))
}

pub(super) fn stage_commit(fetcher: &impl Fetch, config: &UpdateConfig) -> Option<CommitInfo> {
    latest_commit(fetcher, config)
}

pub(super) fn stage_write(
    config: &UpdateConfig,
    glyphs: &GlyphTable,
    mappings: &IconMappings,
    colors: &ColorTable,
    commit: Option<&CommitInfo>,
) -> Result<IconTheme> {
    let theme = assemble(glyphs, mappings, colors, version_url(config, commit));
    write_theme(&config.output, &theme)?;
    Ok(theme)
}
