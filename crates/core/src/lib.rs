//! Seti icon theme core: fetch the seti-ui stylesheets, extract glyphs,
//! associations and colors, and write the icon theme JSON.

pub mod color;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod io;
pub mod pipeline;
pub mod theme;
pub mod version;

pub use color::invert_color;
pub use config::UpdateConfig;
pub use error::{Error, Result};
pub use extract::{ColorTable, GlyphTable, IconMappings};
pub use fetch::{Fetch, HttpFetcher};
pub use io::{ThemeFile, render_theme, write_theme};
pub use pipeline::{Outcome, try_update, update, update_with};
pub use theme::{IconDefinition, IconTheme, assemble};
pub use version::{CommitInfo, latest_commit};
