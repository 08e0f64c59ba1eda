//! Configuration constants for the Seti icon theme update.

use std::path::PathBuf;

/// Upstream repository the stylesheets and commit metadata come from.
pub const SETI_REPO: &str = "jesseweed/seti-ui";

/// Branch the raw stylesheets are read from.
pub const SETI_BRANCH: &str = "master";

/// Stylesheet whose last commit stamps the theme version.
pub const FONT_MAPPINGS_PATH: &str = "styles/_fonts/seti.less";

/// Stylesheet binding extensions and file names to glyphs.
pub const ICON_MAPPINGS_PATH: &str = "styles/icons/mapping.less";

/// Stylesheet defining the color variables.
pub const COLOR_VARIABLES_PATH: &str = "styles/ui-variables.less";

/// Default theme output, relative to the working directory.
pub const OUTPUT_PATH: &str = "./icons/seti-icon-theme.json";

/// Sent with every request; the GitHub API rejects anonymous agents.
pub const USER_AGENT: &str = "NodeJS";

const RAW_BASE_URL: &str = "https://raw.githubusercontent.com";
const API_BASE_URL: &str = "https://api.github.com";
const WEB_BASE_URL: &str = "https://github.com";

/// Everything one update run needs to know about its upstream and output.
#[derive(Debug, Clone)]
pub struct UpdateConfig {
    pub repo: String,
    pub branch: String,
    pub font_mappings_path: String,
    pub icon_mappings_path: String,
    pub color_variables_path: String,
    pub output: PathBuf,
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self {
            repo: SETI_REPO.to_string(),
            branch: SETI_BRANCH.to_string(),
            font_mappings_path: FONT_MAPPINGS_PATH.to_string(),
            icon_mappings_path: ICON_MAPPINGS_PATH.to_string(),
            color_variables_path: COLOR_VARIABLES_PATH.to_string(),
            output: PathBuf::from(OUTPUT_PATH),
        }
    }
}

impl UpdateConfig {
    fn raw_url(&self, path: &str) -> String {
        format!("{RAW_BASE_URL}/{}/{}/{path}", self.repo, self.branch)
    }

    pub fn font_mappings_url(&self) -> String {
        self.raw_url(&self.font_mappings_path)
    }

    pub fn icon_mappings_url(&self) -> String {
        self.raw_url(&self.icon_mappings_path)
    }

    pub fn color_variables_url(&self) -> String {
        self.raw_url(&self.color_variables_path)
    }

    /// Commit listing for the font stylesheet, newest first.
    pub fn commits_url(&self) -> String {
        format!("{API_BASE_URL}/repos/{}/commits?path={}", self.repo, self.font_mappings_path)
    }

    /// Browsable commit page; `sha` is `undefined` when metadata was unavailable.
    pub fn commit_page_url(&self, sha: &str) -> String {
        format!("{WEB_BASE_URL}/{}/commit/{sha}", self.repo)
    }
}
