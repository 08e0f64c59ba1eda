//! End-to-end runs of the update pipeline against canned upstream responses.

use std::{collections::HashMap, fs::read_to_string, path::Path};

use seti_theme_core::{Error, Fetch, IconTheme, Result, UpdateConfig, try_update, update_with};

const SETI_LESS: &str = r"
@import 'variables';

@default: '\E023';
@javascript: '\E04E';
@json: '\E04B';
@makefile: '\E051';
@license: '\E04A';
";

const MAPPING_LESS: &str = r"
.icon-set('.js', 'javascript', @yellow);
.icon-set('.json', 'json', @yellow);
.icon-partial('Makefile', 'makefile', @orange);
.icon-set('LICENSE', 'license', @license-color);
";

const UI_VARIABLES_LESS: &str = r"
@blue: #519aba;
@yellow: #cbcb41;
@orange: #e37933;
@white: #ffffff;
";

const COMMITS_JSON: &str = r#"[
    {
        "sha": "0d0f7d3ab4e1c4c0cbb3bd4a2a0b4c1d2e3f4a5b",
        "commit": { "author": { "name": "Jesse", "date": "2020-06-01T10:00:00Z" } }
    }
]"#;

/// Serves canned bodies by URL; anything else is a transport failure.
#[derive(Default)]
struct StubFetcher {
    bodies: HashMap<String, String>,
}

impl StubFetcher {
    fn upstream(config: &UpdateConfig) -> Self {
        Self::default()
            .with(config.font_mappings_url(), SETI_LESS)
            .with(config.icon_mappings_url(), MAPPING_LESS)
            .with(config.color_variables_url(), UI_VARIABLES_LESS)
    }

    fn with(mut self, url: String, body: &str) -> Self {
        self.bodies.insert(url, body.to_string());
        self
    }
}

impl Fetch for StubFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        self.bodies.get(url).cloned().ok_or_else(|| Error::Transport {
            url: url.to_string(),
            message: "connection refused".to_string(),
        })
    }
}

fn config_in(dir: &Path) -> UpdateConfig {
    UpdateConfig { output: dir.join("icons").join("seti-icon-theme.json"), ..Default::default() }
}

fn read_theme(path: &Path) -> IconTheme {
    serde_json::from_str(&read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_full_update() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let fetcher = StubFetcher::upstream(&config).with(config.commits_url(), COMMITS_JSON);

    let outcome = try_update(&fetcher, &config).unwrap();
    let theme = read_theme(&config.output);

    assert_eq!(outcome.theme, theme);
    assert_eq!(outcome.commit.unwrap().short_sha(), "0d0f7d3");
    assert_eq!(
        theme.version,
        "https://github.com/jesseweed/seti-ui/commit/0d0f7d3ab4e1c4c0cbb3bd4a2a0b4c1d2e3f4a5b"
    );

    assert_eq!(theme.file_extensions["js"], "_javascript");
    assert_eq!(theme.light.file_extensions["js"], "_javascript_light");
    assert_eq!(theme.file_names["Makefile"], "_makefile");
    assert_eq!(theme.light.file_names["Makefile"], "_makefile_light");
    assert_eq!(theme.icon_definitions["_javascript"].font_character, r"\E04E");
    assert_eq!(theme.icon_definitions["_javascript"].font_color.as_deref(), Some("#cbcb41"));
    assert_eq!(
        theme.icon_definitions["_javascript_light"].font_color.as_deref(),
        Some("#3434be")
    );
}

#[test]
fn test_uncolored_definition() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let fetcher = StubFetcher::upstream(&config).with(config.commits_url(), COMMITS_JSON);

    try_update(&fetcher, &config).unwrap();
    let theme = read_theme(&config.output);

    // @license-color is never defined
    assert_eq!(theme.icon_definitions["_license"].font_color, None);
    assert!(!theme.icon_definitions.contains_key("_license_light"));
    assert_eq!(theme.file_names["LICENSE"], "_license");
    assert!(!theme.light.file_names.contains_key("LICENSE"));

    // @default has no association at all
    assert_eq!(theme.icon_definitions["_default"].font_color, None);
    assert!(!theme.icon_definitions.contains_key("_default_light"));
}

#[test]
fn test_missing_commit_metadata_still_writes() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let fetcher = StubFetcher::upstream(&config);

    let outcome = try_update(&fetcher, &config).unwrap();
    let theme = read_theme(&config.output);

    assert!(outcome.commit.is_none());
    assert_eq!(theme.version, "https://github.com/jesseweed/seti-ui/commit/undefined");
    assert_eq!(theme.file_extensions.len(), 2);
}

#[test]
fn test_unparseable_commit_metadata_still_writes() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let fetcher = StubFetcher::upstream(&config)
        .with(config.commits_url(), r#"{"message": "API rate limit exceeded"}"#);

    let outcome = try_update(&fetcher, &config).unwrap();

    assert!(outcome.commit.is_none());
    assert!(read_theme(&config.output).version.ends_with("/commit/undefined"));
}

#[test]
fn test_repeated_runs_are_identical() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let fetcher = StubFetcher::upstream(&config).with(config.commits_url(), COMMITS_JSON);

    try_update(&fetcher, &config).unwrap();
    let first = read_to_string(&config.output).unwrap();
    try_update(&fetcher, &config).unwrap();
    let second = read_to_string(&config.output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_failed_stylesheet_fetch_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let fetcher = StubFetcher::default()
        .with(config.font_mappings_url(), SETI_LESS)
        .with(config.color_variables_url(), UI_VARIABLES_LESS)
        .with(config.commits_url(), COMMITS_JSON);

    let err = try_update(&fetcher, &config).unwrap_err();

    assert!(matches!(err, Error::Transport { ref url, .. } if url.ends_with("mapping.less")));
    assert!(!config.output.exists());
    assert!(update_with(&fetcher, &config).is_none());
}

#[test]
fn test_unrecognized_upstream_text() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let page = "<html><body>404: Not Found</body></html>";
    let fetcher = StubFetcher::default()
        .with(config.font_mappings_url(), page)
        .with(config.icon_mappings_url(), page)
        .with(config.color_variables_url(), page);

    let outcome = update_with(&fetcher, &config).unwrap();
    let theme = read_theme(&outcome.output);

    assert!(theme.icon_definitions.is_empty());
    assert!(theme.file_extensions.is_empty());
    assert!(theme.file_names.is_empty());
    assert!(theme.light.file_extensions.is_empty());
    assert_eq!(theme.fonts.len(), 1);
}
