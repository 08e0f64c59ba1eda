//! Regex extraction passes over the upstream LESS stylesheets.
//!
//! Each pass scans the whole text and keeps whatever matches; text that no
//! longer follows the expected syntax just produces fewer (or no) entries.

use std::sync::LazyLock;

use indexmap::IndexMap;
use log::debug;
use regex::Regex;

/// `@name: '\E001';` in `seti.less`.
const GLYPH_PATTERN: &str = r"(?-u)@([\w-]+):\s*'(\\E[0-9A-F]+)';";

/// `.icon-set('.js', 'javascript', @yellow)` or `.icon-partial(...)` in `mapping.less`.
const ASSOCIATION_PATTERN: &str =
    r"(?-u)\.icon-(?:set|partial)\('([\w.-]+)',\s*'([\w-]+)',\s*(@[\w-]+)\)";

/// `@blue: #519aba;` in `ui-variables.less`.
const COLOR_PATTERN: &str = r"(?-u)(@[\w-]+):\s*(#[0-9a-z]+)";

static GLYPHS: LazyLock<Pattern<2>> = LazyLock::new(|| Pattern::new(GLYPH_PATTERN));
static ASSOCIATIONS: LazyLock<Pattern<3>> = LazyLock::new(|| Pattern::new(ASSOCIATION_PATTERN));
static COLORS: LazyLock<Pattern<2>> = LazyLock::new(|| Pattern::new(COLOR_PATTERN));

/// A compiled pattern whose `N` capture groups take part in every match.
#[derive(Debug, Clone)]
pub(crate) struct Pattern<const N: usize> {
    regex: Regex,
}

impl<const N: usize> Pattern<N> {
    /// Compile `pattern`.
    ///
    /// Panics if the pattern is invalid or if it does not have exactly `N`
    /// always-participating groups. Only used with the constant patterns above.
    pub(crate) fn new(pattern: &str) -> Self {
        let regex = Regex::new(pattern).expect("extraction pattern must compile");
        assert_eq!(
            regex.static_captures_len(),
            Some(N + 1),
            "pattern must have {N} capture groups that always participate"
        );
        Self { regex }
    }

    /// Capture tuples of every non-overlapping match, left to right.
    ///
    /// The iterator is lazy; calling `tuples` again restarts the scan.
    pub(crate) fn tuples<'t>(&self, text: &'t str) -> impl Iterator<Item = [&'t str; N]> {
        self.regex.captures_iter(text).map(|caps| caps.extract().1)
    }
}

/// Internal id of a glyph definition named `name` upstream.
pub fn definition_id(name: &str) -> String {
    format!("_{name}")
}

/// Definition id -> font character escape (`\Ennnn`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphTable {
    pub definitions: IndexMap<String, String>,
}

/// Associations and color references from the icon mapping stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconMappings {
    /// Extension (without leading dot) -> definition id.
    pub extensions: IndexMap<String, String>,
    /// Exact file name -> definition id.
    pub file_names: IndexMap<String, String>,
    /// Definition id -> color id (`@name`).
    pub colors: IndexMap<String, String>,
}

/// Color id (`@name`) -> hex value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorTable {
    pub colors: IndexMap<String, String>,
}

impl GlyphTable {
    pub fn parse(text: &str) -> Self {
        let definitions: IndexMap<_, _> = GLYPHS
            .tuples(text)
            .map(|[name, character]| (definition_id(name), character.to_string()))
            .collect();
        debug!("Extracted {} glyph definitions", definitions.len());
        Self { definitions }
    }
}

impl IconMappings {
    pub fn parse(text: &str) -> Self {
        let mut mappings = Self::default();
        for [pattern, name, color_id] in ASSOCIATIONS.tuples(text) {
            let def = definition_id(name);
            match pattern.strip_prefix('.') {
                Some(extension) => mappings.extensions.insert(extension.to_string(), def.clone()),
                None => mappings.file_names.insert(pattern.to_string(), def.clone()),
            };
            mappings.colors.insert(def, color_id.to_string());
        }
        debug!(
            "Extracted {} extension and {} file name associations",
            mappings.extensions.len(),
            mappings.file_names.len()
        );
        mappings
    }
}

impl ColorTable {
    pub fn parse(text: &str) -> Self {
        let colors: IndexMap<_, _> = COLORS
            .tuples(text)
            .map(|[id, value]| (id.to_string(), value.to_string()))
            .collect();
        debug!("Extracted {} color variables", colors.len());
        Self { colors }
    }

    /// Color value for a definition, following its color reference.
    pub fn resolve(&self, mappings: &IconMappings, def: &str) -> Option<&str> {
        let color_id = mappings.colors.get(def)?;
        self.colors.get(color_id).map(String::as_str)
    }
}
