//! The icon theme document and its assembly from the extracted tables.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{
    color::invert_color,
    extract::{ColorTable, GlyphTable, IconMappings},
};

pub const FONT_ID: &str = "seti";
pub const FONT_PATH: &str = "./seti.woff";
pub const FONT_FORMAT: &str = "woff";
pub const FONT_SIZE: &str = "150%";

/// Icon for files no association matches.
pub const DEFAULT_FILE: &str = "_default";

const LIGHT_SUFFIX: &str = "_light";

/// Id of the light variant of definition `def`.
pub fn light_id(def: &str) -> String {
    format!("{def}{LIGHT_SUFFIX}")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSource {
    pub path: String,
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontDeclaration {
    pub id: String,
    pub src: Vec<FontSource>,
    pub weight: String,
    pub style: String,
    pub size: String,
}

impl FontDeclaration {
    /// The bundled Seti font.
    pub fn seti() -> Self {
        Self {
            id: FONT_ID.to_string(),
            src: vec![FontSource { path: FONT_PATH.to_string(), format: FONT_FORMAT.to_string() }],
            weight: "normal".to_string(),
            style: "normal".to_string(),
            size: FONT_SIZE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconDefinition {
    pub font_character: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightOverrides {
    pub file: String,
    pub file_extensions: IndexMap<String, String>,
    pub file_names: IndexMap<String, String>,
}

/// The generated `seti-icon-theme.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconTheme {
    pub fonts: Vec<FontDeclaration>,
    pub icon_definitions: IndexMap<String, IconDefinition>,
    pub file: String,
    pub file_extensions: IndexMap<String, String>,
    pub file_names: IndexMap<String, String>,
    pub light: LightOverrides,
    pub version: String,
}

/// Build the icon definitions, adding a `<def>_light` entry (inverted color)
/// right before every definition whose color reference resolves.
pub fn icon_definitions(
    glyphs: &GlyphTable,
    mappings: &IconMappings,
    colors: &ColorTable,
) -> IndexMap<String, IconDefinition> {
    let mut definitions = IndexMap::new();
    for (def, character) in &glyphs.definitions {
        let color = colors.resolve(mappings, def);
        if let Some(color) = color {
            definitions.insert(
                light_id(def),
                IconDefinition {
                    font_character: character.clone(),
                    font_color: Some(invert_color(color)),
                },
            );
        }
        definitions.insert(
            def.clone(),
            IconDefinition {
                font_character: character.clone(),
                font_color: color.map(str::to_string),
            },
        );
    }
    definitions
}

/// Remap associations to light variants, dropping those without one.
pub fn light_associations(
    associations: &IndexMap<String, String>,
    definitions: &IndexMap<String, IconDefinition>,
) -> IndexMap<String, String> {
    associations
        .iter()
        .filter_map(|(key, def)| {
            let light = light_id(def);
            definitions.contains_key(&light).then(|| (key.clone(), light))
        })
        .collect()
}

/// Assemble the complete theme document.
pub fn assemble(
    glyphs: &GlyphTable,
    mappings: &IconMappings,
    colors: &ColorTable,
    version: String,
) -> IconTheme {
    let icon_definitions = icon_definitions(glyphs, mappings, colors);
    let light = LightOverrides {
        file: light_id(DEFAULT_FILE),
        file_extensions: light_associations(&mappings.extensions, &icon_definitions),
        file_names: light_associations(&mappings.file_names, &icon_definitions),
    };

    IconTheme {
        fonts: vec![FontDeclaration::seti()],
        icon_definitions,
        file: DEFAULT_FILE.to_string(),
        file_extensions: mappings.extensions.clone(),
        file_names: mappings.file_names.clone(),
        light,
        version,
    }
}
