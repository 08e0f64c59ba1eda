//! Theme file output.

use std::{
    fs::{create_dir_all, write},
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::{
    error::{Error, Result},
    theme::IconTheme,
};

/// Render the theme as tab-indented JSON.
pub fn render_theme(theme: &IconTheme) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"\t"));
    theme.serialize(&mut serializer).map_err(Error::Serialize)?;
    Ok(buffer)
}

/// A theme JSON file on disk.
#[derive(Debug, Clone)]
pub struct ThemeFile {
    path: PathBuf,
}

impl ThemeFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the file with `theme`, creating the parent directory if needed.
    pub fn write(&self, theme: &IconTheme) -> Result<()> {
        let json = render_theme(theme)?;
        self.ensure_parent_dir()?;
        write(&self.path, json).map_err(|source| self.write_error(source))
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            create_dir_all(parent).map_err(|source| self.write_error(source))?;
        }
        Ok(())
    }

    fn write_error(&self, source: std::io::Error) -> Error {
        Error::Write { path: self.path.clone(), source }
    }
}

pub fn write_theme(path: impl AsRef<Path>, theme: &IconTheme) -> Result<()> {
    ThemeFile::new(path.as_ref()).write(theme)
}
