//! Writer configuration loaded from TOML.

use std::{path::Path, str::FromStr};

use serde::Deserialize;

use crate::{Error, Indent, Result};

const MAX_INDENT_WIDTH: u8 = 16;

fn default_indent_width() -> u8 {
    4
}

/// Formatting options for a [`CodeWriter`](crate::CodeWriter).
///
/// ```toml
/// indent_width = 2
/// use_tabs = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WriterConfig {
    /// Spaces per indentation level. Ignored when `use_tabs` is set.
    #[serde(default = "default_indent_width")]
    pub indent_width: u8,
    /// Indent with one tab per level.
    #[serde(default)]
    pub use_tabs: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            indent_width: default_indent_width(),
            use_tabs: false,
        }
    }
}

impl FromStr for WriterConfig {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "kgen.toml")
    }
}

impl WriterConfig {
    /// Parse a config file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a config from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let config: WriterConfig =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
        config.validate()?;
        tracing::debug!(
            filename,
            indent_width = config.indent_width,
            use_tabs = config.use_tabs,
            "loaded writer config"
        );
        Ok(config)
    }

    /// The indentation unit this config describes.
    pub fn indent(&self) -> Indent {
        if self.use_tabs {
            Indent::Tab
        } else {
            Indent::Spaces(self.indent_width)
        }
    }

    fn validate(&self) -> Result<()> {
        if !self.use_tabs && !(1..=MAX_INDENT_WIDTH).contains(&self.indent_width) {
            return Err(Box::new(Error::InvalidIndentWidth {
                width: self.indent_width,
            }));
        }
        Ok(())
    }
}
