//! Kotlin import directives.

use kgen_writer::{CodeWriter, Writable};

use crate::naming::{safe, safe_package};

/// An `import` directive, optionally aliased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    path: String,
    alias: Option<String>,
}

impl Import {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            alias: None,
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// The imported path, used for ordering and de-duplication.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl From<&str> for Import {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl Writable for Import {
    fn write(&self, writer: &mut CodeWriter) {
        writer.write("import ").write(&safe_package(&self.path));
        if let Some(alias) = &self.alias {
            writer.write(" as ").write(&safe(alias));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import() {
        assert_eq!(
            Import::new("kotlin.collections.List").render(),
            "import kotlin.collections.List"
        );
    }

    #[test]
    fn test_import_with_alias() {
        let import = Import::new("com.example.Date").alias("ExampleDate");
        assert_eq!(import.render(), "import com.example.Date as ExampleDate");
    }

    #[test]
    fn test_wildcard_import() {
        assert_eq!(Import::new("kotlinx.coroutines.*").render(), "import kotlinx.coroutines.*");
    }

    #[test]
    fn test_keyword_segments_escaped() {
        let import = Import::new("com.example.object.Value").alias("in");
        assert_eq!(import.render(), "import com.example.`object`.Value as `in`");
    }
}
