//! Kotlin source file builder.

use indexmap::IndexMap;
use kgen_writer::{CodeWriter, Indent, LINE_SEPARATOR, Writable};

use crate::{Import, TopLevelDeclaration, naming::safe_package};

/// A complete Kotlin source file: package header, imports and top-level
/// declarations.
///
/// Imports are de-duplicated by path, keeping the first one added, and are
/// written sorted by path. Every declaration is followed by one blank line,
/// and the rendered file is trimmed and ends with a single line break.
#[derive(Debug, Clone, Default)]
pub struct KotlinFile {
    package: Option<String>,
    imports: IndexMap<String, Import>,
    declarations: Vec<TopLevelDeclaration>,
}

impl KotlinFile {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: Some(package.into()),
            ..Self::default()
        }
    }

    /// A file in the default package.
    pub fn without_package() -> Self {
        Self::default()
    }

    pub fn import(mut self, import: impl Into<Import>) -> Self {
        let import = import.into();
        if self.imports.contains_key(import.path()) {
            tracing::trace!(path = import.path(), "skipping duplicate import");
            return self;
        }
        self.imports.insert(import.path().to_string(), import);
        self
    }

    pub fn declaration(mut self, declaration: impl Into<TopLevelDeclaration>) -> Self {
        self.declarations.push(declaration.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.package.is_none() && self.imports.is_empty() && self.declarations.is_empty()
    }

    fn sorted_imports(&self) -> Vec<&Import> {
        let mut imports: Vec<&Import> = self.imports.values().collect();
        imports.sort_by(|a, b| a.path().cmp(b.path()));
        imports
    }
}

impl Writable for KotlinFile {
    fn write(&self, writer: &mut CodeWriter) {
        tracing::debug!(
            package = self.package.as_deref(),
            imports = self.imports.len(),
            declarations = self.declarations.len(),
            "writing kotlin file"
        );

        if let Some(package) = &self.package {
            writer.write("package ").write(&safe_package(package));
            writer.new_line("");
            writer.new_line("");
        }

        if !self.imports.is_empty() {
            for import in self.sorted_imports() {
                import.write(writer);
                writer.new_line("");
            }
            writer.new_line("");
        }

        for declaration in &self.declarations {
            declaration.write(writer);
            // Literal declarations commit their own line break.
            if !writer.is_current_line_blank() {
                writer.new_line("");
            }
            writer.new_line("");
        }
    }

    fn render_with(&self, indent: Indent) -> String {
        let mut writer = CodeWriter::new(indent);
        self.write(&mut writer);
        let mut output = writer.build().trim().to_string();
        output.push(LINE_SEPARATOR);
        output
    }
}
