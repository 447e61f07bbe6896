//! Identifier escaping rules for target languages.

/// Language-specific identifier rules.
///
/// Defines which names are reserved and how to escape a name that cannot be
/// emitted bare.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a name (e.g., "class" -> "`class`" in Kotlin)
    pub escape: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Check if a name matches `[A-Za-z_][A-Za-z0-9_]*`.
    pub fn is_identifier(&self, name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphabetic() || first == '_' => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            _ => false,
        }
    }

    /// Get a safe name, escaping reserved words and non-identifiers.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) || !self.is_identifier(name) {
            (self.escape)(name)
        } else {
            name.to_string()
        }
    }

    /// Escape each dot-separated segment of a package path.
    ///
    /// A `*` segment is kept as is so wildcard imports stay valid.
    pub fn safe_path(&self, path: &str) -> String {
        path.split('.')
            .map(|segment| {
                if segment == "*" {
                    segment.to_string()
                } else {
                    self.safe_name(segment)
                }
            })
            .collect::<Vec<_>>()
            .join(".")
    }
}
