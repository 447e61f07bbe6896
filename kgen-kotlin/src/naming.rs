//! Kotlin identifier escaping.

use kgen_writer::NamingConvention;

fn backtick(name: &str) -> String {
    format!("`{}`", name)
}

/// Kotlin naming conventions.
pub const KOTLIN_NAMING: NamingConvention = NamingConvention {
    reserved_words: &[
        "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in",
        "interface", "is", "null", "object", "package", "return", "super", "this", "throw",
        "true", "try", "typealias", "typeof", "val", "var", "when", "while",
    ],
    escape: backtick,
};

/// A name safe to emit bare, backticked if it is a keyword or not an identifier.
pub fn safe(name: &str) -> String {
    KOTLIN_NAMING.safe_name(name)
}

/// A package path with each segment made safe; `*` segments are kept.
pub fn safe_package(path: &str) -> String {
    KOTLIN_NAMING.safe_path(path)
}
