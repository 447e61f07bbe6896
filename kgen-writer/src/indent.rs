//! Indentation unit used when seeding new lines.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width.
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation, the Kotlin style guide default.
    pub const KOTLIN: Self = Self::Spaces(4);

    /// The string for one indent level.
    pub fn unit(&self) -> String {
        match self {
            Self::Spaces(width) => " ".repeat(usize::from(*width)),
            Self::Tab => "\t".to_string(),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::KOTLIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_unit() {
        assert_eq!(Indent::Spaces(2).unit(), "  ");
        assert_eq!(Indent::Spaces(4).unit(), "    ");
        assert_eq!(Indent::Spaces(3).unit(), "   ");
        assert_eq!(Indent::Tab.unit(), "\t");
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::KOTLIN);
        assert_eq!(Indent::KOTLIN, Indent::Spaces(4));
    }
}
