//! Kotlin modifier keywords.

use std::fmt;

use kgen_writer::{CodeWriter, compose};

/// A modifier keyword on a declaration or parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Public,
    Private,
    Protected,
    Internal,
    Abstract,
    Final,
    Open,
    Sealed,
    Override,
    Data,
    Enum,
    Annotation,
    Inner,
    Value,
    Companion,
    Inline,
    NoInline,
    CrossInline,
    Suspend,
    Tailrec,
    Operator,
    Infix,
    External,
    Vararg,
    Const,
    Lateinit,
    Expect,
    Actual,
}

impl Modifier {
    /// The keyword as it appears in source.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Protected => "protected",
            Self::Internal => "internal",
            Self::Abstract => "abstract",
            Self::Final => "final",
            Self::Open => "open",
            Self::Sealed => "sealed",
            Self::Override => "override",
            Self::Data => "data",
            Self::Enum => "enum",
            Self::Annotation => "annotation",
            Self::Inner => "inner",
            Self::Value => "value",
            Self::Companion => "companion",
            Self::Inline => "inline",
            Self::NoInline => "noinline",
            Self::CrossInline => "crossinline",
            Self::Suspend => "suspend",
            Self::Tailrec => "tailrec",
            Self::Operator => "operator",
            Self::Infix => "infix",
            Self::External => "external",
            Self::Vararg => "vararg",
            Self::Const => "const",
            Self::Lateinit => "lateinit",
            Self::Expect => "expect",
            Self::Actual => "actual",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Write a modifier list as a sorted, de-duplicated keyword prefix.
pub(crate) fn write_modifiers(writer: &mut CodeWriter, modifiers: &[Modifier]) {
    compose::write_keywords(writer, modifiers.iter().map(Modifier::keyword));
}
