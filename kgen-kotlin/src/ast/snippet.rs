//! Source text that is either fixed or produced by a writer callback.

use std::{borrow::Cow, fmt, sync::Arc};

use kgen_writer::{CodeWriter, Indent};

type Capture = Arc<dyn Fn(&mut CodeWriter) + Send + Sync>;

/// Text for literals and expressions.
///
/// A captured snippet runs its callback each time it is rendered, against a
/// scratch writer using the indentation of the writer it is rendered into.
#[derive(Clone)]
pub(crate) enum Snippet {
    Text(String),
    Captured(Capture),
}

impl Snippet {
    pub(crate) fn capture(f: impl Fn(&mut CodeWriter) + Send + Sync + 'static) -> Self {
        Self::Captured(Arc::new(f))
    }

    /// The text with nested lines indented by `indent`.
    pub(crate) fn text(&self, indent: Indent) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text),
            Self::Captured(f) => {
                let mut writer = CodeWriter::new(indent);
                f(&mut writer);
                Cow::Owned(writer.build())
            }
        }
    }
}

impl fmt::Debug for Snippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Captured(_) => f.write_str("Captured(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(w: &mut CodeWriter) {
        w.write("f(").with_indent(|w| {
            w.new_line("x");
            w.new_line("");
        });
        w.write(")");
    }

    #[test]
    fn test_text_ignores_indent() {
        let snippet = Snippet::Text("a\n    b".to_string());
        assert_eq!(snippet.text(Indent::Tab), "a\n    b");
    }

    #[test]
    fn test_capture_uses_requested_indent() {
        let snippet = Snippet::capture(call);
        assert_eq!(snippet.text(Indent::Spaces(2)), "f(\n  x\n)");
        assert_eq!(snippet.text(Indent::Tab), "f(\n\tx\n)");
        assert_eq!(snippet.text(Indent::KOTLIN), "f(\n    x\n)");
    }
}
