//! The write contract every renderable node implements.

use crate::{CodeWriter, Indent};

/// A node that can emit itself into a [`CodeWriter`].
///
/// Nodes never build strings on their own: they push text into the writer
/// they are given, and call `write` on their children against the same
/// writer. [`render`](Writable::render) is the entry point for turning a node
/// into text.
pub trait Writable {
    /// Emit this node into the writer.
    fn write(&self, writer: &mut CodeWriter);

    /// Render into a fresh writer using the given indentation.
    fn render_with(&self, indent: Indent) -> String {
        let mut writer = CodeWriter::new(indent);
        self.write(&mut writer);
        writer.build()
    }

    /// Render into a fresh writer with the default indentation.
    fn render(&self) -> String {
        self.render_with(Indent::default())
    }
}

/// Blanket implementation for references.
impl<T: Writable + ?Sized> Writable for &T {
    fn write(&self, writer: &mut CodeWriter) {
        (*self).write(writer)
    }

    fn render_with(&self, indent: Indent) -> String {
        (*self).render_with(indent)
    }
}

/// Blanket implementation for Box.
impl<T: Writable + ?Sized> Writable for Box<T> {
    fn write(&self, writer: &mut CodeWriter) {
        self.as_ref().write(writer)
    }

    fn render_with(&self, indent: Indent) -> String {
        self.as_ref().render_with(indent)
    }
}

/// Plain text is written through [`CodeWriter::write`].
impl Writable for str {
    fn write(&self, writer: &mut CodeWriter) {
        writer.write(self);
    }
}

impl Writable for String {
    fn write(&self, writer: &mut CodeWriter) {
        writer.write(self);
    }
}
