//! Line-oriented code writer with indentation tracking.

use std::fmt;

use crate::{Indent, WriterConfig, trim_indent};

/// Line break used for splitting input and joining output.
pub const LINE_SEPARATOR: char = '\n';

fn is_blank(line: &str) -> bool {
    line.chars().all(char::is_whitespace)
}

/// Mutable buffer of in-progress lines plus the current indentation depth.
///
/// Text is always appended to the last line. New lines are seeded with one
/// indent unit per level, and every line has its trailing whitespace removed
/// when the buffer is serialized.
///
/// # Example
///
/// ```
/// use kgen_writer::CodeWriter;
///
/// let mut writer = CodeWriter::kotlin();
/// writer.write("class Example {").with_indent(|w| {
///     w.new_line("fun method() {");
///     w.with_indent(|w| {
///         w.new_line("println(\"Hello World\")");
///     });
///     w.new_line("}");
/// });
/// writer.new_line("}");
///
/// assert_eq!(
///     writer.build(),
///     "class Example {\n    fun method() {\n        println(\"Hello World\")\n    }\n}"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeWriter {
    indent: Indent,
    unit: String,
    lines: Vec<String>,
    indent_level: isize,
}

impl CodeWriter {
    /// Create a writer with the given indentation unit.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent,
            unit: indent.unit(),
            lines: vec![String::new()],
            indent_level: 0,
        }
    }

    /// Create a writer with 4-space indentation.
    pub fn kotlin() -> Self {
        Self::new(Indent::KOTLIN)
    }

    /// Create a writer using the indentation from a loaded config.
    pub fn from_config(config: &WriterConfig) -> Self {
        Self::new(config.indent())
    }

    /// Append code to the current line.
    ///
    /// Code containing line breaks is handed to [`write_lines`](Self::write_lines),
    /// which re-indents it relative to the current depth.
    pub fn write(&mut self, code: &str) -> &mut Self {
        if code.contains(LINE_SEPARATOR) {
            self.write_lines(code.split(LINE_SEPARATOR))
        } else {
            self.current_mut().push_str(code);
            self
        }
    }

    /// Append a block of lines, re-anchoring their indentation.
    ///
    /// If the current line already has content, the first fragment continues
    /// it. The remaining fragments lose their common leading whitespace and
    /// each one ends with a committed line break, so the next write starts on
    /// a freshly indented line.
    pub fn write_lines<I, S>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fragments: Vec<S> = lines.into_iter().collect();
        let mut rest = fragments.as_slice();

        let Some((first, tail)) = rest.split_first() else {
            return self;
        };

        if !self.is_current_line_blank() {
            self.current_mut().push_str(first.as_ref());
            self.new_line("");
            rest = tail;
        }

        let joined = rest
            .iter()
            .map(|fragment| fragment.as_ref())
            .collect::<Vec<_>>()
            .join("\n");

        for line in trim_indent(&joined).split(LINE_SEPARATOR) {
            self.current_mut().push_str(line);
            self.new_line("");
        }
        self
    }

    /// Append code exactly as given.
    ///
    /// The first fragment continues the current line; every following fragment
    /// becomes its own line with no indentation prefix and no dedent. Use this
    /// for payloads whose leading whitespace is significant, like the body of a
    /// multi-line string literal.
    pub fn write_verbatim(&mut self, code: &str) -> &mut Self {
        let mut fragments = code.split(LINE_SEPARATOR);
        if let Some(first) = fragments.next() {
            self.current_mut().push_str(first);
        }
        for fragment in fragments {
            self.lines.push(fragment.to_string());
        }
        self
    }

    /// Start a new line at the current indentation and append code to it.
    pub fn new_line(&mut self, code: &str) -> &mut Self {
        let mut line = String::new();
        for _ in 0..self.indent_level.max(0) {
            line.push_str(&self.unit);
        }
        self.lines.push(line);
        self.write(code)
    }

    /// Increase the indentation used for subsequent new lines.
    pub fn indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease the indentation used for subsequent new lines.
    ///
    /// Going below zero is allowed; negative levels produce no prefix.
    pub fn unindent(&mut self) -> &mut Self {
        self.indent_level -= 1;
        self
    }

    /// Run `f` one indentation level deeper.
    ///
    /// If `f` leaves the writer on a blank line, that line loses one indent
    /// unit so a closing token lands at the outer depth. The indentation level
    /// in effect before the call is restored afterwards.
    pub fn with_indent<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        let level = self.indent_level;
        self.indent();
        f(self);
        if self.is_current_line_blank() {
            self.remove_last_indentation();
        }
        self.indent_level = level;
        self
    }

    /// Remove one trailing indent unit from the current line, if present.
    pub fn remove_last_indentation(&mut self) -> &mut Self {
        let Self { unit, lines, .. } = self;
        if let Some(line) = lines.last_mut() {
            if line.ends_with(unit.as_str()) {
                line.truncate(line.len() - unit.len());
            }
        }
        self
    }

    /// Drop the current line if it is blank, then trim trailing whitespace
    /// from the line that is now last.
    pub fn trim_end(&mut self) -> &mut Self {
        if self.is_current_line_blank() {
            if self.lines.len() > 1 {
                self.lines.pop();
            } else {
                self.current_mut().clear();
            }
        }
        let line = self.current_mut();
        let trimmed = line.trim_end().len();
        line.truncate(trimmed);
        self
    }

    /// Whether the current line holds only whitespace.
    pub fn is_current_line_blank(&self) -> bool {
        self.lines.last().is_none_or(|line| is_blank(line))
    }

    /// The current indentation level.
    pub fn current_indent(&self) -> isize {
        self.indent_level
    }

    /// The indentation style this writer was created with.
    pub fn indent_style(&self) -> Indent {
        self.indent
    }

    /// Number of buffered lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Join all lines, trimming trailing whitespace from each.
    pub fn build(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.trim_end())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn current_mut(&mut self) -> &mut String {
        if self.lines.is_empty() {
            self.lines.push(String::new());
        }
        let last = self.lines.len() - 1;
        &mut self.lines[last]
    }
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::kotlin()
    }
}

impl fmt::Display for CodeWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}
