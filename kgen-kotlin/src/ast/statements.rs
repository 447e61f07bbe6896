//! Statements that appear inside blocks.

use std::borrow::Cow;

use kgen_writer::{CodeWriter, Indent, LINE_SEPARATOR, Writable};

use super::{Block, snippet::Snippet};

/// Raw source text, written through [`CodeWriter::write_lines`] so its
/// indentation is re-anchored and it ends with a committed line break.
#[derive(Debug, Clone)]
pub struct Literal {
    value: Snippet,
}

impl Literal {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Snippet::Text(value.into()),
        }
    }

    /// Build the text with a writer callback, run at render time with the
    /// indentation of the tree being rendered.
    pub fn from_writer(f: impl Fn(&mut CodeWriter) + Send + Sync + 'static) -> Self {
        Self {
            value: Snippet::capture(f),
        }
    }

    /// The literal text as it would be written with `indent`.
    pub fn value(&self, indent: Indent) -> Cow<'_, str> {
        self.value.text(indent)
    }
}

impl Writable for Literal {
    fn write(&self, writer: &mut CodeWriter) {
        let value = self.value(writer.indent_style());
        writer.write_lines(value.split(LINE_SEPARATOR));
    }
}

/// A call such as `list.map(transform) { .. }`, ending its own line.
#[derive(Debug, Clone)]
pub struct FunctionCall {
    target: Option<String>,
    name: String,
    arguments: Vec<String>,
    trailing_lambda: Option<Block>,
}

impl FunctionCall {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            target: None,
            name: name.into(),
            arguments: Vec::new(),
            trailing_lambda: None,
        }
    }

    /// Call the function on a receiver expression.
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn arg(mut self, argument: impl Into<String>) -> Self {
        self.arguments.push(argument.into());
        self
    }

    pub fn args(mut self, arguments: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.arguments.extend(arguments.into_iter().map(Into::into));
        self
    }

    /// Pass a block as a trailing lambda. Without other arguments the
    /// parentheses are dropped: `run { .. }`.
    pub fn trailing_lambda(mut self, block: Block) -> Self {
        self.trailing_lambda = Some(block);
        self
    }
}

impl Writable for FunctionCall {
    fn write(&self, writer: &mut CodeWriter) {
        if let Some(target) = &self.target {
            writer.write(target).write(".");
        }
        writer.write(&self.name);

        let arguments = format!("({})", self.arguments.join(", "));
        match &self.trailing_lambda {
            Some(block) => {
                if !self.arguments.is_empty() {
                    writer.write(&arguments);
                }
                block.write(writer);
            }
            None => {
                writer.write(&arguments);
            }
        }
        writer.new_line("");
    }
}

/// A statement inside a [`Block`].
#[derive(Debug, Clone)]
pub enum Statement {
    Literal(Literal),
    Call(FunctionCall),
}

impl From<Literal> for Statement {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

impl From<FunctionCall> for Statement {
    fn from(call: FunctionCall) -> Self {
        Self::Call(call)
    }
}

impl From<&str> for Statement {
    fn from(code: &str) -> Self {
        Self::Literal(Literal::new(code))
    }
}

impl From<String> for Statement {
    fn from(code: String) -> Self {
        Self::Literal(Literal::new(code))
    }
}

impl Writable for Statement {
    fn write(&self, writer: &mut CodeWriter) {
        match self {
            Self::Literal(literal) => literal.write(writer),
            Self::Call(call) => call.write(writer),
        }
    }
}
