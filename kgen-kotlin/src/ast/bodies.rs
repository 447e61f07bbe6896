//! Expression bodies and braced statement blocks.

use std::borrow::Cow;

use kgen_writer::{CodeWriter, Indent, Writable};

use super::{Statement, snippet::Snippet};

/// An `= expression` body, also used for initializers and default values.
#[derive(Debug, Clone)]
pub struct ExpressionBody {
    expression: Snippet,
}

impl ExpressionBody {
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: Snippet::Text(expression.into()),
        }
    }

    /// Build the expression with a writer callback.
    ///
    /// The callback runs at render time, so nested lines follow the
    /// indentation of the tree being rendered.
    pub fn from_writer(f: impl Fn(&mut CodeWriter) + Send + Sync + 'static) -> Self {
        Self {
            expression: Snippet::capture(f),
        }
    }

    /// The expression text as it would be written with `indent`.
    pub fn expression(&self, indent: Indent) -> Cow<'_, str> {
        self.expression.text(indent)
    }
}

impl Writable for ExpressionBody {
    fn write(&self, writer: &mut CodeWriter) {
        let expression = self.expression(writer.indent_style());
        writer.write(" = ").write(&expression);
    }
}

/// A braced sequence of statements, one level deeper than its opener.
#[derive(Debug, Clone, Default)]
pub struct Block {
    statements: Vec<Statement>,
}

impl Block {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn statement(mut self, statement: impl Into<Statement>) -> Self {
        self.statements.push(statement.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl<S: Into<Statement>> FromIterator<S> for Block {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            statements: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl Writable for Block {
    fn write(&self, writer: &mut CodeWriter) {
        writer.write(" {").with_indent(|w| {
            w.new_line("");
            for statement in &self.statements {
                statement.write(w);
            }
        });
        writer.write("}");
    }
}

/// The body of a function or getter.
#[derive(Debug, Clone)]
pub enum FunctionBody {
    Block(Block),
    Expression(ExpressionBody),
}

impl From<Block> for FunctionBody {
    fn from(block: Block) -> Self {
        Self::Block(block)
    }
}

impl From<ExpressionBody> for FunctionBody {
    fn from(body: ExpressionBody) -> Self {
        Self::Expression(body)
    }
}

impl Writable for FunctionBody {
    fn write(&self, writer: &mut CodeWriter) {
        match self {
            Self::Block(block) => block.write(writer),
            Self::Expression(body) => body.write(writer),
        }
    }
}
