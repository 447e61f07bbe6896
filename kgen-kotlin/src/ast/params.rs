//! Kotlin function and constructor parameters.

use kgen_writer::{CodeWriter, Writable, compose};

use super::{ExpressionBody, Modifier, Type, modifiers::write_modifiers};
use crate::naming::safe;

/// A function or constructor parameter.
#[derive(Debug, Clone)]
pub struct Parameter {
    modifiers: Vec<Modifier>,
    name: String,
    ty: Type,
    default: Option<ExpressionBody>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: impl Into<Type>) -> Self {
        Self {
            modifiers: Vec::new(),
            name: name.into(),
            ty: ty.into(),
            default: None,
        }
    }

    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// Set the default value expression.
    pub fn default_value(mut self, expression: impl Into<String>) -> Self {
        self.default = Some(ExpressionBody::new(expression));
        self
    }
}

impl Writable for Parameter {
    fn write(&self, writer: &mut CodeWriter) {
        write_modifiers(writer, &self.modifiers);
        writer.write(&safe(&self.name)).write(": ");
        self.ty.write(writer);
        if let Some(default) = &self.default {
            default.write(writer);
        }
    }
}

/// Write `(a: A, b: B)`; the parentheses are always present.
pub(crate) fn write_parameters(writer: &mut CodeWriter, parameters: &[Parameter]) {
    compose::write_delimited(writer, parameters, "(", ", ", ")", false);
}
