//! Kotlin type alias builder.

use kgen_writer::{CodeWriter, Writable};

use super::{
    Modifier, Type, TypeParameter, modifiers::write_modifiers, types::write_type_parameters,
};
use crate::naming::safe;

/// A `typealias` declaration.
#[derive(Debug, Clone)]
pub struct TypeAlias {
    modifiers: Vec<Modifier>,
    name: String,
    type_parameters: Vec<TypeParameter>,
    ty: Type,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, ty: impl Into<Type>) -> Self {
        Self {
            modifiers: Vec::new(),
            name: name.into(),
            type_parameters: Vec::new(),
            ty: ty.into(),
        }
    }

    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    pub fn type_parameter(mut self, parameter: TypeParameter) -> Self {
        self.type_parameters.push(parameter);
        self
    }
}

impl Writable for TypeAlias {
    fn write(&self, writer: &mut CodeWriter) {
        write_modifiers(writer, &self.modifiers);
        writer.write("typealias ").write(&safe(&self.name));
        write_type_parameters(writer, &self.type_parameters);
        writer.write(" = ");
        self.ty.write(writer);
    }
}
