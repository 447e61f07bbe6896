//! Kotlin interface builder.

use kgen_writer::{CodeWriter, Writable, compose};

use super::{
    ClassMember, Modifier, SuperType, TypeParameter, classes::write_super_types,
    modifiers::write_modifiers, types::write_type_parameters,
};
use crate::naming::safe;

/// An interface declaration.
#[derive(Debug, Clone)]
pub struct Interface {
    modifiers: Vec<Modifier>,
    name: String,
    type_parameters: Vec<TypeParameter>,
    super_types: Vec<SuperType>,
    members: Vec<ClassMember>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            modifiers: Vec::new(),
            name: name.into(),
            type_parameters: Vec::new(),
            super_types: Vec::new(),
            members: Vec::new(),
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

    pub fn super_type(mut self, super_type: impl Into<SuperType>) -> Self {
        self.super_types.push(super_type.into());
        self
    }

    pub fn member(mut self, member: impl Into<ClassMember>) -> Self {
        self.members.push(member.into());
        self
    }
}

impl Writable for Interface {
    fn write(&self, writer: &mut CodeWriter) {
        write_modifiers(writer, &self.modifiers);
        writer.write("interface ").write(&safe(&self.name));
        write_type_parameters(writer, &self.type_parameters);
        write_super_types(writer, &self.super_types);
        compose::write_member_block(writer, &self.members, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Function, Literal, Parameter, Type};

    #[test]
    fn test_marker_interface() {
        assert_eq!(Interface::new("Marker").render(), "interface Marker");
    }

    #[test]
    fn test_sealed_generic_interface() {
        let interface = Interface::new("Result")
            .modifier(Modifier::Sealed)
            .type_parameter(TypeParameter::new("T").variance(crate::Variance::Out));
        assert_eq!(interface.render(), "sealed interface Result<out T>");
    }

    #[test]
    fn test_interface_with_functions() {
        let interface = Interface::new("Repository")
            .type_parameter(TypeParameter::new("T"))
            .super_type("AutoCloseable")
            .member(
                Function::new("findById")
                    .param(Parameter::new("id", Type::long()))
                    .returns("T?"),
            )
            .member(Function::new("findAll").returns(Type::new("List").arg("T")));
        assert_eq!(
            interface.render(),
            "interface Repository<T> : AutoCloseable {\n    fun findById(id: Long): T?\n\n    fun findAll(): List<T>\n}"
        );
    }

    #[test]
    fn test_literal_member() {
        let interface = Interface::new("Greeter").member(Literal::new("fun greet() = \"hi\""));
        assert_eq!(
            interface.render(),
            "interface Greeter {\n    fun greet() = \"hi\"\n}"
        );
    }
}
