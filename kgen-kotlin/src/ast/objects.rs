//! Kotlin object declarations.

use kgen_writer::{CodeWriter, Writable, compose};

use super::{
    ClassMember, Modifier, SuperType, classes::write_super_types, modifiers::write_modifiers,
};
use crate::naming::safe;

/// An object declaration or companion object.
#[derive(Debug, Clone)]
pub struct Object {
    modifiers: Vec<Modifier>,
    name: Option<String>,
    super_types: Vec<SuperType>,
    members: Vec<ClassMember>,
}

impl Object {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            modifiers: Vec::new(),
            name: Some(name.into()),
            super_types: Vec::new(),
            members: Vec::new(),
        }
    }

    /// An unnamed `companion object`.
    pub fn companion() -> Self {
        Self {
            modifiers: vec![Modifier::Companion],
            name: None,
            super_types: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
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

impl Writable for Object {
    fn write(&self, writer: &mut CodeWriter) {
        write_modifiers(writer, &self.modifiers);
        writer.write("object");
        if let Some(name) = &self.name {
            writer.write(" ").write(&safe(name));
        }
        write_super_types(writer, &self.super_types);
        compose::write_member_block(writer, &self.members, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Function, Property, Type};

    #[test]
    fn test_simple_object() {
        assert_eq!(Object::new("Singleton").render(), "object Singleton");
    }

    #[test]
    fn test_object_with_super_types() {
        let object = Object::new("Logger")
            .modifier(Modifier::Internal)
            .super_type("Loggable")
            .super_type("AutoCloseable");
        assert_eq!(
            object.render(),
            "internal object Logger : Loggable, AutoCloseable"
        );
    }

    #[test]
    fn test_object_with_members() {
        let object = Object::new("AppConfig")
            .member(Property::new("version", Type::string()))
            .member(Function::new("initialize"));
        assert_eq!(
            object.render(),
            "object AppConfig {\n    val version: String\n\n    fun initialize()\n}"
        );
    }

    #[test]
    fn test_companion_object() {
        let object = Object::companion().member(Function::new("create"));
        assert_eq!(
            object.render(),
            "companion object {\n    fun create()\n}"
        );
    }
}
