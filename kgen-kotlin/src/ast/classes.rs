//! Classes, constructors and initializer blocks.

use kgen_writer::{CodeWriter, Writable, compose};

use super::{
    Block, ClassMember, Modifier, Parameter, Property, Statement, Type, TypeParameter,
    modifiers::write_modifiers, params::write_parameters, types::write_type_parameters,
};
use crate::naming::safe;

/// A supertype entry, with constructor arguments when extending a class.
#[derive(Debug, Clone)]
pub struct SuperType {
    ty: Type,
    arguments: Option<Vec<String>>,
}

impl SuperType {
    pub fn new(ty: impl Into<Type>) -> Self {
        Self {
            ty: ty.into(),
            arguments: None,
        }
    }

    /// A superclass constructor call, e.g. `Base(name)`.
    pub fn call(
        ty: impl Into<Type>,
        arguments: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            ty: ty.into(),
            arguments: Some(arguments.into_iter().map(Into::into).collect()),
        }
    }
}

impl From<Type> for SuperType {
    fn from(ty: Type) -> Self {
        Self::new(ty)
    }
}

impl From<&str> for SuperType {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl Writable for SuperType {
    fn write(&self, writer: &mut CodeWriter) {
        self.ty.write(writer);
        if let Some(arguments) = &self.arguments {
            writer.write("(").write(&arguments.join(", ")).write(")");
        }
    }
}

/// Write ` : A, B(x)` when there are supertypes.
pub(crate) fn write_super_types(writer: &mut CodeWriter, super_types: &[SuperType]) {
    if super_types.is_empty() {
        return;
    }
    writer.write(" : ");
    compose::write_joined(writer, super_types, ", ");
}

/// The parameter list following a class name.
///
/// Writes nothing when it has no modifiers, parameters or properties. With
/// modifiers the `constructor` keyword is spelled out.
#[derive(Debug, Clone, Default)]
pub struct PrimaryConstructor {
    modifiers: Vec<Modifier>,
    parameters: Vec<Parameter>,
    properties: Vec<Property>,
}

impl PrimaryConstructor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// A plain constructor parameter.
    pub fn param(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// A `val`/`var` property declared in the constructor.
    pub fn property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty() && self.parameters.is_empty() && self.properties.is_empty()
    }
}

impl Writable for PrimaryConstructor {
    fn write(&self, writer: &mut CodeWriter) {
        if self.is_empty() {
            return;
        }

        if !self.modifiers.is_empty() {
            writer.write(" ");
            write_modifiers(writer, &self.modifiers);
            writer.write("constructor");
        }

        writer.write("(");
        compose::write_joined(writer, &self.parameters, ", ");
        if !self.parameters.is_empty() && !self.properties.is_empty() {
            writer.write(", ");
        }
        compose::write_joined(writer, &self.properties, ", ");
        writer.write(")");
    }
}

/// A class declaration.
#[derive(Debug, Clone)]
pub struct Class {
    modifiers: Vec<Modifier>,
    name: String,
    type_parameters: Vec<TypeParameter>,
    primary_constructor: Option<PrimaryConstructor>,
    super_types: Vec<SuperType>,
    members: Vec<ClassMember>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            modifiers: Vec::new(),
            name: name.into(),
            type_parameters: Vec::new(),
            primary_constructor: None,
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

    pub fn primary_constructor(mut self, constructor: PrimaryConstructor) -> Self {
        self.primary_constructor = Some(constructor);
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

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Writable for Class {
    fn write(&self, writer: &mut CodeWriter) {
        write_modifiers(writer, &self.modifiers);
        writer.write("class ").write(&safe(&self.name));
        write_type_parameters(writer, &self.type_parameters);
        if let Some(constructor) = &self.primary_constructor {
            constructor.write(writer);
        }
        write_super_types(writer, &self.super_types);
        compose::write_member_block(writer, &self.members, true);
    }
}

/// Target of a secondary constructor's delegation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructorDelegation {
    This(Vec<String>),
    Super(Vec<String>),
}

impl Writable for ConstructorDelegation {
    fn write(&self, writer: &mut CodeWriter) {
        let (keyword, arguments) = match self {
            Self::This(arguments) => ("this", arguments),
            Self::Super(arguments) => ("super", arguments),
        };
        writer
            .write(" : ")
            .write(keyword)
            .write("(")
            .write(&arguments.join(", "))
            .write(")");
    }
}

/// A secondary constructor.
#[derive(Debug, Clone, Default)]
pub struct Constructor {
    modifiers: Vec<Modifier>,
    parameters: Vec<Parameter>,
    delegation: Option<ConstructorDelegation>,
    body: Option<Block>,
}

impl Constructor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    pub fn param(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Delegate to another constructor of this class.
    pub fn delegate_this(mut self, arguments: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.delegation = Some(ConstructorDelegation::This(
            arguments.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Delegate to a superclass constructor.
    pub fn delegate_super(
        mut self,
        arguments: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.delegation = Some(ConstructorDelegation::Super(
            arguments.into_iter().map(Into::into).collect(),
        ));
        self
    }

    pub fn body(mut self, body: Block) -> Self {
        self.body = Some(body);
        self
    }
}

impl Writable for Constructor {
    fn write(&self, writer: &mut CodeWriter) {
        write_modifiers(writer, &self.modifiers);
        writer.write("constructor");
        write_parameters(writer, &self.parameters);
        if let Some(delegation) = &self.delegation {
            delegation.write(writer);
        }
        if let Some(body) = &self.body {
            body.write(writer);
        }
    }
}

/// An `init { .. }` block.
#[derive(Debug, Clone, Default)]
pub struct InitBlock {
    block: Block,
}

impl InitBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn statement(mut self, statement: impl Into<Statement>) -> Self {
        self.block = self.block.statement(statement);
        self
    }
}

impl<S: Into<Statement>> FromIterator<S> for InitBlock {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            block: iter.into_iter().collect(),
        }
    }
}

impl Writable for InitBlock {
    fn write(&self, writer: &mut CodeWriter) {
        writer.write("init");
        self.block.write(writer);
    }
}
