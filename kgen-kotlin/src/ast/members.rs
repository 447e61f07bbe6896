//! Closed sets of declarations allowed inside a type body and at top level.

use kgen_writer::{CodeWriter, Member, Writable};

use super::{
    Class, Constructor, Function, InitBlock, Interface, Literal, Object, Property, TypeAlias,
};

/// A declaration inside a class, interface or object body.
#[derive(Debug, Clone)]
pub enum ClassMember {
    Property(Property),
    Function(Function),
    Class(Class),
    Interface(Interface),
    Object(Object),
    InitBlock(InitBlock),
    Constructor(Constructor),
    Literal(Literal),
}

impl Writable for ClassMember {
    fn write(&self, writer: &mut CodeWriter) {
        match self {
            Self::Property(node) => node.write(writer),
            Self::Function(node) => node.write(writer),
            Self::Class(node) => node.write(writer),
            Self::Interface(node) => node.write(writer),
            Self::Object(node) => node.write(writer),
            Self::InitBlock(node) => node.write(writer),
            Self::Constructor(node) => node.write(writer),
            Self::Literal(node) => node.write(writer),
        }
    }
}

impl Member for ClassMember {
    fn is_simple_declaration(&self) -> bool {
        matches!(self, Self::Property(_))
    }
}

/// A declaration directly inside a file.
#[derive(Debug, Clone)]
pub enum TopLevelDeclaration {
    Class(Class),
    Interface(Interface),
    Object(Object),
    Function(Function),
    Property(Property),
    TypeAlias(TypeAlias),
    Literal(Literal),
}

impl Writable for TopLevelDeclaration {
    fn write(&self, writer: &mut CodeWriter) {
        match self {
            Self::Class(node) => node.write(writer),
            Self::Interface(node) => node.write(writer),
            Self::Object(node) => node.write(writer),
            Self::Function(node) => node.write(writer),
            Self::Property(node) => node.write(writer),
            Self::TypeAlias(node) => node.write(writer),
            Self::Literal(node) => node.write(writer),
        }
    }
}

macro_rules! impl_from {
    ($target:ident: $($variant:ident),+ $(,)?) => {
        $(
            impl From<$variant> for $target {
                fn from(node: $variant) -> Self {
                    Self::$variant(node)
                }
            }
        )+
    };
}

impl_from!(
    ClassMember: Property,
    Function,
    Class,
    Interface,
    Object,
    InitBlock,
    Constructor,
    Literal,
);
impl_from!(TopLevelDeclaration: Class, Interface, Object, Function, Property, TypeAlias, Literal);
