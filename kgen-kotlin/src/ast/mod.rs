//! Kotlin declaration nodes.
//!
//! Every node implements [`Writable`](kgen_writer::Writable) and is built with
//! consuming builder methods.

mod bodies;
mod classes;
mod fns;
mod imports;
mod interfaces;
mod members;
mod modifiers;
mod objects;
mod params;
mod properties;
mod snippet;
mod statements;
mod type_alias;
mod types;

pub use bodies::{Block, ExpressionBody, FunctionBody};
pub use classes::{
    Class, Constructor, ConstructorDelegation, InitBlock, PrimaryConstructor, SuperType,
};
pub use fns::Function;
pub use imports::Import;
pub use interfaces::Interface;
pub use members::{ClassMember, TopLevelDeclaration};
pub use modifiers::Modifier;
pub use objects::Object;
pub use params::Parameter;
pub use properties::{Getter, Mutability, Property, Setter};
pub use statements::{FunctionCall, Literal, Statement};
pub use type_alias::TypeAlias;
pub use types::{Type, TypeArgument, TypeParameter, Variance};
