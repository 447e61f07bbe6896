//! Kotlin declarations rendered through `kgen-writer`.
//!
//! Build a tree of [`ast`] nodes, put the top-level ones in a [`KotlinFile`],
//! and call [`Writable::render`]:
//!
//! ```
//! use kgen_kotlin::{Class, KotlinFile, Property, Type, Writable};
//!
//! let file = KotlinFile::new("com.example.model").declaration(
//!     Class::new("User")
//!         .member(Property::new("id", Type::long()))
//!         .member(Property::new("name", Type::string())),
//! );
//!
//! assert_eq!(
//!     file.render(),
//!     "package com.example.model\n\nclass User {\n    val id: Long\n    val name: String\n}\n"
//! );
//! ```

mod error;
mod kotlin_file;
mod naming;

pub mod ast;

pub use ast::{
    Block, Class, ClassMember, Constructor, ConstructorDelegation, ExpressionBody, Function,
    FunctionBody, FunctionCall, Getter, Import, InitBlock, Interface, Literal, Modifier,
    Mutability, Object, Parameter, PrimaryConstructor, Property, Setter, Statement, SuperType,
    TopLevelDeclaration, Type, TypeAlias, TypeArgument, TypeParameter, Variance,
};
pub use error::{Error, Result};
pub use kgen_writer::{CodeWriter, Indent, Writable};
pub use kotlin_file::KotlinFile;
pub use naming::{KOTLIN_NAMING, safe, safe_package};
