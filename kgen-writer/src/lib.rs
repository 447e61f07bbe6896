//! Indentation-aware text assembly for source code generators.
//!
//! # Module Organization
//!
//! - [`CodeWriter`] - Mutable line buffer with an indentation depth
//! - [`Writable`] - The write contract implemented by every node
//! - [`compose`] - List, member-block and keyword helpers shared by nodes
//! - [`NamingConvention`] - Identifier escaping rules
//! - [`WriterConfig`] - Indentation settings loaded from TOML

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod compose;
mod config;
mod dedent;
mod error;
mod indent;
mod naming;
mod writable;
mod writer;

pub use compose::Member;
pub use config::WriterConfig;
pub use dedent::trim_indent;
pub use error::{Error, Result};
pub use indent::Indent;
pub use naming::NamingConvention;
pub use writable::Writable;
pub use writer::{CodeWriter, LINE_SEPARATOR};
