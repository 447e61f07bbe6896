use thiserror::Error;

/// Result type for building Kotlin declarations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("property '{name}' must have a type or an initializer")]
    UntypedProperty { name: String },
}
