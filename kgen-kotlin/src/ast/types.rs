//! Type references and type parameters.

use kgen_writer::{CodeWriter, Writable, compose};

use crate::naming::safe;

/// Declaration-site or use-site variance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variance {
    In,
    Out,
}

impl Variance {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
        }
    }
}

/// A reference to a type, e.g. `Map<String, List<Int>>?`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Type {
    pub name: String,
    pub arguments: Vec<TypeArgument>,
    pub nullable: bool,
}

impl Type {
    /// Create a type reference. A trailing `?` marks the type nullable.
    pub fn new(name: impl Into<String>) -> Self {
        let mut name = name.into();
        let nullable = name.ends_with('?');
        if nullable {
            name.pop();
        }
        Self {
            name,
            arguments: Vec::new(),
            nullable,
        }
    }

    pub fn int() -> Self {
        Self::new("Int")
    }

    pub fn long() -> Self {
        Self::new("Long")
    }

    pub fn float() -> Self {
        Self::new("Float")
    }

    pub fn double() -> Self {
        Self::new("Double")
    }

    pub fn boolean() -> Self {
        Self::new("Boolean")
    }

    pub fn string() -> Self {
        Self::new("String")
    }

    pub fn unit() -> Self {
        Self::new("Unit")
    }

    pub fn any() -> Self {
        Self::new("Any")
    }

    /// Add a type argument.
    pub fn arg(mut self, argument: impl Into<TypeArgument>) -> Self {
        self.arguments.push(argument.into());
        self
    }

    /// Add multiple type arguments.
    pub fn args(mut self, arguments: impl IntoIterator<Item = impl Into<TypeArgument>>) -> Self {
        self.arguments.extend(arguments.into_iter().map(Into::into));
        self
    }

    /// Make this type nullable.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }
}

impl From<&str> for Type {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Type {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl Writable for Type {
    fn write(&self, writer: &mut CodeWriter) {
        writer.write(&self.name);
        compose::write_delimited(writer, &self.arguments, "<", ", ", ">", true);
        if self.nullable {
            writer.write("?");
        }
    }
}

/// A type argument in a type reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeArgument {
    /// A plain type, e.g. `String` in `List<String>`.
    Type(Type),
    /// A use-site projection, e.g. `out Number`.
    Projected(Variance, Type),
    /// The star projection `*`.
    Star,
}

impl From<Type> for TypeArgument {
    fn from(ty: Type) -> Self {
        Self::Type(ty)
    }
}

impl From<&str> for TypeArgument {
    fn from(name: &str) -> Self {
        Self::Type(Type::new(name))
    }
}

impl Writable for TypeArgument {
    fn write(&self, writer: &mut CodeWriter) {
        match self {
            Self::Type(ty) => ty.write(writer),
            Self::Projected(variance, ty) => {
                writer.write(variance.keyword()).write(" ");
                ty.write(writer);
            }
            Self::Star => {
                writer.write("*");
            }
        }
    }
}

/// A type parameter declaration, e.g. `out T : Comparable<T>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeParameter {
    pub name: String,
    pub variance: Option<Variance>,
    pub bounds: Vec<Type>,
}

impl TypeParameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variance: None,
            bounds: Vec::new(),
        }
    }

    pub fn variance(mut self, variance: Variance) -> Self {
        self.variance = Some(variance);
        self
    }

    /// Add an upper bound.
    pub fn bound(mut self, bound: impl Into<Type>) -> Self {
        self.bounds.push(bound.into());
        self
    }
}

impl Writable for TypeParameter {
    fn write(&self, writer: &mut CodeWriter) {
        if let Some(variance) = self.variance {
            writer.write(variance.keyword()).write(" ");
        }
        writer.write(&safe(&self.name));
        if !self.bounds.is_empty() {
            writer.write(" : ");
            compose::write_joined(writer, &self.bounds, ", ");
        }
    }
}

/// Write `<A, B>` when the list is non-empty.
pub(crate) fn write_type_parameters(writer: &mut CodeWriter, parameters: &[TypeParameter]) {
    compose::write_delimited(writer, parameters, "<", ", ", ">", true);
}
