//! Properties and their accessors.

use kgen_writer::{CodeWriter, Writable};

use super::{Block, ExpressionBody, FunctionBody, Modifier, Type, modifiers::write_modifiers};
use crate::{Error, Result, naming::safe};

/// `val` or `var`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mutability {
    #[default]
    Val,
    Var,
}

impl Mutability {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Val => "val",
            Self::Var => "var",
        }
    }
}

/// A property declaration.
///
/// A property always has a type, an initializer, or both.
///
/// ```
/// use kgen_kotlin::{Modifier, Property, Setter, Type, Writable};
///
/// let counter = Property::new("count", Type::int())
///     .var()
///     .initializer("0")
///     .setter(Setter::new().modifier(Modifier::Private));
///
/// assert_eq!(counter.render(), "var count: Int = 0\n    private set");
/// ```
#[derive(Debug, Clone)]
pub struct Property {
    modifiers: Vec<Modifier>,
    mutability: Mutability,
    name: String,
    ty: Option<Type>,
    initializer: Option<ExpressionBody>,
    getter: Option<Getter>,
    setter: Option<Setter>,
}

impl Property {
    /// Create a property with an explicit type.
    pub fn new(name: impl Into<String>, ty: impl Into<Type>) -> Self {
        Self::build(name.into(), Some(ty.into()), None)
    }

    /// Create a property whose type is inferred from its initializer.
    pub fn initialized(name: impl Into<String>, expression: impl Into<String>) -> Self {
        Self::build(name.into(), None, Some(ExpressionBody::new(expression)))
    }

    /// Create a property from optional parts, rejecting one with neither a
    /// type nor an initializer.
    pub fn try_new(
        name: impl Into<String>,
        ty: Option<Type>,
        initializer: Option<ExpressionBody>,
    ) -> Result<Self> {
        let name = name.into();
        if ty.is_none() && initializer.is_none() {
            return Err(Error::UntypedProperty { name });
        }
        Ok(Self::build(name, ty, initializer))
    }

    fn build(name: String, ty: Option<Type>, initializer: Option<ExpressionBody>) -> Self {
        Self {
            modifiers: Vec::new(),
            mutability: Mutability::Val,
            name,
            ty,
            initializer,
            getter: None,
            setter: None,
        }
    }

    pub fn var(mut self) -> Self {
        self.mutability = Mutability::Var;
        self
    }

    pub fn mutability(mut self, mutability: Mutability) -> Self {
        self.mutability = mutability;
        self
    }

    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    pub fn modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }

    pub fn ty(mut self, ty: impl Into<Type>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    pub fn initializer(mut self, expression: impl Into<String>) -> Self {
        self.initializer = Some(ExpressionBody::new(expression));
        self
    }

    pub fn getter(mut self, getter: Getter) -> Self {
        self.getter = Some(getter);
        self
    }

    pub fn setter(mut self, setter: Setter) -> Self {
        self.setter = Some(setter);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Writable for Property {
    fn write(&self, writer: &mut CodeWriter) {
        write_modifiers(writer, &self.modifiers);
        writer
            .write(self.mutability.keyword())
            .write(" ")
            .write(&safe(&self.name));

        if let Some(ty) = &self.ty {
            writer.write(": ");
            ty.write(writer);
        }

        if let Some(initializer) = &self.initializer {
            initializer.write(writer);
        }

        if self.getter.is_some() || self.setter.is_some() {
            writer.with_indent(|w| {
                if let Some(getter) = &self.getter {
                    getter.write(w);
                }
                if let Some(setter) = &self.setter {
                    setter.write(w);
                }
            });
        }
    }
}

/// A custom `get()` accessor.
#[derive(Debug, Clone)]
pub struct Getter {
    modifiers: Vec<Modifier>,
    body: FunctionBody,
}

impl Getter {
    pub fn new(body: impl Into<FunctionBody>) -> Self {
        Self {
            modifiers: Vec::new(),
            body: body.into(),
        }
    }

    /// A getter with an `= expression` body.
    pub fn expression(expression: impl Into<String>) -> Self {
        Self::new(ExpressionBody::new(expression))
    }

    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }
}

impl Writable for Getter {
    fn write(&self, writer: &mut CodeWriter) {
        writer.new_line("");
        write_modifiers(writer, &self.modifiers);
        writer.write("get()");
        self.body.write(writer);
    }
}

/// A `set` accessor. Without a body only the modifiers and keyword are
/// written, e.g. `private set`.
#[derive(Debug, Clone)]
pub struct Setter {
    modifiers: Vec<Modifier>,
    parameter: String,
    body: Option<Block>,
}

impl Setter {
    pub fn new() -> Self {
        Self {
            modifiers: Vec::new(),
            parameter: "value".to_string(),
            body: None,
        }
    }

    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// Rename the setter parameter.
    pub fn parameter(mut self, name: impl Into<String>) -> Self {
        self.parameter = name.into();
        self
    }

    pub fn body(mut self, body: Block) -> Self {
        self.body = Some(body);
        self
    }
}

impl Default for Setter {
    fn default() -> Self {
        Self::new()
    }
}

impl Writable for Setter {
    fn write(&self, writer: &mut CodeWriter) {
        writer.new_line("");
        write_modifiers(writer, &self.modifiers);
        match &self.body {
            Some(body) => {
                writer.write("set(").write(&safe(&self.parameter)).write(")");
                body.write(writer);
            }
            None => {
                writer.write("set");
            }
        }
    }
}
