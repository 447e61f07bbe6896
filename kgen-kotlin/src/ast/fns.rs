//! Function declarations.

use kgen_writer::{CodeWriter, Writable};

use super::{
    FunctionBody, Modifier, Parameter, Type, TypeParameter, modifiers::write_modifiers,
    params::write_parameters, types::write_type_parameters,
};
use crate::naming::safe;

/// A function, method or extension function.
#[derive(Debug, Clone)]
pub struct Function {
    modifiers: Vec<Modifier>,
    type_parameters: Vec<TypeParameter>,
    receiver: Option<Type>,
    name: String,
    parameters: Vec<Parameter>,
    return_type: Option<Type>,
    body: Option<FunctionBody>,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            modifiers: Vec::new(),
            type_parameters: Vec::new(),
            receiver: None,
            name: name.into(),
            parameters: Vec::new(),
            return_type: None,
            body: None,
        }
    }

    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    pub fn modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }

    pub fn type_parameter(mut self, parameter: TypeParameter) -> Self {
        self.type_parameters.push(parameter);
        self
    }

    /// Make this an extension function on `receiver`.
    pub fn receiver(mut self, receiver: impl Into<Type>) -> Self {
        self.receiver = Some(receiver.into());
        self
    }

    pub fn param(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn returns(mut self, ty: impl Into<Type>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    pub fn body(mut self, body: impl Into<FunctionBody>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Writable for Function {
    fn write(&self, writer: &mut CodeWriter) {
        write_modifiers(writer, &self.modifiers);
        writer.write("fun ");

        if !self.type_parameters.is_empty() {
            write_type_parameters(writer, &self.type_parameters);
            writer.write(" ");
        }

        if let Some(receiver) = &self.receiver {
            receiver.write(writer);
            writer.write(".");
        }
        writer.write(&safe(&self.name));
        write_parameters(writer, &self.parameters);

        if let Some(return_type) = &self.return_type {
            writer.write(": ");
            return_type.write(writer);
        }

        if let Some(body) = &self.body {
            body.write(writer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Block, ExpressionBody};

    #[test]
    fn test_simple_function() {
        assert_eq!(Function::new("doSomething").render(), "fun doSomething()");
    }

    #[test]
    fn test_parameters_and_return_type() {
        let function = Function::new("multiply")
            .param(Parameter::new("x", Type::int()))
            .param(Parameter::new("y", Type::int()))
            .returns(Type::int());
        assert_eq!(function.render(), "fun multiply(x: Int, y: Int): Int");
    }

    #[test]
    fn test_expression_body() {
        let function = Function::new("square")
            .param(Parameter::new("n", Type::int()))
            .returns(Type::int())
            .body(ExpressionBody::new("n * n"));
        assert_eq!(function.render(), "fun square(n: Int): Int = n * n");
    }

    #[test]
    fn test_block_body() {
        let function = Function::new("process").body(Block::from_iter([
            "val result = compute()",
            "validate(result)",
            "return result",
        ]));
        assert_eq!(
            function.render(),
            "fun process() {\n    val result = compute()\n    validate(result)\n    return result\n}"
        );
    }

    #[test]
    fn test_modifiers() {
        let function = Function::new("doWork").modifiers([Modifier::Suspend, Modifier::Override]);
        assert_eq!(function.render(), "override suspend fun doWork()");
    }

    #[test]
    fn test_type_parameters() {
        let function = Function::new("pair")
            .type_parameter(TypeParameter::new("A"))
            .type_parameter(TypeParameter::new("B"))
            .param(Parameter::new("first", "A"))
            .param(Parameter::new("second", "B"))
            .returns(Type::new("Pair").args(["A", "B"]));
        assert_eq!(
            function.render(),
            "fun <A, B> pair(first: A, second: B): Pair<A, B>"
        );
    }

    #[test]
    fn test_extension_function() {
        let function = Function::new("isEven")
            .receiver(Type::int())
            .returns(Type::boolean())
            .body(ExpressionBody::new("this % 2 == 0"));
        assert_eq!(function.render(), "fun Int.isEven(): Boolean = this % 2 == 0");
    }

    #[test]
    fn test_infix_generic_extension() {
        let function = Function::new("to")
            .modifier(Modifier::Infix)
            .receiver("A")
            .type_parameter(TypeParameter::new("A"))
            .type_parameter(TypeParameter::new("B"))
            .param(Parameter::new("that", "B"))
            .returns("Pair<A, B>")
            .body(ExpressionBody::new("Pair(this, that)"));
        assert_eq!(
            function.render(),
            "infix fun <A, B> A.to(that: B): Pair<A, B> = Pair(this, that)"
        );
    }

    #[test]
    fn test_keyword_name() {
        assert_eq!(Function::new("class").render(), "fun `class`()");
    }

    #[test]
    fn test_multiline_statement_in_body() {
        let function = Function::new("transform").body(
            Block::new()
                .statement("val a = \"blah\"")
                .statement("if (a != \"blah\") {\n    println(a)\n}\nprintln(\"bye\")"),
        );
        assert_eq!(
            function.render(),
            "fun transform() {\n    val a = \"blah\"\n    if (a != \"blah\") {\n        println(a)\n    }\n    println(\"bye\")\n}"
        );
    }
}
