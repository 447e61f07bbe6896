//! Snapshot tests for rendered Kotlin files.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use kgen_kotlin::{
    Block, Class, Constructor, ExpressionBody, Function, Getter, Import, InitBlock, Interface,
    KotlinFile, Modifier, Object, Parameter, PrimaryConstructor, Property, Setter, Type,
    TypeAlias, TypeParameter, Variance, Writable,
};

#[test]
fn test_data_class_file() {
    let file = KotlinFile::new("com.example.model")
        .import("kotlinx.serialization.Serializable")
        .import("java.time.Instant")
        .declaration(
            Class::new("User").modifier(Modifier::Data).primary_constructor(
                PrimaryConstructor::new()
                    .property(Property::new("id", Type::long()))
                    .property(Property::new("name", Type::string()))
                    .property(Property::new("email", "String?").initializer("null"))
                    .property(Property::new("createdAt", "Instant")),
            ),
        );

    let output = file.render();
    insta::assert_snapshot!("data_class_file", output);
}

#[test]
fn test_class_with_companion() {
    let calculator = Class::new("Calculator")
        .member(
            Property::initialized("total", "0")
                .var()
                .modifier(Modifier::Private),
        )
        .member(
            Function::new("add")
                .param(Parameter::new("value", Type::int()))
                .returns("Calculator")
                .body(Block::new().statement("total += value").statement("return this")),
        )
        .member(
            Function::new("result")
                .returns(Type::int())
                .body(ExpressionBody::new("total")),
        )
        .member(
            Object::companion().member(
                Function::new("create")
                    .returns("Calculator")
                    .body(ExpressionBody::new("Calculator()")),
            ),
        );

    let output = KotlinFile::new("com.example.math")
        .declaration(calculator)
        .render();
    insta::assert_snapshot!("class_with_companion", output);
}

#[test]
fn test_repository_interface_and_implementation() {
    let repository = Interface::new("Repository")
        .type_parameter(TypeParameter::new("T"))
        .type_parameter(TypeParameter::new("ID"))
        .member(
            Function::new("findById")
                .param(Parameter::new("id", "ID"))
                .returns("T?"),
        )
        .member(Function::new("findAll").returns(Type::new("List").arg("T")))
        .member(Function::new("save").param(Parameter::new("entity", "T")));

    let store = Type::new("MutableMap").arg(Type::long()).arg("User");
    let implementation = Class::new("UserRepository")
        .primary_constructor(
            PrimaryConstructor::new()
                .property(Property::new("store", store).modifier(Modifier::Private)),
        )
        .super_type(Type::new("Repository").arg("User").arg(Type::long()))
        .member(
            Function::new("findById")
                .modifier(Modifier::Override)
                .param(Parameter::new("id", Type::long()))
                .returns("User?")
                .body(ExpressionBody::new("store[id]")),
        )
        .member(
            Function::new("findAll")
                .modifier(Modifier::Override)
                .returns(Type::new("List").arg("User"))
                .body(ExpressionBody::new("store.values.toList()")),
        )
        .member(
            Function::new("save")
                .modifier(Modifier::Override)
                .param(Parameter::new("entity", "User"))
                .body(Block::new().statement("store[entity.id] = entity")),
        );

    let output = KotlinFile::new("com.example.data")
        .import("com.example.model.User")
        .declaration(repository)
        .declaration(implementation)
        .render();
    insta::assert_snapshot!("repository_interface_and_implementation", output);
}

#[test]
fn test_class_with_accessors_and_constructors() {
    let person = Class::new("Person")
        .modifier(Modifier::Open)
        .primary_constructor(
            PrimaryConstructor::new().property(Property::new("name", Type::string())),
        )
        .member(
            Property::new("age", Type::int())
                .var()
                .initializer("0")
                .setter(Setter::new().modifier(Modifier::Private)),
        )
        .member(Property::new("isAdult", Type::boolean()).getter(Getter::expression("age >= 18")))
        .member(InitBlock::new().statement("require(name.isNotBlank())"))
        .member(
            Constructor::new()
                .param(Parameter::new("name", Type::string()))
                .param(Parameter::new("age", Type::int()))
                .delegate_this(["name"])
                .body(Block::new().statement("this.age = age")),
        )
        .member(
            Function::new("greet")
                .modifier(Modifier::Open)
                .returns(Type::string())
                .body(ExpressionBody::new("\"Hello, $name\"")),
        );

    let output = KotlinFile::new("com.example.people")
        .declaration(person)
        .render();
    insta::assert_snapshot!("class_with_accessors_and_constructors", output);
}

#[test]
fn test_sealed_result_hierarchy() {
    let t = || TypeParameter::new("T");

    let output = KotlinFile::new("com.example.result")
        .import(Import::new("kotlin.Result").alias("StdResult"))
        .declaration(
            TypeAlias::new("Callback", "(Result<T>) -> Unit").type_parameter(t()),
        )
        .declaration(
            Interface::new("Result")
                .modifier(Modifier::Sealed)
                .type_parameter(t().variance(Variance::Out)),
        )
        .declaration(
            Class::new("Success")
                .modifier(Modifier::Data)
                .type_parameter(t())
                .primary_constructor(
                    PrimaryConstructor::new().property(Property::new("value", "T")),
                )
                .super_type(Type::new("Result").arg("T")),
        )
        .declaration(
            Class::new("Failure")
                .modifier(Modifier::Data)
                .primary_constructor(
                    PrimaryConstructor::new().property(Property::new("error", "Throwable")),
                )
                .super_type(Type::new("Result").arg("Nothing")),
        )
        .declaration(
            Property::new("MAX_RETRIES", Type::int())
                .modifier(Modifier::Const)
                .initializer("3"),
        )
        .declaration(
            Function::new("getOrNull")
                .type_parameter(t())
                .receiver(Type::new("Result").arg("T"))
                .returns("T?")
                .body(ExpressionBody::new(
                    "when (this) {\n    is Success -> value\n    is Failure -> null\n}",
                )),
        )
        .render();
    insta::assert_snapshot!("sealed_result_hierarchy", output);
}
