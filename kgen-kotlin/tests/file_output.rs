//! Exact-output checks for whole files and writer edge cases.

use kgen_kotlin::{
    Block, Class, ExpressionBody, Function, FunctionCall, Indent, KotlinFile, Literal, Modifier,
    Object, Parameter, Property, Type, Writable,
};
use kgen_writer::WriterConfig;

#[test]
fn test_user_model_end_to_end() {
    let file = KotlinFile::new("com.example.model").declaration(
        Class::new("User")
            .member(Property::new("id", Type::long()))
            .member(Property::new("name", Type::string())),
    );

    assert_eq!(
        file.render(),
        "package com.example.model\n\nclass User {\n    val id: Long\n    val name: String\n}\n"
    );
}

#[test]
fn test_output_has_single_trailing_newline() {
    let file = KotlinFile::new("app")
        .declaration(Literal::new("fun main() {\n    println(\"hi\")\n}\n\n\n"));
    let output = file.render();
    assert!(output.ends_with("}\n"));
    assert!(!output.ends_with("\n\n"));
}

#[test]
fn test_nested_types_indent_per_level() {
    let file = KotlinFile::new("app").declaration(
        Class::new("Outer").member(
            Class::new("Inner")
                .modifier(Modifier::Inner)
                .member(Object::new("Deep").member(Property::initialized("level", "3"))),
        ),
    );

    assert_eq!(
        file.render(),
        "package app\n\n\
         class Outer {\n\
         \x20   inner class Inner {\n\
         \x20       object Deep {\n\
         \x20           val level = 3\n\
         \x20       }\n\
         \x20   }\n\
         }\n"
    );
}

#[test]
fn test_tab_indentation_from_config() {
    let config: WriterConfig = "use_tabs = true".parse().unwrap();
    let file = KotlinFile::new("app").declaration(
        Function::new("main").body(
            Block::new().statement(
                FunctionCall::new("repeat")
                    .arg("2")
                    .trailing_lambda(Block::new().statement("println(it)")),
            ),
        ),
    );

    assert_eq!(
        file.render_with(config.indent()),
        "package app\n\nfun main() {\n\trepeat(2) {\n\t\tprintln(it)\n\t}\n}\n"
    );
}

#[test]
fn test_two_space_indentation() {
    let class = Class::new("Point")
        .member(Property::new("x", Type::int()))
        .member(
            Function::new("norm")
                .returns(Type::double())
                .body(Block::new().statement("return sqrt(x * x)")),
        );

    assert_eq!(
        class.render_with(Indent::Spaces(2)),
        "class Point {\n  val x: Int\n\n  fun norm(): Double {\n    return sqrt(x * x)\n  }\n}"
    );
}

#[test]
fn test_literal_members_are_not_double_spaced() {
    let class = Class::new("Handlers")
        .member(Literal::new("@Volatile\nvar running = false"))
        .member(Literal::new("fun stop() {\n    running = false\n}"))
        .member(Property::initialized("name", "\"handlers\""));

    assert_eq!(
        class.render(),
        "class Handlers {\n\
         \x20   @Volatile\n\
         \x20   var running = false\n\
         \n\
         \x20   fun stop() {\n\
         \x20       running = false\n\
         \x20   }\n\
         \n\
         \x20   val name = \"handlers\"\n\
         }"
    );
}

#[test]
fn test_keywords_escaped_throughout() {
    let function = Function::new("when")
        .param(Parameter::new("object", Type::any()))
        .param(Parameter::new("in", "Int").default_value("0"));
    let file = KotlinFile::new("com.example.fun").declaration(function);

    assert_eq!(
        file.render(),
        "package com.example.`fun`\n\nfun `when`(`object`: Any, `in`: Int = 0)\n"
    );
}

#[test]
fn test_empty_nested_body_is_omitted() {
    let class = Class::new("Holder").member(Object::new("Marker"));
    assert_eq!(class.render(), "class Holder {\n    object Marker\n}");
}

#[test]
fn test_rendering_is_repeatable() {
    let file = KotlinFile::new("app")
        .import("kotlin.math.max")
        .declaration(Function::new("pick").body(Block::new().statement("return max(1, 2)")));
    assert_eq!(file.render(), file.render());
}

fn class_with_captured_snippets() -> Class {
    let numbers = ExpressionBody::from_writer(|w| {
        w.write("listOf(").with_indent(|w| {
            w.new_line("1,");
            w.new_line("2");
            w.new_line("");
        });
        w.write(")");
    });
    let function = Literal::from_writer(|w| {
        w.write("fun a() {").with_indent(|w| {
            w.new_line("b()");
            w.new_line("");
        });
        w.write("}");
    });

    Class::new("A")
        .member(Property::try_new("xs", None, Some(numbers)).unwrap())
        .member(function)
}

#[test]
fn test_captured_snippets_follow_two_space_indent() {
    assert_eq!(
        class_with_captured_snippets().render_with(Indent::Spaces(2)),
        "class A {\n  val xs = listOf(\n    1,\n    2\n  )\n\n  fun a() {\n    b()\n  }\n}"
    );
}

#[test]
fn test_captured_snippets_follow_tab_indent() {
    let config: WriterConfig = "use_tabs = true".parse().unwrap();
    assert_eq!(
        class_with_captured_snippets().render_with(config.indent()),
        "class A {\n\tval xs = listOf(\n\t\t1,\n\t\t2\n\t)\n\n\tfun a() {\n\t\tb()\n\t}\n}"
    );
}
