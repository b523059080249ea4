use super::*;
use crate::ast::Printer;

fn builder() -> Builder {
    Builder::new(["Action", "Page", "Vector3"])
}

fn ty(node: &TypeNode) -> String {
    Printer::new().print_type(node)
}

#[test]
fn documented_primitives() {
    let b = builder();

    assert_eq!(ty(&b.type_node("Boolean")), "boolean");
    assert_eq!(ty(&b.type_node("Integer")), "number");
    assert_eq!(ty(&b.type_node("Number")), "number");
    assert_eq!(ty(&b.type_node("String")), "string");
    assert_eq!(ty(&b.type_node("Table")), "LuaTable");
    assert_eq!(ty(&b.type_node("AnyType")), "any");
    assert_eq!(ty(&b.type_node("nil")), "undefined");
    assert_eq!(b.diagnostic_count(), 0);
}

#[test]
fn known_type_is_reference() {
    let b = builder();
    let node = b.type_node("Action");

    assert_eq!(node.reference_name(), Some("Action"));
    assert_eq!(b.diagnostic_count(), 0);
}

#[test]
fn unknown_type_warns_once() {
    let b = builder();
    let node = {
        let _scope = b.scope("Foo");
        let _member = b.scope("bar");
        b.type_node("FrobnicatorXYZ")
    };

    assert_eq!(ty(&node), "FrobnicatorXYZ");
    let diagnostics = b.into_diagnostics();
    assert_eq!(diagnostics.len(), 1);
    insta::assert_snapshot!(diagnostics.render(), @r"
    warning: unknown type `FrobnicatorXYZ`
      --> Foo.bar
      = hint: emitted as a plain type reference
    ");
}

#[test]
fn type_node_passes_nodes_through() {
    let b = builder();
    let node = b.type_node(Keyword::Void);

    assert!(node.is_keyword(Keyword::Void));
}

#[test]
fn library_generics_never_warn() {
    let b = builder();
    let map = b.lua_map("String", "Page");
    let multi = b.lua_multi_return([b.tuple_member("Number"), b.tuple_member("Number")]);
    let table = b.reference("LuaTable", Vec::<TypeNode>::new());

    assert_eq!(ty(&map), "LuaMap<string, Page>");
    assert_eq!(ty(&multi), "LuaMultiReturn<[number, number]>");
    assert_eq!(ty(&table), "LuaTable");
    assert_eq!(b.diagnostic_count(), 0);
}

#[test]
fn reference_with_unknown_name() {
    let b = builder();
    let node = b.reference("Box", ["String"]);

    assert_eq!(ty(&node), "Box<string>");
    assert_eq!(b.into_diagnostics().count_of(DiagnosticKind::UnknownType), 1);
}

#[test]
fn reserved_identifier_warns() {
    let b = builder();
    let name = b.name("Delete");

    assert_eq!(name, "Delete");
    let diagnostics = b.into_diagnostics();
    assert_eq!(diagnostics.count_of(DiagnosticKind::ReservedIdentifier), 1);
}

#[test]
fn reserved_identifier_quiet() {
    let b = builder();
    let name = b.identifier("class", IdentOptions::quiet());

    assert_eq!(name, "class");
    assert_eq!(b.diagnostic_count(), 0);
}

#[test]
fn substitution_rewrites_function() {
    let b = builder();
    let param = b.param("function", "Boolean");
    let member = b.named_member("function", "Number");

    assert_eq!(param.name, "func");
    assert!(matches!(member, TupleMember::Named { ref name, .. } if name == "func"));
    assert_eq!(b.diagnostic_count(), 0);
}

#[test]
fn substitution_leaves_other_reserved_words() {
    let b = builder();
    let param = b.param("default", "Boolean");

    assert_eq!(param.name, "default");
    assert_eq!(
        b.into_diagnostics().count_of(DiagnosticKind::ReservedIdentifier),
        1
    );
}

#[test]
fn composite_types() {
    let b = builder();

    let callback = b.function_type(
        vec![b.param("state", "Boolean"), b.param("action", "Action")],
        Keyword::Void,
    );
    assert_eq!(ty(&callback), "(state: boolean, action: Action) => void");

    let optional = b.union([b.type_node("Page"), b.type_node("nil")]);
    assert_eq!(ty(&optional), "Page | undefined");

    let overloaded = b.intersection([
        b.function_type(vec![b.param("x", "Number")], "Vector3"),
        b.function_type(vec![], "Vector3"),
    ]);
    assert_eq!(ty(&overloaded), "((x: number) => Vector3) & (() => Vector3)");

    let tuple = b.tuple([b.named_member("x", "Number"), b.tuple_member("String")]);
    assert_eq!(ty(&tuple), "[x: number, string]");
}

#[test]
fn scope_pops_on_drop() {
    let b = builder();
    {
        let _outer = b.scope("Action");
        {
            let _inner = b.scope("setOnToggle");
            assert_eq!(b.location(), "Action.setOnToggle");
        }
        assert_eq!(b.location(), "Action");
    }
    assert_eq!(b.location(), "");
}

#[test]
fn statements() {
    let b = builder();

    let interface = b.interface(
        "Action",
        vec![b.property_signature("title", "String")],
        InterfaceOptions {
            extends: vec![b.heritage("Page", vec![])],
            ..InterfaceOptions::declare()
        },
    );
    let variable = b.variable("action", "Action", vec![Modifier::Declare]);
    let function = b.function(
        "id",
        vec![b.param("value", "T")],
        "T",
        FunctionOptions {
            type_params: vec![b.type_param("T", Some(Keyword::Number.into()), None)],
            ..FunctionOptions::default()
        },
    );
    let module = b.module(
        "math",
        vec![function],
        ModuleOptions {
            modifiers: vec![Modifier::Declare],
            kind: ModuleKind::Namespace,
        },
    );

    let unit = crate::ast::SourceUnit::new(vec![interface, variable, module]);
    insta::assert_snapshot!(unit.to_string(), @r"
    declare interface Action extends Page {
        title: string;
    }
    declare const action: Action;
    declare namespace math {
        function id<T extends number>(value: T): T;
    }
    ");
}

#[test]
fn attach_doc_sets_comment() {
    let b = builder();
    let doc = DocComment::new(["Hello"]);

    let element = b.attach_doc(b.property_signature("x", "Number"), Some(&doc));
    assert_eq!(element.doc(), Some(&doc));

    let element = b.attach_doc(b.property_signature("y", "Number"), None);
    assert_eq!(element.doc(), None);
}

#[test]
fn reserved_word_table() {
    assert_eq!(RESERVED_WORDS.len(), 46);
    assert!(is_reserved("FUNCTION"));
    assert!(is_reserved("yield"));
    assert!(!is_reserved("func"));
    assert!(!is_reserved("global"));
}
