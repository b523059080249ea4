use figdts_core::Colors;
use indexmap::IndexMap;

use super::{
    DocComment, FunctionDecl, HeritageType, Identifier, IndexSignature, InterfaceDecl, Keyword,
    MethodSignature, Modifier, ModuleDecl, ModuleKind, Param, Printer, PropertySignature,
    SourceUnit, Statement, TupleMember, TypeElement, TypeNode, TypeParam, VariableDecl,
};

fn ident(name: &str) -> Identifier {
    Identifier::new(name)
}

fn reference(name: &str) -> TypeNode {
    TypeNode::Reference {
        name: ident(name),
        args: Vec::new(),
    }
}

fn param(name: &str, ty: impl Into<TypeNode>) -> Param {
    Param {
        name: ident(name),
        ty: ty.into(),
    }
}

fn property(name: &str, ty: impl Into<TypeNode>) -> TypeElement {
    TypeElement::Property(PropertySignature {
        doc: None,
        name: ident(name),
        ty: ty.into(),
    })
}

fn interface(name: &str, members: Vec<TypeElement>) -> InterfaceDecl {
    InterfaceDecl {
        doc: None,
        modifiers: vec![Modifier::Declare],
        name: ident(name),
        extends: Vec::new(),
        implements: Vec::new(),
        members,
    }
}

fn heritage(name: &str) -> HeritageType {
    HeritageType {
        name: ident(name),
        args: Vec::new(),
    }
}

#[test]
fn empty_interface() {
    let stmt = Statement::Interface(interface("Empty", Vec::new()));

    insta::assert_snapshot!(Printer::new().print_statement(&stmt), @r"
    declare interface Empty {
    }
    ");
}

#[test]
fn heritage_clauses() {
    let mut decl = interface("Player", vec![property("name", Keyword::String)]);
    decl.extends = vec![
        HeritageType {
            name: ident("Entity"),
            args: vec![Keyword::Number.into()],
        },
        heritage("Living"),
    ];
    decl.implements = vec![heritage("Named")];

    insta::assert_snapshot!(Printer::new().print_statement(&Statement::Interface(decl)), @r"
    declare interface Player extends Entity<number>, Living implements Named {
        name: string;
    }
    ");
}

#[test]
fn doc_comment_blank_lines() {
    let element = TypeElement::Method(MethodSignature {
        doc: Some(DocComment::new(["Sets the title", "", "@param title text"])),
        name: ident("setTitle"),
        params: vec![param("title", Keyword::String)],
        ret: reference("Action"),
    });

    insta::assert_snapshot!(Printer::new().print_element(&element), @r"
    /**
     * Sets the title
     *
     * @param title text
     */
    setTitle(title: string): Action;
    ");
}

#[test]
fn doc_comment_escapes_terminator() {
    let element = TypeElement::Property(PropertySignature {
        doc: Some(DocComment::new(["ends here */ const injected: number; /*"])),
        name: ident("title"),
        ty: Keyword::String.into(),
    });

    insta::assert_snapshot!(Printer::new().print_element(&element), @r"
    /**
     * ends here *\/ const injected: number; /*
     */
    title: string;
    ");
}

#[test]
fn doc_comment_from_parts() {
    let mut tags = IndexMap::new();
    tags.insert("static".to_string(), String::new());
    tags.insert("see".to_string(), "a */ b".to_string());

    let tagged = DocComment::from_parts("  ", &tags).unwrap();
    assert_eq!(tagged.lines(), ["@static", "@see a *\\/ b"]);

    let described = DocComment::from_parts("First\n  second  ", &tags).unwrap();
    assert_eq!(
        described.lines(),
        ["First", "second", "", "@static", "@see a *\\/ b"]
    );

    assert_eq!(DocComment::from_parts(" \n ", &IndexMap::new()), None);
}

#[test]
fn index_signature() {
    let element = TypeElement::Index(IndexSignature {
        doc: None,
        key: param("key", Keyword::String),
        ty: reference("ModelPart"),
    });

    assert_eq!(
        Printer::new().print_element(&element),
        "[key: string]: ModelPart;\n"
    );
}

#[test]
fn tuple_members() {
    let ty = TypeNode::Reference {
        name: ident("LuaMultiReturn"),
        args: vec![TypeNode::Tuple(vec![
            TupleMember::Named {
                name: ident("min"),
                ty: Keyword::Number.into(),
            },
            TupleMember::Type(Keyword::Number.into()),
        ])],
    };

    assert_eq!(
        Printer::new().print_type(&ty),
        "LuaMultiReturn<[min: number, number]>"
    );
}

#[test]
fn composite_constituents_are_parenthesized() {
    let callback = TypeNode::Function {
        params: vec![param("x", Keyword::Number)],
        ret: Box::new(Keyword::Void.into()),
    };
    let ty = TypeNode::Union(vec![
        callback,
        TypeNode::Intersection(vec![reference("A"), reference("B")]),
        Keyword::Undefined.into(),
    ]);

    assert_eq!(
        Printer::new().print_type(&ty),
        "((x: number) => void) | (A & B) | undefined"
    );
}

#[test]
fn function_return_union_is_bare() {
    let ty = TypeNode::Function {
        params: Vec::new(),
        ret: Box::new(TypeNode::Union(vec![
            reference("Page"),
            Keyword::Undefined.into(),
        ])),
    };

    assert_eq!(Printer::new().print_type(&ty), "() => Page | undefined");
}

#[test]
fn generic_function() {
    let stmt = Statement::Function(FunctionDecl {
        doc: None,
        modifiers: vec![Modifier::Export],
        name: ident("pick"),
        type_params: vec![
            TypeParam {
                name: ident("T"),
                constraint: Some(Keyword::String.into()),
                default: None,
            },
            TypeParam {
                name: ident("U"),
                constraint: None,
                default: Some(Keyword::Unknown.into()),
            },
        ],
        params: vec![param("a", reference("T")), param("b", reference("U"))],
        ret: reference("T"),
    });

    assert_eq!(
        Printer::new().print_statement(&stmt),
        "export function pick<T extends string, U = unknown>(a: T, b: U): T;\n"
    );
}

#[test]
fn nested_modules() {
    let inner = Statement::Module(ModuleDecl {
        doc: None,
        modifiers: Vec::new(),
        name: ident("inner"),
        kind: ModuleKind::Namespace,
        body: vec![Statement::Variable(VariableDecl {
            doc: Some(DocComment::new(["Half turn"])),
            modifiers: Vec::new(),
            name: ident("pi"),
            ty: Keyword::Number.into(),
        })],
    });
    let outer = Statement::Module(ModuleDecl {
        doc: None,
        modifiers: vec![Modifier::Declare],
        name: ident("global"),
        kind: ModuleKind::Global,
        body: vec![inner],
    });

    insta::assert_snapshot!(Printer::new().print_statement(&outer), @r"
    declare global {
        namespace inner {
            /**
             * Half turn
             */
            const pi: number;
        }
    }
    ");
}

#[test]
fn indent_width() {
    let unit = SourceUnit::new(vec![Statement::Interface(interface(
        "Page",
        vec![property("title", Keyword::String)],
    ))]);

    assert_eq!(
        Printer::new().indent(2).print_unit(&unit),
        "declare interface Page {\n  title: string;\n}\n"
    );
    assert_eq!(
        Printer::new().indent(0).print_unit(&unit),
        "declare interface Page {\ntitle: string;\n}\n"
    );
}

#[test]
fn source_unit_display() {
    let unit = SourceUnit::new(vec![
        Statement::Interface(interface("A", Vec::new())),
        Statement::Interface(interface("B", Vec::new())),
    ]);

    insta::assert_snapshot!(unit.to_string(), @r"
    declare interface A {
    }
    declare interface B {
    }
    ");
}

#[test]
fn colored_tokens() {
    let mut decl = interface("Vector3", vec![property("x", Keyword::Number)]);
    decl.extends = vec![heritage("Vector")];
    decl.doc = Some(DocComment::new(["A vector"]));
    let stmt = Statement::Interface(decl);

    let out = Printer::new().colored(true).print_statement(&stmt);
    let c = Colors::ON;

    assert_eq!(
        out,
        format!(
            "{dim}/**\n * A vector\n */{reset}\n\
             {dim}declare{reset} {dim}interface{reset} {blue}Vector3{reset} \
             {dim}extends{reset} {blue}Vector{reset} {{\n    x: number;\n}}\n",
            dim = c.dim,
            blue = c.blue,
            reset = c.reset,
        )
    );
}

#[test]
fn colors_off_is_plain() {
    let stmt = Statement::Interface(interface("A", Vec::new()));

    assert_eq!(
        Printer::new().colors(Colors::OFF).print_statement(&stmt),
        Printer::new().print_statement(&stmt)
    );
}
