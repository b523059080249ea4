use figdts_core::{Field, Parameter};

use super::*;
use crate::ast::{Keyword, Printer};
use crate::builder::Builder;

const KNOWN: &[&str] = &[
    "Action",
    "Animation",
    "BlockState",
    "Keybind",
    "Matrix2",
    "Matrix3",
    "Matrix4",
    "Page",
    "PlayerAPI",
    "Vector2",
    "Vector3",
    "Vector4",
];

fn builder() -> Builder {
    Builder::new(KNOWN.iter().copied())
}

fn ty(node: &TypeNode) -> String {
    Printer::new().print_type(node)
}

fn param(name: &str, type_name: &str) -> Parameter {
    Parameter {
        name: name.to_string(),
        type_name: type_name.to_string(),
    }
}

fn field(name: &str, type_name: &str) -> Field {
    Field {
        name: name.to_string(),
        description: String::new(),
        type_name: type_name.to_string(),
        editable: false,
        children: Vec::new(),
    }
}

fn resolve_param(owner: &str, member: &str, documented: &str) -> String {
    let b = builder();
    let p = param("callback", documented);
    let node = Overrides::builtin().resolve(&b, &Site::parameter(owner, member, 0, &p));
    ty(&node)
}

fn resolve_return(owner: &str, member: &str, documented: &str) -> String {
    let b = builder();
    let node = Overrides::builtin().resolve(&b, &Site::ret(owner, member, 0, documented));
    ty(&node)
}

fn resolve_field(owner: &str, name: &str, documented: &str) -> String {
    let b = builder();
    let f = field(name, documented);
    let node = Overrides::builtin().resolve(&b, &Site::field(owner, &f));
    ty(&node)
}

#[test]
fn toggle_parameter() {
    insta::assert_snapshot!(
        resolve_param("Action", "setOnToggle", "Function"),
        @"(state: boolean, action: Action) => void"
    );
}

#[test]
fn parameter_rule_needs_function() {
    assert_eq!(resolve_param("Action", "setOnToggle", "Boolean"), "boolean");
}

#[test]
fn parameter_rules() {
    insta::assert_snapshot!(resolve_param("Action", "setOnLeftClick", "Function"), @"(action: Action) => void");
    insta::assert_snapshot!(resolve_param("Action", "setOnScroll", "Function"), @"(delta: number, action: Action) => void");
    insta::assert_snapshot!(resolve_param("Event", "register", "Function"), @"() => void");
    insta::assert_snapshot!(resolve_param("ModelPart", "setMidRender", "Function"), @"() => void");
    insta::assert_snapshot!(resolve_param("Keybind", "setOnRelease", "Function"), @"(modifiersBitmask: number, keybind: Keybind) => void");
    insta::assert_snapshot!(resolve_param("Texture", "applyFunc", "Function"), @"(color: Vector4, x: number, y: number) => Vector4 | undefined");
    insta::assert_snapshot!(resolve_param("Vector3", "applyFunc", "Function"), @"(element: number, index: number) => number");
}

#[test]
fn field_rules() {
    insta::assert_snapshot!(resolve_field("ActionWheelAPI", "leftClick", "Function"), @"() => void");
    insta::assert_snapshot!(resolve_field("ActionWheelAPI", "scroll", "Function"), @"(delta: number) => void");
    insta::assert_snapshot!(resolve_field("Action", "untoggle", "Function"), @"(state: boolean, action: Action) => void");
    insta::assert_snapshot!(resolve_field("Action", "scroll", "Function"), @"(delta: number, action: Action) => void");
    insta::assert_snapshot!(resolve_field("ModelPart", "postRender", "Function"), @"() => void");
    insta::assert_snapshot!(resolve_field("Keybind", "press", "Function"), @"(modifiersBitmask: number, keybind: Keybind) => void");
}

#[test]
fn field_rule_only_for_its_target() {
    // `scroll` on Action is a field rule; a method parameter with the same
    // owner and member name keeps its documented type.
    let b = builder();
    let p = param("callback", "Function");
    let site = Site::parameter("Action", "scroll", 0, &p);

    assert!(Overrides::builtin().lookup(&b, &site).is_none());
}

#[test]
fn return_rules() {
    insta::assert_snapshot!(resolve_return("ActionWheelAPI", "getPage", "Table"), @"LuaMap<string, Page>");
    insta::assert_snapshot!(resolve_return("ActionWheelAPI", "getPage", "Page"), @"Page | undefined");
    insta::assert_snapshot!(resolve_return("SoundAPI", "getCustomSounds", "Table"), @"LuaMap<number, string>");
    insta::assert_snapshot!(resolve_return("SoundAPI", "getCustomSounds", "String"), @"LuaMap<number, string>");
    insta::assert_snapshot!(resolve_return("AnimationAPI", "getPlaying", "Table"), @"LuaMap<string, Animation>");
    insta::assert_snapshot!(resolve_return("BlockState", "getEntityData", "Table"), @"LuaMap<string, any>");
    insta::assert_snapshot!(resolve_return("BlockState", "getFluidTags", "Table"), @"LuaMap<number, string>");
    insta::assert_snapshot!(resolve_return("Biome", "getTags", "Table"), @"LuaMap<number, string>");
    insta::assert_snapshot!(resolve_return("BlockState", "getOutlineShape", "Table"), @"LuaMap<number, LuaMap<number, Vector3>>");
    insta::assert_snapshot!(resolve_return("BlockState", "getSounds", "Table"), @"LuaMap<string, string | number>");
    insta::assert_snapshot!(resolve_return("WorldAPI", "getBlocks", "Table"), @"LuaMap<number, BlockState>");
    insta::assert_snapshot!(resolve_return("WorldAPI", "getPlayers", "Table"), @"LuaMap<string, PlayerAPI>");
    insta::assert_snapshot!(resolve_return("WorldAPI", "avatarVars", "Table"), @"LuaMap<string, LuaMap<string, any>>");
    insta::assert_snapshot!(resolve_return("WorldAPI", "getBuildHeight", "Varargs"), @"LuaMultiReturn<[number, number]>");
}

#[test]
fn table_return_rule_needs_table() {
    assert_eq!(resolve_return("BlockState", "getTags", "String"), "string");
    assert_eq!(resolve_return("WorldAPI", "getBlocks", "nil"), "undefined");
}

#[test]
fn vec_variable() {
    let b = builder();
    let f = field("vec", "Function");
    let node = Overrides::builtin().resolve(&b, &Site::variable("globals", &f));

    insta::assert_snapshot!(
        ty(&node),
        @"((x: number, y: number) => Vector2) & ((x: number, y: number, z: number) => Vector3) & ((x: number, y: number, z: number, w: number) => Vector4)"
    );
    assert_eq!(b.diagnostic_count(), 0);
}

#[test]
fn vec_only_on_globals() {
    let b = builder();
    let f = field("vec", "Number");
    let node = Overrides::builtin().resolve(&b, &Site::variable("math", &f));

    assert_eq!(ty(&node), "number");
}

#[test]
fn unmatched_site_uses_documented_type() {
    assert_eq!(resolve_return("Nobody", "nothing", "Integer"), "number");
    assert_eq!(resolve_return("Nobody", "nothing", "Table"), "LuaTable");
}

#[test]
fn lerp_signature() {
    let b = builder();
    let rule = Overrides::builtin().signature_for("lerp").unwrap();
    let statements = rule(&b, "lerp");

    assert_eq!(statements.len(), 1);
    insta::assert_snapshot!(
        Printer::new().print_statement(&statements[0]),
        @"function lerp<T extends number | Vector2 | Vector3 | Vector4 | Matrix2 | Matrix3 | Matrix4>(start: T, end: T, t: number): T;"
    );
}

#[test]
fn custom_rules_are_additive() {
    let mut overrides = Overrides::new();
    overrides
        .rule("Foo", "bar", Target::Return, |_, site| {
            (site.documented == "Skip").then(|| Keyword::Never.into())
        })
        .rule("Foo", "bar", Target::Return, |_, _| Some(Keyword::Unknown.into()));

    let b = builder();
    let skipped = overrides.resolve(&b, &Site::ret("Foo", "bar", 0, "Skip"));
    let fallback = overrides.resolve(&b, &Site::ret("Foo", "bar", 0, "Integer"));

    assert_eq!(ty(&skipped), "never");
    assert_eq!(ty(&fallback), "unknown");
}

#[test]
fn cross_product_registration() {
    let mut overrides = Overrides::new();
    overrides.rules(&["A", "B"], &["x", "y"], Target::Field, |_, _| {
        Some(Keyword::Never.into())
    });

    let b = builder();
    for owner in ["A", "B"] {
        for member in ["x", "y"] {
            let f = field(member, "Integer");
            let node = overrides.resolve(&b, &Site::field(owner, &f));
            assert!(node.is_keyword(Keyword::Never), "{owner}.{member}");
        }
    }

    let f = field("z", "Integer");
    assert!(overrides.lookup(&b, &Site::field("A", &f)).is_none());
}

#[test]
fn empty_table() {
    assert!(Overrides::new().is_empty());
    assert!(!Overrides::builtin().is_empty());
    assert!(Overrides::new().signature_for("lerp").is_none());
}
