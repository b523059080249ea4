//! Rules for the documented scripting API.

use crate::ast::{Keyword, Statement, TypeNode};
use crate::builder::{Builder, FunctionOptions};

use super::{Overrides, Site, Target};

impl Overrides {
    /// The rule set for the published documentation.
    pub fn builtin() -> Self {
        let mut o = Self::new();
        register_fields(&mut o);
        register_parameters(&mut o);
        register_returns(&mut o);
        register_variables(&mut o);
        o.signature("lerp", lerp);
        o
    }
}

// ============================================================================
// Shared callback shapes
// ============================================================================

fn no_args(b: &Builder, site: &Site<'_>) -> Option<TypeNode> {
    site.is_function()
        .then(|| b.function_type(vec![], Keyword::Void))
}

fn action_callback(b: &Builder, site: &Site<'_>) -> Option<TypeNode> {
    site.is_function()
        .then(|| b.function_type(vec![b.param("action", "Action")], Keyword::Void))
}

fn toggle_callback(b: &Builder, site: &Site<'_>) -> Option<TypeNode> {
    site.is_function().then(|| {
        b.function_type(
            vec![
                b.param("state", Keyword::Boolean),
                b.param("action", "Action"),
            ],
            Keyword::Void,
        )
    })
}

fn action_scroll_callback(b: &Builder, site: &Site<'_>) -> Option<TypeNode> {
    site.is_function().then(|| {
        b.function_type(
            vec![
                b.param("delta", Keyword::Number),
                b.param("action", "Action"),
            ],
            Keyword::Void,
        )
    })
}

fn keybind_callback(b: &Builder, site: &Site<'_>) -> Option<TypeNode> {
    site.is_function().then(|| {
        b.function_type(
            vec![
                b.param("modifiersBitmask", Keyword::Number),
                b.param("keybind", "Keybind"),
            ],
            Keyword::Void,
        )
    })
}

// ============================================================================
// Registration
// ============================================================================

fn register_fields(o: &mut Overrides) {
    o.rules(
        &["ActionWheelAPI"],
        &["leftClick", "rightClick"],
        Target::Field,
        no_args,
    );
    o.rule("ActionWheelAPI", "scroll", Target::Field, |b, site| {
        site.is_function()
            .then(|| b.function_type(vec![b.param("delta", Keyword::Number)], Keyword::Void))
    });

    o.rules(
        &["Action"],
        &["leftClick", "rightClick"],
        Target::Field,
        action_callback,
    );
    o.rules(
        &["Action"],
        &["toggle", "untoggle"],
        Target::Field,
        toggle_callback,
    );
    o.rule("Action", "scroll", Target::Field, action_scroll_callback);

    o.rules(
        &["ModelPart"],
        &["preRender", "midRender", "postRender"],
        Target::Field,
        no_args,
    );

    o.rules(
        &["Keybind"],
        &["press", "release"],
        Target::Field,
        keybind_callback,
    );
}

fn register_parameters(o: &mut Overrides) {
    o.rules(
        &["Action"],
        &["setOnLeftClick", "setOnRightClick"],
        Target::Parameter,
        action_callback,
    );
    o.rules(
        &["Action"],
        &["setOnToggle", "setOnUntoggle"],
        Target::Parameter,
        toggle_callback,
    );
    o.rule(
        "Action",
        "setOnScroll",
        Target::Parameter,
        action_scroll_callback,
    );

    o.rules(
        &["Event"],
        &["remove", "register"],
        Target::Parameter,
        no_args,
    );

    o.rules(
        &["ModelPart"],
        &["setPreRender", "setMidRender", "setPostRender"],
        Target::Parameter,
        no_args,
    );

    o.rules(
        &["Keybind"],
        &["setOnPress", "setOnRelease"],
        Target::Parameter,
        keybind_callback,
    );

    o.rule("Texture", "applyFunc", Target::Parameter, |b, site| {
        site.is_function().then(|| {
            b.function_type(
                vec![
                    b.param("color", "Vector4"),
                    b.param("x", Keyword::Number),
                    b.param("y", Keyword::Number),
                ],
                b.union([b.type_node("Vector4"), Keyword::Undefined.into()]),
            )
        })
    });

    o.rules(
        &["Vector2", "Vector3", "Vector4"],
        &["applyFunc"],
        Target::Parameter,
        |b, site| {
            site.is_function().then(|| {
                b.function_type(
                    vec![
                        b.param("element", Keyword::Number),
                        b.param("index", Keyword::Number),
                    ],
                    Keyword::Number,
                )
            })
        },
    );
}

fn register_returns(o: &mut Overrides) {
    o.rule("ActionWheelAPI", "getPage", Target::Return, |b, site| {
        if site.is_table() {
            Some(b.lua_map(Keyword::String, "Page"))
        } else {
            Some(b.union([b.type_node("Page"), Keyword::Undefined.into()]))
        }
    });

    o.rule("SoundAPI", "getCustomSounds", Target::Return, |b, _| {
        Some(b.lua_map(Keyword::Number, Keyword::String))
    });

    o.rules(
        &["AnimationAPI"],
        &["getPlaying", "getAnimations"],
        Target::Return,
        |b, site| {
            site.is_table()
                .then(|| b.lua_map(Keyword::String, "Animation"))
        },
    );

    o.rules(
        &["BlockState"],
        &["getProperties", "getEntityData"],
        Target::Return,
        |b, site| {
            site.is_table()
                .then(|| b.lua_map(Keyword::String, Keyword::Any))
        },
    );
    o.rules(
        &["BlockState", "Biome"],
        &["getTags"],
        Target::Return,
        string_list,
    );
    o.rule("BlockState", "getFluidTags", Target::Return, string_list);
    o.rules(
        &["BlockState"],
        &["getCollisionShape", "getOutlineShape"],
        Target::Return,
        |b, site| {
            site.is_table().then(|| {
                b.lua_map(Keyword::Number, b.lua_map(Keyword::Number, "Vector3"))
            })
        },
    );
    o.rule("BlockState", "getSounds", Target::Return, |b, site| {
        site.is_table().then(|| {
            b.lua_map(
                Keyword::String,
                b.union([Keyword::String, Keyword::Number]),
            )
        })
    });

    o.rule("WorldAPI", "getBlocks", Target::Return, |b, site| {
        site.is_table()
            .then(|| b.lua_map(Keyword::Number, "BlockState"))
    });
    o.rule("WorldAPI", "getPlayers", Target::Return, |b, site| {
        site.is_table()
            .then(|| b.lua_map(Keyword::String, "PlayerAPI"))
    });
    o.rule("WorldAPI", "avatarVars", Target::Return, |b, site| {
        site.is_table().then(|| {
            b.lua_map(Keyword::String, b.lua_map(Keyword::String, Keyword::Any))
        })
    });
    o.rule("WorldAPI", "getBuildHeight", Target::Return, |b, site| {
        (site.documented == "Varargs").then(|| {
            b.lua_multi_return([
                b.tuple_member(Keyword::Number),
                b.tuple_member(Keyword::Number),
            ])
        })
    });
}

fn string_list(b: &Builder, site: &Site<'_>) -> Option<TypeNode> {
    site.is_table()
        .then(|| b.lua_map(Keyword::Number, Keyword::String))
}

fn register_variables(o: &mut Overrides) {
    o.rule("globals", "vec", Target::Variable, |b, _| {
        Some(b.intersection([
            vector_constructor(b, &["x", "y"], "Vector2"),
            vector_constructor(b, &["x", "y", "z"], "Vector3"),
            vector_constructor(b, &["x", "y", "z", "w"], "Vector4"),
        ]))
    });
}

fn vector_constructor(b: &Builder, axes: &[&str], result: &str) -> TypeNode {
    let params = axes
        .iter()
        .map(|axis| b.param(axis, Keyword::Number))
        .collect();
    b.function_type(params, result)
}

// ============================================================================
// Signatures
// ============================================================================

/// `function lerp<T extends number | Vector2 | ... | Matrix4>(start: T, end: T, t: number): T;`
fn lerp(b: &Builder, name: &str) -> Vec<Statement> {
    let interpolated = b.union([
        b.type_node(Keyword::Number),
        b.type_node("Vector2"),
        b.type_node("Vector3"),
        b.type_node("Vector4"),
        b.type_node("Matrix2"),
        b.type_node("Matrix3"),
        b.type_node("Matrix4"),
    ]);

    vec![b.function(
        name,
        vec![
            b.param("start", "T"),
            b.param("end", "T"),
            b.param("t", Keyword::Number),
        ],
        "T",
        FunctionOptions {
            type_params: vec![b.type_param("T", Some(interpolated), None)],
            ..FunctionOptions::default()
        },
    )]
}
