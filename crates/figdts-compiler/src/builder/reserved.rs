//! Words that cannot safely be used as declaration names.

pub const RESERVED_WORDS: &[&str] = &[
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "import",
    "in",
    "instanceof",
    "new",
    "null",
    "return",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "as",
    "implements",
    "interface",
    "let",
    "package",
    "private",
    "protected",
    "public",
    "static",
    "yield",
];

/// Case-insensitive membership in [`RESERVED_WORDS`].
pub fn is_reserved(name: &str) -> bool {
    let lower = name.to_lowercase();
    RESERVED_WORDS.contains(&lower.as_str())
}

/// The one reserved word that documentation uses as a parameter name.
pub(crate) fn substitute(name: &str) -> &str {
    match name {
        "function" => "func",
        other => other,
    }
}
