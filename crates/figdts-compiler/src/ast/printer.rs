//! Serializes a declaration tree to `.d.ts` text.
//!
//! Layout follows the TypeScript compiler's printer: one statement per line,
//! members indented one level, `/** ... */` comments on their own lines.

use figdts_core::Colors;

use super::{
    DocComment, FunctionDecl, HeritageType, InterfaceDecl, Modifier, ModuleDecl, ModuleKind,
    Param, SourceUnit, Statement, TupleMember, TypeElement, TypeNode, TypeParam, VariableDecl,
};

pub struct Printer {
    indent: usize,
    colors: Colors,
    depth: usize,
    output: String,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            indent: 4,
            colors: Colors::OFF,
            depth: 0,
            output: String::new(),
        }
    }

    /// Spaces per nesting level.
    pub fn indent(mut self, width: usize) -> Self {
        self.indent = width;
        self
    }

    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }

    pub fn colors(mut self, colors: Colors) -> Self {
        self.colors = colors;
        self
    }

    pub fn print_unit(mut self, unit: &SourceUnit) -> String {
        for stmt in &unit.statements {
            self.emit_statement(stmt);
        }
        self.output
    }

    pub fn print_statement(mut self, stmt: &Statement) -> String {
        self.emit_statement(stmt);
        self.output
    }

    pub fn print_element(mut self, element: &TypeElement) -> String {
        self.emit_element(element);
        self.output
    }

    /// Type expression on a single line, without a trailing newline.
    pub fn print_type(&self, ty: &TypeNode) -> String {
        self.type_to_ts(ty)
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn emit_statement(&mut self, stmt: &Statement) {
        match stmt {
            Statement::Interface(decl) => self.emit_interface(decl),
            Statement::Function(decl) => self.emit_function(decl),
            Statement::Variable(decl) => self.emit_variable(decl),
            Statement::Module(decl) => self.emit_module(decl),
        }
    }

    fn emit_interface(&mut self, decl: &InterfaceDecl) {
        self.emit_doc(decl.doc.as_ref());

        let mut header = self.modifiers(&decl.modifiers);
        header.push_str(&format!(
            "{} {}",
            self.keyword("interface"),
            self.declared(decl.name.as_str())
        ));
        if !decl.extends.is_empty() {
            header.push_str(&format!(
                " {} {}",
                self.keyword("extends"),
                self.heritage_list(&decl.extends)
            ));
        }
        if !decl.implements.is_empty() {
            header.push_str(&format!(
                " {} {}",
                self.keyword("implements"),
                self.heritage_list(&decl.implements)
            ));
        }
        self.line(&format!("{header} {{"));

        self.depth += 1;
        for member in &decl.members {
            self.emit_element(member);
        }
        self.depth -= 1;

        self.line("}");
    }

    fn emit_function(&mut self, decl: &FunctionDecl) {
        self.emit_doc(decl.doc.as_ref());

        let text = format!(
            "{}{} {}{}({}): {};",
            self.modifiers(&decl.modifiers),
            self.keyword("function"),
            self.declared(decl.name.as_str()),
            self.type_params(&decl.type_params),
            self.params(&decl.params),
            self.type_to_ts(&decl.ret)
        );
        self.line(&text);
    }

    fn emit_variable(&mut self, decl: &VariableDecl) {
        self.emit_doc(decl.doc.as_ref());

        let text = format!(
            "{}{} {}: {};",
            self.modifiers(&decl.modifiers),
            self.keyword("const"),
            self.declared(decl.name.as_str()),
            self.type_to_ts(&decl.ty)
        );
        self.line(&text);
    }

    fn emit_module(&mut self, decl: &ModuleDecl) {
        self.emit_doc(decl.doc.as_ref());

        let header = match decl.kind {
            ModuleKind::Global => {
                format!("{}{}", self.modifiers(&decl.modifiers), self.keyword("global"))
            }
            ModuleKind::Namespace => format!(
                "{}{} {}",
                self.modifiers(&decl.modifiers),
                self.keyword("namespace"),
                self.declared(decl.name.as_str())
            ),
        };
        self.line(&format!("{header} {{"));

        self.depth += 1;
        for stmt in &decl.body {
            self.emit_statement(stmt);
        }
        self.depth -= 1;

        self.line("}");
    }

    // ========================================================================
    // Members
    // ========================================================================

    fn emit_element(&mut self, element: &TypeElement) {
        match element {
            TypeElement::Method(m) => {
                self.emit_doc(m.doc.as_ref());
                let text = format!(
                    "{}({}): {};",
                    m.name,
                    self.params(&m.params),
                    self.type_to_ts(&m.ret)
                );
                self.line(&text);
            }
            TypeElement::Property(p) => {
                self.emit_doc(p.doc.as_ref());
                let text = format!("{}: {};", p.name, self.type_to_ts(&p.ty));
                self.line(&text);
            }
            TypeElement::Index(i) => {
                self.emit_doc(i.doc.as_ref());
                let text = format!("[{}]: {};", self.param(&i.key), self.type_to_ts(&i.ty));
                self.line(&text);
            }
        }
    }

    fn emit_doc(&mut self, doc: Option<&DocComment>) {
        let Some(doc) = doc else {
            return;
        };

        let c = self.colors;
        self.line(&format!("{}/**", c.dim));
        for line in doc.lines() {
            if line.is_empty() {
                self.line(" *");
            } else {
                self.line(&format!(" * {line}"));
            }
        }
        self.line(&format!(" */{}", c.reset));
    }

    // ========================================================================
    // Types
    // ========================================================================

    fn type_to_ts(&self, ty: &TypeNode) -> String {
        match ty {
            TypeNode::Keyword(keyword) => keyword.as_str().to_string(),
            TypeNode::Reference { name, args } => {
                let name = self.colors.paint(self.colors.blue, name.as_str());
                if args.is_empty() {
                    name
                } else {
                    format!("{name}<{}>", self.type_list(args))
                }
            }
            TypeNode::Union(members) => self.constituents(members, " | "),
            TypeNode::Intersection(members) => self.constituents(members, " & "),
            TypeNode::Tuple(members) => {
                let members: Vec<String> = members
                    .iter()
                    .map(|member| match member {
                        TupleMember::Type(ty) => self.type_to_ts(ty),
                        TupleMember::Named { name, ty } => {
                            format!("{name}: {}", self.type_to_ts(ty))
                        }
                    })
                    .collect();
                format!("[{}]", members.join(", "))
            }
            TypeNode::Function { params, ret } => {
                format!("({}) => {}", self.params(params), self.type_to_ts(ret))
            }
        }
    }

    fn constituents(&self, members: &[TypeNode], separator: &str) -> String {
        members
            .iter()
            .map(|member| {
                let text = self.type_to_ts(member);
                if member.needs_constituent_parens() {
                    format!("({text})")
                } else {
                    text
                }
            })
            .collect::<Vec<_>>()
            .join(separator)
    }

    fn type_list(&self, types: &[TypeNode]) -> String {
        types
            .iter()
            .map(|ty| self.type_to_ts(ty))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn param(&self, param: &Param) -> String {
        format!("{}: {}", param.name, self.type_to_ts(&param.ty))
    }

    fn params(&self, params: &[Param]) -> String {
        params
            .iter()
            .map(|p| self.param(p))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn type_params(&self, type_params: &[TypeParam]) -> String {
        if type_params.is_empty() {
            return String::new();
        }

        let params: Vec<String> = type_params
            .iter()
            .map(|tp| {
                let mut text = tp.name.to_string();
                if let Some(constraint) = &tp.constraint {
                    text.push_str(&format!(
                        " {} {}",
                        self.keyword("extends"),
                        self.type_to_ts(constraint)
                    ));
                }
                if let Some(default) = &tp.default {
                    text.push_str(&format!(" = {}", self.type_to_ts(default)));
                }
                text
            })
            .collect();
        format!("<{}>", params.join(", "))
    }

    fn heritage_list(&self, types: &[HeritageType]) -> String {
        types
            .iter()
            .map(|h| {
                let name = self.colors.paint(self.colors.blue, h.name.as_str());
                if h.args.is_empty() {
                    name
                } else {
                    format!("{name}<{}>", self.type_list(&h.args))
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    // ========================================================================
    // Tokens
    // ========================================================================

    fn modifiers(&self, modifiers: &[Modifier]) -> String {
        modifiers
            .iter()
            .map(|m| format!("{} ", self.keyword(m.as_str())))
            .collect()
    }

    fn keyword(&self, text: &str) -> String {
        self.colors.paint(self.colors.dim, text)
    }

    fn declared(&self, name: &str) -> String {
        self.colors.paint(self.colors.blue, name)
    }

    fn line(&mut self, text: &str) {
        let width = self.depth * self.indent;
        self.output.push_str(&" ".repeat(width));
        self.output.push_str(text);
        self.output.push('\n');
    }
}
