//! C# frontend: tree-sitter parse, kind lowering, declared-type binding.
//!
//! Two passes over the tree-sitter tree. The first collects the file's
//! `using` directives and the declared return types of its methods and
//! local functions. The second lowers nodes into [`SyntaxKind`] shapes and
//! attaches resolved [`TypeDescriptor`]s to constructions and calls. Names
//! that do not resolve simply produce no attachment; the rule skips those
//! nodes.

use leaklint_core::config::FrontendConfig;
use leaklint_core::diagnostics::Finding;
use leaklint_core::errors::ParseError;
use leaklint_core::span::{Pos, Span};
use rustc_hash::FxHashMap;
use tree_sitter::{Node, Parser};

use crate::engine::AnalysisEngine;
use crate::semantic::{TableSemantics, TypeDescriptor};
use crate::syntax::{SyntaxKind, SyntaxTree, TreeBuilder};

use super::TypeCatalog;

/// A lowered compilation unit: the tree plus the semantics bound for it.
pub struct ParsedUnit {
    pub tree: SyntaxTree,
    pub semantics: TableSemantics,
}

/// Frontend turning C# source text into analyzable units.
pub struct CSharpFrontend {
    catalog: TypeCatalog,
    config: FrontendConfig,
}

impl CSharpFrontend {
    pub fn new(catalog: TypeCatalog) -> Self {
        Self {
            catalog,
            config: FrontendConfig::default(),
        }
    }

    pub fn with_config(catalog: TypeCatalog, config: FrontendConfig) -> Self {
        Self { catalog, config }
    }

    /// Parse `source` and lower it to a syntax tree plus bound semantics.
    ///
    /// A tree containing syntax errors still lowers: unrecognized regions
    /// become `Other` nodes and analysis covers whatever did parse.
    pub fn lower(&self, source: &str) -> Result<ParsedUnit, ParseError> {
        let limit = self.config.effective_max_file_size();
        if source.len() as u64 > limit {
            return Err(ParseError::InputTooLarge {
                size: source.len() as u64,
                limit,
            });
        }

        let mut parser = Parser::new();
        let language: tree_sitter::Language = tree_sitter_c_sharp::LANGUAGE.into();
        parser
            .set_language(&language)
            .map_err(|e| ParseError::GrammarUnavailable {
                language: "c_sharp".to_string(),
                message: e.to_string(),
            })?;
        let ts_tree = parser.parse(source, None).ok_or_else(|| ParseError::Unparseable {
            path: "<memory>".to_string(),
        })?;

        let mut lowering = Lowering::new(source.as_bytes(), &self.catalog);
        lowering
            .usings
            .extend(self.config.implicit_usings.iter().cloned());
        lowering.collect_bindings(ts_tree.root_node());
        tracing::debug!(
            usings = lowering.usings.len(),
            local_methods = lowering.local_methods.len(),
            "declared-type binding collected"
        );

        Ok(lowering.lower_unit(ts_tree.root_node()))
    }

    /// Parse, bind, and analyze in one call with a default engine.
    pub fn analyze_source(&self, source: &str) -> Result<Vec<Finding>, ParseError> {
        let unit = self.lower(source)?;
        let engine = AnalysisEngine::new();
        Ok(engine.run_collect(&unit.tree, &unit.semantics))
    }
}

/// Node kinds that spell a type name.
const TYPE_KINDS: &[&str] = &[
    "predefined_type",
    "identifier",
    "qualified_name",
    "generic_name",
    "nullable_type",
    "alias_qualified_name",
];

struct Lowering<'a> {
    source: &'a [u8],
    catalog: &'a TypeCatalog,
    builder: TreeBuilder,
    semantics: TableSemantics,
    usings: Vec<String>,
    local_methods: FxHashMap<String, String>,
}

impl<'a> Lowering<'a> {
    fn new(source: &'a [u8], catalog: &'a TypeCatalog) -> Self {
        Self {
            source,
            catalog,
            builder: TreeBuilder::new(),
            semantics: TableSemantics::new(),
            usings: Vec::new(),
            local_methods: FxHashMap::default(),
        }
    }

    /// First pass: imports and declared method return types.
    fn collect_bindings(&mut self, node: Node<'_>) {
        match node.kind() {
            "using_directive" => {
                if let Some(namespace) = directive_namespace(&node, self.source) {
                    self.usings.push(namespace);
                }
            }
            "method_declaration" | "local_function_statement" => {
                let name = node
                    .child_by_field_name("name")
                    .and_then(|n| n.utf8_text(self.source).ok());
                let returns = return_type_node(&node)
                    .and_then(|n| n.utf8_text(self.source).ok());
                if let (Some(name), Some(returns)) = (name, returns) {
                    self.local_methods
                        .insert(name.to_string(), returns.to_string());
                }
            }
            _ => {}
        }
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            self.collect_bindings(child);
        }
    }

    /// Second pass: lower the whole unit.
    fn lower_unit(mut self, root: Node<'_>) -> ParsedUnit {
        self.builder.open(SyntaxKind::SourceFile, span(&root));
        self.lower_children(root);
        self.builder.close();
        ParsedUnit {
            tree: self.builder.finish(),
            semantics: self.semantics,
        }
    }

    fn lower_children(&mut self, node: Node<'_>) {
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            self.lower_node(child);
        }
    }

    fn lower_node(&mut self, node: Node<'_>) {
        match node.kind() {
            "comment" => {}
            "class_declaration" | "struct_declaration" | "record_declaration"
            | "interface_declaration" => {
                self.lower_plain(SyntaxKind::ClassDeclaration, node);
            }
            "method_declaration" | "constructor_declaration" | "local_function_statement" => {
                self.lower_plain(SyntaxKind::MethodDeclaration, node);
            }
            "property_declaration" => {
                self.lower_plain(SyntaxKind::PropertyDeclaration, node);
            }
            "field_declaration" => {
                self.lower_plain(SyntaxKind::FieldDeclaration, node);
            }
            "variable_declaration" => {
                self.lower_plain(SyntaxKind::VariableDeclaration, node);
            }
            "local_declaration_statement" if has_using_keyword(&node) => {
                // `using var x = ...;` guards its declaration to scope end.
                self.builder.open(SyntaxKind::ScopeGuard, span(&node));
                self.builder.open(SyntaxKind::Binding, span(&node));
                self.lower_children(node);
                self.builder.close();
                self.builder.close();
            }
            "using_statement" => self.lower_scope_guard(node),
            "object_creation_expression" | "implicit_object_creation_expression" => {
                let id = self.builder.open(SyntaxKind::Construction, span(&node));
                if let Some(ty) = self.construction_descriptor(&node) {
                    self.semantics.attach(id, ty);
                }
                self.lower_children(node);
                self.builder.close();
            }
            "invocation_expression" => {
                let callee = node
                    .child_by_field_name("function")
                    .or_else(|| first_named_child(&node));
                // The call node carries the callee's span so findings point
                // at the call target, not the argument list.
                let call_span = callee.map_or_else(|| span(&node), |c| span(&c));
                let id = self.builder.open(SyntaxKind::Call, call_span);
                if let Some(ty) = self.call_descriptor(callee.as_ref()) {
                    self.semantics.attach(id, ty);
                }
                self.lower_children(node);
                self.builder.close();
            }
            "argument_list" | "bracketed_argument_list" => {
                self.lower_plain(SyntaxKind::ArgumentList, node);
            }
            "argument" => {
                self.lower_plain(SyntaxKind::Argument, node);
            }
            "block" => {
                self.lower_plain(SyntaxKind::Block, node);
            }
            "identifier" => {
                self.builder.leaf(SyntaxKind::Identifier, span(&node));
            }
            _ => {
                self.lower_plain(SyntaxKind::Other, node);
            }
        }
    }

    fn lower_plain(&mut self, kind: SyntaxKind, node: Node<'_>) {
        self.builder.open(kind, span(&node));
        self.lower_children(node);
        self.builder.close();
    }

    /// `using (...) body`: the resource part becomes the guard's first
    /// child (a `Binding`), the body follows it.
    fn lower_scope_guard(&mut self, node: Node<'_>) {
        let body = node
            .child_by_field_name("body")
            .or_else(|| last_statement_child(&node));
        let body_id = body.map(|b| b.id());

        let mut cursor = node.walk();
        let resources: Vec<Node<'_>> = node
            .named_children(&mut cursor)
            .filter(|c| Some(c.id()) != body_id && c.kind() != "comment")
            .collect();

        self.builder.open(SyntaxKind::ScopeGuard, span(&node));
        let binding_span = resources
            .iter()
            .map(span)
            .reduce(Span::merge)
            .unwrap_or_else(|| span(&node));
        self.builder.open(SyntaxKind::Binding, binding_span);
        for resource in resources {
            self.lower_node(resource);
        }
        self.builder.close();
        if let Some(body) = body {
            self.lower_node(body);
        }
        self.builder.close();
    }

    fn construction_descriptor(&self, node: &Node<'_>) -> Option<TypeDescriptor> {
        let type_node = node
            .child_by_field_name("type")
            .or_else(|| first_type_child(node))?;
        let text = type_node.utf8_text(self.source).ok()?;
        let name = normalize_type_text(text)?;
        self.catalog.resolve(&name, &self.usings).cloned()
    }

    /// Declared return type of the callee: local methods take precedence;
    /// anything unknown stays unresolved.
    fn call_descriptor(&self, callee: Option<&Node<'_>>) -> Option<TypeDescriptor> {
        let callee = callee?;
        let name_node = match callee.kind() {
            "member_access_expression" => callee
                .child_by_field_name("name")
                .or_else(|| last_named_child(callee))?,
            _ => *callee,
        };
        let text = name_node.utf8_text(self.source).ok()?;
        let simple = normalize_type_text(text)?;
        let declared = self.local_methods.get(&simple)?;
        let return_name = normalize_type_text(declared)?;
        self.catalog.resolve(&return_name, &self.usings).cloned()
    }
}

/// Convert a tree-sitter node range to a 1-based span.
fn span(node: &Node<'_>) -> Span {
    let start = node.start_position();
    let end = node.end_position();
    Span::new(
        Pos::new(start.row as u32 + 1, start.column as u32 + 1),
        Pos::new(end.row as u32 + 1, end.column as u32 + 1),
    )
}

/// Strip generic arguments and nullable suffixes from a type spelling.
/// Arrays and pointers are not the element type, so they yield `None`.
fn normalize_type_text(text: &str) -> Option<String> {
    let text = text.trim();
    if text.ends_with("[]") || text.ends_with('*') {
        return None;
    }
    let base = match text.find('<') {
        Some(idx) => &text[..idx],
        None => text,
    };
    let base = base.trim().trim_end_matches('?');
    if base.is_empty() {
        return None;
    }
    Some(base.to_string())
}

fn directive_namespace(node: &Node<'_>, source: &[u8]) -> Option<String> {
    let mut cursor = node.walk();
    let name = node
        .named_children(&mut cursor)
        .filter(|c| {
            matches!(
                c.kind(),
                "qualified_name" | "identifier" | "alias_qualified_name"
            )
        })
        .last()?;
    name.utf8_text(source).ok().map(str::to_string)
}

/// Return-type child of a method-like declaration. Field names differ
/// between grammar revisions, so fall back to the last type-shaped child
/// before the name.
fn return_type_node<'t>(node: &Node<'t>) -> Option<Node<'t>> {
    node.child_by_field_name("returns")
        .or_else(|| node.child_by_field_name("type"))
        .or_else(|| {
            let name_id = node.child_by_field_name("name")?.id();
            let mut cursor = node.walk();
            node.named_children(&mut cursor)
                .take_while(|c| c.id() != name_id)
                .filter(|c| TYPE_KINDS.contains(&c.kind()))
                .last()
        })
}

fn first_type_child<'t>(node: &Node<'t>) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let found = node
        .named_children(&mut cursor)
        .find(|c| TYPE_KINDS.contains(&c.kind()));
    found
}

fn first_named_child<'t>(node: &Node<'t>) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let first = node.named_children(&mut cursor).next();
    first
}

fn last_named_child<'t>(node: &Node<'t>) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).last()
}

fn last_statement_child<'t>(node: &Node<'t>) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|c| c.kind() == "block" || c.kind().ends_with("_statement"))
        .last()
}

fn has_using_keyword(node: &Node<'_>) -> bool {
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .any(|child| !child.is_named() && child.kind() == "using");
    found
}
