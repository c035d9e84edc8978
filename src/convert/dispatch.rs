//! The dispatcher: per-kind shape extraction.
//!
//! `shape` classifies one syntax node against the declared schema and
//! describes the output node it maps to: type tag, optional declared
//! name, optional literal value, and the ordered child syntax nodes to
//! recurse into. Only the substructure meaningful to the kind is
//! selected, through the frontend's field accessors, in the kind's own
//! semantic order. Nothing here recurses; the builder drives traversal.

use tree_sitter::Node;

use crate::error::ConvertError;
use crate::parser::ParsedUnit;

use super::kind::NodeKind;

/// Flat description of one output node, produced by the dispatcher and
/// consumed by the builder.
#[derive(Debug)]
pub struct NodeShape<'a> {
    /// Grammar kind name, used as the output `type` tag.
    pub kind: &'static str,
    /// Declared identifier, for name-binding declaration kinds.
    pub name: Option<String>,
    /// Literal or identifier text, for leaf kinds.
    pub value: Option<String>,
    /// Child syntax nodes to convert, in semantic order.
    pub children: Vec<Node<'a>>,
    /// Comment text collected at this position, in source order.
    pub comments: Vec<String>,
}

impl<'a> NodeShape<'a> {
    fn new(kind: &'static str) -> Self {
        Self {
            kind,
            name: None,
            value: None,
            children: Vec::new(),
            comments: Vec::new(),
        }
    }
}

/// Classify a syntax node and extract its output shape.
///
/// A grammar kind outside the declared schema is fatal for the unit:
/// silently dropping unrecognized syntax would yield an incomplete tree
/// that still looks valid downstream.
pub fn shape<'a>(unit: &ParsedUnit, node: Node<'a>) -> Result<NodeShape<'a>, ConvertError> {
    let kind = NodeKind::from_grammar(node.kind()).ok_or_else(|| {
        ConvertError::UnsupportedNodeKind {
            kind: node.kind().to_string(),
            line: node.start_position().row + 1,
        }
    })?;

    let mut out = NodeShape::new(node.kind());

    match kind {
        // Identifier and literal leaves carry their source text verbatim;
        // string literals keep their quotes.
        NodeKind::Identifier
        | NodeKind::BlankIdentifier
        | NodeKind::FieldIdentifier
        | NodeKind::PackageIdentifier
        | NodeKind::TypeIdentifier
        | NodeKind::LabelName
        | NodeKind::Dot
        | NodeKind::IntLiteral
        | NodeKind::FloatLiteral
        | NodeKind::ImaginaryLiteral
        | NodeKind::RuneLiteral
        | NodeKind::InterpretedStringLiteral
        | NodeKind::RawStringLiteral
        | NodeKind::Nil
        | NodeKind::True
        | NodeKind::False
        | NodeKind::Iota => {
            out.value = Some(unit.node_text(node).to_string());
        }

        // Leaves with no substructure worth retaining.
        NodeKind::EmptyStatement | NodeKind::FallthroughStatement | NodeKind::Error => {}

        NodeKind::Comment => {
            out.comments.push(unit.node_text(node).to_string());
        }

        // The unit root: package name as value, then every top-level
        // construct except the package clause itself.
        NodeKind::SourceFile => {
            out.value = unit.package_name();
            sweep_filtered(unit, node, &mut out, |child| {
                child.kind() != "package_clause"
            });
        }
        NodeKind::PackageClause => sweep(unit, node, &mut out),

        // An import group's children are its specs, with the spec-list
        // wrapper flattened away.
        NodeKind::ImportDeclaration => {
            let mut cursor = node.walk();
            for child in node.named_children(&mut cursor) {
                match child.kind() {
                    "comment" => out.comments.push(unit.node_text(child).to_string()),
                    "import_spec_list" => {
                        let mut list_cursor = child.walk();
                        for spec in child.named_children(&mut list_cursor) {
                            if spec.kind() == "comment" {
                                out.comments.push(unit.node_text(spec).to_string());
                            } else {
                                out.children.push(spec);
                            }
                        }
                    }
                    _ => out.children.push(child),
                }
            }
        }
        NodeKind::ImportSpec => {
            push_field(node, "name", &mut out);
            push_field(node, "path", &mut out);
        }
        NodeKind::ImportSpecList => sweep(unit, node, &mut out),

        NodeKind::FunctionDeclaration => {
            out.name = field_text(unit, node, "name");
            push_field(node, "type_parameters", &mut out);
            push_field(node, "parameters", &mut out);
            push_field(node, "result", &mut out);
            push_field(node, "body", &mut out);
        }
        NodeKind::MethodDeclaration => {
            out.name = field_text(unit, node, "name");
            push_field(node, "receiver", &mut out);
            push_field(node, "parameters", &mut out);
            push_field(node, "result", &mut out);
            push_field(node, "body", &mut out);
        }
        NodeKind::TypeDeclaration => sweep(unit, node, &mut out),
        NodeKind::TypeSpec => {
            out.name = field_text(unit, node, "name");
            push_field(node, "type_parameters", &mut out);
            push_field(node, "type", &mut out);
        }
        NodeKind::TypeAlias => {
            out.name = field_text(unit, node, "name");
            push_field(node, "type", &mut out);
        }
        NodeKind::ConstDeclaration | NodeKind::VarDeclaration => sweep(unit, node, &mut out),
        NodeKind::ConstSpec | NodeKind::VarSpec => {
            push_all_fields(node, "name", &mut out);
            push_field(node, "type", &mut out);
            push_field(node, "value", &mut out);
        }

        NodeKind::CallExpression => {
            push_field(node, "function", &mut out);
            push_field(node, "type_arguments", &mut out);
            push_field(node, "arguments", &mut out);
        }
        NodeKind::SelectorExpression => {
            push_field(node, "operand", &mut out);
            push_field(node, "field", &mut out);
        }
        NodeKind::IndexExpression => {
            push_field(node, "operand", &mut out);
            push_field(node, "index", &mut out);
        }
        NodeKind::SliceExpression => {
            push_field(node, "operand", &mut out);
            push_field(node, "start", &mut out);
            push_field(node, "end", &mut out);
            push_field(node, "capacity", &mut out);
        }
        // Operator tokens are not retained; a binary expression is its
        // two operands, a unary expression its single operand.
        NodeKind::BinaryExpression => {
            push_field(node, "left", &mut out);
            push_field(node, "right", &mut out);
        }
        NodeKind::UnaryExpression => {
            push_field(node, "operand", &mut out);
        }
        NodeKind::CompositeLiteral => {
            push_field(node, "type", &mut out);
            push_field(node, "body", &mut out);
        }
        NodeKind::FuncLiteral => {
            push_field(node, "parameters", &mut out);
            push_field(node, "result", &mut out);
            push_field(node, "body", &mut out);
        }
        NodeKind::TypeAssertionExpression => {
            push_field(node, "operand", &mut out);
            push_field(node, "type", &mut out);
        }
        NodeKind::TypeConversionExpression => {
            push_field(node, "type", &mut out);
            push_field(node, "operand", &mut out);
        }
        NodeKind::ArgumentList
        | NodeKind::SpecialArgumentList
        | NodeKind::ParenthesizedExpression
        | NodeKind::LiteralValue
        | NodeKind::LiteralElement
        | NodeKind::KeyedElement
        | NodeKind::TypeInstantiationExpression
        | NodeKind::VariadicArgument
        | NodeKind::ExpressionList => sweep(unit, node, &mut out),

        NodeKind::Block => sweep(unit, node, &mut out),
        NodeKind::IfStatement => {
            push_field(node, "initializer", &mut out);
            push_field(node, "condition", &mut out);
            push_field(node, "consequence", &mut out);
            push_field(node, "alternative", &mut out);
        }
        // The loop header (condition, for-clause, or range-clause) is an
        // unfielded named child preceding the body.
        NodeKind::ForStatement => sweep(unit, node, &mut out),
        NodeKind::ForClause => {
            push_field(node, "initializer", &mut out);
            push_field(node, "condition", &mut out);
            push_field(node, "update", &mut out);
        }
        NodeKind::RangeClause => {
            push_field(node, "left", &mut out);
            push_field(node, "right", &mut out);
        }
        NodeKind::SendStatement => {
            push_field(node, "channel", &mut out);
            push_field(node, "value", &mut out);
        }
        NodeKind::ReceiveStatement => {
            push_field(node, "left", &mut out);
            push_field(node, "right", &mut out);
        }
        NodeKind::AssignmentStatement | NodeKind::ShortVarDeclaration => {
            push_field(node, "left", &mut out);
            push_field(node, "right", &mut out);
        }
        // Case and switch kinds read naturally in source order: header
        // parts first, then the clause bodies.
        NodeKind::ExpressionSwitchStatement
        | NodeKind::ExpressionCase
        | NodeKind::TypeSwitchStatement
        | NodeKind::TypeCase
        | NodeKind::SelectStatement
        | NodeKind::CommunicationCase
        | NodeKind::DefaultCase
        | NodeKind::LabeledStatement
        | NodeKind::BreakStatement
        | NodeKind::ContinueStatement
        | NodeKind::GotoStatement
        | NodeKind::IncStatement
        | NodeKind::DecStatement
        | NodeKind::GoStatement
        | NodeKind::DeferStatement
        | NodeKind::ReturnStatement
        | NodeKind::ExpressionStatement => sweep(unit, node, &mut out),

        NodeKind::StructType
        | NodeKind::FieldDeclarationList
        | NodeKind::InterfaceType
        | NodeKind::TypeElem
        | NodeKind::ConstraintTerm
        | NodeKind::NegatedType
        | NodeKind::UnionType
        | NodeKind::PointerType
        | NodeKind::ParenthesizedType
        | NodeKind::TypeArguments
        | NodeKind::TypeParameterList
        | NodeKind::ParameterList => sweep(unit, node, &mut out),
        NodeKind::FieldDeclaration => {
            push_all_fields(node, "name", &mut out);
            push_field(node, "type", &mut out);
            push_field(node, "tag", &mut out);
        }
        NodeKind::MethodElem => {
            push_field(node, "name", &mut out);
            push_field(node, "parameters", &mut out);
            push_field(node, "result", &mut out);
        }
        NodeKind::FunctionType => {
            push_field(node, "parameters", &mut out);
            push_field(node, "result", &mut out);
        }
        NodeKind::ArrayType => {
            push_field(node, "length", &mut out);
            push_field(node, "element", &mut out);
        }
        NodeKind::ImplicitLengthArrayType | NodeKind::SliceType => {
            push_field(node, "element", &mut out);
        }
        NodeKind::MapType => {
            push_field(node, "key", &mut out);
            push_field(node, "value", &mut out);
        }
        NodeKind::ChannelType => {
            push_field(node, "value", &mut out);
        }
        NodeKind::QualifiedType => {
            push_field(node, "package", &mut out);
            push_field(node, "name", &mut out);
        }
        NodeKind::GenericType => {
            push_field(node, "type", &mut out);
            push_field(node, "type_arguments", &mut out);
        }
        NodeKind::TypeParameterDeclaration
        | NodeKind::ParameterDeclaration
        | NodeKind::VariadicParameterDeclaration => {
            push_all_fields(node, "name", &mut out);
            push_field(node, "type", &mut out);
        }
    }

    Ok(out)
}

/// Append the child under the given field, if present.
fn push_field<'a>(node: Node<'a>, field: &str, out: &mut NodeShape<'a>) {
    if let Some(child) = node.child_by_field_name(field) {
        out.children.push(child);
    }
}

/// Source text of the child under the given field, if present.
fn field_text(unit: &ParsedUnit, node: Node, field: &str) -> Option<String> {
    node.child_by_field_name(field)
        .map(|child| unit.node_text(child).to_string())
}

/// Append every child under a repeated field, in order.
fn push_all_fields<'a>(node: Node<'a>, field: &str, out: &mut NodeShape<'a>) {
    let mut cursor = node.walk();
    for child in node.children_by_field_name(field, &mut cursor) {
        out.children.push(child);
    }
}

/// Append all named children in source order. Comment children are
/// diverted into the shape's `comments` instead; these sweeps are the
/// comment-bearing positions of the output tree.
fn sweep<'a>(unit: &ParsedUnit, node: Node<'a>, out: &mut NodeShape<'a>) {
    sweep_filtered(unit, node, out, |_| true);
}

fn sweep_filtered<'a>(
    unit: &ParsedUnit,
    node: Node<'a>,
    out: &mut NodeShape<'a>,
    keep: impl Fn(&Node<'a>) -> bool,
) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if child.kind() == "comment" {
            out.comments.push(unit.node_text(child).to_string());
        } else if keep(&child) {
            out.children.push(child);
        }
    }
}
