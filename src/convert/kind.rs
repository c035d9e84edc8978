//! The closed grammar-kind schema.
//!
//! Every Go grammar kind the dispatcher handles is declared here as an
//! enum variant. [`NodeKind::from_grammar`] is the single boundary where
//! an undeclared kind surfaces; past it, matches over `NodeKind` are
//! exhaustive and the compiler guarantees every declared kind has a
//! handler. Adding a kind means adding a variant first.

/// A declared grammar-node kind of the Go grammar, as named by
/// tree-sitter-go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    // Identifier leaves
    Identifier,
    BlankIdentifier,
    FieldIdentifier,
    PackageIdentifier,
    TypeIdentifier,
    LabelName,
    Dot,

    // Literal leaves
    IntLiteral,
    FloatLiteral,
    ImaginaryLiteral,
    RuneLiteral,
    InterpretedStringLiteral,
    RawStringLiteral,
    Nil,
    True,
    False,
    Iota,

    // Declarations
    SourceFile,
    PackageClause,
    ImportDeclaration,
    ImportSpec,
    ImportSpecList,
    FunctionDeclaration,
    MethodDeclaration,
    TypeDeclaration,
    TypeSpec,
    TypeAlias,
    ConstDeclaration,
    ConstSpec,
    VarDeclaration,
    VarSpec,

    // Expressions
    CallExpression,
    ArgumentList,
    SpecialArgumentList,
    SelectorExpression,
    IndexExpression,
    SliceExpression,
    BinaryExpression,
    UnaryExpression,
    ParenthesizedExpression,
    CompositeLiteral,
    LiteralValue,
    LiteralElement,
    KeyedElement,
    FuncLiteral,
    TypeAssertionExpression,
    TypeConversionExpression,
    TypeInstantiationExpression,
    VariadicArgument,
    ExpressionList,

    // Statements
    Block,
    IfStatement,
    ForStatement,
    ForClause,
    RangeClause,
    ExpressionSwitchStatement,
    ExpressionCase,
    TypeSwitchStatement,
    TypeCase,
    SelectStatement,
    CommunicationCase,
    ReceiveStatement,
    DefaultCase,
    LabeledStatement,
    BreakStatement,
    ContinueStatement,
    GotoStatement,
    FallthroughStatement,
    SendStatement,
    IncStatement,
    DecStatement,
    GoStatement,
    DeferStatement,
    ReturnStatement,
    AssignmentStatement,
    ShortVarDeclaration,
    ExpressionStatement,
    EmptyStatement,

    // Type expressions
    StructType,
    InterfaceType,
    FunctionType,
    PointerType,
    ArrayType,
    ImplicitLengthArrayType,
    SliceType,
    MapType,
    ChannelType,
    QualifiedType,
    GenericType,
    TypeArguments,
    TypeParameterList,
    TypeParameterDeclaration,
    NegatedType,
    UnionType,
    ConstraintTerm,
    TypeElem,
    MethodElem,
    ParenthesizedType,

    // Structural lists
    ParameterList,
    ParameterDeclaration,
    VariadicParameterDeclaration,
    FieldDeclarationList,
    FieldDeclaration,

    // Comments
    Comment,

    // Malformed placeholder produced by the frontend for unparsable
    // regions. Units with parse errors are rejected before conversion,
    // so this stays declared for schema completeness only.
    Error,
}

impl NodeKind {
    /// Map a grammar kind name onto the declared schema. Returns `None`
    /// for kinds outside it, which the dispatcher turns into
    /// `UnsupportedNodeKind`.
    pub fn from_grammar(kind: &str) -> Option<NodeKind> {
        let kind = match kind {
            "identifier" => NodeKind::Identifier,
            "blank_identifier" => NodeKind::BlankIdentifier,
            "field_identifier" => NodeKind::FieldIdentifier,
            "package_identifier" => NodeKind::PackageIdentifier,
            "type_identifier" => NodeKind::TypeIdentifier,
            "label_name" => NodeKind::LabelName,
            "dot" => NodeKind::Dot,

            "int_literal" => NodeKind::IntLiteral,
            "float_literal" => NodeKind::FloatLiteral,
            "imaginary_literal" => NodeKind::ImaginaryLiteral,
            "rune_literal" => NodeKind::RuneLiteral,
            "interpreted_string_literal" => NodeKind::InterpretedStringLiteral,
            "raw_string_literal" => NodeKind::RawStringLiteral,
            "nil" => NodeKind::Nil,
            "true" => NodeKind::True,
            "false" => NodeKind::False,
            "iota" => NodeKind::Iota,

            "source_file" => NodeKind::SourceFile,
            "package_clause" => NodeKind::PackageClause,
            "import_declaration" => NodeKind::ImportDeclaration,
            "import_spec" => NodeKind::ImportSpec,
            "import_spec_list" => NodeKind::ImportSpecList,
            "function_declaration" => NodeKind::FunctionDeclaration,
            "method_declaration" => NodeKind::MethodDeclaration,
            "type_declaration" => NodeKind::TypeDeclaration,
            "type_spec" => NodeKind::TypeSpec,
            "type_alias" => NodeKind::TypeAlias,
            "const_declaration" => NodeKind::ConstDeclaration,
            "const_spec" => NodeKind::ConstSpec,
            "var_declaration" => NodeKind::VarDeclaration,
            "var_spec" => NodeKind::VarSpec,

            "call_expression" => NodeKind::CallExpression,
            "argument_list" => NodeKind::ArgumentList,
            "special_argument_list" => NodeKind::SpecialArgumentList,
            "selector_expression" => NodeKind::SelectorExpression,
            "index_expression" => NodeKind::IndexExpression,
            "slice_expression" => NodeKind::SliceExpression,
            "binary_expression" => NodeKind::BinaryExpression,
            "unary_expression" => NodeKind::UnaryExpression,
            "parenthesized_expression" => NodeKind::ParenthesizedExpression,
            "composite_literal" => NodeKind::CompositeLiteral,
            "literal_value" => NodeKind::LiteralValue,
            "literal_element" => NodeKind::LiteralElement,
            "keyed_element" => NodeKind::KeyedElement,
            "func_literal" => NodeKind::FuncLiteral,
            "type_assertion_expression" => NodeKind::TypeAssertionExpression,
            "type_conversion_expression" => NodeKind::TypeConversionExpression,
            "type_instantiation_expression" => NodeKind::TypeInstantiationExpression,
            "variadic_argument" => NodeKind::VariadicArgument,
            "expression_list" => NodeKind::ExpressionList,

            "block" => NodeKind::Block,
            "if_statement" => NodeKind::IfStatement,
            "for_statement" => NodeKind::ForStatement,
            "for_clause" => NodeKind::ForClause,
            "range_clause" => NodeKind::RangeClause,
            "expression_switch_statement" => NodeKind::ExpressionSwitchStatement,
            "expression_case" => NodeKind::ExpressionCase,
            "type_switch_statement" => NodeKind::TypeSwitchStatement,
            "type_case" => NodeKind::TypeCase,
            "select_statement" => NodeKind::SelectStatement,
            "communication_case" => NodeKind::CommunicationCase,
            "receive_statement" => NodeKind::ReceiveStatement,
            "default_case" => NodeKind::DefaultCase,
            "labeled_statement" => NodeKind::LabeledStatement,
            "break_statement" => NodeKind::BreakStatement,
            "continue_statement" => NodeKind::ContinueStatement,
            "goto_statement" => NodeKind::GotoStatement,
            "fallthrough_statement" => NodeKind::FallthroughStatement,
            "send_statement" => NodeKind::SendStatement,
            "inc_statement" => NodeKind::IncStatement,
            "dec_statement" => NodeKind::DecStatement,
            "go_statement" => NodeKind::GoStatement,
            "defer_statement" => NodeKind::DeferStatement,
            "return_statement" => NodeKind::ReturnStatement,
            "assignment_statement" => NodeKind::AssignmentStatement,
            "short_var_declaration" => NodeKind::ShortVarDeclaration,
            "expression_statement" => NodeKind::ExpressionStatement,
            "empty_statement" => NodeKind::EmptyStatement,

            "struct_type" => NodeKind::StructType,
            "interface_type" => NodeKind::InterfaceType,
            "function_type" => NodeKind::FunctionType,
            "pointer_type" => NodeKind::PointerType,
            "array_type" => NodeKind::ArrayType,
            "implicit_length_array_type" => NodeKind::ImplicitLengthArrayType,
            "slice_type" => NodeKind::SliceType,
            "map_type" => NodeKind::MapType,
            "channel_type" => NodeKind::ChannelType,
            "qualified_type" => NodeKind::QualifiedType,
            "generic_type" => NodeKind::GenericType,
            "type_arguments" => NodeKind::TypeArguments,
            "type_parameter_list" => NodeKind::TypeParameterList,
            "type_parameter_declaration" => NodeKind::TypeParameterDeclaration,
            "negated_type" => NodeKind::NegatedType,
            "union_type" => NodeKind::UnionType,
            "constraint_term" => NodeKind::ConstraintTerm,
            "type_elem" => NodeKind::TypeElem,
            "method_elem" => NodeKind::MethodElem,
            "parenthesized_type" => NodeKind::ParenthesizedType,

            "parameter_list" => NodeKind::ParameterList,
            "parameter_declaration" => NodeKind::ParameterDeclaration,
            "variadic_parameter_declaration" => NodeKind::VariadicParameterDeclaration,
            "field_declaration_list" => NodeKind::FieldDeclarationList,
            "field_declaration" => NodeKind::FieldDeclaration,

            "comment" => NodeKind::Comment,
            "ERROR" => NodeKind::Error,

            _ => return None,
        };
        Some(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_kinds_resolve() {
        for kind in [
            "source_file",
            "function_declaration",
            "binary_expression",
            "import_spec",
            "channel_type",
            "comment",
            "ERROR",
        ] {
            assert!(
                NodeKind::from_grammar(kind).is_some(),
                "{kind} should be declared"
            );
        }
    }

    #[test]
    fn test_undeclared_kind_is_rejected() {
        assert_eq!(NodeKind::from_grammar("lambda_expression"), None);
        assert_eq!(NodeKind::from_grammar(""), None);
    }
}
