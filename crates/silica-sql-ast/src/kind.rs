//! The node kind registry.
//!
//! [`NodeKind`] is the closed, contiguous enumeration identifying every AST
//! variant. Every kind maps to exactly one non-empty display name; the
//! mapping is validated when the lazily built name table is first used, and
//! again by the registry tests. Diagnostic paths that receive a raw kind
//! value from outside the enum (tooling, serialized dumps) go through
//! [`kind_name`], which renders unknown values as a sentinel instead of
//! failing.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Sentinel rendered for a raw kind value with no registry entry.
pub const UNKNOWN_NODE_KIND: &str = "<UNKNOWN NODE KIND>";

/// The kind of an AST node.
///
/// The enumeration is contiguous starting at zero; [`NodeKind::FIRST`] and
/// [`NodeKind::LAST`] bound the valid range. `Fake` is reserved for tests
/// and never produced by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum NodeKind {
    /// Reserved for tests only.
    Fake = 0,

    // Queries and query clauses.
    QueryStatement,
    Query,
    SetOperation,
    Select,
    SelectAs,
    SelectList,
    SelectColumn,
    Alias,
    IntoAlias,
    FromClause,
    WhereClause,
    GroupBy,
    Rollup,
    Having,
    OrderBy,
    OrderingExpression,
    LimitOffset,
    Join,
    OnClause,
    UsingClause,
    ParenthesizedJoin,
    TablePathExpression,
    TableSubquery,
    WithClause,
    WithClauseEntry,
    Hint,
    HintEntry,
    HintedStatement,
    OptionsList,
    OptionsEntry,

    // Expressions.
    AndExpr,
    OrExpr,
    BinaryExpression,
    UnaryExpression,
    BitwiseShiftExpression,
    InExpression,
    InList,
    BetweenExpression,
    CaseValueExpression,
    CaseNoValueExpression,
    CastExpression,
    ExtractExpression,
    FunctionCall,
    NamedArgument,
    Star,
    DotStar,
    ExpressionSubquery,
    PathExpression,
    Identifier,
    IdentifierList,
    DotIdentifier,
    DotGeneralizedField,
    ArrayElement,
    ArrayConstructor,
    StructConstructorWithParens,
    ParameterExpr,

    // Literals.
    IntLiteral,
    FloatLiteral,
    NumericLiteral,
    StringLiteral,
    BytesLiteral,
    BooleanLiteral,
    NullLiteral,

    // Window functions.
    WindowClause,
    WindowDefinition,
    WindowSpecification,
    PartitionBy,
    WindowFrame,
    WindowFrameExpr,

    // DML.
    InsertStatement,
    InsertValuesRowList,
    InsertValuesRow,
    UpdateStatement,
    UpdateItemList,
    UpdateItem,
    UpdateSetValue,
    DeleteStatement,
    AssertRowsModified,
    MergeStatement,
    MergeWhenClauseList,
    MergeWhenClause,
    MergeAction,

    // DDL.
    CreateTableStatement,
    CreateViewStatement,
    CreateIndexStatement,
    CreateFunctionStatement,
    TableElementList,
    ColumnDefinition,
    ColumnList,
    PrimaryKey,
    ForeignKey,
    ForeignKeyReference,
    ForeignKeyActions,
    CheckConstraint,
    GeneratedColumnInfo,
    DropStatement,
    AlterTableStatement,
    AlterActionList,
    AddConstraintAction,
    DropConstraintAction,
    FunctionDeclaration,
    FunctionParameters,
    FunctionParameter,
    SqlFunctionBody,

    // Sampling.
    SampleClause,
    SampleSize,
    SampleSuffix,
    RepeatableClause,
}

impl NodeKind {
    /// First kind in the contiguous range.
    pub const FIRST: Self = Self::Fake;
    /// Last kind in the contiguous range.
    pub const LAST: Self = Self::RepeatableClause;

    /// Every kind, in discriminant order.
    pub const ALL: &'static [Self] = &[
        Self::Fake,
        Self::QueryStatement,
        Self::Query,
        Self::SetOperation,
        Self::Select,
        Self::SelectAs,
        Self::SelectList,
        Self::SelectColumn,
        Self::Alias,
        Self::IntoAlias,
        Self::FromClause,
        Self::WhereClause,
        Self::GroupBy,
        Self::Rollup,
        Self::Having,
        Self::OrderBy,
        Self::OrderingExpression,
        Self::LimitOffset,
        Self::Join,
        Self::OnClause,
        Self::UsingClause,
        Self::ParenthesizedJoin,
        Self::TablePathExpression,
        Self::TableSubquery,
        Self::WithClause,
        Self::WithClauseEntry,
        Self::Hint,
        Self::HintEntry,
        Self::HintedStatement,
        Self::OptionsList,
        Self::OptionsEntry,
        Self::AndExpr,
        Self::OrExpr,
        Self::BinaryExpression,
        Self::UnaryExpression,
        Self::BitwiseShiftExpression,
        Self::InExpression,
        Self::InList,
        Self::BetweenExpression,
        Self::CaseValueExpression,
        Self::CaseNoValueExpression,
        Self::CastExpression,
        Self::ExtractExpression,
        Self::FunctionCall,
        Self::NamedArgument,
        Self::Star,
        Self::DotStar,
        Self::ExpressionSubquery,
        Self::PathExpression,
        Self::Identifier,
        Self::IdentifierList,
        Self::DotIdentifier,
        Self::DotGeneralizedField,
        Self::ArrayElement,
        Self::ArrayConstructor,
        Self::StructConstructorWithParens,
        Self::ParameterExpr,
        Self::IntLiteral,
        Self::FloatLiteral,
        Self::NumericLiteral,
        Self::StringLiteral,
        Self::BytesLiteral,
        Self::BooleanLiteral,
        Self::NullLiteral,
        Self::WindowClause,
        Self::WindowDefinition,
        Self::WindowSpecification,
        Self::PartitionBy,
        Self::WindowFrame,
        Self::WindowFrameExpr,
        Self::InsertStatement,
        Self::InsertValuesRowList,
        Self::InsertValuesRow,
        Self::UpdateStatement,
        Self::UpdateItemList,
        Self::UpdateItem,
        Self::UpdateSetValue,
        Self::DeleteStatement,
        Self::AssertRowsModified,
        Self::MergeStatement,
        Self::MergeWhenClauseList,
        Self::MergeWhenClause,
        Self::MergeAction,
        Self::CreateTableStatement,
        Self::CreateViewStatement,
        Self::CreateIndexStatement,
        Self::CreateFunctionStatement,
        Self::TableElementList,
        Self::ColumnDefinition,
        Self::ColumnList,
        Self::PrimaryKey,
        Self::ForeignKey,
        Self::ForeignKeyReference,
        Self::ForeignKeyActions,
        Self::CheckConstraint,
        Self::GeneratedColumnInfo,
        Self::DropStatement,
        Self::AlterTableStatement,
        Self::AlterActionList,
        Self::AddConstraintAction,
        Self::DropConstraintAction,
        Self::FunctionDeclaration,
        Self::FunctionParameters,
        Self::FunctionParameter,
        Self::SqlFunctionBody,
        Self::SampleClause,
        Self::SampleSize,
        Self::SampleSuffix,
        Self::RepeatableClause,
    ];

    /// Returns the display name of this kind.
    ///
    /// The match is exhaustive, so a kind without a name cannot compile.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fake => "Fake",
            Self::QueryStatement => "QueryStatement",
            Self::Query => "Query",
            Self::SetOperation => "SetOperation",
            Self::Select => "Select",
            Self::SelectAs => "SelectAs",
            Self::SelectList => "SelectList",
            Self::SelectColumn => "SelectColumn",
            Self::Alias => "Alias",
            Self::IntoAlias => "IntoAlias",
            Self::FromClause => "FromClause",
            Self::WhereClause => "WhereClause",
            Self::GroupBy => "GroupBy",
            Self::Rollup => "Rollup",
            Self::Having => "Having",
            Self::OrderBy => "OrderBy",
            Self::OrderingExpression => "OrderingExpression",
            Self::LimitOffset => "LimitOffset",
            Self::Join => "Join",
            Self::OnClause => "OnClause",
            Self::UsingClause => "UsingClause",
            Self::ParenthesizedJoin => "ParenthesizedJoin",
            Self::TablePathExpression => "TablePathExpression",
            Self::TableSubquery => "TableSubquery",
            Self::WithClause => "WithClause",
            Self::WithClauseEntry => "WithClauseEntry",
            Self::Hint => "Hint",
            Self::HintEntry => "HintEntry",
            Self::HintedStatement => "HintedStatement",
            Self::OptionsList => "OptionsList",
            Self::OptionsEntry => "OptionsEntry",
            Self::AndExpr => "AndExpr",
            Self::OrExpr => "OrExpr",
            Self::BinaryExpression => "BinaryExpression",
            Self::UnaryExpression => "UnaryExpression",
            Self::BitwiseShiftExpression => "BitwiseShiftExpression",
            Self::InExpression => "InExpression",
            Self::InList => "InList",
            Self::BetweenExpression => "BetweenExpression",
            Self::CaseValueExpression => "CaseValueExpression",
            Self::CaseNoValueExpression => "CaseNoValueExpression",
            Self::CastExpression => "CastExpression",
            Self::ExtractExpression => "ExtractExpression",
            Self::FunctionCall => "FunctionCall",
            Self::NamedArgument => "NamedArgument",
            Self::Star => "Star",
            Self::DotStar => "DotStar",
            Self::ExpressionSubquery => "ExpressionSubquery",
            Self::PathExpression => "PathExpression",
            Self::Identifier => "Identifier",
            Self::IdentifierList => "IdentifierList",
            Self::DotIdentifier => "DotIdentifier",
            Self::DotGeneralizedField => "DotGeneralizedField",
            Self::ArrayElement => "ArrayElement",
            Self::ArrayConstructor => "ArrayConstructor",
            Self::StructConstructorWithParens => "StructConstructorWithParens",
            Self::ParameterExpr => "ParameterExpr",
            Self::IntLiteral => "IntLiteral",
            Self::FloatLiteral => "FloatLiteral",
            Self::NumericLiteral => "NumericLiteral",
            Self::StringLiteral => "StringLiteral",
            Self::BytesLiteral => "BytesLiteral",
            Self::BooleanLiteral => "BooleanLiteral",
            Self::NullLiteral => "NullLiteral",
            Self::WindowClause => "WindowClause",
            Self::WindowDefinition => "WindowDefinition",
            Self::WindowSpecification => "WindowSpecification",
            Self::PartitionBy => "PartitionBy",
            Self::WindowFrame => "WindowFrame",
            Self::WindowFrameExpr => "WindowFrameExpr",
            Self::InsertStatement => "InsertStatement",
            Self::InsertValuesRowList => "InsertValuesRowList",
            Self::InsertValuesRow => "InsertValuesRow",
            Self::UpdateStatement => "UpdateStatement",
            Self::UpdateItemList => "UpdateItemList",
            Self::UpdateItem => "UpdateItem",
            Self::UpdateSetValue => "UpdateSetValue",
            Self::DeleteStatement => "DeleteStatement",
            Self::AssertRowsModified => "AssertRowsModified",
            Self::MergeStatement => "MergeStatement",
            Self::MergeWhenClauseList => "MergeWhenClauseList",
            Self::MergeWhenClause => "MergeWhenClause",
            Self::MergeAction => "MergeAction",
            Self::CreateTableStatement => "CreateTableStatement",
            Self::CreateViewStatement => "CreateViewStatement",
            Self::CreateIndexStatement => "CreateIndexStatement",
            Self::CreateFunctionStatement => "CreateFunctionStatement",
            Self::TableElementList => "TableElementList",
            Self::ColumnDefinition => "ColumnDefinition",
            Self::ColumnList => "ColumnList",
            Self::PrimaryKey => "PrimaryKey",
            Self::ForeignKey => "ForeignKey",
            Self::ForeignKeyReference => "ForeignKeyReference",
            Self::ForeignKeyActions => "ForeignKeyActions",
            Self::CheckConstraint => "CheckConstraint",
            Self::GeneratedColumnInfo => "GeneratedColumnInfo",
            Self::DropStatement => "DropStatement",
            Self::AlterTableStatement => "AlterTableStatement",
            Self::AlterActionList => "AlterActionList",
            Self::AddConstraintAction => "AddConstraintAction",
            Self::DropConstraintAction => "DropConstraintAction",
            Self::FunctionDeclaration => "FunctionDeclaration",
            Self::FunctionParameters => "FunctionParameters",
            Self::FunctionParameter => "FunctionParameter",
            Self::SqlFunctionBody => "SqlFunctionBody",
            Self::SampleClause => "SampleClause",
            Self::SampleSize => "SampleSize",
            Self::SampleSuffix => "SampleSuffix",
            Self::RepeatableClause => "RepeatableClause",
        }
    }

    /// Returns the kind for a raw discriminant value, if it is in range.
    #[must_use]
    pub fn from_raw(raw: u8) -> Option<Self> {
        Self::ALL.get(raw as usize).copied()
    }
}

/// The cached raw-discriminant to display-name table.
///
/// Built once on first use and immutable afterwards. Construction checks
/// that every value in the contiguous kind range has a non-empty entry;
/// registry/enum drift is a programming error and halts debug builds.
fn name_table() -> &'static HashMap<u8, &'static str> {
    static TABLE: OnceLock<HashMap<u8, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let table: HashMap<u8, &'static str> = NodeKind::ALL
            .iter()
            .map(|kind| (*kind as u8, kind.name()))
            .collect();
        for raw in NodeKind::FIRST as u8..=NodeKind::LAST as u8 {
            debug_assert!(
                table.get(&raw).is_some_and(|name| !name.is_empty()),
                "node kind {raw} has no registry entry"
            );
        }
        table
    })
}

/// Returns the display name for a raw kind value.
///
/// Unknown values render as [`UNKNOWN_NODE_KIND`] rather than failing;
/// this function is used in diagnostic paths that must never abort.
#[must_use]
pub fn kind_name(raw: u8) -> &'static str {
    name_table().get(&raw).copied().unwrap_or(UNKNOWN_NODE_KIND)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_is_complete() {
        for raw in NodeKind::FIRST as u8..=NodeKind::LAST as u8 {
            let name = kind_name(raw);
            assert!(!name.is_empty(), "kind {raw} has an empty name");
            assert_ne!(name, UNKNOWN_NODE_KIND, "kind {raw} has no name");
        }
    }

    #[test]
    fn test_all_is_contiguous_and_in_order() {
        for (index, kind) in NodeKind::ALL.iter().enumerate() {
            assert_eq!(*kind as usize, index);
        }
        assert_eq!(NodeKind::ALL.len(), NodeKind::LAST as usize + 1);
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<&str> = NodeKind::ALL.iter().map(|kind| kind.name()).collect();
        assert_eq!(names.len(), NodeKind::ALL.len());
    }

    #[test]
    fn test_unknown_kind_is_safe() {
        assert_eq!(kind_name(u8::MAX), UNKNOWN_NODE_KIND);
        assert!(NodeKind::from_raw(u8::MAX).is_none());
    }

    #[test]
    fn test_from_raw_round_trips() {
        for kind in NodeKind::ALL {
            assert_eq!(NodeKind::from_raw(*kind as u8), Some(*kind));
        }
    }
}
