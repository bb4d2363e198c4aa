//! Per-kind node payloads.
//!
//! [`NodeVariant`] is the closed tagged union over [`NodeKind`]: one variant
//! per kind, carrying that kind's discriminant attributes (operators,
//! modifiers, flags, literal images). A node's kind is derived from its
//! variant, so a node can never claim a kind inconsistent with its payload.
//! Kinds with no attributes are unit variants.

use crate::kind::NodeKind;
use crate::ops::{
    AsMode, BinaryOp, BoundaryType, ForeignKeyAction, ForeignKeyMatch, FrameUnit, InsertMode,
    JoinHint, JoinType, MergeActionType, MergeMatchType, ParameterMode, SampleUnit,
    SchemaObjectKind, SetOp, SqlSecurity, SubqueryModifier, UnaryOp,
};

/// Modifiers shared by all CREATE statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CreateModifiers {
    /// PRIVATE / PUBLIC / TEMP scope.
    pub scope: crate::ops::CreateScope,
    /// CREATE OR REPLACE.
    pub is_or_replace: bool,
    /// CREATE ... IF NOT EXISTS.
    pub is_if_not_exists: bool,
}

/// The payload of an AST node, one variant per [`NodeKind`].
#[derive(Debug, Clone, PartialEq)]
pub enum NodeVariant {
    /// Reserved for tests only.
    Fake,

    // Queries and query clauses.
    QueryStatement,
    Query,
    SetOperation {
        /// UNION/EXCEPT/INTERSECT; `None` until the parser sets it.
        op: Option<SetOp>,
        distinct: bool,
    },
    Select {
        distinct: bool,
    },
    SelectAs {
        as_mode: AsMode,
    },
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
    OrderingExpression {
        descending: bool,
    },
    LimitOffset,
    Join {
        natural: bool,
        join_type: JoinType,
        join_hint: JoinHint,
    },
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
    BinaryExpression {
        /// `None` until the parser sets the operator.
        op: Option<BinaryOp>,
        /// NOT form for LIKE and IS.
        is_not: bool,
    },
    UnaryExpression {
        op: Option<UnaryOp>,
    },
    BitwiseShiftExpression {
        is_left_shift: bool,
    },
    InExpression {
        is_not: bool,
    },
    InList,
    BetweenExpression {
        is_not: bool,
    },
    CaseValueExpression,
    CaseNoValueExpression,
    CastExpression {
        is_safe_cast: bool,
    },
    ExtractExpression,
    FunctionCall {
        distinct: bool,
    },
    NamedArgument,
    Star,
    DotStar,
    ExpressionSubquery {
        modifier: SubqueryModifier,
    },
    PathExpression,
    Identifier {
        /// The identifier text, unquoted.
        name: String,
    },
    IdentifierList,
    DotIdentifier,
    DotGeneralizedField,
    ArrayElement,
    ArrayConstructor,
    StructConstructorWithParens,
    ParameterExpr {
        /// Named parameter (`:name`); positional when `None`.
        name: Option<String>,
        /// 1-based position for positional parameters.
        position: usize,
    },

    // Literals. Images are kept verbatim as written in the source.
    IntLiteral {
        image: String,
    },
    FloatLiteral {
        image: String,
    },
    NumericLiteral {
        image: String,
    },
    StringLiteral {
        image: String,
    },
    BytesLiteral {
        image: String,
    },
    BooleanLiteral {
        value: bool,
    },
    NullLiteral,

    // Window functions.
    WindowClause,
    WindowDefinition,
    WindowSpecification,
    PartitionBy,
    WindowFrame {
        unit: FrameUnit,
    },
    WindowFrameExpr {
        boundary_type: BoundaryType,
    },

    // DML.
    InsertStatement {
        insert_mode: InsertMode,
    },
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
    MergeWhenClause {
        /// `None` until the parser sets it; rendering an unset match type
        /// is a soft-fatal formatter condition.
        match_type: Option<MergeMatchType>,
    },
    MergeAction {
        action_type: Option<MergeActionType>,
    },

    // DDL.
    CreateTableStatement {
        modifiers: CreateModifiers,
    },
    CreateViewStatement {
        modifiers: CreateModifiers,
        sql_security: SqlSecurity,
    },
    CreateIndexStatement {
        is_unique: bool,
    },
    CreateFunctionStatement {
        modifiers: CreateModifiers,
        sql_security: SqlSecurity,
        is_aggregate: bool,
    },
    TableElementList,
    ColumnDefinition,
    ColumnList,
    PrimaryKey,
    ForeignKey,
    ForeignKeyReference {
        match_type: ForeignKeyMatch,
        enforced: bool,
    },
    ForeignKeyActions {
        update_action: ForeignKeyAction,
        delete_action: ForeignKeyAction,
    },
    CheckConstraint {
        is_enforced: bool,
    },
    GeneratedColumnInfo {
        is_stored: bool,
    },
    DropStatement {
        object_kind: SchemaObjectKind,
        is_if_exists: bool,
    },
    AlterTableStatement {
        is_if_exists: bool,
    },
    AlterActionList,
    AddConstraintAction {
        is_if_not_exists: bool,
    },
    DropConstraintAction {
        is_if_exists: bool,
    },
    FunctionDeclaration,
    FunctionParameters,
    FunctionParameter {
        is_not_aggregate: bool,
        mode: ParameterMode,
    },
    SqlFunctionBody,

    // Sampling.
    SampleClause,
    SampleSize {
        /// `None` until the parser sets it.
        unit: Option<SampleUnit>,
    },
    SampleSuffix,
    RepeatableClause,
}

impl NodeVariant {
    /// Returns the kind this payload belongs to.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Fake => NodeKind::Fake,
            Self::QueryStatement => NodeKind::QueryStatement,
            Self::Query => NodeKind::Query,
            Self::SetOperation { .. } => NodeKind::SetOperation,
            Self::Select { .. } => NodeKind::Select,
            Self::SelectAs { .. } => NodeKind::SelectAs,
            Self::SelectList => NodeKind::SelectList,
            Self::SelectColumn => NodeKind::SelectColumn,
            Self::Alias => NodeKind::Alias,
            Self::IntoAlias => NodeKind::IntoAlias,
            Self::FromClause => NodeKind::FromClause,
            Self::WhereClause => NodeKind::WhereClause,
            Self::GroupBy => NodeKind::GroupBy,
            Self::Rollup => NodeKind::Rollup,
            Self::Having => NodeKind::Having,
            Self::OrderBy => NodeKind::OrderBy,
            Self::OrderingExpression { .. } => NodeKind::OrderingExpression,
            Self::LimitOffset => NodeKind::LimitOffset,
            Self::Join { .. } => NodeKind::Join,
            Self::OnClause => NodeKind::OnClause,
            Self::UsingClause => NodeKind::UsingClause,
            Self::ParenthesizedJoin => NodeKind::ParenthesizedJoin,
            Self::TablePathExpression => NodeKind::TablePathExpression,
            Self::TableSubquery => NodeKind::TableSubquery,
            Self::WithClause => NodeKind::WithClause,
            Self::WithClauseEntry => NodeKind::WithClauseEntry,
            Self::Hint => NodeKind::Hint,
            Self::HintEntry => NodeKind::HintEntry,
            Self::HintedStatement => NodeKind::HintedStatement,
            Self::OptionsList => NodeKind::OptionsList,
            Self::OptionsEntry => NodeKind::OptionsEntry,
            Self::AndExpr => NodeKind::AndExpr,
            Self::OrExpr => NodeKind::OrExpr,
            Self::BinaryExpression { .. } => NodeKind::BinaryExpression,
            Self::UnaryExpression { .. } => NodeKind::UnaryExpression,
            Self::BitwiseShiftExpression { .. } => NodeKind::BitwiseShiftExpression,
            Self::InExpression { .. } => NodeKind::InExpression,
            Self::InList => NodeKind::InList,
            Self::BetweenExpression { .. } => NodeKind::BetweenExpression,
            Self::CaseValueExpression => NodeKind::CaseValueExpression,
            Self::CaseNoValueExpression => NodeKind::CaseNoValueExpression,
            Self::CastExpression { .. } => NodeKind::CastExpression,
            Self::ExtractExpression => NodeKind::ExtractExpression,
            Self::FunctionCall { .. } => NodeKind::FunctionCall,
            Self::NamedArgument => NodeKind::NamedArgument,
            Self::Star => NodeKind::Star,
            Self::DotStar => NodeKind::DotStar,
            Self::ExpressionSubquery { .. } => NodeKind::ExpressionSubquery,
            Self::PathExpression => NodeKind::PathExpression,
            Self::Identifier { .. } => NodeKind::Identifier,
            Self::IdentifierList => NodeKind::IdentifierList,
            Self::DotIdentifier => NodeKind::DotIdentifier,
            Self::DotGeneralizedField => NodeKind::DotGeneralizedField,
            Self::ArrayElement => NodeKind::ArrayElement,
            Self::ArrayConstructor => NodeKind::ArrayConstructor,
            Self::StructConstructorWithParens => NodeKind::StructConstructorWithParens,
            Self::ParameterExpr { .. } => NodeKind::ParameterExpr,
            Self::IntLiteral { .. } => NodeKind::IntLiteral,
            Self::FloatLiteral { .. } => NodeKind::FloatLiteral,
            Self::NumericLiteral { .. } => NodeKind::NumericLiteral,
            Self::StringLiteral { .. } => NodeKind::StringLiteral,
            Self::BytesLiteral { .. } => NodeKind::BytesLiteral,
            Self::BooleanLiteral { .. } => NodeKind::BooleanLiteral,
            Self::NullLiteral => NodeKind::NullLiteral,
            Self::WindowClause => NodeKind::WindowClause,
            Self::WindowDefinition => NodeKind::WindowDefinition,
            Self::WindowSpecification => NodeKind::WindowSpecification,
            Self::PartitionBy => NodeKind::PartitionBy,
            Self::WindowFrame { .. } => NodeKind::WindowFrame,
            Self::WindowFrameExpr { .. } => NodeKind::WindowFrameExpr,
            Self::InsertStatement { .. } => NodeKind::InsertStatement,
            Self::InsertValuesRowList => NodeKind::InsertValuesRowList,
            Self::InsertValuesRow => NodeKind::InsertValuesRow,
            Self::UpdateStatement => NodeKind::UpdateStatement,
            Self::UpdateItemList => NodeKind::UpdateItemList,
            Self::UpdateItem => NodeKind::UpdateItem,
            Self::UpdateSetValue => NodeKind::UpdateSetValue,
            Self::DeleteStatement => NodeKind::DeleteStatement,
            Self::AssertRowsModified => NodeKind::AssertRowsModified,
            Self::MergeStatement => NodeKind::MergeStatement,
            Self::MergeWhenClauseList => NodeKind::MergeWhenClauseList,
            Self::MergeWhenClause { .. } => NodeKind::MergeWhenClause,
            Self::MergeAction { .. } => NodeKind::MergeAction,
            Self::CreateTableStatement { .. } => NodeKind::CreateTableStatement,
            Self::CreateViewStatement { .. } => NodeKind::CreateViewStatement,
            Self::CreateIndexStatement { .. } => NodeKind::CreateIndexStatement,
            Self::CreateFunctionStatement { .. } => NodeKind::CreateFunctionStatement,
            Self::TableElementList => NodeKind::TableElementList,
            Self::ColumnDefinition => NodeKind::ColumnDefinition,
            Self::ColumnList => NodeKind::ColumnList,
            Self::PrimaryKey => NodeKind::PrimaryKey,
            Self::ForeignKey => NodeKind::ForeignKey,
            Self::ForeignKeyReference { .. } => NodeKind::ForeignKeyReference,
            Self::ForeignKeyActions { .. } => NodeKind::ForeignKeyActions,
            Self::CheckConstraint { .. } => NodeKind::CheckConstraint,
            Self::GeneratedColumnInfo { .. } => NodeKind::GeneratedColumnInfo,
            Self::DropStatement { .. } => NodeKind::DropStatement,
            Self::AlterTableStatement { .. } => NodeKind::AlterTableStatement,
            Self::AlterActionList => NodeKind::AlterActionList,
            Self::AddConstraintAction { .. } => NodeKind::AddConstraintAction,
            Self::DropConstraintAction { .. } => NodeKind::DropConstraintAction,
            Self::FunctionDeclaration => NodeKind::FunctionDeclaration,
            Self::FunctionParameters => NodeKind::FunctionParameters,
            Self::FunctionParameter { .. } => NodeKind::FunctionParameter,
            Self::SqlFunctionBody => NodeKind::SqlFunctionBody,
            Self::SampleClause => NodeKind::SampleClause,
            Self::SampleSize { .. } => NodeKind::SampleSize,
            Self::SampleSuffix => NodeKind::SampleSuffix,
            Self::RepeatableClause => NodeKind::RepeatableClause,
        }
    }

    /// Creates an identifier payload.
    #[must_use]
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::Identifier { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(NodeVariant::Select { distinct: true }.kind(), NodeKind::Select);
        assert_eq!(NodeVariant::identifier("t").kind(), NodeKind::Identifier);
        assert_eq!(NodeVariant::PathExpression.kind(), NodeKind::PathExpression);
    }
}
