//! Operator and modifier enumerations carried by node payloads.
//!
//! Every enum here is closed and its SQL rendering is an exhaustive match,
//! so adding an enumerator without a rendering cannot compile. Operators
//! that can exist in an unset state during parsing are stored as
//! `Option<...>` on the payload; the unset renderings (the
//! `<UNKNOWN OPERATOR>` family) live with the formatters.

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Like,
    Is,
    Eq,
    Ne,
    /// The `<>` spelling of not-equals.
    Ne2,
    Gt,
    Lt,
    Ge,
    Le,
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    Plus,
    Minus,
    Multiply,
    Divide,
}

impl BinaryOp {
    /// Returns the SQL symbol, honoring the NOT form for LIKE and IS.
    #[must_use]
    pub const fn as_str(self, is_not: bool) -> &'static str {
        match self {
            Self::Like => {
                if is_not {
                    "NOT LIKE"
                } else {
                    "LIKE"
                }
            }
            Self::Is => {
                if is_not {
                    "IS NOT"
                } else {
                    "IS"
                }
            }
            Self::Eq => "=",
            Self::Ne => "!=",
            Self::Ne2 => "<>",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Ge => ">=",
            Self::Le => "<=",
            Self::BitwiseOr => "|",
            Self::BitwiseXor => "^",
            Self::BitwiseAnd => "&",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Not,
    BitwiseNot,
    Minus,
    Plus,
}

impl UnaryOp {
    /// Returns the SQL symbol.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Not => "NOT",
            Self::BitwiseNot => "~",
            Self::Minus => "-",
            Self::Plus => "+",
        }
    }
}

/// Set operations (UNION/EXCEPT/INTERSECT).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOp {
    Union,
    Except,
    Intersect,
}

impl SetOp {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Union => "UNION",
            Self::Except => "EXCEPT",
            Self::Intersect => "INTERSECT",
        }
    }
}

/// Join types. `Default` means the JOIN keyword appeared unqualified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinType {
    #[default]
    Default,
    /// Comma join; rendered as `COMMA` in debug output.
    Comma,
    Cross,
    Full,
    Inner,
    Left,
    Right,
}

impl JoinType {
    /// Returns the SQL keyword, empty for the default join type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "",
            Self::Comma => ",",
            Self::Cross => "CROSS",
            Self::Full => "FULL",
            Self::Inner => "INNER",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
        }
    }
}

/// Join hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinHint {
    #[default]
    None,
    Hash,
    Lookup,
}

impl JoinHint {
    /// Returns the SQL keyword, empty when no hint was given.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Hash => "HASH",
            Self::Lookup => "LOOKUP",
        }
    }
}

/// SELECT AS mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AsMode {
    /// `SELECT AS <type name>`; the default, not rendered as a modifier.
    #[default]
    TypeName,
    Struct,
    Value,
}

/// Expression subquery modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubqueryModifier {
    #[default]
    None,
    Array,
    Exists,
}

impl SubqueryModifier {
    /// Returns the SQL keyword, empty when no modifier was given.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Array => "ARRAY",
            Self::Exists => "EXISTS",
        }
    }
}

/// Window frame units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameUnit {
    Rows,
    Range,
}

impl FrameUnit {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rows => "ROWS",
            Self::Range => "RANGE",
        }
    }
}

/// Window frame boundary types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryType {
    UnboundedPreceding,
    OffsetPreceding,
    CurrentRow,
    OffsetFollowing,
    UnboundedFollowing,
}

impl BoundaryType {
    /// Returns the SQL phrase.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnboundedPreceding => "UNBOUNDED PRECEDING",
            Self::OffsetPreceding => "OFFSET PRECEDING",
            Self::CurrentRow => "CURRENT ROW",
            Self::OffsetFollowing => "OFFSET FOLLOWING",
            Self::UnboundedFollowing => "UNBOUNDED FOLLOWING",
        }
    }
}

/// Foreign key MATCH types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForeignKeyMatch {
    Simple,
    Full,
    NotDistinct,
}

impl ForeignKeyMatch {
    /// Returns the SQL phrase.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "SIMPLE",
            Self::Full => "FULL",
            Self::NotDistinct => "NOT DISTINCT",
        }
    }
}

/// Foreign key referential actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForeignKeyAction {
    #[default]
    NoAction,
    Restrict,
    Cascade,
    SetNull,
}

impl ForeignKeyAction {
    /// Returns the SQL phrase.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoAction => "NO ACTION",
            Self::Restrict => "RESTRICT",
            Self::Cascade => "CASCADE",
            Self::SetNull => "SET NULL",
        }
    }
}

/// Merge action types (the clause body of WHEN ... THEN).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeActionType {
    Insert,
    Update,
    Delete,
}

impl MergeActionType {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Insert => "INSERT",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }
}

/// Merge WHEN clause match types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeMatchType {
    Matched,
    NotMatchedBySource,
    NotMatchedByTarget,
}

impl MergeMatchType {
    /// Returns the debug rendering.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Matched => "MATCHED",
            Self::NotMatchedBySource => "NOT_MATCHED_BY_SOURCE",
            Self::NotMatchedByTarget => "NOT_MATCHED_BY_TARGET",
        }
    }
}

/// Insert modes (`INSERT OR REPLACE` and friends).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsertMode {
    #[default]
    Default,
    Replace,
    Update,
    Ignore,
}

impl InsertMode {
    /// Returns the SQL keyword, empty for the default mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "",
            Self::Replace => "REPLACE",
            Self::Update => "UPDATE",
            Self::Ignore => "IGNORE",
        }
    }
}

/// Procedure parameter modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParameterMode {
    #[default]
    NotSet,
    In,
    Out,
    InOut,
}

impl ParameterMode {
    /// Returns the SQL keyword, empty when unset.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotSet => "",
            Self::In => "IN",
            Self::Out => "OUT",
            Self::InOut => "INOUT",
        }
    }
}

/// CREATE statement scopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreateScope {
    #[default]
    Default,
    Private,
    Public,
    Temporary,
}

/// SQL SECURITY clauses on CREATE FUNCTION / CREATE VIEW.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SqlSecurity {
    #[default]
    Unspecified,
    Invoker,
    Definer,
}

impl SqlSecurity {
    /// Returns the SQL phrase, empty when unspecified.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unspecified => "",
            Self::Invoker => "SQL SECURITY INVOKER",
            Self::Definer => "SQL SECURITY DEFINER",
        }
    }
}

/// TABLESAMPLE size units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleUnit {
    Rows,
    Percent,
}

impl SampleUnit {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rows => "ROWS",
            Self::Percent => "PERCENT",
        }
    }
}

/// Schema object kinds named by DROP and ALTER statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaObjectKind {
    AggregateFunction,
    Constant,
    Database,
    ExternalTable,
    Function,
    Index,
    MaterializedView,
    Model,
    Procedure,
    Table,
    TableFunction,
    View,
}

impl SchemaObjectKind {
    /// Returns the SQL phrase.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AggregateFunction => "AGGREGATE FUNCTION",
            Self::Constant => "CONSTANT",
            Self::Database => "DATABASE",
            Self::ExternalTable => "EXTERNAL TABLE",
            Self::Function => "FUNCTION",
            Self::Index => "INDEX",
            Self::MaterializedView => "MATERIALIZED VIEW",
            Self::Model => "MODEL",
            Self::Procedure => "PROCEDURE",
            Self::Table => "TABLE",
            Self::TableFunction => "TABLE FUNCTION",
            Self::View => "VIEW",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_op_symbols() {
        assert_eq!(BinaryOp::Eq.as_str(false), "=");
        assert_eq!(BinaryOp::Ne2.as_str(false), "<>");
        assert_eq!(BinaryOp::Like.as_str(true), "NOT LIKE");
        assert_eq!(BinaryOp::Is.as_str(true), "IS NOT");
        assert_eq!(BinaryOp::Is.as_str(false), "IS");
    }

    #[test]
    fn test_default_modifiers_render_empty() {
        assert_eq!(JoinType::Default.as_str(), "");
        assert_eq!(JoinHint::None.as_str(), "");
        assert_eq!(InsertMode::Default.as_str(), "");
        assert_eq!(ParameterMode::NotSet.as_str(), "");
        assert_eq!(SqlSecurity::Unspecified.as_str(), "");
    }

    #[test]
    fn test_foreign_key_phrases() {
        assert_eq!(ForeignKeyMatch::NotDistinct.as_str(), "NOT DISTINCT");
        assert_eq!(ForeignKeyAction::SetNull.as_str(), "SET NULL");
    }
}
