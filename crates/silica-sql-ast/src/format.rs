//! Per-variant debug renderings.
//!
//! [`Ast::single_node_debug_string`] renders one node's kind name plus its
//! discriminant attributes in parentheses, comma-joined, in a fixed order.
//! Variants with no non-default attribute fall back to the bare kind name;
//! empty parentheses are never produced. The attribute order and spellings
//! are load-bearing: tests and downstream tooling compare these strings.

use crate::node::{Ast, NodeId};
use crate::ops::{AsMode, InsertMode, JoinHint, JoinType, ParameterMode, SubqueryModifier};
use crate::variant::{CreateModifiers, NodeVariant};

/// Rendering for a binary or unary operator the parser never set.
pub const UNKNOWN_OPERATOR: &str = "<UNKNOWN OPERATOR>";
/// Rendering for a set operation the parser never set.
pub const UNKNOWN_SET_OPERATOR: &str = "<UNKNOWN SET OPERATOR>";

impl Ast {
    /// Renders a single node for debug output.
    #[must_use]
    pub fn single_node_debug_string(&self, id: NodeId) -> String {
        let name = self.node_kind_string(id);
        match self.variant(id) {
            NodeVariant::SetOperation { .. } => {
                format!("{name}({})", self.set_operation_sql(id))
            }
            NodeVariant::Select { distinct } => {
                if *distinct {
                    format!("{name}(distinct=true)")
                } else {
                    name.to_string()
                }
            }
            NodeVariant::SelectAs { as_mode } => match as_mode {
                AsMode::TypeName => name.to_string(),
                AsMode::Value => format!("{name}(as_mode=VALUE)"),
                AsMode::Struct => format!("{name}(as_mode=STRUCT)"),
            },
            NodeVariant::OrderingExpression { descending } => {
                format!("{name}({})", if *descending { "DESC" } else { "ASC" })
            }
            NodeVariant::Join {
                natural,
                join_type,
                join_hint,
            } => {
                let mut attrs: Vec<&str> = Vec::new();
                if *natural {
                    attrs.push("NATURAL");
                }
                if *join_type != JoinType::Default {
                    // Show "Join(COMMA)" rather than "Join(,)" for comma join.
                    attrs.push(if *join_type == JoinType::Comma {
                        "COMMA"
                    } else {
                        join_type.as_str()
                    });
                }
                if *join_hint != JoinHint::None {
                    attrs.push(join_hint.as_str());
                }
                if attrs.is_empty() {
                    name.to_string()
                } else {
                    format!("{name}({})", attrs.join(", "))
                }
            }
            NodeVariant::BinaryExpression { op, is_not } => {
                let sql = op.map_or(UNKNOWN_OPERATOR, |op| op.as_str(*is_not));
                format!("{name}({sql})")
            }
            NodeVariant::UnaryExpression { op } => {
                let sql = op.map_or(UNKNOWN_OPERATOR, |op| op.as_str());
                format!("{name}({sql})")
            }
            NodeVariant::BitwiseShiftExpression { is_left_shift } => {
                format!("{name}({})", if *is_left_shift { "<<" } else { ">>" })
            }
            NodeVariant::InExpression { is_not } => {
                format!("{name}({}IN)", if *is_not { "NOT " } else { "" })
            }
            NodeVariant::BetweenExpression { is_not } => {
                format!("{name}({}BETWEEN)", if *is_not { "NOT " } else { "" })
            }
            NodeVariant::CastExpression { is_safe_cast } => {
                if *is_safe_cast {
                    format!("{name}(return_null_on_error=true)")
                } else {
                    name.to_string()
                }
            }
            NodeVariant::FunctionCall { distinct } => {
                if *distinct {
                    format!("{name}(distinct=true)")
                } else {
                    name.to_string()
                }
            }
            NodeVariant::ExpressionSubquery { modifier } => {
                if *modifier == SubqueryModifier::None {
                    name.to_string()
                } else {
                    format!("{name}(modifier={})", modifier.as_str())
                }
            }
            NodeVariant::Identifier { name: id_string } => {
                format!("{name}({})", to_identifier_literal(id_string))
            }
            // Literal leaves carry their source image verbatim.
            NodeVariant::IntLiteral { image }
            | NodeVariant::FloatLiteral { image }
            | NodeVariant::NumericLiteral { image }
            | NodeVariant::StringLiteral { image }
            | NodeVariant::BytesLiteral { image } => format!("{name}({image})"),
            NodeVariant::BooleanLiteral { value } => {
                format!("{name}({})", if *value { "TRUE" } else { "FALSE" })
            }
            NodeVariant::ParameterExpr { name: param, position } => {
                if param.is_some() {
                    name.to_string()
                } else {
                    format!("{name}({position})")
                }
            }
            NodeVariant::WindowFrame { unit } => format!("{name}({})", unit.as_str()),
            NodeVariant::WindowFrameExpr { boundary_type } => {
                format!("{name}({})", boundary_type.as_str())
            }
            NodeVariant::InsertStatement { insert_mode } => {
                if *insert_mode == InsertMode::Default {
                    name.to_string()
                } else {
                    format!("{name}(insert_mode={})", insert_mode.as_str())
                }
            }
            NodeVariant::MergeAction { action_type } => {
                let mode = action_type.map_or("<INVALID ACTION MODE>", |action| action.as_str());
                format!("{name}({mode})")
            }
            NodeVariant::MergeWhenClause { match_type } => {
                let sql = match match_type {
                    Some(match_type) => match_type.as_str(),
                    None => {
                        // Soft-fatal: best-effort output beats halting a
                        // debug dump.
                        tracing::error!("match type of merge when clause is not set");
                        ""
                    }
                };
                format!("{name}(match_type={sql})")
            }
            NodeVariant::CreateTableStatement { modifiers } => {
                with_create_modifiers(name, modifiers)
            }
            NodeVariant::CreateViewStatement {
                modifiers,
                sql_security,
            } => {
                let base = with_create_modifiers(name, modifiers);
                match sql_security.as_str() {
                    "" => base,
                    security => format!("{base}({security})"),
                }
            }
            NodeVariant::CreateIndexStatement { is_unique } => {
                if *is_unique {
                    format!("{name}(UNIQUE)")
                } else {
                    name.to_string()
                }
            }
            NodeVariant::CreateFunctionStatement {
                modifiers,
                sql_security,
                is_aggregate,
            } => {
                let mut out = with_create_modifiers(name, modifiers);
                if *is_aggregate {
                    out.push_str("(is_aggregate=true)");
                }
                match sql_security.as_str() {
                    "" => out,
                    security => format!("{out}({security})"),
                }
            }
            NodeVariant::ForeignKeyReference {
                match_type,
                enforced,
            } => {
                format!(
                    "{name}(MATCH {}{}ENFORCED)",
                    match_type.as_str(),
                    if *enforced { " " } else { " NOT " }
                )
            }
            NodeVariant::ForeignKeyActions {
                update_action,
                delete_action,
            } => {
                format!(
                    "{name}(ON UPDATE {} ON DELETE {})",
                    update_action.as_str(),
                    delete_action.as_str()
                )
            }
            NodeVariant::CheckConstraint { is_enforced } => {
                format!(
                    "{name}({})",
                    if *is_enforced { "ENFORCED" } else { "NOT ENFORCED" }
                )
            }
            NodeVariant::GeneratedColumnInfo { is_stored } => {
                if *is_stored {
                    format!("{name}(is_stored=true)")
                } else {
                    name.to_string()
                }
            }
            NodeVariant::DropStatement {
                object_kind,
                is_if_exists,
            } => {
                let out = format!("{name} {}", object_kind.as_str());
                if *is_if_exists {
                    format!("{out}(is_if_exists)")
                } else {
                    out
                }
            }
            NodeVariant::AlterTableStatement { is_if_exists } => {
                if *is_if_exists {
                    format!("{name}(is_if_exists)")
                } else {
                    name.to_string()
                }
            }
            NodeVariant::AddConstraintAction { is_if_not_exists } => {
                if *is_if_not_exists {
                    format!("{name}(is_if_not_exists)")
                } else {
                    name.to_string()
                }
            }
            NodeVariant::DropConstraintAction { is_if_exists } => {
                if *is_if_exists {
                    format!("{name}(is_if_exists)")
                } else {
                    name.to_string()
                }
            }
            NodeVariant::FunctionParameter {
                is_not_aggregate,
                mode,
            } => {
                let mut attrs: Vec<String> = Vec::new();
                if *is_not_aggregate {
                    attrs.push("is_not_aggregate=true".to_string());
                }
                if *mode != ParameterMode::NotSet {
                    attrs.push(format!("mode={}", mode.as_str()));
                }
                if attrs.is_empty() {
                    name.to_string()
                } else {
                    format!("{name}({})", attrs.join(", "))
                }
            }
            _ => name.to_string(),
        }
    }

    /// Returns the set operation keyword and ALL/DISTINCT modifier pair.
    ///
    /// An unset operation yields the unknown sentinel and an empty modifier.
    #[must_use]
    pub fn set_operation_pair(&self, id: NodeId) -> (&'static str, &'static str) {
        match self.variant(id) {
            NodeVariant::SetOperation { op: Some(op), distinct } => {
                (op.as_str(), if *distinct { "DISTINCT" } else { "ALL" })
            }
            _ => (UNKNOWN_SET_OPERATOR, ""),
        }
    }

    /// Returns the joined SQL form of a set operation, e.g. `UNION ALL`.
    #[must_use]
    pub fn set_operation_sql(&self, id: NodeId) -> String {
        match self.set_operation_pair(id) {
            (op, "") => op.to_string(),
            (op, modifier) => format!("{op} {modifier}"),
        }
    }

    /// Returns the TABLESAMPLE unit keyword; unset yields a sentinel.
    #[must_use]
    pub fn sample_size_unit_sql(&self, id: NodeId) -> &'static str {
        match self.variant(id) {
            NodeVariant::SampleSize { unit: Some(unit) } => unit.as_str(),
            _ => "<UNKNOWN UNIT>",
        }
    }

    /// Renders a path expression as a dotted identifier string, quoting
    /// names that need it. `max_prefix_size` of 0 renders the whole path;
    /// otherwise only the first `max_prefix_size` names.
    #[must_use]
    pub fn path_identifier_string(&self, id: NodeId, max_prefix_size: usize) -> String {
        let names = self.children(id);
        let end = if max_prefix_size == 0 {
            names.len()
        } else {
            names.len().min(max_prefix_size)
        };
        let mut out = String::new();
        for name in &names[..end] {
            if !out.is_empty() {
                out.push('.');
            }
            out.push_str(&to_identifier_literal(
                self.identifier_name(*name).unwrap_or_default(),
            ));
        }
        out
    }

    /// Returns the raw identifier names of a path expression, in order.
    #[must_use]
    pub fn path_identifier_vector(&self, id: NodeId) -> Vec<String> {
        self.children(id)
            .iter()
            .filter_map(|name| self.identifier_name(*name))
            .map(str::to_string)
            .collect()
    }
}

fn with_create_modifiers(name: &str, modifiers: &CreateModifiers) -> String {
    use crate::ops::CreateScope;
    let mut attrs: Vec<&str> = Vec::new();
    match modifiers.scope {
        CreateScope::Private => attrs.push("is_private"),
        CreateScope::Public => attrs.push("is_public"),
        CreateScope::Temporary => attrs.push("is_temp"),
        CreateScope::Default => {}
    }
    if modifiers.is_or_replace {
        attrs.push("is_or_replace");
    }
    if modifiers.is_if_not_exists {
        attrs.push("is_if_not_exists");
    }
    if attrs.is_empty() {
        name.to_string()
    } else {
        format!("{name}({})", attrs.join(", "))
    }
}

/// Renders an identifier, backquoting it unless it is already a plain
/// identifier (letter or underscore followed by letters, digits, or
/// underscores).
#[must_use]
pub fn to_identifier_literal(name: &str) -> String {
    let mut chars = name.chars();
    let plain = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };
    if plain {
        name.to_string()
    } else {
        let escaped = name.replace('\\', "\\\\").replace('`', "\\`");
        format!("`{escaped}`")
    }
}
