//! Generalized path expression checking and DML target resolution.
//!
//! A *generalized path expression* is a chain built from a plain path
//! expression extended with dotted identifiers, dotted generalized fields,
//! and array element accesses, e.g. `a.b.(c.d).e[f]`. DML statements parse
//! their target as a generalized path, but non-nested DML only accepts a
//! plain table path; the resolver here narrows one to the other and points
//! the error at the first offending component otherwise.

use crate::error::{AstError, AstResult};
use crate::kind::NodeKind;
use crate::node::{Ast, NodeId};

impl Ast {
    /// Verifies that `path` is a pure generalized path expression: a chain
    /// of `DotGeneralizedField` / `DotIdentifier` / `ArrayElement` nodes
    /// whose leftmost base is a `PathExpression`.
    ///
    /// # Errors
    ///
    /// Returns a located SQL error naming the first node kind that breaks
    /// the chain.
    pub fn verify_is_pure_generalized_path_expression(&self, path: NodeId) -> AstResult<()> {
        let mut path = path;
        loop {
            match self.kind(path) {
                NodeKind::PathExpression => return Ok(()),
                NodeKind::DotGeneralizedField
                | NodeKind::DotIdentifier
                | NodeKind::ArrayElement => {
                    path = self.expect_child(path, 0)?;
                }
                other => {
                    return Err(AstError::sql(
                        format!(
                            "Expected pure generalized path expression, but found \
                             node kind {}",
                            other.name()
                        ),
                        self.span(path),
                    ));
                }
            }
        }
    }

    /// Resolves the target path of a non-nested DML statement to its
    /// `PathExpression` node.
    ///
    /// The statement must be a `DeleteStatement`, `InsertStatement`, or
    /// `UpdateStatement`; its target path is the first child.
    ///
    /// # Errors
    ///
    /// Returns a located SQL error if the target is a generalized path
    /// rather than a plain table path, or an internal error if `statement`
    /// is not a DML statement or the target is malformed.
    pub fn target_path_for_non_nested(&self, statement: NodeId) -> AstResult<NodeId> {
        let statement_type = match self.kind(statement) {
            NodeKind::DeleteStatement => "DELETE",
            NodeKind::InsertStatement => "INSERT",
            NodeKind::UpdateStatement => "UPDATE",
            other => {
                return Err(AstError::internal(format!(
                    "target_path_for_non_nested called on {}",
                    other.name()
                )));
            }
        };
        let target = self.expect_child(statement, 0)?;
        self.target_path_for_non_nested_dml(statement_type, target)
    }

    /// Narrows `target_path` to a `PathExpression`, or reports why it is
    /// not one, with `statement_type` naming the statement in the message.
    fn target_path_for_non_nested_dml(
        &self,
        statement_type: &str,
        target_path: NodeId,
    ) -> AstResult<NodeId> {
        debug_assert!(
            self.verify_is_pure_generalized_path_expression(target_path)
                .is_ok(),
            "target is not a generalized path expression"
        );
        if self.kind(target_path) == NodeKind::PathExpression {
            return Ok(target_path);
        }

        // Walk down to the component directly above the base PathExpression
        // and point the error at its right-hand side.
        let mut expr = target_path;
        loop {
            // Every chain component stores its base on the left and the
            // accessor (name, path, or index) on the right.
            let (expr_lhs, expr_rhs) = match self.kind(expr) {
                NodeKind::DotGeneralizedField
                | NodeKind::DotIdentifier
                | NodeKind::ArrayElement => {
                    (self.expect_child(expr, 0)?, self.expect_child(expr, 1)?)
                }
                other => {
                    return Err(AstError::internal(format!(
                        "unexpected node kind while resolving a DML target path: {}",
                        other.name()
                    )));
                }
            };

            if self.kind(expr_lhs) == NodeKind::PathExpression {
                return Err(AstError::sql(
                    format!("Non-nested {statement_type} statement requires a table name"),
                    self.span(expr_rhs),
                ));
            }
            expr = expr_lhs;
        }
    }

    /// Returns the `i`-th child of `node`, or an internal error if absent.
    fn expect_child(&self, node: NodeId, i: usize) -> AstResult<NodeId> {
        self.child(node, i).ok_or_else(|| {
            AstError::internal(format!(
                "{} node is missing child {i}",
                self.node_kind_string(node)
            ))
        })
    }
}
