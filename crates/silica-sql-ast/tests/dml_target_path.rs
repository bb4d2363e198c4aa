//! End-to-end tests for DML target path resolution.

mod common;
use common::*;

use silica_sql_ast::ops::InsertMode;
use silica_sql_ast::{Ast, AstError, NodeId, NodeKind, NodeVariant, Span};

/// Wraps `base` in a `DotIdentifier` accessing `name`.
fn dot(ast: &mut Ast, base: NodeId, name: &str, at: Span) -> NodeId {
    let node = ast.add_node(NodeVariant::DotIdentifier, Span::new(ast.span(base).start, at.end));
    let id = ast.add_node(NodeVariant::identifier(name), at);
    ast.add_children(node, [Some(base), Some(id)]);
    node
}

/// Wraps `base` in an `ArrayElement` indexed by an integer literal.
fn index(ast: &mut Ast, base: NodeId, at: Span) -> NodeId {
    let node = ast.add_node(NodeVariant::ArrayElement, Span::new(ast.span(base).start, at.end));
    let position = ast.add_node(NodeVariant::IntLiteral { image: "0".into() }, at);
    ast.add_children(node, [Some(base), Some(position)]);
    node
}

// ===================================================================
// DELETE / INSERT / UPDATE
// ===================================================================

#[test]
fn delete_with_table_path_resolves() {
    let mut ast = Ast::new();
    let statement = ast.add_node(NodeVariant::DeleteStatement, Span::new(0, 25));
    let target = path_expr(&mut ast, &["db", "users"], Span::new(12, 20));
    ast.add_child(statement, target);

    assert_eq!(ast.target_path_for_non_nested(statement), Ok(target));
    assert_eq!(ast.path_identifier_string(target, 0), "db.users");
}

#[test]
fn insert_with_table_path_resolves() {
    let mut ast = Ast::new();
    let statement = ast.add_node(
        NodeVariant::InsertStatement {
            insert_mode: InsertMode::Replace,
        },
        Span::new(0, 30),
    );
    let target = path_expr(&mut ast, &["users"], Span::new(19, 24));
    ast.add_child(statement, target);

    assert_eq!(ast.target_path_for_non_nested(statement), Ok(target));
}

#[test]
fn update_of_nested_field_is_rejected() {
    // UPDATE t.nested: a generalized path is not a table name.
    let mut ast = Ast::new();
    let statement = ast.add_node(NodeVariant::UpdateStatement, Span::new(0, 16));
    let base = path_expr(&mut ast, &["t"], Span::new(7, 8));
    let target = dot(&mut ast, base, "nested", Span::new(9, 15));
    ast.add_child(statement, target);

    assert_eq!(
        ast.target_path_for_non_nested(statement),
        Err(AstError::sql(
            "Non-nested UPDATE statement requires a table name",
            Span::new(9, 15)
        ))
    );
}

#[test]
fn error_location_is_the_accessor_nearest_the_base() {
    // DELETE t.a[0].b: the walk blames `a`, the first step away from the
    // table path, not the outermost accessor `b`.
    let mut ast = Ast::new();
    let statement = ast.add_node(NodeVariant::DeleteStatement, Span::new(0, 22));
    let base = path_expr(&mut ast, &["t"], Span::new(7, 8));
    let with_a = dot(&mut ast, base, "a", Span::new(9, 10));
    let with_index = index(&mut ast, with_a, Span::new(11, 12));
    let target = dot(&mut ast, with_index, "b", Span::new(15, 16));
    ast.add_child(statement, target);

    let err = ast.target_path_for_non_nested(statement).unwrap_err();
    assert_eq!(err.span(), Some(Span::new(9, 10)));
    assert_eq!(
        err.to_string(),
        "Non-nested DELETE statement requires a table name [at 9-10]"
    );
}

// ===================================================================
// Purity check
// ===================================================================

#[test]
fn generalized_chain_over_a_path_is_pure() {
    let mut ast = Ast::new();
    let base = path_expr(&mut ast, &["t"], Span::new(0, 1));
    let with_a = dot(&mut ast, base, "a", Span::new(2, 3));
    let target = index(&mut ast, with_a, Span::new(4, 5));

    assert!(ast.verify_is_pure_generalized_path_expression(target).is_ok());
    assert_eq!(ast.kind(target), NodeKind::ArrayElement);
}

#[test]
fn chain_over_a_subquery_is_impure() {
    let mut ast = Ast::new();
    let subquery = ast.add_node(
        NodeVariant::ExpressionSubquery {
            modifier: silica_sql_ast::ops::SubqueryModifier::None,
        },
        Span::new(0, 10),
    );
    let target = dot(&mut ast, subquery, "x", Span::new(11, 12));

    let err = ast
        .verify_is_pure_generalized_path_expression(target)
        .unwrap_err();
    assert_eq!(err.span(), Some(Span::new(0, 10)));
    assert!(err
        .to_string()
        .contains("Expected pure generalized path expression, but found node kind ExpressionSubquery"));
}
