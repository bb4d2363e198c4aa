#![allow(dead_code)]

use silica_sql_ast::{Ast, NodeId, NodeVariant, Span};

/// Builds a `PathExpression` node over `names`, spanning `span`, with one
/// identifier child per name at an arbitrary sub-span.
pub fn path_expr(ast: &mut Ast, names: &[&str], span: Span) -> NodeId {
    let path = ast.add_node(NodeVariant::PathExpression, span);
    let mut offset = span.start;
    for name in names {
        let id = ast.add_node(
            NodeVariant::identifier(*name),
            Span::new(offset, offset + name.len()),
        );
        ast.add_child(path, id);
        offset += name.len() + 1;
    }
    path
}

/// Builds the tree for `SELECT id, name FROM users WHERE id = 10`.
///
/// Shape:
/// ```text
/// QueryStatement
///   Query
///     Select
///       SelectList
///         SelectColumn x2 (each over an Identifier)
///       FromClause
///         TablePathExpression
///           PathExpression(users)
///       WhereClause
///         BinaryExpression(=)
///           Identifier(id)
///           IntLiteral(10)
/// ```
pub fn select_query(ast: &mut Ast) -> NodeId {
    let statement = ast.add_node(NodeVariant::QueryStatement, Span::new(0, 43));
    let query = ast.add_node(NodeVariant::Query, Span::new(0, 43));
    let select = ast.add_node(NodeVariant::Select { distinct: false }, Span::new(0, 43));

    let list = ast.add_node(NodeVariant::SelectList, Span::new(7, 15));
    for (name, start) in [("id", 7), ("name", 11)] {
        let column = ast.add_node(
            NodeVariant::SelectColumn,
            Span::new(start, start + name.len()),
        );
        let id = ast.add_node(
            NodeVariant::identifier(name),
            Span::new(start, start + name.len()),
        );
        ast.add_child(column, id);
        ast.add_child(list, column);
    }

    let from = ast.add_node(NodeVariant::FromClause, Span::new(16, 26));
    let table = ast.add_node(NodeVariant::TablePathExpression, Span::new(21, 26));
    let table_path = path_expr(ast, &["users"], Span::new(21, 26));
    ast.add_child(table, table_path);
    ast.add_child(from, table);

    let where_clause = ast.add_node(NodeVariant::WhereClause, Span::new(27, 43));
    let comparison = ast.add_node(
        NodeVariant::BinaryExpression {
            op: Some(silica_sql_ast::ops::BinaryOp::Eq),
            is_not: false,
        },
        Span::new(33, 40),
    );
    let lhs = ast.add_node(NodeVariant::identifier("id"), Span::new(33, 35));
    let rhs = ast.add_node(NodeVariant::IntLiteral { image: "10".into() }, Span::new(38, 40));
    ast.add_children(comparison, [Some(lhs), Some(rhs)]);
    ast.add_child(where_clause, comparison);

    ast.add_children(select, [Some(list), Some(from), Some(where_clause)]);
    ast.add_child(query, select);
    ast.add_child(statement, query);
    statement
}
