//! End-to-end tests for tree dumping and kind search on realistic trees.

mod common;
use common::*;

use std::collections::HashSet;

use silica_sql_ast::{Ast, NodeKind, NodeVariant, Span, Visitor};

// ===================================================================
// debug_string
// ===================================================================

#[test]
fn select_query_dump() {
    let mut ast = Ast::new();
    let root = select_query(&mut ast);

    let expected = "\
QueryStatement [0-43]
  Query [0-43]
    Select [0-43]
      SelectList [7-15]
        SelectColumn [7-9]
          Identifier(id) [7-9]
        SelectColumn [11-15]
          Identifier(name) [11-15]
      FromClause [16-26]
        TablePathExpression [21-26]
          PathExpression [21-26]
            Identifier(users) [21-26]
      WhereClause [27-43]
        BinaryExpression(=) [33-40]
          Identifier(id) [33-35]
          IntLiteral(10) [38-40]
";
    assert_eq!(ast.debug_string(root, 20), expected);
}

#[test]
fn dump_marks_every_skipped_branch() {
    let mut ast = Ast::new();
    let root = select_query(&mut ast);

    let dump = ast.debug_string(root, 3);
    // SelectList, FromClause, and WhereClause all sit at the depth limit.
    assert_eq!(dump.matches("Subtree skipped (reached max depth 3)").count(), 3);
    assert!(!dump.contains("Identifier"));
    // The marker is indented two deeper than the node it replaces.
    assert!(dump.contains("      SelectList [7-15]\n        Subtree skipped"));
}

#[test]
fn dump_at_depth_zero_shows_only_the_root() {
    let mut ast = Ast::new();
    let root = select_query(&mut ast);

    assert_eq!(
        ast.debug_string(root, 0),
        "QueryStatement [0-43]\n  Subtree skipped (reached max depth 0)\n"
    );
}

// ===================================================================
// descendants_with_kinds
// ===================================================================

#[test]
fn find_identifiers_breadth_first() {
    let mut ast = Ast::new();
    let root = select_query(&mut ast);

    let kinds: HashSet<NodeKind> = [NodeKind::Identifier].into_iter().collect();
    let mut found = Vec::new();
    ast.descendants_with_kinds(root, &kinds, true, &mut found);

    let names: Vec<&str> = found
        .iter()
        .filter_map(|id| ast.identifier_name(*id))
        .collect();
    // Level order: the WHERE operand sits one level above the table path
    // identifier, so it comes out before "users" despite reading after it.
    assert_eq!(names, vec!["id", "name", "id", "users"]);
}

#[test]
fn pruned_search_stops_at_clause_boundaries() {
    let mut ast = Ast::new();
    let root = select_query(&mut ast);

    let kinds: HashSet<NodeKind> = [NodeKind::SelectList, NodeKind::Identifier]
        .into_iter()
        .collect();
    let mut found = Vec::new();
    ast.descendants_with_kinds(root, &kinds, false, &mut found);

    // The SelectList match swallows its identifiers; the others survive.
    let found_kinds: Vec<NodeKind> = found.iter().map(|id| ast.kind(*id)).collect();
    assert_eq!(
        found_kinds,
        vec![
            NodeKind::SelectList,
            NodeKind::Identifier,
            NodeKind::Identifier,
        ]
    );
    let names: Vec<&str> = found
        .iter()
        .filter_map(|id| ast.identifier_name(*id))
        .collect();
    assert_eq!(names, vec!["id", "users"]);
}

#[test]
fn search_with_no_matching_kind_yields_nothing() {
    let mut ast = Ast::new();
    let root = select_query(&mut ast);

    let kinds: HashSet<NodeKind> = [NodeKind::MergeStatement].into_iter().collect();
    let mut found = vec![root];
    ast.descendants_with_kinds(root, &kinds, true, &mut found);
    assert!(found.is_empty());
}

// ===================================================================
// Visitor
// ===================================================================

/// Counts identifier occurrences by name while walking the whole tree.
struct IdentifierCounter {
    names: Vec<String>,
}

impl Visitor for IdentifierCounter {
    fn visit(&mut self, ast: &Ast, node: silica_sql_ast::NodeId) {
        if let Some(name) = ast.identifier_name(node) {
            self.names.push(name.to_string());
        }
        ast.children_accept(node, self);
    }
}

#[test]
fn visitor_sees_every_identifier_in_source_order() {
    let mut ast = Ast::new();
    let root = select_query(&mut ast);

    let mut counter = IdentifierCounter { names: Vec::new() };
    ast.accept(root, &mut counter);
    assert_eq!(counter.names, vec!["id", "name", "users", "id"]);
}

#[test]
fn visitor_can_stop_descending() {
    // A visitor that never calls children_accept sees only the entry node.
    struct Shallow(usize);
    impl Visitor for Shallow {
        fn visit(&mut self, _ast: &Ast, _node: silica_sql_ast::NodeId) {
            self.0 += 1;
        }
    }

    let mut ast = Ast::new();
    let root = select_query(&mut ast);
    let mut shallow = Shallow(0);
    ast.accept(root, &mut shallow);
    assert_eq!(shallow.0, 1);
}

// ===================================================================
// Node kind registry on real trees
// ===================================================================

#[test]
fn node_kind_strings_match_registry() {
    let mut ast = Ast::new();
    let root = select_query(&mut ast);

    let kinds: HashSet<NodeKind> = NodeKind::ALL.iter().copied().collect();
    let mut found = Vec::new();
    ast.descendants_with_kinds(root, &kinds, true, &mut found);
    assert_eq!(found.len(), ast.len());

    for id in found {
        let kind = ast.kind(id);
        assert_eq!(silica_sql_ast::kind_name(kind as u8), kind.name());
    }
}

#[test]
fn unknown_raw_kind_is_rendered_safely() {
    assert_eq!(silica_sql_ast::kind_name(u8::MAX), "<UNKNOWN NODE KIND>");
}

#[test]
fn dump_from_an_inner_node_starts_at_depth_zero() {
    let mut ast = Ast::new();
    let root = select_query(&mut ast);

    let kinds: HashSet<NodeKind> = [NodeKind::WhereClause].into_iter().collect();
    let mut found = Vec::new();
    ast.descendants_with_kinds(root, &kinds, true, &mut found);
    let where_clause = found[0];

    let dump = ast.debug_string(where_clause, 10);
    assert!(dump.starts_with("WhereClause [27-43]\n  BinaryExpression(=) [33-40]\n"));
}

#[test]
fn dump_renders_literals_and_parameters() {
    let mut ast = Ast::new();
    let root = ast.add_node(NodeVariant::ExpressionSubquery {
        modifier: silica_sql_ast::ops::SubqueryModifier::Array,
    }, Span::new(0, 30));
    let param = ast.add_node(
        NodeVariant::ParameterExpr {
            name: None,
            position: 2,
        },
        Span::new(10, 11),
    );
    let string = ast.add_node(
        NodeVariant::StringLiteral {
            image: "'x'".into(),
        },
        Span::new(13, 16),
    );
    ast.add_children(root, [Some(param), Some(string)]);

    assert_eq!(
        ast.debug_string(root, 5),
        "ExpressionSubquery(modifier=ARRAY) [0-30]\n\
         \x20 ParameterExpr(2) [10-11]\n\
         \x20 StringLiteral('x') [13-16]\n"
    );
}
