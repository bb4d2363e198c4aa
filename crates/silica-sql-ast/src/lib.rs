//! # silica-sql-ast
//!
//! An arena-based SQL parse tree: node kinds, tree linkage, traversal,
//! and debug rendering.
//!
//! This crate provides:
//! - A closed [`NodeKind`] registry with stable display names
//! - An arena [`Ast`] storing nodes with parent/child links and source spans
//! - A [`Visitor`] trait plus depth-bounded dumping and queue-based kind search
//! - Resolution of generalized path expressions into DML table targets
//!
//! ## Building and Dumping a Tree
//!
//! Nodes are created unattached and linked afterwards; the dump renders
//! one node per line with indentation tracking depth:
//!
//! ```rust
//! use silica_sql_ast::{Ast, NodeVariant, Span};
//!
//! let mut ast = Ast::new();
//! let query = ast.add_node(NodeVariant::Query, Span::new(0, 15));
//! let select = ast.add_node(NodeVariant::Select { distinct: false }, Span::new(0, 15));
//! let list = ast.add_node(NodeVariant::SelectList, Span::new(7, 9));
//! let id = ast.add_node(NodeVariant::identifier("id"), Span::new(7, 9));
//! ast.add_child(query, select);
//! ast.add_child(select, list);
//! ast.add_child(list, id);
//!
//! let dump = ast.debug_string(query, 10);
//! assert!(dump.starts_with("Query [0-15]\n  Select [0-15]\n"));
//! ```
//!
//! ## Resolving a DML Target
//!
//! Non-nested DML statements require a plain table path as their target;
//! anything more elaborate produces a located diagnostic:
//!
//! ```rust
//! use silica_sql_ast::{Ast, NodeVariant, Span};
//!
//! let mut ast = Ast::new();
//! let delete = ast.add_node(NodeVariant::DeleteStatement, Span::new(0, 18));
//! let table = ast.add_node(NodeVariant::PathExpression, Span::new(12, 18));
//! let name = ast.add_node(NodeVariant::identifier("users"), Span::new(12, 17));
//! ast.add_child(table, name);
//! ast.add_child(delete, table);
//!
//! assert_eq!(ast.target_path_for_non_nested(delete), Ok(table));
//! ```

pub mod error;
pub mod format;
pub mod kind;
pub mod node;
pub mod ops;
pub mod path;
pub mod span;
pub mod variant;
pub mod visit;

pub use error::{AstError, AstResult};
pub use kind::{kind_name, NodeKind, UNKNOWN_NODE_KIND};
pub use node::{Ast, Node, NodeId};
pub use span::Span;
pub use variant::{CreateModifiers, NodeVariant};
pub use visit::Visitor;
