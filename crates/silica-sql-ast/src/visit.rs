//! Tree traversal: visiting, dumping, and kind search.
//!
//! Three traversal regimes with different safety tradeoffs:
//!
//! - [`Visitor`] double dispatch ([`Ast::accept`] / [`Ast::children_accept`])
//!   is the generic walk used by downstream consumers. It recurses, so its
//!   stack depth equals tree depth; practical SQL nesting is assumed
//!   bounded.
//! - [`Ast::debug_string`] renders a depth-limited pre-order dump through a
//!   recursive step kept deliberately small: the per-frame state is one
//!   node id, everything else lives in the [`Dumper`] struct, and the
//!   recursive function only prints and recurses. Deep trees cost one
//!   shallow frame per level, nothing more.
//! - [`Ast::descendants_with_kinds`] is an explicit-queue BFS and never
//!   recurses at all.

use std::collections::{HashSet, VecDeque};

use crate::kind::NodeKind;
use crate::node::{Ast, NodeId};

/// A parse tree visitor.
///
/// One polymorphic entry point; implementations dispatch on
/// `ast.kind(node)` or `ast.variant(node)` as needed and call
/// [`Ast::children_accept`] to continue the walk.
pub trait Visitor {
    /// Visits one node.
    fn visit(&mut self, ast: &Ast, node: NodeId);
}

impl Ast {
    /// Dispatches `visitor` on `node`.
    pub fn accept(&self, node: NodeId, visitor: &mut dyn Visitor) {
        visitor.visit(self, node);
    }

    /// Dispatches `visitor` on each child of `node`, in order.
    pub fn children_accept(&self, node: NodeId, visitor: &mut dyn Visitor) {
        for child in self.children(node) {
            self.accept(*child, visitor);
        }
    }

    /// Renders the subtree rooted at `root` as an indented dump, one node
    /// per line: `<2*depth spaces><single node string> [<location>]`.
    ///
    /// Descent stops at `max_depth`; a skipped subtree is marked with an
    /// explicit line instead of being silently dropped.
    #[must_use]
    pub fn debug_string(&self, root: NodeId, max_depth: usize) -> String {
        let mut dumper = Dumper {
            ast: self,
            separator: "\n",
            max_depth,
            depth: 0,
            out: String::new(),
        };
        dumper.dump(root);
        dumper.out
    }

    /// Collects all descendants of `root` (including `root` itself) whose
    /// kind is in `kinds`, in BFS order, into `found`.
    ///
    /// `found` is cleared on entry, so repeated calls on the same
    /// destination are safe. When `continue_traversal` is false the search
    /// does not descend below a matched node.
    pub fn descendants_with_kinds(
        &self,
        root: NodeId,
        kinds: &HashSet<NodeKind>,
        continue_traversal: bool,
        found: &mut Vec<NodeId>,
    ) {
        found.clear();

        // Explicit queue, not the call stack: this must survive trees of
        // adversarial depth.
        let mut queue: VecDeque<NodeId> = VecDeque::new();
        queue.push_back(root);

        while let Some(node) = queue.pop_front() {
            if kinds.contains(&self.kind(node)) {
                found.push(node);
                if !continue_traversal {
                    continue;
                }
            }
            queue.extend(self.children(node).iter().copied());
        }
    }
}

/// Depth-bounded recursive tree dumper.
///
/// All dump state lives here so the recursive step carries a minimal
/// frame. The recursive step must stay print-then-recurse only; string
/// assembly belongs in [`Dumper::dump_node`].
struct Dumper<'a> {
    ast: &'a Ast,
    separator: &'a str,
    max_depth: usize,
    depth: usize,
    out: String,
}

impl Dumper<'_> {
    /// Emits one node line; returns false once the depth limit is hit.
    ///
    /// Not inlined, to keep the recursive caller's frame small.
    #[inline(never)]
    fn dump_node(&mut self, node: NodeId) -> bool {
        for _ in 0..self.depth * 2 {
            self.out.push(' ');
        }
        self.out.push_str(&self.ast.single_node_debug_string(node));
        self.out.push_str(" [");
        self.out.push_str(&self.ast.location_string(node));
        self.out.push(']');
        self.out.push_str(self.separator);
        if self.depth >= self.max_depth {
            for _ in 0..self.depth * 2 {
                self.out.push(' ');
            }
            self.out.push_str("  Subtree skipped (reached max depth ");
            self.out.push_str(&self.max_depth.to_string());
            self.out.push(')');
            self.out.push_str(self.separator);
            return false;
        }
        true
    }

    fn dump(&mut self, node: NodeId) {
        if !self.dump_node(node) {
            return;
        }
        self.depth += 1;
        let children = self.ast.children(node);
        for child in children {
            self.dump(*child);
        }
        self.depth -= 1;
    }
}
