//! The AST node core: arena storage, tree linkage, and node accessors.
//!
//! All nodes of one parse tree live in a single [`Ast`] arena and are
//! addressed by [`NodeId`] indices. Child links are owning in the sense
//! that the arena is the only owner of node storage; the parent link is a
//! plain back-reference index used for upward navigation only. The parser
//! builds the tree bottom-up through [`Ast::add_node`] / [`Ast::add_child`]
//! / [`Ast::add_children`]; after construction the tree shape is frozen and
//! every consumer treats it as read-only.

use crate::kind::NodeKind;
use crate::span::Span;
use crate::variant::NodeVariant;

/// Index of a node within its [`Ast`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Returns the underlying arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single node: payload, source span, and tree linkage.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    variant: NodeVariant,
    span: Span,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// An abstract syntax tree: the arena owning every node.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Ast {
    nodes: Vec<Node>,
}

impl Ast {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of nodes in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the arena holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Creates a new unattached node and returns its id.
    ///
    /// The span is fixed at construction; only the attach operations mutate
    /// a node afterwards, and only its linkage.
    pub fn add_node(&mut self, variant: NodeVariant, span: Span) -> NodeId {
        let id = NodeId(u32::try_from(self.nodes.len()).expect("arena capacity exceeded"));
        self.nodes.push(Node {
            variant,
            span,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Appends `child` to `parent`'s children and sets the back-reference.
    ///
    /// The child must not already be attached; attaching a node twice would
    /// break the single-owner tree shape and is a programming error.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) {
        debug_assert!(
            self.nodes[child.index()].parent.is_none(),
            "node {child:?} is already attached"
        );
        self.nodes[parent.index()].children.push(child);
        self.nodes[child.index()].parent = Some(parent);
    }

    /// Appends each present child in order, silently skipping `None`
    /// placeholders.
    pub fn add_children<I>(&mut self, parent: NodeId, children: I)
    where
        I: IntoIterator<Item = Option<NodeId>>,
    {
        for child in children.into_iter().flatten() {
            self.add_child(parent, child);
        }
    }

    /// Returns the kind of a node (derived from its payload).
    #[must_use]
    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.nodes[id.index()].variant.kind()
    }

    /// Returns the payload of a node.
    #[must_use]
    pub fn variant(&self, id: NodeId) -> &NodeVariant {
        &self.nodes[id.index()].variant
    }

    /// Returns the source span of a node.
    #[must_use]
    pub fn span(&self, id: NodeId) -> Span {
        self.nodes[id.index()].span
    }

    /// Returns the parent of a node, if attached.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.index()].parent
    }

    /// Returns the children of a node in attachment (source) order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.index()].children
    }

    /// Returns the `i`-th child of a node, if present.
    #[must_use]
    pub fn child(&self, id: NodeId, i: usize) -> Option<NodeId> {
        self.nodes[id.index()].children.get(i).copied()
    }

    /// Returns the display name of a node's kind.
    #[must_use]
    pub fn node_kind_string(&self, id: NodeId) -> &'static str {
        self.kind(id).name()
    }

    /// Renders a node's source span for diagnostics.
    #[must_use]
    pub fn location_string(&self, id: NodeId) -> String {
        self.span(id).to_string()
    }

    /// Returns the identifier text if the node is an identifier.
    #[must_use]
    pub fn identifier_name(&self, id: NodeId) -> Option<&str> {
        match self.variant(id) {
            NodeVariant::Identifier { name } => Some(name),
            _ => None,
        }
    }

    /// Returns the aliased name of an Alias or IntoAlias node.
    ///
    /// The alias identifier is the node's only child.
    #[must_use]
    pub fn alias_name(&self, id: NodeId) -> Option<&str> {
        match self.kind(id) {
            NodeKind::Alias | NodeKind::IntoAlias => {
                self.child(id, 0).and_then(|name| self.identifier_name(name))
            }
            _ => None,
        }
    }

    /// Returns true if an integer literal was written in hex form.
    #[must_use]
    pub fn int_literal_is_hex(&self, id: NodeId) -> bool {
        match self.variant(id) {
            NodeVariant::IntLiteral { image } => {
                image.starts_with("0x") || image.starts_with("0X")
            }
            _ => false,
        }
    }
}
