//! Test utilities for crates consuming the semantic model.
//!
//! Gated behind the `testing` feature so downstream crates can build
//! resolver doubles in their integration tests without hand-rolling one.

use std::collections::HashMap;

use crate::model::SemanticModel;
use crate::symbol::Symbol;
use crate::tree::NodeId;
use crate::types::TypeDescriptor;

/// A map-backed [`SemanticModel`] for tests.
///
/// Ids with no registered answer resolve to `None`, which is exactly how a
/// front-end reports an unresolvable node, so "missing symbol" paths can be
/// exercised by simply not registering one.
#[derive(Debug, Default)]
pub struct MapModel {
    symbols: HashMap<NodeId, Symbol>,
    expression_types: HashMap<NodeId, TypeDescriptor>,
}

impl MapModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the declared symbol for a node.
    pub fn symbol(mut self, node: NodeId, symbol: Symbol) -> Self {
        self.symbols.insert(node, symbol);
        self
    }

    /// Register the resolved type for an expression node.
    pub fn expr_type(mut self, node: NodeId, ty: TypeDescriptor) -> Self {
        self.expression_types.insert(node, ty);
        self
    }
}

impl SemanticModel for MapModel {
    fn declared_symbol(&self, node: NodeId) -> Option<Symbol> {
        self.symbols.get(&node).cloned()
    }

    fn expression_type(&self, node: NodeId) -> Option<TypeDescriptor> {
        self.expression_types.get(&node).cloned()
    }
}
