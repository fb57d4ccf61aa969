//! Node-type registry: maps node-type ids to handler functions.
//!
//! The registry is assembled once, before the executor starts serving, and
//! is read-only afterwards. There is no way to add or remove a handler from
//! a built registry.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use atomic_executor_model::{Inputs, Outputs};

use crate::error::{ExecutorError, HandlerError};
use crate::handlers;

/// A node handler: inputs in, outputs or a handler error out.
pub type HandlerFn = fn(&Inputs) -> Result<Outputs, HandlerError>;

/// Node types that ship with the executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    AtomicEcho,
}

impl NodeType {
    pub const ALL: &'static [NodeType] = &[NodeType::AtomicEcho];

    /// Wire identifier, as it appears in `node_type_ref.node_type_id`.
    pub fn id(self) -> &'static str {
        match self {
            NodeType::AtomicEcho => "atomic.echo",
        }
    }

    pub fn handler(self) -> HandlerFn {
        match self {
            NodeType::AtomicEcho => handlers::echo,
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for NodeType {
    type Err = ExecutorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeType::ALL
            .iter()
            .copied()
            .find(|t| t.id() == s)
            .ok_or_else(|| ExecutorError::UnknownNodeType {
                node_type_id: s.to_string(),
            })
    }
}

/// Immutable dispatch table from node-type id to handler.
#[derive(Clone)]
pub struct HandlerRegistry {
    handlers: BTreeMap<String, HandlerFn>,
}

impl HandlerRegistry {
    /// Registry holding every [`NodeType`] in [`NodeType::ALL`].
    pub fn builtin() -> Self {
        Self::from_entries(NodeType::ALL.iter().map(|t| (t.id(), t.handler())))
    }

    /// Build a registry from explicit `(id, handler)` pairs. A later entry
    /// with the same id replaces an earlier one.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, HandlerFn)>,
        S: Into<String>,
    {
        HandlerRegistry {
            handlers: entries
                .into_iter()
                .map(|(id, handler)| (id.into(), handler))
                .collect(),
        }
    }

    /// Resolve a node-type id to its handler.
    pub fn lookup(&self, node_type_id: &str) -> Result<HandlerFn, ExecutorError> {
        self.handlers
            .get(node_type_id)
            .copied()
            .ok_or_else(|| ExecutorError::UnknownNodeType {
                node_type_id: node_type_id.to_string(),
            })
    }

    pub fn contains(&self, node_type_id: &str) -> bool {
        self.handlers.contains_key(node_type_id)
    }

    /// Registered ids in sorted order.
    pub fn node_type_ids(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("node_types", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}
