//! Sequence containers
//!
//! A container is an ordered list of values tagged with its kind. Nested
//! containers carry their own kind, so a matrix is a `Matrix` container whose
//! rows are plain `Sequence` containers.

use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Distinguishes plain sequences from matrix-wrapped sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ContainerKind {
    #[default]
    Sequence,
    Matrix,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container {
    kind: ContainerKind,
    items: Vec<Value>,
}

impl Container {
    pub fn new(kind: ContainerKind, items: Vec<Value>) -> Self {
        Container { kind, items }
    }

    pub fn sequence(items: Vec<Value>) -> Self {
        Container::new(ContainerKind::Sequence, items)
    }

    pub fn matrix(items: Vec<Value>) -> Self {
        Container::new(ContainerKind::Matrix, items)
    }

    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    pub fn is_matrix(&self) -> bool {
        self.kind == ContainerKind::Matrix
    }

    pub fn items(&self) -> &[Value] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Value> {
        self.items.get(idx)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    /// New container of the same kind holding `items`
    pub fn with_items(&self, items: Vec<Value>) -> Container {
        Container { kind: self.kind, items }
    }

    pub fn into_items(self) -> Vec<Value> {
        self.items
    }

    /// Nesting depth, following the first element at each level
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut current = self;
        while let Some(Value::Container(inner)) = current.items.first() {
            depth += 1;
            current = inner;
        }
        depth
    }

    /// Per-level lengths, following the first element at each level
    pub fn shape(&self) -> Vec<usize> {
        let mut shape = vec![self.len()];
        let mut current = self;
        while let Some(Value::Container(inner)) = current.items.first() {
            shape.push(inner.len());
            current = inner;
        }
        shape
    }
}

impl<'a> IntoIterator for &'a Container {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.items.iter().enumerate() {
            if i > 0 { write!(f, ", ")?; }
            write!(f, "{}", v)?;
        }
        write!(f, "]")
    }
}
