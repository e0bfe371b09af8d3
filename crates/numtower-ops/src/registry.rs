//! Operation registry
//!
//! [`Math`] owns a table from public operation names to their implementations
//! and checks argument counts before handing the operands to the dispatcher.
//! The table is built once at construction; nothing is global.

use crate::config::MathConfig;
use crate::error::{MathError, MathResult};
use crate::op::{BinaryOp, Dispatcher, UnaryOp};
use crate::prim::{Abs, Add, Cos, EDivide, EMultiply, Sin, Subtract, Tan, UnaryMinus};
use numtower_types::Value;
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

#[derive(Clone, Copy)]
enum Entry {
    Unary(&'static (dyn UnaryOp + Sync)),
    Binary(&'static (dyn BinaryOp + Sync)),
}

impl Entry {
    fn name(&self) -> &'static str {
        match self {
            Entry::Unary(op) => op.name(),
            Entry::Binary(op) => op.name(),
        }
    }

    fn arity(&self) -> usize {
        match self {
            Entry::Unary(_) => 1,
            Entry::Binary(_) => 2,
        }
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name(), self.arity())
    }
}

fn unary_arg<'a>(operation: &'static str, args: &'a [Value]) -> MathResult<&'a Value> {
    match args {
        [x] => Ok(x),
        _ => Err(MathError::Arity { operation, actual: args.len(), expected: 1 }),
    }
}

fn binary_args<'a>(operation: &'static str, args: &'a [Value]) -> MathResult<(&'a Value, &'a Value)> {
    match args {
        [x, y] => Ok((x, y)),
        _ => Err(MathError::Arity { operation, actual: args.len(), expected: 2 }),
    }
}

/// Name-addressed entry point for every operation
#[derive(Debug, Clone)]
pub struct Math {
    dispatcher: Dispatcher,
    table: BTreeMap<&'static str, Entry>,
}

impl Default for Math {
    fn default() -> Self { Self::new() }
}

impl Math {
    pub fn new() -> Self { Self::with_config(MathConfig::default()) }

    pub fn with_config(config: MathConfig) -> Self {
        let entries = [
            Entry::Binary(&Add),
            Entry::Binary(&Subtract),
            Entry::Binary(&EMultiply),
            Entry::Binary(&EDivide),
            Entry::Unary(&UnaryMinus),
            Entry::Unary(&Abs),
            Entry::Unary(&Sin),
            Entry::Unary(&Cos),
            Entry::Unary(&Tan),
        ];
        let table = entries.into_iter().map(|e| (e.name(), e)).collect();
        Math { dispatcher: Dispatcher::new(config), table }
    }

    pub fn config(&self) -> &MathConfig { self.dispatcher.config() }

    /// Registered operation names, sorted
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.table.keys().copied()
    }

    pub fn contains(&self, name: &str) -> bool { self.table.contains_key(name) }

    pub fn arity(&self, name: &str) -> Option<usize> {
        self.table.get(name).map(Entry::arity)
    }

    /// Invoke `name` on `args`.
    ///
    /// Unknown names fail with [`MathError::UnknownOperation`] and a wrong
    /// argument count with [`MathError::Arity`], before any operand is looked at.
    pub fn call(&self, name: &str, args: &[Value]) -> MathResult<Value> {
        let entry = self.table.get(name).ok_or_else(|| MathError::UnknownOperation(name.to_string()))?;
        debug!(operation = entry.name(), args = args.len(), "call");
        match *entry {
            Entry::Unary(op) => {
                let x = unary_arg(op.name(), args)?;
                self.dispatcher.apply_unary(op, x)
            }
            Entry::Binary(op) => {
                let (x, y) = binary_args(op.name(), args)?;
                self.dispatcher.apply_binary(op, x, y)
            }
        }
    }

    pub fn add(&self, x: &Value, y: &Value) -> MathResult<Value> { self.dispatcher.apply_binary(&Add, x, y) }
    pub fn subtract(&self, x: &Value, y: &Value) -> MathResult<Value> { self.dispatcher.apply_binary(&Subtract, x, y) }
    pub fn emultiply(&self, x: &Value, y: &Value) -> MathResult<Value> { self.dispatcher.apply_binary(&EMultiply, x, y) }
    pub fn edivide(&self, x: &Value, y: &Value) -> MathResult<Value> { self.dispatcher.apply_binary(&EDivide, x, y) }
    pub fn unary_minus(&self, x: &Value) -> MathResult<Value> { self.dispatcher.apply_unary(&UnaryMinus, x) }
    pub fn abs(&self, x: &Value) -> MathResult<Value> { self.dispatcher.apply_unary(&Abs, x) }
    pub fn sin(&self, x: &Value) -> MathResult<Value> { self.dispatcher.apply_unary(&Sin, x) }
    pub fn cos(&self, x: &Value) -> MathResult<Value> { self.dispatcher.apply_unary(&Cos, x) }
    pub fn tan(&self, x: &Value) -> MathResult<Value> { self.dispatcher.apply_unary(&Tan, x) }
}
