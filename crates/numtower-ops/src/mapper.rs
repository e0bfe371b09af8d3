//! Element-wise mapping over nested containers
//!
//! Both primitives build new containers bottom-up and keep the nesting shape
//! and the kind of every container level they pass through. Input values are
//! only read.

use crate::config::DEFAULT_MAX_DEPTH;
use crate::error::{MathError, MathResult};
use numtower_types::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mapper {
    max_depth: usize,
}

impl Default for Mapper {
    fn default() -> Self { Mapper { max_depth: DEFAULT_MAX_DEPTH } }
}

impl Mapper {
    pub fn new(max_depth: usize) -> Self { Mapper { max_depth } }

    pub fn max_depth(&self) -> usize { self.max_depth }

    /// Apply `f` to every non-container leaf of `x`
    pub fn map1<F>(&self, x: &Value, mut f: F) -> MathResult<Value>
    where
        F: FnMut(&Value) -> MathResult<Value>,
    {
        self.map1_at(x, &mut f, 0)
    }

    /// Apply `f` pairwise, broadcasting a non-container against a container
    pub fn map2<F>(&self, x: &Value, y: &Value, mut f: F) -> MathResult<Value>
    where
        F: FnMut(&Value, &Value) -> MathResult<Value>,
    {
        self.map2_at(x, y, &mut f, 0)
    }

    /// Fail with `DepthExceeded` when `x` nests containers deeper than the
    /// limit. Walks with an explicit stack, so any depth is safe to check.
    pub fn check_depth(&self, x: &Value) -> MathResult<()> {
        let mut pending = vec![(x, 0usize)];
        while let Some((v, depth)) = pending.pop() {
            if let Value::Container(c) = v {
                let depth = self.enter(depth)?;
                pending.extend(c.iter().map(|e| (e, depth)));
            }
        }
        Ok(())
    }

    fn enter(&self, depth: usize) -> MathResult<usize> {
        if depth >= self.max_depth {
            return Err(MathError::DepthExceeded { limit: self.max_depth });
        }
        Ok(depth + 1)
    }

    fn map1_at<F>(&self, x: &Value, f: &mut F, depth: usize) -> MathResult<Value>
    where
        F: FnMut(&Value) -> MathResult<Value>,
    {
        match x {
            Value::Container(c) => {
                let depth = self.enter(depth)?;
                let items = c.iter().map(|e| self.map1_at(e, f, depth)).collect::<MathResult<Vec<_>>>()?;
                Ok(Value::Container(c.with_items(items)))
            }
            _ => f(x),
        }
    }

    fn map2_at<F>(&self, x: &Value, y: &Value, f: &mut F, depth: usize) -> MathResult<Value>
    where
        F: FnMut(&Value, &Value) -> MathResult<Value>,
    {
        match (x, y) {
            (Value::Container(a), Value::Container(b)) => {
                if a.len() != b.len() {
                    return Err(MathError::ShapeMismatch { left: a.len(), right: b.len() });
                }
                let depth = self.enter(depth)?;
                let items = a.iter().zip(b.iter())
                    .map(|(l, r)| self.map2_at(l, r, f, depth))
                    .collect::<MathResult<Vec<_>>>()?;
                Ok(Value::Container(a.with_items(items)))
            }
            (Value::Container(a), _) => {
                let depth = self.enter(depth)?;
                let items = a.iter().map(|l| self.map2_at(l, y, f, depth)).collect::<MathResult<Vec<_>>>()?;
                Ok(Value::Container(a.with_items(items)))
            }
            (_, Value::Container(b)) => {
                let depth = self.enter(depth)?;
                let items = b.iter().map(|r| self.map2_at(x, r, f, depth)).collect::<MathResult<Vec<_>>>()?;
                Ok(Value::Container(b.with_items(items)))
            }
            _ => f(x, y),
        }
    }
}

/// [`Mapper::map1`] with the default depth limit
pub fn map1<F>(x: &Value, f: F) -> MathResult<Value>
where
    F: FnMut(&Value) -> MathResult<Value>,
{
    Mapper::default().map1(x, f)
}

/// [`Mapper::map2`] with the default depth limit
pub fn map2<F>(x: &Value, y: &Value, f: F) -> MathResult<Value>
where
    F: FnMut(&Value, &Value) -> MathResult<Value>,
{
    Mapper::default().map2(x, y, f)
}
