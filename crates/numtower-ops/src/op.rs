//! Operation traits and the dispatcher that drives them
//!
//! An operation implements one method per branch it supports. Every method
//! defaults to `None`, meaning "this operation has no such branch", which the
//! dispatcher reports as an unsupported operand type. Whether a branch method
//! answers `None` must not depend on its arguments.

use crate::config::MathConfig;
use crate::dispatch::{promote_precise, resolve_binary, resolve_unary, Binary, Branch, Unary};
use crate::error::{MathError, MathResult};
use crate::mapper::Mapper;
use num_complex::Complex64;
use numtower_types::unit::Unit;
use numtower_types::Value;
use rust_decimal::Decimal;
use tracing::trace;

/// Result of one branch: `None` when the operation does not support it
pub type BranchResult = Option<MathResult<Value>>;

pub trait UnaryOp {
    fn name(&self) -> &'static str;

    fn scalar(&self, _x: f64) -> BranchResult { None }
    fn complex(&self, _z: Complex64) -> BranchResult { None }
    fn unit(&self, _u: &Unit) -> BranchResult { None }
    fn precise(&self, _d: Decimal) -> BranchResult { None }
    fn text(&self, _s: &str) -> BranchResult { None }
}

pub trait BinaryOp {
    fn name(&self) -> &'static str;

    fn scalar(&self, _a: f64, _b: f64) -> BranchResult { None }
    fn complex(&self, _a: Complex64, _b: Complex64) -> BranchResult { None }
    fn units(&self, _a: &Unit, _b: &Unit) -> BranchResult { None }
    fn precise(&self, _a: Decimal, _b: Decimal) -> BranchResult { None }
    fn text(&self, _a: &str, _b: &str) -> BranchResult { None }
}

/// Runs operations: resolve, compute the branch, or map over containers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dispatcher {
    config: MathConfig,
    mapper: Mapper,
}

impl Dispatcher {
    pub fn new(config: MathConfig) -> Self {
        Dispatcher { config, mapper: Mapper::new(config.max_depth) }
    }

    pub fn config(&self) -> &MathConfig { &self.config }

    pub fn mapper(&self) -> &Mapper { &self.mapper }

    pub fn apply_unary<O: UnaryOp + ?Sized>(&self, op: &O, x: &Value) -> MathResult<Value> {
        let operand = resolve_unary(x);
        trace!(operation = op.name(), operand = x.type_name(), "dispatch unary");
        let outcome = match operand {
            Unary::Scalar(a) => op.scalar(a),
            Unary::Complex(z) => op.complex(z),
            Unary::Unit(u) => op.unit(u),
            Unary::Precise(d) => op.precise(d),
            Unary::Text(s) => op.text(s),
            Unary::Container => return self.mapper.map1(x, |e: &Value| self.apply_unary(op, e)),
            Unary::Unsupported => None,
        };
        self.finish(op.name(), outcome, &[x])
    }

    pub fn apply_binary<O: BinaryOp + ?Sized>(&self, op: &O, x: &Value, y: &Value) -> MathResult<Value> {
        let operands = resolve_binary(x, y, &self.mapper)?;
        trace!(operation = op.name(), branch = ?operands.branch(), "dispatch binary");
        let outcome = match operands {
            Binary::Scalar(a, b) => op.scalar(a, b),
            Binary::Complex(a, b) => op.complex(a, b),
            Binary::Units(a, b) => op.units(a, b),
            Binary::Precise(a, b) => Self::precise_branch(op, a, b),
            Binary::Text(a, b) => op.text(&a, &b),
            Binary::Container => {
                return self.mapper.map2(x, y, |l: &Value, r: &Value| self.apply_binary(op, l, r));
            }
            Binary::Unsupported => None,
        };
        self.finish(op.name(), outcome, &[x, y])
    }

    /// Branch taken for `x` and `y`, without computing anything
    pub fn branch_of(&self, x: &Value, y: &Value) -> MathResult<Branch> {
        Ok(resolve_binary(x, y, &self.mapper)?.branch())
    }

    /// Promotion failures only surface for operations that have a Precise branch
    fn precise_branch<O: BinaryOp + ?Sized>(op: &O, x: &Value, y: &Value) -> BranchResult {
        match (promote_precise(x), promote_precise(y)) {
            (Ok(a), Ok(b)) => op.precise(a, b),
            (Err(e), _) | (_, Err(e)) => op.precise(Decimal::ZERO, Decimal::ONE).map(|_| Err(e)),
        }
    }

    fn finish(&self, name: &'static str, outcome: BranchResult, operands: &[&Value]) -> MathResult<Value> {
        match outcome {
            Some(result) => result.map(|v| self.round_precise(v)),
            None => Err(MathError::unsupported(name, operands)),
        }
    }

    fn round_precise(&self, v: Value) -> Value {
        match (v, self.config.precise_scale) {
            (Value::Precise(d), Some(scale)) => Value::Precise(d.round_dp(scale)),
            (v, _) => v,
        }
    }
}
