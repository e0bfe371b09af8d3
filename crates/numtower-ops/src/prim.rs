//! Elementary operations
//!
//! Each operation is a unit struct implementing [`UnaryOp`] or [`BinaryOp`]
//! for the branches it supports, plus a free function that runs it through a
//! default [`Dispatcher`].

use crate::dispatch::unit_values;
use crate::error::{MathError, MathResult};
use crate::op::{BinaryOp, BranchResult, Dispatcher, UnaryOp};
use num_complex::Complex64;
use numtower_types::unit::{BaseDimension, Dimensions, Unit};
use numtower_types::Value;
use rust_decimal::Decimal;

const ANGLE: Dimensions = Dimensions::of(BaseDimension::Angle);

fn precise_result(result: Option<Decimal>, what: &str) -> BranchResult {
    Some(result.map(Value::Precise).ok_or_else(|| MathError::domain(format!("Precise {} overflows", what))))
}

/// Value of an angle unit handed to a trigonometric function
fn angle_value(name: &str, u: &Unit) -> MathResult<f64> {
    if !u.has_base(ANGLE) {
        return Err(MathError::domain(format!("unit in function {} is no angle", name)));
    }
    u.value().ok_or_else(|| MathError::domain(format!("unit in function {} has an undefined value", name)))
}

// ============ Binary ============

pub struct Add;

impl BinaryOp for Add {
    fn name(&self) -> &'static str { "add" }
    fn scalar(&self, a: f64, b: f64) -> BranchResult { Some(Ok(Value::number(a + b))) }
    fn complex(&self, a: Complex64, b: Complex64) -> BranchResult { Some(Ok(Value::Complex(a + b))) }
    fn units(&self, a: &Unit, b: &Unit) -> BranchResult {
        Some(unit_values(a, b, "+").map(|(l, r)| Value::Unit(a.with_value(l + r))))
    }
    fn precise(&self, a: Decimal, b: Decimal) -> BranchResult { precise_result(a.checked_add(b), "addition") }
    fn text(&self, a: &str, b: &str) -> BranchResult {
        let mut s = String::with_capacity(a.len() + b.len());
        s.push_str(a);
        s.push_str(b);
        Some(Ok(Value::Text(s)))
    }
}

pub struct Subtract;

impl BinaryOp for Subtract {
    fn name(&self) -> &'static str { "subtract" }
    fn scalar(&self, a: f64, b: f64) -> BranchResult { Some(Ok(Value::number(a - b))) }
    fn complex(&self, a: Complex64, b: Complex64) -> BranchResult { Some(Ok(Value::Complex(a - b))) }
    fn units(&self, a: &Unit, b: &Unit) -> BranchResult {
        Some(unit_values(a, b, "-").map(|(l, r)| Value::Unit(a.with_value(l - r))))
    }
    fn precise(&self, a: Decimal, b: Decimal) -> BranchResult { precise_result(a.checked_sub(b), "subtraction") }
}

/// Element-wise multiplication
pub struct EMultiply;

impl BinaryOp for EMultiply {
    fn name(&self) -> &'static str { "emultiply" }
    fn scalar(&self, a: f64, b: f64) -> BranchResult { Some(Ok(Value::number(a * b))) }
    fn complex(&self, a: Complex64, b: Complex64) -> BranchResult { Some(Ok(Value::Complex(a * b))) }
    fn precise(&self, a: Decimal, b: Decimal) -> BranchResult { precise_result(a.checked_mul(b), "multiplication") }
}

/// Element-wise division
pub struct EDivide;

impl BinaryOp for EDivide {
    fn name(&self) -> &'static str { "edivide" }
    fn scalar(&self, a: f64, b: f64) -> BranchResult { Some(Ok(Value::number(a / b))) }
    fn complex(&self, a: Complex64, b: Complex64) -> BranchResult { Some(Ok(Value::Complex(a / b))) }
    fn precise(&self, a: Decimal, b: Decimal) -> BranchResult {
        if b.is_zero() {
            return Some(Err(MathError::domain("division by zero")));
        }
        precise_result(a.checked_div(b), "division")
    }
}

// ============ Unary ============

pub struct UnaryMinus;

impl UnaryOp for UnaryMinus {
    fn name(&self) -> &'static str { "unaryMinus" }
    fn scalar(&self, x: f64) -> BranchResult { Some(Ok(Value::number(-x))) }
    fn complex(&self, z: Complex64) -> BranchResult { Some(Ok(Value::Complex(-z))) }
    fn unit(&self, u: &Unit) -> BranchResult {
        Some(match u.value() {
            Some(v) => Ok(Value::Unit(u.with_value(-v))),
            None => Err(MathError::domain("unit in function unaryMinus has an undefined value")),
        })
    }
    fn precise(&self, d: Decimal) -> BranchResult { Some(Ok(Value::Precise(-d))) }
}

pub struct Abs;

impl UnaryOp for Abs {
    fn name(&self) -> &'static str { "abs" }
    fn scalar(&self, x: f64) -> BranchResult { Some(Ok(Value::number(x.abs()))) }
    fn complex(&self, z: Complex64) -> BranchResult { Some(Ok(Value::number(z.norm()))) }
    fn precise(&self, d: Decimal) -> BranchResult { Some(Ok(Value::Precise(d.abs()))) }
}

pub struct Sin;

impl UnaryOp for Sin {
    fn name(&self) -> &'static str { "sin" }
    fn scalar(&self, x: f64) -> BranchResult { Some(Ok(Value::number(x.sin()))) }
    fn complex(&self, z: Complex64) -> BranchResult { Some(Ok(Value::Complex(z.sin()))) }
    fn unit(&self, u: &Unit) -> BranchResult { Some(angle_value(self.name(), u).map(|a| Value::number(a.sin()))) }
}

pub struct Cos;

impl UnaryOp for Cos {
    fn name(&self) -> &'static str { "cos" }
    fn scalar(&self, x: f64) -> BranchResult { Some(Ok(Value::number(x.cos()))) }
    fn complex(&self, z: Complex64) -> BranchResult { Some(Ok(Value::Complex(z.cos()))) }
    fn unit(&self, u: &Unit) -> BranchResult { Some(angle_value(self.name(), u).map(|a| Value::number(a.cos()))) }
}

pub struct Tan;

impl UnaryOp for Tan {
    fn name(&self) -> &'static str { "tan" }
    fn scalar(&self, x: f64) -> BranchResult { Some(Ok(Value::number(x.tan()))) }
    fn complex(&self, z: Complex64) -> BranchResult { Some(Ok(Value::Complex(complex_tan(z)))) }
    fn unit(&self, u: &Unit) -> BranchResult { Some(angle_value(self.name(), u).map(|a| Value::number(a.tan()))) }
}

/// tan(z) written with decaying exponentials so large |im| stays finite
fn complex_tan(z: Complex64) -> Complex64 {
    if z.im < 0.0 {
        return complex_tan(z.conj()).conj();
    }
    let e2 = (-2.0 * z.im).exp();
    let e4 = e2 * e2;
    let den = e4 + 2.0 * e2 * (2.0 * z.re).cos() + 1.0;
    Complex64::new(2.0 * e2 * (2.0 * z.re).sin() / den, (1.0 - e4) / den)
}

// ============ Free functions ============

pub fn add(x: &Value, y: &Value) -> MathResult<Value> { Dispatcher::default().apply_binary(&Add, x, y) }
pub fn subtract(x: &Value, y: &Value) -> MathResult<Value> { Dispatcher::default().apply_binary(&Subtract, x, y) }
pub fn emultiply(x: &Value, y: &Value) -> MathResult<Value> { Dispatcher::default().apply_binary(&EMultiply, x, y) }
pub fn edivide(x: &Value, y: &Value) -> MathResult<Value> { Dispatcher::default().apply_binary(&EDivide, x, y) }
pub fn unary_minus(x: &Value) -> MathResult<Value> { Dispatcher::default().apply_unary(&UnaryMinus, x) }
pub fn abs(x: &Value) -> MathResult<Value> { Dispatcher::default().apply_unary(&Abs, x) }
pub fn sin(x: &Value) -> MathResult<Value> { Dispatcher::default().apply_unary(&Sin, x) }
pub fn cos(x: &Value) -> MathResult<Value> { Dispatcher::default().apply_unary(&Cos, x) }
pub fn tan(x: &Value) -> MathResult<Value> { Dispatcher::default().apply_unary(&Tan, x) }
