//! Algebraic laws and end-to-end scenarios for the public operations

use numtower_ops::mapper::map1;
use numtower_ops::prelude::*;
use numtower_types::ser::{from_json, to_json_compact};
use pretty_assertions::assert_eq;

const REALS: [f64; 9] = [0.0, -0.0, 1.0, -1.0, 2.5, -5.0, 1e-300, -1e300, 123456.789];

fn complexes() -> Vec<Complex64> {
    let parts = [0.0, 1.0, -2.0, 3.5, -0.25];
    parts.iter().flat_map(|&re| parts.iter().map(move |&im| Complex64::new(re, im))).collect()
}

fn scalar_and_complex_values() -> Vec<Value> {
    let mut out: Vec<Value> = REALS.iter().copied().map(Value::number).collect();
    out.push(Value::bool(true));
    out.push(Value::bool(false));
    out.extend(complexes().into_iter().map(Value::Complex));
    out
}

fn assert_approx(actual: f64, expected: f64, eps: f64, msg: &str) {
    assert!((actual - expected).abs() <= eps,
        "{}: expected {}, got {} (diff {})", msg, expected, actual, (actual - expected).abs());
}

/// Lengths of every container, level by level
fn level_lengths(v: &Value) -> Vec<Vec<usize>> {
    let mut levels = Vec::new();
    let mut frontier = vec![v];
    while !frontier.is_empty() {
        let containers: Vec<_> = frontier.iter().filter_map(|v| v.as_container()).collect();
        if containers.is_empty() { break; }
        levels.push(containers.iter().map(|c| c.len()).collect());
        frontier = containers.iter().flat_map(|c| c.iter()).collect();
    }
    levels
}

// ============ abs ============

#[test]
fn test_abs_is_magnitude_on_reals() {
    for x in REALS {
        assert_eq!(abs(&Value::number(x)).unwrap(), Value::number(x.abs()), "abs({})", x);
    }
}

#[test]
fn test_abs_idempotent_on_reals() {
    for x in REALS {
        let once = abs(&Value::number(x)).unwrap();
        assert_eq!(abs(&once).unwrap(), once, "abs(abs({}))", x);
    }
}

#[test]
fn test_abs_complex_is_modulus() {
    for z in complexes() {
        let out = abs(&Value::Complex(z)).unwrap().as_number().unwrap();
        assert_approx(out, (z.re * z.re + z.im * z.im).sqrt(), 1e-12, &format!("abs({})", z));
    }
}

// ============ add ============

#[test]
fn test_add_commutative_on_numeric_pairs() {
    let values = scalar_and_complex_values();
    for x in &values {
        for y in &values {
            assert_eq!(add(x, y).unwrap(), add(y, x).unwrap(), "add({}, {})", x, y);
        }
    }
}

#[test]
fn test_add_elementwise_law() {
    let x = Value::sequence(vec![Value::number(1.0), Value::complex(0.0, 2.0), Value::bool(true), Value::numbers(&[1.0, 2.0])]);
    let y = Value::sequence(vec![Value::complex(1.0, 1.0), Value::number(-3.0), Value::number(0.5), Value::number(10.0)]);
    let sum = add(&x, &y).unwrap();
    let (xs, ys, ss) = (x.as_container().unwrap(), y.as_container().unwrap(), sum.as_container().unwrap());
    assert_eq!(ss.len(), xs.len());
    for i in 0..xs.len() {
        assert_eq!(ss.get(i), Some(&add(&xs.items()[i], &ys.items()[i]).unwrap()), "index {}", i);
    }
}

#[test]
fn test_add_broadcast_law() {
    let x = Value::sequence(vec![Value::number(1.0), Value::complex(1.0, -1.0), Value::numbers(&[2.0, 3.0])]);
    let s = Value::number(4.0);
    let out = add(&x, &s).unwrap();
    for (i, e) in x.as_container().unwrap().iter().enumerate() {
        assert_eq!(out.as_container().unwrap().get(i), Some(&add(e, &s).unwrap()), "index {}", i);
    }
}

#[test]
fn test_add_unequal_lengths() {
    for (l, r) in [(0usize, 1usize), (2, 3), (3, 2)] {
        let x = Value::numbers(&vec![1.0; l]);
        let y = Value::numbers(&vec![1.0; r]);
        assert_eq!(add(&x, &y).unwrap_err(), MathError::ShapeMismatch { left: l, right: r });
    }
}

// ============ map1 ============

#[test]
fn test_map1_preserves_nesting() {
    let ragged = Value::sequence(vec![
        Value::numbers(&[1.0, 2.0, 3.0]),
        Value::sequence(vec![Value::numbers(&[4.0]), Value::sequence(vec![])]),
        Value::number(5.0),
    ]);
    let out = map1(&ragged, abs).unwrap();
    assert_eq!(level_lengths(&out), level_lengths(&ragged));
    assert_eq!(level_lengths(&out), vec![vec![3], vec![3, 2], vec![1, 0]]);
}

#[test]
fn test_operations_preserve_matrix_kind() {
    let m = Value::matrix(vec![vec![Value::number(1.0), Value::number(-2.0)], vec![Value::number(3.0), Value::number(-4.0)]]);
    for out in [abs(&m), tan(&m), add(&m, &Value::number(1.0)), add(&Value::number(1.0), &m), unary_minus(&m)] {
        let out = out.unwrap();
        assert!(out.is_matrix());
        assert_eq!(out.as_container().unwrap().shape(), vec![2, 2]);
    }
}

// ============ tan ============

#[test]
fn test_tan_on_angle_units() {
    for a in [0.0, 0.25, -1.0, 3.0] {
        let out = tan(&Value::unit(Unit::angle(a))).unwrap();
        assert_eq!(out, Value::number(a.tan()));
    }
}

#[test]
fn test_tan_on_other_units() {
    for u in [Unit::length(1.0), Unit::mass(1.0), Unit::time(1.0), Unit::new(Some(1.0), Dimensions::DIMENSIONLESS, "")] {
        let err = tan(&Value::unit(u)).unwrap_err();
        assert_eq!(err.to_string(), "unit in function tan is no angle");
    }
}

// ============ scenarios ============

#[test]
fn test_scenarios_through_registry() {
    let math = Math::new();
    let call = |name: &str, args: &[Value]| math.call(name, args);

    assert_eq!(call("add", &[Value::number(3.0), Value::number(4.0)]).unwrap(), Value::number(7.0));
    assert_eq!(call("add", &[Value::complex(1.0, 2.0), Value::complex(3.0, 4.0)]).unwrap(), Value::complex(4.0, 6.0));
    assert_eq!(call("add", &[Value::numbers(&[1.0, 2.0, 3.0]), Value::numbers(&[4.0, 5.0, 6.0])]).unwrap(), Value::numbers(&[5.0, 7.0, 9.0]));
    assert_eq!(call("add", &[Value::numbers(&[1.0, 2.0]), Value::number(5.0)]).unwrap(), Value::numbers(&[6.0, 7.0]));
    assert_eq!(call("abs", &[Value::number(-5.0)]).unwrap(), Value::number(5.0));
    assert_eq!(call("abs", &[Value::complex(3.0, 4.0)]).unwrap(), Value::number(5.0));
    assert_eq!(
        call("add", &[Value::numbers(&[1.0, 2.0]), Value::numbers(&[1.0, 2.0, 3.0])]).unwrap_err(),
        MathError::ShapeMismatch { left: 2, right: 3 }
    );
    assert_eq!(call("abs", &[Value::text("x")]).unwrap_err(), MathError::UnsupportedType { operation: "abs", operands: vec!["string"] });
    assert_eq!(call("add", &[Value::number(1.0)]).unwrap_err(), MathError::Arity { operation: "add", actual: 1, expected: 2 });
}

#[test]
fn test_error_messages() {
    let math = Math::new();
    let msg = |name: &str, args: &[Value]| math.call(name, args).unwrap_err().to_string();

    assert_eq!(msg("add", &[Value::number(1.0)]), "Wrong number of arguments in function add (1 provided, 2 expected)");
    assert_eq!(msg("abs", &[Value::text("x")]), "Function abs(string) not supported");
    assert_eq!(msg("add", &[Value::null(), Value::complex(1.0, 0.0)]), "Function add(null, Complex) not supported");
    assert_eq!(msg("add", &[Value::numbers(&[1.0, 2.0]), Value::numbers(&[1.0, 2.0, 3.0])]), "Dimension mismatch (2 != 3)");
    assert_eq!(msg("add", &[Value::unit(Unit::length(1.0)), Value::unit(Unit::time(1.0))]), "units do not match");
    assert_eq!(msg("nope", &[]), "Unknown operation: nope");
}

#[test]
fn test_config_from_json_drives_registry() {
    let config = MathConfig::from_json(r#"{"max_depth": 2, "precise_scale": 3}"#).unwrap();
    let math = Math::with_config(config);
    let third = math.edivide(&Value::precise(Decimal::ONE), &Value::number(3.0)).unwrap();
    assert_eq!(third.to_string(), "0.333");
    let deep = Value::sequence(vec![Value::sequence(vec![Value::numbers(&[1.0])])]);
    assert_eq!(math.abs(&deep).unwrap_err(), MathError::DepthExceeded { limit: 2 });
}

#[test]
fn test_inputs_are_not_modified() {
    let math = Math::new();
    let x = Value::sequence(vec![Value::unit(Unit::length(1.0).with_fixed_prefix(true)), Value::numbers(&[1.0])]);
    let before = x.clone();
    let _ = math.add(&x, &x);
    let _ = math.unary_minus(&x);
    assert_eq!(x, before);
}

#[test]
fn test_division_by_zero_survives_json() {
    let quotients = edivide(&Value::numbers(&[1.0, -1.0, 0.0]), &Value::number(0.0)).unwrap();
    let json = to_json_compact(&quotients).unwrap();
    assert_eq!(from_json(&json).unwrap(), quotients);
    assert_eq!(quotients.to_string(), "[Infinity, -Infinity, NaN]");
}
