use serde::{Deserialize, Serialize};
use std::fmt;

/// Runtime value representation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// 64-bit integer value
    Int(i64),
    /// 64-bit floating-point value
    Float(f64),
}

impl Value {
    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
        }
    }

    /// Converts value to a 64-bit floating-point number
    pub fn as_float(&self) -> f64 {
        match self {
            Value::Int(n) => *n as f64,
            Value::Float(f) => *f,
        }
    }

    /// Returns true for integer zero and for `0.0`/`-0.0`
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Int(n) => *n == 0,
            Value::Float(f) => *f == 0.0,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(fl) => f.write_str(&format_float(*fl)),
        }
    }
}

/// Shortest round-trip rendering of a float
///
/// Whole numbers keep a `.0` suffix. Magnitudes of 1e16 and above or below
/// 1e-4 switch to exponent form with a signed two-digit exponent
/// (`1e+16`, `3.3333333333333335e-07`).
fn format_float(fl: f64) -> String {
    if fl.is_nan() {
        return "nan".to_string();
    }
    if fl.is_infinite() {
        return if fl > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let sign = if fl.is_sign_negative() { "-" } else { "" };
    if fl == 0.0 {
        return format!("{}0.0", sign);
    }

    // `{:e}` yields the shortest digits that round-trip, e.g. `3.5e-7`
    let scientific = format!("{:e}", fl.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return fl.to_string();
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    // Position of the decimal point relative to the first digit
    let point = exponent + 1;

    if !(-3..=16).contains(&point) {
        let (head, tail) = digits.split_at(1);
        let mantissa = if tail.is_empty() {
            head.to_string()
        } else {
            format!("{}.{}", head, tail)
        };
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}{}e{}{:02}", sign, mantissa, exp_sign, exponent.abs());
    }

    if point <= 0 {
        let zeros = "0".repeat(point.unsigned_abs() as usize);
        return format!("{}0.{}{}", sign, zeros, digits);
    }

    let point = point as usize;
    if point >= digits.len() {
        let zeros = "0".repeat(point - digits.len());
        format!("{}{}{}.0", sign, digits, zeros)
    } else {
        let (whole, fraction) = digits.split_at(point);
        format!("{}{}.{}", sign, whole, fraction)
    }
}
