//! Printable values for score and diagnostic output.

use std::fmt;

/// A value rendered as a literal on standard output.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A string value, printed quoted.
    String(String),
    /// A numeric value.
    Number(f64),
    /// A list of values.
    Array(Vec<Value>),
    /// A missing value, printed as the VCF missing marker.
    Missing,
}

/// Format a float the way a float literal reads.
///
/// Integral values keep a trailing `.0` and everything else uses the
/// shortest round-trip form. Decimal exponents below -4 or from 16 up switch
/// to exponent form with a sign and at least two exponent digits (`1e-05`,
/// `1.5e+16`).
pub fn format_float(n: f64) -> String {
    if n.is_nan() {
        return "nan".to_string();
    }
    if n.is_infinite() {
        let inf = if n > 0.0 { "inf" } else { "-inf" };
        return inf.to_string();
    }

    let scientific = format!("{:e}", n);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    } else if n.fract() == 0.0 {
        format!("{:.1}", n)
    } else {
        format!("{}", n)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Number(n) => f.write_str(&format_float(*n)),
            Value::Array(arr) => {
                write!(f, "[")?;
                for (i, v) in arr.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, "]")
            }
            Value::Missing => write!(f, "."),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Array(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Missing,
        }
    }
}
