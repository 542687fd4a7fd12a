use crate::support::Support;
use std::cmp::Ordering;
use std::hash::Hash;
use std::hash::Hasher;

/// A loosely typed outcome: a number or a label.
///
/// Numeric variants compare and hash by value, so `Bool(true)`, `Int(1)`
/// and `Real(1.0)` are the same outcome and their masses merge when they
/// collide in a distribution. All numbers order before all labels; NaN is
/// the greatest number.
#[derive(Debug, Clone)]
pub enum Outcome {
    Bool(bool),
    Int(i64),
    Real(f64),
    Label(String),
}

/// numeric view of an Outcome. booleans count as 0 and 1.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Number {
    Int(i64),
    Real(f64),
}

impl Number {
    pub(crate) fn real(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Real(r) => r,
        }
    }
    fn is_zero(self) -> bool {
        match self {
            Number::Int(i) => i == 0,
            Number::Real(r) => r == 0.,
        }
    }
    /// the integer this number equals, if any.
    fn integral(self) -> Option<i64> {
        match self {
            Number::Int(i) => Some(i),
            Number::Real(r)
                if r.is_finite()
                    && r.fract() == 0.
                    && r >= i64::MIN as f64
                    && r < i64::MAX as f64 =>
            {
                Some(r as i64)
            }
            Number::Real(_) => None,
        }
    }
    fn compare(self, other: Self) -> Ordering {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a.cmp(&b),
            (Number::Int(a), Number::Real(b)) => Self::exact(a, b),
            (Number::Real(a), Number::Int(b)) => Self::exact(b, a).reverse(),
            (Number::Real(a), Number::Real(b)) => match (a.is_nan(), b.is_nan()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
            },
        }
    }
    /// orders an integer against a real without rounding the integer.
    /// [-2^63, 2^63) is exactly the range of i64, so truncation is lossless.
    fn exact(i: i64, r: f64) -> Ordering {
        if r.is_nan() || r >= i64::MAX as f64 {
            return Ordering::Less;
        }
        if r < i64::MIN as f64 {
            return Ordering::Greater;
        }
        let t = r.trunc();
        match i.cmp(&(t as i64)) {
            Ordering::Equal => t.partial_cmp(&r).unwrap_or(Ordering::Equal),
            o => o,
        }
    }
}

impl Outcome {
    pub fn label(s: impl Into<String>) -> Self {
        Self::Label(s.into())
    }
    pub(crate) fn number(&self) -> Option<Number> {
        match self {
            Self::Bool(b) => Some(Number::Int(*b as i64)),
            Self::Int(i) => Some(Number::Int(*i)),
            Self::Real(r) => Some(Number::Real(*r)),
            Self::Label(_) => None,
        }
    }
    /// the value as a float, if numeric.
    pub fn real(&self) -> Option<f64> {
        self.number().map(Number::real)
    }
    /// true for any numeric zero, including `false` and `-0.0`.
    pub fn is_zero(&self) -> bool {
        self.number().is_some_and(Number::is_zero)
    }
}

impl PartialEq for Outcome {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Outcome {}

impl Ord for Outcome {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.number(), other.number()) {
            (Some(x), Some(y)) => x.compare(y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => match (self, other) {
                (Self::Label(a), Self::Label(b)) => a.cmp(b),
                _ => Ordering::Equal,
            },
        }
    }
}
impl PartialOrd for Outcome {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Outcome {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        match self.number() {
            None => {
                2u8.hash(state);
                if let Self::Label(s) = self {
                    s.hash(state);
                }
            }
            Some(n) => match n.integral() {
                Some(i) => {
                    0u8.hash(state);
                    i.hash(state);
                }
                None => {
                    1u8.hash(state);
                    match n.real() {
                        r if r.is_nan() => f64::NAN.to_bits().hash(state),
                        r => r.to_bits().hash(state),
                    }
                }
            },
        }
    }
}

impl Support for Outcome {}

impl From<bool> for Outcome {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}
impl From<i64> for Outcome {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}
impl From<i32> for Outcome {
    fn from(i: i32) -> Self {
        Self::Int(i as i64)
    }
}
impl From<u32> for Outcome {
    fn from(i: u32) -> Self {
        Self::Int(i as i64)
    }
}
impl From<f64> for Outcome {
    fn from(r: f64) -> Self {
        Self::Real(r)
    }
}
impl From<&str> for Outcome {
    fn from(s: &str) -> Self {
        Self::Label(s.to_string())
    }
}
impl From<String> for Outcome {
    fn from(s: String) -> Self {
        Self::Label(s)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(true) => write!(f, "True"),
            Self::Bool(false) => write!(f, "False"),
            Self::Int(i) => write!(f, "{}", i),
            Self::Real(r) if r.is_finite() && r.fract() == 0. && r.abs() < 1e16 => {
                write!(f, "{:.1}", r)
            }
            Self::Real(r) => write!(f, "{}", r),
            Self::Label(s) => write!(f, "{}", s),
        }
    }
}
