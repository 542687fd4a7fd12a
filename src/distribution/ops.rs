use super::distribution::Distribution;
use super::outcome::Number;
use super::outcome::Outcome;
use std::collections::BTreeMap;

/// The closed set of binary operations a distribution supports.
///
/// Each operation is a primitive on a pair of [`Outcome`]s; lifting it to
/// distributions is the job of [`Distribution::dispatch`]. Comparisons
/// produce boolean outcomes, so comparing distributions yields a
/// distribution over truth values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
}

impl Op {
    pub const ALL: [Op; 10] = [
        Op::Add,
        Op::Sub,
        Op::Mul,
        Op::Div,
        Op::Lt,
        Op::Le,
        Op::Gt,
        Op::Ge,
        Op::Eq,
        Op::Ne,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Op::Add => "add",
            Op::Sub => "sub",
            Op::Mul => "mul",
            Op::Div => "div",
            Op::Lt => "lt",
            Op::Le => "le",
            Op::Gt => "gt",
            Op::Ge => "ge",
            Op::Eq => "eq",
            Op::Ne => "ne",
        }
    }
    pub const fn symbol(&self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
            Op::Lt => "<",
            Op::Le => "<=",
            Op::Gt => ">",
            Op::Ge => ">=",
            Op::Eq => "==",
            Op::Ne => "!=",
        }
    }
    /// name → operation, for every operation.
    pub fn table() -> BTreeMap<&'static str, Op> {
        Self::ALL.into_iter().map(|op| (op.name(), op)).collect()
    }
    pub const fn is_comparison(&self) -> bool {
        matches!(self, Op::Lt | Op::Le | Op::Gt | Op::Ge | Op::Eq | Op::Ne)
    }

    /// Combines two outcomes. Total: operations with no meaning for the
    /// given operands (subtracting labels, say) yield `Real(NaN)`.
    pub fn apply(&self, a: &Outcome, b: &Outcome) -> Outcome {
        match self {
            Op::Lt => Outcome::Bool(a < b),
            Op::Le => Outcome::Bool(a <= b),
            Op::Gt => Outcome::Bool(a > b),
            Op::Ge => Outcome::Bool(a >= b),
            Op::Eq => Outcome::Bool(a == b),
            Op::Ne => Outcome::Bool(a != b),
            Op::Div => Self::divide(a, b),
            Op::Add | Op::Sub | Op::Mul => self.arithmetic(a, b),
        }
    }

    /// a zero divisor yields +inf regardless of the dividend.
    fn divide(a: &Outcome, b: &Outcome) -> Outcome {
        if b.is_zero() {
            return Outcome::Real(f64::INFINITY);
        }
        match (a.real(), b.real()) {
            (Some(x), Some(y)) => Outcome::Real(x / y),
            _ => Outcome::Real(f64::NAN),
        }
    }

    fn arithmetic(&self, a: &Outcome, b: &Outcome) -> Outcome {
        match (self, a, b) {
            (Op::Add, Outcome::Label(x), Outcome::Label(y)) => {
                Outcome::Label(format!("{}{}", x, y))
            }
            (Op::Mul, Outcome::Label(s), n) | (Op::Mul, n, Outcome::Label(s)) => {
                match n.number() {
                    Some(Number::Int(k)) => Outcome::Label(s.repeat(k.max(0) as usize)),
                    _ => Outcome::Real(f64::NAN),
                }
            }
            _ => match (a.number(), b.number()) {
                (Some(Number::Int(x)), Some(Number::Int(y))) => self
                    .integers(x, y)
                    .map(Outcome::Int)
                    .unwrap_or_else(|| Outcome::Real(self.reals(x as f64, y as f64))),
                (Some(x), Some(y)) => Outcome::Real(self.reals(x.real(), y.real())),
                _ => Outcome::Real(f64::NAN),
            },
        }
    }
    /// None on overflow.
    fn integers(&self, x: i64, y: i64) -> Option<i64> {
        match self {
            Op::Add => x.checked_add(y),
            Op::Sub => x.checked_sub(y),
            Op::Mul => x.checked_mul(y),
            _ => None,
        }
    }
    fn reals(&self, x: f64, y: f64) -> f64 {
        match self {
            Op::Add => x + y,
            Op::Sub => x - y,
            Op::Mul => x * y,
            _ => f64::NAN,
        }
    }
}

impl TryFrom<&str> for Op {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::table()
            .get(s.trim())
            .copied()
            .ok_or_else(|| anyhow::anyhow!("unknown operation: {}", s))
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Right-hand side of a binary operation: either another distribution
/// (convolved against) or a constant (mapped over).
#[derive(Debug, Clone)]
pub enum Operand<'a> {
    Distribution(&'a Distribution<Outcome>),
    Constant(Outcome),
}

impl<'a> From<&'a Distribution<Outcome>> for Operand<'a> {
    fn from(d: &'a Distribution<Outcome>) -> Self {
        Self::Distribution(d)
    }
}
impl From<Outcome> for Operand<'_> {
    fn from(o: Outcome) -> Self {
        Self::Constant(o)
    }
}
impl From<bool> for Operand<'_> {
    fn from(b: bool) -> Self {
        Self::Constant(Outcome::from(b))
    }
}
impl From<i64> for Operand<'_> {
    fn from(i: i64) -> Self {
        Self::Constant(Outcome::from(i))
    }
}
impl From<i32> for Operand<'_> {
    fn from(i: i32) -> Self {
        Self::Constant(Outcome::from(i))
    }
}
impl From<f64> for Operand<'_> {
    fn from(r: f64) -> Self {
        Self::Constant(Outcome::from(r))
    }
}
impl From<&str> for Operand<'_> {
    fn from(s: &str) -> Self {
        Self::Constant(Outcome::from(s))
    }
}
impl From<String> for Operand<'_> {
    fn from(s: String) -> Self {
        Self::Constant(Outcome::from(s))
    }
}

impl Distribution<Outcome> {
    /// Lifts `op` to distributions.
    ///
    /// Against another distribution this is a convolution over all
    /// outcome pairs; against a constant it maps every outcome `v` to
    /// `op(v, constant)`.
    pub fn dispatch<'a>(&self, op: Op, other: impl Into<Operand<'a>>) -> Self {
        match other.into() {
            Operand::Distribution(d) => self.convolve(d, |a, b| op.apply(a, b)),
            Operand::Constant(ref c) => self.map(|a| op.apply(a, c)),
        }
    }
    pub fn add<'a>(&self, other: impl Into<Operand<'a>>) -> Self {
        self.dispatch(Op::Add, other)
    }
    pub fn sub<'a>(&self, other: impl Into<Operand<'a>>) -> Self {
        self.dispatch(Op::Sub, other)
    }
    pub fn mul<'a>(&self, other: impl Into<Operand<'a>>) -> Self {
        self.dispatch(Op::Mul, other)
    }
    pub fn div<'a>(&self, other: impl Into<Operand<'a>>) -> Self {
        self.dispatch(Op::Div, other)
    }
    pub fn lt<'a>(&self, other: impl Into<Operand<'a>>) -> Self {
        self.dispatch(Op::Lt, other)
    }
    pub fn le<'a>(&self, other: impl Into<Operand<'a>>) -> Self {
        self.dispatch(Op::Le, other)
    }
    pub fn gt<'a>(&self, other: impl Into<Operand<'a>>) -> Self {
        self.dispatch(Op::Gt, other)
    }
    pub fn ge<'a>(&self, other: impl Into<Operand<'a>>) -> Self {
        self.dispatch(Op::Ge, other)
    }
    pub fn eq<'a>(&self, other: impl Into<Operand<'a>>) -> Self {
        self.dispatch(Op::Eq, other)
    }
    pub fn ne<'a>(&self, other: impl Into<Operand<'a>>) -> Self {
        self.dispatch(Op::Ne, other)
    }
}

/// std::ops overloads for owned and borrowed distributions,
/// against distributions and scalar constants.
macro_rules! overload {
    ($trait:ident, $method:ident, $op:expr; $($scalar:ty),*) => {
        impl std::ops::$trait<&Distribution<Outcome>> for &Distribution<Outcome> {
            type Output = Distribution<Outcome>;
            fn $method(self, rhs: &Distribution<Outcome>) -> Self::Output {
                self.dispatch($op, rhs)
            }
        }
        impl std::ops::$trait<Distribution<Outcome>> for &Distribution<Outcome> {
            type Output = Distribution<Outcome>;
            fn $method(self, ref rhs: Distribution<Outcome>) -> Self::Output {
                self.dispatch($op, rhs)
            }
        }
        impl std::ops::$trait<&Distribution<Outcome>> for Distribution<Outcome> {
            type Output = Distribution<Outcome>;
            fn $method(self, rhs: &Distribution<Outcome>) -> Self::Output {
                self.dispatch($op, rhs)
            }
        }
        impl std::ops::$trait<Distribution<Outcome>> for Distribution<Outcome> {
            type Output = Distribution<Outcome>;
            fn $method(self, ref rhs: Distribution<Outcome>) -> Self::Output {
                self.dispatch($op, rhs)
            }
        }
        $(
            impl std::ops::$trait<$scalar> for &Distribution<Outcome> {
                type Output = Distribution<Outcome>;
                fn $method(self, rhs: $scalar) -> Self::Output {
                    self.dispatch($op, rhs)
                }
            }
            impl std::ops::$trait<$scalar> for Distribution<Outcome> {
                type Output = Distribution<Outcome>;
                fn $method(self, rhs: $scalar) -> Self::Output {
                    self.dispatch($op, rhs)
                }
            }
        )*
    };
}

overload!(Add, add, Op::Add; i64, f64, Outcome);
overload!(Sub, sub, Op::Sub; i64, f64, Outcome);
overload!(Mul, mul, Op::Mul; i64, f64, Outcome);
overload!(Div, div, Op::Div; i64, f64, Outcome);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Probability;
    use crate::distribution::dice;

    fn close(a: Probability, b: Probability) -> bool {
        (a - b).abs() < 1e-12
    }
    fn int(i: i64) -> Outcome {
        Outcome::Int(i)
    }

    #[test]
    fn is_table_complete() {
        let table = Op::table();
        assert!(table.len() == Op::ALL.len());
        for op in Op::ALL {
            assert!(Op::try_from(op.name()).unwrap() == op);
        }
        assert!(Op::try_from("pow").is_err());
    }

    #[test]
    fn is_greater_than_constant_even() {
        let truth = dice::d6().gt(3);
        assert!(truth.len() == 2);
        assert!(close(truth.density(&Outcome::Bool(true)), 0.5));
        assert!(close(truth.density(&Outcome::Bool(false)), 0.5));
        assert!(truth.to_string() == "Distribution(False: 0.50, True: 0.50)");
    }

    #[test]
    fn is_two_dice_triangular() {
        let sum = dice::d6() + dice::d6();
        let faces = (2..=12).map(int).collect::<Vec<_>>();
        assert!(sum.support().cloned().collect::<Vec<_>>() == faces);
        assert!(close(sum.density(&int(7)), 6. / 36.));
        assert!(close(sum.density(&int(2)), 1. / 36.));
        assert!(close(sum.density(&int(12)), 1. / 36.));
    }

    #[test]
    fn is_doubled_die_uniform() {
        let doubled = dice::d6() * 2;
        let evens = (1..=6).map(|i| int(2 * i)).collect::<Vec<_>>();
        assert!(doubled.support().cloned().collect::<Vec<_>>() == evens);
        assert!(doubled.iter().all(|(_, p)| close(p, 1. / 6.)));
    }

    #[test]
    fn is_unsuffixed_literal_operand() {
        let ref d6 = dice::d6();
        assert!(d6 + 1 == d6.add(1i64));
        assert!(d6 - 1 == d6.sub(1i64));
        assert!(dice::d6() * 3 == d6.mul(3i64));
        assert!(dice::d6() / 4 == d6.div(4i64));
    }

    #[test]
    fn is_scalar_dispatch_map() {
        let ref d6 = dice::d6();
        let shifted = d6 + 1;
        assert!(shifted == d6.map(|x| Op::Add.apply(x, &int(1))));
        assert!(shifted == d6.map(|x| match x {
            Outcome::Int(i) => Outcome::Int(i + 1),
            other => other.clone(),
        }));
    }

    #[test]
    fn is_distribution_dispatch_convolve() {
        let ref d6 = dice::d6();
        assert!(d6 + d6 == d6.convolve(d6, |a, b| Op::Add.apply(a, b)));
        assert!(d6.add(d6) == d6 + d6);
    }

    #[test]
    fn is_division_by_zero_infinite() {
        let zero = Distribution::point(int(0));
        let quotient = zero / 0;
        assert!(quotient.len() == 1);
        assert!(quotient.density(&Outcome::Real(f64::INFINITY)) == 1.);
    }

    #[test]
    fn is_division_by_zero_outcome_infinite() {
        let divisor = Distribution::uniform([int(0), int(2)]);
        let quotient = dice::d4().div(&divisor);
        assert!(close(quotient.density(&Outcome::Real(f64::INFINITY)), 0.5));
        assert!(close(quotient.density(&Outcome::Real(0.5)), 0.125));
    }

    #[test]
    fn is_division_real() {
        let halves = dice::d6() / 2;
        assert!(halves.support().all(|x| matches!(x, Outcome::Real(_))));
        assert!(close(halves.density(&Outcome::Real(1.5)), 1. / 6.));
        assert!(close(halves.density(&int(3)), 1. / 6.));
    }

    #[test]
    fn is_comparison_between_distributions() {
        let ref d6 = dice::d6();
        let wins = d6.gt(d6);
        let ties = d6.eq(d6);
        assert!(close(wins.density(&Outcome::Bool(true)), 15. / 36.));
        assert!(close(ties.density(&Outcome::Bool(true)), 6. / 36.));
        assert!(close(d6.ne(d6).density(&Outcome::Bool(true)), 30. / 36.));
        assert!(close(d6.le(d6).density(&Outcome::Bool(true)), 21. / 36.));
    }

    #[test]
    fn is_every_comparison_boolean() {
        let ref d8 = dice::d8();
        for op in Op::ALL.into_iter().filter(Op::is_comparison) {
            let truth = d8.dispatch(op, 4);
            assert!(truth.support().all(|x| matches!(x, Outcome::Bool(_))));
            assert!(truth.ensure().is_ok());
        }
        assert!(close(d8.lt(4).density(&Outcome::Bool(true)), 3. / 8.));
        assert!(close(d8.ge(4).density(&Outcome::Bool(true)), 5. / 8.));
    }

    #[test]
    fn is_subtraction_symmetric() {
        let ref d6 = dice::d6();
        let diff = d6 - d6;
        assert!(diff.len() == 11);
        assert!(close(diff.density(&int(5)), diff.density(&int(-5))));
        assert!(close(diff.density(&int(0)), 6. / 36.));
    }

    #[test]
    fn is_overflow_promoted() {
        let big = Op::Add.apply(&int(i64::MAX), &int(1));
        assert!(matches!(big, Outcome::Real(r) if r > 9e18));
    }

    #[test]
    fn is_label_arithmetic() {
        let coin = dice::coin();
        let pairs = coin.add(&coin);
        assert!(pairs.len() == 4);
        assert!(close(pairs.density(&Outcome::label("HeadsTails")), 0.25));
        let twice = &coin * 2;
        assert!(close(twice.density(&Outcome::label("HeadsHeads")), 0.5));
        let undefined = &coin - 1;
        assert!(undefined.len() == 1);
        assert!(undefined.support().all(|x| matches!(x, Outcome::Real(r) if r.is_nan())));
    }

    #[test]
    fn is_boolean_arithmetic_integral() {
        let truth = dice::d6().gt(3);
        let count = &truth + &truth;
        assert!(close(count.density(&int(1)), 0.5));
        assert!(close(count.density(&int(2)), 0.25));
    }

    #[test]
    fn is_real_constant_promoting() {
        let shifted = dice::d4() + 0.5;
        assert!(close(shifted.density(&Outcome::Real(1.5)), 0.25));
        assert!(shifted.density(&int(1)) == 0.);
    }

    #[test]
    fn is_constant_label_compared() {
        let heads = dice::coin().eq("Heads");
        assert!(close(heads.density(&Outcome::Bool(true)), 0.5));
    }

    #[test]
    fn is_op_rendered_as_symbol() {
        assert!(Op::Le.to_string() == "<=");
        assert!(Op::Div.name() == "div");
    }
}
