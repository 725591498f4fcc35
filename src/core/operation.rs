//! Bidirectional evaluation of binary operators.
//!
//! Each operator can be evaluated forward over concrete operands and solved
//! backwards for a missing operand given the other operand and the result.
//! Backward solutions are produced as a stream of candidates because some
//! operators admit more than one (`x && false == false` holds for both
//! booleans, `x / 2 == 3` holds for 6 and 7).

use crate::core::stream::Stream;
use crate::core::term::Term;
use std::fmt::{self, Display, Formatter};
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    And,
    Or,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("operator `{op}` is not defined for {lhs:?} and {rhs:?}")]
    TypeMismatch { op: BinaryOp, lhs: Term, rhs: Term },
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow in `{0}`")]
    Overflow(BinaryOp),
    #[error("operator `{0}` cannot be inverted")]
    NotInvertible(BinaryOp),
    #[error("`{0}` has infinitely many solutions for the missing operand")]
    Indeterminate(BinaryOp),
}

impl BinaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
        }
    }

    fn mismatch(self, lhs: &Term, rhs: &Term) -> EvalError {
        EvalError::TypeMismatch {
            op: self,
            lhs: lhs.clone(),
            rhs: rhs.clone(),
        }
    }

    /// Evaluate `lhs op rhs` over concrete operands.
    ///
    /// Integer division and remainder truncate toward zero.
    pub fn evaluate(&self, lhs: &Term, rhs: &Term) -> Result<Term, EvalError> {
        use Term::*;
        let op = *self;
        let checked = |r: Option<i64>| r.map(Int).ok_or(EvalError::Overflow(op));
        match (op, lhs, rhs) {
            (BinaryOp::Add, Int(a), Int(b)) => checked(a.checked_add(*b)),
            (BinaryOp::Add, Str(a), Str(b)) => Ok(Str(format!("{}{}", a, b))),
            (BinaryOp::Sub, Int(a), Int(b)) => checked(a.checked_sub(*b)),
            (BinaryOp::Mul, Int(a), Int(b)) => checked(a.checked_mul(*b)),
            (BinaryOp::Div, Int(_), Int(0)) | (BinaryOp::Rem, Int(_), Int(0)) => {
                Err(EvalError::DivisionByZero)
            }
            (BinaryOp::Div, Int(a), Int(b)) => checked(a.checked_div(*b)),
            (BinaryOp::Rem, Int(a), Int(b)) => checked(a.checked_rem(*b)),
            (BinaryOp::And, Bool(a), Bool(b)) => Ok(Bool(*a && *b)),
            (BinaryOp::Or, Bool(a), Bool(b)) => Ok(Bool(*a || *b)),
            _ => Err(op.mismatch(lhs, rhs)),
        }
    }

    /// Solve `x op rhs == result` for `x`.
    pub fn reverse_evaluate_lhs(&self, rhs: &Term, result: &Term) -> Result<Stream<Term>, EvalError> {
        use Term::*;
        let op = *self;
        match (op, rhs, result) {
            (BinaryOp::Add, Int(b), Int(r)) => single(r.checked_sub(*b), op),
            (BinaryOp::Add, Str(b), Str(r)) => Ok(r
                .strip_suffix(b.as_str())
                .map(|a| Stream::singleton(Str(a.to_string())))
                .unwrap_or_default()),
            (BinaryOp::Sub, Int(b), Int(r)) => single(r.checked_add(*b), op),
            (BinaryOp::Mul, Int(b), Int(r)) => quotient_candidates(*r, *b, op),
            (BinaryOp::Div, Int(0), Int(_)) => Err(EvalError::DivisionByZero),
            (BinaryOp::Div, Int(b), Int(r)) => Ok(dividend_candidates(*b, *r)),
            (BinaryOp::Rem, _, _) => Err(EvalError::NotInvertible(op)),
            (BinaryOp::And, Bool(b), Bool(r)) | (BinaryOp::Or, Bool(b), Bool(r)) => {
                Ok(boolean_candidates(op, *b, *r))
            }
            _ => Err(op.mismatch(rhs, result)),
        }
    }

    /// Solve `lhs op x == result` for `x`.
    pub fn reverse_evaluate_rhs(&self, lhs: &Term, result: &Term) -> Result<Stream<Term>, EvalError> {
        use Term::*;
        let op = *self;
        match (op, lhs, result) {
            (BinaryOp::Add, Int(a), Int(r)) => single(r.checked_sub(*a), op),
            (BinaryOp::Add, Str(a), Str(r)) => Ok(r
                .strip_prefix(a.as_str())
                .map(|b| Stream::singleton(Str(b.to_string())))
                .unwrap_or_default()),
            (BinaryOp::Sub, Int(a), Int(r)) => single(a.checked_sub(*r), op),
            (BinaryOp::Mul, Int(a), Int(r)) => quotient_candidates(*r, *a, op),
            (BinaryOp::Div, Int(_), Int(0)) => Err(EvalError::Indeterminate(op)),
            (BinaryOp::Div, Int(a), Int(r)) => Ok(divisor_candidates(*a, *r)),
            (BinaryOp::Rem, _, _) => Err(EvalError::NotInvertible(op)),
            // `&&` and `||` are commutative
            (BinaryOp::And, Bool(a), Bool(r)) | (BinaryOp::Or, Bool(a), Bool(r)) => {
                Ok(boolean_candidates(op, *a, *r))
            }
            _ => Err(op.mismatch(lhs, result)),
        }
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

fn single(x: Option<i64>, op: BinaryOp) -> Result<Stream<Term>, EvalError> {
    x.map(|x| Stream::singleton(Term::Int(x)))
        .ok_or(EvalError::Overflow(op))
}

/// Solutions of `x * factor == product`.
fn quotient_candidates(product: i64, factor: i64, op: BinaryOp) -> Result<Stream<Term>, EvalError> {
    if factor == 0 {
        return if product == 0 {
            Err(EvalError::Indeterminate(op))
        } else {
            Ok(Stream::Empty)
        };
    }
    match product.checked_rem(factor) {
        Some(0) => single(product.checked_div(factor), op),
        Some(_) => Ok(Stream::Empty),
        None => Err(EvalError::Overflow(op)),
    }
}

/// Solutions of `x / divisor == quotient`, nearest to `quotient * divisor` first.
fn dividend_candidates(divisor: i64, quotient: i64) -> Stream<Term> {
    let base = match quotient.checked_mul(divisor) {
        Some(base) => base,
        None => return Stream::Empty,
    };
    let spread = divisor.unsigned_abs() - 1;
    let offsets = (0..=spread).flat_map(|r| {
        let r = r as i128;
        if r == 0 {
            vec![0]
        } else {
            vec![r, -r]
        }
    });
    Stream::lazy(
        offsets
            .filter_map(move |r| i64::try_from(base as i128 + r).ok())
            .filter(move |x| x.checked_div(divisor) == Some(quotient))
            .map(Term::Int),
    )
}

/// Solutions of `dividend / x == quotient` for a nonzero quotient, in increasing magnitude.
fn divisor_candidates(dividend: i64, quotient: i64) -> Stream<Term> {
    let n = dividend.unsigned_abs();
    let q = quotient.unsigned_abs();
    let hi = n / q;
    let lo = n / (q + 1) + 1;
    let negative = (dividend < 0) != (quotient < 0);
    Stream::lazy(
        (lo..=hi)
            .filter_map(move |m| with_sign(m, negative))
            .filter(move |x| dividend.checked_div(*x) == Some(quotient))
            .map(Term::Int),
    )
}

/// `-m` or `m` as `i64`, if it fits. `i64::MIN` has no positive counterpart.
fn with_sign(m: u64, negative: bool) -> Option<i64> {
    let m = i128::from(m);
    i64::try_from(if negative { -m } else { m }).ok()
}

/// Solutions of `x op known == result` for `&&` and `||`, `false` before `true`.
fn boolean_candidates(op: BinaryOp, known: bool, result: bool) -> Stream<Term> {
    let candidates: Vec<bool> = [false, true]
        .into_iter()
        .filter(|&x| match op {
            BinaryOp::And => (x && known) == result,
            _ => (x || known) == result,
        })
        .collect();
    candidates.into_iter().map(Term::Bool).collect()
}
