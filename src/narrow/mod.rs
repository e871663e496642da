/*!
Narrowing primitives: one contractor per relation.

Each narrower takes the current domains of a relation's variables and
returns domains contracted toward the smallest box consistent with the
relation, without ever removing a solution. Failure ([`Infeasible`]) is
the kernel's only signal that the relation cannot hold; it is a normal
outcome, not an error condition.

The host drives narrowing through [`eval_node`], which dispatches on a
closed [`Op`] set, or by calling the per-relation functions directly.
Argument tuples are result-first: a relation `Z = f(X, Y)` is passed as
`(Z, X, Y)` and a boolean relation `Z = (X op Y)` likewise carries its
boolean first. `integral` is unary.

[`Infeasible`]: crate::interval::Infeasible
*/

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use crate::interval::{Infeasible, Interval, NarrowResult};
use crate::stats;

mod arith;
mod boolean;
mod compare;
mod trig;

pub use arith::{abs, add, exp, integral, max, min, minus, mul, pow};
pub use boolean::{and, implies, nand, nor, not, or, xor};
pub use compare::{eq, le, lt, ne, sub};
pub use trig::{cos, sin, tan};

/// The closed set of narrowing operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    Integral,
    Eq,
    Ne,
    Le,
    Lt,
    Sub,
    Add,
    Mul,
    Min,
    Max,
    Abs,
    Minus,
    Exp,
    Pow,
    Sin,
    Cos,
    Tan,
    Not,
    And,
    Or,
    Xor,
    Nand,
    Nor,
    ImB,
}

impl Op {
    /// Wire name of the operation.
    pub fn name(self) -> &'static str {
        match self {
            Op::Integral => "integral",
            Op::Eq => "eq",
            Op::Ne => "ne",
            Op::Le => "le",
            Op::Lt => "lt",
            Op::Sub => "sub",
            Op::Add => "add",
            Op::Mul => "mul",
            Op::Min => "min",
            Op::Max => "max",
            Op::Abs => "abs",
            Op::Minus => "minus",
            Op::Exp => "exp",
            Op::Pow => "pow",
            Op::Sin => "sin",
            Op::Cos => "cos",
            Op::Tan => "tan",
            Op::Not => "not",
            Op::And => "and",
            Op::Or => "or",
            Op::Xor => "xor",
            Op::Nand => "nand",
            Op::Nor => "nor",
            Op::ImB => "imB",
        }
    }

    /// Number of intervals the operation narrows.
    pub fn arity(self) -> usize {
        match self {
            Op::Integral => 1,
            Op::Abs | Op::Minus | Op::Exp | Op::Sin | Op::Cos | Op::Tan | Op::Not => 2,
            _ => 3,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error produced when parsing an unrecognized operation name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownOp;

impl fmt::Display for UnknownOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown narrowing operation")
    }
}

impl std::error::Error for UnknownOp {}

impl FromStr for Op {
    type Err = UnknownOp;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "integral" => Ok(Op::Integral),
            "eq" => Ok(Op::Eq),
            "ne" => Ok(Op::Ne),
            "le" => Ok(Op::Le),
            "lt" => Ok(Op::Lt),
            "sub" => Ok(Op::Sub),
            "add" => Ok(Op::Add),
            "mul" => Ok(Op::Mul),
            "min" => Ok(Op::Min),
            "max" => Ok(Op::Max),
            "abs" => Ok(Op::Abs),
            "minus" => Ok(Op::Minus),
            "exp" => Ok(Op::Exp),
            "pow" => Ok(Op::Pow),
            "sin" => Ok(Op::Sin),
            "cos" => Ok(Op::Cos),
            "tan" => Ok(Op::Tan),
            "not" => Ok(Op::Not),
            "and" => Ok(Op::And),
            "or" => Ok(Op::Or),
            "xor" => Ok(Op::Xor),
            "nand" => Ok(Op::Nand),
            "nor" => Ok(Op::Nor),
            "imB" => Ok(Op::ImB),
            _ => Err(UnknownOp),
        }
    }
}

/// Per-call flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Params {
    /// The host already settled the truth of this relation; the
    /// narrower may finalize the boolean result accordingly, and the
    /// settled status is echoed back in [`Narrowed::persistent`].
    pub persistent: bool,
}

/// Result of one narrowing step.
#[derive(Clone, Debug, PartialEq)]
pub struct Narrowed {
    /// Contracted domains, in the same order as the inputs.
    pub vals: Vec<Interval>,
    /// True when the relation's truth can no longer change under
    /// further contraction, so the host may retire the constraint.
    pub persistent: bool,
}

/// Dispatches one narrowing step on `op`.
///
/// `inputs` must match `op.arity()`; a malformed call is reported as
/// infeasibility per the kernel's error policy. Statistics are updated
/// on every call.
pub fn eval_node(op: Op, params: Params, inputs: &[Interval]) -> NarrowResult<Narrowed> {
    let started = Instant::now();
    stats::record_call();
    let out = dispatch(op, params, inputs);
    if out.is_err() {
        stats::record_fail();
    }
    stats::record_time(started.elapsed());
    out
}

fn dispatch(op: Op, params: Params, inputs: &[Interval]) -> NarrowResult<Narrowed> {
    if inputs.len() != op.arity() {
        return Err(Infeasible);
    }
    match op {
        Op::Integral => integral(inputs[0]).map(|x| fixed(vec![x])),
        Op::Eq => eq(inputs[0], inputs[1], inputs[2]).map(|r| settled(params, r)),
        Op::Ne => ne(inputs[0], inputs[1], inputs[2]).map(|r| settled(params, r)),
        Op::Le => le(inputs[0], inputs[1], inputs[2]).map(|r| settled(params, r)),
        Op::Lt => lt(inputs[0], inputs[1], inputs[2]).map(|r| settled(params, r)),
        Op::Sub => sub(inputs[0], inputs[1], inputs[2]).map(|r| settled(params, r)),
        Op::Add => add(inputs[0], inputs[1], inputs[2]).map(triple),
        Op::Mul => mul(inputs[0], inputs[1], inputs[2]).map(triple),
        Op::Min => min(inputs[0], inputs[1], inputs[2]).map(triple),
        Op::Max => max(inputs[0], inputs[1], inputs[2]).map(triple),
        Op::Abs => abs(inputs[0], inputs[1]).map(pair),
        Op::Minus => minus(inputs[0], inputs[1]).map(pair),
        Op::Exp => exp(inputs[0], inputs[1]).map(pair),
        Op::Pow => pow(inputs[0], inputs[1], inputs[2]).map(triple),
        Op::Sin => sin(inputs[0], inputs[1]).map(pair),
        Op::Cos => cos(inputs[0], inputs[1]).map(pair),
        Op::Tan => tan(inputs[0], inputs[1]).map(pair),
        Op::Not => not(inputs[0], inputs[1]).map(|r| settled_pair(params, r)),
        Op::And => and(inputs[0], inputs[1], inputs[2]).map(|r| settled(params, r)),
        Op::Or => or(inputs[0], inputs[1], inputs[2]).map(|r| settled(params, r)),
        Op::Xor => xor(inputs[0], inputs[1], inputs[2]).map(|r| settled(params, r)),
        Op::Nand => nand(inputs[0], inputs[1], inputs[2]).map(|r| settled(params, r)),
        Op::Nor => nor(inputs[0], inputs[1], inputs[2]).map(|r| settled(params, r)),
        Op::ImB => implies(inputs[0], inputs[1], inputs[2]).map(|r| settled(params, r)),
    }
}

fn fixed(vals: Vec<Interval>) -> Narrowed {
    Narrowed {
        vals,
        persistent: false,
    }
}

fn pair((z, x): (Interval, Interval)) -> Narrowed {
    fixed(vec![z, x])
}

fn triple((z, x, y): (Interval, Interval, Interval)) -> Narrowed {
    fixed(vec![z, x, y])
}

fn settled(params: Params, ((z, x, y), persistent): ((Interval, Interval, Interval), bool)) -> Narrowed {
    Narrowed {
        vals: vec![z, x, y],
        persistent: persistent || params.persistent,
    }
}

fn settled_pair(params: Params, ((z, x), persistent): ((Interval, Interval), bool)) -> Narrowed {
    Narrowed {
        vals: vec![z, x],
        persistent: persistent || params.persistent,
    }
}
