//! Signed byte comparison without comparison operators.
//!
//! Only `&` and `<<` are used on the operands. A set top bit means negative, so
//! when the signs differ the non-negative byte wins outright. When the signs
//! match, the shared sign bit adds the same -128 (or nothing) to both sides and
//! the remaining seven bits are ordered like plain unsigned bits.

use std::fmt;

use crate::bits::MSB;
use crate::trace::Trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    First,
    Second,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// Exactly one input was negative.
    Sign,
    /// First differing bit below the sign, by place value (64 down to 1).
    Bit(u8),
    /// Every bit matched. The first argument wins ties.
    Equal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub winner: Winner,
    pub reason: Reason,
}

impl Decision {
    fn new(winner: Winner, reason: Reason) -> Self {
        Decision { winner, reason }
    }

    pub fn pick(&self, a: i8, b: i8) -> i8 {
        match self.winner {
            Winner::First => a,
            Winner::Second => b,
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::Sign => write!(f, "sign bit"),
            Reason::Bit(place) => write!(f, "bit {}", place),
            Reason::Equal => write!(f, "equal"),
        }
    }
}

/// Decide which of two signed bytes is larger, and why.
pub fn compare(a: i8, b: i8, trace: &Trace) -> Decision {
    let sign_a = MSB & a as u8;
    let sign_b = MSB & b as u8;
    trace.log(format_args!("sign bits: {} {}", sign_a, sign_b));

    match (sign_a, sign_b) {
        (0, MSB) => return Decision::new(Winner::First, Reason::Sign),
        (MSB, 0) => return Decision::new(Winner::Second, Reason::Sign),
        _ => (),
    }

    trace.log("same sign, scanning remaining bits");

    let mut shifted_a = a as u8;
    let mut shifted_b = b as u8;
    // place value of the bit currently sitting in the MSB slot
    let mut place = MSB;
    while shifted_a != 0 || shifted_b != 0 {
        shifted_a <<= 1;
        shifted_b <<= 1;
        place >>= 1;
        trace.log(format_args!(
            "place {:3}: {:08b} {:08b}",
            place, shifted_a, shifted_b
        ));

        match (MSB & shifted_a, MSB & shifted_b) {
            (0, MSB) => return Decision::new(Winner::Second, Reason::Bit(place)),
            (MSB, 0) => return Decision::new(Winner::First, Reason::Bit(place)),
            _ => (),
        }
    }

    trace.log("equal values");
    Decision::new(Winner::First, Reason::Equal)
}

/// The larger of `a` and `b`; `a` when they are equal.
pub fn bigger(a: i8, b: i8, trace: &Trace) -> i8 {
    compare(a, b, trace).pick(a, b)
}
